//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Normalize segments into a canonical path
//! - `relative`: Compute the relative path between two paths
//! - `relation`: Describe how two paths relate
//! - `dirname`: Print every component except the last
//! - `basename`: Print the last component
//! - `extname`: Print the extension of the last component
//! - `completions`: Generate shell completion scripts

pub mod basename;
pub mod completions;
pub mod dirname;
pub mod extname;
pub mod relation;
pub mod relative;
pub mod resolve;

pub use basename::BasenameCommand;
pub use completions::CompletionsCommand;
pub use dirname::DirnameCommand;
pub use extname::ExtnameCommand;
pub use relation::RelationCommand;
pub use relative::RelativeCommand;
pub use resolve::ResolveCommand;
