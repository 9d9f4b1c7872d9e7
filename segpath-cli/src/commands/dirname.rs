//! Command to print the directory part of a path.

use crate::error::CliError;
use crate::utils::{emit, load_configuration, GlobalOptions};
use clap::Args;
use segpath::output::Report;
use segpath::path::directory_name;

/// Print every component except the last.
///
/// Prints nothing if the path has fewer than two components.
#[derive(Args)]
pub struct DirnameCommand {
    /// Path to slice
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl DirnameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let result = directory_name(&self.path);
        emit(&config, &Report::new([self.path], result))
    }
}
