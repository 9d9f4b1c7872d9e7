//! Relative command implementation.
//!
//! This module implements the `relative` command, which prints the path
//! that leads from one location to another.

use crate::error::CliError;
use crate::utils::{emit, ensure_within, load_configuration, scope, GlobalOptions};
use clap::Args;
use segpath::output::Report;

/// Compute the relative path between two paths.
#[derive(Args)]
pub struct RelativeCommand {
    /// Starting path
    #[arg(value_name = "FROM")]
    pub from: String,

    /// Target path
    #[arg(value_name = "TO")]
    pub to: String,
}

impl RelativeCommand {
    /// Execute the relative command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global)?;
        let base = scope(&config)?;

        // 2. Both ends must stay within the base when confined
        ensure_within(&config, &base, &base.path([&self.from])?)?;
        ensure_within(&config, &base, &base.path([&self.to])?)?;

        // 3. Compute within the base
        let relative = base.relative_within([&self.from], [&self.to])?;

        // 4. Output
        emit(&config, &Report::new([self.from, self.to], Some(relative)))
    }
}
