//! Command to print the last component of a path.

use crate::error::CliError;
use crate::utils::{emit, load_configuration, GlobalOptions};
use clap::Args;
use segpath::output::Report;
use segpath::path::entity_name;

/// Print the last component.
#[derive(Args)]
pub struct BasenameCommand {
    /// Path to slice
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Drop everything from the last `.` onward
    #[arg(long, short = 's')]
    pub strip_extension: bool,
}

impl BasenameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let result = entity_name(&self.path, self.strip_extension).map(str::to_string);
        emit(&config, &Report::new([self.path], result))
    }
}
