//! Command to print the extension of a path.

use crate::error::CliError;
use crate::utils::{emit, load_configuration, GlobalOptions};
use clap::Args;
use segpath::output::Report;
use segpath::path::extension_name;

/// Print the extension of the last component.
///
/// Prints nothing if the last component has no `.`.
#[derive(Args)]
pub struct ExtnameCommand {
    /// Path to slice
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl ExtnameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let result = extension_name(&self.path).map(str::to_string);
        emit(&config, &Report::new([self.path], result))
    }
}
