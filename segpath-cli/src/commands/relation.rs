//! Relation command implementation.

use crate::error::CliError;
use crate::utils::{emit, load_configuration, scope, GlobalOptions};
use clap::Args;
use segpath::output::Report;
use segpath::path::Relationship;

/// Describe how two paths relate.
#[derive(Args)]
pub struct RelationCommand {
    /// First path
    #[arg(value_name = "A")]
    pub first: String,

    /// Second path
    #[arg(value_name = "B")]
    pub second: String,
}

impl RelationCommand {
    /// Execute the relation command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let base = scope(&config)?;

        let first = base.within([&self.first])?.resolved();
        let second = base.within([&self.second])?.resolved();

        let relationship = Relationship::between(&first, &second);
        let report = Report::new([self.first, self.second], Some(relationship.as_str().to_string()))
            .with_detail(relationship.description(&first, &second));

        emit(&config, &report)
    }
}
