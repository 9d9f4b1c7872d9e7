//! Resolve command implementation.
//!
//! This module implements the `resolve` command, which normalizes one or
//! more segments into a canonical path within the configured base.

use crate::error::CliError;
use crate::utils::{emit, ensure_within, load_configuration, scope, GlobalOptions};
use clap::Args;
use segpath::output::Report;

/// Resolve segments into a canonical path.
#[derive(Args)]
pub struct ResolveCommand {
    /// Segments to resolve, in order
    #[arg(value_name = "SEGMENTS", required = true)]
    pub segments: Vec<String>,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global)?;
        let base = scope(&config)?;

        // 2. Resolve within the base
        let resolved = base.path(&self.segments)?;
        ensure_within(&config, &base, &resolved)?;

        // 3. Output
        emit(&config, &Report::new(self.segments, Some(resolved)))
    }
}
