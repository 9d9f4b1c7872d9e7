//! Output formatting for command results.
//!
//! Every command produces a [`Report`]: the inputs it was given and the
//! value it computed, if any. An [`OutputFormatter`] renders that report
//! as plain text or as JSON.

mod formatters;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

pub use formatters::{JsonFormatter, TextFormatter};

/// Trait for formatting command results into different output formats.
pub trait OutputFormatter {
    /// Format the given report into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be serialized.
    fn format(&self, report: &Report) -> Result<String>;
}

/// The outcome of one command.
///
/// # Examples
///
/// ```
/// use segpath::output::Report;
///
/// let report = Report::new(["a", "../b"], Some("b".to_string()));
/// assert_eq!(report.result.as_deref(), Some("b"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Arguments the result was computed from.
    pub input: Vec<String>,

    /// The computed value. `None` when the operation has no answer, such
    /// as the extension of a name without a dot.
    pub result: Option<String>,

    /// Human-readable form of the result, preferred by the text formatter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Report {
    /// Create a report with no detail line.
    pub fn new<I, S>(input: I, result: Option<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            result,
            detail: None,
        }
    }

    /// Attach a human-readable description.
    #[must_use]
    pub fn with_detail(mut self, detail: String) -> Self {
        self.detail = Some(detail);
        self
    }
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}
