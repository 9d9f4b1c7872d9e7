//! Output formatter implementations.

use crate::{Error, Result};

use super::{OutputFormatter, Report};

/// Formatter for plain text output.
///
/// Prints the detail line if there is one, otherwise the result. An absent
/// result prints as an empty string.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        Ok(report
            .detail
            .as_deref()
            .or(report.result.as_deref())
            .unwrap_or_default()
            .to_string())
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        serde_json::to_string(report).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn report(result: Option<&str>) -> Report {
        Report::new(["docs/readme.md"], result.map(str::to_string))
    }

    #[test]
    fn test_text_formatter_result() {
        let output = TextFormatter.format(&report(Some("md"))).unwrap();
        assert_eq!(output, "md");
    }

    #[test]
    fn test_text_formatter_absent_result() {
        let output = TextFormatter.format(&report(None)).unwrap();
        assert_eq!(output, "");
    }

    #[test]
    fn test_text_formatter_prefers_detail() {
        let report = report(Some("same")).with_detail("a and a are the same path".to_string());
        assert_eq!(
            TextFormatter.format(&report).unwrap(),
            "a and a are the same path"
        );
    }

    #[test]
    fn test_json_formatter() {
        let output = JsonFormatter.format(&report(Some("md"))).unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["input"][0], "docs/readme.md");
        assert_eq!(parsed["result"], "md");
        assert!(parsed.get("detail").is_none());
    }

    #[test]
    fn test_json_formatter_absent_result_is_null() {
        let output = JsonFormatter.format(&report(None)).unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert!(parsed["result"].is_null());
    }

    #[test]
    fn test_json_formatter_includes_detail() {
        let report = report(Some("ancestor")).with_detail("a is an ancestor of a/b".to_string());
        let output = JsonFormatter.format(&report).unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["detail"], "a is an ancestor of a/b");
    }

    #[test]
    fn test_json_formatter_single_line() {
        let output = JsonFormatter.format(&report(Some("md"))).unwrap();
        assert!(!output.contains('\n'));
    }
}
