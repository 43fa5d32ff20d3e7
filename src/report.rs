//! Check Reports
//!
//! Runs one format over many inputs and collects pass/fail per input.

use serde::Serialize;
use serde_json::Value;

use crate::catalog::{Catalog, Format};

/// Outcome for one input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckEntry {
    /// 1-based position of the input (line number for text input)
    pub line: usize,
    pub value: Value,
    pub valid: bool,
}

/// Outcomes for a batch of inputs checked against one format
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub format: String,
    pub profile: String,
    pub entries: Vec<CheckEntry>,
}

impl CheckReport {
    fn new(format: Format, catalog: &Catalog) -> Self {
        Self {
            format: format.name().to_string(),
            profile: catalog.profile_name().to_string(),
            entries: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(|e| e.valid)
    }

    pub fn invalid_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.valid).count()
    }
}

/// Check each value in order
pub fn check_values<I, S>(values: I, format: Format, catalog: &Catalog) -> CheckReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = CheckReport::new(format, catalog);
    for (i, value) in values.into_iter().enumerate() {
        let value = value.as_ref();
        report.entries.push(CheckEntry {
            line: i + 1,
            value: Value::String(value.to_string()),
            valid: catalog.check(format, value),
        });
    }
    report
}

/// Check each non-empty line of a document; line numbers are kept
pub fn check_document(content: &str, format: Format, catalog: &Catalog) -> CheckReport {
    let mut report = CheckReport::new(format, catalog);
    for (i, line) in content.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        report.entries.push(CheckEntry {
            line: i + 1,
            value: Value::String(line.to_string()),
            valid: catalog.check(format, line),
        });
    }
    report
}

/// Check the elements of a JSON array, or a single JSON value
///
/// Elements that are not strings are reported invalid.
pub fn check_json(input: &Value, format: Format, catalog: &Catalog) -> CheckReport {
    let mut report = CheckReport::new(format, catalog);
    let elements = match input {
        Value::Array(items) => items.as_slice(),
        single => std::slice::from_ref(single),
    };
    for (i, element) in elements.iter().enumerate() {
        report.entries.push(CheckEntry {
            line: i + 1,
            value: element.clone(),
            valid: catalog.check_value(format, element),
        });
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_values() {
        let report = check_values(["13800138000", "12345678901"], Format::Phone, Catalog::builtin());
        assert_eq!(report.format, "phone");
        assert_eq!(report.profile, "default");
        assert_eq!(report.entries.len(), 2);
        assert!(report.entries[0].valid);
        assert!(!report.entries[1].valid);
        assert_eq!(report.entries[1].line, 2);
        assert!(!report.is_valid());
        assert_eq!(report.invalid_count(), 1);
    }

    #[test]
    fn test_check_document_skips_empty_lines() {
        let content = "abc\n\nABC\ndef\n";
        let report = check_document(content, Format::LowerCase, Catalog::builtin());
        let lines: Vec<usize> = report.entries.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![1, 3, 4]);
        assert_eq!(report.invalid_count(), 1);
    }

    #[test]
    fn test_check_json_non_strings_invalid() {
        let input = json!(["user@example.com", 42, null, ["user@example.com"]]);
        let report = check_json(&input, Format::Email, Catalog::builtin());
        let valid: Vec<bool> = report.entries.iter().map(|e| e.valid).collect();
        assert_eq!(valid, vec![true, false, false, false]);
        assert_eq!(report.entries[1].value, json!(42));
    }

    #[test]
    fn test_check_json_single_value() {
        let report = check_json(&json!("ABC"), Format::UpperCase, Catalog::builtin());
        assert_eq!(report.entries.len(), 1);
        assert!(report.is_valid());
    }

    #[test]
    fn test_empty_report_is_valid() {
        let report = check_values(Vec::<String>::new(), Format::Bank, Catalog::builtin());
        assert!(report.is_valid());
    }

    #[test]
    fn test_report_serializes() {
        let report = check_values(["abc"], Format::Alphabets, Catalog::builtin());
        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(
            json,
            json!({
                "format": "alphabets",
                "profile": "default",
                "entries": [{ "line": 1, "value": "abc", "valid": true }]
            })
        );
    }
}
