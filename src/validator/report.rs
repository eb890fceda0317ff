//! Validation results and the textual report

use std::fmt;

use crate::utils::status_code_matcher::is_reachable;

/// Status recorded for one URL; `0` means no response was obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub url: String,
    pub status: u16,
}

impl ValidationResult {
    pub fn new<S: Into<String>>(url: S, status: u16) -> Self {
        Self {
            url: url.into(),
            status,
        }
    }

    pub fn is_ok(&self) -> bool {
        is_reachable(self.status)
    }
}

impl fmt::Display for ValidationResult {
    /// `OK   <url> -> <status>` or `FAIL <url> -> <status>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.is_ok() { "OK  " } else { "FAIL" };
        write!(f, "{label} {} -> {}", self.url, self.status)
    }
}

/// Accumulated outcome of a validation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    pub results: Vec<ValidationResult>,
    pub failures: Vec<ValidationResult>,
}

impl ValidationSummary {
    pub fn record(&mut self, result: ValidationResult) {
        if !result.is_ok() {
            self.failures.push(result.clone());
        }
        self.results.push(result);
    }

    pub fn checked(&self) -> usize {
        self.results.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Process exit code: 0 when every URL was reachable, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        if self.is_success() { 0 } else { 1 }
    }

    /// Final line of the report
    pub fn conclusion(&self) -> String {
        if self.is_success() {
            "All URLs are reachable".to_string()
        } else {
            format!("{} URL(s) failed", self.failures.len())
        }
    }
}
