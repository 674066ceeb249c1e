//! Classification reports for batches of problems
//!
//! Reports serialize to JSON for export alongside the problem files.

use crate::classify::TriangleKind;
use crate::loader::TriangleProblem;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while exporting reports
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Outcome of classifying a single problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub id: String,

    pub sides: [f64; 3],

    /// Kind, when the sides form a valid triangle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<TriangleKind>,

    /// Validation error message, when they don't
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Whether `kind` agrees with the problem's expected kind.
    /// `None` when nothing was expected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches_expected: Option<bool>,
}

impl ClassificationReport {
    pub fn is_valid(&self) -> bool {
        self.kind.is_some()
    }

    pub fn is_mismatch(&self) -> bool {
        self.matches_expected == Some(false)
    }
}

/// Classify one problem into a report
pub fn classify_problem(problem: &TriangleProblem) -> ClassificationReport {
    let (kind, error) = match problem.classify() {
        Ok(kind) => (Some(kind), None),
        Err(e) => (None, Some(e.to_string())),
    };

    ClassificationReport {
        id: problem.id.clone(),
        sides: problem.sides,
        kind,
        error,
        matches_expected: problem.expected.map(|expected| kind == Some(expected)),
    }
}

/// Reports for a whole batch plus summary counts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub reports: Vec<ClassificationReport>,
    pub valid: usize,
    pub invalid: usize,
    pub mismatches: usize,
}

impl BatchReport {
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Every problem with an expected kind got it
    pub fn all_match(&self) -> bool {
        self.mismatches == 0
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> ReportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> ReportResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write pretty-printed JSON to a file
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> ReportResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl FromIterator<ClassificationReport> for BatchReport {
    fn from_iter<I: IntoIterator<Item = ClassificationReport>>(iter: I) -> Self {
        let mut batch = BatchReport::default();

        for report in iter {
            if report.is_valid() {
                batch.valid += 1;
            } else {
                batch.invalid += 1;
            }
            if report.is_mismatch() {
                batch.mismatches += 1;
            }
            batch.reports.push(report);
        }

        batch
    }
}

/// Classify every problem in a batch
pub fn classify_batch(problems: &[TriangleProblem]) -> BatchReport {
    problems.iter().map(classify_problem).collect()
}
