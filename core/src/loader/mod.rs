//! Problem loader for batches of triangles
//!
//! Parses triangle problems from JSON, either one problem per file or an
//! array of problems in a single file.

pub mod problems;

use crate::classify::{classify, TriangleKind, TriangleResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use problems::{load_problem, load_problems};

/// A triangle to classify, with an optional expected answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleProblem {
    /// Problem ID
    pub id: String,

    /// Side lengths, in any order
    pub sides: [f64; 3],

    /// Optional: expected kind (for validation). `None` also covers
    /// problems whose sides are expected to be rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<TriangleKind>,
}

impl TriangleProblem {
    pub fn new(id: impl Into<String>, sides: [f64; 3]) -> Self {
        Self {
            id: id.into(),
            sides,
            expected: None,
        }
    }

    pub fn with_expected(mut self, kind: TriangleKind) -> Self {
        self.expected = Some(kind);
        self
    }

    /// Classify this problem's sides
    pub fn classify(&self) -> TriangleResult<TriangleKind> {
        let [a, b, c] = self.sides;
        classify(a, b, c)
    }
}

/// Problem loader result
pub type LoadResult<T> = Result<T, LoadError>;

/// Problem loading errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}
