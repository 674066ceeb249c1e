//! Triangle classification result

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of a validated triangle, decided by how many side lengths differ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriangleKind {
    /// All three sides equal
    Equilateral,
    /// Exactly two sides equal
    Isosceles,
    /// No two sides equal
    Scalene,
}

/// Kinds indexed by `distinct side count - 1`
const BY_DISTINCT: [TriangleKind; 3] = [
    TriangleKind::Equilateral,
    TriangleKind::Isosceles,
    TriangleKind::Scalene,
];

impl TriangleKind {
    /// Map a count of distinct side lengths (1..=3) to a kind
    ///
    /// Returns `None` for any other count.
    pub fn from_distinct(count: usize) -> Option<Self> {
        count.checked_sub(1).and_then(|i| BY_DISTINCT.get(i)).copied()
    }

    /// Lowercase name, as used in JSON and CLI output
    pub fn as_str(&self) -> &'static str {
        match self {
            TriangleKind::Equilateral => "equilateral",
            TriangleKind::Isosceles => "isosceles",
            TriangleKind::Scalene => "scalene",
        }
    }
}

impl fmt::Display for TriangleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown triangle kind name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown triangle kind: {0}")]
pub struct ParseKindError(pub String);

impl FromStr for TriangleKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "equilateral" => Ok(TriangleKind::Equilateral),
            "isosceles" => Ok(TriangleKind::Isosceles),
            "scalene" => Ok(TriangleKind::Scalene),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}
