//! Triangle Core
//!
//! Validates three side lengths and classifies the triangle they form

pub mod classify; // Validation, classification, TriangleKind
pub mod geometry; // Measurements and coordinate construction
pub mod loader;   // Problem loaders (JSON files and directories)
pub mod report;   // Batch classification reports

pub use classify::{
    classify, validate, Triangle, TriangleError, TriangleKind, TriangleResult, Violation,
};
pub use geometry::Point2D;
pub use loader::{LoadError, LoadResult, TriangleProblem};
pub use report::{classify_batch, classify_problem, BatchReport, ClassificationReport};
