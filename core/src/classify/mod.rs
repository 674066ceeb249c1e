//! Triangle classification
//!
//! - **kind**: the [`TriangleKind`] result enum
//! - **triangle**: validation, classification and the validated [`Triangle`] type

mod kind;
mod triangle;

pub(crate) use triangle::reject;

pub use kind::{ParseKindError, TriangleKind};
pub use triangle::{
    classify, distinct_sides, sort_sides, validate, Side, Triangle, TriangleError,
    TriangleResult, Violation,
};
