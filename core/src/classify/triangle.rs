//! Triangle validation and classification
//!
//! Sides are sorted once into `x <= y <= z`. Validation then only needs the
//! smallest side (positivity) and the extremes (strict triangle inequality),
//! and classification only needs to compare neighbours.

use super::kind::TriangleKind;
use num_traits::Zero;
use std::cmp::Ordering;
use std::fmt::Debug;
use thiserror::Error;
use tracing::debug;

/// Numeric types usable as side lengths
///
/// Implemented for the primitive integer and float types.
pub trait Side: Copy + PartialOrd + Zero + Debug {
    /// Whether `self + other > limit`
    ///
    /// Integers treat an overflowing sum as exceeding any limit.
    fn sum_exceeds(self, other: Self, limit: Self) -> bool;
}

macro_rules! integer_side {
    ($($t:ty),*) => {
        $(
            impl Side for $t {
                fn sum_exceeds(self, other: Self, limit: Self) -> bool {
                    match self.checked_add(other) {
                        Some(sum) => sum > limit,
                        None => true,
                    }
                }
            }
        )*
    };
}

macro_rules! float_side {
    ($($t:ty),*) => {
        $(
            impl Side for $t {
                fn sum_exceeds(self, other: Self, limit: Self) -> bool {
                    self + other > limit
                }
            }
        )*
    };
}

integer_side!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_side!(f32, f64);

/// Why a set of sides was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// A side is zero, negative, or not a number
    NonPositiveSide,
    /// The two shorter sides do not sum to more than the longest
    /// (covers the degenerate, zero-area case)
    InequalityViolated,
}

impl Violation {
    fn describe(&self) -> &'static str {
        match self {
            Violation::NonPositiveSide => "every side must be greater than zero",
            Violation::InequalityViolated => {
                "the two shorter sides must sum to more than the longest side"
            }
        }
    }
}

/// Errors produced while validating a triangle
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleError {
    #[error("invalid triangle: {}", .0.describe())]
    InvalidTriangle(Violation),
}

impl TriangleError {
    /// The rule that was broken
    pub fn violation(&self) -> Violation {
        match self {
            TriangleError::InvalidTriangle(v) => *v,
        }
    }
}

/// Result type for triangle operations
pub type TriangleResult<T> = Result<T, TriangleError>;

/// Sort three sides ascending
///
/// Order among incomparable values (NaN) is unspecified; `validate` rejects
/// those before sorting.
pub fn sort_sides<T: Side>(a: T, b: T, c: T) -> [T; 3] {
    let mut sides = [a, b, c];

    if sides[1] < sides[0] {
        sides.swap(0, 1);
    }
    if sides[2] < sides[1] {
        sides.swap(1, 2);
    }
    if sides[1] < sides[0] {
        sides.swap(0, 1);
    }

    sides
}

/// Count distinct values among sides already sorted ascending
pub fn distinct_sides<T: Side>(sorted: &[T; 3]) -> usize {
    let [x, y, z] = *sorted;
    1 + usize::from(x != y) + usize::from(y != z)
}

/// Validate three sides, returning them sorted ascending
pub fn validate<T: Side>(a: T, b: T, c: T) -> TriangleResult<[T; 3]> {
    let zero = T::zero();

    // partial_cmp so that NaN is rejected along with zero and negatives
    let positive = |s: T| s.partial_cmp(&zero) == Some(Ordering::Greater);
    if !(positive(a) && positive(b) && positive(c)) {
        return Err(reject([a, b, c], Violation::NonPositiveSide));
    }

    let sides = sort_sides(a, b, c);
    let [x, y, z] = sides;

    if !x.sum_exceeds(y, z) {
        return Err(reject(sides, Violation::InequalityViolated));
    }

    Ok(sides)
}

pub(crate) fn reject<T: Side>(sides: [T; 3], violation: Violation) -> TriangleError {
    debug!(?sides, ?violation, "rejected triangle");
    TriangleError::InvalidTriangle(violation)
}

/// Classify three side lengths
///
/// Fails with [`TriangleError::InvalidTriangle`] when any side is not
/// positive or the strict triangle inequality does not hold.
///
/// ```
/// use triangle_core::{classify, TriangleKind};
///
/// assert_eq!(classify(3, 4, 5), Ok(TriangleKind::Scalene));
/// assert!(classify(1, 1, 2).is_err());
/// ```
pub fn classify<T: Side>(a: T, b: T, c: T) -> TriangleResult<TriangleKind> {
    Triangle::new(a, b, c).map(|t| t.kind())
}

/// A triangle whose sides passed validation
///
/// Sides are stored in ascending order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<T> {
    sides: [T; 3],
}

impl<T: Side> Triangle<T> {
    /// Validate and build a triangle from three sides in any order
    pub fn new(a: T, b: T, c: T) -> TriangleResult<Self> {
        validate(a, b, c).map(|sides| Triangle { sides })
    }

    /// Classify by number of distinct side lengths
    pub fn kind(&self) -> TriangleKind {
        let distinct = distinct_sides(&self.sides);
        match TriangleKind::from_distinct(distinct) {
            Some(kind) => kind,
            None => unreachable!("three sides have 1..=3 distinct lengths, got {}", distinct),
        }
    }

    /// Sides in ascending order
    pub fn sides(&self) -> [T; 3] {
        self.sides
    }

    pub fn shortest(&self) -> T {
        self.sides[0]
    }

    pub fn longest(&self) -> T {
        self.sides[2]
    }
}

impl<T: Side> TryFrom<[T; 3]> for Triangle<T> {
    type Error = TriangleError;

    fn try_from(sides: [T; 3]) -> TriangleResult<Self> {
        let [a, b, c] = sides;
        Triangle::new(a, b, c)
    }
}
