//! Geometry on validated triangles
//!
//! - **measure**: perimeter, area, angles and the right-angle test
//! - **coords**: building triangles from vertex coordinates

pub mod coords;
pub mod measure;

pub use coords::Point2D;
