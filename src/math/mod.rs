//! Mathematical primitives for the chaos game

/// Points and affine maps in the plane
pub mod affine;

pub use affine::{AffineMap, Point};
