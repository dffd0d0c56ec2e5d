//! Chaos-game renderer for a four-transform Barnsley fern variant
//!
//! Points are generated by repeatedly applying one of four affine maps,
//! chosen by cumulative probability threshold, to a running point that
//! starts at the origin. The fourth map is applied to the negated point,
//! which gives this variant its shape. Generated points are projected onto
//! a raster, deduplicated and painted.

#![forbid(unsafe_code)]

/// Point generation: transform selection, memoization and chaos-game chains
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Points and affine maps
pub mod math;
/// Projection into pixel space and rasterization
pub mod spatial;

pub use algorithm::generator::{ChaosGame, generate, generate_seeded};
pub use algorithm::selection::{GenerationConfig, Role, TransformSpec};
pub use io::error::{FernError, Result};
pub use spatial::projection::project;
