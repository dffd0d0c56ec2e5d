//! Pixel-space handling of generated points
//!
//! This module contains:
//! - Projection of attractor points into raster coordinates
//! - Deduplicating rasterization onto a coverage canvas

/// Point to pixel rescaling and centering
pub mod projection;
/// Pixel deduplication and canvas rendering
pub mod raster;

pub use projection::{PixelCoordinate, RasterSize};
pub use raster::Canvas;
