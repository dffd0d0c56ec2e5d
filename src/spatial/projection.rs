//! Rescaling of attractor points into raster pixel coordinates

use crate::io::configuration::PROJECTION_DIVISOR;
use crate::math::Point;

/// Target raster dimensions in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RasterSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl RasterSize {
    /// Create a raster size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Square raster with the given edge length
    pub const fn square(edge: u32) -> Self {
        Self::new(edge, edge)
    }
}

/// Integer pixel position, meaningful only relative to a [`RasterSize`]
///
/// May lie outside the raster; clipping is the rasterizer's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PixelCoordinate {
    /// Column
    pub x: i64,
    /// Row
    pub y: i64,
}

impl PixelCoordinate {
    /// Create a pixel coordinate
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Scale applied to attractor coordinates for a given raster
pub fn scale_factor(size: RasterSize) -> f64 {
    f64::from(size.width.min(size.height)) / PROJECTION_DIVISOR
}

/// Map a single point into pixel space
///
/// Centers horizontally and floors both axes. No vertical flip is applied,
/// so the fern grows towards increasing rows.
pub fn project_point(point: Point, factor: f64, size: RasterSize) -> PixelCoordinate {
    let half_width = f64::from(size.width) / 2.0;
    // Saturating casts; non-finite input from divergent maps lands far off-raster or at 0
    PixelCoordinate::new(
        point.x.mul_add(factor, half_width).floor() as i64,
        (point.y * factor).floor() as i64,
    )
}

/// Lazily project a point sequence onto a raster of the given size
///
/// Order-preserving and cardinality-preserving; coordinates are not clamped.
pub fn project<I>(points: I, size: RasterSize) -> impl Iterator<Item = PixelCoordinate>
where
    I: IntoIterator<Item = Point>,
{
    let factor = scale_factor(size);
    points
        .into_iter()
        .map(move |point| project_point(point, factor, size))
}
