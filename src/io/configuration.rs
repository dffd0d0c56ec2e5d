//! Reference parameters and runtime configuration defaults

use crate::algorithm::selection::TransformSpec;
use crate::math::{AffineMap, Point};

// Reference fern. Matrices are row-major.
/// Default parameters of the "first" (stem) transform
pub const DEFAULT_FIRST: TransformSpec = TransformSpec::new(
    AffineMap::new([[0.0, 0.0], [0.0, 0.16]], Point::new(0.0, 0.0)),
    0.01,
);
/// Default parameters of the "second" (successive leaflets) transform
pub const DEFAULT_SECOND: TransformSpec = TransformSpec::new(
    AffineMap::new([[0.85, -0.04], [0.04, 0.85]], Point::new(0.0, 1.6)),
    0.86,
);
/// Default parameters of the "third" (left leaflet) transform
pub const DEFAULT_THIRD: TransformSpec = TransformSpec::new(
    AffineMap::new([[-0.2, 0.23], [0.26, 0.4]], Point::new(0.0, 1.6)),
    0.93,
);
/// Default parameters of the "fourth" (right leaflet) transform
///
/// Its threshold is never consulted; the fourth range is everything above the third threshold.
pub const DEFAULT_FOURTH: TransformSpec = TransformSpec::new(
    AffineMap::new([[-0.15, 0.26], [0.28, 0.24]], Point::new(0.0, 0.44)),
    0.0,
);

/// Default number of generated points
pub const DEFAULT_POINT_COUNT: usize = 100_000;

/// Point count above which rendering cost dominates; exceeding it only warns
pub const SUGGESTED_MAX_POINT_COUNT: usize = 200_000;

/// Capacity of the transform memoization cache
pub const CACHE_CAPACITY: usize = 1024;

/// Divisor turning the smaller raster dimension into a scale factor
///
/// Chosen so the attractor, roughly [-2.5, 2.5] x [0, 10], fills the raster.
pub const PROJECTION_DIVISOR: f64 = 10.5;

/// Default raster edge length in pixels
pub const DEFAULT_RASTER_SIZE: u32 = 720;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of independent generation chains
pub const DEFAULT_CHAINS: usize = 1;

/// Default fern color as `#rrggbb`
pub const DEFAULT_FOREGROUND: &str = "#00ff00";
/// Default canvas color as `#rrggbb`
pub const DEFAULT_BACKGROUND: &str = "#000000";

/// Largest accepted raster width or height in pixels
pub const MAX_RASTER_DIMENSION: u32 = 16_384;

// Output settings
/// Output file name used when none is given
pub const DEFAULT_OUTPUT: &str = "fern.png";
/// Extension appended to output paths that lack it
pub const OUTPUT_EXTENSION: &str = "png";

/// Number of points between progress bar refreshes
pub const PROGRESS_UPDATE_INTERVAL: usize = 4096;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
