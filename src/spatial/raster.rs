//! Deduplicating rasterization of projected pixels

use crate::spatial::projection::{PixelCoordinate, RasterSize};
use bitvec::prelude::*;
use image::{Rgba, RgbaImage, imageops};
use std::collections::HashSet;

/// Collapse a pixel stream into the set of distinct coordinates
///
/// Repeated hits carry no extra weight when painting.
pub fn distinct_pixels<I>(pixels: I) -> HashSet<PixelCoordinate>
where
    I: IntoIterator<Item = PixelCoordinate>,
{
    pixels.into_iter().collect()
}

/// Fixed-size coverage mask of lit pixels
///
/// Setting a bit is idempotent, so plotting is inherently deduplicating.
/// Coordinates outside the raster are clipped.
#[derive(Clone, Debug)]
pub struct Canvas {
    size: RasterSize,
    coverage: BitVec,
}

impl Canvas {
    /// Create a canvas with no pixels lit
    pub fn new(size: RasterSize) -> Self {
        Self {
            size,
            coverage: bitvec![0; size.width as usize * size.height as usize],
        }
    }

    /// Raster dimensions
    pub const fn size(&self) -> RasterSize {
        self.size
    }

    fn index(&self, pixel: PixelCoordinate) -> Option<usize> {
        let x = usize::try_from(pixel.x).ok()?;
        let y = usize::try_from(pixel.y).ok()?;
        let width = self.size.width as usize;
        (x < width && y < self.size.height as usize).then_some(y * width + x)
    }

    /// Light a single pixel, returning whether it was newly lit
    pub fn plot_pixel(&mut self, pixel: PixelCoordinate) -> bool {
        self.index(pixel)
            .is_some_and(|index| !self.coverage.replace(index, true))
    }

    /// Light every in-bounds pixel of the stream
    ///
    /// Returns the number of pixels that were newly lit.
    pub fn plot<I>(&mut self, pixels: I) -> usize
    where
        I: IntoIterator<Item = PixelCoordinate>,
    {
        pixels
            .into_iter()
            .filter(|&pixel| self.plot_pixel(pixel))
            .count()
    }

    /// Whether a pixel is lit; off-raster pixels never are
    pub fn is_lit(&self, pixel: PixelCoordinate) -> bool {
        self.index(pixel)
            .and_then(|index| self.coverage.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Number of distinct lit pixels
    pub fn lit_count(&self) -> usize {
        self.coverage.count_ones()
    }

    /// Unlight every pixel
    pub fn clear(&mut self) {
        self.coverage.fill(false);
    }

    /// Paint lit pixels in `foreground` over `background`
    ///
    /// The result is rotated 180° so the fern stands upright for display.
    pub fn render(&self, foreground: [u8; 3], background: [u8; 3]) -> RgbaImage {
        let [fr, fg, fb] = foreground;
        let [br, bg, bb] = background;
        let lit = Rgba([fr, fg, fb, 255]);
        let unlit = Rgba([br, bg, bb, 255]);

        let width = self.size.width;
        let image = RgbaImage::from_fn(width, self.size.height, |x, y| {
            let index = y as usize * width as usize + x as usize;
            if self.coverage.get(index).as_deref() == Some(&true) {
                lit
            } else {
                unlit
            }
        });
        imageops::rotate180(&image)
    }
}
