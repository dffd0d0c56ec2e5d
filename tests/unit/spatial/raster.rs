//! Tests for pixel deduplication, clipping and rotated rendering

#[cfg(test)]
mod tests {
    use barnsley::spatial::projection::{PixelCoordinate, RasterSize};
    use barnsley::spatial::raster::{Canvas, distinct_pixels};
    use image::Rgba;

    // Tests repeated coordinates collapse into one entry
    // Verified by collecting into a Vec
    #[test]
    fn test_distinct_pixels_is_a_set() {
        let pixels = vec![
            PixelCoordinate::new(1, 1),
            PixelCoordinate::new(1, 1),
            PixelCoordinate::new(-3, 7),
        ];

        let set = distinct_pixels(pixels);

        assert_eq!(set.len(), 2);
        assert!(set.contains(&PixelCoordinate::new(-3, 7)));
    }

    // Tests plotting counts only newly lit in-bounds pixels
    // Verified by counting every plotted pixel
    #[test]
    fn test_plot_deduplicates_and_clips() {
        let mut canvas = Canvas::new(RasterSize::new(4, 3));

        let newly_lit = canvas.plot([
            PixelCoordinate::new(0, 0),
            PixelCoordinate::new(0, 0),
            PixelCoordinate::new(3, 2),
            PixelCoordinate::new(4, 0),
            PixelCoordinate::new(0, 3),
            PixelCoordinate::new(-1, 1),
        ]);

        assert_eq!(newly_lit, 2);
        assert_eq!(canvas.lit_count(), 2);
        assert!(canvas.is_lit(PixelCoordinate::new(3, 2)));
        assert!(!canvas.is_lit(PixelCoordinate::new(4, 0)));
        assert!(!canvas.is_lit(PixelCoordinate::new(-1, 1)));

        assert!(!canvas.plot_pixel(PixelCoordinate::new(0, 0)));
        assert!(canvas.plot_pixel(PixelCoordinate::new(1, 1)));
    }

    // Tests clearing unlights every pixel
    // Verified by leaving the coverage mask untouched
    #[test]
    fn test_clear() {
        let mut canvas = Canvas::new(RasterSize::square(2));
        canvas.plot([PixelCoordinate::new(1, 1)]);

        canvas.clear();

        assert_eq!(canvas.lit_count(), 0);
        assert_eq!(canvas.size(), RasterSize::square(2));
    }

    // Tests rendering paints lit pixels rotated by 180 degrees
    // Verified by skipping the rotation
    #[test]
    fn test_render_rotates_half_turn() {
        let mut canvas = Canvas::new(RasterSize::new(3, 2));
        canvas.plot([PixelCoordinate::new(0, 0)]);

        let image = canvas.render([0, 255, 0], [0, 0, 0]);

        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(2, 1), &Rgba([0, 255, 0, 255]));
        assert_eq!(image.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
        let lit = image.pixels().filter(|p| **p == Rgba([0, 255, 0, 255])).count();
        assert_eq!(lit, 1);
    }
}
