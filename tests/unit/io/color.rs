//! Tests for hex color parsing and formatting

#[cfg(test)]
mod tests {
    use barnsley::FernError;
    use barnsley::io::color::{parse_hex_color, rgb_to_hex};

    // Tests parsing with and without the leading hash
    // Verified by swapping the red and blue channels
    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#00ff00").ok(), Some([0, 255, 0]));
        assert_eq!(parse_hex_color("1A2b3C").ok(), Some([0x1a, 0x2b, 0x3c]));
    }

    // Tests malformed colors are rejected with the offending input
    // Verified by accepting a leading sign inside a channel
    #[test]
    fn test_parse_hex_color_rejects_malformed() {
        for input in ["", "#fff", "#12345g", "#+f0000", "#0000000", "#ééé"] {
            match parse_hex_color(input) {
                Err(FernError::InvalidColor { input: rejected }) => assert_eq!(rejected, input),
                other => unreachable!("Expected InvalidColor for {input:?}, got {other:?}"),
            }
        }
    }

    // Tests formatting produces lowercase zero-padded hex
    // Verified by dropping zero padding
    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex([0, 255, 0]), "#00ff00");
        assert_eq!(rgb_to_hex([10, 11, 171]), "#0a0bab");
        assert_eq!(parse_hex_color(&rgb_to_hex([1, 2, 3])).ok(), Some([1, 2, 3]));
    }
}
