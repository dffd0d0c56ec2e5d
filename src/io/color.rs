//! Hex color parsing and formatting

use crate::io::error::{FernError, Result};

/// Parse an HTML hex color such as `#00ff00` (the leading `#` is optional)
///
/// # Errors
///
/// Returns an error if the input is not exactly six hexadecimal digits
pub fn parse_hex_color(input: &str) -> Result<[u8; 3]> {
    let invalid = || FernError::InvalidColor {
        input: input.to_string(),
    };

    let digits = input.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|hex| u8::from_str_radix(hex, 16).ok())
            .ok_or_else(invalid)
    };

    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// Format an RGB color as lowercase HTML hex
pub fn rgb_to_hex(color: [u8; 3]) -> String {
    let [r, g, b] = color;
    format!("#{r:02x}{g:02x}{b:02x}")
}
