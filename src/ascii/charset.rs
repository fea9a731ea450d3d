//! The density palette and intensity-to-glyph quantization.

/// Density ramp (69 levels).
/// Characters ordered from sparsest (`.`) to densest (`$`).
pub const DENSITY_CHARSET: &[char] = &[
    '.', '\'', '`', '^', '"', ',', ':', ';', 'I', 'l', '!', 'i', '>', '<', '~', '+', '_', '-',
    '?', ']', '[', '}', '{', '1', ')', '(', '|', '\\', '/', 't', 'f', 'j', 'r', 'x', 'n', 'u',
    'v', 'c', 'z', 'X', 'Y', 'U', 'J', 'C', 'L', 'Q', '0', 'O', 'Z', 'm', 'w', 'q', 'p', 'd',
    'b', 'k', 'h', 'a', 'o', '*', '#', 'M', 'W', '&', '8', '%', 'B', '@', '$',
];

/// Palette position for an intensity: `intensity * 69 / 256`, floored.
///
/// Maps `0..=255` onto `0..=68`; 255 lands on the last glyph.
#[inline]
pub fn palette_index(intensity: u8) -> usize {
    intensity as usize * DENSITY_CHARSET.len() / 256
}

/// Glyph for an intensity.
#[inline]
pub fn glyph_for(intensity: u8) -> char {
    DENSITY_CHARSET[palette_index(intensity)]
}
