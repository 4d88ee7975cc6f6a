//! Width metrics for the built-in base-14 Helvetica faces.
//!
//! The backend draws with the standard Type1 Helvetica family in WinAnsi
//! encoding, so layout can measure text from static width tables instead
//! of shaping. Widths are in thousandths of the font size, approximated
//! per character class; italic faces share the widths of their upright
//! counterparts.

use folio_style::FontWeight;

/// Factor applied to the font size to obtain the default line height.
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Approximate Helvetica advance width for one WinAnsi byte, at 1000
/// units per em.
fn helvetica_width(byte: u8) -> f32 {
    match byte {
        b' ' => 278.0,
        33..=47 => 333.0,            // punctuation
        b'0'..=b'9' => 556.0,        // digits
        58..=64 => 333.0,            // more punctuation
        b'I' | b'J' => 278.0,        // narrow uppercase
        b'M' | b'W' => 833.0,        // wide uppercase
        b'A'..=b'Z' => 667.0,        // uppercase average
        91..=96 => 333.0,            // brackets etc.
        b'f' | b'i' | b'j' | b'l' | b't' => 278.0, // narrow lowercase
        b'm' | b'w' => 833.0,        // wide lowercase
        b'a'..=b'z' => 556.0,        // lowercase average
        _ => 556.0,
    }
}

/// Approximate Helvetica-Bold advance width for one WinAnsi byte.
fn helvetica_bold_width(byte: u8) -> f32 {
    match byte {
        b' ' => 278.0,
        33..=47 => 333.0,
        b'0'..=b'9' => 556.0,
        58..=64 => 333.0,
        b'I' | b'J' => 278.0,
        b'M' | b'W' => 889.0,
        b'A'..=b'Z' => 722.0,
        91..=96 => 333.0,
        b'f' | b'i' | b'j' | b'l' | b't' => 333.0,
        b'm' | b'w' => 889.0,
        b'a'..=b'z' => 611.0,
        _ => 611.0,
    }
}

/// Advance width of a single character at 1000 units per em. Characters
/// outside the WinAnsi range are drawn as `?` by the backend and are
/// measured as such here.
pub fn char_width_milli(c: char, weight: FontWeight) -> f32 {
    let byte = if (c as u32) <= 255 { c as u32 as u8 } else { b'?' };
    match weight {
        FontWeight::Normal => helvetica_width(byte),
        FontWeight::Bold => helvetica_bold_width(byte),
    }
}

/// Measured width of `text` drawn at `font_size`.
pub fn text_width(text: &str, font_size: f32, weight: FontWeight) -> f32 {
    text.chars()
        .map(|c| char_width_milli(c, weight))
        .sum::<f32>()
        * font_size
        / 1000.0
}

/// Default line height for `font_size` (before any per-node line-height
/// factor is applied).
pub fn line_height(font_size: f32) -> f32 {
    font_size * LINE_HEIGHT_FACTOR
}
