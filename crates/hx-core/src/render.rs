//! Plain-text glyphs for hexagram lines.
//!
//! Lines are printed top first, the way a hexagram is read on the page,
//! even though they are stored bottom first.

use crate::hexagram::BinaryHexagram;
use crate::line::HexagramLine;

/// A solid (yang) line.
pub const SOLID: &str = "━━━━━━━━━━━";
/// A broken (yin) line.
pub const BROKEN: &str = "━━━━   ━━━━";
/// Old yang: solid, marked as changing.
pub const OLD_YANG: &str = "━━━━━o━━━━━";
/// Old yin: broken, marked as changing.
pub const OLD_YIN: &str = "━━━━ x ━━━━";

const EMPTY: &str = "           ";

/// Glyph for one binary line.
pub fn bit_glyph(bit: u8) -> &'static str {
    if bit == 1 { SOLID } else { BROKEN }
}

/// Glyph for one traditional line, keeping the four-way distinction.
pub fn line_glyph(line: HexagramLine) -> &'static str {
    match line {
        HexagramLine::OldYin => OLD_YIN,
        HexagramLine::YoungYang => SOLID,
        HexagramLine::YoungYin => BROKEN,
        HexagramLine::OldYang => OLD_YANG,
    }
}

/// Render a binary hexagram, one glyph per line, top line first.
pub fn render_binary(hexagram: &BinaryHexagram) -> Vec<&'static str> {
    hexagram.bits().iter().rev().map(|b| bit_glyph(*b)).collect()
}

/// Render traditional lines, top line first.
pub fn render_traditional(lines: &[HexagramLine]) -> Vec<&'static str> {
    lines.iter().rev().map(|l| line_glyph(*l)).collect()
}

/// Render the inner, traditional, and outer columns next to each other.
///
/// Each row is prefixed with its 1-based line position. Returns an empty
/// string when no line has been tossed.
pub fn render_columns(
    lines: &[HexagramLine],
    inner: &BinaryHexagram,
    outer: &BinaryHexagram,
) -> String {
    let mut out = String::new();
    for i in (0..lines.len()).rev() {
        let inner_glyph = inner.bits().get(i).map_or(EMPTY, |b| bit_glyph(*b));
        let outer_glyph = outer.bits().get(i).map_or(EMPTY, |b| bit_glyph(*b));
        out.push_str(&format!(
            "{}  {inner_glyph}   {}   {outer_glyph}  {}\n",
            i + 1,
            line_glyph(lines[i]),
            lines[i],
        ));
    }
    out
}
