//! Title/tagline text rendering.
//!
//! Fonts come from an ordered list of system font paths; the first candidate
//! that both reads and parses wins. When none does (headless CI, minimal
//! containers) rendering degrades to a built-in 5x7 bitmap font rather than
//! failing — font loss is the one recoverable error in this tool.

use crate::canvas::{Canvas, Rgba};

/// Candidate font files tried in order. Linux paths first (where this tool
/// actually runs), then the macOS paths from the reference design.
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/SFNSDisplay.ttf",
    "/System/Library/Fonts/SFNS.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
];

/// A font ready to draw with: either a parsed outline font or the built-in
/// bitmap fallback.
pub enum ResolvedFont {
    Outline(Box<fontdue::Font>),
    Builtin(BitmapFont),
}

/// Tries each candidate path in order and returns the first font that loads,
/// falling back to [`BitmapFont`]. Never fails.
pub fn resolve_font(candidates: &[&str]) -> ResolvedFont {
    for path in candidates {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::debug!(path, error = %err, "font candidate unreadable");
                continue;
            }
        };
        match fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default()) {
            Ok(font) => {
                tracing::debug!(path, "loaded system font");
                return ResolvedFont::Outline(Box::new(font));
            }
            Err(err) => {
                tracing::debug!(path, error = err, "font candidate failed to parse");
            }
        }
    }
    tracing::debug!("no system font candidate loaded, using builtin bitmap font");
    ResolvedFont::Builtin(BitmapFont)
}

impl ResolvedFont {
    /// Draws `text` with its top-left corner at (x, y).
    ///
    /// Writes straight-alpha pixels verbatim; callers draw onto a fresh
    /// transparent layer and composite it, like any other shape.
    pub fn draw_text(&self, canvas: &mut Canvas, x: i32, y: i32, size: f32, text: &str, rgba: Rgba) {
        match self {
            Self::Outline(font) => draw_outline_text(canvas, font, x, y, size, text, rgba),
            Self::Builtin(font) => font.draw_text(canvas, x, y, size, text, rgba),
        }
    }
}

fn draw_outline_text(
    canvas: &mut Canvas,
    font: &fontdue::Font,
    x: i32,
    y: i32,
    size: f32,
    text: &str,
    rgba: Rgba,
) {
    use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

    let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
    layout.reset(&LayoutSettings {
        x: x as f32,
        y: y as f32,
        ..LayoutSettings::default()
    });
    layout.append(std::slice::from_ref(font), &TextStyle::new(text, size, 0));

    for glyph in layout.glyphs() {
        if glyph.width == 0 || glyph.height == 0 {
            continue;
        }
        let (_, coverage) = font.rasterize_config(glyph.key);
        let gx = glyph.x.round() as i64;
        let gy = glyph.y.round() as i64;
        for row in 0..glyph.height {
            for col in 0..glyph.width {
                let cv = u32::from(coverage[row * glyph.width + col]);
                if cv == 0 {
                    continue;
                }
                let a = ((cv * u32::from(rgba[3])) + 127) / 255;
                blend_coverage(canvas, gx + col as i64, gy + row as i64, rgba, a as u8);
            }
        }
    }
}

/// Keeps the stronger of the existing and incoming alpha so overlapping
/// anti-aliased glyph edges don't punch holes in each other.
fn blend_coverage(canvas: &mut Canvas, x: i64, y: i64, rgba: Rgba, a: u8) {
    if x < 0 || y < 0 {
        return;
    }
    let existing = canvas
        .get(x as u32, y as u32)
        .map(|px| px[3])
        .unwrap_or(u8::MAX);
    if a >= existing {
        canvas.put(x, y, [rgba[0], rgba[1], rgba[2], a]);
    }
}

/// Minimal built-in font: 5x7 glyphs for letters, digits and a little
/// punctuation. Lowercase maps to uppercase; unknown characters advance
/// without ink.
pub struct BitmapFont;

const GLYPH_W: i32 = 5;
const GLYPH_H: i32 = 7;

impl BitmapFont {
    pub fn draw_text(&self, canvas: &mut Canvas, x: i32, y: i32, size: f32, text: &str, rgba: Rgba) {
        // One glyph cell is nominally 8px tall, so a 72px title scales 9x.
        let scale = ((size / 8.0).round() as i32).max(1);
        let mut pen_x = i64::from(x);
        for ch in text.chars() {
            if let Some(rows) = glyph_rows(ch) {
                for (row, bits) in rows.iter().enumerate() {
                    for col in 0..GLYPH_W {
                        if bits & (1 << (GLYPH_W - 1 - col)) == 0 {
                            continue;
                        }
                        let bx = pen_x + i64::from(col * scale);
                        let by = i64::from(y) + (row as i64) * i64::from(scale);
                        for dy in 0..i64::from(scale) {
                            for dx in 0..i64::from(scale) {
                                canvas.put(bx + dx, by + dy, rgba);
                            }
                        }
                    }
                }
            }
            pen_x += i64::from((GLYPH_W + 1) * scale);
        }
    }
}

fn glyph_rows(ch: char) -> Option<[u8; 7]> {
    let ch = ch.to_ascii_uppercase();
    let rows = match ch {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x10, 0x13, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '&' => [0x0C, 0x12, 0x14, 0x08, 0x15, 0x12, 0x0D],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '?' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
        '\'' => [0x04, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        _ => return None,
    };
    Some(rows)
}
