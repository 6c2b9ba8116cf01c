//! Vertical two-tone gradient used as the background of every asset.

use crate::canvas::{Canvas, Rgb};

/// The two derived tones of a background gradient.
///
/// Produced once from the theme's base color (see
/// [`Theme::tones`](crate::theme::Theme::tones)) and reused wherever a
/// dependent shape must match the background, e.g. the dog-ear fold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientTones {
    pub top: Rgb,
    pub bottom: Rgb,
}

impl GradientTones {
    /// Color of scan row `y` in a gradient of the given height.
    ///
    /// `t = y / (height - 1)`, so the first row is exactly `top` and the
    /// last exactly `bottom`. A height of 1 (or 0) yields `top`.
    pub fn sample(&self, y: u32, height: u32) -> Rgb {
        let t = if height > 1 {
            f64::from(y) / f64::from(height - 1)
        } else {
            0.0
        };
        let mut out = [0u8; 3];
        for c in 0..3 {
            out[c] = lerp(f64::from(self.top[c]), f64::from(self.bottom[c]), t) as u8;
        }
        out
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Fills the whole canvas with the vertical gradient, one opaque full-width
/// scan row at a time.
pub fn render_vertical(canvas: &mut Canvas, tones: GradientTones) {
    let (w, h) = (canvas.width(), canvas.height());
    for y in 0..h {
        let [r, g, b] = tones.sample(y, h);
        for x in 0..w {
            canvas.put(i64::from(x), i64::from(y), [r, g, b, 255]);
        }
    }
}
