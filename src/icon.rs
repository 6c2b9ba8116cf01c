//! The notebook glyph: a stack of shape layers composited back-to-front
//! onto the accumulating canvas (painter's algorithm).
//!
//! All offsets below are reference-design pixels; they are multiplied by
//! the caller's scale and rounded to the nearest integer pixel before use.

use kurbo::Point;

use crate::{
    canvas::{Canvas, Rgba},
    draw,
    error::AssetResult,
    theme::Theme,
};

const SHADOW_RGBA: Rgba = [0, 0, 0, 40];
const BACK_PAGE_RGBA: Rgba = [235, 240, 242, 200];
const PAGE_RGBA: Rgba = [255, 255, 255, 255];
const FLAP_RGBA: Rgba = [220, 225, 230, 255];
const RULED_LINE_RGBA: Rgba = [180, 210, 215, 180];
const MARGIN_RULE_RGBA: Rgba = [220, 100, 100, 120];
const BINDING_DOT_RGBA: Rgba = [255, 255, 255, 200];
const PENCIL_BODY_RGBA: Rgba = [255, 255, 255, 180];
const PENCIL_TIP_RGBA: Rgba = [255, 220, 150, 200];

/// Width fractions of the four handwriting placeholder blocks.
const TEXT_BLOCK_WIDTHS: [f64; 4] = [0.85, 0.65, 0.78, 0.50];

const MAX_RULED_LINES: i32 = 6;

fn px(v: f64, scale: f64) -> i32 {
    (v * scale).round() as i32
}

/// The main page's bounding box, the reference frame for every other layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PageRect {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Page box for an icon centered at (cx, cy) with the given scale.
///
/// The page sits slightly right of center (reference offset 20) to balance
/// the binding dots hanging off its left edge.
pub fn page_rect(cx: i32, cy: i32, scale: f64) -> PageRect {
    let page_w = px(420.0, scale);
    let page_h = px(500.0, scale);
    let left = cx - page_w / 2 + px(20.0, scale);
    let top = cy - page_h / 2;
    PageRect {
        left,
        top,
        right: left + page_w,
        bottom: top + page_h,
    }
}

/// Y coordinates of the ruled lines, at most six, skipping any line that
/// would land inside the bottom margin.
pub fn ruled_line_ys(page: PageRect, scale: f64) -> Vec<i32> {
    let first = page.top + px(120.0, scale);
    let spacing = px(52.0, scale);
    let limit = page.bottom - px(50.0, scale);
    (0..MAX_RULED_LINES)
        .map(|i| first + i * spacing)
        .filter(|&y| y < limit)
        .collect()
}

/// Baseline y and width fraction of each text placeholder block, at most
/// four, with the same bottom-margin skip rule as the ruled lines.
pub fn text_block_spans(page: PageRect, scale: f64) -> Vec<(i32, f64)> {
    ruled_line_ys(page, scale)
        .into_iter()
        .zip(TEXT_BLOCK_WIDTHS)
        .collect()
}

/// Centers of the five binding dots, evenly spaced along the page's left
/// edge between the top and bottom dot margins.
pub fn binding_dot_ys(page: PageRect, scale: f64) -> [i32; 5] {
    let start = page.top + px(60.0, scale);
    let end = page.bottom - px(60.0, scale);
    let spacing = f64::from(end - start) / 4.0;
    std::array::from_fn(|i| (f64::from(start) + i as f64 * spacing).round() as i32)
}

/// Draws the notebook glyph centered at (cx, cy), scaled by `scale`, over
/// whatever the canvas already holds.
#[tracing::instrument(skip(canvas, theme))]
pub fn draw_notebook_icon(
    canvas: &mut Canvas,
    theme: &Theme,
    cx: i32,
    cy: i32,
    scale: f64,
) -> AssetResult<()> {
    let s = scale;
    let tones = theme.tones();
    let page = page_rect(cx, cy, s);

    // 1. Shadow, furthest back.
    let so = px(6.0, s);
    composited(canvas, |layer| {
        draw::fill_rounded_rect(
            layer,
            page.left + so,
            page.top + so,
            page.right + so,
            page.bottom + so,
            px(28.0, s),
            SHADOW_RGBA,
        );
    })?;

    // 2. Back page, stacked up-and-right behind the main page.
    let bo = px(14.0, s);
    let lift = px(6.0, s);
    composited(canvas, |layer| {
        draw::fill_rounded_rect(
            layer,
            page.left + bo,
            page.top - bo + lift,
            page.right + bo,
            page.bottom - bo + lift,
            px(28.0, s),
            BACK_PAGE_RGBA,
        );
    })?;

    // 3. Main page.
    composited(canvas, |layer| {
        draw::fill_rounded_rect(
            layer,
            page.left,
            page.top,
            page.right,
            page.bottom,
            px(24.0, s),
            PAGE_RGBA,
        );
    })?;

    // 4. Dog-ear fold. The background triangle is sampled at the page-top
    // row, not the fold's own y-range; the reference design does the same.
    let fold = px(52.0, s);
    let fold_x = page.right - fold;
    let sample_y = page.top.clamp(0, canvas.height() as i32 - 1) as u32;
    let [fr, fg, fb] = tones.sample(sample_y, canvas.height());
    composited(canvas, |layer| {
        draw::fill_polygon(
            layer,
            &[
                Point::new(f64::from(fold_x), f64::from(page.top)),
                Point::new(f64::from(page.right), f64::from(page.top)),
                Point::new(f64::from(page.right), f64::from(page.top + fold)),
            ],
            [fr, fg, fb, 255],
        );
        draw::fill_polygon(
            layer,
            &[
                Point::new(f64::from(fold_x), f64::from(page.top)),
                Point::new(f64::from(fold_x), f64::from(page.top + fold)),
                Point::new(f64::from(page.right), f64::from(page.top + fold)),
            ],
            FLAP_RGBA,
        );
    })?;

    let line_left = page.left + px(65.0, s);
    let line_right = page.right - px(45.0, s);
    let stroke = px(3.0, s).max(1);

    // 5. Ruled lines.
    composited(canvas, |layer| {
        for y in ruled_line_ys(page, s) {
            draw::stroke_hline(layer, line_left, line_right, y, stroke, RULED_LINE_RGBA);
        }
    })?;

    // 6. Handwriting placeholder blocks above the first line positions.
    let [br, bg, bb] = theme.base_rgb8();
    let block_h = px(10.0, s);
    let gap = px(4.0, s);
    composited(canvas, |layer| {
        for (y, frac) in text_block_spans(page, s) {
            let block_w = (f64::from(line_right - line_left) * frac) as i32;
            draw::fill_rounded_rect(
                layer,
                line_left,
                y - block_h - gap,
                line_left + block_w,
                y - gap,
                px(4.0, s).max(1),
                [br, bg, bb, 160],
            );
        }
    })?;

    // 7. Margin rule.
    composited(canvas, |layer| {
        draw::stroke_vline(
            layer,
            page.left + px(50.0, s),
            page.top + px(20.0, s),
            page.bottom - px(20.0, s),
            stroke,
            MARGIN_RULE_RGBA,
        );
    })?;

    // 8. Binding dots, hanging off the left page edge.
    let dot_x = page.left - px(8.0, s);
    let dot_r = px(7.0, s);
    composited(canvas, |layer| {
        for y in binding_dot_ys(page, s) {
            draw::fill_circle(layer, dot_x, y, dot_r, BINDING_DOT_RGBA);
        }
    })?;

    // 9. Pencil at 45 degrees, tip anchored near the bottom-right corner.
    composited(canvas, |layer| {
        draw_pencil(layer, page, s);
    })?;

    Ok(())
}

fn draw_pencil(layer: &mut Canvas, page: PageRect, s: f64) {
    let tip_x = f64::from(page.right - px(60.0, s));
    let tip_y = f64::from(page.bottom - px(55.0, s));
    let body_len = f64::from(px(90.0, s));
    let tip_len = f64::from(px(18.0, s));
    let half_w = f64::from(px(5.0, s));

    let (sin, cos) = 45f64.to_radians().sin_cos();
    let end_x = tip_x - body_len * cos;
    let end_y = tip_y - body_len * sin;
    // Perpendicular offset from the pencil's axis.
    let dx = half_w * sin;
    let dy = half_w * cos;
    // Where the body stops and the sharpened tip begins.
    let base_x = tip_x - tip_len * cos;
    let base_y = tip_y - tip_len * sin;

    draw::fill_polygon(
        layer,
        &[
            Point::new(base_x - dx, base_y + dy),
            Point::new(base_x + dx, base_y - dy),
            Point::new(end_x + dx, end_y - dy),
            Point::new(end_x - dx, end_y + dy),
        ],
        PENCIL_BODY_RGBA,
    );
    draw::fill_polygon(
        layer,
        &[
            Point::new(tip_x, tip_y),
            Point::new(base_x - dx, base_y + dy),
            Point::new(base_x + dx, base_y - dy),
        ],
        PENCIL_TIP_RGBA,
    );
}

fn composited<F: FnOnce(&mut Canvas)>(canvas: &mut Canvas, draw_fn: F) -> AssetResult<()> {
    let mut layer = canvas.layer();
    draw_fn(&mut layer);
    canvas.alpha_composite(&layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient;

    #[test]
    fn page_dimensions_double_with_scale() {
        for s in [0.19, 0.25, 0.38, 0.5] {
            let a = page_rect(256, 256, s);
            let b = page_rect(256, 256, 2.0 * s);
            assert!((b.width() - 2 * a.width()).abs() <= 1, "width at s={s}");
            assert!((b.height() - 2 * a.height()).abs() <= 1, "height at s={s}");
        }
    }

    #[test]
    fn full_height_page_has_six_lines_and_four_blocks() {
        let page = page_rect(256, 256, 0.5);
        assert_eq!(ruled_line_ys(page, 0.5).len(), 6);
        assert_eq!(text_block_spans(page, 0.5).len(), 4);
    }

    #[test]
    fn short_page_skips_lines_and_blocks() {
        let mut page = page_rect(256, 256, 0.5);
        // Pull the bottom up so later line positions fall into the margin.
        page.bottom = page.top + px(220.0, 0.5);
        let lines = ruled_line_ys(page, 0.5);
        assert!(lines.len() < 6);
        assert!(text_block_spans(page, 0.5).len() < 4);
        let limit = page.bottom - px(50.0, 0.5);
        assert!(lines.iter().all(|&y| y < limit));
    }

    #[test]
    fn always_five_binding_dots_evenly_spaced() {
        for s in [0.2, 0.38, 0.5, 1.0] {
            let page = page_rect(400, 400, s);
            let ys = binding_dot_ys(page, s);
            assert_eq!(ys.len(), 5);
            let step = ys[1] - ys[0];
            for pair in ys.windows(2) {
                assert!((pair[1] - pair[0] - step).abs() <= 1, "uneven at s={s}");
            }
            assert_eq!(ys[0], page.top + px(60.0, s));
            assert_eq!(ys[4], page.bottom - px(60.0, s));
        }
    }

    #[test]
    fn text_block_fractions_follow_reference_order() {
        let page = page_rect(256, 256, 0.5);
        let spans = text_block_spans(page, 0.5);
        let fracs: Vec<f64> = spans.iter().map(|&(_, f)| f).collect();
        assert_eq!(fracs, vec![0.85, 0.65, 0.78, 0.50]);
    }

    #[test]
    fn icon_draws_white_page_pixels_over_gradient() {
        let theme = Theme::default();
        let mut canvas = Canvas::new(512, 512).unwrap();
        gradient::render_vertical(&mut canvas, theme.tones());
        draw_notebook_icon(&mut canvas, &theme, 256, 256, 0.5).unwrap();

        let page = page_rect(256, 256, 0.5);
        // A spot between the ruled lines on the page interior is white.
        let x = (page.left + page.width() * 3 / 4) as u32;
        let y = (page.top + px(100.0, 0.5)) as u32;
        assert_eq!(canvas.get(x, y), Some([255, 255, 255, 255]));
        // Well outside the glyph the gradient is untouched.
        let [r, g, b] = theme.tones().sample(5, 512);
        assert_eq!(canvas.get(5, 5), Some([r, g, b, 255]));
    }

    #[test]
    fn fold_triangle_matches_gradient_tone_at_page_top() {
        let theme = Theme::default();
        let mut canvas = Canvas::new(512, 512).unwrap();
        gradient::render_vertical(&mut canvas, theme.tones());
        draw_notebook_icon(&mut canvas, &theme, 256, 256, 0.5).unwrap();

        let page = page_rect(256, 256, 0.5);
        let [r, g, b] = theme.tones().sample(page.top as u32, 512);
        // Just inside the background triangle's right-angle corner.
        let x = (page.right - 2) as u32;
        let y = (page.top + 1) as u32;
        assert_eq!(canvas.get(x, y), Some([r, g, b, 255]));
    }
}
