//! Deterministic shape rasterizers over a [`Canvas`].
//!
//! Every routine takes an inclusive bounding box in pixel coordinates,
//! writes pixels verbatim (no anti-aliasing, no blending) and clips at the
//! canvas edges. Blending happens once per layer, in
//! [`Canvas::alpha_composite`].

use kurbo::Point;

use crate::canvas::{Canvas, Rgba};

/// Fills the inclusive box `[x0, x1] x [y0, y1]`.
pub fn fill_rect(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, rgba: Rgba) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            canvas.put(i64::from(x), i64::from(y), rgba);
        }
    }
}

/// Fills the ellipse inscribed in the inclusive box.
pub fn fill_ellipse(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, rgba: Rgba) {
    fill_arc_region(canvas, x0, y0, x1, y1, None, rgba);
}

/// Fills the pie slice of the inscribed ellipse between `start_deg` and
/// `end_deg`.
///
/// Angle convention is the usual image-drawing one: 0 degrees points right
/// and angles increase clockwise (y grows downward). `start_deg > end_deg`
/// wraps through 0.
pub fn fill_pieslice(
    canvas: &mut Canvas,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    start_deg: f64,
    end_deg: f64,
    rgba: Rgba,
) {
    fill_arc_region(canvas, x0, y0, x1, y1, Some((start_deg, end_deg)), rgba);
}

fn fill_arc_region(
    canvas: &mut Canvas,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    angles: Option<(f64, f64)>,
    rgba: Rgba,
) {
    if x1 < x0 || y1 < y0 {
        return;
    }
    let cx = f64::from(x0 + x1) / 2.0;
    let cy = f64::from(y0 + y1) / 2.0;
    let rx = f64::from(x1 - x0) / 2.0;
    let ry = f64::from(y1 - y0) / 2.0;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = f64::from(x) - cx;
            let dy = f64::from(y) - cy;
            let nx = if rx > 0.0 { dx / rx } else { 0.0 };
            let ny = if ry > 0.0 { dy / ry } else { 0.0 };
            if nx * nx + ny * ny > 1.0 {
                continue;
            }
            if let Some((start, end)) = angles {
                // atan2 with y-down is already clockwise-positive.
                let mut a = dy.atan2(dx).to_degrees();
                if a < 0.0 {
                    a += 360.0;
                }
                let inside = if start <= end {
                    a >= start && a <= end
                } else {
                    a >= start || a <= end
                };
                if !inside && !(dx == 0.0 && dy == 0.0) {
                    continue;
                }
            }
            canvas.put(i64::from(x), i64::from(y), rgba);
        }
    }
}

/// Radius actually used by [`fill_rounded_rect`]: the requested radius
/// clamped so corner discs never overlap.
pub fn effective_radius(x0: i32, y0: i32, x1: i32, y1: i32, requested: i32) -> i32 {
    requested.min((x1 - x0) / 2).min((y1 - y0) / 2).max(0)
}

/// Fills a rectangle with quarter-circle corners.
///
/// Decomposed as a horizontal band inset by the radius on the left/right, a
/// vertical band inset on the top/bottom, and four 90-degree pie slices.
/// Together they tile the interior exactly.
pub fn fill_rounded_rect(
    canvas: &mut Canvas,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    radius: i32,
    rgba: Rgba,
) {
    if x1 < x0 || y1 < y0 {
        return;
    }
    let r = effective_radius(x0, y0, x1, y1, radius);

    fill_rect(canvas, x0 + r, y0, x1 - r, y1, rgba);
    fill_rect(canvas, x0, y0 + r, x1, y1 - r, rgba);

    fill_pieslice(canvas, x0, y0, x0 + 2 * r, y0 + 2 * r, 180.0, 270.0, rgba);
    fill_pieslice(canvas, x1 - 2 * r, y0, x1, y0 + 2 * r, 270.0, 360.0, rgba);
    fill_pieslice(canvas, x0, y1 - 2 * r, x0 + 2 * r, y1, 90.0, 180.0, rgba);
    fill_pieslice(canvas, x1 - 2 * r, y1 - 2 * r, x1, y1, 0.0, 90.0, rgba);
}

/// Scanline fill of a simple polygon (even-odd rule, horizontal edges
/// ignored). Vertices need not be integral.
pub fn fill_polygon(canvas: &mut Canvas, pts: &[Point], rgba: Rgba) {
    if pts.len() < 3 {
        return;
    }
    let y_min = pts.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let y_max = pts.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

    let mut xs: Vec<f64> = Vec::with_capacity(pts.len());
    for y in (y_min.ceil() as i64)..=(y_max.floor() as i64) {
        let fy = y as f64;
        xs.clear();
        for i in 0..pts.len() {
            let p = pts[i];
            let q = pts[(i + 1) % pts.len()];
            if p.y == q.y {
                continue;
            }
            // Half-open span so a vertex shared by two edges counts once.
            let (lo, hi) = if p.y < q.y { (p, q) } else { (q, p) };
            if fy < lo.y || fy >= hi.y {
                continue;
            }
            xs.push(p.x + (fy - p.y) * (q.x - p.x) / (q.y - p.y));
        }
        xs.sort_by(|a, b| a.total_cmp(b));
        for pair in xs.chunks_exact(2) {
            for x in (pair[0].ceil() as i64)..=(pair[1].floor() as i64) {
                canvas.put(x, y, rgba);
            }
        }
    }
}

/// Horizontal line segment of the given stroke width, centered on `y`.
pub fn stroke_hline(canvas: &mut Canvas, x0: i32, x1: i32, y: i32, width: i32, rgba: Rgba) {
    let w = width.max(1);
    let top = y - (w - 1) / 2;
    fill_rect(canvas, x0, top, x1, top + w - 1, rgba);
}

/// Vertical line segment of the given stroke width, centered on `x`.
pub fn stroke_vline(canvas: &mut Canvas, x: i32, y0: i32, y1: i32, width: i32, rgba: Rgba) {
    let w = width.max(1);
    let left = x - (w - 1) / 2;
    fill_rect(canvas, left, y0, left + w - 1, y1, rgba);
}

/// Filled circle of radius `r` centered at (cx, cy).
pub fn fill_circle(canvas: &mut Canvas, cx: i32, cy: i32, r: i32, rgba: Rgba) {
    fill_ellipse(canvas, cx - r, cy - r, cx + r, cy + r, rgba);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;

    const INK: Rgba = [255, 0, 0, 255];

    fn canvas() -> Canvas {
        Canvas::new(64, 64).unwrap()
    }

    fn is_ink(c: &Canvas, x: u32, y: u32) -> bool {
        c.get(x, y) == Some(INK)
    }

    #[test]
    fn rect_fill_is_inclusive() {
        let mut c = canvas();
        fill_rect(&mut c, 2, 3, 5, 6, INK);
        assert!(is_ink(&c, 2, 3));
        assert!(is_ink(&c, 5, 6));
        assert!(!is_ink(&c, 6, 6));
        assert!(!is_ink(&c, 5, 7));
    }

    #[test]
    fn effective_radius_never_exceeds_half_extent() {
        assert_eq!(effective_radius(0, 0, 100, 20, 500), 10);
        assert_eq!(effective_radius(0, 0, 20, 100, 500), 10);
        assert_eq!(effective_radius(0, 0, 100, 100, 12), 12);
        assert_eq!(effective_radius(0, 0, 10, 10, -3), 0);
    }

    #[test]
    fn oversized_radius_draws_same_as_clamped_radius() {
        let mut a = canvas();
        let mut b = canvas();
        fill_rounded_rect(&mut a, 4, 10, 40, 30, 999, INK);
        let r = effective_radius(4, 10, 40, 30, 999);
        fill_rounded_rect(&mut b, 4, 10, 40, 30, r, INK);
        assert_eq!(a, b);
    }

    #[test]
    fn rounded_rect_fills_center_and_clears_corner() {
        let mut c = canvas();
        fill_rounded_rect(&mut c, 0, 0, 40, 40, 12, INK);
        assert!(is_ink(&c, 20, 20));
        assert!(is_ink(&c, 20, 0));
        assert!(is_ink(&c, 0, 20));
        // The extreme corner pixel lies outside the quarter disc.
        assert!(!is_ink(&c, 0, 0));
        assert!(!is_ink(&c, 40, 0));
        assert!(!is_ink(&c, 0, 40));
        assert!(!is_ink(&c, 40, 40));
    }

    #[test]
    fn rounded_rect_bands_and_discs_leave_no_gap() {
        let mut c = canvas();
        let (x0, y0, x1, y1, r) = (2, 2, 50, 34, 10);
        fill_rounded_rect(&mut c, x0, y0, x1, y1, r, INK);
        // Every pixel of the horizontal and vertical bands is covered, and
        // so are the pie-slice pixels adjacent to the band seams.
        for y in y0..=y1 {
            for x in (x0 + r)..=(x1 - r) {
                assert!(is_ink(&c, x as u32, y as u32), "gap at ({x},{y})");
            }
        }
        for y in (y0 + r)..=(y1 - r) {
            for x in x0..=x1 {
                assert!(is_ink(&c, x as u32, y as u32), "gap at ({x},{y})");
            }
        }
        assert!(is_ink(&c, (x0 + 2) as u32, (y0 + r - 1) as u32) || r < 3);
    }

    #[test]
    fn quarter_pieslice_stays_in_its_quadrant() {
        let mut c = canvas();
        // Bottom-right quarter: 0..90 degrees, y-down.
        fill_pieslice(&mut c, 10, 10, 30, 30, 0.0, 90.0, INK);
        assert!(is_ink(&c, 25, 25));
        assert!(!is_ink(&c, 15, 15));
        assert!(!is_ink(&c, 25, 15));
        assert!(!is_ink(&c, 15, 25));
    }

    #[test]
    fn pieslice_wrapping_through_zero() {
        let mut c = canvas();
        fill_pieslice(&mut c, 10, 10, 30, 30, 270.0, 90.0, INK);
        // Right half filled, left half empty.
        assert!(is_ink(&c, 27, 20));
        assert!(!is_ink(&c, 13, 20));
    }

    #[test]
    fn ellipse_is_symmetric_and_bounded() {
        let mut c = canvas();
        fill_ellipse(&mut c, 8, 16, 40, 32, INK);
        assert!(is_ink(&c, 24, 24));
        assert!(!is_ink(&c, 8, 16));
        assert!(!is_ink(&c, 40, 32));
        assert!(!is_ink(&c, 7, 24));
        assert!(!is_ink(&c, 41, 24));
    }

    #[test]
    fn polygon_fills_triangle_interior_only() {
        let mut c = canvas();
        let tri = [
            Point::new(10.0, 10.0),
            Point::new(30.0, 10.0),
            Point::new(30.0, 30.0),
        ];
        fill_polygon(&mut c, &tri, INK);
        assert!(is_ink(&c, 27, 20));
        assert!(!is_ink(&c, 12, 25));
        assert!(!is_ink(&c, 9, 10));
    }

    #[test]
    fn polygon_with_fewer_than_three_points_is_noop() {
        let mut c = canvas();
        let before = c.clone();
        fill_polygon(&mut c, &[Point::new(1.0, 1.0), Point::new(5.0, 5.0)], INK);
        assert_eq!(c, before);
    }

    #[test]
    fn hline_width_is_centered() {
        let mut c = canvas();
        stroke_hline(&mut c, 5, 20, 10, 3, INK);
        assert!(is_ink(&c, 12, 9));
        assert!(is_ink(&c, 12, 10));
        assert!(is_ink(&c, 12, 11));
        assert!(!is_ink(&c, 12, 8));
        assert!(!is_ink(&c, 12, 12));
    }

    #[test]
    fn vline_minimum_width_is_one() {
        let mut c = canvas();
        stroke_vline(&mut c, 10, 5, 20, 0, INK);
        assert!(is_ink(&c, 10, 12));
        assert!(!is_ink(&c, 9, 12));
        assert!(!is_ink(&c, 11, 12));
    }

    #[test]
    fn drawing_clips_at_canvas_edges() {
        let mut c = canvas();
        fill_rect(&mut c, -10, -10, 70, 2, INK);
        assert!(is_ink(&c, 0, 0));
        assert!(is_ink(&c, 63, 2));
        assert!(!is_ink(&c, 0, 3));
    }
}
