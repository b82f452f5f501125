//! Curve sampling and axis windows for the chart widgets.
//!
//! The core never produces plot geometry; these helpers sample
//! `eval(x)` over a window and pick axis bounds that keep the vertex
//! and the target line visible.

use crate::core::quadratic::Quadratic;

/// Evenly sample `f` over `[x_min, x_max]`. `points` is clamped to at
/// least 2 so the result always spans the window.
pub fn sample(q: &Quadratic, x_min: f64, x_max: f64, points: usize) -> Vec<(f64, f64)> {
    let n = points.max(2);
    let step = (x_max - x_min) / (n - 1) as f64;
    (0..n)
        .map(|i| {
            let x = x_min + step * i as f64;
            (x, q.eval(x))
        })
        .collect()
}

/// A horizontal window centered on the vertex, for curves whose
/// interesting region is not known in advance.
pub fn vertex_window(q: &Quadratic, half_width: f64) -> (f64, f64) {
    let d = q.vertex().d;
    (d - half_width, d + half_width)
}

/// Vertical bounds that keep both the vertex and an optional target
/// line in view, with a little margin on each side.
pub fn y_bounds(q: &Quadratic, target: Option<f64>) -> (f64, f64) {
    let e = q.vertex().e;
    let mut lo = e - 5.0;
    let mut hi = e + 5.0;
    if let Some(t) = target {
        lo = lo.min(t - 2.0);
        hi = hi.max(t + 2.0);
    }
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_spans_the_window() {
        let q = Quadratic::from_polynomial(1.0, 0.0, 0.0).unwrap();
        let pts = sample(&q, -2.0, 2.0, 5);
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0], (-2.0, 4.0));
        assert_eq!(pts[4], (2.0, 4.0));
        assert_eq!(pts[2], (0.0, 0.0));
    }

    #[test]
    fn y_bounds_cover_the_target_line() {
        let q = Quadratic::from_polynomial(1.0, -4.0, 5.0).unwrap();
        let (lo, hi) = y_bounds(&q, Some(8.0));
        assert!(lo <= 1.0 - 5.0);
        assert!(hi >= 10.0);
    }
}
