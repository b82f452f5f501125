//! Standalone equation solving for the lesson pages.
//!
//! The graphical-solving pages ask for the x-values where a fixed curve
//! meets a horizontal line `y = target`; the root-extraction page solves
//! equations already in the shape `a(x − d)² = k`. Both reduce to the
//! same discriminant classification as [`Quadratic::roots`].

use crate::core::error::CoreError;
use crate::core::quadratic::{Quadratic, Roots, DEFAULT_EPSILON};

/// Solve `a·x² + b·x + c = target` by shifting the constant term.
pub fn solve_for_target(a: f64, b: f64, c: f64, target: f64) -> Result<Roots, CoreError> {
    solve_for_target_eps(a, b, c, target, DEFAULT_EPSILON)
}

/// [`solve_for_target`] with a caller-chosen classification epsilon.
pub fn solve_for_target_eps(
    a: f64,
    b: f64,
    c: f64,
    target: f64,
    epsilon: f64,
) -> Result<Roots, CoreError> {
    let shifted = Quadratic::from_polynomial(a, b, c - target)?.with_epsilon(epsilon);
    Ok(shifted.roots())
}

/// Solve `a·(x − d)² = k` by taking square roots, the way the
/// root-extraction lesson does it on paper: divide by `a`, then
/// `x = d ± √(k/a)`. With `d = 0` this is the plain `x² = k` case.
pub fn solve_shifted_square(a: f64, d: f64, k: f64) -> Result<Roots, CoreError> {
    if a == 0.0 {
        return Err(CoreError::invalid_parameter(
            "leading coefficient 'a' must be nonzero",
        ));
    }
    let ratio = k / a;
    let tol = DEFAULT_EPSILON * ratio.abs().max(1.0);
    if ratio.abs() <= tol {
        Ok(Roots::One(d))
    } else if ratio > 0.0 {
        let r = ratio.sqrt();
        Ok(Roots::Two(d - r, d + r))
    } else {
        Ok(Roots::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_shift_matches_plain_roots_at_zero() {
        let direct = Quadratic::from_polynomial(1.0, -5.0, 6.0).unwrap().roots();
        let shifted = solve_for_target(1.0, -5.0, 6.0, 0.0).unwrap();
        assert_eq!(direct, shifted);
    }

    #[test]
    fn square_extraction_handles_all_three_counts() {
        // -x² + 9 = 0  →  x² = 9
        assert_eq!(
            solve_shifted_square(-1.0, 0.0, -9.0).unwrap(),
            Roots::Two(-3.0, 3.0)
        );
        assert_eq!(solve_shifted_square(1.0, 4.0, 0.0).unwrap(), Roots::One(4.0));
        assert_eq!(solve_shifted_square(1.0, 0.0, -1.0).unwrap(), Roots::None);
    }
}
