//! The quadratic-representation engine.
//!
//! A [`Quadratic`] is one function `f(x) = a·x² + b·x + c` with `a ≠ 0`,
//! constructible from any of the three school-book representations
//! (polynomial, vertex, factored) and queryable for every property the
//! lesson pages display. Values are immutable; callers rebuild the model
//! whenever an input parameter changes.

use crate::core::error::CoreError;

/// Default tolerance for treating a near-zero discriminant as the
/// tangent (double-root) case. Scaled by input magnitude at comparison
/// time, see [`Quadratic::root_count`].
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Which way the parabola opens: the sign of `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opening {
    Upward,
    Downward,
}

impl Opening {
    pub fn label(self) -> &'static str {
        match self {
            Opening::Upward => "upward",
            Opening::Downward => "downward",
        }
    }
}

/// Vertical scaling relative to the unit parabola: the magnitude of `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stretch {
    Stretched,
    Compressed,
    Unscaled,
}

impl Stretch {
    pub fn label(self) -> &'static str {
        match self {
            Stretch::Stretched => "stretched",
            Stretch::Compressed => "compressed",
            Stretch::Unscaled => "unscaled",
        }
    }
}

/// The turning point `(d, e)` of the parabola, in the `S(d|e)` notation
/// the lessons use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub d: f64,
    pub e: f64,
}

/// Real solutions of `f(x) = 0`. Two roots are always ascending.
///
/// No real roots is a valid, expected state, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots {
    None,
    One(f64),
    Two(f64, f64),
}

impl Roots {
    pub fn count(&self) -> usize {
        match self {
            Roots::None => 0,
            Roots::One(_) => 1,
            Roots::Two(_, _) => 2,
        }
    }

    pub fn to_vec(&self) -> Vec<f64> {
        match *self {
            Roots::None => vec![],
            Roots::One(x) => vec![x],
            Roots::Two(x1, x2) => vec![x1, x2],
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Quadratic {
    a: f64,
    b: f64,
    c: f64,
    epsilon: f64,
}

impl Quadratic {
    /// Build from polynomial form `ax² + bx + c`.
    pub fn from_polynomial(a: f64, b: f64, c: f64) -> Result<Self, CoreError> {
        if a == 0.0 {
            return Err(CoreError::invalid_parameter(
                "leading coefficient 'a' must be nonzero",
            ));
        }
        Ok(Quadratic {
            a,
            b,
            c,
            epsilon: DEFAULT_EPSILON,
        })
    }

    /// Build from vertex form `a(x − d)² + e` with vertex `(d, e)`.
    pub fn from_vertex(a: f64, d: f64, e: f64) -> Result<Self, CoreError> {
        Self::from_polynomial(a, -2.0 * a * d, a * d * d + e)
    }

    /// Build from factored form `a(x − x1)(x − x2)`. Equal roots are
    /// permitted and represent the tangent case.
    pub fn from_factored(a: f64, x1: f64, x2: f64) -> Result<Self, CoreError> {
        Self::from_polynomial(a, -a * (x1 + x2), a * x1 * x2)
    }

    /// Override the discriminant-classification tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon.abs();
        self
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Tolerance for the discriminant sign test, scaled so it tracks the
    /// magnitude of the terms that formed the discriminant.
    fn disc_tolerance(&self) -> f64 {
        let scale = (self.b * self.b).max((4.0 * self.a * self.c).abs()).max(1.0);
        self.epsilon * scale
    }

    /// Number of real solutions of `f(x) = 0`: 0, 1, or 2.
    pub fn root_count(&self) -> usize {
        let disc = self.discriminant();
        let tol = self.disc_tolerance();
        if disc.abs() <= tol {
            1
        } else if disc > 0.0 {
            2
        } else {
            0
        }
    }

    /// Real solutions of `f(x) = 0` via the quadratic formula. A
    /// discriminant within tolerance of zero counts as exact tangency.
    pub fn roots(&self) -> Roots {
        match self.root_count() {
            0 => Roots::None,
            1 => Roots::One(-self.b / (2.0 * self.a)),
            _ => {
                let sq = self.discriminant().sqrt();
                let r1 = (-self.b - sq) / (2.0 * self.a);
                let r2 = (-self.b + sq) / (2.0 * self.a);
                // The ∓ branches swap order when a < 0; keep ascending.
                if r1 <= r2 {
                    Roots::Two(r1, r2)
                } else {
                    Roots::Two(r2, r1)
                }
            }
        }
    }

    /// Turning point `S(d|e)`, with `d = −b/(2a)` and `e = f(d)`.
    pub fn vertex(&self) -> Vertex {
        let d = -self.b / (2.0 * self.a);
        Vertex { d, e: self.eval(d) }
    }

    /// Where the parabola crosses the y-axis: `f(0) = c`.
    pub fn y_intercept(&self) -> f64 {
        self.c
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    pub fn opening(&self) -> Opening {
        if self.a > 0.0 {
            Opening::Upward
        } else {
            Opening::Downward
        }
    }

    pub fn stretch(&self) -> Stretch {
        let m = self.a.abs();
        if m > 1.0 {
            Stretch::Stretched
        } else if m < 1.0 {
            Stretch::Compressed
        } else {
            Stretch::Unscaled
        }
    }

    /// Read back vertex-form parameters `(a, d, e)`.
    pub fn vertex_form(&self) -> (f64, f64, f64) {
        let v = self.vertex();
        (self.a, v.d, v.e)
    }

    /// Read back factored-form parameters `(a, x1, x2)`, or `None` when
    /// the function has no real factorization. The tangent case reads
    /// back with `x1 == x2`.
    pub fn factored_form(&self) -> Option<(f64, f64, f64)> {
        match self.roots() {
            Roots::None => None,
            Roots::One(x0) => Some((self.a, x0, x0)),
            Roots::Two(x1, x2) => Some((self.a, x1, x2)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_leading_coefficient_is_rejected() {
        assert!(Quadratic::from_polynomial(0.0, 1.0, 2.0).is_err());
        assert!(Quadratic::from_vertex(0.0, 1.0, 2.0).is_err());
        assert!(Quadratic::from_factored(0.0, 1.0, 2.0).is_err());
    }

    #[test]
    fn vertex_form_normalizes_coefficients() {
        // 2(x - 2)² - 3  ==  2x² - 8x + 5
        let q = Quadratic::from_vertex(2.0, 2.0, -3.0).unwrap();
        let (a, b, c) = q.coefficients();
        assert_eq!(a, 2.0);
        assert_eq!(b, -8.0);
        assert_eq!(c, 5.0);
    }

    #[test]
    fn roots_are_ascending_for_downward_parabolas() {
        let q = Quadratic::from_factored(-3.0, 4.0, -2.0).unwrap();
        match q.roots() {
            Roots::Two(x1, x2) => {
                assert!(x1 < x2);
                assert!((x1 + 2.0).abs() < 1e-12);
                assert!((x2 - 4.0).abs() < 1e-12);
            }
            other => panic!("expected two roots, got {:?}", other),
        }
    }

    #[test]
    fn tangent_case_counts_one_root() {
        let q = Quadratic::from_factored(1.0, 3.0, 3.0).unwrap();
        assert_eq!(q.root_count(), 1);
        assert_eq!(q.roots(), Roots::One(3.0));
        assert_eq!(q.factored_form(), Some((1.0, 3.0, 3.0)));
    }
}
