//! Lesson content as plain data.
//!
//! Each lesson is a flat list of sections the TUI walks through:
//! prose, displayed formulas, slider-driven explorations, exercises
//! with key-revealed solutions, and free-text quizzes. The content
//! layer owns slider ranges and accepted answers; the math all comes
//! from `core` at render time.

pub mod answer;
mod graphical;
mod root_extraction;
mod three_forms;

use once_cell::sync::Lazy;

pub struct Lesson {
    pub slug: &'static str,
    pub title: &'static str,
    pub sections: Vec<Section>,
}

pub enum Section {
    Heading(&'static str),
    Text(&'static str),
    Formula(&'static str),
    Explore(Explore),
    Reveal(Reveal),
    Quiz(Quiz),
}

/// A bounded, stepped input adjusted with arrow keys. Range clamping
/// lives here, not in the core.
pub struct Slider {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub init: f64,
    /// Step over zero instead of landing on it. Used for the leading
    /// coefficient so `InvalidParameter` is unreachable from sliders.
    pub skip_zero: bool,
}

impl Slider {
    pub fn new(label: &'static str, min: f64, max: f64, step: f64, init: f64) -> Self {
        Slider {
            label,
            min,
            max,
            step,
            init,
            skip_zero: false,
        }
    }

    pub fn leading(label: &'static str, min: f64, max: f64, step: f64, init: f64) -> Self {
        Slider {
            label,
            min,
            max,
            step,
            init,
            skip_zero: true,
        }
    }

    /// Move by `delta_steps` steps, quantized to the step grid and
    /// clamped to the range.
    pub fn nudge(&self, value: f64, delta_steps: f64) -> f64 {
        let raw = value + self.step * delta_steps;
        let snapped = (raw / self.step).round() * self.step;
        // Land on a clean decimal so displayed equations stay short.
        let mut next = ((snapped * 1e9).round() / 1e9).clamp(self.min, self.max);
        if self.skip_zero && next.abs() < self.step / 2.0 {
            next = if delta_steps >= 0.0 { self.step } else { -self.step };
            next = next.clamp(self.min, self.max);
        }
        next
    }
}

pub enum ExploreKind {
    /// Sliders a, d, e over `a(x - d)^2 + e`.
    VertexSliders,
    /// Sliders a, x1, x2 over `a(x - x1)(x - x2)`.
    FactoredSliders,
    /// Sliders a, x0 over the coincident-root case `a(x - x0)^2`.
    DoubleRootSliders,
    /// Sliders a, b, c over `ax^2 + bx + c`.
    PolySliders,
    /// A fixed curve and a movable horizontal target line; the single
    /// slider is the right-hand side of the equation.
    FixedTarget {
        a: f64,
        b: f64,
        c: f64,
        x_min: f64,
        x_max: f64,
        /// Solutions below this x are hidden (the fuel curve is only
        /// defined for v > 40).
        domain_min: Option<f64>,
    },
    /// Sliders a, b, c and target: build your own equation and solve
    /// it graphically.
    CustomEquation,
    /// Sliders a, d, k over the extraction shape `a(x - d)^2 = k`.
    SquareExtract,
}

pub struct Explore {
    pub caption: &'static str,
    pub kind: ExploreKind,
    pub sliders: Vec<Slider>,
}

/// An exercise whose solution is shown on demand.
pub struct Reveal {
    pub prompt: &'static str,
    pub solution: &'static str,
}

/// An exercise graded by normalized string matching.
pub struct Quiz {
    pub prompt: &'static str,
    pub placeholder: &'static str,
    pub accepted: &'static [&'static str],
    pub success: &'static str,
    pub hint: &'static str,
}

static LESSONS: Lazy<Vec<Lesson>> = Lazy::new(|| {
    vec![
        three_forms::lesson(),
        graphical::lesson(),
        root_extraction::lesson(),
    ]
});

pub fn all() -> &'static [Lesson] {
    &LESSONS
}

pub fn find(slug: &str) -> Option<&'static Lesson> {
    LESSONS.iter().find(|l| l.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_three_lessons_with_unique_slugs() {
        let slugs: Vec<_> = all().iter().map(|l| l.slug).collect();
        assert_eq!(slugs.len(), 3);
        assert!(find("three-forms").is_some());
        assert!(find("graphical").is_some());
        assert!(find("root-extraction").is_some());
    }

    #[test]
    fn leading_slider_steps_over_zero() {
        let s = Slider::leading("a", -3.0, 3.0, 0.1, 1.0);
        let down = s.nudge(0.1, -1.0);
        assert!(down < 0.0, "expected to skip past zero, got {}", down);
        let up = s.nudge(-0.1, 1.0);
        assert!(up > 0.0, "expected to skip past zero, got {}", up);
    }

    #[test]
    fn nudge_clamps_to_range() {
        let s = Slider::new("e", -5.0, 5.0, 0.5, 0.0);
        assert_eq!(s.nudge(5.0, 1.0), 5.0);
        assert_eq!(s.nudge(-5.0, -1.0), -5.0);
    }
}
