//! Lesson 1: the three representations of a quadratic function.

use super::{Explore, ExploreKind, Lesson, Reveal, Section, Slider};

pub fn lesson() -> Lesson {
    let mut sections = vec![
        Section::Heading("Quadratic functions - the three representations"),
        Section::Text(
            "In this lesson you will meet the three ways of writing one and the same \
             quadratic function: the vertex form a(x - d)^2 + e, the factored form \
             a(x - x1)(x - x2) (also called root form), and the polynomial form \
             ax^2 + bx + c. Each form exposes different properties of the parabola \
             at a glance.",
        ),
        Section::Heading("1. The vertex form"),
        Section::Formula("f(x) = a(x - d)^2 + e"),
        Section::Text(
            "Task: change the function by moving the sliders. What pattern do you \
             see between the parameters and the graph?",
        ),
        Section::Explore(Explore {
            caption: "Vertex form",
            kind: ExploreKind::VertexSliders,
            sliders: vec![
                Slider::leading("a", -3.0, 3.0, 0.1, 1.0),
                Slider::new("d", -5.0, 5.0, 0.5, 0.0),
                Slider::new("e", -5.0, 5.0, 0.5, 0.0),
            ],
        }),
        Section::Reveal(Reveal {
            prompt: "What can be read directly off the vertex form?",
            solution: "Vertex: S(d|e).\n\
                       Opening: a > 0 opens upward, a < 0 opens downward.\n\
                       Stretch: |a| > 1 stretched, |a| < 1 compressed.",
        }),
        Section::Heading("2. The factored form (root form)"),
        Section::Formula("f(x) = a(x - x1)(x - x2)"),
        Section::Reveal(Reveal {
            prompt: "What are the roots of a parabola?",
            solution: "The roots are the places where the parabola crosses or \
                       touches the x-axis.",
        }),
        Section::Reveal(Reveal {
            prompt: "How many roots can a parabola have?",
            solution: "No roots when the parabola runs entirely above or below the \
                       x-axis, one root when the vertex sits on the x-axis, and two \
                       roots otherwise.",
        }),
        Section::Reveal(Reveal {
            prompt: "How do you compute the roots?",
            solution: "Set f(x) = 0 and solve the resulting equation for x. The \
                       roots are exactly the x-values where the function evaluates \
                       to zero.",
        }),
        Section::Text(
            "Task: change the function by moving the sliders. Which properties can \
             you read straight from the equation?",
        ),
        Section::Explore(Explore {
            caption: "Factored form",
            kind: ExploreKind::FactoredSliders,
            sliders: vec![
                Slider::leading("a", -3.0, 3.0, 0.1, 1.0),
                Slider::new("x1", -8.0, 8.0, 0.5, -2.0),
                Slider::new("x2", -8.0, 8.0, 0.5, 2.0),
            ],
        }),
        Section::Reveal(Reveal {
            prompt: "What can be read directly off the factored form?",
            solution: "Roots: x1 and x2.\n\
                       Opening: a > 0 opens upward, a < 0 opens downward.\n\
                       Stretch: |a| > 1 stretched, |a| < 1 compressed.",
        }),
        Section::Heading("Special case: one root"),
        Section::Text(
            "x0 is the only root. Move the sliders and watch the equation.",
        ),
        Section::Explore(Explore {
            caption: "Coincident roots",
            kind: ExploreKind::DoubleRootSliders,
            sliders: vec![
                Slider::leading("a", -3.0, 3.0, 0.1, 1.0),
                Slider::new("x0", -8.0, 8.0, 0.5, 2.0),
            ],
        }),
        Section::Reveal(Reveal {
            prompt: "What does the factored form look like with exactly one root?",
            solution: "With a single root x0 the vertex lies on the x-axis, so the \
                       vertex form and the factored form coincide:\n\
                       f(x) = a(x - x0)^2",
        }),
        Section::Reveal(Reveal {
            prompt: "And with no roots at all?",
            solution: "If the parabola has no roots, there is no factored form of \
                       its equation.",
        }),
        Section::Heading("The vertex from the root form"),
        Section::Reveal(Reveal {
            prompt: "Where does the vertex sit relative to the roots?",
            solution: "Its x-coordinate d lies exactly halfway between the two \
                       roots:\n\
                       d = (x1 + x2) / 2",
        }),
        Section::Reveal(Reveal {
            prompt: "How do we get the y-coordinate e of the vertex?",
            solution: "Plug d into the function equation and evaluate:\n\
                       e = f(d)",
        }),
        Section::Heading("Exercises: factored form"),
    ];

    sections.extend([
        Section::Reveal(Reveal {
            prompt: "Exercise 1: f(x) = 2(x - 1)(x + 3). Find the roots, opening, \
                     stretch, and vertex.",
            solution: "Roots: x1 = 1 and x2 = -3.\n\
                       Opening: upward (a = 2 > 0).\n\
                       Stretch: stretched (|a| = 2 > 1).\n\
                       Vertex: d = (1 + (-3)) / 2 = -1, \
                       e = f(-1) = 2 * (-2) * 2 = -8, so S(-1|-8).",
        }),
        Section::Reveal(Reveal {
            prompt: "Exercise 2: g(x) = -3(x + 2)(x - 4). Find the roots, opening, \
                     stretch, and vertex.",
            solution: "Roots: x1 = -2 and x2 = 4.\n\
                       Opening: downward (a = -3 < 0).\n\
                       Stretch: stretched (|a| = 3 > 1).\n\
                       Vertex: d = (-2 + 4) / 2 = 1, \
                       e = g(1) = -3 * 3 * (-3) = 27, so S(1|27).",
        }),
        Section::Reveal(Reveal {
            prompt: "Exercise 3: h(x) = 0.5(x - 5)(x + 1). Find the roots, opening, \
                     stretch, and vertex.",
            solution: "Roots: x1 = 5 and x2 = -1.\n\
                       Opening: upward (a = 0.5 > 0).\n\
                       Stretch: compressed (|a| = 0.5 < 1).\n\
                       Vertex: d = (5 + (-1)) / 2 = 2, \
                       e = h(2) = 0.5 * (-3) * 3 = -4.5, so S(2|-4.5).",
        }),
        Section::Reveal(Reveal {
            prompt: "Exercise 4: k(x) = -2(x - 3)^2. Find the roots, opening, \
                     stretch, and vertex.",
            solution: "Only one root: x0 = 3.\n\
                       Opening: downward (a = -2 < 0).\n\
                       Stretch: stretched (|a| = 2 > 1).\n\
                       Vertex: this is the vertex form with a single root, so the \
                       vertex sits on the x-axis: S(3|0).",
        }),
        Section::Heading("3. The polynomial form"),
        Section::Formula("f(x) = ax^2 + bx + c"),
        Section::Reveal(Reveal {
            prompt: "What is the y-intercept of a parabola?",
            solution: "The function value where the parabola crosses the y-axis. \
                       You get it by evaluating f(0), which in polynomial form is \
                       simply c.",
        }),
        Section::Text(
            "Task: change the parameters and watch the graph. Find the pattern in \
             the equation.",
        ),
        Section::Explore(Explore {
            caption: "Polynomial form",
            kind: ExploreKind::PolySliders,
            sliders: vec![
                Slider::leading("a", -3.0, 3.0, 0.1, 1.0),
                Slider::new("b", -10.0, 10.0, 0.5, 0.0),
                Slider::new("c", -10.0, 10.0, 0.5, 0.0),
            ],
        }),
        Section::Reveal(Reveal {
            prompt: "What can be read directly off the polynomial form?",
            solution: "y-intercept: c.\n\
                       Opening: a > 0 opens upward, a < 0 opens downward.\n\
                       Stretch: |a| > 1 stretched, |a| < 1 compressed.",
        }),
        Section::Heading("The vertex from the polynomial form"),
        Section::Text(
            "Completing the square turns ax^2 + bx + c into vertex form. Factor a \
             out of the x-terms, add and subtract (b/2a)^2 inside the bracket, \
             collapse the binomial, and compare with a(x - d)^2 + e. The \
             comparison yields the vertex formulas:",
        ),
        Section::Formula("d = -b / (2a)        e = f(d)"),
        Section::Reveal(Reveal {
            prompt: "Worked example: find the vertex of f(x) = 2x^2 - 8x + 5.",
            solution: "Here a = 2, b = -8, c = 5.\n\
                       d = -b / (2a) = 8 / 4 = 2.\n\
                       e = f(2) = 2 * 4 - 16 + 5 = -3.\n\
                       Vertex S(2|-3); equivalently f(x) = 2(x - 2)^2 - 3. \
                       Expanding this vertex form returns the original polynomial.",
        }),
        Section::Heading("Exercises: polynomial form"),
        Section::Reveal(Reveal {
            prompt: "Exercise 1: f(x) = x^2 + 4x + 3. Find the y-intercept, \
                     opening, stretch, and vertex.",
            solution: "a = 1, b = 4, c = 3.\n\
                       y-intercept: c = 3.\n\
                       Opening: upward. Stretch: unscaled (|a| = 1).\n\
                       Vertex: d = -4/2 = -2, e = f(-2) = 4 - 8 + 3 = -1, \
                       so S(-2|-1).",
        }),
        Section::Reveal(Reveal {
            prompt: "Exercise 2: g(x) = -2x^2 + 8x - 5. Find the y-intercept, \
                     opening, stretch, and vertex.",
            solution: "a = -2, b = 8, c = -5.\n\
                       y-intercept: c = -5.\n\
                       Opening: downward. Stretch: stretched (|a| = 2).\n\
                       Vertex: d = -8/(-4) = 2, e = g(2) = -8 + 16 - 5 = 3, \
                       so S(2|3).",
        }),
        Section::Reveal(Reveal {
            prompt: "Exercise 3: h(x) = 0.5x^2 - 3x + 2. Find the y-intercept, \
                     opening, stretch, and vertex.",
            solution: "a = 0.5, b = -3, c = 2.\n\
                       y-intercept: c = 2.\n\
                       Opening: upward. Stretch: compressed (|a| = 0.5).\n\
                       Vertex: d = 3/1 = 3, e = h(3) = 4.5 - 9 + 2 = -2.5, \
                       so S(3|-2.5).",
        }),
        Section::Reveal(Reveal {
            prompt: "Exercise 4: k(x) = 3x^2 + 12x + 7. Find the y-intercept, \
                     opening, stretch, and vertex.",
            solution: "a = 3, b = 12, c = 7.\n\
                       y-intercept: c = 7.\n\
                       Opening: upward. Stretch: stretched (|a| = 3).\n\
                       Vertex: d = -12/6 = -2, e = k(-2) = 12 - 24 + 7 = -5, \
                       so S(-2|-5).",
        }),
        Section::Heading("Which form for which job?"),
        Section::Text(
            "Vertex form a(x - d)^2 + e shows the vertex S(d|e) - best for \
             sketching the graph and understanding shifts. Factored form \
             a(x - x1)(x - x2) shows the roots - best for intersections with the \
             x-axis. Polynomial form ax^2 + bx + c shows the y-intercept c - best \
             for evaluating and further algebra.",
        ),
    ]);

    Lesson {
        slug: "three-forms",
        title: "The three representations",
        sections,
    }
}
