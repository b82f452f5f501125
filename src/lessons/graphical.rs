//! Lesson 2: solving quadratic equations graphically.

use super::{Explore, ExploreKind, Lesson, Quiz, Reveal, Section, Slider};

pub fn lesson() -> Lesson {
    let sections = vec![
        Section::Heading("Solving graphically"),
        Section::Text(
            "Quadratic equations show up whenever something follows a parabola: a \
             thrown ball, a bridge arch, a consumption curve. A question about the \
             curve then becomes an equation.",
        ),
        Section::Heading("Opening example: fuel consumption"),
        Section::Text(
            "The fuel consumption of a car depends on its speed. Measurements gave \
             the relation K(v) = 0.002v^2 - 0.18v + 8.55 for v > 40, where K(v) is \
             the consumption in liters per 100 km and v the speed in km/h.\n\n\
             Question: at which speed is the consumption exactly 7 liters/100km?",
        ),
        Section::Quiz(Quiz {
            prompt: "Translate the question into an equation.",
            placeholder: "e.g. 4*v^2+4*v+2=1",
            accepted: &[
                "0.002v^2-0.18v+8.55=7",
                "0.002*v^2-0.18*v+8.55=7",
                "0.002v²-0.18v+8.55=7",
                "7=0.002v^2-0.18v+8.55",
                "7=0.002*v^2-0.18*v+8.55",
                "7=0.002v²-0.18v+8.55",
            ],
            success: "Correct! The equation is 0.002v^2 - 0.18v + 8.55 = 7.",
            hint: "Not quite. Tip: substitute K(v) = 7.",
        }),
        Section::Text(
            "Move the slider to set a consumption target. The horizontal line \
             shows the chosen consumption; the marked points are the speeds that \
             reach it.",
        ),
        Section::Explore(Explore {
            caption: "Fuel consumption K(v)",
            kind: ExploreKind::FixedTarget {
                a: 0.002,
                b: -0.18,
                c: 8.55,
                x_min: 40.0,
                x_max: 120.0,
                domain_min: Some(40.0),
            },
            sliders: vec![Slider::new("K", 4.0, 9.0, 0.1, 4.0)],
        }),
        Section::Heading("How many solutions can a quadratic equation have?"),
        Section::Text(
            "Use the sliders to solve each equation graphically, then enter your \
             solution in the answer field.",
        ),
        Section::Text("Equation 1:  x^2 - 4x + 5 = 1"),
        Section::Explore(Explore {
            caption: "x^2 - 4x + 5",
            kind: ExploreKind::FixedTarget {
                a: 1.0,
                b: -4.0,
                c: 5.0,
                x_min: -2.0,
                x_max: 6.0,
                domain_min: None,
            },
            sliders: vec![Slider::new("y", -2.0, 8.0, 0.1, 0.0)],
        }),
        Section::Quiz(Quiz {
            prompt: "Your solution of x^2 - 4x + 5 = 1:",
            placeholder: "e.g. x=3 or x=5 or 'not solvable'",
            accepted: &["x=2", "2=x"],
            success: "Correct! x = 2 is the only solution.",
            hint: "Not quite. Tip: there is exactly one solution.",
        }),
        Section::Text("Equation 2:  x^2 - 4x + 3 = 2"),
        Section::Explore(Explore {
            caption: "x^2 - 4x + 3",
            kind: ExploreKind::FixedTarget {
                a: 1.0,
                b: -4.0,
                c: 3.0,
                x_min: -2.0,
                x_max: 6.0,
                domain_min: None,
            },
            sliders: vec![Slider::new("y", -2.0, 8.0, 0.1, 0.0)],
        }),
        Section::Quiz(Quiz {
            prompt: "Your solution of x^2 - 4x + 3 = 2:",
            placeholder: "e.g. x=3 or x=5 or 'not solvable'",
            accepted: &[
                "x=0.27orx=3.73",
                "x=3.73orx=0.27",
                "x=0,27orx=3,73",
                "x=3,73orx=0,27",
            ],
            success: "Correct! x = 0.27 or x = 3.73 solve the equation.",
            hint: "Not quite. Tip: there are two solutions.",
        }),
        Section::Text("Equation 3:  x^2 + 4x + 7 = 2"),
        Section::Explore(Explore {
            caption: "x^2 + 4x + 7",
            kind: ExploreKind::FixedTarget {
                a: 1.0,
                b: 4.0,
                c: 7.0,
                x_min: -8.0,
                x_max: 4.0,
                domain_min: None,
            },
            sliders: vec![Slider::new("y", -2.0, 8.0, 0.1, 0.0)],
        }),
        Section::Quiz(Quiz {
            prompt: "Your solution of x^2 + 4x + 7 = 2:",
            placeholder: "e.g. x=3 or x=5 or 'not solvable'",
            accepted: &["not solvable", "'not solvable'", "no solution"],
            success: "Correct! This equation has no solution.",
            hint: "Not quite. Tip: how many intersection points are there?",
        }),
        Section::Heading("Conclusion"),
        Section::Text(
            "A quadratic equation has exactly one of three outcomes. No solution: \
             the parabola runs entirely above or below the target height and never \
             meets the line. Exactly one solution: the vertex sits exactly at the \
             target height, so parabola and line touch in one point. Two \
             solutions: the parabola crosses the line in two points, so two \
             x-values share the same function value.",
        ),
        Section::Heading("Build your own equation"),
        Section::Text(
            "Pick coefficients for ax^2 + bx + c and a right-hand side, then read \
             the solutions off the graph.",
        ),
        Section::Explore(Explore {
            caption: "Your equation",
            kind: ExploreKind::CustomEquation,
            sliders: vec![
                Slider::leading("a", -5.0, 5.0, 1.0, 1.0),
                Slider::new("b", -10.0, 10.0, 1.0, 1.0),
                Slider::new("c", -10.0, 10.0, 1.0, 1.0),
                Slider::new("y", -10.0, 10.0, 1.0, 1.0),
            ],
        }),
        Section::Heading("Practice"),
        Section::Text(
            "Enter each equation above and solve it graphically:\n\
             a) x^2 - 5x + 6 = 0\n\
             b) x^2 - 3x = 4\n\
             c) x^2 - 4x + 7 = 3\n\
             d) x^2 + 4x + 4 = -1\n\
             e) x^2 - x - 2 = 0",
        ),
        Section::Reveal(Reveal {
            prompt: "Check your practice results.",
            solution: "a) x = 2 or x = 3.\n\
                       b) rewrite as x^2 - 3x - 4 = 0: x = -1 or x = 4.\n\
                       c) rewrite as x^2 - 4x + 4 = 0: x = 2 (one solution).\n\
                       d) rewrite as x^2 + 4x + 5 = 0: not solvable.\n\
                       e) x = -1 or x = 2.",
        }),
    ];

    Lesson {
        slug: "graphical",
        title: "Solving graphically",
        sections,
    }
}
