//! Lesson 3: solving by taking square roots.

use super::{Explore, ExploreKind, Lesson, Reveal, Section, Slider};

pub fn lesson() -> Lesson {
    let sections = vec![
        Section::Heading("Root extraction"),
        Section::Text(
            "Whenever a quadratic equation has one of these two shapes,\n\n\
             Type 1:  x^2 = k\n\
             Type 2:  (x - d)^2 = k\n\n\
             it can be solved by taking square roots. Not every equation wears \
             this shape openly, so some rearranging may be needed first. The \
             important thing is that no extra linear x-term (like +3x) appears.",
        ),
        Section::Heading("Worked example: type 1"),
        Section::Text(
            "-x^2 + 9 = 0 does not look like type 1 at first, so rearrange:\n\n\
             -x^2 + 9 = 0     | -9\n\
             -x^2 = -9        | * (-1)\n\
             x^2 = 9          | take roots\n\
             x = -3  or  x = 3\n\n\
             Solution set: L = {-3, 3}",
        ),
        Section::Heading("Worked example: type 2"),
        Section::Text(
            "2(x - 4)^2 = 50 hides its type 2 shape behind the factor 2:\n\n\
             2(x - 4)^2 = 50  | : 2\n\
             (x - 4)^2 = 25   | take roots\n\
             x - 4 = -5  or  x - 4 = 5   | +4\n\
             x = -1  or  x = 9\n\n\
             Solution set: L = {-1, 9}",
        ),
        Section::Heading("Try it yourself"),
        Section::Text(
            "Set up your own extraction equation a(x - d)^2 = k and watch how the \
             number of solutions changes with k.",
        ),
        Section::Explore(Explore {
            caption: "a(x - d)^2 = k",
            kind: ExploreKind::SquareExtract,
            sliders: vec![
                Slider::leading("a", -3.0, 3.0, 1.0, 1.0),
                Slider::new("d", -5.0, 5.0, 1.0, 0.0),
                Slider::new("k", -10.0, 10.0, 1.0, 4.0),
            ],
        }),
        Section::Heading("Exercises: solve by taking roots"),
        Section::Reveal(Reveal {
            prompt: "a) -x^2 + 5 = 0",
            solution: "-x^2 + 5 = 0  | -5\n\
                       -x^2 = -5     | : (-1)\n\
                       x^2 = 5       | take roots\n\
                       x1 = sqrt(5) ~ 2.24, x2 = -sqrt(5) ~ -2.24\n\
                       Solution set: L = {-sqrt(5), sqrt(5)}",
        }),
        Section::Reveal(Reveal {
            prompt: "b) 3x^2 - 6 = 0",
            solution: "3x^2 - 6 = 0  | +6\n\
                       3x^2 = 6      | : 3\n\
                       x^2 = 2       | take roots\n\
                       x1 = sqrt(2) ~ 1.41, x2 = -sqrt(2) ~ -1.41\n\
                       Solution set: L = {-sqrt(2), sqrt(2)}",
        }),
        Section::Reveal(Reveal {
            prompt: "c) x^2 + 1 = 0",
            solution: "x^2 + 1 = 0  | -1\n\
                       x^2 = -1\n\
                       No solution: no real number has a negative square.\n\
                       Solution set: L = {} (empty set)",
        }),
        Section::Reveal(Reveal {
            prompt: "d) 6x^2 - 27 = 0",
            solution: "6x^2 - 27 = 0  | +27\n\
                       6x^2 = 27      | : 6\n\
                       x^2 = 4.5      | take roots\n\
                       x1 = sqrt(4.5) ~ 2.12, x2 = -sqrt(4.5) ~ -2.12\n\
                       Solution set: L = {-sqrt(4.5), sqrt(4.5)}",
        }),
        Section::Reveal(Reveal {
            prompt: "e) (x - 4)^2 = 25",
            solution: "(x - 4)^2 = 25  | take roots\n\
                       x - 4 = -5 or x - 4 = 5  | +4\n\
                       x1 = 9, x2 = -1\n\
                       Solution set: L = {-1, 9}",
        }),
        Section::Reveal(Reveal {
            prompt: "f) 3(x + 1)^2 = 21",
            solution: "3(x + 1)^2 = 21  | : 3\n\
                       (x + 1)^2 = 7    | take roots\n\
                       x + 1 = -sqrt(7) or x + 1 = sqrt(7)  | -1\n\
                       x1 = -1 + sqrt(7) ~ 1.65, x2 = -1 - sqrt(7) ~ -3.65\n\
                       Solution set: L = {-1 - sqrt(7), -1 + sqrt(7)}",
        }),
    ];

    Lesson {
        slug: "root-extraction",
        title: "Root extraction",
        sections,
    }
}
