use colored::Colorize;

use crate::cli::FormKind;
use crate::config::Settings;
use crate::core::quadratic::{Quadratic, Roots};
use crate::format;

pub fn main(form: FormKind, p1: f64, p2: f64, p3: f64, settings: &Settings) -> anyhow::Result<()> {
    let q = match form {
        FormKind::Poly => Quadratic::from_polynomial(p1, p2, p3),
        FormKind::Vertex => Quadratic::from_vertex(p1, p2, p3),
        FormKind::Factored => Quadratic::from_factored(p1, p2, p3),
    }?
    .with_epsilon(settings.epsilon);

    let (a, b, c) = q.coefficients();
    let (_, d, e) = q.vertex_form();

    println!("{}", "representations".bold().underline());
    println!("  polynomial: f(x) = {}", format::polynomial(a, b, c));
    println!("  vertex:     f(x) = {}", format::vertex(a, d, e));
    match q.factored_form() {
        Some((fa, x1, x2)) => {
            println!("  factored:   f(x) = {}", format::factored(fa, x1, x2))
        }
        None => println!("  factored:   {}", "none (no real roots)".dimmed()),
    }

    println!();
    println!("{}", "properties".bold().underline());
    println!(
        "  discriminant: {}",
        format::approx(q.discriminant(), 4)
    );
    match q.roots() {
        Roots::None => println!("  roots:        none"),
        Roots::One(x) => println!("  roots:        x0 = {}", format::approx(x, 4)),
        Roots::Two(x1, x2) => println!(
            "  roots:        x1 = {}, x2 = {}",
            format::approx(x1, 4),
            format::approx(x2, 4)
        ),
    }
    println!(
        "  vertex:       S({}|{})",
        format::approx(d, 4),
        format::approx(e, 4)
    );
    println!("  y-intercept:  {}", format::approx(q.y_intercept(), 4));
    println!("  opening:      {}", q.opening().label());
    println!("  stretch:      {}", q.stretch().label());
    Ok(())
}
