use colored::Colorize;

use crate::config::Settings;
use crate::core::quadratic::{Quadratic, Roots};
use crate::core::solver;
use crate::format;

pub fn main(a: f64, b: f64, c: f64, target: f64, settings: &Settings) -> anyhow::Result<()> {
    let shifted = Quadratic::from_polynomial(a, b, c - target)?.with_epsilon(settings.epsilon);
    let roots = solver::solve_for_target_eps(a, b, c, target, settings.epsilon)?;

    println!(
        "{} {} = {}",
        "equation:".bold(),
        format::polynomial(a, b, c),
        format::num(target)
    );
    println!(
        "{} {}",
        "discriminant:".bold(),
        format::approx(shifted.discriminant(), 4)
    );

    match roots {
        Roots::None => println!("{}", "no real solution".red().bold()),
        Roots::One(x) => println!(
            "{} x = {}",
            "one solution:".green().bold(),
            format::approx(x, 4)
        ),
        Roots::Two(x1, x2) => println!(
            "{} x1 = {}, x2 = {}",
            "two solutions:".green().bold(),
            format::approx(x1, 4),
            format::approx(x2, 4)
        ),
    }
    println!("{} L = {}", "solution set:".bold(), format::solution_set(&roots));
    Ok(())
}
