use crate::config::Settings;
use crate::core::quadratic::Quadratic;
use crate::plot;

/// TSV to stdout, one `x<TAB>f(x)` pair per line, ready for gnuplot
/// or a spreadsheet.
pub fn main(
    a: f64,
    b: f64,
    c: f64,
    from: Option<f64>,
    to: Option<f64>,
    points: Option<usize>,
    settings: &Settings,
) -> anyhow::Result<()> {
    let q = Quadratic::from_polynomial(a, b, c)?.with_epsilon(settings.epsilon);
    let x_min = from.unwrap_or(settings.x_min);
    let x_max = to.unwrap_or(settings.x_max);
    if x_max <= x_min {
        anyhow::bail!("empty sample window: --from {} --to {}", x_min, x_max);
    }
    for (x, y) in plot::sample(&q, x_min, x_max, points.unwrap_or(settings.samples)) {
        println!("{}\t{}", x, y);
    }
    Ok(())
}
