use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

use crate::core::quadratic::{Opening, Quadratic};
use crate::format;
use crate::lessons::answer;

/// Randomized drill on stdin/stdout: small integer quadratics, one
/// question per line, graded immediately.
pub fn main(count: usize) -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();
    let mut score = 0usize;
    let mut asked = 0usize;

    println!(
        "{}",
        "quadlab practice — answer with a number (or up/down); empty line quits"
            .bold()
    );

    for i in 1..=count {
        match ask_one(&mut rng, i)? {
            Some(true) => {
                asked += 1;
                score += 1;
            }
            Some(false) => asked += 1,
            None => break,
        }
    }

    println!();
    println!("{} {}/{}", "score:".bold(), score, asked);
    Ok(())
}

/// Ok(None) means the student quit (EOF or empty line).
fn ask_one(rng: &mut impl Rng, number: usize) -> anyhow::Result<Option<bool>> {
    let a = nonzero(rng, -3, 3) as f64;

    let (question, check): (String, Check) = match rng.gen_range(0..5) {
        0 => {
            let d = rng.gen_range(-5..=5) as f64;
            let e = rng.gen_range(-5..=5) as f64;
            let q = Quadratic::from_vertex(a, d, e)?;
            let (ca, cb, cc) = q.coefficients();
            (
                format!(
                    "f(x) = {} — x-coordinate d of the vertex?",
                    format::polynomial(ca, cb, cc)
                ),
                Check::Number(d),
            )
        }
        1 => {
            let d = rng.gen_range(-5..=5) as f64;
            let e = rng.gen_range(-5..=5) as f64;
            let q = Quadratic::from_vertex(a, d, e)?;
            let (ca, cb, cc) = q.coefficients();
            (
                format!(
                    "f(x) = {} — y-coordinate e of the vertex?",
                    format::polynomial(ca, cb, cc)
                ),
                Check::Number(e),
            )
        }
        2 => {
            let x1 = rng.gen_range(-5..=5) as f64;
            let x2 = distinct_from(rng, x1);
            let q = Quadratic::from_factored(a, x1, x2)?;
            let (ca, cb, cc) = q.coefficients();
            (
                format!(
                    "f(x) = {} — the larger of the two roots?",
                    format::polynomial(ca, cb, cc)
                ),
                Check::Number(x1.max(x2)),
            )
        }
        3 => {
            let x1 = rng.gen_range(-5..=5) as f64;
            let x2 = rng.gen_range(-5..=5) as f64;
            let q = Quadratic::from_factored(a, x1, x2)?;
            (
                format!(
                    "f(x) = {} — the y-intercept?",
                    format::factored(a, x1, x2)
                ),
                Check::Number(q.y_intercept()),
            )
        }
        _ => {
            let b = rng.gen_range(-5..=5) as f64;
            let c = rng.gen_range(-5..=5) as f64;
            let q = Quadratic::from_polynomial(a, b, c)?;
            (
                format!(
                    "f(x) = {} — does it open up or down?",
                    format::polynomial(a, b, c)
                ),
                Check::Opening(q.opening()),
            )
        }
    };

    println!();
    println!("{} {}", format!("[{}]", number).bold(), question);
    let Some(reply) = prompt()? else {
        return Ok(None);
    };

    let correct = check.grade(&reply);
    if correct {
        println!("{}", "correct!".green().bold());
    } else {
        println!("{} {}", "not quite —".red().bold(), check.reveal());
    }
    Ok(Some(correct))
}

enum Check {
    Number(f64),
    Opening(Opening),
}

impl Check {
    fn grade(&self, reply: &str) -> bool {
        let cleaned = answer::normalize(reply);
        match self {
            Check::Number(expected) => cleaned
                .parse::<f64>()
                .map(|v| (v - expected).abs() <= 0.01)
                .unwrap_or(false),
            Check::Opening(o) => match o {
                Opening::Upward => cleaned == "up" || cleaned == "upward",
                Opening::Downward => cleaned == "down" || cleaned == "downward",
            },
        }
    }

    fn reveal(&self) -> String {
        match self {
            Check::Number(expected) => format!("the answer is {}", format::num(*expected)),
            Check::Opening(o) => format!("it opens {}", o.label()),
        }
    }
}

fn prompt() -> anyhow::Result<Option<String>> {
    print!("{} ", "›".yellow());
    io::stdout().flush().ok();
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let line = line.trim().to_string();
    if line.is_empty() {
        return Ok(None);
    }
    Ok(Some(line))
}

fn nonzero(rng: &mut impl Rng, lo: i32, hi: i32) -> i32 {
    loop {
        let v = rng.gen_range(lo..=hi);
        if v != 0 {
            return v;
        }
    }
}

fn distinct_from(rng: &mut impl Rng, taken: f64) -> f64 {
    loop {
        let v = rng.gen_range(-5..=5) as f64;
        if v != taken {
            return v;
        }
    }
}
