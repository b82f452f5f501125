//! Text rendering of equations and solution sets for the CLI and TUI.
//!
//! Kept out of the core on purpose: the model hands back numbers and
//! enum labels, and everything string-shaped happens here.

use crate::core::quadratic::Roots;

/// Render a slider-friendly number: integers without a decimal point,
/// everything else via the shortest round-trip representation.
pub fn num(v: f64) -> String {
    if v == v.trunc() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

/// Round to `decimals` places and trim trailing zeros, for displaying
/// irrational solutions like `0.27` or `3.73`.
pub fn approx(v: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, v);
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn lead(a: f64, body: &str) -> String {
    if a == 1.0 {
        body.to_string()
    } else if a == -1.0 {
        format!("-{}", body)
    } else {
        format!("{}{}", num(a), body)
    }
}

fn push_term(s: &mut String, k: f64, var: &str) {
    if k == 0.0 {
        return;
    }
    s.push_str(if k < 0.0 { " - " } else { " + " });
    let m = k.abs();
    if m == 1.0 {
        s.push_str(var);
    } else {
        s.push_str(&num(m));
        s.push_str(var);
    }
}

fn push_const(s: &mut String, k: f64) {
    if k == 0.0 {
        return;
    }
    s.push_str(if k < 0.0 { " - " } else { " + " });
    s.push_str(&num(k.abs()));
}

/// `ax^2 + bx + c` with conventional sign placement.
pub fn polynomial(a: f64, b: f64, c: f64) -> String {
    let mut s = lead(a, "x^2");
    push_term(&mut s, b, "x");
    push_const(&mut s, c);
    s
}

/// `a(x - d)^2 + e`; collapses to `ax^2 + e` when the vertex sits on
/// the y-axis.
pub fn vertex(a: f64, d: f64, e: f64) -> String {
    let body = if d == 0.0 {
        "x^2".to_string()
    } else if d < 0.0 {
        format!("(x + {})^2", num(-d))
    } else {
        format!("(x - {})^2", num(d))
    };
    let mut s = lead(a, &body);
    push_const(&mut s, e);
    s
}

fn factor(r: f64) -> String {
    if r == 0.0 {
        "x".to_string()
    } else if r < 0.0 {
        format!("(x + {})", num(-r))
    } else {
        format!("(x - {})", num(r))
    }
}

/// `a(x - x1)(x - x2)`; coincident roots render as a square.
pub fn factored(a: f64, x1: f64, x2: f64) -> String {
    let body = if x1 == x2 {
        let f = factor(x1);
        if f == "x" {
            "x^2".to_string()
        } else {
            format!("{}^2", f)
        }
    } else {
        format!("{}{}", factor(x1), factor(x2))
    };
    lead(a, &body)
}

/// Solution set in the `L = {…}` style the lessons use, with
/// two-decimal approximations.
pub fn solution_set(roots: &Roots) -> String {
    match roots {
        Roots::None => "{}".to_string(),
        Roots::One(x) => format!("{{{}}}", approx(*x, 2)),
        Roots::Two(x1, x2) => format!("{{{}, {}}}", approx(*x1, 2), approx(*x2, 2)),
    }
}
