use quadlab::core::quadratic::{Opening, Quadratic, Roots, Stretch};

const TOL: f64 = 1e-9;

fn close(x: f64, y: f64) -> bool {
    (x - y).abs() <= TOL * x.abs().max(y.abs()).max(1.0)
}

const XS: [f64; 9] = [-10.0, -5.5, -2.0, -0.5, 0.0, 0.5, 2.0, 5.5, 10.0];

#[test]
fn vertex_construction_agrees_with_the_formula_everywhere() {
    for &a in &[-3.0, -0.5, 0.1, 1.0, 2.5] {
        for &d in &[-5.0, -0.5, 0.0, 2.0, 4.5] {
            for &e in &[-5.0, 0.0, 3.5] {
                let q = Quadratic::from_vertex(a, d, e).unwrap();
                for &x in &XS {
                    let expected = a * (x - d) * (x - d) + e;
                    assert!(
                        close(q.eval(x), expected),
                        "a={} d={} e={} x={}: {} vs {}",
                        a, d, e, x, q.eval(x), expected
                    );
                }
            }
        }
    }
}

#[test]
fn factored_construction_agrees_with_the_formula_everywhere() {
    for &a in &[-2.0, -1.0, 0.5, 3.0] {
        for &x1 in &[-8.0, -1.5, 0.0, 2.0] {
            for &x2 in &[-3.0, 0.0, 2.0, 6.5] {
                let q = Quadratic::from_factored(a, x1, x2).unwrap();
                for &x in &XS {
                    let expected = a * (x - x1) * (x - x2);
                    assert!(
                        close(q.eval(x), expected),
                        "a={} x1={} x2={} x={}: {} vs {}",
                        a, x1, x2, x, q.eval(x), expected
                    );
                }
            }
        }
    }
}

#[test]
fn vertex_round_trip_preserves_the_function() {
    for &(a, b, c) in &[
        (2.0, -8.0, 5.0),
        (-1.5, 3.0, 2.0),
        (0.5, 0.0, -4.0),
        (1.0, 4.0, 7.0),
    ] {
        let original = Quadratic::from_polynomial(a, b, c).unwrap();
        let v = original.vertex();
        let rebuilt = Quadratic::from_vertex(a, v.d, v.e).unwrap();
        for &x in &XS {
            assert!(
                close(original.eval(x), rebuilt.eval(x)),
                "a={} b={} c={} x={}",
                a, b, c, x
            );
        }
    }
}

#[test]
fn root_count_tracks_the_discriminant_sign() {
    let cases: [(f64, f64, f64, usize); 6] = [
        (1.0, -5.0, 6.0, 2),  // disc 1
        (1.0, -4.0, 4.0, 1),  // disc 0
        (1.0, 0.0, 1.0, 0),   // disc -4
        (-2.0, 0.0, 8.0, 2),  // downward, two roots
        (3.0, 6.0, 3.0, 1),   // (x+1)^2 scaled
        (0.5, 1.0, 2.0, 0),
    ];
    for (a, b, c, expected) in cases {
        let q = Quadratic::from_polynomial(a, b, c).unwrap();
        assert_eq!(q.root_count(), expected, "a={} b={} c={}", a, b, c);
        assert_eq!(q.roots().count(), expected, "a={} b={} c={}", a, b, c);
        assert_eq!(q.roots().to_vec().len(), expected);
    }
}

#[test]
fn produced_roots_evaluate_to_zero() {
    for &(a, b, c) in &[
        (1.0, -5.0, 6.0),
        (-2.0, 0.0, 8.0),
        (0.5, 2.0, -3.0),
        (2.0, -4.0, -16.0),
    ] {
        let q = Quadratic::from_polynomial(a, b, c).unwrap();
        for r in q.roots().to_vec() {
            assert!(
                q.eval(r).abs() < 1e-7,
                "a={} b={} c={} root={} f(root)={}",
                a, b, c, r, q.eval(r)
            );
        }
    }
}

#[test]
fn vertex_lies_midway_between_two_roots() {
    for &(a, x1, x2) in &[(1.0, -2.0, 2.0), (2.0, 1.0, -3.0), (-0.5, -1.0, 5.0)] {
        let q = Quadratic::from_factored(a, x1, x2).unwrap();
        let v = q.vertex();
        assert!(close(v.d, (x1 + x2) / 2.0), "d={} expected {}", v.d, (x1 + x2) / 2.0);
        assert!(close(v.e, q.eval(v.d)));
    }
}

#[test]
fn all_constructors_reject_zero_leading_coefficient() {
    assert!(Quadratic::from_polynomial(0.0, 1.0, 1.0).is_err());
    assert!(Quadratic::from_vertex(0.0, 1.0, 1.0).is_err());
    assert!(Quadratic::from_factored(0.0, 1.0, 1.0).is_err());
}

#[test]
fn worked_example_two_x_minus_one_x_plus_three() {
    // f(x) = 2(x - 1)(x + 3)
    let q = Quadratic::from_factored(2.0, 1.0, -3.0).unwrap();
    assert_eq!(q.roots(), Roots::Two(-3.0, 1.0));
    assert_eq!(q.opening(), Opening::Upward);
    assert_eq!(q.stretch(), Stretch::Stretched);
    let v = q.vertex();
    assert!(close(v.d, -1.0));
    assert!(close(v.e, -8.0));
}

#[test]
fn worked_example_minus_three_x_plus_two_x_minus_four() {
    // g(x) = -3(x + 2)(x - 4)
    let q = Quadratic::from_factored(-3.0, -2.0, 4.0).unwrap();
    assert_eq!(q.roots(), Roots::Two(-2.0, 4.0));
    assert_eq!(q.opening(), Opening::Downward);
    assert_eq!(q.stretch(), Stretch::Stretched);
    let v = q.vertex();
    assert!(close(v.d, 1.0));
    assert!(close(v.e, 27.0));
}

#[test]
fn worked_example_vertex_of_two_x_squared_minus_eight_x_plus_five() {
    // f(x) = 2x^2 - 8x + 5  has vertex S(2|-3), i.e. 2(x - 2)^2 - 3
    let q = Quadratic::from_polynomial(2.0, -8.0, 5.0).unwrap();
    let (a, d, e) = q.vertex_form();
    assert_eq!(a, 2.0);
    assert!(close(d, 2.0));
    assert!(close(e, -3.0));
}

#[test]
fn y_intercept_is_the_constant_coefficient() {
    let q = Quadratic::from_polynomial(0.5, -3.0, 2.0).unwrap();
    assert_eq!(q.y_intercept(), 2.0);
    assert_eq!(q.eval(0.0), 2.0);
}

#[test]
fn no_factored_form_without_real_roots() {
    let q = Quadratic::from_polynomial(1.0, -4.0, 5.0).unwrap();
    assert_eq!(q.roots(), Roots::None);
    assert_eq!(q.factored_form(), None);
}

#[test]
fn compressed_and_unscaled_classification() {
    let compressed = Quadratic::from_polynomial(0.5, 0.0, 0.0).unwrap();
    assert_eq!(compressed.stretch(), Stretch::Compressed);
    let unscaled = Quadratic::from_polynomial(-1.0, 2.0, 1.0).unwrap();
    assert_eq!(unscaled.stretch(), Stretch::Unscaled);
    assert_eq!(unscaled.opening(), Opening::Downward);
}

#[test]
fn instances_are_independent_across_threads() {
    let one = Quadratic::from_polynomial(1.0, -5.0, 6.0).unwrap();
    let two = Quadratic::from_polynomial(-2.0, 0.0, 8.0).unwrap();
    let h1 = std::thread::spawn(move || one.roots());
    let h2 = std::thread::spawn(move || two.roots());
    assert_eq!(h1.join().unwrap(), Roots::Two(2.0, 3.0));
    assert_eq!(h2.join().unwrap(), Roots::Two(-2.0, 2.0));
}

#[test]
fn near_zero_discriminant_counts_as_tangency() {
    // Perturb the tangent case by far less than the scaled epsilon.
    let q = Quadratic::from_polynomial(1.0, -4.0, 4.0 + 1e-13).unwrap();
    assert_eq!(q.root_count(), 1);
    // A coarser epsilon widens the tangency band.
    let coarse = Quadratic::from_polynomial(1.0, -4.0, 4.0 + 1e-5)
        .unwrap()
        .with_epsilon(1e-3);
    assert_eq!(coarse.root_count(), 1);
    assert_eq!(
        Quadratic::from_polynomial(1.0, -4.0, 4.0 + 1e-5)
            .unwrap()
            .root_count(),
        0
    );
}
