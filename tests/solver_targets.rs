use quadlab::core::quadratic::Roots;
use quadlab::core::solver::{solve_for_target, solve_shifted_square};

#[test]
fn tangent_target_gives_exactly_one_solution() {
    // x^2 - 4x + 5 = 1 has discriminant 0 after shifting: x = 2.
    match solve_for_target(1.0, -4.0, 5.0, 1.0).unwrap() {
        Roots::One(x) => assert!((x - 2.0).abs() < 1e-9),
        other => panic!("expected one solution, got {:?}", other),
    }
}

#[test]
fn unreachable_target_gives_no_solution() {
    // x^2 + 4x + 7 = 2 has negative discriminant after shifting.
    assert_eq!(solve_for_target(1.0, 4.0, 7.0, 2.0).unwrap(), Roots::None);
}

#[test]
fn crossing_target_gives_two_ascending_solutions() {
    // x^2 - 4x + 3 = 2  →  x^2 - 4x + 1 = 0  →  x = 2 ± sqrt(3)
    match solve_for_target(1.0, -4.0, 3.0, 2.0).unwrap() {
        Roots::Two(x1, x2) => {
            assert!(x1 < x2);
            assert!((x1 - (2.0 - 3.0_f64.sqrt())).abs() < 1e-9);
            assert!((x2 - (2.0 + 3.0_f64.sqrt())).abs() < 1e-9);
        }
        other => panic!("expected two solutions, got {:?}", other),
    }
}

#[test]
fn fuel_consumption_curve_hits_seven_liters_twice() {
    // K(v) = 0.002 v^2 - 0.18 v + 8.55 = 7
    match solve_for_target(0.002, -0.18, 8.55, 7.0).unwrap() {
        Roots::Two(v1, v2) => {
            assert!(v1 < v2);
            // Both solutions satisfy the original equation.
            for v in [v1, v2] {
                let k = 0.002 * v * v - 0.18 * v + 8.55;
                assert!((k - 7.0).abs() < 1e-9, "K({}) = {}", v, k);
            }
        }
        other => panic!("expected two speeds, got {:?}", other),
    }
}

#[test]
fn zero_target_matches_plain_root_finding() {
    // x^2 - 5x + 6 = 0  →  x = 2, x = 3
    assert_eq!(
        solve_for_target(1.0, -5.0, 6.0, 0.0).unwrap(),
        Roots::Two(2.0, 3.0)
    );
}

#[test]
fn solver_rejects_zero_leading_coefficient() {
    assert!(solve_for_target(0.0, 1.0, 1.0, 0.0).is_err());
    assert!(solve_shifted_square(0.0, 1.0, 1.0).is_err());
}

#[test]
fn practice_list_answers() {
    // b) x^2 - 3x = 4
    assert_eq!(
        solve_for_target(1.0, -3.0, 0.0, 4.0).unwrap(),
        Roots::Two(-1.0, 4.0)
    );
    // c) x^2 - 4x + 7 = 3
    assert_eq!(solve_for_target(1.0, -4.0, 7.0, 3.0).unwrap(), Roots::One(2.0));
    // d) x^2 + 4x + 4 = -1
    assert_eq!(solve_for_target(1.0, 4.0, 4.0, -1.0).unwrap(), Roots::None);
    // e) x^2 - x - 2 = 0
    assert_eq!(
        solve_for_target(1.0, -1.0, -2.0, 0.0).unwrap(),
        Roots::Two(-1.0, 2.0)
    );
}

#[test]
fn root_extraction_type_one() {
    // -x^2 + 9 = 0 rearranges to -x^2 = -9, i.e. a=-1, d=0, k=-9.
    assert_eq!(
        solve_shifted_square(-1.0, 0.0, -9.0).unwrap(),
        Roots::Two(-3.0, 3.0)
    );
    // x^2 + 1 = 0 rearranges to x^2 = -1: no real solution.
    assert_eq!(solve_shifted_square(1.0, 0.0, -1.0).unwrap(), Roots::None);
}

#[test]
fn root_extraction_type_two() {
    // 2(x - 4)^2 = 50
    assert_eq!(
        solve_shifted_square(2.0, 4.0, 50.0).unwrap(),
        Roots::Two(-1.0, 9.0)
    );
    // 3(x + 1)^2 = 21  →  x = -1 ± sqrt(7)
    match solve_shifted_square(3.0, -1.0, 21.0).unwrap() {
        Roots::Two(x1, x2) => {
            assert!((x1 - (-1.0 - 7.0_f64.sqrt())).abs() < 1e-9);
            assert!((x2 - (-1.0 + 7.0_f64.sqrt())).abs() < 1e-9);
        }
        other => panic!("expected two solutions, got {:?}", other),
    }
}
