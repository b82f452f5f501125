use quadlab::lessons::answer::{matches, normalize};

#[test]
fn whitespace_and_case_are_ignored() {
    assert!(matches("  X = 2 ", &["x=2"]));
    assert!(matches("2 = x", &["x=2", "2=x"]));
}

#[test]
fn comma_decimals_match_dot_decimals() {
    let accepted = ["x=0.27orx=3.73"];
    assert!(matches("x=0,27 or x=3,73", &accepted));
    assert!(matches("x = 0.27 or x = 3.73", &accepted));
}

#[test]
fn the_fuel_equation_is_accepted_in_either_direction() {
    let accepted = [
        "0.002v^2-0.18v+8.55=7",
        "0.002*v^2-0.18*v+8.55=7",
        "7=0.002v^2-0.18v+8.55",
    ];
    assert!(matches("0,002 v^2 - 0,18 v + 8,55 = 7", &accepted));
    assert!(matches("7 = 0.002v^2 - 0.18v + 8.55", &accepted));
    assert!(!matches("0.002v^2-0.18v+8.55=9", &accepted));
}

#[test]
fn wrong_answers_are_rejected() {
    assert!(!matches("x=3", &["x=2", "2=x"]));
    assert!(!matches("", &["x=2"]));
}

#[test]
fn normalization_is_exactly_the_documented_cleanup() {
    assert_eq!(normalize("  Not Solvable "), "notsolvable");
    assert_eq!(normalize("X=1,5"), "x=1.5");
    // No algebra: reordered but equivalent input does not normalize equal.
    assert_ne!(normalize("2=x"), normalize("x=2"));
}
