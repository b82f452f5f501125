//! Free-text answer checking for the quiz sections.
//!
//! Deliberately minimal: normalize the submission (trim, drop spaces,
//! unify decimal separators, lowercase) and test membership in a fixed
//! accepted-string set. The accepted sets are exercise content;
//! nothing here understands algebra.

pub fn normalize(input: &str) -> String {
    input.trim().replace(' ', "").replace(',', ".").to_lowercase()
}

pub fn matches(input: &str, accepted: &[&str]) -> bool {
    let submitted = normalize(input);
    accepted.iter().any(|a| normalize(a) == submitted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_unifies_spacing_case_and_decimal_separator() {
        assert_eq!(normalize("  X = 0,27 "), "x=0.27");
        assert_eq!(normalize("x=2"), "x=2");
    }

    #[test]
    fn matching_is_insensitive_to_formatting_noise() {
        let accepted = ["x=2", "2=x"];
        assert!(matches("x = 2", &accepted));
        assert!(matches("2=X", &accepted));
        assert!(!matches("x=3", &accepted));
    }
}
