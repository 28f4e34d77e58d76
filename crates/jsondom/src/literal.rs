//! Validation of unquoted literals.
//!
//! The parser accumulates a value that starts with `t`, `f`, `n`, a digit,
//! or `-` until it reaches a delimiter, then dispatches the completed text:
//! exact keyword match, or the JSON number grammar below.

/// Checks `text` against the JSON number grammar: optional leading `-`, an
/// integer part with no leading zeros, an optional `.` with at least one
/// fraction digit, and an optional `e`/`E` exponent with an optional sign
/// and at least one digit.
pub(crate) fn is_valid_number(text: &str) -> bool {
    use NumberState::{Dot, Exp, ExpMark, ExpSign, Frac, Int, Minus, Start, Zero};

    #[derive(Clone, Copy)]
    enum NumberState {
        Start,
        Minus,
        Zero,
        Int,
        Dot,
        Frac,
        ExpMark,
        ExpSign,
        Exp,
    }

    let mut state = Start;
    for c in text.chars() {
        state = match (state, c) {
            (Start, '-') => Minus,
            (Start | Minus, '0') => Zero,
            (Start | Minus, '1'..='9') => Int,
            (Int, '0'..='9') => Int,
            (Zero | Int, '.') => Dot,
            (Dot | Frac, '0'..='9') => Frac,
            (Zero | Int | Frac, 'e' | 'E') => ExpMark,
            (ExpMark, '+' | '-') => ExpSign,
            (ExpMark | ExpSign | Exp, '0'..='9') => Exp,
            _ => return false,
        };
    }
    matches!(state, Zero | Int | Frac | Exp)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::is_valid_number;

    #[rstest]
    #[case("0")]
    #[case("-0")]
    #[case("42")]
    #[case("-17")]
    #[case("0.5")]
    #[case("3.14159")]
    #[case("-0.001")]
    #[case("1e3")]
    #[case("1E3")]
    #[case("2.5e-10")]
    #[case("2.5E+10")]
    #[case("0e0")]
    #[case("1234567890123456789012345678901234567890")]
    fn accepts(#[case] text: &str) {
        assert!(is_valid_number(text), "{text:?} should be a valid number");
    }

    #[rstest]
    #[case("")]
    #[case("-")]
    #[case("+1")]
    #[case("01")]
    #[case("-01")]
    #[case("1.")]
    #[case(".5")]
    #[case("1e")]
    #[case("1e+")]
    #[case("1.e3")]
    #[case("1.2.3")]
    #[case("1e3e4")]
    #[case("0x10")]
    #[case("NaN")]
    #[case("Infinity")]
    #[case("tru")]
    #[case("1 2")]
    fn rejects(#[case] text: &str) {
        assert!(!is_valid_number(text), "{text:?} should be rejected");
    }
}
