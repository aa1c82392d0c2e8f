//! Text conversions used by the generic flag setter.

use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;
use std::time::Duration;

use crate::error::{NumError, SetError};

/// Parses the classic boolean literal set.
pub(crate) fn parse_bool(text: &str) -> Result<bool, SetError> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(SetError::invalid(text)),
    }
}

/// Parses a base-10 integer, reporting overflow separately from bad syntax.
pub(crate) fn parse_int<T>(text: &str) -> Result<T, NumError>
where
    T: FromStr<Err = ParseIntError>,
{
    text.parse::<T>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => NumError::range(text),
        _ => NumError::syntax(text),
    })
}

/// Parses a floating point number of the target width.
///
/// Finite literals that round to infinity are reported as out of range.
pub(crate) fn parse_float<T>(text: &str) -> Result<T, NumError>
where
    T: FromStr + Float,
{
    let value = text.parse::<T>().map_err(|_| NumError::syntax(text))?;
    if value.is_infinite() && !is_infinity_literal(text) {
        return Err(NumError::range(text));
    }
    Ok(value)
}

/// Parses a time span such as `1h30m` or `250ms`.
pub(crate) fn parse_duration(text: &str) -> Result<Duration, SetError> {
    humantime::parse_duration(text).map_err(|_| SetError::invalid(text))
}

fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// The floating point widths a flag can target.
pub(crate) trait Float: Copy {
    fn is_infinite(self) -> bool;
}

impl Float for f32 {
    fn is_infinite(self) -> bool {
        Self::is_infinite(self)
    }
}

impl Float for f64 {
    fn is_infinite(self) -> bool {
        Self::is_infinite(self)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for text conversions.

    use super::*;
    use crate::NumErrorKind;
    use rstest::rstest;

    #[rstest]
    #[case("1", true)]
    #[case("t", true)]
    #[case("TRUE", true)]
    #[case("True", true)]
    #[case("0", false)]
    #[case("F", false)]
    #[case("false", false)]
    fn parses_boolean_literals(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(parse_bool(text).expect("valid literal"), expected);
    }

    #[rstest]
    #[case("yes")]
    #[case("tRuE")]
    #[case("")]
    fn rejects_unknown_boolean_literals(#[case] text: &str) {
        let err = parse_bool(text).expect_err("literal should be rejected");
        assert!(matches!(err, SetError::Invalid { ref value } if value == text));
    }

    #[rstest]
    #[case("99999999999", NumErrorKind::Range)]
    #[case("-99999999999", NumErrorKind::Range)]
    #[case("abc", NumErrorKind::Syntax)]
    #[case("", NumErrorKind::Syntax)]
    #[case("1.5", NumErrorKind::Syntax)]
    fn classifies_i32_failures(#[case] text: &str, #[case] kind: NumErrorKind) {
        let err = parse_int::<i32>(text).expect_err("conversion should fail");
        assert_eq!(err.kind(), kind);
        assert_eq!(err.value(), text);
    }

    #[test]
    fn unsigned_rejects_negative_as_syntax() {
        let err = parse_int::<u32>("-1").expect_err("negative unsigned");
        assert_eq!(err.kind(), NumErrorKind::Syntax);
    }

    #[test]
    fn accepts_explicit_sign() {
        assert_eq!(parse_int::<i64>("+42").expect("signed literal"), 42);
        assert_eq!(parse_int::<i64>("-42").expect("signed literal"), -42);
    }

    #[rstest]
    #[case("1e39")]
    #[case("-1e39")]
    fn f32_overflow_is_a_range_error(#[case] text: &str) {
        let err = parse_float::<f32>(text).expect_err("overflow");
        assert_eq!(err.kind(), NumErrorKind::Range);
    }

    #[test]
    fn f64_holds_values_too_large_for_f32() {
        let value = parse_float::<f64>("1e39").expect("fits in f64");
        assert!(value > 1e38);
    }

    #[rstest]
    #[case("inf")]
    #[case("-Infinity")]
    fn infinity_literals_are_accepted(#[case] text: &str) {
        let value = parse_float::<f64>(text).expect("infinity literal");
        assert!(value.is_infinite());
    }

    #[test]
    fn float_garbage_is_a_syntax_error() {
        let err = parse_float::<f64>("ten").expect_err("not a number");
        assert_eq!(err.kind(), NumErrorKind::Syntax);
    }

    #[rstest]
    #[case("1h30m", Duration::from_secs(5400))]
    #[case("250ms", Duration::from_millis(250))]
    #[case("2s", Duration::from_secs(2))]
    fn parses_time_spans(#[case] text: &str, #[case] expected: Duration) {
        assert_eq!(parse_duration(text).expect("valid span"), expected);
    }

    #[test]
    fn rejects_unitless_time_spans() {
        let err = parse_duration("90").expect_err("unit required");
        assert!(matches!(err, SetError::Invalid { .. }));
    }
}
