use pretty_assertions::assert_eq;

use super::*;

#[test]
fn parse_and_display() {
    let cases = [
        ("0", "0"),
        ("1.5", "1.5"),
        ("-1.50", "-1.5"),
        ("+42", "42"),
        ("0.001", "0.001"),
        ("-0.25", "-0.25"),
        (".5", "0.5"),
        ("7.", "7"),
        ("  3.14  ", "3.14"),
    ];
    for (input, expected) in cases {
        let parsed: Decimal = input.parse().unwrap();
        assert_eq!(parsed.to_string(), expected, "input {input:?}");
    }
}

#[test]
fn trailing_zeros_do_not_affect_equality() {
    let a: Decimal = "1.500".parse().unwrap();
    let b: Decimal = "1.5".parse().unwrap();
    assert_eq!(a, b);
    assert_eq!(a.scale(), 1);
    assert_eq!(a.mantissa(), 15);
}

#[test]
fn parse_rejects_garbage() {
    assert_eq!("".parse::<Decimal>(), Err(ParseDecimalError::Empty));
    assert_eq!("-".parse::<Decimal>(), Err(ParseDecimalError::Empty));
    assert_eq!(".".parse::<Decimal>(), Err(ParseDecimalError::Empty));
    assert_eq!("1.2.3".parse::<Decimal>(), Err(ParseDecimalError::InvalidDigit));
    assert_eq!("12a".parse::<Decimal>(), Err(ParseDecimalError::InvalidDigit));
    assert_eq!(
        "9".repeat(60).parse::<Decimal>(),
        Err(ParseDecimalError::Overflow)
    );
}

#[test]
fn fractional_digits_past_max_scale_are_truncated() {
    let input = format!("0.{}9", "1".repeat(28));
    let parsed: Decimal = input.parse().unwrap();
    assert_eq!(parsed.scale(), Decimal::MAX_SCALE);
    assert_eq!(parsed.to_string(), format!("0.{}", "1".repeat(28)));
}

#[test]
fn from_f64_rounds_to_fifteen_significant_digits() {
    assert_eq!(Decimal::from_f64(0.1 + 0.2), Some("0.3".parse().unwrap()));
    assert_eq!(Decimal::from_f64(1.0 / 3.0), Some("0.333333333333333".parse().unwrap()));
    assert_eq!(Decimal::from_f64(2.0 / 3.0), Some("0.666666666666667".parse().unwrap()));
    assert_eq!(
        Decimal::from_f64(123_456_789.123_456_78),
        Some("123456789.123457".parse().unwrap())
    );
    assert_eq!(Decimal::from_f64(1.5), Some("1.5".parse().unwrap()));
    assert_eq!(Decimal::from_f64(-0.125), Some("-0.125".parse().unwrap()));
    assert_eq!(Decimal::from_f64(100.0), Some(Decimal::from(100i64)));
    assert_eq!(Decimal::from_f64(1e20), Some("100000000000000000000".parse().unwrap()));
    assert_eq!(Decimal::from_f64(-0.0), Some(Decimal::ZERO));
}

#[test]
fn from_f64_edges() {
    assert_eq!(Decimal::from_f64(f64::NAN), None);
    assert_eq!(Decimal::from_f64(f64::INFINITY), None);
    assert_eq!(Decimal::from_f64(1e300), None);
    assert_eq!(Decimal::from_f64(1e-40), Some(Decimal::ZERO));
    assert_eq!(
        Decimal::from_f64(1.5e-27),
        Some("0.0000000000000000000000000015".parse().unwrap())
    );
}

#[test]
fn new_checks_scale() {
    assert_eq!(Decimal::new(15, 1), Some("1.5".parse().unwrap()));
    assert_eq!(Decimal::new(1, 29), None);
    assert_eq!(Decimal::new(0, 5), Some(Decimal::ZERO));
}

#[test]
fn to_f64_round_trips_simple_values() {
    let d: Decimal = "2.25".parse().unwrap();
    assert!((d.to_f64() - 2.25).abs() < f64::EPSILON);
}
