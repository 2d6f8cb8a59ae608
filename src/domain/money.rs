use thiserror::Error;

/// Money is represented as integer cents to avoid floating-point precision issues.
/// 1 unit = 100 cents, so $50.00 = 5000 cents.
pub type Cents = i64;

/// Render cents with exactly two decimals and no currency symbol.
/// Example: 100000 -> "1000.00", -1500 -> "-15.00"
pub fn format_cents(cents: Cents) -> String {
    let magnitude = cents.unsigned_abs();
    let (units, fraction) = (magnitude / 100, magnitude % 100);
    if cents < 0 {
        format!("-{units}.{fraction:02}")
    } else {
        format!("{units}.{fraction:02}")
    }
}

/// Parse a decimal string into cents.
/// Example: "50.00" -> 5000, "12.5" -> 1250, "100" -> 10000, " -3 " -> -300,
/// "1e3" -> 100000, "2.5e-1" -> 25
///
/// More than two decimals are rounded half away from zero: "10.005" -> 1001.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    let (negative, unsigned) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    let (mantissa, exponent) = split_exponent(unsigned)?;
    let (units_str, decimal_str) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    if units_str.is_empty() && decimal_str.is_empty() {
        return Err(ParseCentsError::InvalidFormat);
    }
    if !units_str.bytes().all(|b| b.is_ascii_digit())
        || !decimal_str.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(ParseCentsError::InvalidFormat);
    }

    // All mantissa digits, with the decimal point moved by the exponent
    let digits: Vec<u8> = units_str
        .bytes()
        .chain(decimal_str.bytes())
        .map(|b| b - b'0')
        .collect();
    let point = units_str.len() as i64 + exponent;
    let digit_at = |position: i64| -> i64 {
        usize::try_from(position)
            .ok()
            .and_then(|i| digits.get(i))
            .map_or(0, |d| i64::from(*d))
    };

    let mut units: i64 = 0;
    for position in 0..point.max(0) {
        units = units
            .checked_mul(10)
            .and_then(|u| u.checked_add(digit_at(position)))
            .ok_or(ParseCentsError::OutOfRange)?;
    }

    // Two digits for the cents, the third decides rounding
    let mut fraction = digit_at(point) * 10 + digit_at(point + 1);
    if digit_at(point + 2) >= 5 {
        fraction += 1;
    }

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(fraction))
        .ok_or(ParseCentsError::OutOfRange)?;

    Ok(if negative { -cents } else { cents })
}

/// Split `1.5e3` into `("1.5", 3)`. Input without an exponent gets 0.
fn split_exponent(input: &str) -> Result<(&str, i64), ParseCentsError> {
    let Some(idx) = input.find(['e', 'E']) else {
        return Ok((input, 0));
    };

    let exponent = &input[idx + 1..];
    let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseCentsError::InvalidFormat);
    }
    let exponent: i16 = exponent.parse().map_err(|_| ParseCentsError::OutOfRange)?;

    Ok((&input[..idx], i64::from(exponent)))
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    #[error("invalid money format")]
    InvalidFormat,

    #[error("amount is too large")]
    OutOfRange,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_format_cents_always_shows_two_decimals() {
        assert_eq!(format_cents(100000), "1000.00");
        assert_eq!(format_cents(20000), "200.00");
        assert_eq!(format_cents(450), "4.50");
        assert_eq!(format_cents(7), "0.07");
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(-1500), "-15.00");
        assert_eq!(format_cents(-7), "-0.07");
        assert_eq!(format_cents(Cents::MIN), "-92233720368547758.08");
    }

    #[test]
    fn test_parse_cents() {
        assert_eq!(parse_cents("50.00"), Ok(5000));
        assert_eq!(parse_cents("50"), Ok(5000));
        assert_eq!(parse_cents("12.34"), Ok(1234));
        assert_eq!(parse_cents("12.5"), Ok(1250));
        assert_eq!(parse_cents("0.01"), Ok(1));
        assert_eq!(parse_cents(".50"), Ok(50));
        assert_eq!(parse_cents("7."), Ok(700));
        assert_eq!(parse_cents("-50.00"), Ok(-5000));
        assert_eq!(parse_cents("+5"), Ok(500));
        assert_eq!(parse_cents("  1000  "), Ok(100000));
    }

    #[test]
    fn test_parse_cents_rounds_extra_decimals() {
        assert_eq!(parse_cents("100.994"), Ok(10099));
        assert_eq!(parse_cents("100.995"), Ok(10100));
        assert_eq!(parse_cents("10.005"), Ok(1001));
        assert_eq!(parse_cents("0.004"), Ok(0));
        assert_eq!(parse_cents("-2.555"), Ok(-256));
    }

    #[test]
    fn test_parse_cents_scientific_notation() {
        assert_eq!(parse_cents("1e3"), Ok(100000));
        assert_eq!(parse_cents("1E3"), Ok(100000));
        assert_eq!(parse_cents("1.5e2"), Ok(15000));
        assert_eq!(parse_cents(".5e1"), Ok(500));
        assert_eq!(parse_cents("2.5e-1"), Ok(25));
        assert_eq!(parse_cents("125e-2"), Ok(125));
        assert_eq!(parse_cents("1e+2"), Ok(10000));
        assert_eq!(parse_cents("-4e1"), Ok(-4000));
        assert_eq!(parse_cents("1e-3"), Ok(0));
        assert_eq!(parse_cents("5e-3"), Ok(1));
        assert_eq!(parse_cents("0e30000"), Ok(0));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("abc")]
    #[case("12.34.56")]
    #[case("e5")]
    #[case("1e")]
    #[case("1e+")]
    #[case("1e3.5")]
    #[case("1.5e2e1")]
    #[case("inf")]
    #[case("nan")]
    #[case("1_000")]
    #[case("1,000")]
    #[case("-")]
    #[case(".")]
    #[case("--5")]
    #[case("$5")]
    fn test_parse_cents_invalid(#[case] input: &str) {
        assert_eq!(parse_cents(input), Err(ParseCentsError::InvalidFormat));
    }

    #[test]
    fn test_parse_cents_out_of_range() {
        assert_eq!(
            parse_cents("99999999999999999999"),
            Err(ParseCentsError::OutOfRange)
        );
        assert_eq!(
            parse_cents("92233720368547759"),
            Err(ParseCentsError::OutOfRange)
        );
        assert_eq!(parse_cents("1e17"), Err(ParseCentsError::OutOfRange));
        assert_eq!(parse_cents("1e99999"), Err(ParseCentsError::OutOfRange));
    }
}
