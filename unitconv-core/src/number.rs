//! Decimal numbers as they appear on the terminal
//!
//! Input follows the classic floating-point literal grammar (optional sign,
//! fraction, exponent and a `f`/`d` type suffix, plus `NaN` and `Infinity`).
//! Output always carries a fractional digit and switches to `E` notation
//! outside `[1e-3, 1e7)`.

use crate::ConvertError;

/// Plain notation is used for magnitudes in this half-open range
const PLAIN_MIN: f64 = 1e-3;
const PLAIN_MAX: f64 = 1e7;

/// Parse a decimal literal
/// Supports: "5", "-3.25", "+.5", "1e3", "2.5E-2", "7f", "7d", "NaN", "-Infinity"
pub fn parse_decimal(text: &str) -> Result<f64, ConvertError> {
    let s = text.trim();

    let (negative, body) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let signed = |v: f64| if negative { -v } else { v };

    match body {
        "NaN" => return Ok(f64::NAN),
        "Infinity" => return Ok(signed(f64::INFINITY)),
        _ => {}
    }

    let body = body.strip_suffix(&['f', 'F', 'd', 'D'][..]).unwrap_or(body);

    // str::parse also takes "inf" and "nan"
    let well_formed = body.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && body
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !well_formed {
        return Err(ConvertError::parse(text));
    }

    body.parse::<f64>()
        .map(signed)
        .map_err(|_| ConvertError::parse(text))
}

/// Render a value for the result line
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        let plain = value.to_string();
        if plain.contains('.') {
            plain
        } else {
            format!("{}.0", plain)
        }
    } else {
        let scientific = format!("{:e}", value);
        let (mantissa, exponent) = scientific
            .split_once('e')
            .unwrap_or((scientific.as_str(), "0"));
        if mantissa.contains('.') {
            format!("{}E{}", mantissa, exponent)
        } else {
            format!("{}.0E{}", mantissa, exponent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_and_fraction() {
        assert_eq!(parse_decimal("5").unwrap(), 5.0);
        assert_eq!(parse_decimal("-3.25").unwrap(), -3.25);
        assert_eq!(parse_decimal("+.5").unwrap(), 0.5);
        assert_eq!(parse_decimal("5.").unwrap(), 5.0);
    }

    #[test]
    fn test_parse_exponent_and_suffix() {
        assert_eq!(parse_decimal("1e3").unwrap(), 1000.0);
        assert_eq!(parse_decimal("2.5E-2").unwrap(), 0.025);
        assert_eq!(parse_decimal("7f").unwrap(), 7.0);
        assert_eq!(parse_decimal("7D").unwrap(), 7.0);
    }

    #[test]
    fn test_parse_special_literals() {
        assert!(parse_decimal("NaN").unwrap().is_nan());
        assert_eq!(parse_decimal("Infinity").unwrap(), f64::INFINITY);
        assert_eq!(parse_decimal("-Infinity").unwrap(), f64::NEG_INFINITY);
        assert!(parse_decimal("-0").unwrap().is_sign_negative());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "abc", "inf", "nan", "infinity", "--5", "+-5", "1e", ".", "5km", "0x10", "1,5"] {
            assert_eq!(
                parse_decimal(input),
                Err(ConvertError::parse(input)),
                "input: {:?}",
                input
            );
        }
    }

    #[test]
    fn test_format_plain_range() {
        assert_eq!(format_decimal(5.0), "5.0");
        assert_eq!(format_decimal(1.0), "1.0");
        assert_eq!(format_decimal(-5.0), "-5.0");
        assert_eq!(format_decimal(273.15), "273.15");
        assert_eq!(format_decimal(0.001), "0.001");
        assert_eq!(format_decimal(9999999.5), "9999999.5");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_decimal(0.0), "0.0");
        assert_eq!(format_decimal(-0.0), "-0.0");
    }

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_decimal(1e7), "1.0E7");
        assert_eq!(format_decimal(1.5e-4), "1.5E-4");
        assert_eq!(format_decimal(-2.5e10), "-2.5E10");
        assert_eq!(format_decimal(1e-5), "1.0E-5");
    }

    #[test]
    fn test_format_special() {
        assert_eq!(format_decimal(f64::NAN), "NaN");
        assert_eq!(format_decimal(f64::INFINITY), "Infinity");
        assert_eq!(format_decimal(f64::NEG_INFINITY), "-Infinity");
    }
}
