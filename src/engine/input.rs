use crate::engine::error::ConversionError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Longest leading decimal literal, read the way a browser's parseFloat reads it
    /// Matches: "12", "-3.5", ".5", "4.", "1e3", "2.5E-4"; trailing text is ignored
    static ref LEADING_NUMBER: Regex = Regex::new(
        r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?"
    ).unwrap();
}

/// Parse raw input text into a finite number
pub fn parse_value(raw: &str) -> Result<f64, ConversionError> {
    let invalid = || ConversionError::InvalidValue(raw.to_string());

    let literal = LEADING_NUMBER
        .find(raw.trim())
        .map(|m| m.as_str())
        .ok_or_else(invalid)?;

    let value: f64 = literal.parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_value("1000"), Ok(1000.0));
        assert_eq!(parse_value("-3.5"), Ok(-3.5));
        assert_eq!(parse_value("+2"), Ok(2.0));
        assert_eq!(parse_value(".5"), Ok(0.5));
        assert_eq!(parse_value("4."), Ok(4.0));
        assert_eq!(parse_value("1e3"), Ok(1000.0));
        assert_eq!(parse_value("2.5E-4"), Ok(0.00025));
    }

    #[test]
    fn test_lenient_prefix() {
        assert_eq!(parse_value("  12.5 m"), Ok(12.5));
        assert_eq!(parse_value("3,5"), Ok(3.0));
        assert_eq!(parse_value("1e"), Ok(1.0));
        assert_eq!(parse_value("7-"), Ok(7.0));
    }

    #[test]
    fn test_only_ascii_digits() {
        assert_eq!(parse_value("12\u{661}"), Ok(12.0));
        assert_eq!(parse_value("3.5\u{662}"), Ok(3.5));
        assert_eq!(
            parse_value("\u{661}2"),
            Err(ConversionError::InvalidValue("\u{661}2".to_string()))
        );
    }

    #[test]
    fn test_invalid_input() {
        for raw in ["", "   ", "abc", "-", ".", "e5", "NaN", "Infinity", "1e400"] {
            assert_eq!(
                parse_value(raw),
                Err(ConversionError::InvalidValue(raw.to_string())),
                "{:?} should be rejected",
                raw
            );
        }
    }
}
