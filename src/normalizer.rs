use crate::model::{Condition, RowError};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a displayed quantity such as `"2,000"`.
pub fn parse_quantity(text: &str, field: &'static str) -> Result<u32, RowError> {
    let cleaned = text.trim().replace(',', "");
    if cleaned.is_empty() || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RowError::InvalidNumber {
            field,
            text: text.to_string(),
        });
    }
    cleaned.parse::<u32>().map_err(|_| RowError::InvalidNumber {
        field,
        text: text.to_string(),
    })
}

/// Parses a displayed unit price such as `"US $1,234.50"`.
///
/// Everything before the first digit is treated as a currency prefix. A
/// decimal point starts the number only when a digit follows it.
pub fn parse_price(text: &str) -> Result<Decimal, RowError> {
    let invalid = || RowError::InvalidNumber {
        field: "price",
        text: text.to_string(),
    };

    let bytes = text.as_bytes();
    let start = (0..bytes.len())
        .find(|&i| {
            bytes[i].is_ascii_digit()
                || (bytes[i] == b'.' && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
        })
        .ok_or_else(invalid)?;
    let cleaned = text[start..].trim().replace(',', "");

    Decimal::from_str(&cleaned).map_err(|_| invalid())
}

pub fn normalize_condition(text: &str) -> Result<Condition, RowError> {
    text.parse()
}

pub fn normalize_name(text: &str) -> String {
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_strips_thousands_separators() {
        assert_eq!(parse_quantity("2,000", "qty"), Ok(2000));
        assert_eq!(parse_quantity(" 1,234,567 ", "qty"), Ok(1_234_567));
        assert_eq!(parse_quantity("0", "qty"), Ok(0));
    }

    #[test]
    fn quantity_rejects_malformed_text() {
        for bad in ["", "  ", "abc", "12a", "-3", "1.5"] {
            assert!(parse_quantity(bad, "qty").is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn price_strips_currency_prefix() {
        assert_eq!(parse_price("US $1,234.50"), Ok(Decimal::new(123450, 2)));
        assert_eq!(parse_price("EUR 0.07"), Ok(Decimal::new(7, 2)));
        assert_eq!(parse_price("~US $0.25"), Ok(Decimal::new(25, 2)));
        assert_eq!(parse_price("3"), Ok(Decimal::from(3)));
    }

    #[test]
    fn price_prefix_may_contain_a_dot() {
        assert_eq!(parse_price("Rs. 100"), Ok(Decimal::from(100)));
        assert_eq!(parse_price("Rs. 1,250.75"), Ok(Decimal::new(125075, 2)));
    }

    #[test]
    fn price_rejects_malformed_text() {
        assert!(parse_price("US $").is_err());
        assert!(parse_price("").is_err());
        assert!(parse_price("US $1.2.3").is_err());
        assert!(parse_price("US $12 each").is_err());
    }

    #[test]
    fn name_is_trimmed() {
        assert_eq!(normalize_name("  Brick 2 x 4 \n"), "Brick 2 x 4");
    }
}
