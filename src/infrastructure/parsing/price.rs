//! Hotel price normalization
//!
//! Displayed prices arrive as shekel amounts with thousands separators,
//! e.g. `"₪1,000"`. Normalization strips the glyph and separators, parses
//! the decimal amount, converts at the configured exchange rate, rounds to
//! the nearest whole dollar and renders `"<integer>$"`.

use super::error::{ExtractionError, ExtractionResult};

/// Currency glyph the booking site displays prices in.
pub const SHEKEL_GLYPH: char = '₪';

/// Normalize one displayed price into its target-currency form.
pub fn normalize_listing_price(text: &str, ils_to_usd_rate: f64) -> ExtractionResult<String> {
    let cleaned = text.replace(SHEKEL_GLYPH, "").replace(',', "");
    let amount: f64 = cleaned
        .trim()
        .parse()
        .map_err(|_| ExtractionError::PriceParseFailed {
            text: text.to_string(),
        })?;

    let usd = (amount / ils_to_usd_rate).round() as i64;
    Ok(format!("{usd}$"))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("₪1,000", "267$")] // 1000 / 3.75 = 266.67, rounds up
    #[case("₪375", "100$")]
    #[case("₪ 412", "110$")]
    #[case("1,125", "300$")] // glyph already stripped upstream
    fn converts_and_rounds(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(normalize_listing_price(text, 3.75).unwrap(), expected);
    }

    #[test]
    fn rejects_non_numeric_text() {
        let error = normalize_listing_price("₪See availability", 3.75).unwrap_err();
        assert!(matches!(error, ExtractionError::PriceParseFailed { .. }));
    }

    #[test]
    fn rejects_empty_text() {
        assert!(normalize_listing_price("", 3.75).is_err());
    }
}
