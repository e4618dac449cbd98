use crate::quantity::error::QuantityError;
use crate::quantity::types::ParsedQuantity;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Vulgar fraction: integer numerator over integer denominator, nothing else
    static ref FRACTION_PATTERN: Regex = Regex::new(r"^(\d+)/(\d+)$").unwrap();
    /// Plain decimal: "2", "2.", "2.5", ".5"
    static ref DECIMAL_PATTERN: Regex = Regex::new(r"^(?:\d+\.?\d*|\.\d+)$").unwrap();
}

/// Parse an ingredient amount string into a numeric magnitude and a unit.
///
/// The amount opens with a whitespace-separated run of numeric tokens
/// (integers, decimals, vulgar fractions); everything after the run is the
/// unit text. Token values are summed, so mixed numbers like "1 1/2" work.
pub fn parse_quantity(raw: &str) -> Result<ParsedQuantity, QuantityError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(QuantityError::Empty);
    }

    // Longest leading run of digits, '.', '/', and whitespace
    let run_end = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '/' || c.is_whitespace()))
        .unwrap_or(trimmed.len());
    let (amount_part, unit_part) = trimmed.split_at(run_end);

    let amount_part = amount_part.trim();
    if amount_part.is_empty() {
        return Err(QuantityError::NoNumericPrefix(raw.to_string()));
    }

    let mut magnitude = 0.0;
    for token in amount_part.split_whitespace() {
        magnitude += parse_token(token)?;
    }

    Ok(ParsedQuantity {
        magnitude,
        unit: unit_part.trim().to_string(),
    })
}

fn parse_token(token: &str) -> Result<f64, QuantityError> {
    if let Some(caps) = FRACTION_PATTERN.captures(token) {
        let numerator: f64 = caps[1]
            .parse()
            .map_err(|_| QuantityError::InvalidToken(token.to_string()))?;
        let denominator: f64 = caps[2]
            .parse()
            .map_err(|_| QuantityError::InvalidToken(token.to_string()))?;
        if denominator == 0.0 {
            return Err(QuantityError::ZeroDenominator(token.to_string()));
        }
        return Ok(numerator / denominator);
    }

    if !DECIMAL_PATTERN.is_match(token) {
        return Err(QuantityError::InvalidToken(token.to_string()));
    }

    token
        .parse::<f64>()
        .map_err(|_| QuantityError::InvalidToken(token.to_string()))
}
