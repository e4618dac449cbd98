use crate::quantity::formatter::format_magnitude;
use crate::quantity::parser::parse_quantity;
use crate::quantity::types::ScaledAmount;

/// Scale an ingredient amount string by a multiplier.
///
/// Always re-derives from the authored string, so repeated calls with
/// different factors never compound rounding error. Amounts the parser
/// does not understand come back as authored.
pub fn scale_amount(raw: &str, factor: f64) -> ScaledAmount {
    match parse_quantity(raw) {
        Ok(parsed) => {
            let scaled = format_magnitude(parsed.magnitude * factor);
            if parsed.unit.is_empty() {
                ScaledAmount::Scaled(scaled)
            } else {
                ScaledAmount::Scaled(format!("{} {}", scaled, parsed.unit))
            }
        }
        Err(_) => ScaledAmount::Unscaled(raw.to_string()),
    }
}

/// Scale an amount and return the display string
pub fn scale_and_format(raw: &str, factor: f64) -> String {
    scale_amount(raw, factor).into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_mixed_number() {
        assert_eq!(scale_and_format("1 1/2 cups", 2.0), "3 cups");
    }

    #[test]
    fn test_scale_decimal() {
        assert_eq!(scale_and_format("0.5 tsp", 3.0), "1.5 tsp");
    }

    #[test]
    fn test_scale_down() {
        assert_eq!(scale_and_format("2 tbsp", 0.5), "1 tbsp");
    }

    #[test]
    fn test_scale_bare_number() {
        assert_eq!(scale_and_format("3", 2.0), "6");
    }

    #[test]
    fn test_scale_keeps_multiword_unit() {
        assert_eq!(scale_and_format("0.5 tsp, packed", 2.0), "1 tsp, packed");
        assert_eq!(scale_and_format("1 cups, packed", 3.0), "3 cups, packed");
    }

    #[test]
    fn test_unparseable_passes_through_verbatim() {
        assert_eq!(scale_and_format("a pinch", 4.0), "a pinch");
        assert_eq!(scale_and_format("to taste", 0.5), "to taste");
        assert_eq!(scale_and_format("½ cup", 2.0), "½ cup");
        assert_eq!(scale_and_format("1/0 cup", 2.0), "1/0 cup");
        // Passthrough preserves the original spacing untouched
        assert_eq!(scale_and_format("  a pinch ", 2.0), "  a pinch ");
    }

    #[test]
    fn test_identity_factor_reformats_only() {
        // Scaling by 1 must not change the magnitude, only normalize zeros
        assert_eq!(scale_and_format("2.0 cups", 1.0), "2 cups");
        assert_eq!(scale_and_format("1 1/2 cups", 1.0), "1.5 cups");
        assert_eq!(scale_and_format("3", 1.0), "3");
    }

    #[test]
    fn test_spacing_normalized_on_success() {
        assert_eq!(scale_and_format("2    cups", 2.0), "4 cups");
        assert_eq!(scale_and_format("  2 cups ", 2.0), "4 cups");
    }

    #[test]
    fn test_repeat_calls_are_deterministic() {
        for (raw, factor) in [("1 1/2 cups", 2.0), ("a pinch", 4.0), ("0.5 tsp", 3.0)] {
            let first = scale_and_format(raw, factor);
            let second = scale_and_format(raw, factor);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_scaled_amount_classification() {
        assert!(scale_amount("2 cups", 2.0).is_scaled());
        assert!(!scale_amount("a pinch", 2.0).is_scaled());
        assert_eq!(scale_amount("2 cups", 2.0).as_str(), "4 cups");
    }
}
