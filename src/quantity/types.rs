/// Result of parsing an ingredient amount string
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuantity {
    /// Numeric magnitude, the sum of all leading numeric tokens
    /// ("1 1/2" parses as 1.5)
    pub magnitude: f64,
    /// Trailing unit text, trimmed; may be empty ("3") and may contain
    /// spaces ("cups, packed")
    pub unit: String,
}

/// An ingredient amount after applying a multiplier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaledAmount {
    /// Successfully parsed and rescaled
    Scaled(String),
    /// Could not parse as a quantity (kept as authored)
    Unscaled(String),
}

impl ScaledAmount {
    pub fn as_str(&self) -> &str {
        match self {
            ScaledAmount::Scaled(s) => s,
            ScaledAmount::Unscaled(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            ScaledAmount::Scaled(s) => s,
            ScaledAmount::Unscaled(s) => s,
        }
    }

    pub fn is_scaled(&self) -> bool {
        matches!(self, ScaledAmount::Scaled(_))
    }
}
