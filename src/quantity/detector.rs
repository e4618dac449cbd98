use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex pattern to detect amounts that open with a numeric run
    /// Examples: "2 tbsp", "1 1/2 cups", "0.5 tsp, packed", ".5 cup", "3"
    static ref QUANTITY_PATTERN: Regex = Regex::new(r"^(\d|\.\d)").unwrap();
}

/// Check if an amount string looks like a scalable quantity
pub fn looks_like_quantity(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    QUANTITY_PATTERN.is_match(trimmed)
}
