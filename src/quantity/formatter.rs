/// Format a scaled magnitude for display.
///
/// Rounds to 2 decimal places (half away from zero, via the
/// multiply/round/divide pattern), then drops trailing fractional zeros so
/// whole numbers render bare: 2.00 -> "2", 2.50 -> "2.5", 2.33 -> "2.33".
pub fn format_magnitude(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let rendered = format!("{:.2}", rounded);
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
