/// Plain-text rendering of computed results
use nalgebra::Point3;

/// Shortest round-trip form of a float, always with a decimal point or exponent.
///
/// Exponents carry a sign and at least two digits (`1e-05`, `1e+16`).
pub fn format_value(value: f64) -> String {
    let text = format!("{:?}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

/// A point as `(x, y, z)`
pub fn format_point(point: &Point3<f64>) -> String {
    format!(
        "({}, {}, {})",
        format_value(point.x),
        format_value(point.y),
        format_value(point.z)
    )
}

/// Values joined by `", "`
pub fn format_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|&value| format_value(value))
        .collect::<Vec<_>>()
        .join(", ")
}
