//! Engineering notation with SI prefixes.

/// Prefixes from largest to smallest, with their scale.
const PREFIXES: [(f64, &str); 10] = [
    (1e12, "T"),
    (1e9, "G"),
    (1e6, "M"),
    (1e3, "k"),
    (1.0, ""),
    (1e-3, "m"),
    (1e-6, "u"),
    (1e-9, "n"),
    (1e-12, "p"),
    (1e-15, "f"),
];

/// Format a value with the largest SI prefix that keeps the printed mantissa
/// at or above 1.
///
/// The prefix is chosen after rounding to four decimals, so `999.99995` prints
/// as `1.0000k`. Nonzero values below the femto range print in exponent form.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return format!("{:.4}", 0.0);
    }

    let abs_value = value.abs();

    match PREFIXES
        .iter()
        .find(|(scale, _)| round4(abs_value / scale) >= 1.0)
    {
        Some((scale, suffix)) => format!("{:.4}{}", value / scale, suffix),
        None => format!("{:.4e}", value),
    }
}

/// Round to the four decimals `format_value` prints.
fn round4(x: f64) -> f64 {
    (x * 1e4).round() / 1e4
}

/// Format a value with an SI prefix and a unit symbol, e.g. `"1.2000kΩ"`.
pub fn format_with_unit(value: f64, unit: &str) -> String {
    format!("{}{}", format_value(value), unit)
}
