/// Renders a result the way a calculator display shows it.
///
/// Finite values use the shortest representation that reads back to the
/// same `f64`. Non-finite values are spelled out, and negative zero is shown
/// as `0`.
///
/// ## Parameters
/// - `value`: The number to render.
///
/// ## Returns
/// The display text.
///
/// ## Example
/// ```
/// use infix_eval::util::num::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// assert_eq!(format_number(-0.0), "0");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value.is_infinite() {
        if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_owned()
    } else if value == 0.0 {
        "0".to_owned()
    } else {
        value.to_string()
    }
}
