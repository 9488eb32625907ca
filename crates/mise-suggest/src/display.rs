//! Display formatting for suggestion rows.

/// Render a quantity+unit pair as one display string.
///
/// A quantity of 0 is treated as absent, matching the consuming UI's falsy
/// check — NOT the scorer's rule, where a 0 use count is a real value.
/// An empty unit string counts as absent too.
pub fn format_quantity(quantity: Option<f64>, unit: Option<&str>) -> String {
    let unit = unit.filter(|u| !u.is_empty());
    let quantity = quantity.filter(|q| *q != 0.0);

    match (quantity, unit) {
        (None, None) => String::new(),
        (None, Some(u)) => u.to_string(),
        (Some(q), None) => q.to_string(),
        (Some(q), Some(u)) => format!("{q} {u}"),
    }
}
