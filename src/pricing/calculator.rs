/// Shown wherever a suggested price cannot be computed.
pub const PLACEHOLDER: &str = "-";

/// Suggested sale price: the integer part of `cost * multiplier` with the
/// cents forced to `.99`.
///
/// Returns `None` when either input is missing, zero or not finite.
pub fn compute_suggested_price(cost: Option<f64>, multiplier: Option<f64>) -> Option<f64> {
    let cost = cost.filter(|c| usable(*c))?;
    let multiplier = multiplier.filter(|m| usable(*m))?;
    let product = cost * multiplier;
    if !usable(product) {
        return None;
    }
    Some(product.floor() + 0.99)
}

fn usable(value: f64) -> bool {
    value != 0.0 && value.is_finite()
}

/// Two decimals, or the placeholder when there is no price.
pub fn format_suggested(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("{:.2}", p),
        None => PLACEHOLDER.to_string(),
    }
}

/// Currency display for the table cell, e.g. `R$ 30.99`.
pub fn format_currency(price: Option<f64>, symbol: &str) -> String {
    match price {
        Some(p) => format!("{} {:.2}", symbol, p),
        None => PLACEHOLDER.to_string(),
    }
}
