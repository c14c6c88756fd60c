// Pricing module: suggested price rule and its display formats.

pub mod calculator;

pub use calculator::{compute_suggested_price, format_currency, format_suggested};
