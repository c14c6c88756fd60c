// Core structs: Product, Multiplier, error types
use std::fmt;
use thiserror::Error;

pub const DEFAULT_DESCRIPTION: &str = "Sem descrição";

/// Markup factor applied to a product's cost. Only these four values exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Multiplier {
    #[default]
    X2_5,
    X3,
    X4,
    X5,
}

impl Multiplier {
    pub const ALL: [Multiplier; 4] = [
        Multiplier::X2_5,
        Multiplier::X3,
        Multiplier::X4,
        Multiplier::X5,
    ];

    pub fn value(self) -> f64 {
        match self {
            Multiplier::X2_5 => 2.5,
            Multiplier::X3 => 3.0,
            Multiplier::X4 => 4.0,
            Multiplier::X5 => 5.0,
        }
    }

    pub fn from_value(value: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.value() == value)
    }

    /// Accepts `2.5`, `2,5`, `x3`, `X4`...
    pub fn parse(text: &str) -> Result<Self, CommandError> {
        let trimmed = text.trim();
        let digits = trimmed
            .strip_prefix('x')
            .or_else(|| trimmed.strip_prefix('X'))
            .unwrap_or(trimmed);
        digits
            .replacen(',', ".", 1)
            .parse::<f64>()
            .ok()
            .and_then(Self::from_value)
            .ok_or_else(|| CommandError::InvalidMultiplier(text.to_string()))
    }

    /// Label used by the choice field and the export, e.g. `x2.5`.
    pub fn label(self) -> String {
        format!("x{}", self)
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub code: i64,
    pub description: String,
    pub supplier: String,
    /// `None` when the feed value (or a later edit) could not be parsed.
    pub cost: Option<f64>,
    pub multiplier: Multiplier,
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("feed responded with status {0}")]
    InvalidResponse(reqwest::StatusCode),
    #[error("cannot read feed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("feed is not a JSON array: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
    #[error("cannot prepare export directory: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("invalid product code: {0}")]
    InvalidCode(String),
    #[error("invalid multiplier {0}, expected one of 2.5, 3, 4, 5")]
    InvalidMultiplier(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_defaults_to_two_and_a_half() {
        assert_eq!(Multiplier::default().value(), 2.5);
    }

    #[test]
    fn multiplier_parse_accepts_labels_and_commas() {
        assert_eq!(Multiplier::parse("3"), Ok(Multiplier::X3));
        assert_eq!(Multiplier::parse("x4"), Ok(Multiplier::X4));
        assert_eq!(Multiplier::parse(" 2,5 "), Ok(Multiplier::X2_5));
        assert_eq!(Multiplier::parse("5.0"), Ok(Multiplier::X5));
    }

    #[test]
    fn multiplier_parse_rejects_values_outside_the_set() {
        assert_eq!(
            Multiplier::parse("3.5"),
            Err(CommandError::InvalidMultiplier("3.5".into()))
        );
        assert!(Multiplier::parse("abc").is_err());
    }

    #[test]
    fn multiplier_labels() {
        let labels: Vec<String> = Multiplier::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels, vec!["x2.5", "x3", "x4", "x5"]);
    }
}
