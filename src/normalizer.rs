use crate::model::{DEFAULT_DESCRIPTION, Multiplier, Product};
use crate::utils::parse_decimal;
use serde_json::Value;
use tracing::warn;

pub fn normalize_all(items: &[Value]) -> Vec<Product> {
    items.iter().filter_map(normalize_item).collect()
}

/// Turns one raw feed object into a product. Items without an integer
/// `codigo` cannot be keyed and are skipped.
fn normalize_item(item: &Value) -> Option<Product> {
    let Some(code) = item.get("codigo").and_then(Value::as_i64) else {
        warn!("Skipping feed item without a usable codigo: {}", item);
        return None;
    };

    let description = non_empty_str(item.get("descricao"))
        .unwrap_or(DEFAULT_DESCRIPTION)
        .to_string();
    let supplier = non_empty_str(item.get("fornecedor"))
        .unwrap_or_default()
        .to_string();

    let cost = parse_cost(item.get("custo"));
    if cost.is_none() {
        warn!("Product {} has no parseable cost: {:?}", code, item.get("custo"));
    }

    Some(Product {
        code,
        description,
        supplier,
        cost,
        multiplier: Multiplier::default(),
    })
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

pub fn parse_cost(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}
