use crate::model::Product;
use std::collections::HashSet;
use std::fmt;

/// Sentinel option meaning "every supplier".
pub const ALL_SENTINEL: &str = "todos";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SupplierFilter {
    #[default]
    All,
    Supplier(String),
}

impl SupplierFilter {
    /// Exactly `todos` selects everything; any other text is a supplier name.
    pub fn from_selection(selection: &str) -> Self {
        let selection = selection.trim();
        if selection == ALL_SENTINEL {
            SupplierFilter::All
        } else {
            SupplierFilter::Supplier(selection.to_string())
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            SupplierFilter::All => true,
            SupplierFilter::Supplier(name) => product.supplier == *name,
        }
    }
}

impl fmt::Display for SupplierFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupplierFilter::All => f.write_str(ALL_SENTINEL),
            SupplierFilter::Supplier(name) => f.write_str(name),
        }
    }
}

/// Distinct non-empty suppliers in first-seen order.
pub fn derive_suppliers(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .map(|p| p.supplier.as_str())
        .filter(|s| !s.is_empty() && seen.insert(*s))
        .map(str::to_string)
        .collect()
}

pub fn apply_filter<'a>(products: &'a [Product], selection: &SupplierFilter) -> Vec<&'a Product> {
    products.iter().filter(|p| selection.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Multiplier;

    fn product(code: i64, supplier: &str) -> Product {
        Product {
            code,
            description: format!("item {}", code),
            supplier: supplier.to_string(),
            cost: Some(1.0),
            multiplier: Multiplier::default(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Beta"),
            product(2, ""),
            product(3, "Alfa"),
            product(4, "Beta"),
        ]
    }

    #[test]
    fn suppliers_are_distinct_non_empty_first_seen() {
        assert_eq!(derive_suppliers(&catalog()), vec!["Beta", "Alfa"]);
        assert_eq!(derive_suppliers(&catalog()), derive_suppliers(&catalog()));
    }

    #[test]
    fn all_returns_everything_in_order() {
        let products = catalog();
        let codes: Vec<i64> = apply_filter(&products, &SupplierFilter::All)
            .iter()
            .map(|p| p.code)
            .collect();
        assert_eq!(codes, vec![1, 2, 3, 4]);
    }

    #[test]
    fn supplier_selection_keeps_relative_order() {
        let products = catalog();
        let selection = SupplierFilter::from_selection("Beta");
        let codes: Vec<i64> = apply_filter(&products, &selection)
            .iter()
            .map(|p| p.code)
            .collect();
        assert_eq!(codes, vec![1, 4]);
    }

    #[test]
    fn unknown_supplier_yields_nothing() {
        let products = catalog();
        assert!(apply_filter(&products, &SupplierFilter::from_selection("Gama")).is_empty());
    }

    #[test]
    fn sentinel_parsing() {
        assert_eq!(SupplierFilter::from_selection("todos"), SupplierFilter::All);
        assert_eq!(SupplierFilter::from_selection(" todos "), SupplierFilter::All);
        assert_eq!(
            SupplierFilter::from_selection("Acme"),
            SupplierFilter::Supplier("Acme".into())
        );
        assert_eq!(SupplierFilter::All.to_string(), "todos");
    }

    #[test]
    fn suppliers_resembling_the_sentinel_are_real_suppliers() {
        let products = vec![product(1, "All"), product(2, "Beta"), product(3, "Todos")];

        let by_all: Vec<i64> = apply_filter(&products, &SupplierFilter::from_selection("All"))
            .iter()
            .map(|p| p.code)
            .collect();
        assert_eq!(by_all, vec![1]);

        let by_todos: Vec<i64> = apply_filter(&products, &SupplierFilter::from_selection("Todos"))
            .iter()
            .map(|p| p.code)
            .collect();
        assert_eq!(by_todos, vec![3]);
    }
}
