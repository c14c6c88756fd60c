use crate::model::{Multiplier, Product};
use crate::normalizer::normalize_all;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{info, warn};

/// In-memory catalog: products in feed order plus a code index.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    index: HashMap<i64, usize>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole catalog with the normalized feed items.
    /// A repeated code keeps its first occurrence.
    pub fn load(&mut self, raw_items: &[Value]) {
        self.products.clear();
        self.index.clear();

        for product in normalize_all(raw_items) {
            if self.index.contains_key(&product.code) {
                warn!("Duplicate product code {}, keeping the first one", product.code);
                continue;
            }
            self.index.insert(product.code, self.products.len());
            self.products.push(product);
        }

        info!("Catalog loaded with {} products", self.products.len());
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, code: i64) -> Option<&Product> {
        self.index.get(&code).map(|&i| &self.products[i])
    }

    fn get_mut(&mut self, code: i64) -> Option<&mut Product> {
        let i = *self.index.get(&code)?;
        self.products.get_mut(i)
    }

    /// Returns the updated product, or `None` when the code is unknown.
    pub fn update_cost(&mut self, code: i64, cost: Option<f64>) -> Option<&Product> {
        let product = self.get_mut(code)?;
        product.cost = cost;
        Some(product)
    }

    pub fn update_multiplier(&mut self, code: i64, multiplier: Multiplier) -> Option<&Product> {
        let product = self.get_mut(code)?;
        product.multiplier = multiplier;
        Some(product)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> CatalogStore {
        let mut store = CatalogStore::new();
        store.load(&[
            json!({ "codigo": 10, "descricao": "Vaso", "fornecedor": "Acme", "custo": "10,00" }),
            json!({ "codigo": 20, "descricao": "Prato", "custo": 4 }),
        ]);
        store
    }

    #[test]
    fn load_indexes_by_code() {
        let store = sample();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(20).map(|p| p.description.as_str()), Some("Prato"));
        assert!(store.get(99).is_none());
    }

    #[test]
    fn load_replaces_previous_catalog() {
        let mut store = sample();
        store.load(&[json!({ "codigo": 30 })]);
        assert_eq!(store.len(), 1);
        assert!(store.get(10).is_none());
        assert!(store.get(30).is_some());
    }

    #[test]
    fn duplicate_codes_keep_the_first() {
        let mut store = CatalogStore::new();
        store.load(&[
            json!({ "codigo": 1, "descricao": "first" }),
            json!({ "codigo": 1, "descricao": "second" }),
        ]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).unwrap().description, "first");
    }

    #[test]
    fn updates_mutate_in_place() {
        let mut store = sample();
        store.update_cost(10, Some(12.0));
        store.update_multiplier(10, Multiplier::X4);
        let p = store.get(10).unwrap();
        assert_eq!(p.cost, Some(12.0));
        assert_eq!(p.multiplier, Multiplier::X4);
        assert_eq!(store.products()[0].cost, Some(12.0));
    }

    #[test]
    fn updates_on_unknown_code_are_ignored() {
        let mut store = sample();
        assert!(store.update_cost(99, Some(1.0)).is_none());
        assert!(store.update_multiplier(99, Multiplier::X5).is_none());
        assert_eq!(store.products()[0].cost, Some(10.0));
        assert_eq!(store.products()[1].multiplier, Multiplier::X2_5);
    }
}
