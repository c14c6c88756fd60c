// Session state: the catalog plus the active supplier filter
use crate::catalog::{apply_filter, derive_suppliers, CatalogStore, SupplierFilter};
use crate::exporter;
use crate::feed::FeedSource;
use crate::model::{CommandError, ExportError, Multiplier};
use crate::presenter::intent::{CellUpdate, EditField, EditIntent};
use crate::presenter::table::{build_rows, suggested_cell, TableRow};
use crate::utils::parse_decimal;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub struct PricingSheet {
    catalog: CatalogStore,
    suppliers: Vec<String>,
    selection: SupplierFilter,
    currency_symbol: String,
}

impl PricingSheet {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            catalog: CatalogStore::new(),
            suppliers: Vec::new(),
            selection: SupplierFilter::All,
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Fetches the feed once. On failure the catalog stays empty and the
    /// error only reaches the log.
    pub async fn load_from(&mut self, source: &dyn FeedSource) {
        match source.fetch().await {
            Ok(items) => self.load(&items),
            Err(e) => warn!("Feed load failed, catalog stays empty: {}", e),
        }
    }

    pub fn load(&mut self, raw_items: &[Value]) {
        self.catalog.load(raw_items);
        self.suppliers = derive_suppliers(self.catalog.products());
        info!("{} suppliers available", self.suppliers.len());
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn suppliers(&self) -> &[String] {
        &self.suppliers
    }

    pub fn selection(&self) -> &SupplierFilter {
        &self.selection
    }

    /// Rows for the filtered catalog, rebuilt from scratch.
    pub fn visible_rows(&self) -> Vec<TableRow> {
        let visible = apply_filter(self.catalog.products(), &self.selection);
        build_rows(&visible, &self.currency_symbol)
    }

    pub fn set_filter(&mut self, selection: SupplierFilter) -> Vec<TableRow> {
        info!("Supplier filter set to {}", selection);
        self.selection = selection;
        self.visible_rows()
    }

    /// Applies one edit and returns the refreshed suggested-price cell.
    /// `Ok(None)` means the code is unknown and nothing changed.
    pub fn apply(&mut self, intent: EditIntent) -> Result<Option<CellUpdate>, CommandError> {
        if self.catalog.get(intent.code).is_none() {
            return Ok(None);
        }

        let updated = match &intent.field {
            EditField::Cost(text) => {
                let cost = parse_decimal(text);
                if cost.is_none() {
                    warn!("Cost {:?} for product {} is not a number", text, intent.code);
                }
                self.catalog.update_cost(intent.code, cost)
            }
            EditField::Multiplier(text) => {
                let multiplier = Multiplier::parse(text)?;
                self.catalog.update_multiplier(intent.code, multiplier)
            }
        };

        Ok(updated.map(|product| CellUpdate {
            code: product.code,
            suggested: suggested_cell(product, &self.currency_symbol),
        }))
    }

    pub fn export(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        exporter::export(&self.catalog, dir)
    }
}
