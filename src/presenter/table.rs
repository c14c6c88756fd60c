use crate::catalog::{ALL_SENTINEL, SupplierFilter};
use crate::model::{Multiplier, Product};
use crate::pricing::{compute_suggested_price, format_currency};

/// One visible row of the pricing table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub code: i64,
    pub description: String,
    /// Seed of the editable cost field; empty when there is no usable cost.
    pub cost_input: String,
    pub multiplier: Multiplier,
    pub suggested: String,
}

impl TableRow {
    pub fn from_product(product: &Product, currency_symbol: &str) -> Self {
        let cost_input = match product.cost {
            Some(c) if c != 0.0 => c.to_string(),
            _ => String::new(),
        };

        Self {
            code: product.code,
            description: product.description.clone(),
            cost_input,
            multiplier: product.multiplier,
            suggested: suggested_cell(product, currency_symbol),
        }
    }
}

/// Text of the suggested-price cell for the product's current values.
pub fn suggested_cell(product: &Product, currency_symbol: &str) -> String {
    let price = compute_suggested_price(product.cost, Some(product.multiplier.value()));
    format_currency(price, currency_symbol)
}

pub fn build_rows(products: &[&Product], currency_symbol: &str) -> Vec<TableRow> {
    products
        .iter()
        .map(|p| TableRow::from_product(p, currency_symbol))
        .collect()
}

/// Renders rows as a fixed-width text table.
pub fn render_table(rows: &[TableRow]) -> String {
    let desc_width = rows
        .iter()
        .map(|r| r.description.chars().count())
        .max()
        .unwrap_or(0)
        .max("Descrição".chars().count());

    let mut out = format!(
        "{:>8} | {:<dw$} | {:>10} | {:<24} | {:>14}\n",
        "Código",
        "Descrição",
        "Custo",
        "Multiplicador",
        "Preço Sugerido",
        dw = desc_width
    );
    out.push_str(&"-".repeat(out.chars().count().saturating_sub(1)));
    out.push('\n');

    for row in rows {
        out.push_str(&format!(
            "{:>8} | {:<dw$} | {:>10} | {:<24} | {:>14}\n",
            row.code,
            row.description,
            row.cost_input,
            render_multiplier_choice(row.multiplier),
            row.suggested,
            dw = desc_width
        ));
    }

    if rows.is_empty() {
        out.push_str("(nenhum produto)\n");
    }
    out
}

/// Every option with the selected one bracketed, e.g. `[x2.5] x3 x4 x5`.
pub fn render_multiplier_choice(selected: Multiplier) -> String {
    Multiplier::ALL
        .iter()
        .map(|m| {
            if *m == selected {
                format!("[{}]", m.label())
            } else {
                m.label()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Supplier selector: the sentinel first, then the derived options.
pub fn render_selector(suppliers: &[String], selection: &SupplierFilter) -> String {
    let mut options = vec![ALL_SENTINEL.to_string()];
    options.extend(suppliers.iter().cloned());
    let current = selection.to_string();

    let mut out = String::from("Fornecedores:\n");
    for option in options {
        let marker = if option == current { "*" } else { " " };
        out.push_str(&format!(" {} {}\n", marker, option));
    }
    out
}
