// Spreadsheet export of the whole catalog
use crate::catalog::CatalogStore;
use crate::model::ExportError;
use crate::pricing::{compute_suggested_price, format_suggested};
use rust_xlsxwriter::{Format, Workbook};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const EXPORT_FILENAME: &str = "produtos_atualizado.xlsx";
pub const SHEET_NAME: &str = "Produtos";
pub const HEADERS: [&str; 5] = [
    "Código",
    "Descrição",
    "Custo ICMS",
    "Multiplicador",
    "Preço Sugerido",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub code: i64,
    pub description: String,
    pub cost: Option<f64>,
    pub multiplier: String,
    pub suggested: String,
}

/// One row per product in catalog order. The active supplier filter plays no part.
pub fn export_rows(catalog: &CatalogStore) -> Vec<ExportRow> {
    catalog
        .products()
        .iter()
        .map(|p| ExportRow {
            code: p.code,
            description: p.description.clone(),
            cost: p.cost,
            multiplier: p.multiplier.label(),
            suggested: format_suggested(compute_suggested_price(p.cost, Some(p.multiplier.value()))),
        })
        .collect()
}

/// Writes `produtos_atualizado.xlsx` into `dir` and returns its path.
pub fn export(catalog: &CatalogStore, dir: &Path) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(EXPORT_FILENAME);
    let rows = export_rows(catalog);

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        worksheet.write_number(r, 0, row.code as f64)?;
        worksheet.write_string(r, 1, row.description.as_str())?;
        // Unparseable costs stay blank.
        if let Some(cost) = row.cost {
            worksheet.write_number(r, 2, cost)?;
        }
        worksheet.write_string(r, 3, row.multiplier.as_str())?;
        worksheet.write_string(r, 4, row.suggested.as_str())?;
    }

    workbook.save(&path)?;
    info!("Exported {} products to {}", rows.len(), path.display());
    Ok(path)
}
