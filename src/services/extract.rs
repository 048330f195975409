//! Table extraction from fetched markup

use crate::error::{Result, TaxSaleError};
use crate::types::{Dataset, DatasetConfig, StateRecord};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

/// Selector for table rows.
static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("valid row selector"));

/// Selector for data cells.
static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("valid cell selector"));

/// Extracts a dataset from page markup per its configuration.
///
/// The first table matching `config.table_selector` is read row by row.
/// Rows whose cell count differs from the field count, or whose cells are
/// all empty, are skipped and tallied in `skipped_rows`. A table with no
/// data rows yields an empty dataset; a page with no matching table is a
/// parse error.
pub fn extract_dataset(markup: &str, config: &DatasetConfig) -> Result<Dataset> {
    let table_selector = Selector::parse(&config.table_selector).map_err(|e| {
        TaxSaleError::parse(format!(
            "invalid table selector {:?}: {e}",
            config.table_selector
        ))
    })?;

    let doc = Html::parse_document(markup);
    let table = doc.select(&table_selector).next().ok_or_else(|| {
        TaxSaleError::parse(format!(
            "no table matched {:?} in page markup",
            config.table_selector
        ))
    })?;

    let mut records = Vec::new();
    let mut skipped_rows = 0usize;

    for row in table.select(&ROW_SELECTOR) {
        let cells: Vec<String> = row.select(&CELL_SELECTOR).map(|c| cell_text(&c)).collect();

        if cells.len() != config.fields.len() || cells.iter().all(|c| c.is_empty()) {
            debug!("skipping row with {} cells", cells.len());
            skipped_rows += 1;
            continue;
        }
        records.push(StateRecord::new(cells));
    }

    if skipped_rows > 0 {
        warn!(
            "skipped {skipped_rows} row(s) not matching the {}-field schema",
            config.fields.len()
        );
    }

    Ok(Dataset {
        name: config.name.clone(),
        source_url: config.url.clone(),
        fields: config.fields.clone(),
        records,
        skipped_rows,
    })
}

/// Flattened cell text with runs of whitespace collapsed to single spaces.
fn cell_text(cell: &ElementRef<'_>) -> String {
    cell.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
