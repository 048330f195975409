//! Output serialization, one function per artifact

use crate::error::{Result, TaxSaleError};
use crate::types::Dataset;
use rust_xlsxwriter::{DocProperties, Format, Workbook, XlsxError};
use std::fs;
use std::path::Path;

/// Builds the finished workbook in memory: one sheet named after the
/// dataset, bold header row, one row per record, auto-sized columns.
pub fn workbook_bytes(dataset: &Dataset) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    workbook.set_properties(&DocProperties::new().set_title(dataset.name.as_str()));

    let bold = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name(dataset.name.as_str()).map_err(xlsx_err)?;

    for (col, field) in dataset.fields.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, field, &bold)
            .map_err(xlsx_err)?;
    }
    for (row, record) in dataset.records.iter().enumerate() {
        for (col, value) in record.values.iter().enumerate() {
            sheet
                .write_string(row as u32 + 1, col as u16, value)
                .map_err(xlsx_err)?;
        }
    }
    sheet.autofit();

    workbook.save_to_buffer().map_err(xlsx_err)
}

fn xlsx_err(e: XlsxError) -> TaxSaleError {
    TaxSaleError::write("workbook", e)
}

/// Writes raw bytes or text, creating parent directories on demand.
pub fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, contents).map_err(|e| TaxSaleError::write(path.display().to_string(), e))
}

pub fn write_csv(path: &Path, dataset: &Dataset) -> Result<()> {
    ensure_parent(path)?;
    let target = path.display().to_string();

    let mut writer =
        csv::Writer::from_path(path).map_err(|e| TaxSaleError::write(&target, e))?;
    writer
        .write_record(&dataset.fields)
        .map_err(|e| TaxSaleError::write(&target, e))?;
    for record in &dataset.records {
        writer
            .write_record(&record.values)
            .map_err(|e| TaxSaleError::write(&target, e))?;
    }
    writer
        .flush()
        .map_err(|e| TaxSaleError::write(&target, e))
}

pub fn write_json(path: &Path, dataset: &Dataset) -> Result<()> {
    let text = serde_json::to_string_pretty(&dataset.to_json_value())
        .map_err(|e| TaxSaleError::write(path.display().to_string(), e))?;
    write_file(path, text)
}

pub fn write_markdown(path: &Path, dataset: &Dataset) -> Result<()> {
    write_file(path, render_markdown_table(dataset))
}

/// Renders a pipe table: header, dash separator, one line per record.
/// Columns are padded to the widest cell so the plain text reads aligned.
pub fn render_markdown_table(dataset: &Dataset) -> String {
    let headers: Vec<String> = dataset.fields.iter().map(|f| escape_cell(f)).collect();
    let rows: Vec<Vec<String>> = dataset
        .records
        .iter()
        .map(|r| r.values.iter().map(|v| escape_cell(v)).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (cell, width) in row.iter().zip(widths.iter_mut()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &headers, &widths);
    let separators: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &separators, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    out.push('|');
    for (cell, width) in cells.iter().zip(widths) {
        out.push(' ');
        out.push_str(cell);
        for _ in cell.chars().count()..*width {
            out.push(' ');
        }
        out.push_str(" |");
    }
    out.push('\n');
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| TaxSaleError::write(parent.display().to_string(), e))?;
        }
    }
    Ok(())
}
