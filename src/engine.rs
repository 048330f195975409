use crate::error::{Result, TaxSaleError};
use crate::services::{extract, write};
use crate::types::DatasetConfig;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::error;

pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Outcome of one run over the configured lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub built: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

pub struct Engine<'a> {
    pub fetcher: &'a dyn Fetcher,
    pub data_dir: PathBuf,
    pub build_dir: PathBuf,
}

impl<'a> Engine<'a> {
    pub fn new(
        fetcher: &'a dyn Fetcher,
        data_dir: impl Into<PathBuf>,
        build_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fetcher,
            data_dir: data_dir.into(),
            build_dir: build_dir.into(),
        }
    }

    /// Runs every configuration in order. A failing configuration is
    /// reported with its name and the run moves on to the next one.
    pub fn run(&self, configs: &[DatasetConfig]) -> RunSummary {
        let mut summary = RunSummary::default();
        for config in configs {
            match self.build(config) {
                Ok(()) => summary.built += 1,
                Err(e) => {
                    error!("\"{}\" failed: {e}", config.name);
                    summary.failed += 1;
                }
            }
            println!();
        }
        summary
    }

    /// Builds one configuration: fetch the page, snapshot its markup,
    /// extract the dataset, then write the four output files. The format
    /// writes are attempted independently; any failure among them still
    /// fails the configuration as a whole.
    pub fn build(&self, config: &DatasetConfig) -> Result<()> {
        println!("Building \"{}\"...", config.name);

        let markup = stage("Fetching data", || self.fetcher.fetch(&config.url))?;

        let html_path = self.data_dir.join(format!("{}.html", config.name));
        stage("Writing data", || write::write_file(&html_path, &markup))?;

        let dataset = extract::extract_dataset(&markup, config)?;

        let out_dir = self.build_dir.join(&config.name);
        let mut failed_outputs = 0usize;

        match stage("Creating workbook", || write::workbook_bytes(&dataset)) {
            Ok(buffer) => {
                let xlsx_path = out_dir.join(format!("{}.xlsx", config.name));
                if stage("Writing workbook", || write::write_file(&xlsx_path, &buffer)).is_err() {
                    failed_outputs += 1;
                }
            }
            Err(_) => failed_outputs += 1,
        }

        let csv_path = out_dir.join(format!("{}.csv", config.name));
        if stage("Writing CSV", || write::write_csv(&csv_path, &dataset)).is_err() {
            failed_outputs += 1;
        }

        let json_path = out_dir.join(format!("{}.json", config.name));
        if stage("Writing JSON", || write::write_json(&json_path, &dataset)).is_err() {
            failed_outputs += 1;
        }

        let md_path = out_dir.join(format!("{}.md", config.name));
        if stage("Writing markdown", || write::write_markdown(&md_path, &dataset)).is_err() {
            failed_outputs += 1;
        }

        if failed_outputs > 0 {
            return Err(TaxSaleError::write(
                out_dir.display().to_string(),
                format!("{failed_outputs} output file(s) could not be written"),
            ));
        }
        Ok(())
    }
}

/// Prints the stage line, flushes so the label shows before slow work,
/// and finishes it with " Done." or the error.
fn stage<T>(label: &str, op: impl FnOnce() -> Result<T>) -> Result<T> {
    print!("    {label}...");
    let _ = io::stdout().flush();
    match op() {
        Ok(value) => {
            println!(" Done.");
            Ok(value)
        }
        Err(e) => {
            println!(" failed: {e}");
            Err(e)
        }
    }
}
