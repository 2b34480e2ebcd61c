//! Sales Dataset Loader Module
//! Reads the daily sales CSV with Polars and materializes it into a typed table.

use chrono::NaiveDate;
use log::info;
use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Columns every sales dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 5] = ["date", "region", "sales", "price", "quantity"];

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("Missing value in column '{column}' at row {row}")]
    MissingValue { column: String, row: usize },
    #[error("Invalid date '{value}' at row {row} (expected YYYY-MM-DD)")]
    InvalidDate { row: usize, value: String },
    #[error("No data loaded")]
    NoData,
}

/// One row of the daily sales dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub region: String,
    pub sales: f64,
    pub price: f64,
    pub quantity: f64,
}

/// The full dataset in file order. Never mutated after loading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesTable {
    records: Vec<SalesRecord>,
}

impl SalesTable {
    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest date in the table.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(|r| r.date).min()?;
        let last = self.records.iter().map(|r| r.date).max()?;
        Some((first, last))
    }
}

/// Loads the sales CSV once at startup.
pub struct DataLoader;

impl DataLoader {
    /// Load a sales CSV using Polars and convert it into a [`SalesTable`].
    pub fn load_csv(path: impl AsRef<Path>) -> Result<SalesTable, LoaderError> {
        let path = path.as_ref();

        let df = LazyCsvReader::new(path)
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;

        let table = Self::from_dataframe(&df)?;
        if let Some((first, last)) = table.date_range() {
            info!(
                "Loaded {} sales records from {} ({} to {})",
                table.len(),
                path.display(),
                first,
                last
            );
        }
        Ok(table)
    }

    /// Convert a DataFrame holding the required columns into typed records.
    ///
    /// Region values are kept verbatim. An empty cell in any required column
    /// fails the whole load with [`LoaderError::MissingValue`]; rows are never
    /// skipped.
    pub fn from_dataframe(df: &DataFrame) -> Result<SalesTable, LoaderError> {
        for name in REQUIRED_COLUMNS {
            if df.column(name).is_err() {
                return Err(LoaderError::MissingColumn(name.to_string()));
            }
        }

        if df.height() == 0 {
            return Err(LoaderError::NoData);
        }

        let dates = df.column("date")?.cast(&DataType::String)?;
        let regions = df.column("region")?.cast(&DataType::String)?;
        let sales = df.column("sales")?.cast(&DataType::Float64)?;
        let prices = df.column("price")?.cast(&DataType::Float64)?;
        let quantities = df.column("quantity")?.cast(&DataType::Float64)?;

        let dates = dates.str()?;
        let regions = regions.str()?;
        let sales = sales.f64()?;
        let prices = prices.f64()?;
        let quantities = quantities.f64()?;

        let mut records = Vec::with_capacity(df.height());
        for row in 0..df.height() {
            let raw_date = dates.get(row).ok_or_else(|| missing("date", row))?;
            let date = NaiveDate::parse_from_str(raw_date.trim(), DATE_FORMAT).map_err(|_| {
                LoaderError::InvalidDate {
                    row,
                    value: raw_date.to_string(),
                }
            })?;

            records.push(SalesRecord {
                date,
                region: regions
                    .get(row)
                    .ok_or_else(|| missing("region", row))?
                    .to_string(),
                sales: sales.get(row).ok_or_else(|| missing("sales", row))?,
                price: prices.get(row).ok_or_else(|| missing("price", row))?,
                quantity: quantities.get(row).ok_or_else(|| missing("quantity", row))?,
            });
        }

        Ok(SalesTable::from_records(records))
    }
}

fn missing(column: &str, row: usize) -> LoaderError {
    LoaderError::MissingValue {
        column: column.to_string(),
        row,
    }
}
