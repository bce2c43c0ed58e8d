use std::env;
use std::path::{Path, PathBuf};

use metamorph_core::{FinancialRecord, FirmName, ValidationError};
use serde::Deserialize;

use crate::error::CliError;

/// Environment fallback for the dataset path when `--data` is absent.
pub const DATA_ENV: &str = "METAMORPH_DATA";

/// Raw CSV row with the header `name,year,profit,sales,market_value`.
#[derive(Debug, Deserialize)]
struct RawRecord {
    name: String,
    year: i32,
    profit: f64,
    sales: f64,
    market_value: f64,
}

impl RawRecord {
    fn into_record(self) -> Result<FinancialRecord, ValidationError> {
        let name = FirmName::parse(&self.name)?;
        FinancialRecord::new(name, self.year, self.profit, self.sales, self.market_value)
    }
}

pub fn resolve_data_path(flag: Option<&Path>) -> Result<PathBuf, CliError> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }

    env::var_os(DATA_ENV)
        .map(PathBuf::from)
        .ok_or_else(|| {
            CliError::Command(format!(
                "no dataset given; pass --data <FILE> or set {DATA_ENV}"
            ))
        })
}

/// Load and validate the full dataset. Any malformed row aborts the load,
/// so the engine only ever sees validated records.
pub fn load_records(path: &Path) -> Result<Vec<FinancialRecord>, CliError> {
    let mut reader = csv::Reader::from_path(path).map_err(|error| CliError::Ingest {
        path: path.display().to_string(),
        message: error.to_string(),
    })?;

    let mut records = Vec::new();
    for (row, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.map_err(|error| CliError::Ingest {
            path: path.display().to_string(),
            message: error.to_string(),
        })?;

        let record = raw.into_record().map_err(|error| CliError::Ingest {
            path: path.display().to_string(),
            message: format!("record {}: {error}", row + 1),
        })?;

        records.push(record);
    }

    Ok(records)
}
