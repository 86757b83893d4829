//! CSV loading with row-level tolerance.
//!
//! A bad numeric cell becomes a missing value. A missing file, a missing
//! required column, or a structurally broken CSV is fatal.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use lifexp_common::{LifexpError, Result};
use tracing::{debug, warn};

use crate::record::{Dataset, Record};

/// Columns that must be present in the header. Extra columns are ignored.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "name",
    "continent",
    "year",
    "population",
    "gdp",
    "fertility",
    "health_expenditure_share",
    "life_expectancy",
];

/// Read and parse the dataset file at `path`.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let file = File::open(path).map_err(|source| LifexpError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Parsing dataset {:?}", path);
    read_records(file)
}

/// Parse CSV text from any reader into a dataset.
pub fn read_records<R: Read>(reader: R) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(LifexpError::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    let mut incomplete = 0usize;
    for (row, result) in rdr.deserialize::<Record>().enumerate() {
        let record = result?.finish(row);
        if record.year.is_none() || record.life_expectancy.is_none() {
            incomplete += 1;
        }
        records.push(record);
    }

    if incomplete > 0 {
        warn!("{} of {} rows lack a year or life expectancy", incomplete, records.len());
    }

    Ok(Dataset::new(records))
}
