use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::dataset::CensusTable;

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Record {
    pub age: u32,
    pub sex: String,
    pub education: String,
    pub race: String,
    pub occupation: String,
    #[serde(rename = "hours-per-week")]
    pub hours_per_week: u32,
    #[serde(rename = "native-country")]
    pub native_country: String,
    pub salary: String,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed census data: {0}")]
    Csv(#[from] csv::Error),
    #[error("census data contains no records")]
    Empty,
}

pub fn read_data(path: &Path) -> Result<CensusTable, LoadError> {
    info!("Loading census data from {}", path.display());
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_from(file)
}

pub fn read_from<R: io::Read>(reader: R) -> Result<CensusTable, LoadError> {
    // The UCI export pads every field after a comma with a space.
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::<Record>::new();
    for result in rdr.deserialize() {
        let record: Record = result?;
        records.push(record);
    }
    if records.is_empty() {
        return Err(LoadError::Empty);
    }
    debug!("Loaded {} records", records.len());
    Ok(CensusTable::new(records))
}
