use super::domain::ConsultantRecord;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Csv,
    Json,
}

impl RosterFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid roster JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported roster file '{0}': expected a .csv or .json extension")]
    UnsupportedFormat(String),
}

/// Loads a roster from the CSV layout written by the exporter or from a JSON
/// array of records.
pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ConsultantRecord>, RosterImportError> {
        let path = path.as_ref();
        let format = RosterFormat::from_path(path)
            .ok_or_else(|| RosterImportError::UnsupportedFormat(path.display().to_string()))?;
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, format)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        format: RosterFormat,
    ) -> Result<Vec<ConsultantRecord>, RosterImportError> {
        match format {
            RosterFormat::Csv => parse_csv(reader),
            RosterFormat::Json => Ok(serde_json::from_reader(reader)?),
        }
    }
}

fn parse_csv<R: Read>(reader: R) -> Result<Vec<ConsultantRecord>, RosterImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<ConsultantRecord>() {
        records.push(row?);
    }

    Ok(records)
}
