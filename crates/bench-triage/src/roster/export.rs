use super::domain::ConsultantRecord;

/// Column order of the exported roster. Matches the field order of
/// [`ConsultantRecord`] and the serde names used on the JSON surface.
pub const CSV_HEADERS: [&str; 10] = [
    "id",
    "name",
    "email",
    "department",
    "primarySkill",
    "resumeStatus",
    "attendanceRate",
    "trainingStatus",
    "opportunitiesCount",
    "benchStartDate",
];

#[derive(Debug, thiserror::Error)]
pub enum RosterExportError {
    #[error("failed to write roster row: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush roster export: {0}")]
    Flush(#[from] std::io::Error),
    #[error("roster export produced invalid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Serializes `roster` as comma separated text: a header row followed by one
/// newline-terminated line per record. Fields containing a comma, quote or
/// line break are quoted with embedded quotes doubled.
pub fn to_csv(roster: &[ConsultantRecord]) -> Result<String, RosterExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for record in roster {
        writer.serialize(record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| RosterExportError::Flush(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
