use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::{Dataset, Measure, Row};

/// Columns every forcing table must carry. Others are ignored.
pub const REQUIRED_COLUMNS: [&str; 3] = ["Source", "Measure", "Contribution"];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why the dataset could not be loaded. Always fatal for the chart.
///
/// Row numbers count data rows from 1, header excluded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: unrecognized measure '{value}' (expected relative, total or absolute)")]
    UnknownMeasure { row: usize, value: String },

    #[error("row {row}: contribution '{value}' is not a finite number")]
    InvalidContribution { row: usize, value: String },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the forcing table from a file. Dispatch by extension:
///
/// * `.json` – records array, `[{ "Source": .., "Measure": .., "Contribution": .. }, ...]`
/// * anything else – CSV with a header row
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let dataset = match ext.as_str() {
        "json" => load_json(reader)?,
        _ => load_csv(reader)?,
    };

    if dataset.is_empty() {
        log::warn!("{} holds no rows; the chart will be empty", path.display());
    }
    log::info!(
        "Loaded {} rows ({} categories) from {}",
        dataset.len(),
        dataset.catalog().len(),
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(rename = "Source")]
    source: String,
    #[serde(rename = "Measure")]
    measure: String,
    #[serde(rename = "Contribution")]
    contribution: String,
}

/// Parse CSV text. Columns are matched by header name, cells are trimmed.
pub fn load_csv<R: Read>(input: R) -> Result<Dataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut rows = Vec::new();
    for (i, result) in reader.deserialize::<CsvRecord>().enumerate() {
        let record = result?;
        let row_no = i + 1;
        let contribution = parse_contribution(&record.contribution, row_no)?;
        rows.push(build_row(row_no, record.source, &record.measure, contribution)?);
    }

    Ok(Dataset::from_rows(rows))
}

fn parse_contribution(s: &str, row: usize) -> Result<f64, LoadError> {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LoadError::InvalidContribution {
            row,
            value: s.to_string(),
        })
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct JsonRecord {
    #[serde(rename = "Source")]
    source: String,
    #[serde(rename = "Measure")]
    measure: String,
    #[serde(rename = "Contribution")]
    contribution: f64,
}

/// Parse a records-oriented JSON array (`df.to_json(orient="records")`).
pub fn load_json<R: Read>(input: R) -> Result<Dataset, LoadError> {
    let records: Vec<JsonRecord> = serde_json::from_reader(input)?;

    let rows = records
        .into_iter()
        .enumerate()
        .map(|(i, rec)| build_row(i + 1, rec.source, &rec.measure, rec.contribution))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Dataset::from_rows(rows))
}

fn build_row(row: usize, source: String, measure: &str, contribution: f64) -> Result<Row, LoadError> {
    let measure = Measure::parse(measure).ok_or_else(|| LoadError::UnknownMeasure {
        row,
        value: measure.to_string(),
    })?;
    Ok(Row::new(source, measure, contribution))
}
