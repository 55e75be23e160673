use std::collections::{BTreeMap, HashMap, HashSet};
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use thiserror::Error;

use super::model::{FamilySizeBucket, TownDataset, TownRecord};
use super::schema::{normalize_education_header, ColumnRef, Origin, SchemaError, SourceSchema};

pub const DEFAULT_DEMOGRAPHICS_FILE: &str = "Demographics - Lebanon 2023.csv";
pub const DEFAULT_EDUCATION_FILE: &str = "Education - Lebanon 2023.csv";

/// Cell values treated as missing, matching pandas' default `na_values`.
/// Anything else that fails to parse as a number is an error.
const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {file}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    #[error("{file} line {line}: column '{column}' has non-numeric value '{value}'")]
    InvalidNumber {
        file: String,
        line: u64,
        column: String,
        value: String,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

// ---------------------------------------------------------------------------
// Source locations
// ---------------------------------------------------------------------------

/// Paths of the two input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSources {
    pub demographics: PathBuf,
    pub education: PathBuf,
}

impl DataSources {
    /// Resolve both file names against `dir`. Absolute names are kept as given.
    pub fn in_dir(dir: &Path, demographics: &Path, education: &Path) -> Self {
        Self {
            demographics: dir.join(demographics),
            education: dir.join(education),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read both CSV files and build the joined dataset.
///
/// Any unreadable or malformed source aborts the whole load.
pub fn load(sources: &DataSources) -> Result<TownDataset, LoadError> {
    let demographics = RawTable::from_path(&sources.demographics)?;
    let education = RawTable::from_path(&sources.education)?;
    join(demographics, education)
}

/// Same as [`load`] for in-memory sources.
pub fn load_from_readers<D: Read, E: Read>(
    demographics: D,
    education: E,
) -> Result<TownDataset, LoadError> {
    let demographics = RawTable::from_reader("demographics", demographics)?;
    let education = RawTable::from_reader("education", education)?;
    join(demographics, education)
}

// ---------------------------------------------------------------------------
// Raw CSV table
// ---------------------------------------------------------------------------

struct RawTable {
    name: String,
    headers: Vec<String>,
    rows: Vec<StringRecord>,
}

impl RawTable {
    fn from_path(path: &Path) -> Result<Self, LoadError> {
        let name = path.display().to_string();
        let reader = csv::Reader::from_path(path).map_err(|source| LoadError::Csv {
            file: name.clone(),
            source,
        })?;
        Self::from_csv(name, reader)
    }

    fn from_reader<R: Read>(name: &str, reader: R) -> Result<Self, LoadError> {
        Self::from_csv(name.to_string(), csv::Reader::from_reader(reader))
    }

    fn from_csv<R: Read>(name: String, mut reader: csv::Reader<R>) -> Result<Self, LoadError> {
        let csv_err = |source: csv::Error| LoadError::Csv {
            file: name.clone(),
            source,
        };

        let headers: Vec<String> = reader
            .headers()
            .map_err(csv_err)?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let rows = reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(csv_err)?;

        log::debug!("{name}: {} rows, {} columns", rows.len(), headers.len());

        Ok(RawTable {
            name,
            headers,
            rows,
        })
    }
}

// ---------------------------------------------------------------------------
// Join
// ---------------------------------------------------------------------------

/// Inner join on town, first occurrence wins on both sides.
fn join(demographics: RawTable, mut education: RawTable) -> Result<TownDataset, LoadError> {
    education.headers = education
        .headers
        .iter()
        .map(|h| normalize_education_header(h))
        .collect();

    let schema = SourceSchema::resolve(
        &demographics.name,
        &demographics.headers,
        &education.name,
        &education.headers,
    )?;

    if schema.discovered.is_empty() {
        log::warn!(
            "{}: no education level columns found; education profile will be unavailable",
            education.name
        );
    } else {
        log::info!(
            "Discovered {} education columns in {}",
            schema.discovered.len(),
            education.name
        );
    }

    let mut education_by_town: HashMap<&str, &StringRecord> = HashMap::new();
    for row in &education.rows {
        let town = row.get(schema.education_town).unwrap_or("");
        education_by_town.entry(town).or_insert(row);
    }

    let family_columns: Vec<ColumnRef> = FamilySizeBucket::ALL
        .iter()
        .map(|bucket| ColumnRef {
            origin: Origin::Demographics,
            index: schema.family_size[bucket.index()],
            name: bucket.column().to_string(),
        })
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut towns = Vec::new();
    let mut unmatched = 0usize;
    let mut duplicates = 0usize;

    for demo_row in &demographics.rows {
        let town = demo_row.get(schema.demographics_town).unwrap_or("");
        let Some(&edu_row) = education_by_town.get(town) else {
            unmatched += 1;
            continue;
        };
        if !seen.insert(town) {
            duplicates += 1;
            continue;
        }

        let rows = JoinedRow {
            demographics: (&demographics, demo_row),
            education: (&education, edu_row),
        };

        let mut family_size = [None; 3];
        for (slot, column) in family_size.iter_mut().zip(&family_columns) {
            *slot = rows.number(column)?;
        }

        let mut education_values = BTreeMap::new();
        for (level, column) in &schema.education {
            education_values.insert(*level, rows.number(column)?);
        }

        towns.push(TownRecord {
            town: town.to_string(),
            family_size,
            illiteracy: rows.number(&schema.illiteracy)?,
            education: education_values,
        });
    }

    log::info!(
        "Joined {} towns ({} demographics rows without education data, {} duplicates dropped)",
        towns.len(),
        unmatched,
        duplicates
    );

    Ok(TownDataset {
        towns,
        columns: schema.mapping(),
    })
}

/// A demographics row paired with its education row.
struct JoinedRow<'a> {
    demographics: (&'a RawTable, &'a StringRecord),
    education: (&'a RawTable, &'a StringRecord),
}

impl JoinedRow<'_> {
    fn number(&self, column: &ColumnRef) -> Result<Option<f64>, LoadError> {
        let (table, row) = match column.origin {
            Origin::Demographics => self.demographics,
            Origin::Education => self.education,
        };
        let raw = row.get(column.index).unwrap_or("");
        parse_number(raw).ok_or_else(|| LoadError::InvalidNumber {
            file: table.name.clone(),
            line: row.position().map(|p| p.line()).unwrap_or(0),
            column: column.name.clone(),
            value: raw.to_string(),
        })
    }
}

/// `Some(None)` for a missing cell, `None` for a non-numeric one.
fn parse_number(raw: &str) -> Option<Option<f64>> {
    let trimmed = raw.trim();
    if MISSING_TOKENS.contains(&trimmed) {
        return Some(None);
    }
    trimmed.parse::<f64>().ok().map(Some)
}
