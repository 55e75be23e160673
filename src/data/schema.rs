use serde::Serialize;
use thiserror::Error;

use super::model::{EducationLevel, FamilySizeBucket};

/// Join key column, present in both sources.
pub const TOWN_COLUMN: &str = "Town";

/// Education source columns are discovered by this (lowercase) marker.
pub const EDUCATION_COLUMN_MARKER: &str = "percentageofeducationlevel";

const PERCENTAGE: &str = "percentage";
const ILLITERATE: &str = "illiterate";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A required column could not be mapped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("{file} is missing required column '{column}'")]
    MissingColumn { file: String, column: String },

    #[error(
        "no illiteracy column found: expected a column whose name contains \
         'illiterate' and 'percentage'"
    )]
    MissingIlliteracyColumn,
}

// ---------------------------------------------------------------------------
// Header helpers
// ---------------------------------------------------------------------------

/// Clean an education header: trim whitespace and fix the known
/// "illeterate" misspelling.
pub fn normalize_education_header(header: &str) -> String {
    header.trim().replace("illeterate", ILLITERATE)
}

pub fn is_education_column(name: &str) -> bool {
    name.to_lowercase().contains(EDUCATION_COLUMN_MARKER)
}

pub fn is_illiteracy_column(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.contains(ILLITERATE) && lower.contains(PERCENTAGE)
}

pub fn is_level_column(name: &str, level: EducationLevel) -> bool {
    let lower = name.to_lowercase();
    lower.contains(level.key()) && lower.contains(PERCENTAGE)
}

// ---------------------------------------------------------------------------
// Resolved column mapping
// ---------------------------------------------------------------------------

/// Which source file a joined column comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Demographics,
    Education,
}

/// A column of the joined table, pointing back into its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub origin: Origin,
    /// Index into the source file's header row.
    pub index: usize,
    pub name: String,
}

/// Names of the source columns feeding each field, reported in the side panel
/// and the headless output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnMapping {
    pub illiteracy: String,
    /// Education levels that matched a column, in canonical order.
    pub education: Vec<(EducationLevel, String)>,
    /// Every education column discovered by the marker.
    pub discovered: Vec<String>,
}

/// Column indices of both sources, validated against the required fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSchema {
    pub demographics_town: usize,
    pub education_town: usize,
    pub family_size: [usize; 3],
    pub illiteracy: ColumnRef,
    pub education: Vec<(EducationLevel, ColumnRef)>,
    /// Discovered education columns (normalized names, source indices).
    pub discovered: Vec<ColumnRef>,
}

impl SourceSchema {
    /// Map both header rows onto the required and optional fields.
    ///
    /// `education_headers` must already be normalized with
    /// [`normalize_education_header`]. The joined column order used for
    /// substring lookups is: every demographics column, then the discovered
    /// education columns.
    pub fn resolve(
        demographics_file: &str,
        demographics_headers: &[String],
        education_file: &str,
        education_headers: &[String],
    ) -> Result<Self, SchemaError> {
        let demographics_town = find_exact(demographics_headers, TOWN_COLUMN)
            .ok_or_else(|| missing(demographics_file, TOWN_COLUMN))?;
        let education_town = find_exact(education_headers, TOWN_COLUMN)
            .ok_or_else(|| missing(education_file, TOWN_COLUMN))?;

        let mut family_size = [0usize; 3];
        for bucket in FamilySizeBucket::ALL {
            family_size[bucket.index()] = find_exact(demographics_headers, bucket.column())
                .ok_or_else(|| missing(demographics_file, bucket.column()))?;
        }

        let discovered: Vec<ColumnRef> = education_headers
            .iter()
            .enumerate()
            .filter(|(i, name)| *i != education_town && is_education_column(name))
            .map(|(index, name)| ColumnRef {
                origin: Origin::Education,
                index,
                name: name.clone(),
            })
            .collect();

        let joined: Vec<ColumnRef> = demographics_headers
            .iter()
            .enumerate()
            .map(|(index, name)| ColumnRef {
                origin: Origin::Demographics,
                index,
                name: name.clone(),
            })
            .chain(discovered.iter().cloned())
            .collect();

        let illiteracy = joined
            .iter()
            .find(|c| is_illiteracy_column(&c.name))
            .cloned()
            .ok_or(SchemaError::MissingIlliteracyColumn)?;

        let education = EducationLevel::ALL
            .iter()
            .filter_map(|&level| {
                joined
                    .iter()
                    .find(|c| is_level_column(&c.name, level))
                    .map(|c| (level, c.clone()))
            })
            .collect();

        Ok(SourceSchema {
            demographics_town,
            education_town,
            family_size,
            illiteracy,
            education,
            discovered,
        })
    }

    pub fn mapping(&self) -> ColumnMapping {
        ColumnMapping {
            illiteracy: self.illiteracy.name.clone(),
            education: self
                .education
                .iter()
                .map(|(level, c)| (*level, c.name.clone()))
                .collect(),
            discovered: self.discovered.iter().map(|c| c.name.clone()).collect(),
        }
    }
}

fn find_exact(headers: &[String], column: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == column)
}

fn missing(file: &str, column: &str) -> SchemaError {
    SchemaError::MissingColumn {
        file: file.to_string(),
        column: column.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn demographics() -> Vec<String> {
        headers(&[
            "Town",
            "Average family size - 1 to 3 members",
            "Average family size - 4 to 6 members",
            "Average family size - 7 or more members ",
        ])
    }

    #[test]
    fn normalizes_whitespace_and_misspelling() {
        assert_eq!(
            normalize_education_header("  PercentageofEducationlevelofresidents-illeterate "),
            "PercentageofEducationlevelofresidents-illiterate"
        );
        assert_eq!(normalize_education_header("Town"), "Town");
    }

    #[test]
    fn discovery_is_case_insensitive() {
        assert!(is_education_column("PERCENTAGEOFEDUCATIONLEVEL-university"));
        assert!(!is_education_column("Percentage of Women"));
        assert!(is_level_column(
            "PercentageofEducationlevelofresidents-highereducation",
            EducationLevel::HigherEducation
        ));
    }

    #[test]
    fn resolves_required_and_optional_columns() {
        let education = headers(&[
            "Town",
            "PercentageofEducationlevelofresidents-illiterate",
            "PercentageofEducationlevelofresidents-elementary",
            "refArea",
        ]);
        let schema = SourceSchema::resolve("demo.csv", &demographics(), "edu.csv", &education)
            .unwrap();

        assert_eq!(schema.demographics_town, 0);
        assert_eq!(schema.education_town, 0);
        // Trailing whitespace in the header still matches.
        assert_eq!(schema.family_size, [1, 2, 3]);
        assert_eq!(schema.illiteracy.origin, Origin::Education);
        assert_eq!(schema.illiteracy.index, 1);
        assert_eq!(schema.discovered.len(), 2);

        let levels: Vec<EducationLevel> = schema.education.iter().map(|(l, _)| *l).collect();
        assert_eq!(
            levels,
            [EducationLevel::Illiterate, EducationLevel::Elementary]
        );
    }

    #[test]
    fn only_discovered_education_columns_join() {
        // "percentage ... secondary" without the marker is not joined.
        let education = headers(&[
            "Town",
            "PercentageofEducationlevelofresidents-illiterate",
            "Percentage secondary",
        ]);
        let schema = SourceSchema::resolve("d", &demographics(), "e", &education).unwrap();
        assert!(schema
            .education
            .iter()
            .all(|(level, _)| *level != EducationLevel::Secondary));
    }

    #[test]
    fn demographics_columns_are_searched_first() {
        let mut demo = demographics();
        demo.push("Percentage illiterate (census)".to_string());
        let education = headers(&["Town", "PercentageofEducationlevelofresidents-illiterate"]);

        let schema = SourceSchema::resolve("d", &demo, "e", &education).unwrap();
        assert_eq!(schema.illiteracy.origin, Origin::Demographics);
        assert_eq!(schema.illiteracy.name, "Percentage illiterate (census)");
    }

    #[test]
    fn missing_town_names_the_file() {
        let education = headers(&["Name", "PercentageofEducationlevelofresidents-illiterate"]);
        let err = SourceSchema::resolve("demo.csv", &demographics(), "edu.csv", &education)
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingColumn {
                file: "edu.csv".into(),
                column: "Town".into()
            }
        );
    }

    #[test]
    fn missing_family_size_column_is_reported() {
        let demo = headers(&["Town", "Average family size - 1 to 3 members"]);
        let education = headers(&["Town", "PercentageofEducationlevelofresidents-illiterate"]);
        let err = SourceSchema::resolve("demo.csv", &demo, "edu.csv", &education).unwrap_err();
        assert_eq!(
            err.to_string(),
            "demo.csv is missing required column 'Average family size - 4 to 6 members'"
        );
    }

    #[test]
    fn missing_illiteracy_column_fails_fast() {
        let education = headers(&["Town", "PercentageofEducationlevelofresidents-university"]);
        let err = SourceSchema::resolve("d", &demographics(), "e", &education).unwrap_err();
        assert_eq!(err, SchemaError::MissingIlliteracyColumn);
    }

    #[test]
    fn mapping_reports_column_names() {
        let education = headers(&[
            "Town",
            "PercentageofEducationlevelofresidents-illiterate",
            "PercentageofEducationlevelofresidents-university",
        ]);
        let mapping = SourceSchema::resolve("d", &demographics(), "e", &education)
            .unwrap()
            .mapping();
        assert_eq!(
            mapping.illiteracy,
            "PercentageofEducationlevelofresidents-illiterate"
        );
        assert_eq!(mapping.discovered.len(), 2);
        assert_eq!(mapping.education[1].0, EducationLevel::University);
    }
}
