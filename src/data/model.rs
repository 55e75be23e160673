use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::schema::ColumnMapping;

// ---------------------------------------------------------------------------
// EducationLevel – the canonical education attainment categories
// ---------------------------------------------------------------------------

/// Education attainment category shown on the radar chart.
///
/// Order of [`EducationLevel::ALL`] is the order categories are looked up and
/// plotted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum EducationLevel {
    Illiterate,
    Elementary,
    Intermediate,
    Secondary,
    Vocational,
    HigherEducation,
    University,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 7] = [
        EducationLevel::Illiterate,
        EducationLevel::Elementary,
        EducationLevel::Intermediate,
        EducationLevel::Secondary,
        EducationLevel::Vocational,
        EducationLevel::HigherEducation,
        EducationLevel::University,
    ];

    /// Lowercase substring a source column name must contain to feed this level.
    pub fn key(self) -> &'static str {
        match self {
            EducationLevel::Illiterate => "illiterate",
            EducationLevel::Elementary => "elementary",
            EducationLevel::Intermediate => "intermediate",
            EducationLevel::Secondary => "secondary",
            EducationLevel::Vocational => "vocational",
            EducationLevel::HigherEducation => "highereducation",
            EducationLevel::University => "university",
        }
    }

    /// Human-readable label used on charts.
    pub fn label(self) -> &'static str {
        match self {
            EducationLevel::Illiterate => "Illiterate",
            EducationLevel::Elementary => "Elementary",
            EducationLevel::Intermediate => "Intermediate",
            EducationLevel::Secondary => "Secondary",
            EducationLevel::Vocational => "Vocational",
            EducationLevel::HigherEducation => "Higher Education",
            EducationLevel::University => "University",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// FamilySizeBucket – the three household size groupings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum FamilySizeBucket {
    /// 1 to 3 members.
    Small,
    /// 4 to 6 members.
    Medium,
    /// 7 or more members.
    Large,
}

impl FamilySizeBucket {
    pub const ALL: [FamilySizeBucket; 3] = [
        FamilySizeBucket::Small,
        FamilySizeBucket::Medium,
        FamilySizeBucket::Large,
    ];

    /// Demographics column holding the average family size for this bucket
    /// (compared after trimming whitespace).
    pub fn column(self) -> &'static str {
        match self {
            FamilySizeBucket::Small => "Average family size - 1 to 3 members",
            FamilySizeBucket::Medium => "Average family size - 4 to 6 members",
            FamilySizeBucket::Large => "Average family size - 7 or more members",
        }
    }

    /// Short axis label.
    pub fn label(self) -> &'static str {
        match self {
            FamilySizeBucket::Small => "1-3",
            FamilySizeBucket::Medium => "4-6",
            FamilySizeBucket::Large => "7+",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

// ---------------------------------------------------------------------------
// TownRecord – one row of the joined table
// ---------------------------------------------------------------------------

/// Joined demographic and education values for a single town.
///
/// Missing source cells are `None`; they are skipped by means and sums.
#[derive(Debug, Clone, PartialEq)]
pub struct TownRecord {
    /// Join key, exactly as it appears in both sources.
    pub town: String,
    /// Average family size per bucket, indexed by [`FamilySizeBucket::index`].
    pub family_size: [Option<f64>; 3],
    /// Share of the population classified as illiterate (0–100).
    pub illiteracy: Option<f64>,
    /// Percentage per education level. Only levels with a source column appear.
    pub education: BTreeMap<EducationLevel, Option<f64>>,
}

impl TownRecord {
    pub fn family_size(&self, bucket: FamilySizeBucket) -> Option<f64> {
        self.family_size[bucket.index()]
    }

    pub fn education(&self, level: EducationLevel) -> Option<f64> {
        self.education.get(&level).copied().flatten()
    }
}

// ---------------------------------------------------------------------------
// TownDataset – the joined, de-duplicated table
// ---------------------------------------------------------------------------

/// The immutable joined dataset built once at startup.
#[derive(Debug, Clone)]
pub struct TownDataset {
    /// Records in demographics order, unique by town.
    pub towns: Vec<TownRecord>,
    /// Which source columns feed which fields.
    pub columns: ColumnMapping,
}

impl TownDataset {
    /// Number of towns.
    pub fn len(&self) -> usize {
        self.towns.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.towns.is_empty()
    }

    /// Education levels that have a source column, in canonical order.
    pub fn education_levels(&self) -> impl Iterator<Item = EducationLevel> + '_ {
        self.columns.education.iter().map(|(level, _)| *level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_in_canonical_order() {
        let labels: Vec<&str> = EducationLevel::ALL.iter().map(|l| l.label()).collect();
        assert_eq!(
            labels,
            [
                "Illiterate",
                "Elementary",
                "Intermediate",
                "Secondary",
                "Vocational",
                "Higher Education",
                "University"
            ]
        );
        assert_eq!(EducationLevel::HigherEducation.key(), "highereducation");
    }

    #[test]
    fn bucket_indices_match_array_layout() {
        for (i, bucket) in FamilySizeBucket::ALL.iter().enumerate() {
            assert_eq!(bucket.index(), i);
        }
        assert_eq!(FamilySizeBucket::Large.label(), "7+");
    }

    #[test]
    fn record_accessors_flatten_missing_values() {
        let mut education = BTreeMap::new();
        education.insert(EducationLevel::Elementary, Some(60.0));
        education.insert(EducationLevel::University, None);
        let record = TownRecord {
            town: "A".into(),
            family_size: [Some(2.0), None, Some(1.0)],
            illiteracy: Some(5.0),
            education,
        };

        assert_eq!(record.family_size(FamilySizeBucket::Medium), None);
        assert_eq!(record.education(EducationLevel::Elementary), Some(60.0));
        assert_eq!(record.education(EducationLevel::University), None);
        assert_eq!(record.education(EducationLevel::Secondary), None);
    }
}
