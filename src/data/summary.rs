use std::collections::BTreeSet;

use serde::Serialize;

use super::model::{EducationLevel, FamilySizeBucket, TownDataset, TownRecord};

/// The radar chart never scales below this value.
pub const CHART_SCALE_FLOOR: f64 = 10.0;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Headline numbers for the metric cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Distinct towns in the filtered set.
    pub total_towns: usize,
    /// `None` when no town has an illiteracy value.
    pub avg_illiteracy: Option<f64>,
    /// Mean of the three per-bucket means (unweighted).
    pub avg_family_size: Option<f64>,
}

/// Sum of one family size bucket over the filtered towns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketTotal {
    pub bucket: FamilySizeBucket,
    pub label: &'static str,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelMean {
    pub level: EducationLevel,
    pub label: &'static str,
    pub mean: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProfileStatus {
    Ready,
    /// The filtered set is empty.
    NoTowns,
    /// No education column was found in the sources.
    MissingColumns,
}

/// Average education distribution over the filtered towns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationProfile {
    pub status: ProfileStatus,
    pub means: Vec<LevelMean>,
    /// Upper bound of the radial axis, at least [`CHART_SCALE_FLOOR`].
    pub scale_max: f64,
}

impl EducationProfile {
    /// Zero for every canonical level, on the floor scale.
    fn placeholder(status: ProfileStatus) -> Self {
        Self {
            status,
            means: EducationLevel::ALL
                .iter()
                .map(|&level| LevelMean {
                    level,
                    label: level.label(),
                    mean: 0.0,
                })
                .collect(),
            scale_max: CHART_SCALE_FLOOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// `None` when the filtered set is empty.
    pub stats: Option<SummaryStats>,
    /// Empty when the filtered set is empty.
    pub family_size_totals: Vec<BucketTotal>,
    pub education: EducationProfile,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Aggregate the towns at `indices`.
pub fn summarize(dataset: &TownDataset, indices: &[usize]) -> Summary {
    let towns: Vec<&TownRecord> = indices.iter().map(|&i| &dataset.towns[i]).collect();

    if towns.is_empty() {
        return Summary {
            stats: None,
            family_size_totals: Vec::new(),
            education: EducationProfile::placeholder(ProfileStatus::NoTowns),
        };
    }

    let total_towns = towns
        .iter()
        .map(|t| t.town.as_str())
        .collect::<BTreeSet<_>>()
        .len();

    let bucket_means: Vec<Option<f64>> = FamilySizeBucket::ALL
        .iter()
        .map(|&bucket| mean(towns.iter().map(|t| t.family_size(bucket))))
        .collect();

    let stats = SummaryStats {
        total_towns,
        avg_illiteracy: mean(towns.iter().map(|t| t.illiteracy)),
        avg_family_size: mean(bucket_means.into_iter()),
    };

    let family_size_totals = FamilySizeBucket::ALL
        .iter()
        .map(|&bucket| BucketTotal {
            bucket,
            label: bucket.label(),
            total: towns.iter().filter_map(|t| t.family_size(bucket)).sum(),
        })
        .collect();

    Summary {
        stats: Some(stats),
        family_size_totals,
        education: education_profile(dataset, &towns),
    }
}

fn education_profile(dataset: &TownDataset, towns: &[&TownRecord]) -> EducationProfile {
    let levels: Vec<EducationLevel> = dataset.education_levels().collect();
    if levels.is_empty() {
        return EducationProfile::placeholder(ProfileStatus::MissingColumns);
    }

    // Levels whose column holds no values at all are left out, like levels
    // without a column.
    let means: Vec<LevelMean> = levels
        .into_iter()
        .filter_map(|level| {
            mean(towns.iter().map(|t| t.education(level))).map(|m| LevelMean {
                level,
                label: level.label(),
                mean: m,
            })
        })
        .collect();

    let scale_max = means
        .iter()
        .map(|m| m.mean)
        .fold(CHART_SCALE_FLOOR, f64::max);

    EducationProfile {
        status: ProfileStatus::Ready,
        means,
        scale_max,
    }
}

/// Mean of the present, non-NaN values.
fn mean(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    let (sum, count) = values
        .flatten()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
