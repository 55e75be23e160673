use serde::Serialize;

use super::model::TownDataset;

// ---------------------------------------------------------------------------
// Threshold: minimum illiteracy percentage selected on the slider
// ---------------------------------------------------------------------------

/// Minimum illiteracy rate in whole percent, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct IlliteracyThreshold(u8);

impl IlliteracyThreshold {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 10;
    pub const STEP: u8 = 1;
    pub const DEFAULT: IlliteracyThreshold = IlliteracyThreshold(0);

    /// Clamp `value` into the slider domain.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for IlliteracyThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Return indices of towns whose illiteracy rate is at least `min_illiteracy`.
///
/// The bound is inclusive and there is no upper bound. Towns without an
/// illiteracy value never pass.
pub fn filtered_indices(dataset: &TownDataset, min_illiteracy: f64) -> Vec<usize> {
    dataset
        .towns
        .iter()
        .enumerate()
        .filter(|(_, town)| town.illiteracy.is_some_and(|rate| rate >= min_illiteracy))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::data::fixtures::sample_dataset;
    use crate::data::model::TownRecord;
    use crate::data::schema::ColumnMapping;

    fn dataset(rates: &[Option<f64>]) -> TownDataset {
        let towns = rates
            .iter()
            .enumerate()
            .map(|(i, rate)| TownRecord {
                town: format!("town-{i}"),
                family_size: [Some(1.0); 3],
                illiteracy: *rate,
                education: BTreeMap::new(),
            })
            .collect();
        TownDataset {
            towns,
            columns: ColumnMapping::default(),
        }
    }

    #[test]
    fn lower_bound_is_inclusive() {
        let ds = sample_dataset();
        assert_eq!(filtered_indices(&ds, 0.0), [0, 1]);
        assert_eq!(filtered_indices(&ds, 2.0), [0, 1]);
        assert_eq!(filtered_indices(&ds, 3.0), [0]);
        assert_eq!(filtered_indices(&ds, 5.0), [0]);
        assert!(filtered_indices(&ds, 6.0).is_empty());
    }

    #[test]
    fn missing_rates_never_pass() {
        let ds = dataset(&[None, Some(0.0), Some(f64::NAN)]);
        assert_eq!(filtered_indices(&ds, 0.0), [1]);
    }

    #[test]
    fn results_shrink_as_threshold_grows() {
        let ds = dataset(&[
            Some(0.0),
            Some(0.5),
            Some(3.0),
            Some(7.2),
            Some(10.0),
            Some(42.0),
            None,
        ]);
        let everything = filtered_indices(&ds, 0.0);
        let mut previous = everything.clone();

        for t in IlliteracyThreshold::MIN..=IlliteracyThreshold::MAX {
            let current = filtered_indices(&ds, IlliteracyThreshold::new(t).as_f64());
            assert!(current.iter().all(|i| everything.contains(i)));
            assert!(current.iter().all(|i| previous.contains(i)));
            assert!(current.len() <= previous.len());
            previous = current;
        }
        assert_eq!(previous, [4, 5]);
    }

    #[test]
    fn threshold_is_clamped_to_slider_range() {
        assert_eq!(IlliteracyThreshold::new(4).value(), 4);
        assert_eq!(IlliteracyThreshold::new(200).value(), IlliteracyThreshold::MAX);
        assert_eq!(IlliteracyThreshold::default().value(), 0);
    }
}
