use crate::data::filter::IlliteracyThreshold;
use crate::data::model::TownDataset;
use crate::view::{compute_view, ViewModel};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Joined dataset, loaded once at startup.
    pub dataset: TownDataset,

    /// Current slider value.
    pub threshold: IlliteracyThreshold,

    /// View for `threshold` (cached until the threshold changes).
    pub view: ViewModel,
}

impl AppState {
    pub fn new(dataset: TownDataset, threshold: IlliteracyThreshold) -> Self {
        let view = compute_view(&dataset, threshold);
        Self {
            dataset,
            threshold,
            view,
        }
    }

    /// Update the threshold and recompute the view if it changed.
    pub fn set_threshold(&mut self, threshold: IlliteracyThreshold) {
        if threshold == self.threshold {
            return;
        }
        self.threshold = threshold;
        self.view = compute_view(&self.dataset, threshold);
        log::debug!(
            "Threshold {}%: {} of {} towns match",
            threshold.value(),
            self.view.matching.len(),
            self.dataset.len()
        );
    }
}
