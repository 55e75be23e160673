use serde::Serialize;

use crate::data::filter::{filtered_indices, IlliteracyThreshold};
use crate::data::model::TownDataset;
use crate::data::schema::ColumnMapping;
use crate::data::summary::{summarize, ProfileStatus, Summary, SummaryStats};

// ---------------------------------------------------------------------------
// Static page text
// ---------------------------------------------------------------------------

pub mod text {
    pub const TITLE: &str = "Lebanon Education and Family Size Analysis";
    pub const SUBTITLE: &str =
        "A dashboard showcasing family sizes and education profiles in Lebanese towns.";
    pub const INTRO: &str = "Below is a brief analysis of family sizes and education \
        profiles in Lebanese towns. Use the slider below to filter towns by minimum \
        illiteracy rate.";

    pub const FILTER_HEADER: &str = "🔍 Filter";
    pub const SLIDER_LABEL: &str = "Minimum Illiteracy Rate (%)";
    pub const SLIDER_HELP: &str = "Filter towns by minimum illiteracy percentage";

    pub const MAIN_INFO_HEADER: &str = "📋 Main Information";
    pub const MAIN_INFO_TEXT: &str = "This section provides a brief summary of the filtered data.";
    pub const NO_SUMMARY_WARNING: &str =
        "No towns match the selected criteria. Summary statistics cannot be displayed.";

    pub const FAMILY_HEADER: &str = "📊 Family Size Distribution";
    pub const FAMILY_TEXT: &str =
        "This chart displays the distribution of average family sizes across Lebanese towns.";

    pub const EDUCATION_HEADER: &str = "📈 Education Profile";
    pub const EDUCATION_TEXT: &str =
        "This radar chart illustrates the average educational profiles of Lebanese towns.";
    pub const NO_TOWNS_WARNING: &str = "No towns match the selected criteria";
    pub const MISSING_COLUMNS_ERROR: &str = "Missing education columns in the data";

    pub const TOWNS_HEADER: &str = "Matching Towns";

    pub const FOOTER_AUTHOR: &str = "Developed by Mazen Abou Chaar";
    pub const FOOTER_SOURCE: &str = "📊 Data Source: Lebanon 2023 Demographic Survey";
}

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderConfig {
    pub min: u8,
    pub max: u8,
    pub default: u8,
    pub step: u8,
    pub label: &'static str,
    pub help: &'static str,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: IlliteracyThreshold::MIN,
            max: IlliteracyThreshold::MAX,
            default: IlliteracyThreshold::DEFAULT.value(),
            step: IlliteracyThreshold::STEP,
            label: text::SLIDER_LABEL,
            help: text::SLIDER_HELP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetricsView {
    Cards { cards: Vec<MetricCard> },
    Empty { warning: &'static str },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChartSpec {
    pub labels: Vec<&'static str>,
    pub values: Vec<f64>,
    pub colors: [&'static str; 3],
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChartSpec {
    pub labels: Vec<&'static str>,
    pub values: Vec<f64>,
    /// Radial axis range `[0, max]`.
    pub range: [f64; 2],
    pub line_color: &'static str,
    pub fill_color: &'static str,
    pub fill_alpha: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RadarView {
    Chart { chart: RadarChartSpec },
    Warning { message: &'static str },
    Error { message: &'static str },
}

/// Everything the presentation layer needs for one threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub threshold: IlliteracyThreshold,
    pub slider: SliderConfig,
    /// Indices into [`TownDataset::towns`] passing the filter.
    pub matching: Vec<usize>,
    pub summary: Summary,
    pub metrics: MetricsView,
    pub family_chart: BarChartSpec,
    pub education_chart: RadarView,
    pub columns: ColumnMapping,
}

pub const FAMILY_BAR_COLORS: [&str; 3] = ["#86c5da", "#add8e6", "#d4ebf2"];
pub const RADAR_LINE_COLOR: &str = "#2B3467";
/// `rgba(186, 215, 233, 0.5)`
pub const RADAR_FILL_COLOR: &str = "#bad7e9";
pub const RADAR_FILL_ALPHA: f32 = 0.5;

const FAMILY_CHART_HEIGHT: f32 = 400.0;
const RADAR_CHART_HEIGHT: f32 = 500.0;

/// Filter and aggregate `dataset` for `threshold`.
pub fn compute_view(dataset: &TownDataset, threshold: IlliteracyThreshold) -> ViewModel {
    let matching = filtered_indices(dataset, threshold.as_f64());
    let summary = summarize(dataset, &matching);

    let metrics = match &summary.stats {
        Some(stats) => MetricsView::Cards {
            cards: metric_cards(stats),
        },
        None => MetricsView::Empty {
            warning: text::NO_SUMMARY_WARNING,
        },
    };

    let family_chart = BarChartSpec {
        labels: summary.family_size_totals.iter().map(|b| b.label).collect(),
        values: summary.family_size_totals.iter().map(|b| b.total).collect(),
        colors: FAMILY_BAR_COLORS,
        x_title: "Average Family Size",
        y_title: "Towns",
        height: FAMILY_CHART_HEIGHT,
    };

    let profile = &summary.education;
    let education_chart = match profile.status {
        ProfileStatus::NoTowns => RadarView::Warning {
            message: text::NO_TOWNS_WARNING,
        },
        ProfileStatus::MissingColumns => RadarView::Error {
            message: text::MISSING_COLUMNS_ERROR,
        },
        ProfileStatus::Ready => RadarView::Chart {
            chart: RadarChartSpec {
                labels: profile.means.iter().map(|m| m.label).collect(),
                values: profile.means.iter().map(|m| m.mean).collect(),
                range: [0.0, profile.scale_max],
                line_color: RADAR_LINE_COLOR,
                fill_color: RADAR_FILL_COLOR,
                fill_alpha: RADAR_FILL_ALPHA,
                height: RADAR_CHART_HEIGHT,
            },
        },
    };

    ViewModel {
        threshold,
        slider: SliderConfig::default(),
        matching,
        summary,
        metrics,
        family_chart,
        education_chart,
        columns: dataset.columns.clone(),
    }
}

fn metric_cards(stats: &SummaryStats) -> Vec<MetricCard> {
    vec![
        MetricCard {
            label: "Total Towns",
            value: stats.total_towns.to_string(),
        },
        MetricCard {
            label: "Avg Illiteracy Rate (%)",
            value: format_two_decimals(stats.avg_illiteracy),
        },
        MetricCard {
            label: "Avg Family Size",
            value: format_two_decimals(stats.avg_family_size),
        },
    ]
}

fn format_two_decimals(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"))
}
