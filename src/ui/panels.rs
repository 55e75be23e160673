use eframe::egui::{self, RichText, Ui};

use crate::data::filter::IlliteracyThreshold;
use crate::state::AppState;
use crate::view::{text, MetricsView};

// ---------------------------------------------------------------------------
// Left side panel – threshold slider
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading(text::FILTER_HEADER);
    ui.separator();

    let slider = &state.view.slider;
    let mut value = state.threshold.value();
    let response = ui
        .add(
            egui::Slider::new(&mut value, slider.min..=slider.max)
                .step_by(f64::from(slider.step))
                .text(slider.label),
        )
        .on_hover_text(slider.help);

    if response.changed() {
        state.set_threshold(IlliteracyThreshold::new(value));
    }

    ui.add_space(8.0);
    ui.label(format!(
        "{} towns loaded, {} matching",
        state.dataset.len(),
        state.view.matching.len()
    ));

    ui.add_space(8.0);
    egui::CollapsingHeader::new(RichText::new("Source columns").strong())
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            let columns = &state.dataset.columns;
            ui.label(format!("Illiteracy: {}", columns.illiteracy));
            for (level, column) in &columns.education {
                ui.label(format!("{level}: {column}"));
            }
            if columns.discovered.is_empty() {
                warning_label(ui, "No education columns found");
            }
        });
}

// ---------------------------------------------------------------------------
// Central panel sections
// ---------------------------------------------------------------------------

pub fn header(ui: &mut Ui) {
    ui.heading(RichText::new(text::TITLE).size(26.0).strong());
    ui.label(RichText::new(text::SUBTITLE).size(17.0));
    ui.add_space(4.0);
    ui.label(text::INTRO);
}

/// Section heading followed by a one-line description.
pub fn section(ui: &mut Ui, heading: &str, description: &str) {
    ui.heading(heading);
    ui.label(description);
    ui.add_space(4.0);
}

/// Three metric cards, or the empty-state warning.
pub fn metrics(ui: &mut Ui, metrics: &MetricsView) {
    match metrics {
        MetricsView::Cards { cards } => {
            ui.columns(cards.len().max(1), |columns: &mut [Ui]| {
                for (column, card) in columns.iter_mut().zip(cards) {
                    egui::Frame::group(column.style()).show(column, |ui: &mut Ui| {
                        ui.set_min_width(ui.available_width());
                        ui.label(RichText::new(card.label).small());
                        ui.label(RichText::new(&card.value).size(24.0).strong());
                    });
                }
            });
        }
        MetricsView::Empty { warning } => warning_label(ui, warning),
    }
}

pub fn warning_label(ui: &mut Ui, message: &str) {
    let color = ui.visuals().warn_fg_color;
    ui.label(RichText::new(format!("⚠ {message}")).color(color));
}

pub fn error_label(ui: &mut Ui, message: &str) {
    let color = ui.visuals().error_fg_color;
    ui.label(RichText::new(format!("✖ {message}")).color(color));
}

pub fn footer(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(text::FOOTER_AUTHOR).small().weak());
        ui.label(RichText::new(text::FOOTER_SOURCE).small().weak());
    });
}
