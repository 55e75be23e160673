use eframe::egui;

use crate::data::filter::IlliteracyThreshold;
use crate::data::model::TownDataset;
use crate::state::AppState;
use crate::ui::{panels, plot, table};
use crate::view::text;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TownProfileApp {
    pub state: AppState,
}

impl TownProfileApp {
    pub fn new(dataset: TownDataset, threshold: IlliteracyThreshold) -> Self {
        Self {
            state: AppState::new(dataset, threshold),
        }
    }
}

impl eframe::App for TownProfileApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Left side panel: threshold slider ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: metrics, charts, town list ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let view = &self.state.view;

                    panels::header(ui);
                    ui.separator();

                    panels::section(ui, text::MAIN_INFO_HEADER, text::MAIN_INFO_TEXT);
                    panels::metrics(ui, &view.metrics);
                    ui.add_space(12.0);

                    panels::section(ui, text::FAMILY_HEADER, text::FAMILY_TEXT);
                    plot::family_size_chart(ui, &view.family_chart);
                    ui.add_space(12.0);

                    panels::section(ui, text::EDUCATION_HEADER, text::EDUCATION_TEXT);
                    plot::education_radar(ui, &view.education_chart);
                    ui.add_space(12.0);

                    ui.heading(text::TOWNS_HEADER);
                    table::town_table(ui, &self.state.dataset, &view.matching);
                    ui.add_space(12.0);

                    ui.separator();
                    panels::footer(ui);
                });
        });
    }
}
