use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{FamilySizeBucket, TownDataset};

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Matching towns table
// ---------------------------------------------------------------------------

/// List the towns at `indices` with their illiteracy rate and family sizes.
pub fn town_table(ui: &mut Ui, dataset: &TownDataset, indices: &[usize]) {
    if indices.is_empty() {
        ui.label("No towns to list.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(160.0))
        .columns(Column::auto().at_least(80.0), 1 + FamilySizeBucket::ALL.len())
        .max_scroll_height(320.0)
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("Town");
            });
            header.col(|ui| {
                ui.strong("Illiteracy (%)");
            });
            for bucket in FamilySizeBucket::ALL {
                header.col(|ui| {
                    ui.strong(format!("Family {}", bucket.label()));
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, indices.len(), |mut row| {
                let town = &dataset.towns[indices[row.index()]];
                row.col(|ui| {
                    ui.label(town.town.as_str());
                });
                row.col(|ui| {
                    ui.label(format_cell(town.illiteracy));
                });
                for bucket in FamilySizeBucket::ALL {
                    row.col(|ui| {
                        ui.label(format_cell(town.family_size(bucket)));
                    });
                }
            });
        });
}

fn format_cell(value: Option<f64>) -> String {
    value.map_or_else(|| "–".to_string(), |v| format!("{v:.2}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cells_render_as_dash() {
        assert_eq!(format_cell(None), "–");
        assert_eq!(format_cell(Some(4.1)), "4.10");
    }
}
