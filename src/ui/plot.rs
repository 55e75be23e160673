use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{RichText, Stroke, Ui};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::color::{hex_or_gray, hex_with_alpha};
use crate::ui::panels::{error_label, warning_label};
use crate::view::{text, BarChartSpec, RadarChartSpec, RadarView};

/// Label ring sits just outside the unit circle.
const LABEL_RADIUS: f64 = 1.15;

// ---------------------------------------------------------------------------
// Family size bar chart
// ---------------------------------------------------------------------------

/// Render the family size bars, or the empty-state warning when no town matches.
pub fn family_size_chart(ui: &mut Ui, spec: &BarChartSpec) {
    if spec.values.is_empty() {
        warning_label(ui, text::NO_TOWNS_WARNING);
        return;
    }

    let bars: Vec<Bar> = spec
        .values
        .iter()
        .zip(&spec.labels)
        .enumerate()
        .map(|(i, (&value, label))| {
            let color = hex_or_gray(spec.colors[i % spec.colors.len()]);
            Bar::new(i as f64, value).name(label).fill(color).width(0.6)
        })
        .collect();

    let labels: Vec<String> = spec.labels.iter().map(|s| s.to_string()).collect();

    Plot::new("family_size_chart")
        .height(spec.height)
        .x_axis_label(spec.x_title)
        .y_axis_label(spec.y_title)
        .show_grid(false)
        .include_y(0.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Education radar chart
// ---------------------------------------------------------------------------

/// Render the education profile, or the warning/error that replaces it.
pub fn education_radar(ui: &mut Ui, view: &RadarView) {
    match view {
        RadarView::Chart { chart } => radar_chart(ui, chart),
        RadarView::Warning { message } => warning_label(ui, message),
        RadarView::Error { message } => error_label(ui, message),
    }
}

fn radar_chart(ui: &mut Ui, spec: &RadarChartSpec) {
    let line_color = hex_or_gray(spec.line_color);
    let fill_color = hex_with_alpha(spec.fill_color, spec.fill_alpha);
    let axis_color = ui.visuals().weak_text_color();
    let max = spec.range[1];

    let vertices = radar_vertices(&spec.values, max);
    let n = spec.labels.len();

    Plot::new("education_radar")
        .height(spec.height)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .include_x(-1.4)
        .include_x(1.4)
        .include_y(-1.25)
        .include_y(1.25)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            // Angular axis: outer circle plus one spoke per category.
            let circle: PlotPoints = (0..=72)
                .map(|i| {
                    let a = TAU * i as f64 / 72.0;
                    [a.cos(), a.sin()]
                })
                .collect();
            plot_ui.line(Line::new(circle).color(axis_color).width(1.0));

            for i in 0..n {
                let [x, y] = unit_direction(i, n);
                plot_ui.line(
                    Line::new(PlotPoints::from(vec![[0.0, 0.0], [x, y]]))
                        .color(axis_color.gamma_multiply(0.5))
                        .width(0.5),
                );
                plot_ui.text(Text::new(
                    PlotPoint::new(x * LABEL_RADIUS, y * LABEL_RADIUS),
                    RichText::new(spec.labels[i]).strong(),
                ));
            }

            // Radial range annotation.
            plot_ui.text(Text::new(
                PlotPoint::new(0.06, 1.04),
                RichText::new(format!("{max:.0}")).small(),
            ));

            // `Polygon` only fills convex shapes, so fill one triangle per wedge.
            for wedge in radar_wedges(&vertices) {
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(wedge.to_vec()))
                        .fill_color(fill_color)
                        .stroke(Stroke::NONE),
                );
            }
            if !vertices.is_empty() {
                plot_ui.line(
                    Line::new(PlotPoints::from(closed_outline(&vertices)))
                        .color(line_color)
                        .width(2.0)
                        .name(text::EDUCATION_HEADER),
                );
            }

            plot_ui.points(
                Points::new(PlotPoints::from(vertices))
                    .radius(3.5)
                    .color(line_color),
            );
        });

    ui.add_space(4.0);
    let summary: Vec<String> = spec
        .labels
        .iter()
        .zip(&spec.values)
        .map(|(label, value)| format!("{label}: {value:.2}%"))
        .collect();
    ui.label(RichText::new(summary.join("   ")).small());
}

/// Unit vector of spoke `i` out of `n`, starting at the top and going clockwise.
fn unit_direction(i: usize, n: usize) -> [f64; 2] {
    let angle = FRAC_PI_2 - TAU * i as f64 / n.max(1) as f64;
    [angle.cos(), angle.sin()]
}

/// Map each value onto its spoke, scaled so that `max` lands on the unit circle.
pub fn radar_vertices(values: &[f64], max: f64) -> Vec<[f64; 2]> {
    let n = values.len();
    let scale = if max > 0.0 { max } else { 1.0 };
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let r = (v / scale).clamp(0.0, 1.0);
            let [x, y] = unit_direction(i, n);
            [x * r, y * r]
        })
        .collect()
}

/// Split the profile into convex triangles fanning out from the centre, one per
/// pair of neighbouring spokes. Fewer than three vertices enclose no area.
pub fn radar_wedges(vertices: &[[f64; 2]]) -> Vec<[[f64; 2]; 3]> {
    let n = vertices.len();
    if n < 3 {
        return Vec::new();
    }
    (0..n)
        .map(|i| [[0.0, 0.0], vertices[i], vertices[(i + 1) % n]])
        .collect()
}

/// Outline path through every vertex, closed back on the first one. With fewer
/// than three vertices the path returns to the centre instead.
pub fn closed_outline(vertices: &[[f64; 2]]) -> Vec<[f64; 2]> {
    let mut path = vertices.to_vec();
    match vertices {
        [] => {}
        [first, _, _, ..] => path.push(*first),
        _ => path.push([0.0, 0.0]),
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f64; 2], b: [f64; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-9 && (a[1] - b[1]).abs() < 1e-9
    }

    #[test]
    fn first_spoke_points_up_and_goes_clockwise() {
        let v = radar_vertices(&[10.0, 10.0, 10.0, 10.0], 10.0);
        assert!(close(v[0], [0.0, 1.0]));
        assert!(close(v[1], [1.0, 0.0]));
        assert!(close(v[2], [0.0, -1.0]));
        assert!(close(v[3], [-1.0, 0.0]));
    }

    #[test]
    fn values_scale_against_range_max() {
        let v = radar_vertices(&[5.0, 0.0], 10.0);
        assert!(close(v[0], [0.0, 0.5]));
        assert!(close(v[1], [0.0, 0.0]));
    }

    #[test]
    fn degenerate_max_does_not_divide_by_zero() {
        let v = radar_vertices(&[0.0, 0.0, 0.0], 0.0);
        assert!(v.iter().all(|p| p[0].is_finite() && p[1].is_finite()));
    }

    #[test]
    fn wedges_chain_neighbouring_spokes_from_the_centre() {
        // Concave profile: small values sit between larger neighbours.
        let values = [5.0, 30.0, 25.0, 20.0, 3.0, 2.0, 15.0];
        let v = radar_vertices(&values, 30.0);
        let wedges = radar_wedges(&v);

        assert_eq!(wedges.len(), 7);
        for (i, wedge) in wedges.iter().enumerate() {
            assert!(close(wedge[0], [0.0, 0.0]));
            assert!(close(wedge[1], v[i]));
            assert!(close(wedge[2], v[(i + 1) % 7]));
        }
        assert!(close(wedges[6][2], v[0]));
    }

    #[test]
    fn outline_closes_on_the_first_vertex() {
        let v = radar_vertices(&[10.0, 5.0, 10.0, 5.0], 10.0);
        let outline = closed_outline(&v);
        assert_eq!(outline.len(), 5);
        assert!(close(outline[4], outline[0]));
    }

    #[test]
    fn short_profiles_have_no_wedges() {
        let v = radar_vertices(&[4.0, 8.0], 10.0);
        assert!(radar_wedges(&v).is_empty());
        let outline = closed_outline(&v);
        assert_eq!(outline.len(), 3);
        assert!(close(outline[2], [0.0, 0.0]));
        assert!(closed_outline(&[]).is_empty());
    }
}
