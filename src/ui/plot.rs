use eframe::egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, GridMark, Line, Plot, PlotPoint, PlotPoints, Text};

use crate::color::{label_color_on, WaterfallStyle};
use crate::data::chart::{ChartPoint, ChartSpec};
use crate::data::model::Measure;

const BAR_WIDTH: f64 = 0.8;

// ---------------------------------------------------------------------------
// Waterfall geometry
// ---------------------------------------------------------------------------

/// Vertical extent of one bar: it spans `base..end`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Span {
    base: f64,
    end: f64,
}

/// Stack the points the way a waterfall does: relative bars float on the
/// running level, totals and absolutes stand on zero and reset the level.
fn layout(points: &[ChartPoint]) -> Vec<Span> {
    let mut level = 0.0;
    points
        .iter()
        .map(|p| {
            let base = match p.measure {
                Measure::Relative => level,
                Measure::Total | Measure::Absolute => 0.0,
            };
            let end = base + p.value;
            level = end;
            Span { base, end }
        })
        .collect()
}

/// Category name for an integer grid mark, empty elsewhere.
fn category_at(categories: &[String], x: f64) -> String {
    let idx = x.round();
    if (x - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    categories.get(idx as usize).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Waterfall plot (central panel)
// ---------------------------------------------------------------------------

/// Render the chart for `spec`. An empty spec still draws both axes.
pub fn waterfall_plot(ui: &mut Ui, spec: &ChartSpec, style: &WaterfallStyle) {
    let spans = layout(&spec.points);
    let categories: Vec<String> = spec.categories().map(str::to_string).collect();
    let right_edge = spec.points.len().max(1) as f64 - 0.5;

    Plot::new("waterfall_plot")
        .y_axis_label(spec.y_axis_title)
        .show_axes(true)
        .include_x(-0.5)
        .include_x(right_edge)
        .include_y(0.0)
        .x_grid_spacer(egui_plot::uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .x_axis_formatter(move |mark: GridMark, _range| category_at(&categories, mark.value))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if spec.is_empty() {
                return;
            }

            let bars: Vec<Bar> = spec
                .points
                .iter()
                .zip(&spans)
                .enumerate()
                .map(|(i, (point, span))| {
                    Bar::new(i as f64, point.value)
                        .base_offset(span.base)
                        .width(BAR_WIDTH)
                        .fill(style.fill_for(point.role))
                        .stroke(style.stroke_for(point.role))
                        .name(format!("{}: {}", point.category, point.label))
                })
                .collect();
            plot_ui.bar_chart(BarChart::new(bars).name("Forcing"));

            // Connectors run from the end of one bar to the next bar.
            for (i, span) in spans.iter().enumerate().take(spans.len().saturating_sub(1)) {
                let from = i as f64 + BAR_WIDTH / 2.0;
                let to = (i + 1) as f64 - BAR_WIDTH / 2.0;
                let points: PlotPoints = vec![[from, span.end], [to, span.end]].into();
                plot_ui.line(
                    Line::new(points)
                        .color(style.connector.color)
                        .width(style.connector.width),
                );
            }

            for (i, (point, span)) in spec.points.iter().zip(&spans).enumerate() {
                let fill = style.fill_for(point.role);
                let centre = PlotPoint::new(i as f64, (span.base + span.end) / 2.0);
                plot_ui.text(Text::new(
                    centre,
                    RichText::new(&point.label).color(label_color_on(fill)),
                ));
            }
        });
}
