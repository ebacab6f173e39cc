use std::ops::RangeInclusive;

use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{
    uniform_grid_spacer, Bar, BarChart, Corner, GridMark, Legend, Line, Plot, PlotPoints, Points,
};

const CHART_HEIGHT: f32 = 320.0;

/// One named line of a chart.
pub struct LineSeries {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub color: Color32,
}

/// One series of a grouped bar chart: a value per category.
pub struct BarGroup {
    pub name: String,
    pub values: Vec<f64>,
    pub color: Color32,
}

/// Year axis: integer ticks only.
fn year_label(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    if mark.value.fract().abs() < 1e-6 {
        format!("{:.0}", mark.value)
    } else {
        String::new()
    }
}

fn title(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).strong());
}

// ---------------------------------------------------------------------------
// Line chart over years
// ---------------------------------------------------------------------------

/// Line chart with markers, x = year.
pub fn year_line_chart(
    ui: &mut Ui,
    id: &str,
    chart_title: &str,
    series: &[LineSeries],
    y_label: &str,
    show_legend: bool,
) {
    title(ui, chart_title);

    let mut plot = Plot::new(id)
        .height(CHART_HEIGHT)
        .x_axis_label("연도")
        .y_axis_label(y_label)
        .x_axis_formatter(year_label)
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .include_y(0.0)
        .allow_scroll(false);
    if show_legend {
        plot = plot.legend(Legend::default().position(Corner::RightTop));
    }

    plot.show(ui, |plot_ui| {
        for s in series {
            plot_ui.line(
                Line::new(PlotPoints::from(s.points.clone()))
                    .name(&s.name)
                    .color(s.color)
                    .width(2.0),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(s.points.clone()))
                    .name(&s.name)
                    .color(s.color)
                    .radius(4.0),
            );
        }
    });
}

// ---------------------------------------------------------------------------
// Grouped bar chart
// ---------------------------------------------------------------------------

/// Bars for each category side by side, one colour per group.
pub fn grouped_bar_chart(
    ui: &mut Ui,
    id: &str,
    chart_title: &str,
    categories: &[String],
    groups: &[BarGroup],
    y_label: &str,
) {
    title(ui, chart_title);

    let n = groups.len().max(1) as f64;
    let bar_width = 0.8 / n;
    let labels = categories.to_vec();

    Plot::new(id)
        .height(CHART_HEIGHT)
        .y_axis_label(y_label)
        .legend(Legend::default().position(Corner::RightTop))
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .include_y(0.0)
        .allow_scroll(false)
        .allow_drag(false)
        .show(ui, |plot_ui| {
            for (g, group) in groups.iter().enumerate() {
                let offset = (g as f64 - (n - 1.0) / 2.0) * bar_width;
                let bars: Vec<Bar> = group
                    .values
                    .iter()
                    .zip(categories)
                    .enumerate()
                    .map(|(i, (&value, category))| {
                        Bar::new(i as f64 + offset, value)
                            .width(bar_width * 0.95)
                            .name(category)
                    })
                    .collect();

                plot_ui.bar_chart(BarChart::new(bars).name(&group.name).color(group.color));
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(value: f64) -> GridMark {
        GridMark {
            value,
            step_size: 1.0,
        }
    }

    #[test]
    fn year_axis_hides_fractional_ticks() {
        assert_eq!(year_label(mark(2021.0), &(2020.0..=2024.0)), "2021");
        assert_eq!(year_label(mark(2021.5), &(2020.0..=2024.0)), "");
    }
}
