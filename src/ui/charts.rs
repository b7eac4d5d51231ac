use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, PlotUi, Points, Polygon};

use crate::color::ColorMap;
use crate::data::severity::Severity;
use crate::session::{Session, ViewModel};

// ---------------------------------------------------------------------------
// Diagnosis proportion (pie)
// ---------------------------------------------------------------------------

/// Pie chart of the category counts, drawn as polygon sectors since
/// egui_plot has no pie primitive.
pub fn diagnosis_pie(ui: &mut Ui, view: &ViewModel, colors: &ColorMap) {
    let total: usize = view.category_counts.iter().map(|(_, n)| n).sum();
    if total == 0 {
        ui.label("No cases match the current filters.");
        return;
    }

    Plot::new("diagnosis_pie")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes([false, false])
        .show_grid(false)
        .show(ui, |plot_ui: &mut PlotUi| {
            let mut angle = 0.0_f64;
            for (label, count) in &view.category_counts {
                let sweep = *count as f64 / total as f64 * std::f64::consts::TAU;
                let sector = pie_sector(angle, angle + sweep);
                plot_ui.polygon(
                    Polygon::new(sector)
                        .name(format!("{label} ({count})"))
                        .fill_color(colors.color_for(label)),
                );
                angle += sweep;
            }
        });
}

fn pie_sector(from: f64, to: f64) -> PlotPoints<'static> {
    let steps = ((to - from) / 0.05).ceil().max(2.0) as usize;
    let mut pts = vec![[0.0, 0.0]];
    for i in 0..=steps {
        let a = from + (to - from) * i as f64 / steps as f64;
        pts.push([a.cos(), a.sin()]);
    }
    PlotPoints::from(pts)
}

// ---------------------------------------------------------------------------
// Case counts (bar)
// ---------------------------------------------------------------------------

/// Bar chart of case counts per diagnosis.
pub fn diagnosis_bars(ui: &mut Ui, view: &ViewModel, colors: &ColorMap) {
    Plot::new("diagnosis_bars")
        .legend(Legend::default())
        .y_axis_label("Cases")
        .show(ui, |plot_ui: &mut PlotUi| {
            for (i, (label, count)) in view.category_counts.iter().enumerate() {
                let bar = Bar::new(i as f64, *count as f64).width(0.6);
                plot_ui.bar_chart(
                    BarChart::new(vec![bar])
                        .name(label)
                        .color(colors.color_for(label)),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Radius vs area (scatter)
// ---------------------------------------------------------------------------

/// Scatter plot of radius against area, coloured by diagnosis.
pub fn radius_area_scatter(ui: &mut Ui, session: &Session, view: &ViewModel, colors: &ColorMap) {
    let Some(points) = &view.scatter else {
        return;
    };

    Plot::new("radius_area_scatter")
        .legend(Legend::default())
        .x_axis_label(session.radius_column_name().to_string())
        .y_axis_label("Area")
        .show(ui, |plot_ui: &mut PlotUi| {
            // One series per category so the legend carries the color key.
            for (label, _) in &view.category_counts {
                let series: PlotPoints = points
                    .iter()
                    .filter(|p| &p.category == label)
                    .map(|p| [p.x, p.y])
                    .collect();
                plot_ui.points(
                    Points::new(series)
                        .name(label)
                        .color(colors.color_for(label))
                        .radius(2.5),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Radius histogram
// ---------------------------------------------------------------------------

/// Histogram of the radius-proxy column, stacked by diagnosis.
pub fn radius_histogram(ui: &mut Ui, session: &Session, view: &ViewModel, colors: &ColorMap) {
    let Some(hist) = &view.histogram else {
        ui.label("No cases match the current filters.");
        return;
    };

    Plot::new("radius_histogram")
        .legend(Legend::default())
        .x_axis_label(session.radius_column_name().to_string())
        .y_axis_label("Cases")
        .show(ui, |plot_ui: &mut PlotUi| {
            let mut charts: Vec<BarChart> = Vec::new();
            for (label, counts) in &hist.series {
                let bars: Vec<Bar> = counts
                    .iter()
                    .enumerate()
                    .map(|(i, &n)| {
                        Bar::new(hist.bin_center(i), n as f64).width(hist.width * 0.95)
                    })
                    .collect();
                let mut chart = BarChart::new(bars)
                    .name(label)
                    .color(colors.color_for(label));
                // Stack on the series drawn so far.
                let below: Vec<&BarChart> = charts.iter().collect();
                chart = chart.stack_on(&below);
                charts.push(chart);
            }
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

// ---------------------------------------------------------------------------
// Severity × diagnosis (grouped bars)
// ---------------------------------------------------------------------------

/// Grouped bar chart of severity buckets split by diagnosis.
pub fn severity_bars(ui: &mut Ui, view: &ViewModel, colors: &ColorMap) {
    let Some(sev) = &view.severity else {
        return;
    };

    let categories: Vec<&String> = view.category_counts.iter().map(|(l, _)| l).collect();
    let group_width = 0.8;
    let bar_width = group_width / categories.len().max(1) as f64;

    Plot::new("severity_bars")
        .legend(Legend::default())
        .y_axis_label("Cases")
        .show(ui, |plot_ui: &mut PlotUi| {
            for (ci, label) in categories.iter().enumerate() {
                let bars: Vec<Bar> = Severity::ALL
                    .iter()
                    .enumerate()
                    .filter_map(|(si, bucket)| {
                        let count = sev
                            .grouped
                            .iter()
                            .find(|((b, c), _)| b == bucket && &c == label)
                            .map(|(_, n)| *n)?;
                        let x = si as f64 - group_width / 2.0
                            + bar_width * (ci as f64 + 0.5);
                        Some(Bar::new(x, count as f64).width(bar_width * 0.9))
                    })
                    .collect();
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .name(label.as_str())
                        .color(colors.color_for(label)),
                );
            }
        });
}
