use eframe::egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::color;
use crate::data::model::{TitleCount, YearSummary};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Average salary line chart (central panel)
// ---------------------------------------------------------------------------

/// Chart points ordered by year, independent of the table's sort.
pub fn salary_points(summaries: &[YearSummary]) -> Vec<[f64; 2]> {
    let mut points: Vec<[f64; 2]> = summaries
        .iter()
        .map(|s| [s.year as f64, s.avg_salary])
        .collect();
    points.sort_by(|a, b| a[0].total_cmp(&b[0]));
    points
}

/// Render the "Average Salary by Year" chart.
pub fn salary_chart(ui: &mut Ui, state: &AppState, height: f32) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a salary CSV to begin  (File → Open…)");
        });
        return;
    }

    ui.heading(chart_heading("Average Salary by Year"));

    let points = salary_points(&state.summaries);

    Plot::new("salary_plot")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("USD")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(PlotPoints::from(points.clone()))
                .name("Average Salary (USD)")
                .color(color::SALARY_LINE)
                .width(2.0);
            plot_ui.line(line);

            let markers = Points::new(PlotPoints::from(points))
                .color(color::SALARY_POINT)
                .radius(5.0);
            plot_ui.points(markers);
        });
}

// ---------------------------------------------------------------------------
// Title breakdown bar chart
// ---------------------------------------------------------------------------

/// One bar per title, in breakdown order, coloured from the state's palette.
pub fn title_bars(counts: &[TitleCount], state: &AppState) -> Vec<Bar> {
    counts
        .iter()
        .enumerate()
        .map(|(i, tc)| {
            Bar::new(i as f64, tc.count as f64)
                .name(&tc.job_title)
                .fill(state.title_palette.color_for(&tc.job_title))
                .width(0.7)
        })
        .collect()
}

/// Render the title counts of the selected year, if any.
pub fn title_chart(ui: &mut Ui, state: &AppState) {
    let Some((year, counts)) = state.title_breakdown() else {
        return;
    };

    ui.heading(chart_heading(&format!("Jobs per Title in {year}")));

    let chart = BarChart::new(title_bars(counts, state)).name("Number of Jobs");

    Plot::new("title_plot")
        .legend(Legend::default())
        .y_axis_label("Jobs")
        .show_x(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

fn chart_heading(text: &str) -> RichText {
    RichText::new(text).color(color::HEADING)
}
