use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color;
use crate::data::view::{sorted_indices, SortDirection, TableView};
use crate::data::view::{TitleColumn, YearColumn};
use crate::state::AppState;

const ROW_HEIGHT: f32 = 20.0;
const HEADER_HEIGHT: f32 = 24.0;

// ---------------------------------------------------------------------------
// Year overview table
// ---------------------------------------------------------------------------

/// Render the per-year table. Clicking a row selects that year.
pub fn year_table(ui: &mut Ui, state: &mut AppState) {
    ui.heading(RichText::new("Job Data Overview").color(color::HEADING));
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    let order = sorted_indices(&state.summaries, state.year_table.sort);
    let range = state.year_table.page_range(order.len());

    let mut sort_clicked: Option<YearColumn> = None;
    let mut year_clicked: Option<i32> = None;

    ui.push_id("year_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .sense(egui::Sense::click())
            .column(Column::auto().at_least(70.0))
            .column(Column::auto().at_least(90.0))
            .column(Column::remainder().at_least(140.0))
            .header(HEADER_HEIGHT, |mut header| {
                for (column, label) in [
                    (YearColumn::Year, "Year"),
                    (YearColumn::JobCount, "Total Jobs"),
                    (YearColumn::AvgSalary, "Average Salary (USD)"),
                ] {
                    header.col(|ui: &mut Ui| {
                        if sort_header(ui, label, state.year_table.direction_of(column)) {
                            sort_clicked = Some(column);
                        }
                    });
                }
            })
            .body(|mut body| {
                for &idx in &order[range] {
                    let summary = &state.summaries[idx];
                    body.row(ROW_HEIGHT, |mut row| {
                        row.set_selected(state.selected_year == Some(summary.year));
                        row.col(|ui: &mut Ui| {
                            ui.label(summary.year.to_string());
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(summary.job_count.to_string());
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(format!("{:.2}", summary.avg_salary));
                        });
                        if row.response().clicked() {
                            year_clicked = Some(summary.year);
                        }
                    });
                }
            });
    });

    pager(ui, &mut state.year_table, order.len());

    if let Some(column) = sort_clicked {
        state.year_table.cycle_sort(column);
    }
    if let Some(year) = year_clicked {
        state.select_year(year);
    }
}

// ---------------------------------------------------------------------------
// Title breakdown table
// ---------------------------------------------------------------------------

/// Render the job-title table for the selected year, if there is anything
/// to show.
pub fn title_table(ui: &mut Ui, state: &mut AppState) {
    let Some((year, counts)) = state.title_breakdown() else {
        if let Some(year) = state.selected_year {
            ui.label(format!("No job titles recorded for {year}."));
        }
        return;
    };

    ui.heading(RichText::new(format!("Job Titles in {year}")).color(color::HEADING));
    ui.separator();

    let order = sorted_indices(counts, state.title_table.sort);
    let range = state.title_table.page_range(order.len());
    let mut sort_clicked: Option<TitleColumn> = None;

    ui.push_id("title_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::remainder().at_least(160.0))
            .column(Column::auto().at_least(110.0))
            .header(HEADER_HEIGHT, |mut header| {
                for (column, label) in [
                    (TitleColumn::Title, "Job Title"),
                    (TitleColumn::Count, "Number of Jobs"),
                ] {
                    header.col(|ui: &mut Ui| {
                        if sort_header(ui, label, state.title_table.direction_of(column)) {
                            sort_clicked = Some(column);
                        }
                    });
                }
            })
            .body(|mut body| {
                for &idx in &order[range] {
                    let tc = &counts[idx];
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui: &mut Ui| {
                            let swatch = state.title_palette.color_for(&tc.job_title);
                            ui.label(RichText::new("■").color(swatch));
                            ui.label(tc.job_title.as_str());
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(tc.count.to_string());
                        });
                    });
                }
            });
    });

    let len = order.len();
    pager(ui, &mut state.title_table, len);

    if let Some(column) = sort_clicked {
        state.title_table.cycle_sort(column);
    }
}

// ---------------------------------------------------------------------------
// Shared table widgets
// ---------------------------------------------------------------------------

/// Clickable column header with the current sort arrow. Returns `true` when
/// clicked.
fn sort_header(ui: &mut Ui, label: &str, direction: Option<SortDirection>) -> bool {
    let text = match direction {
        Some(dir) => format!("{label} {}", dir.arrow()),
        None => label.to_string(),
    };
    ui.add(egui::Button::new(RichText::new(text).strong()).frame(false))
        .clicked()
}

fn pager<C: Copy + PartialEq>(ui: &mut Ui, view: &mut TableView<C>, len: usize) {
    let pages = view.page_count(len);
    let current = view.page.min(pages - 1);
    view.page = current;
    ui.horizontal(|ui: &mut Ui| {
        if ui
            .add_enabled(current > 0, egui::Button::new("◀"))
            .clicked()
        {
            view.prev_page();
        }
        ui.label(format!("page {} of {pages}", current + 1));
        if ui
            .add_enabled(current + 1 < pages, egui::Button::new("▶"))
            .clicked()
        {
            view.next_page(len);
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.dataset.is_some(), egui::Button::new("Export summaries…"))
                .clicked()
            {
                save_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows loaded, {} skipped, {} years",
                ds.len(),
                ds.skipped_rows,
                state.summaries.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open salary data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}

pub fn save_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export summaries")
        .add_filter("JSON", &["json"])
        .set_file_name("salary_summary.json")
        .save_file();

    if let Some(path) = file {
        state.export_to(&path);
    }
}
