use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::config::Cli;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SalaryDashboardApp {
    pub state: AppState,
}

impl SalaryDashboardApp {
    /// Build the app and load the configured dataset, if any.
    pub fn new(config: &Cli) -> Self {
        let mut state = AppState::with_page_size(config.rows_per_page());
        if let Some(path) = &config.csv_path {
            state.load_path(path);
        }
        Self { state }
    }
}

impl eframe::App for SalaryDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: tables ----
        egui::SidePanel::left("table_panel")
            .default_width(420.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui: &mut Ui| {
                    ui.heading(RichText::new("ML Engineers Salary Analyzer").strong());
                });
                ui.add_space(8.0);

                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui: &mut Ui| {
                        panels::year_table(ui, &mut self.state);
                        ui.add_space(16.0);
                        panels::title_table(ui, &mut self.state);
                    });
            });

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let has_breakdown = self.state.title_breakdown().is_some();
            let chart_height = if has_breakdown {
                ui.available_height() * 0.5
            } else {
                ui.available_height() - 40.0
            };
            plot::salary_chart(ui, &self.state, chart_height);
            if has_breakdown {
                ui.separator();
                plot::title_chart(ui, &self.state);
            }
        });
    }
}
