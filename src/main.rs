mod app;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;

use app::SalaryDashboardApp;
use clap::Parser;
use config::Cli;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = Cli::parse();
    log::info!("Starting with {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Salary Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(SalaryDashboardApp::new(&config)))),
    )
}
