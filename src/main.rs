mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use app::{ForcingApp, ViewerState};
use clap::Parser;
use config::Args;
use data::model::Dataset;
use eframe::egui;
use state::ChartBinding;

fn load_dataset(path: &Path) -> anyhow::Result<Dataset> {
    data::loader::load_file(path)
        .with_context(|| format!("loading forcing table {}", path.display()))
}

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();

    let state = match load_dataset(&args.data) {
        Ok(dataset) => {
            ViewerState::Ready(ChartBinding::new(Arc::new(dataset), args.default_selection()))
        }
        Err(e) => {
            log::error!("Failed to load dataset: {e:#}");
            ViewerState::LoadFailed(format!("{e:#}"))
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Radiative Forcing",
        options,
        Box::new(|_cc| Ok(Box::new(ForcingApp::new(state)))),
    )
}
