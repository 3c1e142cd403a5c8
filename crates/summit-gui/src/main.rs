#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context;
use eframe::egui;

mod app;
mod logger;
mod views;

fn main() -> anyhow::Result<()> {
    let logger = logger::AppLogger::new(200);
    logger
        .clone()
        .init()
        .context("Failed to install logger")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("Failed to start tokio runtime")?;
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app::WINDOW_SIZE)
            .with_title("Summit Agenda"),
        ..Default::default()
    };

    eframe::run_native(
        "Summit Agenda",
        options,
        Box::new(move |cc| Ok(Box::new(app::SummitApp::new(cc, handle, logger)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
