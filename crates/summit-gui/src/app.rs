use std::time::Duration;

use eframe::egui;
use summit_booklet::{FsLogoLoader, StaticRepository};
use summit_runtime::{
    Booklet, BookletCommand, BookletHandle, BookletOptions, BookletStatistics, BookletUpdate,
    LayoutState, RenderedSpread, spawn_booklet_on,
};

use crate::logger::AppLogger;
use crate::views::{show_log, show_navigation, show_spread, show_statistics};

/// Window size requested at startup
pub const WINDOW_SIZE: [f32; 2] = [1024.0, 768.0];

/// Logo directory, relative to the working directory
const ASSET_DIR: &str = "assets";

pub struct SummitApp {
    booklet: BookletHandle,
    layout: Option<LayoutState>,
    spread: Option<RenderedSpread>,
    stats: Option<BookletStatistics>,
    status: String,
    last_width: f32,
    show_log: bool,
    logger: AppLogger,

    // Keeps the worker's runtime reachable for the app's lifetime
    _tokio_handle: tokio::runtime::Handle,
}

impl SummitApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
    ) -> Self {
        let width = initial_width(cc.egui_ctx.input(|i| i.viewport().inner_rect));
        let options = BookletOptions::default();
        let debounce = options.resize_debounce();
        let booklet = Booklet::new(StaticRepository::summit(), options, width)
            .with_logo_loader(FsLogoLoader::new(ASSET_DIR));

        let handle = spawn_booklet_on(&tokio_handle, booklet, debounce);
        handle.send(BookletCommand::Render);
        handle.send(BookletCommand::CalculateStats);

        Self {
            booklet: handle,
            layout: None,
            spread: None,
            stats: None,
            status: String::new(),
            last_width: width,
            show_log: false,
            logger,
            _tokio_handle: tokio_handle,
        }
    }

    fn apply_update(&mut self, update: BookletUpdate) {
        match update {
            BookletUpdate::LayoutChanged { layout } => {
                self.status = if layout.is_mobile {
                    "Single-page layout".to_string()
                } else {
                    "Two-page layout".to_string()
                };
                self.layout = Some(layout);
            }
            BookletUpdate::SpreadRendered { layout, spread } => {
                self.layout = Some(layout);
                self.spread = Some(spread);
            }
            BookletUpdate::DataLoaded {
                path,
                sessions,
                sponsors,
            } => {
                self.status = format!(
                    "Loaded {} sessions and {} sponsors from {}",
                    sessions,
                    sponsors,
                    path.display()
                );
                self.booklet.send(BookletCommand::CalculateStats);
            }
            BookletUpdate::StatsCalculated { stats } => {
                self.stats = Some(stats);
            }
            BookletUpdate::Error { message } => {
                log::warn!("{}", message);
                self.status = format!("Error: {message}");
            }
        }
    }
}

/// The measured viewport width, or the requested window width before the
/// first measurement
fn initial_width(inner_rect: Option<egui::Rect>) -> f32 {
    inner_rect.map_or(WINDOW_SIZE[0], |rect| rect.width())
}

impl eframe::App for SummitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process all pending updates from worker
        while let Some(update) = self.booklet.try_recv() {
            self.apply_update(update);
        }

        let width = ctx.available_rect().width();
        if width != self.last_width {
            self.last_width = width;
            self.booklet.send(BookletCommand::Resize { width_px: width });
        }

        // Handle drag-and-drop for agenda files
        ctx.input(|i| {
            for file in &i.raw.dropped_files {
                if let Some(path) = &file.path {
                    if path.extension().and_then(|s| s.to_str()) == Some("json") {
                        self.booklet
                            .send(BookletCommand::LoadData { path: path.clone() });
                        self.status = "Loading agenda...".to_string();
                    }
                }
            }
        });

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("📂 Open agenda...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Agenda", &["json"])
                        .pick_file()
                    {
                        self.booklet.send(BookletCommand::LoadData { path });
                        self.status = "Loading agenda...".to_string();
                    }
                }
                ui.separator();
                ui.toggle_value(&mut self.show_log, "📜 Log");
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(layout) = &self.layout {
                    ui.label(format!(
                        "{}px · {} page(s) per spread",
                        self.last_width.round(),
                        layout.pages_per_spread
                    ));
                    ui.separator();
                }
                ui.label(&self.status);
            });
        });

        if self.show_log {
            egui::SidePanel::right("log").show(ctx, |ui| {
                show_log(ui, &self.logger);
            });
        }

        egui::SidePanel::left("stats")
            .resizable(false)
            .show(ctx, |ui| show_statistics(ui, self.stats.as_ref()));

        egui::CentralPanel::default().show(ctx, |ui| {
            match (&self.layout, &self.spread) {
                (Some(layout), Some(spread)) => {
                    show_navigation(ui, layout, &self.booklet);
                    ui.separator();
                    show_spread(ui, spread);
                }
                _ => {
                    ui.centered_and_justified(|ui| {
                        ui.spinner();
                    });
                }
            }
        });

        // Updates arrive from another thread; keep polling for them
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
