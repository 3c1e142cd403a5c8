use eframe::egui;
use log::Level;

use crate::logger::AppLogger;

pub fn show_log(ui: &mut egui::Ui, logger: &AppLogger) {
    ui.horizontal(|ui| {
        ui.heading("Log");
        if ui.button("Clear").clicked() {
            logger.clear();
        }
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .stick_to_bottom(true)
        .show(ui, |ui| {
            let error_color = ui.visuals().error_fg_color;
            let warn_color = ui.visuals().warn_fg_color;
            for entry in logger.get_entries() {
                let text = format!(
                    "{} {}",
                    entry.timestamp.format("%H:%M:%S"),
                    entry.message
                );
                match entry.level {
                    Level::Error => ui.colored_label(error_color, text),
                    Level::Warn => ui.colored_label(warn_color, text),
                    _ => ui.label(text),
                };
            }
        });
}
