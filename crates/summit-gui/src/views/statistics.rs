use eframe::egui;
use summit_runtime::BookletStatistics;

pub fn show_statistics(ui: &mut egui::Ui, stats: Option<&BookletStatistics>) {
    egui::CollapsingHeader::new("📊 Statistics")
        .default_open(true)
        .show(ui, |ui| {
            let Some(stats) = stats else {
                ui.label("No statistics available");
                return;
            };

            ui.label(format!("Logical pages: {}", stats.logical_pages));
            ui.label(format!("Spreads (mobile): {}", stats.mobile_spreads));
            ui.label(format!("Spreads (desktop): {}", stats.desktop_spreads));
            ui.label(format!("Special sessions: {}", stats.special_sessions));

            ui.separator();
            for (day, count) in &stats.sessions_per_day {
                ui.label(format!("{}: {} sessions", day, count));
            }

            if !stats.sponsors_per_tier.is_empty() {
                ui.separator();
                for (tier, count) in &stats.sponsors_per_tier {
                    ui.label(format!("{}: {}", tier.label(), count));
                }
            }
        });
}
