use eframe::egui;
use summit_booklet::render::{
    AgendaContent, AgendaEntry, EntrySpacing, PageContent, SponsorMark, SponsorsContent,
    WelcomeContent,
};
use summit_runtime::{BookletCommand, BookletHandle, LayoutState, RenderedSpread};

const ENTRY_GAP: f32 = 6.0;
const EXTENDED_GAP: f32 = 14.0;

pub fn show_navigation(ui: &mut egui::Ui, layout: &LayoutState, booklet: &BookletHandle) {
    ui.horizontal(|ui| {
        let can_go_back = layout.current_spread > 0;
        let can_go_forward = layout.current_spread + 1 < layout.total_spreads;

        if ui
            .add_enabled(can_go_back, egui::Button::new("◀ Previous"))
            .clicked()
        {
            booklet.send(BookletCommand::Previous);
        }

        ui.label(format!(
            "Spread {} of {}",
            layout.current_spread + 1,
            layout.total_spreads
        ));

        if ui
            .add_enabled(can_go_forward, egui::Button::new("Next ▶"))
            .clicked()
        {
            booklet.send(BookletCommand::Next);
        }
    });
}

/// Draw the spread's pages side by side
pub fn show_spread(ui: &mut egui::Ui, spread: &RenderedSpread) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.columns(spread.pages.len().max(1), |columns| {
            for (column, page) in columns.iter_mut().zip(&spread.pages) {
                egui::Frame::group(column.style()).show(column, |ui| {
                    ui.set_min_width(ui.available_width());
                    show_page(ui, page);
                });
            }
        });
    });
}

fn show_page(ui: &mut egui::Ui, page: &PageContent) {
    match page {
        PageContent::Welcome(welcome) => show_welcome(ui, welcome),
        PageContent::DayAgenda(agenda) => show_agenda(ui, agenda),
        PageContent::Sponsors(sponsors) => show_sponsors(ui, sponsors),
        PageContent::Blank => {
            ui.weak("(blank)");
        }
    }
}

fn show_welcome(ui: &mut egui::Ui, welcome: &WelcomeContent) {
    ui.heading(&welcome.heading);
    ui.strong(&welcome.title);
    ui.label(format!("{} | {}", welcome.dates, welcome.venue));

    if !welcome.objectives.is_empty() {
        ui.add_space(ENTRY_GAP);
        ui.strong("Objectives");
        for objective in &welcome.objectives {
            ui.label(format!("• {objective}"));
        }
    }

    if !welcome.target_audience.is_empty() {
        ui.add_space(ENTRY_GAP);
        ui.strong("Who should attend");
        for audience in &welcome.target_audience {
            ui.label(format!("• {audience}"));
        }
    }

    if !welcome.sessions.is_empty() {
        ui.separator();
        for entry in &welcome.sessions {
            show_entry(ui, entry);
        }
    }
}

fn show_agenda(ui: &mut egui::Ui, agenda: &AgendaContent) {
    ui.heading(&agenda.heading);
    for entry in &agenda.entries {
        show_entry(ui, entry);
    }
}

fn show_entry(ui: &mut egui::Ui, entry: &AgendaEntry) {
    let gap = match entry.spacing {
        EntrySpacing::Standard => ENTRY_GAP,
        EntrySpacing::Extended => EXTENDED_GAP,
    };
    ui.add_space(gap);

    ui.horizontal(|ui| {
        ui.monospace(&entry.time_range);
        ui.strong(&entry.title);
    });
    ui.weak(&entry.location);

    if let Some(group) = &entry.speakers {
        ui.label(group.label.as_str());
        for speaker in &group.speakers {
            ui.label(format!(
                "  {}, {}, {}",
                speaker.name, speaker.title, speaker.company
            ));
        }
    }

    if entry.spacing == EntrySpacing::Extended {
        ui.add_space(gap);
    }
}

fn show_sponsors(ui: &mut egui::Ui, sponsors: &SponsorsContent) {
    ui.heading(&sponsors.heading);
    for entry in &sponsors.entries {
        ui.horizontal(|ui| {
            ui.weak(entry.tier.label());
            match &entry.mark {
                SponsorMark::Logo(logo) => {
                    ui.label(format!(
                        "🖼 {} ({}×{})",
                        entry.name, logo.width, logo.height
                    ));
                }
                SponsorMark::Name(name) => {
                    ui.strong(name);
                }
            }
        });
    }
}
