use crate::booklet::Booklet;
use crate::render::*;
use crate::repository::SessionRepository;

const ENTRY_INDENT: &str = "               ";

/// Plain-text preview of the first `max_spreads` spreads under the current
/// layout
pub fn generate_preview<R: SessionRepository>(booklet: &Booklet<R>, max_spreads: usize) -> String {
    let count = booklet.total_spreads().min(max_spreads);
    (0..count)
        .map(|index| spread_to_text(&booklet.render_spread(index)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plain-text rendering of one spread
pub fn spread_to_text(spread: &RenderedSpread) -> String {
    let mut lines = vec![format!(
        "=== Spread {} of {} ===",
        spread.index + 1,
        spread.total_spreads
    )];

    for page in &spread.pages {
        lines.push(String::new());
        page_lines(page, &mut lines);
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn page_lines(page: &PageContent, lines: &mut Vec<String>) {
    match page {
        PageContent::Welcome(welcome) => {
            lines.push(format!("--- {} ---", welcome.heading));
            lines.push(welcome.title.clone());
            lines.push(format!("{} | {}", welcome.dates, welcome.venue));
            if !welcome.objectives.is_empty() {
                lines.push("Objectives:".to_string());
                lines.extend(welcome.objectives.iter().map(|o| format!("  - {}", o)));
            }
            if !welcome.target_audience.is_empty() {
                lines.push("Who should attend:".to_string());
                lines.extend(welcome.target_audience.iter().map(|a| format!("  - {}", a)));
            }
            for entry in &welcome.sessions {
                entry_lines(entry, lines);
            }
        }
        PageContent::DayAgenda(agenda) => {
            lines.push(format!("--- {} ---", agenda.heading));
            for entry in &agenda.entries {
                entry_lines(entry, lines);
            }
        }
        PageContent::Sponsors(sponsors) => {
            lines.push(format!("--- {} ---", sponsors.heading));
            for entry in &sponsors.entries {
                let shown = match &entry.mark {
                    SponsorMark::Logo(logo) => {
                        format!("[logo {} {}x{}]", logo.source, logo.width, logo.height)
                    }
                    SponsorMark::Name(name) => name.clone(),
                };
                lines.push(format!("{:<9} {}", entry.tier.label(), shown));
            }
        }
        PageContent::Blank => {
            lines.push("--- (blank) ---".to_string());
        }
    }
}

fn entry_lines(entry: &AgendaEntry, lines: &mut Vec<String>) {
    if entry.spacing == EntrySpacing::Extended {
        lines.push(String::new());
    }
    lines.push(format!("{:<15}{}", entry.time_range, entry.title));
    if !entry.location.is_empty() {
        lines.push(format!("{}{}", ENTRY_INDENT, entry.location));
    }
    if let Some(group) = &entry.speakers {
        lines.push(format!("{}{}", ENTRY_INDENT, group.label.as_str()));
        for speaker in &group.speakers {
            lines.push(format!(
                "{}  {}, {}, {}",
                ENTRY_INDENT, speaker.name, speaker.title, speaker.company
            ));
        }
    }
    if entry.spacing == EntrySpacing::Extended {
        lines.push(String::new());
    }
}
