use crate::layout::{logical_pages, total_spreads};
use crate::options::BookletOptions;
use crate::render::is_special_session;
use crate::repository::SessionRepository;
use crate::types::*;

/// Calculate statistics for the booklet
pub fn calculate_statistics<R: SessionRepository + ?Sized>(
    repository: &R,
    options: &BookletOptions,
) -> BookletStatistics {
    let pages = logical_pages(repository, options.welcome_day);

    let mut sessions_per_day = Vec::new();
    let mut special_sessions = 0;
    for day in repository.all_days() {
        let sessions = repository.sessions_for_day(day);
        special_sessions += sessions
            .iter()
            .filter(|s| is_special_session(&s.title))
            .count();
        sessions_per_day.push((day, sessions.len()));
    }

    let sponsors = repository.sponsors();
    let sponsors_per_tier = SponsorTier::PRIORITY
        .iter()
        .map(|&tier| (tier, sponsors.iter().filter(|s| s.tier == tier).count()))
        .filter(|&(_, count)| count > 0)
        .collect();

    BookletStatistics {
        logical_pages: pages.len(),
        mobile_spreads: total_spreads(true, pages.len()),
        desktop_spreads: total_spreads(false, pages.len()),
        sessions_per_day,
        special_sessions,
        sponsors_per_tier,
    }
}
