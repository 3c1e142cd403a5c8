//! Spread calculation
//!
//! This module derives the logical page list from the agenda and packs it
//! into spreads, the unit the reader flips through.
//!
//! ## Packing
//!
//! **Desktop (2 pages per spread), 4 logical pages:**
//! - Spread 0: [Welcome, Day 2]
//! - Spread 1: [Day 3, Sponsors]
//!
//! **Mobile (1 page per spread), same pages:**
//! - Spread 0: [Welcome], 1: [Day 2], 2: [Day 3], 3: [Sponsors]
//!
//! A trailing odd page on desktop gets a spread of its own with an empty
//! facing side.

use crate::repository::SessionRepository;
use crate::types::Day;

use super::{DeviceClass, LogicalPage};

// =============================================================================
// Spread Counts
// =============================================================================

/// Pages shown at once for a device class
pub fn pages_per_spread(is_mobile: bool) -> usize {
    DeviceClass::from_is_mobile(is_mobile).pages_per_spread()
}

/// Number of spreads needed to hold `total_logical_pages`.
///
/// Never returns 0: with no pages at all there is still one placeholder
/// spread, so the navigator always has a valid index.
pub fn total_spreads(is_mobile: bool, total_logical_pages: usize) -> usize {
    let per_spread = pages_per_spread(is_mobile);
    total_logical_pages.div_ceil(per_spread).max(1)
}

// =============================================================================
// Logical Pages
// =============================================================================

/// Derive the ordered logical pages from the agenda.
///
/// The welcome day always becomes the Welcome page when it is an event day,
/// whatever sessions it holds. Every other reported day with
/// sessions becomes an agenda page. The Sponsors page closes the booklet
/// when there is at least one sponsor.
pub fn logical_pages<R: SessionRepository + ?Sized>(
    repository: &R,
    welcome_day: Day,
) -> Vec<LogicalPage> {
    let mut days = repository.all_days();
    if repository.is_event_day(welcome_day) && !days.contains(&welcome_day) {
        days.push(welcome_day);
        days.sort();
    }

    let mut pages = Vec::new();
    for day in days {
        if day == welcome_day {
            pages.push(LogicalPage::Welcome);
        } else if !repository.sessions_for_day(day).is_empty() {
            pages.push(LogicalPage::DayAgenda(day));
        }
    }

    if !repository.sponsors().is_empty() {
        pages.push(LogicalPage::Sponsors);
    }

    pages
}

/// The pages belonging to one spread.
///
/// Returns an empty slice for a spread past the end, which renders as a
/// blank placeholder.
pub fn spread_pages(pages: &[LogicalPage], pages_per_spread: usize, spread: usize) -> &[LogicalPage] {
    let per_spread = pages_per_spread.max(1);
    let start = spread.saturating_mul(per_spread);
    if start >= pages.len() {
        return &[];
    }
    let end = (start + per_spread).min(pages.len());
    &pages[start..end]
}

/// Index of the spread that contains a logical page
pub fn spread_of_page(page_index: usize, pages_per_spread: usize) -> usize {
    page_index / pages_per_spread.max(1)
}
