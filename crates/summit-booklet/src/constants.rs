//! Shared constants for booklet layout
//!
//! This module centralizes the breakpoints, timings and keyword lists used
//! throughout the layout and rendering process.

use crate::types::Day;

// =============================================================================
// Responsive Layout
// =============================================================================

/// Viewport widths strictly below this are laid out one page per spread
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

/// Delay used to coalesce bursts of resize events (milliseconds)
pub const RESIZE_DEBOUNCE_MS: u64 = 150;

/// Pages shown side by side on desktop
pub const DESKTOP_PAGES_PER_SPREAD: usize = 2;

/// Pages shown at once on mobile
pub const MOBILE_PAGES_PER_SPREAD: usize = 1;

// =============================================================================
// Content Rules
// =============================================================================

/// The event day rendered as the Welcome page instead of an agenda page
pub const WELCOME_DAY: Day = Day(1);

/// Case-insensitive title fragments marking a break, meal, networking or
/// set-up slot
pub const SPECIAL_SESSION_KEYWORDS: [&str; 7] = [
    "networking",
    "break",
    "lunch",
    "dinner",
    "breakfast",
    "set up",
    "registration",
];

/// Case-insensitive title fragments whose speakers are labelled
/// [`SPEAKERS_LABEL`] rather than [`PANELISTS_LABEL`]
pub const SPEAKER_LABEL_KEYWORDS: [&str; 2] = ["keynote", "opening ceremony"];

/// Welcome-day slots that never appear on the Welcome page
pub const WELCOME_HIDDEN_KEYWORDS: [&str; 2] = ["set up", "registration"];

pub const SPEAKERS_LABEL: &str = "Speakers:";

pub const PANELISTS_LABEL: &str = "Panelists:";

// =============================================================================
// Page Headings
// =============================================================================

pub const WELCOME_HEADING: &str = "Welcome";

pub const SPONSORS_HEADING: &str = "Our Sponsors";
