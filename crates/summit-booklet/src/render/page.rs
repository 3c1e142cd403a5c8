//! Page content rendering
//!
//! Turns a [`LogicalPage`] into a structured content block. Output depends
//! only on the agenda data, the event copy and the logo loader, so the same
//! inputs always produce the same blocks.

use crate::constants::{
    PANELISTS_LABEL, SPEAKER_LABEL_KEYWORDS, SPEAKERS_LABEL, SPECIAL_SESSION_KEYWORDS,
    SPONSORS_HEADING, WELCOME_HEADING, WELCOME_HIDDEN_KEYWORDS,
};
use crate::layout::LogicalPage;
use crate::options::EventInfo;
use crate::repository::SessionRepository;
use crate::types::{Day, Session, Speaker, Sponsor, SponsorTier};

use super::logo::{LogoImage, LogoLoader};

// =============================================================================
// Content Blocks
// =============================================================================

/// Agenda slot kind, decided from the title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    /// Break, meal, networking or set-up slot
    Special,
    /// Talk, panel or ceremony
    Regular,
}

/// Vertical spacing marker for the downstream layout.
///
/// Special slots have no speaker list and would otherwise sit flush against a
/// neighbour with a long one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySpacing {
    Standard,
    Extended,
}

/// Heading shown above a session's speakers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeakerLabel {
    Speakers,
    Panelists,
}

impl SpeakerLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            SpeakerLabel::Speakers => SPEAKERS_LABEL,
            SpeakerLabel::Panelists => PANELISTS_LABEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerGroup {
    pub label: SpeakerLabel,
    pub speakers: Vec<Speaker>,
}

/// One rendered agenda line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaEntry {
    pub session_id: String,
    pub title: String,
    /// `"09:00 - 10:00"`
    pub time_range: String,
    pub location: String,
    pub kind: SessionKind,
    pub spacing: EntrySpacing,
    /// Absent when the session has no speakers
    pub speakers: Option<SpeakerGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeContent {
    pub heading: String,
    pub title: String,
    pub dates: String,
    pub venue: String,
    pub objectives: Vec<String>,
    pub target_audience: Vec<String>,
    /// Welcome-day sessions, without set-up and registration slots
    pub sessions: Vec<AgendaEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaContent {
    pub day: Day,
    pub heading: String,
    pub entries: Vec<AgendaEntry>,
}

/// How a sponsor is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SponsorMark {
    Logo(LogoImage),
    /// Plain-text name, used when the logo could not be loaded
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SponsorEntry {
    pub name: String,
    pub tier: SponsorTier,
    pub mark: SponsorMark,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SponsorsContent {
    pub heading: String,
    pub entries: Vec<SponsorEntry>,
}

/// Content of one page slot in a spread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContent {
    Welcome(WelcomeContent),
    DayAgenda(AgendaContent),
    Sponsors(SponsorsContent),
    /// Placeholder for an empty booklet or an absent day
    Blank,
}

/// The pages visible at one spread index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSpread {
    pub index: usize,
    pub total_spreads: usize,
    /// One or two pages; a single `Blank` when there is nothing to show
    pub pages: Vec<PageContent>,
}

// =============================================================================
// Classification Rules
// =============================================================================

fn contains_any(title: &str, keywords: &[&str]) -> bool {
    let title = title.to_lowercase();
    keywords.iter().any(|keyword| title.contains(keyword))
}

/// Whether a title names a break, meal, networking or set-up slot
pub fn is_special_session(title: &str) -> bool {
    contains_any(title, &SPECIAL_SESSION_KEYWORDS)
}

pub fn classify_session(title: &str) -> SessionKind {
    if is_special_session(title) {
        SessionKind::Special
    } else {
        SessionKind::Regular
    }
}

/// `Speakers:` for keynotes and the opening ceremony, `Panelists:` otherwise
pub fn speaker_label(title: &str) -> SpeakerLabel {
    if contains_any(title, &SPEAKER_LABEL_KEYWORDS) {
        SpeakerLabel::Speakers
    } else {
        SpeakerLabel::Panelists
    }
}

pub fn render_entry(session: &Session) -> AgendaEntry {
    let kind = classify_session(&session.title);
    let spacing = match kind {
        SessionKind::Special => EntrySpacing::Extended,
        SessionKind::Regular => EntrySpacing::Standard,
    };
    let speakers = (!session.speakers.is_empty()).then(|| SpeakerGroup {
        label: speaker_label(&session.title),
        speakers: session.speakers.clone(),
    });

    AgendaEntry {
        session_id: session.id.clone(),
        title: session.title.clone(),
        time_range: session.time_range(),
        location: session.location.clone(),
        kind,
        spacing,
        speakers,
    }
}

// =============================================================================
// Page Renderer
// =============================================================================

/// Renders logical pages against one agenda
pub struct PageRenderer<'a, R: SessionRepository + ?Sized> {
    repository: &'a R,
    event: &'a EventInfo,
    welcome_day: Day,
    logos: &'a dyn LogoLoader,
}

impl<'a, R: SessionRepository + ?Sized> PageRenderer<'a, R> {
    pub fn new(
        repository: &'a R,
        event: &'a EventInfo,
        welcome_day: Day,
        logos: &'a dyn LogoLoader,
    ) -> Self {
        Self {
            repository,
            event,
            welcome_day,
            logos,
        }
    }

    pub fn render_welcome(&self) -> WelcomeContent {
        let sessions = self
            .repository
            .sessions_for_day(self.welcome_day)
            .into_iter()
            .filter(|s| !contains_any(&s.title, &WELCOME_HIDDEN_KEYWORDS))
            .map(render_entry)
            .collect();

        WelcomeContent {
            heading: WELCOME_HEADING.to_string(),
            title: self.event.title.clone(),
            dates: self.event.dates.clone(),
            venue: self.event.venue.clone(),
            objectives: self.event.objectives.clone(),
            target_audience: self.event.target_audience.clone(),
            sessions,
        }
    }

    /// Agenda for one day, or `None` for a day with no sessions that is not
    /// the welcome day
    pub fn render_day_agenda(&self, day: Day) -> Option<AgendaContent> {
        let sessions = self.repository.sessions_for_day(day);
        if sessions.is_empty() && day != self.welcome_day {
            return None;
        }

        Some(AgendaContent {
            day,
            heading: format!("{} Agenda", day),
            entries: sessions.into_iter().map(render_entry).collect(),
        })
    }

    pub fn render_sponsors(&self) -> SponsorsContent {
        let entries = self
            .repository
            .sponsors()
            .iter()
            .map(|sponsor| self.render_sponsor(sponsor))
            .collect();

        SponsorsContent {
            heading: SPONSORS_HEADING.to_string(),
            entries,
        }
    }

    fn render_sponsor(&self, sponsor: &Sponsor) -> SponsorEntry {
        let mark = match self.logos.load(&sponsor.logo) {
            Ok(image) => SponsorMark::Logo(image),
            Err(e) => {
                log::debug!("Showing name for {}: {}", sponsor.name, e);
                SponsorMark::Name(sponsor.name.clone())
            }
        };

        SponsorEntry {
            name: sponsor.name.clone(),
            tier: sponsor.tier,
            mark,
        }
    }

    pub fn render_page(&self, page: LogicalPage) -> PageContent {
        match page {
            LogicalPage::Welcome => PageContent::Welcome(self.render_welcome()),
            LogicalPage::DayAgenda(day) => self
                .render_day_agenda(day)
                .map_or(PageContent::Blank, PageContent::DayAgenda),
            LogicalPage::Sponsors => PageContent::Sponsors(self.render_sponsors()),
        }
    }

    /// Render the pages of one spread, substituting a blank placeholder when
    /// the spread holds no pages
    pub fn render_spread(
        &self,
        pages: &[LogicalPage],
        index: usize,
        total_spreads: usize,
    ) -> RenderedSpread {
        let mut rendered: Vec<PageContent> =
            pages.iter().map(|&page| self.render_page(page)).collect();
        if rendered.is_empty() {
            rendered.push(PageContent::Blank);
        }

        RenderedSpread {
            index,
            total_spreads,
            pages: rendered,
        }
    }
}
