//! Session and sponsor data consumed by the booklet
//!
//! The booklet only reads from a [`SessionRepository`]. [`StaticRepository`]
//! is the in-memory implementation, built from an [`AgendaData`] document that
//! can come from code, from the built-in Summit agenda or from a JSON asset.

use std::collections::HashSet;

use crate::types::*;

/// Read-only access to the agenda
pub trait SessionRepository {
    /// Sessions for one day, in agenda order
    fn sessions_for_day(&self, day: Day) -> Vec<&Session>;

    /// Ascending days with at least one session. The first event day is
    /// always included, even when it has no sessions.
    fn all_days(&self) -> Vec<Day>;

    /// Whether `day` is one of the event's days, with or without sessions
    fn is_event_day(&self, day: Day) -> bool {
        self.all_days().contains(&day)
    }

    /// Sponsors, highest tier first
    fn sponsors(&self) -> &[Sponsor];
}

/// Raw agenda document, in the shape of the JSON asset
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct AgendaData {
    /// Declared event days. When empty, the days used by sessions are taken.
    pub event_days: Vec<Day>,
    pub sessions: Vec<Session>,
    pub sponsors: Vec<Sponsor>,
}

impl AgendaData {
    /// The Summit agenda document behind [`StaticRepository::summit`]
    pub fn summit() -> Self {
        Self {
            event_days: vec![Day(1), Day(2), Day(3)],
            sessions: summit_sessions(),
            sponsors: vec![
                Sponsor::new("Skyline Airways", SponsorTier::Platinum, "sponsors/skyline-airways.png"),
                Sponsor::new("Harbour Airport Group", SponsorTier::Gold, "sponsors/harbour-airport.png"),
                Sponsor::new("AeroLease Capital", SponsorTier::Gold, "sponsors/aerolease.png"),
                Sponsor::new("Meridian Ground Services", SponsorTier::Silver, "sponsors/meridian.png"),
            ],
        }
    }
}

/// Immutable, validated agenda held in memory
#[derive(Debug, Clone, PartialEq)]
pub struct StaticRepository {
    event_days: Vec<Day>,
    sessions: Vec<Session>,
    sponsors: Vec<Sponsor>,
}

impl StaticRepository {
    /// Validate and index an agenda document.
    ///
    /// Sponsors are stably sorted into tier priority order, so input order
    /// only matters within a tier.
    pub fn new(data: AgendaData) -> Result<Self> {
        let AgendaData {
            event_days,
            sessions,
            sponsors,
        } = data;

        let event_days = if event_days.is_empty() {
            sessions.iter().map(|s| s.day).collect::<Vec<_>>()
        } else {
            event_days
        };

        if let Some(day) = event_days.iter().find(|d| d.number() == 0) {
            return Err(BookletError::Data(format!(
                "Event days are numbered from 1, found {}",
                day.number()
            )));
        }

        let mut seen = HashSet::new();
        for session in &sessions {
            if !seen.insert(session.id.as_str()) {
                return Err(BookletError::Data(format!(
                    "Duplicate session id '{}'",
                    session.id
                )));
            }
            if !event_days.contains(&session.day) {
                return Err(BookletError::Data(format!(
                    "Session '{}' is scheduled on {}, which is not an event day",
                    session.id, session.day
                )));
            }
            validate_times(session)?;
        }

        Ok(Self::indexed(event_days, sessions, sponsors))
    }

    /// Repository with no days, sessions or sponsors
    pub fn empty() -> Self {
        Self {
            event_days: Vec::new(),
            sessions: Vec::new(),
            sponsors: Vec::new(),
        }
    }

    /// Parse an agenda from JSON bytes
    #[cfg(feature = "serde")]
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let data: AgendaData = serde_json::from_slice(bytes)
            .map_err(|e| BookletError::Data(format!("Failed to parse agenda: {}", e)))?;
        Self::new(data)
    }

    /// Load an agenda from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        Self::from_json(&bytes)
    }

    /// The built-in Summit agenda, ordered the same way as
    /// [`StaticRepository::new`]
    pub fn summit() -> Self {
        let AgendaData {
            event_days,
            sessions,
            sponsors,
        } = AgendaData::summit();
        Self::indexed(event_days, sessions, sponsors)
    }

    fn indexed(
        mut event_days: Vec<Day>,
        sessions: Vec<Session>,
        mut sponsors: Vec<Sponsor>,
    ) -> Self {
        event_days.sort();
        event_days.dedup();
        sponsors.sort_by_key(|s| s.tier.rank());

        Self {
            event_days,
            sessions,
            sponsors,
        }
    }

    pub fn event_days(&self) -> &[Day] {
        &self.event_days
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

impl SessionRepository for StaticRepository {
    fn sessions_for_day(&self, day: Day) -> Vec<&Session> {
        self.sessions.iter().filter(|s| s.day == day).collect()
    }

    fn all_days(&self) -> Vec<Day> {
        let first = self.event_days.first().copied();
        self.event_days
            .iter()
            .copied()
            .filter(|&day| Some(day) == first || self.sessions.iter().any(|s| s.day == day))
            .collect()
    }

    fn is_event_day(&self, day: Day) -> bool {
        self.event_days.binary_search(&day).is_ok()
    }

    fn sponsors(&self) -> &[Sponsor] {
        &self.sponsors
    }
}

/// Parse `HH:MM` into minutes since midnight
pub fn parse_clock(value: &str) -> Option<u32> {
    let (hours, minutes) = value.split_once(':')?;
    if hours.len() != 2 || minutes.len() != 2 {
        return None;
    }
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

fn validate_times(session: &Session) -> Result<()> {
    let start = parse_clock(&session.start_time).ok_or_else(|| {
        BookletError::Data(format!(
            "Session '{}' has invalid start time '{}'",
            session.id, session.start_time
        ))
    })?;
    let end = parse_clock(&session.end_time).ok_or_else(|| {
        BookletError::Data(format!(
            "Session '{}' has invalid end time '{}'",
            session.id, session.end_time
        ))
    })?;
    if end < start {
        return Err(BookletError::Data(format!(
            "Session '{}' ends before it starts",
            session.id
        )));
    }
    Ok(())
}

// =============================================================================
// Built-in Summit Agenda
// =============================================================================

const VENUE_HALL: &str = "Main Plenary Hall";

fn summit_sessions() -> Vec<Session> {
    let session = |id: &str, title: &str, start: &str, end: &str, day: u8| {
        Session::new(id, title, start, end, Day(day)).with_location(VENUE_HALL)
    };

    vec![
        // Day 1: arrival only, rendered as the Welcome page
        session("d1-setup", "Exhibition Set Up", "14:00", "18:00", 1),
        session("d1-registration", "Delegate Registration", "16:00", "19:00", 1),
        // Day 2
        session("d2-opening", "Opening Ceremony", "09:00", "10:00", 2).with_speakers(vec![
            Speaker::new("Amara Okafor", "Director General", "Civil Aviation Authority"),
            Speaker::new("Daniel Reyes", "Minister of Transport", "Ministry of Transport"),
            Speaker::new("Leila Haddad", "Chief Executive Officer", "Skyline Airways"),
            Speaker::new("Tomasz Nowak", "Secretary General", "Regional Airlines Association"),
        ]),
        session("d2-keynote", "Keynote Address – The Next Decade of Air Travel", "10:00", "10:30", 2)
            .with_speakers(vec![Speaker::new(
                "Grace Mwangi",
                "Chief Strategy Officer",
                "Harbour Airport Group",
            )]),
        session("d2-break", "Tea & Networking Break", "10:30", "11:00", 2),
        session(
            "d2-infrastructure",
            "Panel Discussion – Investing in Aviation Infrastructure",
            "11:00",
            "12:30",
            2,
        )
        .with_speakers(vec![
            Speaker::new("Omar Farouk", "Managing Partner", "AeroLease Capital"),
            Speaker::new("Helen Brooks", "Head of Infrastructure", "Development Finance Bank"),
            Speaker::new("Kenji Sato", "VP Airport Development", "Harbour Airport Group"),
        ]),
        session("d2-lunch", "Lunch", "12:30", "13:30", 2),
        session("d2-hubs", "Panel Discussion – Building Aviation Hubs", "13:30", "15:00", 2)
            .with_speakers(vec![
                Speaker::new("Fatima Diallo", "Chief Commercial Officer", "Skyline Airways"),
                Speaker::new("Marco Bianchi", "Network Planning Director", "Continental Air"),
                Speaker::new("Priya Nair", "Route Development Lead", "Harbour Airport Group"),
            ]),
        // Day 3
        session("d3-breakfast", "Networking Breakfast", "08:00", "09:00", 3),
        session(
            "d3-safety",
            "Panel Discussion – Safety and Regulatory Harmonisation",
            "09:00",
            "10:30",
            3,
        )
        .with_speakers(vec![
            Speaker::new("Samuel Osei", "Director of Safety", "Civil Aviation Authority"),
            Speaker::new("Ingrid Larsen", "Regulatory Affairs Manager", "Continental Air"),
            Speaker::new("Ahmed Karim", "Head of Operations", "Meridian Ground Services"),
        ]),
        session("d3-talent", "Panel Discussion – Developing Aviation Talent", "10:30", "12:00", 3)
            .with_speakers(vec![
                Speaker::new("Nadia Rahman", "Dean of Aviation", "Polytechnic Institute"),
                Speaker::new("Lucas Ferreira", "Chief Pilot", "Skyline Airways"),
            ]),
        session("d3-closing", "Closing Keynote", "12:00", "12:45", 3).with_speakers(vec![
            Speaker::new("Amara Okafor", "Director General", "Civil Aviation Authority"),
        ]),
        session("d3-dinner", "Gala Dinner", "19:00", "22:00", 3),
    ]
}
