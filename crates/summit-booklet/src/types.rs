use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookletError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid agenda data: {0}")]
    Data(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Logo unavailable: {0}")]
    Logo(String),
}

pub type Result<T> = std::result::Result<T, BookletError>;

/// An event day, numbered from 1 in chronological order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Day(pub u8);

impl Day {
    pub fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}", self.0)
    }
}

/// A person appearing on a session
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Speaker {
    pub name: String,
    /// Job title, not the session title
    pub title: String,
    pub company: String,
}

impl Speaker {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            company: company.into(),
        }
    }
}

/// One scheduled agenda item
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Session {
    /// Unique, stable key
    pub id: String,
    pub title: String,
    /// Wall-clock start, `HH:MM`
    pub start_time: String,
    /// Wall-clock end, `HH:MM`
    pub end_time: String,
    pub location: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub speakers: Vec<Speaker>,
    pub day: Day,
}

impl Session {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        day: Day,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            location: String::new(),
            speakers: Vec::new(),
            day,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_speakers(mut self, speakers: Vec<Speaker>) -> Self {
        self.speakers = speakers;
        self
    }

    /// `"09:00 - 10:30"`
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}

/// Sponsorship levels, declared highest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SponsorTier {
    Platinum,
    Gold,
    Silver,
    Bronze,
    Partner,
}

impl SponsorTier {
    /// Fixed display priority: highest tier first
    pub const PRIORITY: [SponsorTier; 5] = [
        SponsorTier::Platinum,
        SponsorTier::Gold,
        SponsorTier::Silver,
        SponsorTier::Bronze,
        SponsorTier::Partner,
    ];

    /// Position in [`SponsorTier::PRIORITY`]; lower ranks display first
    pub fn rank(self) -> usize {
        match self {
            SponsorTier::Platinum => 0,
            SponsorTier::Gold => 1,
            SponsorTier::Silver => 2,
            SponsorTier::Bronze => 3,
            SponsorTier::Partner => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SponsorTier::Platinum => "Platinum",
            SponsorTier::Gold => "Gold",
            SponsorTier::Silver => "Silver",
            SponsorTier::Bronze => "Bronze",
            SponsorTier::Partner => "Partner",
        }
    }
}

/// One sponsor or partner entry
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sponsor {
    pub name: String,
    pub tier: SponsorTier,
    /// Image reference, resolved by a [`crate::LogoLoader`] at render time
    pub logo: String,
}

impl Sponsor {
    pub fn new(name: impl Into<String>, tier: SponsorTier, logo: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tier,
            logo: logo.into(),
        }
    }
}

/// Summary of a booklet's content and pagination
#[derive(Debug, Clone, PartialEq)]
pub struct BookletStatistics {
    /// Logical pages (Welcome, agenda days, Sponsors)
    pub logical_pages: usize,
    /// Spreads when laid out one page at a time
    pub mobile_spreads: usize,
    /// Spreads when laid out two pages at a time
    pub desktop_spreads: usize,
    /// Session count for every day returned by the repository
    pub sessions_per_day: Vec<(Day, usize)>,
    /// Sessions classified as breaks, meals, networking or set-up
    pub special_sessions: usize,
    /// Sponsor count per tier, in tier priority order, empty tiers omitted
    pub sponsors_per_tier: Vec<(SponsorTier, usize)>,
}
