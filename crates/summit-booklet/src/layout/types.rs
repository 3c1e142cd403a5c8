//! Layout data types for the booklet
//!
//! These types sit between the agenda data and page rendering: which
//! logical pages exist, and how they are packed into spreads.

use crate::constants::{DESKTOP_PAGES_PER_SPREAD, MOBILE_PAGES_PER_SPREAD};
use crate::types::Day;

/// One unit of content before it is packed into spreads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalPage {
    /// Event information, drawn for the welcome day
    Welcome,
    /// One day's agenda
    DayAgenda(Day),
    /// Sponsor list, highest tier first
    Sponsors,
}

impl LogicalPage {
    pub fn title(self) -> String {
        match self {
            LogicalPage::Welcome => "Welcome".to_string(),
            LogicalPage::DayAgenda(day) => format!("{} Agenda", day),
            LogicalPage::Sponsors => "Sponsors".to_string(),
        }
    }
}

/// Viewport width class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceClass {
    /// Narrow viewport: one page per spread
    Mobile,
    /// Wide viewport: two facing pages per spread
    #[default]
    Desktop,
}

impl DeviceClass {
    pub fn from_is_mobile(is_mobile: bool) -> Self {
        if is_mobile {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == DeviceClass::Mobile
    }

    pub fn pages_per_spread(self) -> usize {
        match self {
            DeviceClass::Mobile => MOBILE_PAGES_PER_SPREAD,
            DeviceClass::Desktop => DESKTOP_PAGES_PER_SPREAD,
        }
    }
}

/// Snapshot of the derived pagination state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutState {
    pub is_mobile: bool,
    /// 1 on mobile, 2 on desktop
    pub pages_per_spread: usize,
    /// Never 0
    pub total_spreads: usize,
    /// Always in `0..total_spreads`
    pub current_spread: usize,
}
