use crate::constants::{MOBILE_BREAKPOINT_PX, RESIZE_DEBOUNCE_MS, WELCOME_DAY};
use crate::types::*;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Static event copy shown on the Welcome page.
///
/// This is editorial content, kept apart from the layout options so it can be
/// edited without touching pagination.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct EventInfo {
    pub title: String,
    pub dates: String,
    pub venue: String,
    pub objectives: Vec<String>,
    pub target_audience: Vec<String>,
}

impl Default for EventInfo {
    fn default() -> Self {
        Self {
            title: "Aviation Leadership Summit".to_string(),
            dates: "18 - 20 November".to_string(),
            venue: "Grand Harbour Convention Centre".to_string(),
            objectives: vec![
                "Connect airlines, airports and regulators around shared growth plans".to_string(),
                "Showcase investment opportunities in aviation infrastructure".to_string(),
                "Advance regional connectivity and aviation hub development".to_string(),
            ],
            target_audience: vec![
                "Airline and airport executives".to_string(),
                "Civil aviation authorities and policy makers".to_string(),
                "Investors, lessors and financiers".to_string(),
                "Manufacturers and service providers".to_string(),
            ],
        }
    }
}

/// Booklet layout configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookletOptions {
    /// Widths strictly below this lay out one page per spread
    pub breakpoint_px: f32,

    /// Quiet period before a burst of resizes is applied
    pub resize_debounce_ms: u64,

    /// Day rendered as the Welcome page
    pub welcome_day: Day,

    // Welcome page copy
    pub event: EventInfo,
}

impl Default for BookletOptions {
    fn default() -> Self {
        Self {
            breakpoint_px: MOBILE_BREAKPOINT_PX,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            welcome_day: WELCOME_DAY,
            event: EventInfo::default(),
        }
    }
}

impl BookletOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| BookletError::Config(format!("Failed to parse options: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BookletError::Config(format!("Failed to serialize options: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !self.breakpoint_px.is_finite() || self.breakpoint_px <= 0.0 {
            return Err(BookletError::Config(format!(
                "Breakpoint must be a positive width, got {}",
                self.breakpoint_px
            )));
        }

        if self.welcome_day.number() == 0 {
            return Err(BookletError::Config(
                "Event days are numbered from 1".to_string(),
            ));
        }

        Ok(())
    }
}
