//! Viewport observation
//!
//! [`ResponsiveObserver`] tracks which side of the breakpoint the viewport is
//! on. [`ResizeDebouncer`] coalesces a burst of resize events so the layout
//! is recomputed once per burst rather than once per pixel.

use std::time::{Duration, Instant};

use crate::layout::DeviceClass;

/// Tracks the viewport's device class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponsiveObserver {
    breakpoint_px: f32,
    width_px: f32,
    is_mobile: bool,
}

impl ResponsiveObserver {
    /// Measure once immediately, so the first layout is already correct
    pub fn new(breakpoint_px: f32, initial_width_px: f32) -> Self {
        Self {
            breakpoint_px,
            width_px: initial_width_px,
            is_mobile: initial_width_px < breakpoint_px,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    pub fn device_class(&self) -> DeviceClass {
        DeviceClass::from_is_mobile(self.is_mobile)
    }

    pub fn width_px(&self) -> f32 {
        self.width_px
    }

    pub fn breakpoint_px(&self) -> f32 {
        self.breakpoint_px
    }

    /// Record a new width. Returns `true` when the breakpoint was crossed.
    pub fn observe(&mut self, width_px: f32) -> bool {
        self.width_px = width_px;
        let is_mobile = width_px < self.breakpoint_px;
        let crossed = is_mobile != self.is_mobile;
        self.is_mobile = is_mobile;
        crossed
    }
}

/// Holds back resize events until the viewport has been quiet for `delay`.
///
/// Only the most recent width in a burst is released.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    delay: Duration,
    pending: Option<(f32, Instant)>,
}

impl ResizeDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Queue a width observed at `now`, replacing any pending width
    pub fn push(&mut self, width_px: f32, now: Instant) {
        self.pending = Some((width_px, now));
    }

    /// When the pending width becomes due, if there is one
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, at)| at + self.delay)
    }

    /// Release the pending width once it has been quiet for `delay`
    pub fn poll(&mut self, now: Instant) -> Option<f32> {
        match self.pending {
            Some((width, at)) if now.saturating_duration_since(at) >= self.delay => {
                self.pending = None;
                Some(width)
            }
            _ => None,
        }
    }

    /// Release the pending width regardless of timing
    pub fn flush(&mut self) -> Option<f32> {
        self.pending.take().map(|(width, _)| width)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
