use std::path::PathBuf;

// Re-export types from the library crate
pub use summit_booklet::render::RenderedSpread;
pub use summit_booklet::{Booklet, BookletOptions, BookletStatistics, LayoutState, LogicalPage};

mod worker;

pub use worker::{BookletHandle, spawn_booklet, spawn_booklet_on, worker_task};

/// Commands sent from the UI to the booklet worker
#[derive(Debug)]
pub enum BookletCommand {
    /// Viewport width changed; applied once resizes go quiet
    Resize {
        width_px: f32,
    },
    Next,
    Previous,
    /// Jump to the spread holding a page
    ShowPage {
        page: LogicalPage,
    },
    /// Re-send the current spread
    Render,
    /// Replace the agenda with one loaded from a JSON file
    LoadData {
        path: PathBuf,
    },
    CalculateStats,
    /// Stop the worker
    Shutdown,
}

/// Updates sent from the worker to the UI
#[derive(Debug, Clone)]
pub enum BookletUpdate {
    /// The viewport crossed the breakpoint
    LayoutChanged {
        layout: LayoutState,
    },
    SpreadRendered {
        layout: LayoutState,
        spread: RenderedSpread,
    },
    DataLoaded {
        path: PathBuf,
        sessions: usize,
        sponsors: usize,
    },
    StatsCalculated {
        stats: BookletStatistics,
    },
    Error {
        message: String,
    },
}
