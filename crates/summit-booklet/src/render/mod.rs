//! Rendering modules for the booklet
//!
//! This module turns logical pages into display-ready content:
//! - Classifying agenda slots and labelling speaker groups
//! - Building Welcome, agenda and sponsor blocks
//! - Resolving sponsor logos, with a name fallback

mod logo;
mod page;

pub use logo::*;
pub use page::*;
