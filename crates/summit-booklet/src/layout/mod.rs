//! Layout calculation modules for the booklet
//!
//! This module handles the pagination side of the booklet:
//! - Logical page derivation (which pages exist)
//! - Spread packing (how many pages are shown at once, and which)

mod spread;
mod types;

pub use spread::*;
pub use types::*;
