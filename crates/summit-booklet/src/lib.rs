pub mod booklet;
pub mod constants;
pub mod layout;
mod navigator;
mod observer;
mod options;
mod preview;
pub mod render;
mod repository;
mod stats;
mod types;

pub use booklet::Booklet;
pub use layout::{DeviceClass, LayoutState, LogicalPage};
pub use navigator::SpreadNavigator;
pub use observer::{ResizeDebouncer, ResponsiveObserver};
pub use options::*;
pub use preview::{generate_preview, spread_to_text};
pub use render::{FsLogoLoader, LogoImage, LogoLoader, TextOnlyLogos};
pub use repository::*;
pub use stats::calculate_statistics;
pub use types::*;
