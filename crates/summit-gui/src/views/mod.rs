pub mod log_panel;
pub mod spread;
pub mod statistics;

pub use log_panel::show_log;
pub use spread::{show_navigation, show_spread};
pub use statistics::show_statistics;
