mod dashboard;
mod map;

pub use dashboard::{info_panel, status_line};
pub use map::MapView;
