mod debounce;
mod ip_lookup;
mod position;
mod tracker;

pub use debounce::Debouncer;
pub use ip_lookup::{IpLookup, IpinfoClient};
pub use position::{HostSensor, PositionSensor};
pub use tracker::{LocationTracker, View};
