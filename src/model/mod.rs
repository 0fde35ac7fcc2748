mod geo;

pub use geo::{Coordinate, IpInfo};
