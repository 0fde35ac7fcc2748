use serde::{Deserialize, Serialize};

/// A point on Earth
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parse a `"latitude,longitude"` pair as returned in the lookup
    /// service's `loc` field. Anything that is not two comma-separated
    /// numbers yields `None`.
    pub fn parse_loc(loc: &str) -> Option<Self> {
        let (lat, lon) = loc.split_once(',')?;
        let latitude = lat.trim().parse().ok()?;
        let longitude = lon.trim().parse().ok()?;
        Some(Self::new(latitude, longitude))
    }
}

/// Geolocation and network metadata for one IP address or domain,
/// as returned by the lookup service. Fields the service omits
/// deserialize to the empty string; extra response fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpInfo {
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
    /// `"latitude,longitude"` encoded as text
    #[serde(default)]
    pub loc: String,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub org: String,
}

impl IpInfo {
    /// The record's position, when the `loc` field holds one.
    pub fn coordinate(&self) -> Option<Coordinate> {
        if self.loc.is_empty() {
            return None;
        }
        Coordinate::parse_loc(&self.loc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_loc() {
        let coord = Coordinate::parse_loc("12.34,56.78").unwrap();
        assert_eq!(coord.latitude, 12.34);
        assert_eq!(coord.longitude, 56.78);
    }

    #[test]
    fn test_parse_loc_negative_and_spaces() {
        let coord = Coordinate::parse_loc("37.4, -122.1").unwrap();
        assert_eq!(coord.latitude, 37.4);
        assert_eq!(coord.longitude, -122.1);
    }

    #[test]
    fn test_parse_loc_rejects_malformed() {
        assert!(Coordinate::parse_loc("").is_none());
        assert!(Coordinate::parse_loc("12.34").is_none());
        assert!(Coordinate::parse_loc("north,south").is_none());
        assert!(Coordinate::parse_loc("12.34;56.78").is_none());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let info: IpInfo = serde_json::from_str(r#"{"ip": "8.8.8.8"}"#).unwrap();
        assert_eq!(info.ip, "8.8.8.8");
        assert_eq!(info.city, "");
        assert_eq!(info.loc, "");
        assert!(info.coordinate().is_none());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let info: IpInfo = serde_json::from_str(
            r#"{"ip": "8.8.8.8", "loc": "37.4,-122.1", "hostname": "dns.google", "anycast": true}"#,
        )
        .unwrap();
        let coord = info.coordinate().unwrap();
        assert_eq!(coord, Coordinate::new(37.4, -122.1));
    }
}
