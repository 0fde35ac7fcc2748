use crate::model::IpInfo;
use crate::service::View;
use std::fmt::Write as _;

const PLACEHOLDER: &str = "N/A";

fn field(value: &str) -> &str {
    if value.is_empty() {
        PLACEHOLDER
    } else {
        value
    }
}

/// The info panel: IP ADDRESS, LOCATION, TIMEZONE and ISP, with a
/// placeholder for every field the lookup left empty.
pub fn info_panel(info: &IpInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  {:<12}{}", "IP ADDRESS", field(&info.ip));
    let _ = writeln!(out, "  {:<12}{}", "LOCATION", field(&info.loc));
    let _ = writeln!(out, "  {:<12}{}", "TIMEZONE", field(&info.timezone));
    let _ = writeln!(out, "  {:<12}{}", "ISP", field(&info.org));
    out
}

/// One line for the current render branch.
pub fn status_line(view: View) -> String {
    match view {
        View::Loading => "Loading...".to_string(),
        View::Map(coord) => format!(
            "You are here: latitude {}, longitude {}",
            coord.latitude, coord.longitude
        ),
        View::Fetching => "Fetching your location...".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinate;

    #[test]
    fn test_empty_fields_render_as_placeholder() {
        let panel = info_panel(&IpInfo::default());
        assert_eq!(panel.matches("N/A").count(), 4);
    }

    #[test]
    fn test_populated_fields_render_verbatim() {
        let info = IpInfo {
            ip: "8.8.8.8".to_string(),
            loc: "37.4,-122.1".to_string(),
            timezone: "America/Los_Angeles".to_string(),
            org: "AS15169 Google LLC".to_string(),
            ..IpInfo::default()
        };
        let panel = info_panel(&info);
        assert!(panel.contains("8.8.8.8"));
        assert!(panel.contains("37.4,-122.1"));
        assert!(panel.contains("America/Los_Angeles"));
        assert!(panel.contains("AS15169 Google LLC"));
        assert!(!panel.contains("N/A"));
    }

    #[test]
    fn test_status_lines_per_branch() {
        assert_eq!(status_line(View::Loading), "Loading...");
        assert_eq!(status_line(View::Fetching), "Fetching your location...");
        assert_eq!(
            status_line(View::Map(Coordinate::new(1.0, 2.0))),
            "You are here: latitude 1, longitude 2"
        );
    }
}
