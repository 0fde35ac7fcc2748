//! Map page emitter
//!
//! The actual tile and marker drawing is delegated to the Leaflet
//! widget running in the user's browser; this module only assembles a
//! self-contained HTML page with the map centered on a coordinate.

use crate::model::Coordinate;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

/// A pin on the map with its popup markup.
#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub lat: f64,
    pub lng: f64,
    pub popup: String,
}

/// Everything the map widget consumes: center, zoom, tile source and
/// marker definitions.
#[derive(Debug, Clone)]
pub struct MapView {
    pub center: Coordinate,
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    pub markers: Vec<Marker>,
}

impl MapView {
    /// A map centered on `coord` carrying the standard "You are here"
    /// marker.
    pub fn centered(coord: Coordinate, zoom: u8) -> Self {
        let popup = format!(
            "You are here:<br/>Latitude: {}<br/>Longitude: {}",
            coord.latitude, coord.longitude
        );
        Self {
            center: coord,
            zoom,
            tile_url: OSM_TILE_URL.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
            markers: vec![Marker {
                lat: coord.latitude,
                lng: coord.longitude,
                popup,
            }],
        }
    }

    /// Render the page markup.
    pub fn render_page(&self) -> Result<String> {
        let markers =
            serde_json::to_string(&self.markers).context("Failed to encode map markers")?;

        Ok(PAGE_TEMPLATE
            .replace(
                "__CENTER__",
                &format!("[{}, {}]", self.center.latitude, self.center.longitude),
            )
            .replace("__ZOOM__", &self.zoom.to_string())
            .replace("__TILE_URL__", &self.tile_url)
            .replace("__ATTRIBUTION__", &self.attribution)
            .replace("__MARKERS__", &markers))
    }

    /// Write the page to `path`, replacing any previous one.
    pub fn write_page(&self, path: &Path) -> Result<()> {
        let page = self.render_page()?;
        fs::write(path, page)
            .with_context(|| format!("Failed to write map page to {}", path.display()))?;
        Ok(())
    }
}

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">

<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>IP Address Tracker</title>

  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css" crossorigin="anonymous"
    referrerpolicy="no-referrer" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js" crossorigin="anonymous"
    referrerpolicy="no-referrer"></script>

  <style>
    html, body { height: 100%; margin: 0; }
    #map { height: 100%; width: 100%; }
  </style>
</head>

<body>
  <div id="map"></div>
  <script>
    const svgIcon = `
      <svg xmlns="http://www.w3.org/2000/svg" width="46" height="60">
        <path fill-rule="evenodd" d="M39.263 7.673c8.897 8.812 8.966 23.168.153 32.065l-.153.153L23 56 6.737 39.89C-2.16 31.079-2.23 16.723 6.584 7.826l.153-.152c9.007-8.922 23.52-8.922 32.526 0zM23 14.435c-5.211 0-9.436 4.185-9.436 9.347S17.79 33.128 23 33.128s9.436-4.184 9.436-9.346S28.21 14.435 23 14.435z"/>
      </svg>
    `;

    const pinIcon = L.icon({
      iconUrl: 'data:image/svg+xml;base64,' + btoa(svgIcon),
      iconSize: [35, 41],
      iconAnchor: [12, 41],
      popupAnchor: [1, -34],
      shadowUrl: 'https://unpkg.com/leaflet@1.9.4/dist/images/marker-shadow.png',
      shadowSize: [41, 41],
    });

    const map = L.map('map').setView(__CENTER__, __ZOOM__);

    L.tileLayer('__TILE_URL__', {
      attribution: '__ATTRIBUTION__',
    }).addTo(map);

    const markers = __MARKERS__;
    for (const m of markers) {
      L.marker([m.lat, m.lng], { icon: pinIcon }).bindPopup(m.popup).addTo(map);
    }

    map.whenReady(() => map.zoomControl.remove());
  </script>
</body>

</html>
"#;
