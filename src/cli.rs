use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs;

pub const DEFAULT_TOKEN: &str = "0ce15ff2786069";
pub const DEFAULT_API_URL: &str = "https://ipinfo.io";
pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;
pub const DEFAULT_ZOOM: u8 = 13;
pub const DEFAULT_MAP_FILE: &str = "map.html";

#[derive(Parser, Debug, Clone)]
#[command(name = "ip-tracker")]
#[command(version = "0.1.0")]
#[command(about = "Track an IP address or domain on an interactive map", long_about = None)]
pub struct Args {
    /// IP address or domain to resolve once; omit for interactive mode
    pub target: Option<String>,

    /// Access token for the IP lookup service
    #[arg(short = 't', long, env = "IP_TRACKER_TOKEN", default_value = DEFAULT_TOKEN)]
    pub token: String,

    /// Base URL of the IP lookup service
    #[arg(long, env = "IP_TRACKER_API", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Quiet window for submissions, in milliseconds
    #[arg(long, env = "IP_TRACKER_DEBOUNCE_MS", default_value_t = DEFAULT_DEBOUNCE_MS)]
    pub debounce_ms: u64,

    /// Map zoom level
    #[arg(short = 'z', long, env = "IP_TRACKER_ZOOM", default_value_t = DEFAULT_ZOOM)]
    pub zoom: u8,

    /// Path the map page is written to
    #[arg(short = 'm', long, env = "IP_TRACKER_MAP_FILE", default_value = DEFAULT_MAP_FILE)]
    pub map_file: String,

    /// Host position as "lat,lon" (stands in for a position sensor)
    #[arg(short = 'p', long, env = "IP_TRACKER_POSITION")]
    pub position: Option<String>,

    /// TOML config file; explicit flags take precedence
    #[arg(short = 'c', long, env = "IP_TRACKER_CONFIG")]
    pub config: Option<String>,

    /// Verbose output
    #[arg(short = 'v', long, env = "IP_TRACKER_VERBOSE")]
    pub verbose: bool,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    token: Option<String>,
    api_url: Option<String>,
    debounce_ms: Option<u64>,
    zoom: Option<u8>,
    map_file: Option<String>,
    position: Option<String>,
}

impl Args {
    /// Fill in values from the optional config file. A field keeps its
    /// command-line value unless it is still at the built-in default.
    pub fn merge_with_config(mut self) -> Result<Self> {
        let Some(path) = self.config.clone() else {
            return Ok(self);
        };

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path))?;
        let file: FileConfig =
            toml::from_str(&text).with_context(|| format!("Invalid config file {}", path))?;

        if self.token == DEFAULT_TOKEN {
            if let Some(token) = file.token {
                self.token = token;
            }
        }
        if self.api_url == DEFAULT_API_URL {
            if let Some(api_url) = file.api_url {
                self.api_url = api_url;
            }
        }
        if self.debounce_ms == DEFAULT_DEBOUNCE_MS {
            if let Some(debounce_ms) = file.debounce_ms {
                self.debounce_ms = debounce_ms;
            }
        }
        if self.zoom == DEFAULT_ZOOM {
            if let Some(zoom) = file.zoom {
                self.zoom = zoom;
            }
        }
        if self.map_file == DEFAULT_MAP_FILE {
            if let Some(map_file) = file.map_file {
                self.map_file = map_file;
            }
        }
        if self.position.is_none() {
            self.position = file.position;
        }

        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.debounce_ms == 0 {
            bail!("Debounce window must be at least 1ms");
        }
        if self.zoom > 19 {
            bail!("Zoom level must be between 0 and 19");
        }
        if self.map_file.is_empty() {
            bail!("Map file path must not be empty");
        }
        Ok(())
    }
}
