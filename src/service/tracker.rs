//! The location tracker component
//!
//! Owns the display state and decides, on every render, which of the
//! three mutually exclusive views to show. A coordinate arrives by one
//! of two paths: the host position sensor (read once, at mount) or a
//! debounced IP lookup triggered by user submissions. Both paths
//! overwrite the single location slot wholesale.

use crate::model::{Coordinate, IpInfo};
use crate::service::debounce::Debouncer;
use crate::service::ip_lookup::IpLookup;
use crate::service::position::PositionSensor;
use anyhow::Result;
use tracing::{debug, error, info};

/// Render branch, derived fresh from the state on every render.
///
/// Precedence: an in-flight lookup shows the spinner even when a map
/// was already resolved; otherwise a resolved coordinate shows the map;
/// otherwise the fetching placeholder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    /// A lookup is in flight
    Loading,
    /// A coordinate has been resolved
    Map(Coordinate),
    /// Nothing resolved yet
    Fetching,
}

/// The tracker component. The host event loop is the only mutator, so
/// the four state fields need no locking.
pub struct LocationTracker {
    location: Option<Coordinate>,
    input: String,
    loading: bool,
    ip_info: IpInfo,
}

impl LocationTracker {
    pub fn new() -> Self {
        Self {
            location: None,
            input: String::new(),
            loading: false,
            ip_info: IpInfo::default(),
        }
    }

    /// Read the host position sensor, once per component lifetime.
    /// Failure is logged and leaves the fetching placeholder in place;
    /// no retry is scheduled.
    pub async fn mount<S: PositionSensor>(&mut self, sensor: &S) {
        match sensor.current_position().await {
            Ok(coord) => {
                info!(
                    "Host position: {}, {}",
                    coord.latitude, coord.longitude
                );
                self.location = Some(coord);
            }
            Err(e) => {
                error!("Error getting host position: {}", e);
            }
        }
    }

    /// Store the query input verbatim, no trimming or validation.
    pub fn set_input(&mut self, input: &str) {
        self.input = input.to_string();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Hand the current input to the debounced resolver.
    pub fn submit(&self, debouncer: &Debouncer<String>) {
        debouncer.call(self.input.clone());
    }

    /// First half of a resolution: raises the loading flag, except for
    /// an empty target, which changes nothing.
    pub fn begin_lookup(&mut self, target: &str) {
        if target.is_empty() {
            debug!("Skipping empty lookup target");
            return;
        }
        self.loading = true;
    }

    /// Second half: apply the settled request. A successful response
    /// replaces the info record wholesale and, when its `loc` parses,
    /// the coordinate too. A failure is logged and prior state kept.
    /// The loading flag clears either way.
    pub fn apply_lookup(&mut self, target: &str, outcome: Result<IpInfo>) {
        match outcome {
            Ok(info) => {
                if let Some(coord) = info.coordinate() {
                    self.location = Some(coord);
                }
                self.ip_info = info;
            }
            Err(e) => {
                error!("Lookup for {} failed: {}", target, e);
            }
        }
        self.loading = false;
    }

    /// Run one full resolution against the lookup service.
    pub async fn resolve<L: IpLookup>(&mut self, lookup: &L, target: &str) {
        self.begin_lookup(target);
        if !self.loading {
            return;
        }
        let outcome = lookup.lookup(target).await;
        self.apply_lookup(target, outcome);
    }

    pub fn view(&self) -> View {
        if self.loading {
            View::Loading
        } else if let Some(coord) = self.location {
            View::Map(coord)
        } else {
            View::Fetching
        }
    }

    pub fn location(&self) -> Option<Coordinate> {
        self.location
    }

    pub fn ip_info(&self) -> &IpInfo {
        &self.ip_info
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

impl Default for LocationTracker {
    fn default() -> Self {
        Self::new()
    }
}
