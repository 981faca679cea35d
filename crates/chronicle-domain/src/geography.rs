//! Geography module - events pinned to map coordinates

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An event placed on the map
///
/// Coordinates always come from the gazetteer (or its fallback entry), never
/// from the text itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoEvent {
    /// `Event in {location}`
    pub name: String,

    /// Year as a string
    pub date: String,

    /// A sentence taken from the source text
    pub description: String,

    /// Degrees east
    pub longitude: f64,

    /// Degrees north
    pub latitude: f64,
}

/// Map payload
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeographyData {
    /// Region overlays as GeoJSON features; not produced yet, always empty
    pub features: Vec<Value>,

    /// Point events, one per resolved location
    pub events: Vec<GeoEvent>,
}

impl GeographyData {
    /// Names of the places that received an event
    pub fn place_names(&self) -> Vec<&str> {
        self.events
            .iter()
            .map(|e| e.name.strip_prefix("Event in ").unwrap_or(&e.name))
            .collect()
    }
}
