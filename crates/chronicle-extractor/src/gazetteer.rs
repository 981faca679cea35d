//! Fixed gazetteer standing in for a geocoding service

use serde::Serialize;
use tracing::debug;

/// A named place with known coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Place {
    /// Name as it must appear in the text
    pub name: &'static str,

    /// Degrees east
    pub longitude: f64,

    /// Degrees north
    pub latitude: f64,
}

impl Place {
    const fn new(name: &'static str, longitude: f64, latitude: f64) -> Self {
        Self {
            name,
            longitude,
            latitude,
        }
    }

    /// `[longitude, latitude]`
    pub fn coordinates(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

/// Returned when no gazetteer entry occurs in the text
pub const FALLBACK_PLACE: Place = Place::new("Sample Location", 0.0, 0.0);

/// Known places in match order: cities, then countries, then continents
pub const GAZETTEER: [Place; 32] = [
    Place::new("London", -0.1276, 51.5074),
    Place::new("Paris", 2.3522, 48.8566),
    Place::new("Berlin", 13.4050, 52.5200),
    Place::new("Rome", 12.4964, 41.9028),
    Place::new("Moscow", 37.6173, 55.7558),
    Place::new("New York", -74.0059, 40.7128),
    Place::new("Tokyo", 139.6917, 35.6895),
    Place::new("Beijing", 116.4074, 39.9042),
    Place::new("Delhi", 77.1025, 28.7041),
    Place::new("Cairo", 31.2357, 30.0444),
    Place::new("Sydney", 151.2093, -33.8688),
    Place::new("Rio de Janeiro", -43.1729, -22.9068),
    Place::new("Mexico City", -99.1332, 19.4326),
    Place::new("Lagos", 3.3792, 6.5244),
    Place::new("Washington", -77.0369, 38.9072),
    Place::new("USA", -95.7129, 37.0902),
    Place::new("UK", -3.4359, 55.3781),
    Place::new("France", 2.2137, 46.2276),
    Place::new("Germany", 10.4515, 51.1657),
    Place::new("Italy", 12.5674, 42.5033),
    Place::new("Russia", 105.3188, 61.5240),
    Place::new("China", 104.1954, 35.8617),
    Place::new("India", 78.9629, 20.5937),
    Place::new("Japan", 138.2529, 36.2048),
    Place::new("Brazil", -51.9253, -14.2350),
    Place::new("Africa", 19.4902, 8.7832),
    Place::new("Europe", 15.2551, 54.5260),
    Place::new("Asia", 100.6197, 34.0479),
    Place::new("North America", -105.2551, 54.5260),
    Place::new("South America", -58.9302, -23.4425),
    Place::new("Australia", 133.7751, -25.2744),
    Place::new("Antarctica", 135.0000, -82.8628),
];

/// Gazetteer entries whose name occurs verbatim in `text`
///
/// Matching is a case-sensitive substring test, so `Indian` also matches
/// `India`. Results follow gazetteer order, not text order. When nothing
/// matches, the single [`FALLBACK_PLACE`] is returned.
pub fn resolve_locations(text: &str) -> Vec<Place> {
    let places: Vec<Place> = GAZETTEER
        .iter()
        .filter(|place| text.contains(place.name))
        .copied()
        .collect();

    if places.is_empty() {
        debug!("No known places found, using fallback location");
        return vec![FALLBACK_PLACE];
    }

    debug!("Resolved {} places", places.len());
    places
}

/// Look up a single gazetteer entry by exact name
pub fn lookup(name: &str) -> Option<Place> {
    GAZETTEER.iter().find(|place| place.name == name).copied()
}
