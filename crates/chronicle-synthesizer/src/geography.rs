//! Geography synthesis

use chronicle_domain::{Clock, GeoEvent, GeographyData, RandomSource};
use chronicle_extractor::{
    extract_dates, resolve_locations, split_sentences, ExtractorConfig, FALLBACK_SENTENCE,
};
use tracing::info;

/// Build one map event per resolved location
///
/// Location `i` takes its year from the `i`-th extracted date, cycling when
/// there are more locations than dates.
pub fn synthesize_geography<C, R>(
    text: &str,
    config: &ExtractorConfig,
    clock: &C,
    rng: &mut R,
) -> GeographyData
where
    C: Clock,
    R: RandomSource,
{
    let places = resolve_locations(text);
    let sentences = split_sentences(text);
    let dates = extract_dates(text, config, clock);

    let events: Vec<GeoEvent> = places
        .iter()
        .enumerate()
        .map(|(i, place)| {
            let year = i
                .checked_rem(dates.len())
                .and_then(|k| dates.get(k))
                .map(|d| d.year())
                .unwrap_or(1900 + 20 * i as i32);
            let description = rng
                .choose(&sentences)
                .cloned()
                .unwrap_or_else(|| FALLBACK_SENTENCE.to_string());

            GeoEvent {
                name: format!("Event in {}", place.name),
                date: year.to_string(),
                description,
                longitude: place.longitude,
                latitude: place.latitude,
            }
        })
        .collect();

    info!("Synthesized geography with {} events", events.len());
    GeographyData {
        features: Vec::new(),
        events,
    }
}
