//! Timeline module - dated entries of a chronological timeline

use crate::EntityName;
use serde::{Deserialize, Serialize};

/// One entry of a timeline
///
/// Created once per extracted date and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Long-form date, e.g. `January 1, 1776`
    pub date: String,

    /// Short heading, `Historical Event: {word}`
    pub title: String,

    /// A sentence taken from the source text
    pub description: String,

    /// Figures mentioned anywhere in the text (not specific to this date)
    pub key_figures: Vec<EntityName>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let event = TimelineEvent {
            date: "January 1, 1776".to_string(),
            title: "Historical Event: Declaration".to_string(),
            description: "Independence was declared.".to_string(),
            key_figures: vec![EntityName::new("John Adams")],
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["date"], "January 1, 1776");
        assert_eq!(json["key_figures"][0], "John Adams");
    }
}
