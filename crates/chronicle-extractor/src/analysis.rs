//! Parse character analyses produced by an external text-analysis service
//!
//! The service itself is out of scope; callers hand over its raw response
//! text and get back typed records that can replace the heuristic character
//! network.

use crate::error::ExtractorError;
use chronicle_domain::EntityType;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// A character described by the analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedCharacter {
    /// Character name
    pub name: String,

    /// Free-form role, e.g. `Main Character` or `Antagonist`
    pub role: String,

    /// Importance from 1 to 10
    pub importance: u8,

    /// Short description
    pub description: String,

    /// Notable traits
    pub traits: Vec<String>,

    /// Kind of entity, when the analysis gave a recognizable one
    pub entity_type: Option<EntityType>,
}

/// A relationship between two analyzed characters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedRelationship {
    /// Source character name
    pub source: String,

    /// Target character name
    pub target: String,

    /// Relationship type, e.g. `ally` or `family`
    pub kind: String,

    /// Short description
    pub description: String,

    /// Strength from 1 to 10
    pub strength: u8,
}

/// Parsed analysis payload
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CharacterAnalysis {
    /// Characters in the order the analysis listed them
    pub characters: Vec<AnalyzedCharacter>,

    /// Relationships between characters
    pub relationships: Vec<AnalyzedRelationship>,
}

/// Parse an analysis response into typed records
///
/// The response may wrap the JSON object in prose or a fenced code block.
/// Records missing their required fields are skipped with a warning; a
/// response without a JSON object, or whose object has no `characters`
/// array, is an error.
pub fn parse_character_analysis(response: &str) -> Result<CharacterAnalysis, ExtractorError> {
    let json_str = extract_json_object(response)?;

    let json: Value = serde_json::from_str(json_str)?;

    let obj = json
        .as_object()
        .ok_or_else(|| ExtractorError::InvalidFormat("Expected JSON object".to_string()))?;

    let characters_json = obj
        .get("characters")
        .and_then(Value::as_array)
        .ok_or_else(|| ExtractorError::InvalidFormat("Missing 'characters' array".to_string()))?;

    let mut characters = Vec::new();
    for (idx, character_json) in characters_json.iter().enumerate() {
        match parse_character(character_json) {
            Ok(character) => characters.push(character),
            Err(e) => warn!("Skipping character {}: {}", idx, e),
        }
    }

    let mut relationships = Vec::new();
    if let Some(relationships_json) = obj.get("relationships").and_then(Value::as_array) {
        for (idx, relationship_json) in relationships_json.iter().enumerate() {
            match parse_relationship(relationship_json) {
                Ok(relationship) => relationships.push(relationship),
                Err(e) => warn!("Skipping relationship {}: {}", idx, e),
            }
        }
    }

    Ok(CharacterAnalysis {
        characters,
        relationships,
    })
}

/// Slice from the first `{` to the last `}` of the response
fn extract_json_object(response: &str) -> Result<&str, ExtractorError> {
    let start = response.find('{');
    let end = response.rfind('}');

    match (start, end) {
        (Some(start), Some(end)) if start < end => Ok(&response[start..=end]),
        _ => Err(ExtractorError::InvalidFormat(
            "No JSON object found in response".to_string(),
        )),
    }
}

fn parse_character(json: &Value) -> Result<AnalyzedCharacter, String> {
    let obj = json
        .as_object()
        .ok_or_else(|| "Character is not a JSON object".to_string())?;

    let name = required_str(obj, "name")?;

    let entity_type = obj
        .get("entityType")
        .and_then(Value::as_str)
        .and_then(EntityType::parse);

    let traits = obj
        .get("traits")
        .and_then(Value::as_array)
        .map(|traits| {
            traits
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(AnalyzedCharacter {
        name,
        role: optional_str(obj, "role"),
        importance: score(obj, "importance"),
        description: optional_str(obj, "description"),
        traits,
        entity_type,
    })
}

fn parse_relationship(json: &Value) -> Result<AnalyzedRelationship, String> {
    let obj = json
        .as_object()
        .ok_or_else(|| "Relationship is not a JSON object".to_string())?;

    Ok(AnalyzedRelationship {
        source: required_str(obj, "source")?,
        target: required_str(obj, "target")?,
        kind: optional_str(obj, "type"),
        description: optional_str(obj, "description"),
        strength: score(obj, "strength"),
    })
}

fn required_str(obj: &Map<String, Value>, key: &str) -> Result<String, String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| format!("Missing or invalid '{}'", key))
}

fn optional_str(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// A 1-10 score; absent or non-numeric scores count as 1
fn score(obj: &Map<String, Value>, key: &str) -> u8 {
    obj.get(key)
        .and_then(Value::as_f64)
        .map(|v| v.round().clamp(1.0, 10.0) as u8)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "characters": [
            {
                "name": "Napoleon Bonaparte",
                "role": "Main Character",
                "importance": 10,
                "description": "French emperor",
                "traits": ["ambitious", "strategic"],
                "entityType": "person"
            },
            {
                "name": "Duke of Wellington",
                "role": "Antagonist",
                "importance": 8,
                "description": "British commander",
                "traits": [],
                "entityType": "person"
            }
        ],
        "relationships": [
            {
                "source": "Napoleon Bonaparte",
                "target": "Duke of Wellington",
                "type": "enemy",
                "description": "Opposed at Waterloo",
                "strength": 9
            }
        ]
    }"#;

    #[test]
    fn test_parse_valid_payload() {
        let analysis = parse_character_analysis(RESPONSE).unwrap();
        assert_eq!(analysis.characters.len(), 2);
        assert_eq!(analysis.characters[0].name, "Napoleon Bonaparte");
        assert_eq!(analysis.characters[0].traits, vec!["ambitious", "strategic"]);
        assert_eq!(analysis.characters[1].entity_type, Some(EntityType::Person));
        assert_eq!(analysis.relationships.len(), 1);
        assert_eq!(analysis.relationships[0].kind, "enemy");
        assert_eq!(analysis.relationships[0].strength, 9);
    }

    #[test]
    fn test_parse_payload_wrapped_in_prose() {
        let response = format!("Here is the analysis:\n```json\n{}\n```\nLet me know!", RESPONSE);
        let analysis = parse_character_analysis(&response).unwrap();
        assert_eq!(analysis.characters.len(), 2);
    }

    #[test]
    fn test_no_json_object() {
        assert!(matches!(
            parse_character_analysis("I could not analyze this text."),
            Err(ExtractorError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            parse_character_analysis("{ \"characters\": [ }"),
            Err(ExtractorError::JsonParse(_))
        ));
    }

    #[test]
    fn test_missing_characters_array() {
        assert!(parse_character_analysis(r#"{"relationships": []}"#).is_err());
    }

    #[test]
    fn test_partial_success() {
        let response = r#"{
            "characters": [
                {"name": "Cleopatra", "importance": 14},
                {"role": "Nameless"},
                "not an object",
                {"name": "Mark Antony", "entityType": "starship"}
            ],
            "relationships": [
                {"source": "Cleopatra", "target": "Mark Antony", "type": "ally"},
                {"source": "Cleopatra"}
            ]
        }"#;

        let analysis = parse_character_analysis(response).unwrap();
        assert_eq!(analysis.characters.len(), 2);
        assert_eq!(analysis.characters[0].importance, 10, "importance is clamped");
        assert_eq!(analysis.characters[1].importance, 1, "missing importance defaults to 1");
        assert_eq!(analysis.characters[1].entity_type, None);
        assert_eq!(analysis.relationships.len(), 1);
    }
}
