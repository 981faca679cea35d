//! Entity module - names, kinds and roles of extracted figures

use serde::{Deserialize, Serialize};
use std::fmt;

/// A string believed to name a person, organization, place or concept
///
/// Names are compared exactly; extractors collapse duplicates before
/// constructing them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityName(String);

impl EntityName {
    /// Create a new entity name
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Kind of entity a character-network node stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    /// An individual
    Person,

    /// A group, state or institution
    Organization,

    /// An idea or movement
    Concept,

    /// A place
    Location,
}

impl EntityType {
    /// Spoke assignment order; spokes cycle through it by index
    pub const CYCLE: [EntityType; 4] = [
        EntityType::Person,
        EntityType::Organization,
        EntityType::Concept,
        EntityType::Location,
    ];

    /// Entity type for the spoke at `index`
    pub fn for_index(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }

    /// Get the entity type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Person => "person",
            EntityType::Organization => "organization",
            EntityType::Concept => "concept",
            EntityType::Location => "location",
        }
    }

    /// Parse an entity type from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "person" => Some(EntityType::Person),
            "organization" | "organisation" => Some(EntityType::Organization),
            "concept" => Some(EntityType::Concept),
            "location" | "place" => Some(EntityType::Location),
            _ => None,
        }
    }
}

impl std::str::FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid entity type: {}", s))
    }
}

/// Role of a figure relative to the hub of a character network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The hub figure
    Leader,

    /// Aligned with the hub
    Ally,

    /// Opposed to the hub
    Opponent,
}

impl Role {
    /// Role for the spoke at `index`: allies on even indices, opponents on odd
    pub fn for_spoke(index: usize) -> Self {
        if index % 2 == 0 {
            Role::Ally
        } else {
            Role::Opponent
        }
    }

    /// Get the role name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Leader => "leader",
            Role::Ally => "ally",
            Role::Opponent => "opponent",
        }
    }

    /// Whether the role is drawn in the hub's colors
    pub fn is_friendly(&self) -> bool {
        !matches!(self, Role::Opponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_type_cycle() {
        assert_eq!(EntityType::for_index(0), EntityType::Person);
        assert_eq!(EntityType::for_index(1), EntityType::Organization);
        assert_eq!(EntityType::for_index(2), EntityType::Concept);
        assert_eq!(EntityType::for_index(3), EntityType::Location);
        assert_eq!(EntityType::for_index(4), EntityType::Person);
    }

    #[test]
    fn test_entity_type_parsing() {
        assert_eq!(EntityType::parse("Organization"), Some(EntityType::Organization));
        assert_eq!(EntityType::parse(" PLACE "), Some(EntityType::Location));
        assert!("galaxy".parse::<EntityType>().is_err());
    }

    #[test]
    fn test_role_alternates() {
        assert_eq!(Role::for_spoke(0), Role::Ally);
        assert_eq!(Role::for_spoke(1), Role::Opponent);
        assert_eq!(Role::for_spoke(2), Role::Ally);
        assert!(Role::Leader.is_friendly());
        assert!(!Role::Opponent.is_friendly());
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(serde_json::to_string(&Role::Opponent).unwrap(), "\"opponent\"");
        assert_eq!(serde_json::to_string(&EntityType::Concept).unwrap(), "\"concept\"");
        assert_eq!(serde_json::to_string(&EntityName::new("John Adams")).unwrap(), "\"John Adams\"");
    }
}
