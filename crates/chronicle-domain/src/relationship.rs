//! Relationship module - labels for hub-to-spoke edges

use serde::{Deserialize, Serialize};

/// Relationship between the hub figure and a spoke
///
/// Heuristic networks cycle through the vocabulary by spoke index; there is
/// no attempt to infer the real relationship from the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipKind {
    /// Fights on the same side
    Ally,

    /// Guides the other
    Mentor,

    /// Open hostility
    Enemy,

    /// Competes with the other
    Rival,

    /// Personal affinity
    Friend,

    /// Works alongside the other
    Collaborator,
}

impl RelationshipKind {
    /// Edge labelling order
    pub const CYCLE: [RelationshipKind; 6] = [
        RelationshipKind::Ally,
        RelationshipKind::Mentor,
        RelationshipKind::Enemy,
        RelationshipKind::Rival,
        RelationshipKind::Friend,
        RelationshipKind::Collaborator,
    ];

    /// Relationship for the spoke at `index`
    pub fn for_index(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }

    /// Edge label
    pub fn label(&self) -> &'static str {
        match self {
            RelationshipKind::Ally => "Ally",
            RelationshipKind::Mentor => "Mentor",
            RelationshipKind::Enemy => "Enemy",
            RelationshipKind::Rival => "Rival",
            RelationshipKind::Friend => "Friend",
            RelationshipKind::Collaborator => "Collaborator",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_cycle_wraps() {
        let labels: Vec<_> = (0..8).map(|i| RelationshipKind::for_index(i).label()).collect();
        assert_eq!(
            labels,
            ["Ally", "Mentor", "Enemy", "Rival", "Friend", "Collaborator", "Ally", "Mentor"]
        );
    }
}
