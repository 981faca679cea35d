//! Character module - hub-and-spoke relationship networks

use crate::graph::{EdgeStyle, NodeStyle, Position};
use crate::{EntityType, Role};
use serde::{Deserialize, Serialize};

/// Identifier of the hub node in every character network
pub const HUB_ID: &str = "char1";

/// Rendering kind shared by all character nodes
pub const ENTITY_NODE_TYPE: &str = "entity";

/// Payload of a character node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterData {
    /// Figure name
    pub label: String,

    /// Role relative to the hub
    pub role: Role,

    /// Kind of entity
    #[serde(rename = "entityType")]
    pub entity_type: EntityType,
}

/// A figure on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterNode {
    /// Unique node identifier (`char1`, `char2`, ...)
    pub id: String,

    /// Rendering kind, always `entity`
    #[serde(rename = "type")]
    pub node_type: String,

    /// Label, role and entity type
    pub data: CharacterData,

    /// Canvas position
    pub position: Position,

    /// Visual style
    pub style: NodeStyle,
}

impl CharacterNode {
    /// Figure name
    pub fn label(&self) -> &str {
        &self.data.label
    }

    /// Role relative to the hub
    pub fn role(&self) -> Role {
        self.data.role
    }
}

/// A relationship between the hub and a spoke
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterEdge {
    /// Unique edge identifier
    pub id: String,

    /// Source node id
    pub source: String,

    /// Target node id
    pub target: String,

    /// Whether the edge is drawn animated
    pub animated: bool,

    /// Relationship caption
    pub label: String,

    /// Stroke color reflecting the target's role
    pub style: EdgeStyle,
}

/// A node together with one of the edges touching it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeRelationship<'a> {
    /// The incident edge
    pub edge: &'a CharacterEdge,

    /// The node on the other end of the edge
    pub other: &'a CharacterNode,
}

/// Hub-and-spoke network of figures
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CharacterNetwork {
    /// All nodes, hub first
    pub nodes: Vec<CharacterNode>,

    /// Relationship edges
    pub edges: Vec<CharacterEdge>,
}

impl CharacterNetwork {
    /// The hub node (`char1`)
    pub fn hub(&self) -> Option<&CharacterNode> {
        self.node(HUB_ID)
    }

    /// Look up a node by id
    pub fn node(&self, id: &str) -> Option<&CharacterNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// All relationships of the node with `id`, in edge order
    ///
    /// Edges pointing at unknown nodes are skipped.
    pub fn relationships_of(&self, id: &str) -> Vec<NodeRelationship<'_>> {
        self.edges
            .iter()
            .filter_map(|edge| {
                let other_id = if edge.source == id {
                    &edge.target
                } else if edge.target == id {
                    &edge.source
                } else {
                    return None;
                };
                self.node(other_id).map(|other| NodeRelationship { edge, other })
            })
            .collect()
    }

    /// Edges whose source or target is not a node of this network
    pub fn dangling_edges(&self) -> Vec<&CharacterEdge> {
        self.edges
            .iter()
            .filter(|e| self.node(&e.source).is_none() || self.node(&e.target).is_none())
            .collect()
    }

    /// Check the tree shape: every edge leaves the hub and every non-hub
    /// node has exactly one edge
    pub fn is_hub_and_spoke(&self) -> bool {
        if self.hub().is_none() || self.edges.len() + 1 != self.nodes.len() {
            return false;
        }
        if self.edges.iter().any(|e| e.source != HUB_ID) {
            return false;
        }

        self.nodes
            .iter()
            .filter(|n| n.id != HUB_ID)
            .all(|n| self.edges.iter().filter(|e| e.target == n.id).count() == 1)
    }
}
