//! Mind-map module - star graphs of concepts

use crate::graph::{NodeLabel, NodeStyle, Position};
use serde::{Deserialize, Serialize};

/// Rendering kind of a mind-map node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MindMapNodeType {
    /// The central topic
    #[serde(rename = "input")]
    Input,

    /// A peripheral concept
    #[serde(rename = "default")]
    Topic,
}

/// A concept on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindMapNode {
    /// Unique node identifier (`central` or `concept-{j}`)
    pub id: String,

    /// Rendering kind; `input` flags the central node
    #[serde(rename = "type")]
    pub node_type: MindMapNodeType,

    /// Label payload
    pub data: NodeLabel,

    /// Canvas position
    pub position: Position,

    /// Visual style
    pub style: NodeStyle,
}

impl MindMapNode {
    /// Whether this is the central topic
    pub fn is_central(&self) -> bool {
        self.node_type == MindMapNodeType::Input
    }

    /// Text shown on the node
    pub fn label(&self) -> &str {
        &self.data.label
    }
}

/// A link between the central topic and a concept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindMapEdge {
    /// Unique edge identifier
    pub id: String,

    /// Source node id (always the central node)
    pub source: String,

    /// Target node id
    pub target: String,

    /// Whether the edge is drawn animated
    pub animated: bool,

    /// Edge caption
    pub label: String,
}

/// A star graph: one central node, every other node linked only to it
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MindMap {
    /// All nodes, central node first
    pub nodes: Vec<MindMapNode>,

    /// One edge per peripheral node
    pub edges: Vec<MindMapEdge>,
}

impl MindMap {
    /// The central node
    pub fn central(&self) -> Option<&MindMapNode> {
        self.nodes.iter().find(|n| n.is_central())
    }

    /// Look up a node by id
    pub fn node(&self, id: &str) -> Option<&MindMapNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Edges whose source or target is not a node of this map
    pub fn dangling_edges(&self) -> Vec<&MindMapEdge> {
        self.edges
            .iter()
            .filter(|e| self.node(&e.source).is_none() || self.node(&e.target).is_none())
            .collect()
    }

    /// Check the star shape: one central node and exactly one edge from it
    /// to every other node
    pub fn is_star(&self) -> bool {
        let central_count = self.nodes.iter().filter(|n| n.is_central()).count();
        let Some(central) = self.central() else {
            return false;
        };
        if central_count != 1 || self.edges.len() + 1 != self.nodes.len() {
            return false;
        }

        self.nodes.iter().filter(|n| !n.is_central()).all(|n| {
            self.edges
                .iter()
                .filter(|e| e.target == n.id && e.source == central.id)
                .count()
                == 1
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, node_type: MindMapNodeType) -> MindMapNode {
        MindMapNode {
            id: id.to_string(),
            node_type,
            data: NodeLabel {
                label: id.to_string(),
            },
            position: Position::default(),
            style: NodeStyle::default(),
        }
    }

    fn edge(source: &str, target: &str) -> MindMapEdge {
        MindMapEdge {
            id: format!("e-{}-{}", source, target),
            source: source.to_string(),
            target: target.to_string(),
            animated: true,
            label: "Related to".to_string(),
        }
    }

    #[test]
    fn test_star_detection() {
        let map = MindMap {
            nodes: vec![
                node("central", MindMapNodeType::Input),
                node("concept-0", MindMapNodeType::Topic),
            ],
            edges: vec![edge("central", "concept-0")],
        };
        assert!(map.is_star());
        assert!(map.dangling_edges().is_empty());
        assert_eq!(map.central().unwrap().id, "central");
    }

    #[test]
    fn test_dangling_edge_detected() {
        let map = MindMap {
            nodes: vec![node("central", MindMapNodeType::Input)],
            edges: vec![edge("central", "concept-9")],
        };
        assert_eq!(map.dangling_edges().len(), 1);
        assert!(!map.is_star());
    }

    #[test]
    fn test_node_type_serialization() {
        let json = serde_json::to_value(node("central", MindMapNodeType::Input)).unwrap();
        assert_eq!(json["type"], "input");
        assert_eq!(json["data"]["label"], "central");

        let json = serde_json::to_value(node("concept-0", MindMapNodeType::Topic)).unwrap();
        assert_eq!(json["type"], "default");
    }
}
