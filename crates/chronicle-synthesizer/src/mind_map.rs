//! Mind-map synthesis
//!
//! The first concept becomes the central topic. The remaining concepts sit
//! evenly spaced on a circle around it, each linked back to the center.

use crate::config::LayoutConfig;
use chronicle_domain::graph::PRIMARY_COLOR;
use chronicle_domain::{MindMap, MindMapEdge, MindMapNode, MindMapNodeType, NodeLabel, NodeStyle};
use chronicle_extractor::{extract_concepts, ExtractorConfig, FALLBACK_CONCEPT};
use std::f64::consts::TAU;
use tracing::info;

/// Identifier of the central topic node
pub const CENTRAL_ID: &str = "central";

/// Caption on every mind-map edge
pub const EDGE_LABEL: &str = "Related to";

/// Build a mind map from the concepts of `text`
pub fn synthesize_mind_map(text: &str, config: &ExtractorConfig, layout: &LayoutConfig) -> MindMap {
    let concepts = extract_concepts(text, config);
    let map = mind_map_from_concepts(&concepts, layout);
    info!("Synthesized mind map with {} nodes", map.nodes.len());
    map
}

/// Lay out an ordered list of concepts as a star graph
///
/// An empty list yields a single central node labelled
/// [`FALLBACK_CONCEPT`].
pub fn mind_map_from_concepts<S: AsRef<str>>(concepts: &[S], layout: &LayoutConfig) -> MindMap {
    let central_label = concepts
        .first()
        .map(|c| c.as_ref())
        .unwrap_or(FALLBACK_CONCEPT);

    let mut nodes = vec![MindMapNode {
        id: CENTRAL_ID.to_string(),
        node_type: MindMapNodeType::Input,
        data: NodeLabel::new(central_label),
        position: layout.anchor,
        style: NodeStyle::boxed(PRIMARY_COLOR, "white", "none", 180),
    }];
    let mut edges = Vec::new();

    let peripheral = concepts.get(1..).unwrap_or_default();
    let step = TAU / peripheral.len().max(1) as f64;

    for (j, concept) in peripheral.iter().enumerate() {
        let id = format!("concept-{}", j);
        nodes.push(MindMapNode {
            id: id.clone(),
            node_type: MindMapNodeType::Topic,
            data: NodeLabel::new(concept.as_ref()),
            position: layout.anchor.offset_polar(layout.mind_map_radius, j as f64 * step),
            style: NodeStyle::boxed("white", "black", "1px solid #e2e8f0", 150),
        });
        edges.push(MindMapEdge {
            id: format!("e-{}-{}", CENTRAL_ID, id),
            source: CENTRAL_ID.to_string(),
            target: id,
            animated: true,
            label: EDGE_LABEL.to_string(),
        });
    }

    MindMap { nodes, edges }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: n concepts give n nodes, n - 1 edges, all from the center
        #[test]
        fn test_star_shape(concepts in prop::collection::vec("[a-z]{6,10}", 1..8)) {
            let map = mind_map_from_concepts(&concepts, &LayoutConfig::default());
            prop_assert_eq!(map.nodes.len(), concepts.len());
            prop_assert_eq!(map.edges.len(), concepts.len() - 1);
            prop_assert!(map.is_star());
            prop_assert!(map.dangling_edges().is_empty());
        }
    }
}
