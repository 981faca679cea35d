//! Character-network synthesis
//!
//! Two builders share one node/edge shape: the heuristic one lays out the
//! figures found in the text, the enriched one lays out the characters of an
//! external analysis.

use crate::config::LayoutConfig;
use chronicle_domain::character::{ENTITY_NODE_TYPE, HUB_ID};
use chronicle_domain::graph::{DESTRUCTIVE_COLOR, PRIMARY_COLOR};
use chronicle_domain::{
    CharacterData, CharacterEdge, CharacterNetwork, CharacterNode, EdgeStyle, EntityName,
    EntityType, NodeStyle, Position, RelationshipKind, Role,
};
use chronicle_extractor::{figures_or_placeholders, CharacterAnalysis, ExtractorConfig};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Role keywords that mark an analyzed character as an opponent
const OPPONENT_KEYWORDS: [&str; 4] = ["antagonist", "enemy", "rival", "opponent"];

/// Build a hub-and-spoke network from the figures of `text`
pub fn synthesize_character_network(
    text: &str,
    config: &ExtractorConfig,
    layout: &LayoutConfig,
) -> CharacterNetwork {
    let figures = figures_or_placeholders(text, config);
    let network = network_from_figures(&figures, layout);
    info!(
        "Synthesized character network with {} nodes and {} edges",
        network.nodes.len(),
        network.edges.len()
    );
    network
}

/// Lay out figures as a hub with spokes
///
/// The first figure is the hub. Spoke `i` alternates ally and opponent,
/// cycles through entity types and quadrants, and gets one edge from the
/// hub labelled by cycling relationship kinds.
pub fn network_from_figures(figures: &[EntityName], layout: &LayoutConfig) -> CharacterNetwork {
    let Some((hub, spokes)) = figures.split_first() else {
        return CharacterNetwork::default();
    };

    let mut nodes = vec![hub_node(hub.as_str(), EntityType::Person, layout.anchor)];
    let mut edges = Vec::with_capacity(spokes.len());

    for (i, figure) in spokes.iter().enumerate() {
        let role = Role::for_spoke(i);
        let node = spoke_node(
            i,
            figure.as_str(),
            role,
            EntityType::for_index(i),
            layout.quadrant(i),
        );

        edges.push(CharacterEdge {
            id: format!("e1-{}", i + 2),
            source: HUB_ID.to_string(),
            target: node.id.clone(),
            animated: true,
            label: RelationshipKind::for_index(i).label().to_string(),
            style: edge_style(role),
        });
        nodes.push(node);
    }

    CharacterNetwork { nodes, edges }
}

/// Lay out the characters of an external analysis
///
/// Characters are ranked by importance, most important first; ties keep the
/// analysis order. Relationships become edges between the named characters.
pub fn network_from_analysis(analysis: &CharacterAnalysis, layout: &LayoutConfig) -> CharacterNetwork {
    let mut ranked: Vec<_> = analysis.characters.iter().collect();
    ranked.sort_by(|a, b| b.importance.cmp(&a.importance));

    let Some((hub, spokes)) = ranked.split_first() else {
        warn!("Analysis contains no characters");
        return CharacterNetwork::default();
    };

    let mut nodes = vec![hub_node(
        &hub.name,
        hub.entity_type.unwrap_or(EntityType::Person),
        layout.anchor,
    )];
    for (i, character) in spokes.iter().enumerate() {
        nodes.push(spoke_node(
            i,
            &character.name,
            role_from_analysis(&character.role),
            character.entity_type.unwrap_or(EntityType::Person),
            layout.quadrant(i),
        ));
    }

    let mut ids: HashMap<&str, &CharacterNode> = HashMap::new();
    for node in &nodes {
        ids.entry(node.label()).or_insert(node);
    }

    let mut edges = Vec::new();
    for (k, relationship) in analysis.relationships.iter().enumerate() {
        let (Some(source), Some(target)) = (
            ids.get(relationship.source.as_str()),
            ids.get(relationship.target.as_str()),
        ) else {
            warn!(
                "Skipping relationship {} -> {}: unknown character",
                relationship.source, relationship.target
            );
            continue;
        };

        edges.push(CharacterEdge {
            id: format!("rel-{}", k),
            source: source.id.clone(),
            target: target.id.clone(),
            animated: true,
            label: capitalize(&relationship.kind),
            style: edge_style(target.role()),
        });
    }

    debug!(
        "Analysis network: {} nodes, {} of {} relationships kept",
        nodes.len(),
        edges.len(),
        analysis.relationships.len()
    );
    CharacterNetwork { nodes, edges }
}

fn hub_node(label: &str, entity_type: EntityType, position: Position) -> CharacterNode {
    CharacterNode {
        id: HUB_ID.to_string(),
        node_type: ENTITY_NODE_TYPE.to_string(),
        data: CharacterData {
            label: label.to_string(),
            role: Role::Leader,
            entity_type,
        },
        position,
        style: NodeStyle::circle(PRIMARY_COLOR, "white", "none", 150),
    }
}

fn spoke_node(
    index: usize,
    label: &str,
    role: Role,
    entity_type: EntityType,
    position: Position,
) -> CharacterNode {
    let style = if role.is_friendly() {
        NodeStyle::circle("white", "black", "1px solid #ccc", 100)
    } else {
        NodeStyle::circle(DESTRUCTIVE_COLOR, "white", "none", 100)
    };

    CharacterNode {
        id: format!("char{}", index + 2),
        node_type: ENTITY_NODE_TYPE.to_string(),
        data: CharacterData {
            label: label.to_string(),
            role,
            entity_type,
        },
        position,
        style,
    }
}

fn edge_style(target_role: Role) -> EdgeStyle {
    if target_role.is_friendly() {
        EdgeStyle::stroke(PRIMARY_COLOR)
    } else {
        EdgeStyle::stroke(DESTRUCTIVE_COLOR)
    }
}

fn role_from_analysis(role: &str) -> Role {
    let role = role.to_lowercase();
    if OPPONENT_KEYWORDS.iter().any(|k| role.contains(k)) {
        Role::Opponent
    } else {
        Role::Ally
    }
}

/// Upper-case the first letter; an empty kind reads as `Related`
fn capitalize(kind: &str) -> String {
    let mut chars = kind.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Related".to_string(),
    }
}
