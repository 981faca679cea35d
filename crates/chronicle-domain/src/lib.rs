//! Chronicle Domain Layer
//!
//! This crate contains the value objects shared by every other Chronicle crate:
//! the artifacts derived from a block of historical narrative, the fixed
//! vocabularies used to label them, and the ports through which time and
//! randomness reach the synthesizers.
//!
//! ## Key Concepts
//!
//! - **DateToken**: A calendar year promoted to January 1 of that year
//! - **EntityName**: A capitalized phrase believed to name a person, place or thing
//! - **TimelineEvent**: One dated entry of a chronological timeline
//! - **MindMap**: A star graph with one central concept
//! - **GeographyData**: Events pinned to gazetteer coordinates
//! - **CharacterNetwork**: A hub-and-spoke relationship graph rooted at `char1`
//!
//! ## Architecture
//!
//! - Pure data only; every type serializes to the JSON shape consumed by the
//!   presentation layer
//! - Values are built in one pass and never mutated afterwards
//! - Trait definitions for the clock and random source live in [`traits`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod character;
pub mod date;
pub mod entity;
pub mod geography;
pub mod graph;
pub mod mind_map;
pub mod relationship;
pub mod timeline;
pub mod traits;

// Re-exports for convenience
pub use character::{CharacterData, CharacterEdge, CharacterNetwork, CharacterNode, NodeRelationship};
pub use date::DateToken;
pub use entity::{EntityName, EntityType, Role};
pub use geography::{GeoEvent, GeographyData};
pub use graph::{EdgeStyle, NodeLabel, NodeStyle, Position};
pub use mind_map::{MindMap, MindMapEdge, MindMapNode, MindMapNodeType};
pub use relationship::RelationshipKind;
pub use timeline::TimelineEvent;
pub use traits::{Clock, RandomSource};
