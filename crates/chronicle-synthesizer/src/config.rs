//! Layout and synthesis configuration

use crate::error::SynthesizerError;
use chronicle_domain::Position;
use chronicle_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};

/// Canvas geometry for the mind map and the character network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Position of the central concept and of the hub figure
    pub anchor: Position,

    /// Distance of peripheral concepts from the anchor
    pub mind_map_radius: f64,

    /// Spoke positions; spoke `i` is placed at `quadrants[i % 4]`
    pub quadrants: [Position; 4],
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            anchor: Position::new(250.0, 250.0),
            mind_map_radius: 200.0,
            quadrants: [
                Position::new(100.0, 100.0),
                Position::new(400.0, 100.0),
                Position::new(100.0, 400.0),
                Position::new(400.0, 400.0),
            ],
        }
    }
}

impl LayoutConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), SynthesizerError> {
        if !self.mind_map_radius.is_finite() || self.mind_map_radius <= 0.0 {
            return Err(SynthesizerError::Config(
                "mind_map_radius must be a positive number".to_string(),
            ));
        }
        let coordinates = std::iter::once(&self.anchor)
            .chain(self.quadrants.iter())
            .flat_map(|p| [p.x, p.y]);
        for value in coordinates {
            if !value.is_finite() {
                return Err(SynthesizerError::Config(
                    "layout coordinates must be finite".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Spoke position for index `i`; indices 0, 4, 8, ... share a quadrant
    pub fn quadrant(&self, index: usize) -> Position {
        self.quadrants[index % self.quadrants.len()]
    }
}

/// Configuration for all synthesizers
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesizerConfig {
    /// Extractor limits
    pub extractor: ExtractorConfig,

    /// Canvas geometry
    pub layout: LayoutConfig,
}

impl SynthesizerConfig {
    /// Validate both sections
    pub fn validate(&self) -> Result<(), SynthesizerError> {
        self.extractor.validate()?;
        self.layout.validate()
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, SynthesizerError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| SynthesizerError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, SynthesizerError> {
        toml::to_string_pretty(self)
            .map_err(|e| SynthesizerError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SynthesizerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_radius() {
        let config = LayoutConfig {
            mind_map_radius: 0.0,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_anchor() {
        let config = LayoutConfig {
            anchor: Position::new(f64::NAN, 0.0),
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_quadrant_wraps() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.quadrant(0), Position::new(100.0, 100.0));
        assert_eq!(layout.quadrant(3), Position::new(400.0, 400.0));
        assert_eq!(layout.quadrant(4), layout.quadrant(0));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SynthesizerConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = SynthesizerConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml() {
        let parsed = SynthesizerConfig::from_toml(
            "[layout]\nmind_map_radius = 120.0\n\n[extractor]\nmax_figures = 3\n",
        )
        .unwrap();
        assert_eq!(parsed.layout.mind_map_radius, 120.0);
        assert_eq!(parsed.layout.anchor, Position::new(250.0, 250.0));
        assert_eq!(parsed.extractor.max_figures, 3);
    }

    #[test]
    fn test_invalid_extractor_section_rejected() {
        let result = SynthesizerConfig::from_toml("[extractor]\nmax_concepts = 0\n");
        assert!(matches!(result, Err(SynthesizerError::Extractor(_))));
    }
}
