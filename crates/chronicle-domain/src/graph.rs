//! Graph primitives shared by the mind map and the character network

use serde::{Deserialize, Serialize};

/// Theme fill used for central and friendly elements
pub const PRIMARY_COLOR: &str = "hsl(var(--primary))";

/// Theme fill used for opposing elements
pub const DESTRUCTIVE_COLOR: &str = "hsl(var(--destructive))";

/// Canvas coordinates of a node
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal offset
    pub x: f64,

    /// Vertical offset
    pub y: f64,
}

impl Position {
    /// Create a new position
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` in direction `angle` (radians)
    pub fn offset_polar(&self, radius: f64, angle: f64) -> Self {
        Self {
            x: self.x + angle.cos() * radius,
            y: self.y + angle.sin() * radius,
        }
    }
}

/// Display payload of a mind-map node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLabel {
    /// Text shown on the node
    pub label: String,
}

impl NodeLabel {
    /// Create a new label payload
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// Visual style of a node, serialized as camelCase CSS properties
///
/// Unset properties are omitted from the JSON output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    /// Fill color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    /// Text color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// CSS border shorthand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,

    /// Corner rounding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,

    /// Inner spacing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,

    /// Width in canvas units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Height in canvas units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// CSS display mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Horizontal alignment of the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<String>,

    /// Vertical alignment of the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_items: Option<String>,

    /// Label text alignment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
}

impl NodeStyle {
    /// Rounded box with the given fill, text color and border
    pub fn boxed(background: &str, color: &str, border: &str, width: u32) -> Self {
        Self {
            background: Some(background.to_string()),
            color: Some(color.to_string()),
            border: Some(border.to_string()),
            border_radius: Some("8px".to_string()),
            padding: Some("10px".to_string()),
            width: Some(width),
            ..Self::default()
        }
    }

    /// Centered circle of the given diameter
    pub fn circle(background: &str, color: &str, border: &str, diameter: u32) -> Self {
        Self {
            background: Some(background.to_string()),
            color: Some(color.to_string()),
            border: Some(border.to_string()),
            border_radius: Some("50%".to_string()),
            padding: Some("10px".to_string()),
            width: Some(diameter),
            height: Some(diameter),
            display: Some("flex".to_string()),
            justify_content: Some("center".to_string()),
            align_items: Some("center".to_string()),
            text_align: Some("center".to_string()),
        }
    }
}

/// Visual style of an edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyle {
    /// Stroke color
    pub stroke: String,
}

impl EdgeStyle {
    /// Edge stroked in `color`
    pub fn stroke(color: &str) -> Self {
        Self {
            stroke: color.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_polar() {
        let anchor = Position::new(250.0, 250.0);
        let east = anchor.offset_polar(200.0, 0.0);
        assert!((east.x - 450.0).abs() < 1e-9);
        assert!((east.y - 250.0).abs() < 1e-9);

        let south = anchor.offset_polar(200.0, std::f64::consts::FRAC_PI_2);
        assert!((south.x - 250.0).abs() < 1e-9);
        assert!((south.y - 450.0).abs() < 1e-9);
    }

    #[test]
    fn test_style_serializes_camel_case_and_skips_unset() {
        let style = NodeStyle::boxed("white", "black", "1px solid #e2e8f0", 150);
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["borderRadius"], "8px");
        assert_eq!(json["width"], 150);
        assert!(json.get("height").is_none());
        assert!(json.get("textAlign").is_none());
    }

    #[test]
    fn test_circle_style() {
        let style = NodeStyle::circle(PRIMARY_COLOR, "white", "none", 150);
        assert_eq!(style.width, Some(150));
        assert_eq!(style.height, Some(150));
        assert_eq!(style.border_radius.as_deref(), Some("50%"));
    }
}
