//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use chronicle_domain::{
    CharacterNetwork, GeographyData, MindMap, Position, Role, TimelineEvent,
};
use chronicle_synthesizer::HistoryAnalysis;
use colored::*;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format timeline events.
    pub fn format_timeline(&self, events: &[TimelineEvent]) -> Result<String> {
        match self.format {
            OutputFormat::Json => json(events),
            OutputFormat::Table => Ok(self.timeline_table(events)),
        }
    }

    /// Format a mind map.
    pub fn format_mind_map(&self, map: &MindMap) -> Result<String> {
        match self.format {
            OutputFormat::Json => json(map),
            OutputFormat::Table => Ok(self.mind_map_table(map)),
        }
    }

    /// Format map events.
    pub fn format_geography(&self, geography: &GeographyData) -> Result<String> {
        match self.format {
            OutputFormat::Json => json(geography),
            OutputFormat::Table => Ok(self.geography_table(geography)),
        }
    }

    /// Format a character network.
    pub fn format_network(&self, network: &CharacterNetwork) -> Result<String> {
        match self.format {
            OutputFormat::Json => json(network),
            OutputFormat::Table => Ok(self.network_tables(network)),
        }
    }

    /// Format all four visualizations.
    pub fn format_analysis(&self, analysis: &HistoryAnalysis) -> Result<String> {
        match self.format {
            OutputFormat::Json => json(analysis),
            OutputFormat::Table => Ok([
                self.heading("Timeline"),
                self.timeline_table(&analysis.timeline),
                self.heading("Mind Map"),
                self.mind_map_table(&analysis.mind_map),
                self.heading("Geography"),
                self.geography_table(&analysis.geography),
                self.heading("Characters"),
                self.network_tables(&analysis.characters),
            ]
            .join("\n")),
        }
    }

    fn timeline_table(&self, events: &[TimelineEvent]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Date", "Title", "Description", "Key Figures"]);

        for event in events {
            let figures: Vec<&str> = event.key_figures.iter().map(|f| f.as_str()).collect();
            builder.push_record([
                event.date.clone(),
                event.title.clone(),
                event.description.clone(),
                figures.join(", "),
            ]);
        }

        render(builder)
    }

    fn mind_map_table(&self, map: &MindMap) -> String {
        let mut builder = Builder::default();
        builder.push_record(["ID", "Concept", "Position", "Link"]);

        for node in &map.nodes {
            let link = map
                .edges
                .iter()
                .find(|e| e.target == node.id)
                .map(|e| format!("{} {}", e.label, e.source))
                .unwrap_or_default();
            let label = if node.is_central() {
                self.colorize(node.label(), "cyan")
            } else {
                node.label().to_string()
            };
            builder.push_record([node.id.clone(), label, position(node.position), link]);
        }

        render(builder)
    }

    fn geography_table(&self, geography: &GeographyData) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Event", "Year", "Longitude", "Latitude", "Description"]);

        for event in &geography.events {
            builder.push_record([
                event.name.clone(),
                event.date.clone(),
                format!("{:.4}", event.longitude),
                format!("{:.4}", event.latitude),
                event.description.clone(),
            ]);
        }

        render(builder)
    }

    fn network_tables(&self, network: &CharacterNetwork) -> String {
        if network.nodes.is_empty() {
            return self.colorize("No characters found.", "yellow");
        }

        let mut nodes = Builder::default();
        nodes.push_record(["ID", "Name", "Role", "Type", "Position"]);
        for node in &network.nodes {
            nodes.push_record([
                node.id.clone(),
                node.label().to_string(),
                self.role(node.role()),
                node.data.entity_type.as_str().to_string(),
                position(node.position),
            ]);
        }

        let mut edges = Builder::default();
        edges.push_record(["From", "To", "Relationship"]);
        for edge in &network.edges {
            let name = |id: &str| {
                network
                    .node(id)
                    .map(|n| n.label().to_string())
                    .unwrap_or_else(|| id.to_string())
            };
            edges.push_record([name(&edge.source), name(&edge.target), edge.label.clone()]);
        }

        format!("{}\n{}", render(nodes), render(edges))
    }

    fn role(&self, role: Role) -> String {
        let color = match role {
            Role::Leader => "cyan",
            Role::Ally => "green",
            Role::Opponent => "red",
        };
        self.colorize(role.as_str(), color)
    }

    fn heading(&self, title: &str) -> String {
        if self.color_enabled {
            format!("\n{}", title.bold())
        } else {
            format!("\n{}", title)
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn position(p: Position) -> String {
    format!("({:.1}, {:.1})", p.x, p.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronicle_domain::EntityName;
    use chronicle_synthesizer::{mind_map_from_concepts, network_from_figures, LayoutConfig};

    fn events() -> Vec<TimelineEvent> {
        vec![TimelineEvent {
            date: "January 1, 1492".to_string(),
            title: "Historical Event: voyage".to_string(),
            description: "Columbus sailed west.".to_string(),
            key_figures: vec![EntityName::new("Columbus"), EntityName::new("Isabella")],
        }]
    }

    fn network() -> CharacterNetwork {
        let figures: Vec<EntityName> = ["Caesar", "Brutus", "Cassius"]
            .into_iter()
            .map(EntityName::new)
            .collect();
        network_from_figures(&figures, &LayoutConfig::default())
    }

    #[test]
    fn test_timeline_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_timeline(&events()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["date"], "January 1, 1492");
        assert_eq!(value[0]["key_figures"][1], "Isabella");
    }

    #[test]
    fn test_timeline_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_timeline(&events()).unwrap();
        assert!(output.contains("Key Figures"));
        assert!(output.contains("Columbus, Isabella"));
    }

    #[test]
    fn test_mind_map_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let map = mind_map_from_concepts(&["Exploration", "Navigation"], &LayoutConfig::default());
        let output = formatter.format_mind_map(&map).unwrap();
        assert!(output.contains("Exploration"));
        assert!(output.contains("(450.0, 250.0)"));
        assert!(output.contains("Related to central"));
    }

    #[test]
    fn test_network_table_names_edges() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_network(&network()).unwrap();
        assert!(output.contains("opponent"));
        assert!(output.contains("Mentor"));
        assert!(output.contains("Cassius"));
    }

    #[test]
    fn test_empty_network() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_network(&CharacterNetwork::default()).unwrap();
        assert!(output.contains("No characters found"));
    }

    #[test]
    fn test_network_json_shape() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_network(&network()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["nodes"][0]["type"], "entity");
        assert_eq!(value["nodes"][0]["data"]["entityType"], "person");
        assert_eq!(value["edges"][0]["id"], "e1-2");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.role(Role::Ally), "ally");
    }
}
