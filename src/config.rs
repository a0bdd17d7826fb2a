use crate::error::GorphError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Used when the status table has no `unknown` entry.
pub const FALLBACK_STATUS_COLOR: &str = "lightgray";

const DEFAULT_STATUS_COLORS: [(&str, &str); 4] = [
    ("healthy", "green"),
    ("degraded", "yellow"),
    ("down", "red"),
    ("unknown", FALLBACK_STATUS_COLOR),
];

const DEFAULT_CONNECTION_STYLES: [(&str, Option<&str>, Option<&str>); 6] = [
    ("API_Call", Some("orange"), Some("dashed")),
    ("Internal_API", Some("gray"), Some("dotted")),
    ("DB_Connection", Some("blue"), None),
    ("Service_Call", Some("black"), None),
    ("HTTP_Request", Some("black"), None),
    ("User_Interaction", Some("purple"), Some("bold")),
];

const DEFAULT_CATEGORIES: [(&str, &str); 14] = [
    ("USER_FACING", "User Facing"),
    ("FRONTEND", "Frontend"),
    ("BACKEND", "Backend"),
    ("DATABASE", "Database"),
    ("NETWORK", "Network"),
    ("INTEGRATION", "Integration"),
    ("INFRASTRUCTURE", "Infrastructure"),
    ("INTERNAL", "Internal"),
    ("CI", "CI/CD"),
    ("REGISTRY", "Registry"),
    ("CONFIG", "Configuration"),
    ("CD", "Deployment"),
    ("ENVIRONMENT", "Environment"),
    ("SCM", "Source Control"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    pub direction: String,
    pub font_family: String,
    pub node_shape: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            direction: "LR".to_string(),
            font_family: "Helvetica".to_string(),
            node_shape: "plaintext".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionStyle {
    pub color: Option<String>,
    pub style: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryConfig {
    pub display_name: String,
    pub cluster_style: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    pub max_description_length: usize,
    pub truncation_suffix: String,
    pub border_width: u32,
    pub cell_border: u32,
    pub cell_spacing: u32,
    pub status_bar_height: u32,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            max_description_length: 24,
            truncation_suffix: "...".to_string(),
            border_width: 1,
            cell_border: 0,
            cell_spacing: 0,
            status_bar_height: 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipOptions {
    pub include_status: bool,
    pub include_owner: bool,
    pub include_environment: bool,
    pub include_tags: bool,
    pub include_deployment: bool,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            include_status: true,
            include_owner: true,
            include_environment: true,
            include_tags: true,
            include_deployment: false,
        }
    }
}

impl TooltipOptions {
    /// Only the `id: description` line.
    pub fn minimal() -> Self {
        Self {
            include_status: false,
            include_owner: false,
            include_environment: false,
            include_tags: false,
            include_deployment: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    pub graph: GraphConfig,
    /// Keys are lower-case status names.
    pub status_colors: BTreeMap<String, String>,
    pub connection_styles: BTreeMap<String, ConnectionStyle>,
    pub categories: BTreeMap<String, CategoryConfig>,
    pub node: NodeConfig,
    pub tooltip: TooltipOptions,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            graph: GraphConfig::default(),
            status_colors: DEFAULT_STATUS_COLORS
                .iter()
                .map(|(status, color)| (status.to_string(), color.to_string()))
                .collect(),
            connection_styles: DEFAULT_CONNECTION_STYLES
                .iter()
                .map(|(kind, color, style)| {
                    (
                        kind.to_string(),
                        ConnectionStyle {
                            color: color.map(str::to_string),
                            style: style.map(str::to_string),
                        },
                    )
                })
                .collect(),
            categories: DEFAULT_CATEGORIES
                .iter()
                .map(|(key, name)| {
                    (
                        key.to_string(),
                        CategoryConfig {
                            display_name: name.to_string(),
                            cluster_style: None,
                        },
                    )
                })
                .collect(),
            node: NodeConfig::default(),
            tooltip: TooltipOptions::default(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct GraphConfigFile {
    direction: Option<String>,
    font_family: Option<String>,
    node_shape: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct NodeConfigFile {
    max_description_length: Option<usize>,
    truncation_suffix: Option<String>,
    border_width: Option<u32>,
    cell_border: Option<u32>,
    cell_spacing: Option<u32>,
    status_bar_height: Option<u32>,
}

#[derive(Debug, Deserialize, Default)]
struct TooltipConfigFile {
    include_status: Option<bool>,
    include_owner: Option<bool>,
    include_environment: Option<bool>,
    include_tags: Option<bool>,
    include_deployment: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
struct StyleConfigFile {
    graph: Option<GraphConfigFile>,
    status_colors: Option<BTreeMap<String, String>>,
    connection_styles: Option<BTreeMap<String, ConnectionStyle>>,
    categories: Option<BTreeMap<String, CategoryConfig>>,
    node: Option<NodeConfigFile>,
    tooltip: Option<TooltipConfigFile>,
}

pub fn load_style(path: Option<&Path>) -> Result<StyleConfig, GorphError> {
    let Some(path) = path else {
        return Ok(StyleConfig::default());
    };
    let contents = std::fs::read_to_string(path).map_err(|source| GorphError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    parse_style(&contents)
}

/// Layers a partial style document over [`StyleConfig::default`]. Map
/// sections are merged entry by entry.
pub fn parse_style(input: &str) -> Result<StyleConfig, GorphError> {
    let mut config = StyleConfig::default();
    if input.trim().is_empty() {
        return Ok(config);
    }
    let parsed: StyleConfigFile = serde_yaml::from_str(input)?;

    if let Some(graph) = parsed.graph {
        if let Some(v) = graph.direction {
            config.graph.direction = v;
        }
        if let Some(v) = graph.font_family {
            config.graph.font_family = v;
        }
        if let Some(v) = graph.node_shape {
            config.graph.node_shape = v;
        }
    }

    if let Some(colors) = parsed.status_colors {
        for (status, color) in colors {
            config.status_colors.insert(status.to_lowercase(), color);
        }
    }
    if let Some(styles) = parsed.connection_styles {
        config.connection_styles.extend(styles);
    }
    if let Some(categories) = parsed.categories {
        config.categories.extend(categories);
    }

    if let Some(node) = parsed.node {
        if let Some(v) = node.max_description_length {
            config.node.max_description_length = v;
        }
        if let Some(v) = node.truncation_suffix {
            config.node.truncation_suffix = v;
        }
        if let Some(v) = node.border_width {
            config.node.border_width = v;
        }
        if let Some(v) = node.cell_border {
            config.node.cell_border = v;
        }
        if let Some(v) = node.cell_spacing {
            config.node.cell_spacing = v;
        }
        if let Some(v) = node.status_bar_height {
            config.node.status_bar_height = v;
        }
    }

    if let Some(tooltip) = parsed.tooltip {
        if let Some(v) = tooltip.include_status {
            config.tooltip.include_status = v;
        }
        if let Some(v) = tooltip.include_owner {
            config.tooltip.include_owner = v;
        }
        if let Some(v) = tooltip.include_environment {
            config.tooltip.include_environment = v;
        }
        if let Some(v) = tooltip.include_tags {
            config.tooltip.include_tags = v;
        }
        if let Some(v) = tooltip.include_deployment {
            config.tooltip.include_deployment = v;
        }
    }

    Ok(config)
}
