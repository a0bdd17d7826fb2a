use crate::config::StyleConfig;
use crate::error::GorphError;
use crate::escape::{escape_for_markup, escape_html};
use crate::group::group_by_category;
use crate::ident::sanitize_identifier;
use crate::label::{build_tooltip, display_name, status_color, truncate};
use crate::model::{Connection, Entity, Topology};
use std::fmt::Write as _;
use std::io::{ErrorKind, Write as _};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Renders the topology as a Graphviz `digraph`. Never fails: missing style
/// entries fall back to defaults, and invalid input is rendered as-is.
pub fn render_dot(topology: &Topology, style: &StyleConfig) -> String {
    let mut dot = String::new();

    dot.push_str("digraph Infrastructure {\n");
    let _ = writeln!(dot, "  rankdir={};", style.graph.direction);
    let _ = writeln!(
        dot,
        "  node [shape={}, fontname=\"{}\"];",
        style.graph.node_shape,
        escape_for_markup(&style.graph.font_family)
    );

    let groups = group_by_category(&topology.entities);
    for (category, entities) in &groups {
        let _ = writeln!(dot, "  subgraph cluster_{category} {{");
        let _ = writeln!(
            dot,
            "    label=\"{}\";",
            escape_for_markup(&display_name(category, style))
        );
        if let Some(cluster_style) = style
            .categories
            .get(*category)
            .and_then(|config| config.cluster_style.as_deref())
        {
            let _ = writeln!(dot, "    style={cluster_style};");
        }
        for entity in entities {
            push_entity_node(&mut dot, entity, style);
        }
        dot.push_str("  }\n");
    }

    for conn in &topology.connections {
        push_connection(&mut dot, conn, style);
    }

    dot.push_str("}\n");

    debug!(
        clusters = groups.len(),
        nodes = topology.entities.len(),
        edges = topology.connections.len(),
        "rendered dot"
    );
    dot
}

fn push_entity_node(dot: &mut String, entity: &Entity, style: &StyleConfig) {
    let node = &style.node;
    let tooltip = build_tooltip(entity, &style.tooltip);
    let description = truncate(&entity.description, node.max_description_length, &node.truncation_suffix);

    let _ = write!(
        dot,
        "    {id} [tooltip=\"{tooltip}\" label=<\n      <TABLE BORDER=\"{border}\" CELLBORDER=\"{cell_border}\" CELLSPACING=\"{cell_spacing}\">\n        <TR><TD><B>{label}</B></TD></TR>\n        <TR><TD>{description}</TD></TR>\n        <TR><TD BGCOLOR=\"{color}\" HEIGHT=\"{bar}\"></TD></TR>\n      </TABLE>\n    >];\n",
        id = sanitize_identifier(&entity.id),
        tooltip = escape_for_markup(&tooltip),
        border = node.border_width,
        cell_border = node.cell_border,
        cell_spacing = node.cell_spacing,
        label = escape_html(&entity.id),
        description = escape_html(&description),
        color = escape_html(status_color(&entity.status, style)),
        bar = node.status_bar_height,
    );
}

fn push_connection(dot: &mut String, conn: &Connection, style: &StyleConfig) {
    let _ = writeln!(
        dot,
        "  {} -> {} [label=\"{}\"{}];",
        sanitize_identifier(&conn.from),
        sanitize_identifier(&conn.to),
        escape_for_markup(&conn.kind),
        edge_attributes(&conn.kind, style)
    );
}

/// `, color=..., style=...` for the connection type, or empty when the type
/// has no style entry.
fn edge_attributes(kind: &str, style: &StyleConfig) -> String {
    let Some(edge) = style.connection_styles.get(kind) else {
        return String::new();
    };
    let mut attrs = Vec::new();
    if let Some(color) = edge.color.as_deref().filter(|c| !c.is_empty()) {
        attrs.push(format!("color={color}"));
    }
    if let Some(line) = edge.style.as_deref().filter(|s| !s.is_empty()) {
        attrs.push(format!("style={line}"));
    }
    if attrs.is_empty() {
        return String::new();
    }
    format!(", {}", attrs.join(", "))
}

pub fn write_output_dot(dot: &str, output: Option<&Path>) -> Result<(), GorphError> {
    match output {
        Some(path) => {
            std::fs::write(path, dot).map_err(|source| GorphError::WriteFile {
                path: path.display().to_string(),
                source,
            })?;
        }
        None => {
            print!("{}", dot);
        }
    }
    Ok(())
}

/// Pipes the DOT text through Graphviz `dot -Tpng`.
pub fn write_output_png(dot: &str, output: &Path) -> Result<(), GorphError> {
    if let Some(dir) = output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| GorphError::WriteFile {
            path: dir.display().to_string(),
            source,
        })?;
    }

    let mut command = Command::new("dot");
    command.arg("-Tpng").arg("-o").arg(output);
    pipe_through(command, dot)
}

/// Feeds `input` to the command's stdin and waits for it. The child is always
/// reaped, even when the write fails.
fn pipe_through(mut command: Command, input: &str) -> Result<(), GorphError> {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|err| match err.kind() {
            ErrorKind::NotFound => GorphError::GraphvizNotFound,
            _ => GorphError::Io(err),
        })?;

    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(input.as_bytes()),
        None => Ok(()),
    };
    let result = child.wait_with_output()?;
    if !result.status.success() {
        return Err(GorphError::GraphvizFailed {
            status: result.status.to_string(),
            stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
        });
    }
    written?;
    Ok(())
}
