use gorph::{StyleConfig, ValidationReport, parse_topology, render_dot, templates, validate};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenderOptions {
    direction: Option<String>,
    font_family: Option<String>,
    max_description_length: Option<usize>,
}

fn build_style(options: RenderOptions) -> StyleConfig {
    let mut style = StyleConfig::default();
    if let Some(direction) = options.direction {
        style.graph.direction = direction;
    }
    if let Some(font_family) = options.font_family {
        style.graph.font_family = font_family;
    }
    if let Some(max) = options.max_description_length {
        style.node.max_description_length = max;
    }
    style
}

fn yaml_to_dot_inner(yaml: &str, options_json: Option<&str>) -> Result<String, String> {
    let options = match options_json {
        Some(raw) => serde_json::from_str::<RenderOptions>(raw)
            .map_err(|error| format!("Invalid render options: {error}"))?,
        None => RenderOptions::default(),
    };
    let topology = parse_topology(yaml).map_err(|error| format!("Failed to parse YAML: {error}"))?;
    Ok(render_dot(&topology, &build_style(options)))
}

fn validate_yaml_inner(yaml: &str) -> ValidationReport {
    match parse_topology(yaml) {
        Ok(topology) => ValidationReport::from_errors(validate(&topology)),
        Err(error) => ValidationReport::from_errors(vec![format!("Invalid YAML: {error}")]),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// Renders a topology YAML document with the default style.
#[wasm_bindgen]
pub fn yaml_to_dot(yaml: &str, options_json: Option<String>) -> Result<String, JsValue> {
    yaml_to_dot_inner(yaml, options_json.as_deref()).map_err(|error| JsValue::from_str(&error))
}

/// `{"valid": bool, "errors": [..]}` as JSON.
#[wasm_bindgen]
pub fn validate_yaml(yaml: &str) -> String {
    to_json(&validate_yaml_inner(yaml))
}

/// Built-in templates as a JSON object of name to YAML.
#[wasm_bindgen]
pub fn get_templates() -> String {
    to_json(&templates())
}
