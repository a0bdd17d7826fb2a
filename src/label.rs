use crate::config::{FALLBACK_STATUS_COLOR, StyleConfig, TooltipOptions};
use crate::model::Entity;
use tracing::warn;

/// Cluster title for a category: the configured display name, or the
/// category title-cased (`USER_FACING` becomes `User_facing`).
pub fn display_name(category: &str, style: &StyleConfig) -> String {
    match style.categories.get(category) {
        Some(config) if !config.display_name.is_empty() => config.display_name.clone(),
        _ => title_case(&category.to_lowercase()),
    }
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = !(ch.is_alphanumeric() || ch == '_');
    }
    out
}

/// Cuts `description` to `max_len` characters and appends `suffix`. No
/// word-boundary handling.
pub fn truncate(description: &str, max_len: usize, suffix: &str) -> String {
    match description.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}{suffix}", &description[..cut]),
        None => description.to_string(),
    }
}

/// Case-insensitive status lookup, falling back to the `unknown` entry.
pub fn status_color<'a>(status: &str, style: &'a StyleConfig) -> &'a str {
    if let Some(color) = style.status_colors.get(&status.to_lowercase()) {
        return color.as_str();
    }
    match style.status_colors.get("unknown") {
        Some(color) => color.as_str(),
        None => {
            warn!(status, "no `unknown` status color configured, using {FALLBACK_STATUS_COLOR}");
            FALLBACK_STATUS_COLOR
        }
    }
}

/// Unescaped tooltip text; callers escape it before embedding.
pub fn build_tooltip(entity: &Entity, options: &TooltipOptions) -> String {
    let mut parts = vec![format!("{}: {}", entity.id, entity.description)];

    if options.include_status {
        parts.push(format!("Status: {}", entity.status));
    }
    if options.include_owner {
        parts.push(format!("Owner: {}", entity.owner));
    }
    if options.include_environment && !entity.environment.is_empty() {
        parts.push(format!("Environment: {}", entity.environment));
    }
    if options.include_tags && !entity.tags.is_empty() {
        parts.push(format!("Tags: [{}]", entity.tags.join(" ")));
    }
    if options.include_deployment && !entity.deployment_config.is_empty() {
        match serde_yaml::to_string(&entity.deployment_config) {
            Ok(yaml) => parts.push(format!("Deployment:\n{}", yaml.trim_end())),
            Err(err) => warn!(entity = %entity.id, %err, "skipping deployment config in tooltip"),
        }
    }

    parts.join("\n")
}
