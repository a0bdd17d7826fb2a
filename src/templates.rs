use crate::error::GorphError;
use std::collections::BTreeMap;

const TEMPLATES: [(&str, &str); 4] = [
    (
        "ci-cd-pipeline",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/ci-cd-pipeline.yml")),
    ),
    (
        "data-platform",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/data-platform.yml")),
    ),
    (
        "microservices",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/microservices.yml")),
    ),
    (
        "simple-webapp",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/simple-webapp.yml")),
    ),
];

/// Built-in example topologies, name to YAML source.
pub fn templates() -> BTreeMap<&'static str, &'static str> {
    TEMPLATES.into_iter().collect()
}

pub fn template(name: &str) -> Result<&'static str, GorphError> {
    let name = name.strip_suffix(".yml").unwrap_or(name);
    TEMPLATES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, source)| *source)
        .ok_or_else(|| GorphError::UnknownTemplate(name.to_string()))
}
