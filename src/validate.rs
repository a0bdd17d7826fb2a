use crate::ident::is_valid_identifier;
use crate::model::Topology;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Checks structural integrity. Every violation is reported; an empty list
/// means the topology is valid.
pub fn validate(topology: &Topology) -> Vec<String> {
    let mut errors = Vec::new();

    if topology.entities.is_empty() {
        errors.push("Infrastructure must have at least one entity".to_string());
    }

    let mut ids: HashSet<&str> = HashSet::new();
    for (idx, entity) in topology.entities.iter().enumerate() {
        if entity.id.is_empty() {
            errors.push(format!("Entity {idx}: ID is required"));
            continue;
        }
        let id = entity.id.as_str();

        if !is_valid_identifier(id) {
            errors.push(format!(
                "Entity {id}: ID contains invalid characters. IDs must start with a letter and contain only letters, numbers, underscores, and dashes"
            ));
        }
        if !ids.insert(id) {
            errors.push(format!("Duplicate entity ID: {id}"));
        }
        if entity.category.is_empty() {
            errors.push(format!("Entity {id}: Category is required"));
        }
        if entity.description.is_empty() {
            errors.push(format!("Entity {id}: Description is required"));
        }
        if entity.status.is_empty() {
            errors.push(format!("Entity {id}: Status is required"));
        }
    }

    for (idx, conn) in topology.connections.iter().enumerate() {
        check_endpoint(&mut errors, idx, "From", &conn.from, &ids);
        check_endpoint(&mut errors, idx, "To", &conn.to, &ids);
        if conn.kind.is_empty() {
            errors.push(format!("Connection {idx}: Type is required"));
        }
    }

    debug!(
        entities = topology.entities.len(),
        connections = topology.connections.len(),
        errors = errors.len(),
        "validated topology"
    );
    errors
}

fn check_endpoint(errors: &mut Vec<String>, idx: usize, side: &str, id: &str, ids: &HashSet<&str>) {
    if id.is_empty() {
        errors.push(format!("Connection {idx}: {side} is required"));
        return;
    }
    if !is_valid_identifier(id) {
        errors.push(format!(
            "Connection {idx}: {side} entity ID '{id}' contains invalid characters"
        ));
    }
    if !ids.contains(id) {
        errors.push(format!("Connection {idx}: {side} entity '{id}' does not exist"));
    }
}
