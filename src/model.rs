use crate::error::GorphError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A single infrastructure component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entity {
    #[serde(deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub owner: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub environment: String,
    pub tags: Vec<String>,
    #[serde(deserialize_with = "scalar_map")]
    pub attributes: BTreeMap<String, String>,
    pub deployment_config: BTreeMap<String, serde_yaml::Value>,
    // Carried through for consumers; the DOT renderer ignores both.
    #[serde(deserialize_with = "null_as_empty")]
    pub shape: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub icon: String,
}

impl Entity {
    pub fn new(id: &str, category: &str, description: &str, status: &str) -> Self {
        Self {
            id: id.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            status: status.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Connection {
    #[serde(deserialize_with = "null_as_empty")]
    pub from: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub to: String,
    #[serde(rename = "type", deserialize_with = "null_as_empty")]
    pub kind: String,
}

impl Connection {
    pub fn new(from: &str, to: &str, kind: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            kind: kind.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Topology {
    pub entities: Vec<Entity>,
    pub connections: Vec<Connection>,
}

/// Parses a topology document. JSON input is accepted as a YAML subset.
pub fn parse_topology(input: &str) -> Result<Topology, GorphError> {
    if input.trim().is_empty() {
        return Ok(Topology::default());
    }
    Ok(serde_yaml::from_str(input)?)
}

pub fn load_topology(path: &Path) -> Result<Topology, GorphError> {
    let contents = std::fs::read_to_string(path).map_err(|source| GorphError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    parse_topology(&contents)
}

/// `status: null` and `owner: ~` read as empty, not as the text `null`/`~`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts any YAML scalar as an attribute value, so `port: 8080` and
/// `public: true` land in the map as strings.
fn scalar_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = Option::<BTreeMap<String, serde_yaml::Value>>::deserialize(deserializer)?;
    let mut out = BTreeMap::new();
    for (key, value) in raw.unwrap_or_default() {
        let text = match value {
            serde_yaml::Value::Null => String::new(),
            serde_yaml::Value::Bool(v) => v.to_string(),
            serde_yaml::Value::Number(v) => v.to_string(),
            serde_yaml::Value::String(v) => v,
            other => {
                return Err(D::Error::custom(format!(
                    "attribute `{key}` must be a scalar, found {other:?}"
                )));
            }
        };
        out.insert(key, text);
    }
    Ok(out)
}
