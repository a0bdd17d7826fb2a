#[derive(Debug, thiserror::Error)]
pub enum GorphError {
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse YAML: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
    #[error("unknown template: {0}")]
    UnknownTemplate(String),
    #[error("Graphviz 'dot' command not found, please install Graphviz")]
    GraphvizNotFound,
    #[error("dot exited with {status}: {stderr}")]
    GraphvizFailed { status: String, stderr: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
