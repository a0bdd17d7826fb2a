#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod escape;
pub mod group;
pub mod ident;
pub mod label;
pub mod model;
pub mod render;
pub mod templates;
pub mod validate;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{StyleConfig, load_style, parse_style};
pub use error::GorphError;
pub use model::{Connection, Entity, Topology, load_topology, parse_topology};
pub use render::render_dot;
pub use templates::{template, templates};
pub use validate::{ValidationReport, validate};

/// Renders a topology with the given style. Never fails.
pub fn render(topology: &Topology, style: &StyleConfig) -> String {
    render_dot(topology, style)
}
