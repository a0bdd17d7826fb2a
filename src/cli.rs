use crate::config::load_style;
use crate::model::{Topology, parse_topology};
use crate::render::{render_dot, write_output_dot, write_output_png};
use crate::templates::{template, templates};
use crate::validate::validate;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "gorph",
    version,
    about = "Infrastructure visualization: topology YAML to Graphviz DOT",
    after_help = "Examples:\n  \
        gorph -i infra.yml                        # DOT to stdout\n  \
        gorph -i infra.yml -o out.dot             # DOT to file\n  \
        gorph -i infra.yml --png diagram.png      # PNG via Graphviz\n  \
        gorph -i infra.yml | dot -Tpng > out.png  # pipe to Graphviz"
)]
pub struct Args {
    /// Topology YAML file, or '-' for stdin
    #[arg(short = 'i', long = "input", conflicts_with = "template")]
    pub input: Option<PathBuf>,

    /// Style YAML file. Built-in defaults when omitted.
    #[arg(short = 's', long = "style")]
    pub style: Option<PathBuf>,

    /// Output DOT file. Defaults to stdout unless --png is given.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Render a PNG with Graphviz `dot`
    #[arg(long = "png")]
    pub png: Option<PathBuf>,

    /// Render a built-in template instead of an input file
    #[arg(short = 't', long = "template")]
    pub template: Option<String>,

    /// List built-in templates and exit
    #[arg(long = "list-templates")]
    pub list_templates: bool,

    /// Refuse to render when the topology has validation errors
    #[arg(long = "validate")]
    pub validate: bool,

    /// Only validate the topology; exit non-zero on errors
    #[arg(long = "check", conflicts_with_all = ["output", "png"])]
    pub check: bool,
}

pub fn run() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    if args.list_templates {
        for name in templates().keys() {
            println!("{name}");
        }
        return Ok(());
    }

    let style = load_style(args.style.as_deref()).context("loading style config")?;
    let topology = read_topology(&args)?;

    if args.check || args.validate {
        let errors = validate(&topology);
        if !errors.is_empty() {
            for error in &errors {
                eprintln!("{error}");
            }
            anyhow::bail!("topology has {} validation error(s)", errors.len());
        }
        if args.check {
            eprintln!("Topology is valid");
            return Ok(());
        }
    }

    let dot = render_dot(&topology, &style);

    if args.output.is_some() || args.png.is_none() {
        write_output_dot(&dot, args.output.as_deref())?;
        if let Some(path) = &args.output {
            eprintln!("Graphviz DOT file generated: {}", path.display());
        }
    }

    if let Some(path) = &args.png {
        write_output_png(&dot, path)?;
        eprintln!("PNG diagram generated: {}", path.display());
    }

    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn read_topology(args: &Args) -> Result<Topology> {
    if let Some(name) = &args.template {
        info!(template = %name, "rendering built-in template");
        return Ok(parse_topology(template(name)?)?);
    }
    let input = read_input(args.input.as_deref())?;
    let topology = parse_topology(&input).context("reading infrastructure YAML")?;
    Ok(topology)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()));
        }
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
