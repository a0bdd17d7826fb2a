use gorph::{StyleConfig, Topology, parse_style, parse_topology, render, templates, validate};

fn assert_valid_dot(dot: &str, fixture: &str) {
    assert!(dot.starts_with("digraph Infrastructure {"), "{fixture}: missing digraph header");
    assert!(dot.ends_with("}\n"), "{fixture}: graph not closed");
    assert_eq!(
        dot.matches('{').count(),
        dot.matches('}').count(),
        "{fixture}: unbalanced braces"
    );
}

fn render_template(source: &str) -> (Topology, String) {
    let topology = parse_topology(source).expect("template parse failed");
    let dot = render(&topology, &StyleConfig::default());
    (topology, dot)
}

#[test]
fn render_all_templates() {
    let all = templates();
    assert!(!all.is_empty());
    for (name, source) in all {
        let (topology, dot) = render_template(source);
        assert!(validate(&topology).is_empty(), "{name}: template should validate");
        assert_valid_dot(&dot, name);
        assert_eq!(
            dot.matches(" -> ").count(),
            topology.connections.len(),
            "{name}: one edge per connection"
        );
        for entity in &topology.entities {
            assert!(dot.contains(&format!("<B>{}</B>", entity.id)), "{name}: missing {}", entity.id);
        }
    }
}

#[test]
fn single_entity_end_to_end() {
    let input = format!(
        "entities:\n  - id: Web\n    category: FRONTEND\n    description: {}\n    status: healthy\n",
        "x".repeat(30)
    );
    let topology = parse_topology(&input).unwrap();
    let dot = render(&topology, &StyleConfig::default());
    assert!(dot.contains("subgraph cluster_FRONTEND {\n    label=\"Frontend\";"));
    assert!(dot.contains("<TR><TD><B>Web</B></TD></TR>"));
    assert!(dot.contains(&format!("<TR><TD>{}...</TD></TR>", "x".repeat(24))));
    assert!(dot.contains("BGCOLOR=\"green\""));
}

#[test]
fn custom_style_end_to_end() {
    let style = parse_style(
        r#"
graph:
  direction: TB
  font_family: Fira Sans
connection_styles:
  DB_Connection:
    color: navy
    style: bold
node:
  status_bar_height: 4
tooltip:
  include_owner: false
  include_deployment: true
"#,
    )
    .unwrap();
    let topology = parse_topology(
        r#"
entities:
  - id: a-svc
    category: BACKEND
    description: Service A
    status: healthy
    owner: team-a
    deployment_config:
      replicas: 2
  - id: b-db
    category: DATABASE
    description: Database B
    status: degraded
connections:
  - from: a-svc
    to: b-db
    type: DB_Connection
"#,
    )
    .unwrap();

    let dot = render(&topology, &style);
    assert!(dot.contains("rankdir=TB;"));
    assert!(dot.contains("fontname=\"Fira Sans\""));
    assert!(dot.contains("a_svc -> b_db [label=\"DB_Connection\", color=navy, style=bold];"));
    assert!(dot.contains("HEIGHT=\"4\""));
    assert!(dot.contains("tooltip=\"a-svc: Service A\\nStatus: healthy\\nDeployment:\\nreplicas: 2\""));
    assert!(!dot.contains("Owner:"));
    assert!(dot.contains("BGCOLOR=\"yellow\""));
}

#[test]
fn invalid_topology_still_renders() {
    let topology = parse_topology(
        "entities:\n  - id: A\n  - id: A\nconnections:\n  - from: A\n    to: Ghost\n",
    )
    .unwrap();
    let errors = validate(&topology);
    assert!(errors.iter().any(|e| e == "Duplicate entity ID: A"));
    assert_eq!(errors.iter().filter(|e| e.contains("does not exist")).count(), 1);

    let dot = render(&topology, &StyleConfig::default());
    assert_valid_dot(&dot, "invalid");
    assert!(dot.contains("BGCOLOR=\"lightgray\""));
    assert!(dot.contains("  A -> Ghost [label=\"\"];"));
}
