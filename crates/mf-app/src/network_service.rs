//! Network loading, building, and validation.

use std::path::Path;

use mf_graph::{DuplicateEdgePolicy, FlowNetwork, NetworkBuilder, Terminals};
use mf_project::NetworkDef;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Summary of a validated network for listing.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkSummary {
    pub name: String,
    pub node_count: usize,
    pub edge_count: usize,
    pub source: String,
    pub sink: String,
    pub total_capacity: f64,
}

/// Load a network definition, picking the format from the extension:
/// `.yaml`/`.yml`, `.json`, or `.txt` for the plain-text format.
pub fn load_network(path: &Path) -> AppResult<NetworkDef> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let def = match ext.as_deref() {
        Some("yaml" | "yml") => mf_project::load_yaml(path)?,
        Some("json") => mf_project::load_json(path)?,
        Some("txt") => mf_project::load_text(path)?,
        _ => {
            return Err(AppError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };
    debug!(path = %path.display(), nodes = def.nodes.len(), edges = def.edges.len(), "loaded network");
    Ok(def)
}

/// Build the immutable network, using `policy` for repeated edges.
pub fn build_network(def: &NetworkDef, policy: DuplicateEdgePolicy) -> AppResult<FlowNetwork> {
    let mut builder = NetworkBuilder::with_policy(policy);
    for label in &def.nodes {
        builder.add_node(label.as_str())?;
    }
    for edge in &def.edges {
        builder.add_edge(&edge.from, &edge.to, edge.capacity)?;
    }
    Ok(builder.build()?)
}

/// Pick and validate the terminals: explicit labels first, then the
/// definition's own, then the defaults.
pub fn resolve_terminals(
    def: &NetworkDef,
    network: &FlowNetwork,
    source: Option<&str>,
    sink: Option<&str>,
) -> AppResult<Terminals> {
    let source = source
        .or(def.source.as_deref())
        .or_else(|| def.default_source())
        .ok_or(AppError::MissingTerminal { which: "source" })?;
    let sink = sink
        .or(def.sink.as_deref())
        .or_else(|| def.default_sink(source))
        .ok_or(AppError::MissingTerminal { which: "sink" })?;
    Ok(network.validate(source, sink)?)
}

/// Build the network and check the terminals without solving.
pub fn validate_network(
    def: &NetworkDef,
    source: Option<&str>,
    sink: Option<&str>,
) -> AppResult<NetworkSummary> {
    let network = build_network(def, def.duplicate_edges.into())?;
    let terminals = resolve_terminals(def, &network, source, sink)?;
    Ok(NetworkSummary {
        name: def.name.clone(),
        node_count: network.node_count(),
        edge_count: network.edge_count(),
        source: network.label(terminals.source()).to_string(),
        sink: network.label(terminals.sink()).to_string(),
        total_capacity: network.total_capacity(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mf_graph::GraphError;
    use mf_project::EdgeDef;

    #[test]
    fn sample_validates() {
        let summary = validate_network(&NetworkDef::sample(), None, None).unwrap();
        assert_eq!(summary.node_count, 5);
        assert_eq!(summary.edge_count, 6);
        assert_eq!((summary.source.as_str(), summary.sink.as_str()), ("A", "E"));
        assert_eq!(summary.total_capacity, 60.0);
    }

    #[test]
    fn duplicate_edges_follow_policy() {
        let mut def = NetworkDef::sample();
        def.edges.push(EdgeDef::new("A", "B", 1.0));

        let err = build_network(&def, DuplicateEdgePolicy::Reject).unwrap_err();
        assert!(matches!(err, AppError::Graph(GraphError::DuplicateEdge { .. })));

        let net = build_network(&def, DuplicateEdgePolicy::LastWriteWins).unwrap();
        assert_eq!(net.edge_count(), 6);
        assert_eq!(net.edge_between("A", "B").unwrap().capacity, 1.0);
    }

    #[test]
    fn single_node_has_no_sink() {
        let def = NetworkDef::new("one", vec!["A".into()], vec![]);
        let err = validate_network(&def, None, None).unwrap_err();
        assert!(matches!(err, AppError::MissingTerminal { which: "sink" }));
        assert!(err.is_input_error());
    }

    #[test]
    fn unknown_extension() {
        let err = load_network(Path::new("net.csv")).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat { .. }));
    }
}
