//! Network file schema.

use mf_graph::DuplicateEdgePolicy;
use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

/// A network as stored on disk (YAML or JSON) or parsed from text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkDef {
    pub version: u32,
    #[serde(default)]
    pub name: String,
    pub nodes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sink: Option<String>,
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
    #[serde(default, skip_serializing_if = "DuplicateEdgesDef::is_reject")]
    pub duplicate_edges: DuplicateEdgesDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeDef {
    pub from: String,
    pub to: String,
    pub capacity: f64,
}

impl EdgeDef {
    pub fn new(from: impl Into<String>, to: impl Into<String>, capacity: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            capacity,
        }
    }
}

/// How a repeated `from -> to` pair is treated when the network is built.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateEdgesDef {
    #[default]
    Reject,
    LastWriteWins,
}

impl DuplicateEdgesDef {
    fn is_reject(&self) -> bool {
        matches!(self, DuplicateEdgesDef::Reject)
    }
}

impl From<DuplicateEdgesDef> for DuplicateEdgePolicy {
    fn from(def: DuplicateEdgesDef) -> Self {
        match def {
            DuplicateEdgesDef::Reject => DuplicateEdgePolicy::Reject,
            DuplicateEdgesDef::LastWriteWins => DuplicateEdgePolicy::LastWriteWins,
        }
    }
}

impl NetworkDef {
    pub fn new(name: impl Into<String>, nodes: Vec<String>, edges: Vec<EdgeDef>) -> Self {
        Self {
            version: LATEST_VERSION,
            name: name.into(),
            nodes,
            source: None,
            sink: None,
            edges,
            duplicate_edges: DuplicateEdgesDef::Reject,
        }
    }

    /// Five-node demo network, source A, sink E. Maximum flow 15.
    pub fn sample() -> Self {
        let nodes = ["A", "B", "C", "D", "E"].map(String::from).to_vec();
        let edges = vec![
            EdgeDef::new("A", "B", 10.0),
            EdgeDef::new("A", "C", 5.0),
            EdgeDef::new("B", "C", 15.0),
            EdgeDef::new("B", "D", 10.0),
            EdgeDef::new("C", "E", 10.0),
            EdgeDef::new("D", "E", 10.0),
        ];
        Self {
            source: Some("A".into()),
            sink: Some("E".into()),
            ..Self::new("default", nodes, edges)
        }
    }

    /// Source used when none is given: the first node.
    pub fn default_source(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    /// Sink used when none is given: the first node other than `source`.
    pub fn default_sink(&self, source: &str) -> Option<&str> {
        self.nodes.iter().map(String::as_str).find(|n| *n != source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_terminals() {
        let def = NetworkDef::sample();
        assert_eq!(def.default_source(), Some("A"));
        assert_eq!(def.default_sink("A"), Some("B"));
        assert_eq!(def.default_sink("B"), Some("A"));

        let one = NetworkDef::new("one", vec!["A".into()], vec![]);
        assert_eq!(one.default_sink("A"), None);
    }

    #[test]
    fn policy_parses_snake_case() {
        let yaml = "version: 1\nnodes: [a, b]\nduplicate_edges: last_write_wins\n";
        let def: NetworkDef = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(def.duplicate_edges, DuplicateEdgesDef::LastWriteWins);
        assert_eq!(
            DuplicateEdgePolicy::from(def.duplicate_edges),
            DuplicateEdgePolicy::LastWriteWins
        );
        assert!(def.edges.is_empty());
    }
}
