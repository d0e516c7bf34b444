//! Report data types.

use serde::{Deserialize, Serialize};

/// One row of the report: an edge with its assigned flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub capacity: f64,
    pub flow: f64,
    pub saturated: bool,
}

/// Total flow plus one record per edge, in edge insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowReport {
    pub source: String,
    pub sink: String,
    pub total_flow: f64,
    pub edges: Vec<EdgeRecord>,
}

impl FlowReport {
    pub fn saturated_edges(&self) -> impl Iterator<Item = &EdgeRecord> {
        self.edges.iter().filter(|e| e.saturated)
    }

    pub fn edge(&self, from: &str, to: &str) -> Option<&EdgeRecord> {
        self.edges.iter().find(|e| e.from == from && e.to == to)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(from: &str, to: &str, capacity: f64, flow: f64, saturated: bool) -> EdgeRecord {
        EdgeRecord {
            from: from.into(),
            to: to.into(),
            capacity,
            flow,
            saturated,
        }
    }

    #[test]
    fn lookups() {
        let report = FlowReport {
            source: "A".into(),
            sink: "C".into(),
            total_flow: 2.0,
            edges: vec![record("A", "B", 2.0, 2.0, true), record("B", "C", 5.0, 2.0, false)],
        };

        let saturated: Vec<_> = report.saturated_edges().map(|e| e.to.as_str()).collect();
        assert_eq!(saturated, vec!["B"]);
        assert_eq!(report.edge("B", "C").unwrap().capacity, 5.0);
        assert!(report.edge("C", "B").is_none());
    }

    #[test]
    fn json_shape() {
        let report = FlowReport {
            source: "A".into(),
            sink: "B".into(),
            total_flow: 1.5,
            edges: vec![record("A", "B", 2.0, 1.5, false)],
        };
        let json = report.to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_flow"], 1.5);
        assert_eq!(value["edges"][0]["from"], "A");
        assert_eq!(value["edges"][0]["saturated"], false);
    }
}
