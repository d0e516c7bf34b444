//! Name-based lookup.
//!
//! Maps node labels to `NodeId`s and ordered endpoint pairs to `EdgeId`s so
//! that the builder can detect duplicates and callers can address the
//! network by label in O(1).

use std::collections::HashMap;

use mf_core::{EdgeId, NodeId};

/// Bidirectional label/pair index for a network.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    by_label: HashMap<String, NodeId>,
    by_pair: HashMap<(NodeId, NodeId), EdgeId>,
}

impl LabelIndex {
    /// Register a label. Returns false if it was already present.
    pub fn insert_node(&mut self, label: &str, id: NodeId) -> bool {
        if self.by_label.contains_key(label) {
            return false;
        }
        self.by_label.insert(label.to_string(), id);
        true
    }

    /// Register an ordered pair. Returns the existing edge if there is one.
    pub fn insert_edge(&mut self, from: NodeId, to: NodeId, id: EdgeId) -> Option<EdgeId> {
        match self.by_pair.get(&(from, to)) {
            Some(&existing) => Some(existing),
            None => {
                self.by_pair.insert((from, to), id);
                None
            }
        }
    }

    pub fn node(&self, label: &str) -> Option<NodeId> {
        self.by_label.get(label).copied()
    }

    pub fn edge(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        self.by_pair.get(&(from, to)).copied()
    }
}
