//! The walkable graph and its persistence document.

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::canonical_name;

/// Neighbor list per node. Real floor plans have low branching, so most
/// lists stay inline.
type Neighbors = SmallVec<[String; 4]>;

/// Undirected adjacency graph over location names.
///
/// Edges are stored canonically as sorted unordered pairs, so insertion is
/// idempotent regardless of which direction a corridor polyline was drawn
/// in. The adjacency table is symmetric by construction. The graph is
/// rebuilt wholesale on each ingestion, never incrementally mutated.
#[derive(Debug, Clone, Default)]
pub struct WalkGraph {
    adjacency: HashMap<String, Neighbors>,
    edges: HashSet<(String, String)>,
}

impl WalkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an undirected edge. Self-loops and duplicates are ignored.
    /// Returns true if the edge was new.
    pub fn insert_edge(&mut self, a: &str, b: &str) -> bool {
        if a == b {
            return false;
        }
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        if !self.edges.insert((lo.to_string(), hi.to_string())) {
            return false;
        }
        self.adjacency
            .entry_ref(a)
            .or_default()
            .push(b.to_string());
        self.adjacency
            .entry_ref(b)
            .or_default()
            .push(a.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// Neighbors of a node, in edge-insertion order.
    pub fn neighbors(&self, name: &str) -> Option<&[String]> {
        self.adjacency.get(name).map(|n| n.as_slice())
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Sorted node names.
    pub fn nodes(&self) -> Vec<&str> {
        let mut nodes: Vec<&str> = self.adjacency.keys().map(String::as_str).collect();
        nodes.sort_unstable();
        nodes
    }

    /// Canonical edge pairs, sorted for deterministic output.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        let mut edges: Vec<(&str, &str)> = self
            .edges
            .iter()
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect();
        edges.sort_unstable();
        edges
    }

    /// Serialize into the persistence document.
    pub fn to_doc(&self) -> GraphDoc {
        GraphDoc {
            nodes: self.nodes().into_iter().map(String::from).collect(),
            edges: self
                .edges()
                .into_iter()
                .map(|(from, to)| EdgeDoc {
                    from: from.to_string(),
                    to: to.to_string(),
                })
                .collect(),
        }
    }

    /// Rebuild from a persistence document, canonicalizing names.
    ///
    /// The node set is derived from the edges; names listed in `nodes` but
    /// appearing in no edge do not become graph nodes.
    pub fn from_doc(doc: &GraphDoc) -> Self {
        let mut graph = Self::new();
        for edge in &doc.edges {
            graph.insert_edge(&canonical_name(&edge.from), &canonical_name(&edge.to));
        }
        graph
    }
}

/// Graph persistence format:
/// `{ "nodes": [string, ...], "edges": [{"from": string, "to": string}, ...] }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDoc {
    pub nodes: Vec<String>,
    pub edges: Vec<EdgeDoc>,
}

/// One undirected edge in the persistence document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDoc {
    pub from: String,
    pub to: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_symmetry() {
        let mut g = WalkGraph::new();
        g.insert_edge("a", "b");
        g.insert_edge("b", "c");

        assert!(g.neighbors("a").unwrap().contains(&"b".to_string()));
        assert!(g.neighbors("b").unwrap().contains(&"a".to_string()));
        assert!(g.neighbors("b").unwrap().contains(&"c".to_string()));
        assert!(g.neighbors("c").unwrap().contains(&"b".to_string()));
    }

    #[test]
    fn test_dedup_is_direction_independent() {
        let mut g = WalkGraph::new();
        assert!(g.insert_edge("a", "b"));
        assert!(!g.insert_edge("b", "a"));
        assert!(!g.insert_edge("a", "b"));

        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.neighbors("a").unwrap().len(), 1);
        assert_eq!(g.neighbors("b").unwrap().len(), 1);
    }

    #[test]
    fn test_self_loop_ignored() {
        let mut g = WalkGraph::new();
        assert!(!g.insert_edge("a", "a"));
        assert!(g.is_empty());
    }

    #[test]
    fn test_doc_round_trip() {
        let mut g = WalkGraph::new();
        g.insert_edge("exit", "j1");
        g.insert_edge("j1", "a");

        let doc = g.to_doc();
        assert_eq!(doc.nodes, vec!["a", "exit", "j1"]);

        let rebuilt = WalkGraph::from_doc(&doc);
        assert_eq!(rebuilt.nodes(), g.nodes());
        assert_eq!(rebuilt.edges(), g.edges());
    }

    #[test]
    fn test_doc_json_shape() {
        let mut g = WalkGraph::new();
        g.insert_edge("a", "b");

        let json = serde_json::to_string(&g.to_doc()).unwrap();
        assert_eq!(json, r#"{"nodes":["a","b"],"edges":[{"from":"a","to":"b"}]}"#);
    }

    #[test]
    fn test_from_doc_canonicalizes() {
        let doc = GraphDoc {
            nodes: vec![],
            edges: vec![EdgeDoc {
                from: "Room 101".into(),
                to: " J1".into(),
            }],
        };
        let g = WalkGraph::from_doc(&doc);
        assert_eq!(g.nodes(), vec!["j1", "room 101"]);
    }

    proptest! {
        #[test]
        fn prop_symmetric_for_all_edges(edges in proptest::collection::vec(("[a-e]", "[a-e]"), 0..20)) {
            let mut g = WalkGraph::new();
            for (a, b) in &edges {
                g.insert_edge(a, b);
            }
            for node in g.nodes() {
                for neighbor in g.neighbors(node).unwrap() {
                    prop_assert!(
                        g.neighbors(neighbor).unwrap().iter().any(|n| n == node),
                        "edge {node}-{neighbor} is not symmetric"
                    );
                }
            }
        }
    }
}
