//! Route — an ordered path of distinct location names.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::Point;

/// A simple path through the walkable graph: first node is the start, last
/// is the end, no node repeats, every consecutive pair is a graph edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub nodes: Vec<String>,
}

impl Route {
    pub fn single(node: impl Into<String>) -> Self {
        Self {
            nodes: vec![node.into()],
        }
    }

    pub fn start(&self) -> &str {
        self.nodes.first().expect("Route always has at least one node")
    }

    pub fn end(&self) -> &str {
        self.nodes.last().expect("Route always has at least one node")
    }

    /// Number of nodes on the route.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.iter().any(|n| n == name)
    }

    /// Total straight-line length in centimeters, summed over consecutive
    /// pairs. Pairs whose positions are unknown contribute nothing.
    pub fn total_distance_cm(&self, positions: &HashMap<String, Point>) -> f64 {
        self.nodes
            .windows(2)
            .filter_map(|pair| {
                let a = positions.get(&pair[0])?;
                let b = positions.get(&pair[1])?;
                Some(a.distance_to(*b))
            })
            .sum()
    }

    /// Total length in meters, reported to one decimal place.
    pub fn total_distance_m(&self, positions: &HashMap<String, Point>) -> f64 {
        (self.total_distance_cm(positions) / 100.0 * 10.0).round() / 10.0
    }
}

impl From<Vec<String>> for Route {
    fn from(nodes: Vec<String>) -> Self {
        Self { nodes }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.nodes.join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions() -> HashMap<String, Point> {
        let mut p = HashMap::new();
        p.insert("a".to_string(), Point::new(0.0, 0.0));
        p.insert("j1".to_string(), Point::new(500.0, 0.0));
        p.insert("exit".to_string(), Point::new(500.0, 500.0));
        p
    }

    #[test]
    fn test_total_distance() {
        let route = Route::from(vec!["a".to_string(), "j1".to_string(), "exit".to_string()]);
        assert_eq!(route.total_distance_cm(&positions()), 1000.0);
        assert_eq!(route.total_distance_m(&positions()), 10.0);
    }

    #[test]
    fn test_unknown_positions_contribute_nothing() {
        let route = Route::from(vec!["a".to_string(), "ghost".to_string(), "j1".to_string()]);
        assert_eq!(route.total_distance_cm(&positions()), 0.0);
    }

    #[test]
    fn test_display() {
        let route = Route::from(vec!["a".to_string(), "j1".to_string()]);
        assert_eq!(route.to_string(), "a -> j1");
    }
}
