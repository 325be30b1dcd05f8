//! Exhaustive simple-path enumeration.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::model::{Route, WalkGraph};

/// Bounds on the exhaustive search.
///
/// Path enumeration is combinatorial in graph branching, so the caller's
/// request budget has to bound it. Real floor plans are tens of nodes with
/// low branching; the defaults sit far above anything a legitimate layout
/// produces while keeping adversarial graphs from running away.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SearchCaps {
    /// Maximum nodes on any explored path prefix (the terminal node may add
    /// one more).
    pub max_path_len: usize,
    /// Maximum number of routes collected before the search stops.
    pub max_routes: usize,
}

impl Default for SearchCaps {
    fn default() -> Self {
        Self {
            max_path_len: 32,
            max_routes: 4096,
        }
    }
}

/// All simple paths from `start` to `end`, in depth-first discovery order.
///
/// Iterative DFS with an on-path marker and explicit backtracking — no
/// per-branch copies of visited state. Endpoints absent from the graph
/// yield an empty list; `start == end` yields exactly the trivial
/// one-node route.
pub fn find_all_paths<'g>(
    graph: &'g WalkGraph,
    start: &'g str,
    end: &str,
    caps: &SearchCaps,
) -> Vec<Route> {
    if !graph.contains(start) || !graph.contains(end) {
        return Vec::new();
    }
    if start == end {
        return vec![Route::single(start)];
    }

    let mut routes = Vec::new();
    let mut path: Vec<&str> = vec![start];
    let mut on_path: HashSet<&str> = HashSet::new();
    on_path.insert(start);
    // One frame per path node: (node, next neighbor index to try).
    let mut stack: Vec<(&'g str, usize)> = vec![(start, 0)];

    while let Some(frame) = stack.last_mut() {
        let node = frame.0;
        let idx = frame.1;
        frame.1 += 1;

        let next = graph.neighbors(node).and_then(|n| n.get(idx));
        let Some(next) = next else {
            // Neighbors exhausted: backtrack.
            stack.pop();
            if let Some(done) = path.pop() {
                on_path.remove(done);
            }
            continue;
        };
        let next = next.as_str();

        if on_path.contains(next) {
            continue;
        }
        if next == end {
            let mut nodes: Vec<String> = path.iter().map(|n| n.to_string()).collect();
            nodes.push(next.to_string());
            routes.push(Route::from(nodes));
            if routes.len() >= caps.max_routes {
                break;
            }
            continue;
        }
        if path.len() >= caps.max_path_len {
            continue;
        }

        path.push(next);
        on_path.insert(next);
        stack.push((next, 0));
    }

    routes
}
