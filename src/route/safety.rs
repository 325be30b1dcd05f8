//! Hazard filtering and shortest-safe selection.

use hashbrown::{HashMap, HashSet};

use crate::model::{Point, Route};

/// True iff no node of `route` is in the hazard set.
///
/// Membership is exact canonical-name match; normalization happens at the
/// query boundary, not here.
pub fn is_safe(route: &Route, hazards: &HashSet<String>) -> bool {
    route.nodes.iter().all(|node| !hazards.contains(node))
}

/// The shortest route by total Euclidean length over `positions`.
///
/// Ties break by enumeration order: only a strictly shorter route replaces
/// the current best, so the first minimum wins. Returns `None` for an
/// empty candidate list.
pub fn pick_shortest(routes: Vec<Route>, positions: &HashMap<String, Point>) -> Option<Route> {
    let mut best: Option<(Route, f64)> = None;
    for route in routes {
        let distance = route.total_distance_cm(positions);
        match &best {
            Some((_, best_distance)) if distance >= *best_distance => {}
            _ => best = Some((route, distance)),
        }
    }
    best.map(|(route, _)| route)
}
