//! Per-segment step synthesis.

use hashbrown::HashMap;

use crate::model::{Bearing, Point, Route, RouteStep, Vec2};

/// Signed angle from `v1` to `v2` in degrees, normalized to [0, 360).
pub(crate) fn signed_angle_deg(v1: Vec2, v2: Vec2) -> f64 {
    v1.cross(v2).atan2(v1.dot(v2)).to_degrees().rem_euclid(360.0)
}

/// Convert an ordered route into per-segment steps.
///
/// The leading segment carries no bearing (there is no prior heading to
/// turn from). Every later segment's bearing comes from the signed angle
/// between the incoming movement vector (previous → current) and the
/// outgoing one (current → next). Segments whose endpoints lack positions
/// are skipped rather than failing.
pub fn describe_route(route: &Route, positions: &HashMap<String, Point>) -> Vec<RouteStep> {
    let nodes = &route.nodes;
    let mut steps = Vec::with_capacity(nodes.len().saturating_sub(1));

    for i in 0..nodes.len().saturating_sub(1) {
        let (a, b) = (&nodes[i], &nodes[i + 1]);
        let (Some(pos_a), Some(pos_b)) = (
            positions.get(a).copied(),
            positions.get(b).copied(),
        ) else {
            continue;
        };

        let bearing = if i == 0 {
            None
        } else {
            positions.get(&nodes[i - 1]).map(|&prev| {
                let incoming = prev.vector_to(pos_a);
                let outgoing = pos_a.vector_to(pos_b);
                Bearing::classify(signed_angle_deg(incoming, outgoing))
            })
        };

        steps.push(RouteStep {
            from: a.clone(),
            to: b.clone(),
            bearing,
            distance_m: pos_a.distance_to(pos_b) / 100.0,
        });
    }

    steps
}
