//! # Graph Builder
//!
//! Matches corridor polylines against extracted locations and produces the
//! undirected walkable graph.
//!
//! Corridors are drawn as freeform polylines that may clip through several
//! rooms and markers. The identify-then-connect strategy walks each
//! polyline's vertices in order, resolves each vertex to the location it is
//! "at", and connects consecutive distinct resolutions. Vertices that fall
//! between recognizable locations are simply skipped — no edge is inferred,
//! and nothing fails.

use tracing::debug;

use crate::floorplan::{ExtractConfig, FloorPlan};
use crate::model::{Point, WalkGraph};

/// Build the undirected walkable graph from a floor plan.
///
/// A polyline with no two distinct consecutive identified vertices
/// contributes no edges. Edges are deduplicated as canonical unordered
/// pairs across all polylines; the node set is exactly the names that
/// appear in at least one edge.
pub fn build_graph(plan: &FloorPlan, cfg: &ExtractConfig) -> WalkGraph {
    let mut graph = WalkGraph::new();

    for corridor in &plan.corridors {
        let mut last: Option<&str> = None;
        for &vertex in &corridor.points {
            let Some(hit) = identify(plan, vertex, cfg) else {
                continue;
            };
            if last != Some(hit) {
                if let Some(prev) = last {
                    graph.insert_edge(prev, hit);
                }
                last = Some(hit);
            }
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built walkable graph"
    );
    graph
}

/// Which location a corridor vertex is "at": rooms first (polygon expanded
/// by the room buffer), then point markers by proximity. Document order
/// decides among overlapping candidates.
fn identify<'p>(plan: &'p FloorPlan, vertex: Point, cfg: &ExtractConfig) -> Option<&'p str> {
    for room in &plan.rooms {
        if room.contains_buffered(vertex, cfg.room_buffer_cm) {
            return Some(&room.name);
        }
    }
    for marker in &plan.markers {
        if vertex.distance_to(marker.position) <= cfg.marker_radius_cm {
            return Some(&marker.name);
        }
    }
    None
}
