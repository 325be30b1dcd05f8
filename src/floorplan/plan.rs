//! Geometry extraction: raw elements → named positions, room outlines,
//! corridor polylines, and hazard-equipment markers.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::element::{ElementTag, FloorElement};
use super::outline::RoomOutline;
use crate::model::{Location, LocationKind, Point, canonical_name, is_junction_name};

/// Fire-safety equipment marker names (canonical form). These are tracked
/// for responders but never become walkable-graph candidates.
const HAZARD_EQUIPMENT_NAMES: &[&str] = &["fireextinguisher"];

/// Geometry thresholds, in centimeters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Buffer around room polygons when identifying corridor vertices.
    pub room_buffer_cm: f64,
    /// Radius around point locations when identifying corridor vertices.
    pub marker_radius_cm: f64,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            room_buffer_cm: 20.0,
            marker_radius_cm: 100.0,
        }
    }
}

/// A corridor polyline: ordered vertices, never a location itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
}

/// Everything extracted from one floor-plan element document.
///
/// `rooms` and `markers` keep document order, which makes corridor-vertex
/// identification deterministic. `positions` covers every named location
/// (room centroids plus marker coordinates).
#[derive(Debug, Clone, Default)]
pub struct FloorPlan {
    pub rooms: Vec<RoomOutline>,
    pub markers: Vec<Location>,
    pub corridors: Vec<Polyline>,
    pub hazard_equipment: Vec<Location>,
    positions: HashMap<String, Point>,
}

impl FloorPlan {
    pub fn position(&self, name: &str) -> Option<Point> {
        self.positions.get(name).copied()
    }

    pub fn positions(&self) -> &HashMap<String, Point> {
        &self.positions
    }

    /// Sorted canonical names of all locations.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.positions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Extract positions, room outlines and corridors from parsed elements.
///
/// Elements whose derived name is empty are dropped silently. Names are
/// canonicalized here, at the single normalization boundary for floor-plan
/// input.
pub fn extract(elements: &[FloorElement]) -> FloorPlan {
    let mut plan = FloorPlan::default();

    for element in elements {
        match element.tag {
            ElementTag::Room => {
                let name = canonical_name(element.name());
                if name.is_empty() {
                    continue;
                }
                let Some(outline) = RoomOutline::new(name.clone(), element.child_points()) else {
                    continue;
                };
                plan.positions.insert(name, outline.centroid);
                plan.rooms.push(outline);
            }
            ElementTag::Polyline => {
                let points = element.child_points();
                if points.len() >= 2 {
                    plan.corridors.push(Polyline { points });
                }
            }
            ElementTag::PieceOfFurniture | ElementTag::DoorOrWindow => {
                let name = canonical_name(element.name());
                if name.is_empty() {
                    continue;
                }
                let position = Point::new(
                    element.coord("x").unwrap_or(0.0),
                    element.coord("y").unwrap_or(0.0),
                );
                let kind = classify_marker(element.tag, &name);
                let location = Location::new(name.clone(), position, kind);
                if kind == LocationKind::HazardEquipment {
                    plan.hazard_equipment.push(location);
                } else {
                    plan.positions.insert(name, position);
                    plan.markers.push(location);
                }
            }
            ElementTag::Other => {}
        }
    }

    debug!(
        rooms = plan.rooms.len(),
        markers = plan.markers.len(),
        corridors = plan.corridors.len(),
        hazard_equipment = plan.hazard_equipment.len(),
        "extracted floor plan"
    );
    plan
}

fn classify_marker(tag: ElementTag, name: &str) -> LocationKind {
    if HAZARD_EQUIPMENT_NAMES.contains(&name) {
        return LocationKind::HazardEquipment;
    }
    if is_junction_name(name) {
        return LocationKind::Junction;
    }
    if name.contains("exit") {
        return LocationKind::Exit;
    }
    match tag {
        ElementTag::DoorOrWindow => LocationKind::Door,
        _ => LocationKind::Furniture,
    }
}
