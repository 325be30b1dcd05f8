//! Room outlines and buffered containment.

use geo::{EuclideanDistance, LineString, Polygon};

use crate::model::Point;

/// A room's polygon together with its representative point.
///
/// The representative point is the arithmetic centroid of the vertices
/// (not the area centroid), matching how the rest of the pipeline treats
/// room coordinates.
#[derive(Debug, Clone)]
pub struct RoomOutline {
    pub name: String,
    pub points: Vec<Point>,
    pub centroid: Point,
    /// Absent when the outline has fewer than 3 vertices; such outlines
    /// contain nothing.
    polygon: Option<Polygon<f64>>,
}

impl RoomOutline {
    /// Build an outline from an ordered vertex list. Returns `None` when
    /// there are no vertices at all (a room with no geometry is dropped).
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let n = points.len() as f64;
        let centroid = Point::new(
            points.iter().map(|p| p.x).sum::<f64>() / n,
            points.iter().map(|p| p.y).sum::<f64>() / n,
        );
        let polygon = (points.len() >= 3).then(|| {
            let ring: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
            Polygon::new(LineString::from(ring), vec![])
        });
        Some(Self {
            name: name.into(),
            points,
            centroid,
            polygon,
        })
    }

    /// Whether `p` lies within the outline expanded by `buffer_cm`.
    ///
    /// Interior points are at distance zero from the polygon, so one
    /// distance test covers both containment and the buffer ring.
    pub fn contains_buffered(&self, p: Point, buffer_cm: f64) -> bool {
        match &self.polygon {
            Some(polygon) => polygon.euclidean_distance(&geo::Point::new(p.x, p.y)) <= buffer_cm,
            None => false,
        }
    }
}
