//! Off-path landmark detection and named waypoints.

use hashbrown::HashMap;

use crate::model::{Point, is_junction_name};

/// Human-meaningful waypoints called out by name when the route passes
/// through them (canonical form). Junction names never qualify.
pub const NAMED_PLACES: &[&str] = &["lobby", "store room", "emergency exit", "main exit"];

pub fn is_named_place(name: &str) -> bool {
    !is_junction_name(name) && NAMED_PLACES.contains(&name)
}

/// Which side of the walking direction a landmark sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Side::Left => "left",
            Side::Right => "right",
        })
    }
}

/// A room passed alongside a movement segment.
#[derive(Debug, Clone, PartialEq)]
pub struct PassedRoom {
    pub name: String,
    pub side: Side,
}

/// Rooms lying within `band_cm` of the segment `a → b`.
///
/// Candidates are the room-named locations (name-prefix convention),
/// excluding the segment's own destination. Each candidate is projected
/// onto the segment's direction vector; projections outside [0, length]
/// are discarded, the rest are kept when their perpendicular distance is
/// within the band. The side comes from the sign of the 2-D cross product
/// (positive → left). A zero-length segment yields nothing.
pub fn rooms_alongside(
    a: Point,
    b: Point,
    positions: &HashMap<String, Point>,
    dest: &str,
    band_cm: f64,
) -> Vec<PassedRoom> {
    let movement = a.vector_to(b);
    let length = movement.norm();
    if length == 0.0 {
        return Vec::new();
    }
    let (ux, uy) = (movement.x / length, movement.y / length);

    let mut candidates: Vec<&str> = positions
        .keys()
        .filter(|name| name.starts_with("room"))
        .map(String::as_str)
        .collect();
    candidates.sort_unstable();

    let mut nearby = Vec::new();
    for name in candidates {
        if name == dest {
            continue;
        }
        let room = positions[name];
        let rel = a.vector_to(room);
        let projection = rel.x * ux + rel.y * uy;
        if projection < 0.0 || projection > length {
            continue;
        }
        let closest = Point::new(a.x + projection * ux, a.y + projection * uy);
        if closest.distance_to(room) <= band_cm {
            let side = if movement.cross(rel) > 0.0 {
                Side::Left
            } else {
                Side::Right
            };
            nearby.push(PassedRoom {
                name: name.to_string(),
                side,
            });
        }
    }
    nearby
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions() -> HashMap<String, Point> {
        let mut p = HashMap::new();
        p.insert("room 1".to_string(), Point::new(250.0, 100.0));
        p.insert("room 2".to_string(), Point::new(250.0, -100.0));
        p.insert("room far".to_string(), Point::new(250.0, 400.0));
        p.insert("room behind".to_string(), Point::new(-100.0, 50.0));
        p.insert("lobby".to_string(), Point::new(250.0, 50.0));
        p
    }

    #[test]
    fn test_side_from_cross_sign() {
        let passed = rooms_alongside(
            Point::new(0.0, 0.0),
            Point::new(500.0, 0.0),
            &positions(),
            "exit",
            150.0,
        );
        assert_eq!(
            passed,
            vec![
                PassedRoom { name: "room 1".to_string(), side: Side::Left },
                PassedRoom { name: "room 2".to_string(), side: Side::Right },
            ]
        );
    }

    #[test]
    fn test_band_and_projection_limits() {
        let passed = rooms_alongside(
            Point::new(0.0, 0.0),
            Point::new(500.0, 0.0),
            &positions(),
            "exit",
            150.0,
        );
        let names: Vec<&str> = passed.iter().map(|p| p.name.as_str()).collect();
        // 400 cm off-axis is beyond the band; a projection behind the start
        // is discarded; non-room names are never candidates.
        assert!(!names.contains(&"room far"));
        assert!(!names.contains(&"room behind"));
        assert!(!names.contains(&"lobby"));
    }

    #[test]
    fn test_destination_excluded() {
        let passed = rooms_alongside(
            Point::new(0.0, 0.0),
            Point::new(500.0, 0.0),
            &positions(),
            "room 1",
            150.0,
        );
        assert!(passed.iter().all(|p| p.name != "room 1"));
    }

    #[test]
    fn test_zero_length_segment() {
        let at = Point::new(250.0, 100.0);
        assert!(rooms_alongside(at, at, &positions(), "exit", 150.0).is_empty());
    }

    #[test]
    fn test_named_places() {
        assert!(is_named_place("lobby"));
        assert!(is_named_place("main exit"));
        assert!(!is_named_place("room 1"));
        assert!(!is_named_place("j1"));
    }
}
