//! External floor-plan element document.
//!
//! The upstream converter flattens a home-design XML file into an ordered
//! JSON array of records:
//!
//! ```json
//! [{
//!   "tag": "room",
//!   "attributes": { "name": "Room 101" },
//!   "children": [{ "attributes": { "x": "12.5", "y": "40.0" } }]
//! }]
//! ```
//!
//! Attribute values — including coordinates — arrive as strings, in
//! centimeter units. Tags the core does not handle (walls, labels, ...)
//! are tolerated and ignored.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::model::Point;

/// Element tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementTag {
    #[serde(rename = "room")]
    Room,
    #[serde(rename = "polyline")]
    Polyline,
    #[serde(rename = "pieceOfFurniture")]
    PieceOfFurniture,
    #[serde(rename = "doorOrWindow")]
    DoorOrWindow,
    #[serde(other)]
    Other,
}

/// A child point record carrying `x`/`y` attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl PointRecord {
    pub fn new(x: f64, y: f64) -> Self {
        let mut attributes = HashMap::new();
        attributes.insert("x".to_string(), x.to_string());
        attributes.insert("y".to_string(), y.to_string());
        Self { attributes }
    }

    /// The record's coordinate, if both attributes parse.
    pub fn point(&self) -> Option<Point> {
        Some(Point::new(self.coord("x")?, self.coord("y")?))
    }

    fn coord(&self, key: &str) -> Option<f64> {
        self.attributes.get(key).and_then(|v| v.parse().ok())
    }
}

/// One parsed floor-plan element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorElement {
    pub tag: ElementTag,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    #[serde(default)]
    pub children: Vec<PointRecord>,
}

impl FloorElement {
    /// A room with its polygon vertices.
    pub fn room(name: &str, points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self {
            tag: ElementTag::Room,
            attributes: named(name),
            children: points
                .into_iter()
                .map(|(x, y)| PointRecord::new(x, y))
                .collect(),
        }
    }

    /// A corridor polyline with its ordered vertices.
    pub fn polyline(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self {
            tag: ElementTag::Polyline,
            attributes: HashMap::new(),
            children: points
                .into_iter()
                .map(|(x, y)| PointRecord::new(x, y))
                .collect(),
        }
    }

    /// A furniture marker at a coordinate.
    pub fn furniture(name: &str, x: f64, y: f64) -> Self {
        Self::marker(ElementTag::PieceOfFurniture, name, x, y)
    }

    /// A door or window marker at a coordinate.
    pub fn door(name: &str, x: f64, y: f64) -> Self {
        Self::marker(ElementTag::DoorOrWindow, name, x, y)
    }

    fn marker(tag: ElementTag, name: &str, x: f64, y: f64) -> Self {
        let mut attributes = named(name);
        attributes.insert("x".to_string(), x.to_string());
        attributes.insert("y".to_string(), y.to_string());
        Self {
            tag,
            attributes,
            children: Vec::new(),
        }
    }

    /// The element's own name attribute, raw (not yet canonical).
    pub fn name(&self) -> &str {
        self.attributes.get("name").map(String::as_str).unwrap_or("")
    }

    /// The element's own coordinate attribute as f64.
    pub fn coord(&self, key: &str) -> Option<f64> {
        self.attributes.get(key).and_then(|v| v.parse().ok())
    }

    /// Child coordinates, in order, skipping records that fail to parse.
    pub fn child_points(&self) -> Vec<Point> {
        self.children.iter().filter_map(PointRecord::point).collect()
    }
}

fn named(name: &str) -> HashMap<String, String> {
    let mut attributes = HashMap::new();
    attributes.insert("name".to_string(), name.to_string());
    attributes
}

/// Parse an element document (JSON array) into elements.
pub fn parse_elements(json: &str) -> Result<Vec<FloorElement>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_string_coordinates() {
        let json = r#"[
            {"tag": "room", "attributes": {"name": "Room 1"},
             "children": [{"attributes": {"x": "0.0", "y": "0.0"}},
                          {"attributes": {"x": "400.5", "y": "0.0"}}]},
            {"tag": "pieceOfFurniture", "attributes": {"name": "J1", "x": "120", "y": "80.25"}}
        ]"#;
        let elements = parse_elements(json).unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(
            elements[0].child_points(),
            vec![Point::new(0.0, 0.0), Point::new(400.5, 0.0)]
        );
        assert_eq!(elements[1].coord("x"), Some(120.0));
        assert_eq!(elements[1].coord("y"), Some(80.25));
    }

    #[test]
    fn test_unknown_tags_tolerated() {
        let json = r#"[{"tag": "wall", "attributes": {"id": "w1"}}]"#;
        let elements = parse_elements(json).unwrap();
        assert_eq!(elements[0].tag, ElementTag::Other);
    }

    #[test]
    fn test_missing_fields_default() {
        let json = r#"[{"tag": "polyline"}]"#;
        let elements = parse_elements(json).unwrap();
        assert!(elements[0].attributes.is_empty());
        assert!(elements[0].children.is_empty());
    }

    #[test]
    fn test_malformed_point_records_skipped() {
        let el = FloorElement {
            tag: ElementTag::Room,
            attributes: HashMap::new(),
            children: vec![
                PointRecord::new(1.0, 2.0),
                PointRecord::default(),
            ],
        };
        assert_eq!(el.child_points(), vec![Point::new(1.0, 2.0)]);
    }
}
