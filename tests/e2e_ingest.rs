//! End-to-end tests for raw element-document ingestion: JSON elements ->
//! geometry extraction -> graph building -> route -> instructions, with no
//! prebuilt graph document.

use evac_rs::{Error, LayoutDocuments, MemorySource, RoutePlanner, RouteQuery};

/// One hallway running east past two junctions and the lobby, then turning
/// south to the main exit. Room 102 sits alongside the first junction leg.
///
/// ```text
/// room 101 -- j1 --[room 102]-- j2 -- lobby
///                                       |
///                                   main exit
/// ```
const ELEMENTS_JSON: &str = r#"[
  {"tag": "room", "attributes": {"name": "Room 101"}, "children": [
    {"attributes": {"x": "0", "y": "0"}},
    {"attributes": {"x": "400", "y": "0"}},
    {"attributes": {"x": "400", "y": "400"}},
    {"attributes": {"x": "0", "y": "400"}}]},
  {"tag": "room", "attributes": {"name": "Room 102"}, "children": [
    {"attributes": {"x": "700", "y": "280"}},
    {"attributes": {"x": "1000", "y": "280"}},
    {"attributes": {"x": "1000", "y": "380"}},
    {"attributes": {"x": "700", "y": "380"}}]},
  {"tag": "pieceOfFurniture", "attributes": {"name": "J1", "x": "600", "y": "200"}},
  {"tag": "pieceOfFurniture", "attributes": {"name": "J2", "x": "1100", "y": "200"}},
  {"tag": "pieceOfFurniture", "attributes": {"name": "Lobby", "x": "1600", "y": "200"}},
  {"tag": "doorOrWindow", "attributes": {"name": "Main Exit", "x": "1600", "y": "700"}},
  {"tag": "pieceOfFurniture", "attributes": {"name": "fireExtinguisher", "x": "300", "y": "100"}},
  {"tag": "wall", "attributes": {"id": "w1"}},
  {"tag": "polyline", "children": [
    {"attributes": {"x": "200", "y": "200"}},
    {"attributes": {"x": "600", "y": "200"}},
    {"attributes": {"x": "1100", "y": "200"}},
    {"attributes": {"x": "1600", "y": "200"}},
    {"attributes": {"x": "1600", "y": "700"}}]}
]"#;

fn hallway_planner() -> RoutePlanner<MemorySource> {
    let source = MemorySource::new();
    source.insert(
        "head office",
        LayoutDocuments::from_json(ELEMENTS_JSON, None).unwrap(),
    );
    RoutePlanner::new(source)
}

// ============================================================================
// 1. Graph derived from corridors
// ============================================================================

#[test]
fn test_graph_built_from_polyline() {
    let planner = hallway_planner();
    let layout = planner.store().layout("head office").unwrap();

    // room 102 is never touched by the corridor, so it is not a node.
    assert_eq!(
        layout.graph.nodes(),
        vec!["j1", "j2", "lobby", "main exit", "room 101"]
    );
    assert_eq!(layout.graph.edge_count(), 4);

    let doc = layout.graph.to_doc();
    assert_eq!(doc.nodes.len(), 5);
    assert_eq!(doc.edges.len(), 4);
}

// ============================================================================
// 2. Fire-safety equipment is tracked but never walkable
// ============================================================================

#[test]
fn test_hazard_equipment_excluded_from_graph() {
    let planner = hallway_planner();
    let layout = planner.store().layout("head office").unwrap();

    assert_eq!(layout.plan.hazard_equipment.len(), 1);
    assert_eq!(layout.plan.hazard_equipment[0].name, "fireextinguisher");
    assert!(!layout.graph.contains("fireextinguisher"));
    assert!(layout.plan.position("fireextinguisher").is_none());
}

// ============================================================================
// 3. Full directions: merge, landmark, waypoint, arrival
// ============================================================================

#[test]
fn test_full_instruction_sequence() {
    let planner = hallway_planner();
    let plan = planner
        .route("head office", &RouteQuery::new("Room 101", "Main Exit"))
        .unwrap();

    assert_eq!(
        plan.route.nodes,
        vec!["room 101", "j1", "j2", "lobby", "main exit"]
    );
    assert_eq!(plan.total_distance_m, 19.0);

    assert_eq!(
        plan.instructions,
        vec![
            "Exit room 101 and enter the corridor.".to_string(),
            "Then keep walking straight for ~5.0 meters passing room 102 on your left"
                .to_string(),
            "then enter the lobby (~5.0 meters)".to_string(),
            "then turn right for ~5.0 meters".to_string(),
            "You'll reach the main exit.".to_string(),
        ]
    );
}

// ============================================================================
// 4. Hazards against the ingested layout
// ============================================================================

#[test]
fn test_hazard_on_sole_junction_blocks_everything() {
    let planner = hallway_planner();
    let query = RouteQuery::new("Room 101", "Main Exit").with_hazards(["J2"]);

    match planner.route("head office", &query) {
        Err(Error::AllPathsBlocked { .. }) => {}
        other => panic!("expected AllPathsBlocked, got {other:?}"),
    }
}

#[test]
fn test_hazard_on_off_path_room_is_harmless() {
    // room 102 is only passed alongside, never entered, so flagging it
    // must not block the route.
    let planner = hallway_planner();
    let query = RouteQuery::new("Room 101", "Main Exit").with_hazards(["Room 102"]);
    let plan = planner.route("head office", &query).unwrap();
    assert_eq!(plan.route.end(), "main exit");
}

// ============================================================================
// 5. Location listing covers rooms and markers, canonically
// ============================================================================

#[test]
fn test_locations_after_ingest() {
    let planner = hallway_planner();
    let locations = planner.locations("head office").unwrap();
    assert_eq!(
        locations,
        vec!["j1", "j2", "lobby", "main exit", "room 101", "room 102"]
    );
}
