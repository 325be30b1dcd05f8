//! # evac-rs — Indoor Evacuation Routing Core
//!
//! Converts a floor-plan description (rooms, furniture, doors, corridor
//! polylines) into a navigable graph, enumerates evacuation routes between
//! two named locations, filters them against reported hazards, and renders
//! the chosen route as step-by-step walking instructions annotated with
//! nearby landmarks.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `LayoutSource` is the contract between the routing
//!    core and whatever persistence layer supplies building layouts
//! 2. **Clean DTOs**: `Point`, `Location`, `WalkGraph`, `Route`, `RouteStep`
//!    cross all boundaries
//! 3. **Extraction owns nothing**: floor-plan elements → geometry is a pure
//!    function
//! 4. **One normalization boundary**: names are canonicalized where they
//!    enter the core; every internal comparison assumes canonical form
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use evac_rs::{LayoutDocuments, MemorySource, RoutePlanner, RouteQuery};
//!
//! fn example() -> evac_rs::Result<()> {
//!     let elements_json = r#"[{"tag": "pieceOfFurniture",
//!         "attributes": {"name": "Main Exit", "x": "0", "y": "0"}}]"#;
//!
//!     let source = MemorySource::new();
//!     source.insert("hq", LayoutDocuments::from_json(elements_json, None)?);
//!
//!     let planner = RoutePlanner::new(source);
//!     let query = RouteQuery::new("Room 101", "Main Exit").with_hazards(["Room 102"]);
//!     let plan = planner.route("hq", &query)?;
//!
//!     for line in &plan.instructions {
//!         println!("{line}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! | Phase | Module | Output |
//! |-------|--------|--------|
//! | Extract | `floorplan` | positions, room outlines, corridors |
//! | Build | `graph` | walkable adjacency graph |
//! | Enumerate | `route` | every simple path |
//! | Filter & rank | `route` | shortest hazard-free path |
//! | Synthesize | `directions` | per-segment bearing/distance steps |
//! | Optimize | `directions` | merged, landmark-annotated instructions |

// ============================================================================
// Modules
// ============================================================================

pub mod directions;
pub mod floorplan;
pub mod graph;
pub mod model;
pub mod route;
pub mod store;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    Bearing, EdgeDoc, GraphDoc, Location, LocationKind, Point, Route, RouteStep, Vec2,
    WalkGraph, canonical_name,
};

// ============================================================================
// Re-exports: Pipeline
// ============================================================================

pub use directions::{DirectionsConfig, describe_route, optimize_directions};
pub use floorplan::{
    ElementTag, ExtractConfig, FloorElement, FloorPlan, RoomOutline, extract, parse_elements,
};
pub use graph::build_graph;
pub use route::{SearchCaps, find_all_paths, is_safe, pick_shortest};

// ============================================================================
// Re-exports: Store
// ============================================================================

pub use store::{
    BuildingLayout, LayoutDocuments, LayoutSource, LayoutStore, MemorySource, MissingLayout,
};

// ============================================================================
// Route planner
// ============================================================================

/// Tunables for every pipeline phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlannerConfig {
    pub extract: ExtractConfig,
    pub search: SearchCaps,
    pub directions: DirectionsConfig,
}

/// A route request: start, destination, and the currently reported
/// hazards. Names may arrive in any case; normalization happens inside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteQuery {
    pub start: String,
    pub end: String,
    pub hazards: Vec<String>,
}

impl RouteQuery {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            hazards: Vec::new(),
        }
    }

    pub fn with_hazards<I, T>(mut self, hazards: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.hazards = hazards.into_iter().map(Into::into).collect();
        self
    }
}

/// The planner's answer to a route query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePlan {
    /// The shortest safe route.
    pub route: Route,
    /// Total route length in meters, one decimal.
    pub total_distance_m: f64,
    /// How many enumerated routes survived the hazard filter.
    pub safe_route_count: usize,
    /// Structured per-segment steps.
    pub steps: Vec<RouteStep>,
    /// Raw per-segment descriptions, one sentence per step.
    pub detailed: Vec<String>,
    /// The optimized, rider-facing instruction sequence.
    pub instructions: Vec<String>,
}

/// One enumerated route with its directions, for route surveys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteCandidate {
    pub route: Route,
    pub detailed: Vec<String>,
    pub instructions: Vec<String>,
}

/// The primary entry point. A `RoutePlanner` wraps a layout source and
/// runs the full pipeline per query.
pub struct RoutePlanner<S: LayoutSource> {
    store: LayoutStore<S>,
    config: PlannerConfig,
}

impl<S: LayoutSource> RoutePlanner<S> {
    /// Create a planner with default thresholds.
    pub fn new(source: S) -> Self {
        Self::with_config(source, PlannerConfig::default())
    }

    pub fn with_config(source: S, config: PlannerConfig) -> Self {
        Self {
            store: LayoutStore::with_config(source, config.extract),
            config,
        }
    }

    /// Access the layout store (for direct ingestion and the
    /// missing-layout log).
    pub fn store(&self) -> &LayoutStore<S> {
        &self.store
    }

    /// Compute the shortest safe route and its instructions.
    ///
    /// The four failure conditions are distinct and non-overlapping:
    /// [`Error::LayoutUnavailable`], [`Error::UnknownLocation`],
    /// [`Error::NoPathFound`], and [`Error::AllPathsBlocked`]. Callers
    /// branch on them; none is a generic failure.
    pub fn route(&self, building: &str, query: &RouteQuery) -> Result<RoutePlan> {
        let layout = self.store.layout(building)?;
        let start = known(&layout, &query.start)?;
        let end = known(&layout, &query.end)?;

        // Phase 1: enumerate every simple path
        let routes = find_all_paths(&layout.graph, &start, &end, &self.config.search);
        if routes.is_empty() {
            return Err(Error::NoPathFound { start, end });
        }

        // Phase 2: drop routes touching reported hazards
        let hazards: HashSet<String> = query.hazards.iter().map(|h| canonical_name(h)).collect();
        let safe: Vec<Route> = routes.into_iter().filter(|r| is_safe(r, &hazards)).collect();
        let safe_route_count = safe.len();

        // Phase 3: shortest survivor, first found on ties
        let positions = layout.plan.positions();
        let Some(best) = pick_shortest(safe, positions) else {
            return Err(Error::AllPathsBlocked { start, end });
        };

        // Phase 4: synthesize and optimize directions
        let steps = describe_route(&best, positions);
        let detailed = steps.iter().map(ToString::to_string).collect();
        let instructions = optimize_directions(&steps, &best, positions, &self.config.directions);

        debug!(
            building = %layout.building,
            route = %best,
            safe_route_count,
            "planned route"
        );
        Ok(RoutePlan {
            total_distance_m: best.total_distance_m(positions),
            route: best,
            safe_route_count,
            steps,
            detailed,
            instructions,
        })
    }

    /// Every simple path between two locations, unfiltered and unranked.
    pub fn all_routes(&self, building: &str, start: &str, end: &str) -> Result<Vec<Route>> {
        let layout = self.store.layout(building)?;
        let start = known(&layout, start)?;
        let end = known(&layout, end)?;
        Ok(find_all_paths(&layout.graph, &start, &end, &self.config.search))
    }

    /// Every simple path with detailed and optimized directions — the
    /// route-survey operation.
    pub fn candidates(
        &self,
        building: &str,
        start: &str,
        end: &str,
    ) -> Result<Vec<RouteCandidate>> {
        let layout = self.store.layout(building)?;
        let start = known(&layout, start)?;
        let end = known(&layout, end)?;

        let routes = find_all_paths(&layout.graph, &start, &end, &self.config.search);
        if routes.is_empty() {
            return Err(Error::NoPathFound { start, end });
        }

        let positions = layout.plan.positions();
        Ok(routes
            .into_iter()
            .map(|route| {
                let steps = describe_route(&route, positions);
                let detailed = steps.iter().map(ToString::to_string).collect();
                let instructions =
                    optimize_directions(&steps, &route, positions, &self.config.directions);
                RouteCandidate {
                    route,
                    detailed,
                    instructions,
                }
            })
            .collect())
    }

    /// Sorted canonical location names known to a building's floor plan.
    pub fn locations(&self, building: &str) -> Result<Vec<String>> {
        let layout = self.store.layout(building)?;
        Ok(layout.plan.names().into_iter().map(String::from).collect())
    }
}

/// Canonicalize a query name and require it to be a graph node.
fn known(layout: &BuildingLayout, name: &str) -> Result<String> {
    let canonical = canonical_name(name);
    if layout.graph.contains(&canonical) {
        Ok(canonical)
    } else {
        Err(Error::UnknownLocation(canonical))
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Start or end is not a node of the building's current graph.
    #[error("unknown location: '{0}'")]
    UnknownLocation(String),

    /// The building has no ingested layout. The occurrence is recorded in
    /// the store's missing-layout log for operational follow-up.
    #[error("no layout ingested for building '{0}'")]
    LayoutUnavailable(String),

    /// The graph holds no connecting path at all.
    #[error("no path between '{start}' and '{end}'")]
    NoPathFound { start: String, end: String },

    /// Paths exist, but every one crosses a reported hazard.
    #[error("all paths between '{start}' and '{end}' are blocked by reported hazards")]
    AllPathsBlocked { start: String, end: String },

    #[error("malformed document: {0}")]
    Document(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
