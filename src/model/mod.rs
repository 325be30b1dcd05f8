//! # Core Data Model
//!
//! Clean DTOs that cross every boundary: floor-plan ingestion ↔ graph
//! building ↔ route search ↔ direction synthesis ↔ caller.
//!
//! Design rule: this module is pure data — no I/O, no locking, no state.

pub mod graph;
pub mod location;
pub mod point;
pub mod route;
pub mod step;

pub use graph::{EdgeDoc, GraphDoc, WalkGraph};
pub use location::{Location, LocationKind, canonical_name, is_junction_name};
pub use point::{Point, Vec2};
pub use route::Route;
pub use step::{Bearing, RouteStep};
