//! # Floor-Plan Ingestion
//!
//! Element document DTOs and geometry extraction. Pure functions — no I/O,
//! no state, no storage dependency: a parsed element document goes in, a
//! [`FloorPlan`] comes out.

pub mod element;
pub mod outline;
pub mod plan;

pub use element::{ElementTag, FloorElement, PointRecord, parse_elements};
pub use outline::RoomOutline;
pub use plan::{ExtractConfig, FloorPlan, Polyline, extract};
