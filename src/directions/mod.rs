//! # Direction Synthesis & Landmark Optimization
//!
//! Turns an ordered route into per-segment bearing/distance steps, then
//! into the rider-facing instruction sequence: merged same-direction
//! phrases, "passing X on your left" clauses for rooms within the corridor
//! band, and call-outs for named waypoints.

pub mod describe;
pub mod landmarks;
pub mod optimize;

pub use describe::describe_route;
pub use landmarks::{NAMED_PLACES, PassedRoom, Side, rooms_alongside};
pub use optimize::{DirectionsConfig, optimize_directions};
