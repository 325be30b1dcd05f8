//! Rider-facing instruction assembly.
//!
//! Collapses the raw step list into corridor-level guidance: consecutive
//! same-bearing steps merge into one phrase with a summed distance, rooms
//! within the lateral band become "passing X on your left" clauses, and
//! named waypoints get their own call-out. Works directly on structured
//! steps; display text is produced once and never re-parsed.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::landmarks::{is_named_place, rooms_alongside};
use crate::model::{Bearing, Point, Route, RouteStep};

/// Thresholds for instruction assembly, in centimeters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DirectionsConfig {
    /// Lateral corridor band within which an off-path room counts as
    /// "passed".
    pub landmark_band_cm: f64,
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            landmark_band_cm: 150.0,
        }
    }
}

/// An in-progress merge of consecutive same-bearing steps.
struct Merge {
    bearing: Bearing,
    total_m: f64,
    notes: Vec<String>,
}

/// Produce the final instruction sequence for a route.
///
/// One forward pass: the leading step becomes the start phrase, named
/// waypoints flush any open merge and stand alone, everything else merges
/// by bearing. The sequence is wrapped with the start and arrival phrases.
pub fn optimize_directions(
    steps: &[RouteStep],
    route: &Route,
    positions: &HashMap<String, Point>,
    cfg: &DirectionsConfig,
) -> Vec<String> {
    if steps.is_empty() || route.is_empty() {
        return Vec::new();
    }

    let end_node = route.end();
    let mut bodies: Vec<String> = Vec::new();
    let mut merge: Option<Merge> = None;

    for step in steps {
        // The leading segment is covered by the start phrase.
        let Some(bearing) = step.bearing else {
            continue;
        };

        if is_named_place(&step.to) && step.to != end_node {
            flush(&mut bodies, merge.take());
            let verb = if bearing.is_walk_through() { "enter" } else { "reach" };
            bodies.push(format!("{} the {} (~{:.1} meters)", verb, step.to, step.distance_m));
            continue;
        }

        let note = match (positions.get(&step.from), positions.get(&step.to)) {
            (Some(&a), Some(&b)) => {
                passing_note(&rooms_alongside(a, b, positions, &step.to, cfg.landmark_band_cm))
            }
            _ => String::new(),
        };

        match &mut merge {
            Some(open) if open.bearing == bearing => {
                open.total_m += step.distance_m;
                open.notes.push(note);
            }
            _ => {
                flush(&mut bodies, merge.take());
                merge = Some(Merge {
                    bearing,
                    total_m: step.distance_m,
                    notes: vec![note],
                });
            }
        }
    }
    flush(&mut bodies, merge.take());

    let mut instructions = Vec::with_capacity(bodies.len() + 2);
    instructions.push(format!("Exit {} and enter the corridor.", route.start()));
    for (i, body) in bodies.into_iter().enumerate() {
        let lead = if i == 0 { "Then" } else { "then" };
        instructions.push(format!("{lead} {body}"));
    }
    instructions.push(format!("You'll reach the {end_node}."));
    instructions
}

fn flush(bodies: &mut Vec<String>, merge: Option<Merge>) {
    let Some(merge) = merge else {
        return;
    };
    let notes: Vec<&str> = merge
        .notes
        .iter()
        .filter(|n| !n.is_empty())
        .map(String::as_str)
        .collect();
    let mut body = format!("{} for ~{:.1} meters", merge.bearing, merge.total_m);
    if !notes.is_empty() {
        body.push(' ');
        body.push_str(&notes.join(", "));
    }
    bodies.push(body);
}

fn passing_note(passed: &[super::landmarks::PassedRoom]) -> String {
    if passed.is_empty() {
        return String::new();
    }
    let clauses: Vec<String> = passed
        .iter()
        .map(|p| format!("{} on your {}", p.name, p.side))
        .collect();
    format!("passing {}", clauses.join(" and "))
}
