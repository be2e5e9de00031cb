//! The static route hierarchy: `Step`, `Leg`, `Route`.
//!
//! # Shape
//!
//! A route is an ordered sequence of legs (one per waypoint pair), each an
//! ordered sequence of steps (one per maneuver-to-maneuver segment).  Every
//! level carries its own total distance and expected travel time.  All three
//! types are immutable once constructed; live progress along them lives in
//! `nav-progress`, never here.
//!
//! # Step identity
//!
//! Steps carry no unique key and compare structurally (`PartialEq`).  Two
//! steps with identical content are indistinguishable — lookups by equality
//! in `nav-progress` resolve to the first match.

use crate::GeoPoint;

// ── Step ──────────────────────────────────────────────────────────────────────

/// A single maneuver-to-maneuver segment within a leg.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    /// Length of the segment in metres.
    pub distance_m: f64,

    /// Expected time to traverse the segment in seconds, as estimated by the
    /// directions provider.
    pub expected_travel_secs: f64,

    /// Maneuver text displayed or spoken when approaching the end of the
    /// step (e.g. "Turn right onto Market St").
    pub instruction: String,

    /// Where the step's terminating maneuver takes place.
    pub maneuver_location: GeoPoint,
}

// ── Leg ───────────────────────────────────────────────────────────────────────

/// A route segment between two waypoints, composed of steps.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    /// Steps in traversal order.
    steps: Vec<Step>,

    /// Human-readable summary of the leg, typically its dominant road names.
    pub summary: String,

    /// Total leg length in metres, as given by the directions provider.
    pub distance_m: f64,

    /// Expected time to traverse the whole leg in seconds.
    pub expected_travel_secs: f64,
}

impl Leg {
    /// Construct a leg with totals taken as given.
    ///
    /// The totals are trusted, not checked against the steps — a directions
    /// provider's own aggregates may differ from the sum by rounding.
    pub fn new(
        summary: impl Into<String>,
        steps: Vec<Step>,
        distance_m: f64,
        expected_travel_secs: f64,
    ) -> Self {
        Self {
            steps,
            summary: summary.into(),
            distance_m,
            expected_travel_secs,
        }
    }

    /// Construct a leg whose totals are the sums over `steps`.
    pub fn from_steps(summary: impl Into<String>, steps: Vec<Step>) -> Self {
        let distance_m = steps.iter().map(|s| s.distance_m).sum();
        let expected_travel_secs = steps.iter().map(|s| s.expected_travel_secs).sum();
        Self {
            steps,
            summary: summary.into(),
            distance_m,
            expected_travel_secs,
        }
    }

    /// Read-only slice of all steps in traversal order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// The full planned path from origin to destination, composed of legs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Legs in traversal order.  One leg per consecutive waypoint pair.
    legs: Vec<Leg>,

    /// Total route length in metres, as given by the directions provider.
    pub distance_m: f64,

    /// Expected time to traverse the whole route in seconds.
    pub expected_travel_secs: f64,
}

impl Route {
    /// Construct a route with totals taken as given (see [`Leg::new`]).
    pub fn new(legs: Vec<Leg>, distance_m: f64, expected_travel_secs: f64) -> Self {
        Self {
            legs,
            distance_m,
            expected_travel_secs,
        }
    }

    /// Construct a route whose totals are the sums over `legs`.
    pub fn from_legs(legs: Vec<Leg>) -> Self {
        let distance_m = legs.iter().map(|l| l.distance_m).sum();
        let expected_travel_secs = legs.iter().map(|l| l.expected_travel_secs).sum();
        Self {
            legs,
            distance_m,
            expected_travel_secs,
        }
    }

    /// Read-only slice of all legs in traversal order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }
}
