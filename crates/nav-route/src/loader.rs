//! CSV route loader.
//!
//! # CSV format
//!
//! One row per step, in traversal order within each leg.  All rows for the
//! same leg must share the same `summary` value.
//!
//! ```csv
//! leg,summary,instruction,distance_m,expected_travel_secs,lat,lon
//! 0,Market St,Head north on Market St,1200.0,180.0,45.52310,-122.67650
//! 0,Market St,Turn right onto Burnside,400.0,90.0,45.52301,-122.67101
//! 1,Burnside Bridge,Continue onto Burnside Bridge,800.0,120.0,45.52305,-122.66480
//! ```
//!
//! Leg indices must cover `0..n` with no gaps; a gap means the file was
//! truncated or mis-joined and loading fails with
//! [`RouteError::MissingLeg`].  Leg and route totals are derived by summing
//! the step rows ([`Leg::from_steps`] / [`Route::from_legs`]), so a loaded
//! route always satisfies the aggregation-consistency property.
//!
//! This is an interchange format for *precomputed* routes (test fixtures,
//! cached directions responses).  Talking to a live directions service is a
//! different component's job.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::route::{Leg, Route, Step};
use crate::{GeoPoint, RouteError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StepRecord {
    leg:                  usize,
    summary:              String,
    instruction:          String,
    distance_m:           f64,
    expected_travel_secs: f64,
    lat:                  f32,
    lon:                  f32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a `Route` from a CSV file.
///
/// # Errors
///
/// [`RouteError::Io`] if the file cannot be opened, otherwise as
/// [`load_route_reader`].
pub fn load_route_csv(path: &Path) -> Result<Route, RouteError> {
    let file = std::fs::File::open(path).map_err(RouteError::Io)?;
    load_route_reader(file)
}

/// Like [`load_route_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_route_reader<R: Read>(reader: R) -> Result<Route, RouteError> {
    // ── Parse CSV rows ────────────────────────────────────────────────────
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_leg: HashMap<usize, Vec<StepRecord>> = HashMap::new();
    let mut leg_count = 0usize;

    for result in csv_reader.deserialize::<StepRecord>() {
        let row = result.map_err(|e| RouteError::Parse(e.to_string()))?;
        leg_count = leg_count.max(row.leg + 1);
        by_leg.entry(row.leg).or_default().push(row);
    }

    if by_leg.is_empty() {
        return Err(RouteError::EmptyRoute);
    }

    // ── Build one Leg per index ───────────────────────────────────────────
    let mut legs: Vec<Leg> = Vec::with_capacity(leg_count);

    for i in 0..leg_count {
        let rows = by_leg.remove(&i).ok_or(RouteError::MissingLeg(i))?;

        // All rows for the same leg are expected to share the summary.
        let summary = rows[0].summary.clone();

        let steps: Vec<Step> = rows
            .into_iter()
            .map(|r| Step {
                distance_m:           r.distance_m,
                expected_travel_secs: r.expected_travel_secs,
                instruction:          r.instruction,
                maneuver_location:    GeoPoint::new(r.lat, r.lon),
            })
            .collect();

        legs.push(Leg::from_steps(summary, steps));
    }

    Ok(Route::from_legs(legs))
}
