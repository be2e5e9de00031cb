//! commute — smallest end-to-end demo for the rust_nav workspace.
//!
//! Plays the external tracking-controller role over a two-leg city route:
//! applies synthetic location fixes at a fixed spacing, advances the step and
//! leg cursors when a segment completes, writes the maneuver distance and
//! alert tag the way a real tracker would, and prints one progress row per
//! fix.

use std::io::Cursor;

use anyhow::Result;

use nav_progress::{AlertLevel, RouteProgress};
use nav_route::load_route_reader;

// ── Constants ─────────────────────────────────────────────────────────────────

const FIX_SPACING_M:   f64 = 150.0; // synthetic position fix every 150 m
const HIGH_RADIUS_M:   f64 = 100.0;
const MEDIUM_RADIUS_M: f64 = 400.0;
const DEPART_WINDOW_M: f64 = 200.0;
const ARRIVE_RADIUS_M: f64 = 50.0;

// ── Route CSV ─────────────────────────────────────────────────────────────────

// Two legs: a waterfront approach and a bridge crossing.  2300 m, 320 s.
const ROUTE_CSV: &str = "\
leg,summary,instruction,distance_m,expected_travel_secs,lat,lon\n\
0,Naito Pkwy,Head south on Naito Pkwy,650.0,85.0,45.52090,-122.67310\n\
0,Naito Pkwy,Continue past the Salmon St fountain,600.0,80.0,45.51550,-122.67370\n\
0,Naito Pkwy,Turn left toward Hawthorne Bridge,300.0,45.0,45.51280,-122.67300\n\
1,Hawthorne Bridge,Cross the Hawthorne Bridge,500.0,70.0,45.51350,-122.66710\n\
1,Hawthorne Bridge,Turn right onto Madison St,250.0,40.0,45.51290,-122.66440\n\
";

// ── Alert decision (demo-side policy, not part of the model) ──────────────────

fn alert_for(progress: &RouteProgress<'_>) -> AlertLevel {
    let leg = progress.leg_progress();
    let to_maneuver = leg.step_progress().distance_remaining();

    let final_leg = progress.leg_index() + 1 == progress.route().leg_count();
    let final_step = leg.upcoming_step().is_none();

    if final_leg && final_step && to_maneuver <= ARRIVE_RADIUS_M {
        AlertLevel::Arrive
    } else if to_maneuver <= HIGH_RADIUS_M {
        AlertLevel::High
    } else if to_maneuver <= MEDIUM_RADIUS_M {
        AlertLevel::Medium
    } else if progress.distance_traveled() <= DEPART_WINDOW_M {
        AlertLevel::Depart
    } else {
        AlertLevel::Low
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let route = load_route_reader(Cursor::new(ROUTE_CSV))?;
    println!(
        "route: {} legs, {:.0} m, {:.0} s expected",
        route.leg_count(),
        route.distance_m,
        route.expected_travel_secs,
    );
    println!("fix  leg step  traveled  remaining  frac   eta  alert   next maneuver");

    let mut progress = RouteProgress::new(&route);
    let mut fix = 0u32;
    let mut arrived = false;

    while !arrived {
        fix += 1;

        // ── Consume one fix worth of travel, crossing boundaries ──────────
        let mut advance = FIX_SPACING_M;
        loop {
            let remaining = progress.leg_progress().step_progress().distance_remaining();
            if advance < remaining {
                progress.leg_progress_mut().step_progress_mut().distance_traveled += advance;
                break;
            }
            advance -= remaining;

            let leg = progress.leg_progress();
            if leg.upcoming_step().is_some() {
                let next = leg.step_index() + 1;
                progress.leg_progress_mut().set_step_index(next);
            } else if progress.leg_index() + 1 < route.leg_count() {
                let next = progress.leg_index() + 1;
                progress.set_leg_index(next);
            } else {
                // Final step of the final leg: pin the fix to the arrival point.
                let full = progress.leg_progress().step_progress().step().distance_m;
                progress.leg_progress_mut().step_progress_mut().distance_traveled = full;
                arrived = true;
                break;
            }
        }

        // ── Per-fix tracker writes: maneuver distance + alert tag ─────────
        let to_maneuver = progress.leg_progress().step_progress().distance_remaining();
        let alert = alert_for(&progress);
        let leg = progress.leg_progress_mut();
        leg.step_progress_mut().distance_to_maneuver = Some(to_maneuver);
        leg.alert_level = alert;

        report(fix, &progress);
    }

    println!(
        "arrived after {fix} fixes: {:.0} m traveled, fraction {:.3}",
        progress.distance_traveled(),
        progress.fraction_traveled(),
    );
    Ok(())
}

fn report(fix: u32, progress: &RouteProgress<'_>) {
    let leg = progress.leg_progress();
    let next = leg
        .upcoming_step()
        .map(|s| s.instruction.as_str())
        .unwrap_or("(destination)");
    println!(
        "{fix:>3}  {:>3} {:>4}  {:>8.0}  {:>9.0}  {:.2}  {:>4.0}  {:<7} {next}",
        progress.leg_index(),
        leg.step_index(),
        progress.distance_traveled(),
        progress.distance_remaining(),
        progress.fraction_traveled(),
        progress.duration_remaining(),
        leg.alert_level.as_str(),
    );
}
