//! Unit tests for nav-progress.

use nav_route::{GeoPoint, Leg, Route, Step};

use crate::{AlertLevel, LegProgress, RouteProgress, StepProgress};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn step(distance_m: f64, expected_travel_secs: f64) -> Step {
    Step {
        distance_m,
        expected_travel_secs,
        instruction: String::from("Continue straight"),
        maneuver_location: GeoPoint::new(45.0, -122.0),
    }
}

fn named_step(instruction: &str, distance_m: f64, expected_travel_secs: f64) -> Step {
    Step {
        instruction: instruction.into(),
        ..step(distance_m, expected_travel_secs)
    }
}

/// Two-leg route: leg 0 is one 1000 m / 120 s step, leg 1 one 500 m / 60 s
/// step.  1500 m / 180 s total.
fn two_leg_route() -> Route {
    Route::from_legs(vec![
        Leg::from_steps("First Ave", vec![step(1000.0, 120.0)]),
        Leg::from_steps("Second Ave", vec![step(500.0, 60.0)]),
    ])
}

/// Three-step leg: 100 m / 30 s, 200 m / 60 s, 300 m / 90 s.  600 m / 180 s
/// total.
fn three_step_leg() -> Leg {
    Leg::from_steps(
        "Main St",
        vec![step(100.0, 30.0), step(200.0, 60.0), step(300.0, 90.0)],
    )
}

// ── StepProgress ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod step_progress {
    use super::*;

    #[test]
    fn new_starts_zeroed() {
        let s = step(1000.0, 120.0);
        let p = StepProgress::new(&s);
        assert_eq!(p.distance_traveled, 0.0);
        assert_eq!(p.distance_to_maneuver, None);
        assert_eq!(p.fraction_traveled(), 0.0);
        assert_eq!(p.distance_remaining(), 1000.0);
        assert_eq!(p.duration_remaining(), 120.0);
    }

    #[test]
    fn distance_remaining_is_exact_complement() {
        let s = step(1000.0, 120.0);
        let mut p = StepProgress::new(&s);
        p.distance_traveled = 250.0;
        assert_eq!(p.distance_remaining(), 750.0);
        assert_eq!(p.distance_remaining(), s.distance_m - p.distance_traveled);
    }

    #[test]
    fn duration_scales_with_untraveled_fraction() {
        let s = step(1000.0, 120.0);
        let mut p = StepProgress::new(&s);
        p.distance_traveled = 250.0;
        assert_eq!(p.fraction_traveled(), 0.25);
        assert_eq!(p.duration_remaining(), 90.0);
    }

    #[test]
    fn duration_strictly_decreases_as_distance_grows() {
        let s = step(1000.0, 120.0);
        let mut p = StepProgress::new(&s);
        p.distance_traveled = 100.0;
        let before = p.duration_remaining();
        p.distance_traveled = 200.0;
        assert!(p.duration_remaining() < before);
    }

    #[test]
    fn zero_length_step_fraction_is_one() {
        let s = step(0.0, 15.0);
        let p = StepProgress::new(&s);
        assert_eq!(p.fraction_traveled(), 1.0);
        assert_eq!(p.duration_remaining(), 0.0);
        assert_eq!(p.distance_remaining(), 0.0);
    }

    #[test]
    fn derived_values_track_every_write() {
        // Reads recompute from the mutable field — no caching.
        let s = step(400.0, 100.0);
        let mut p = StepProgress::new(&s);
        for traveled in [0.0, 100.0, 200.0, 400.0] {
            p.distance_traveled = traveled;
            assert_eq!(p.distance_remaining(), 400.0 - traveled);
            assert_eq!(p.fraction_traveled(), traveled / 400.0);
        }
    }
}

// ── LegProgress ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod leg_progress {
    use super::*;

    #[test]
    fn aggregates_completed_steps_plus_current() {
        // Steps 100/200/300, cursor on step 1 with 50 m traveled.
        let leg = three_step_leg();
        let mut p = LegProgress::at_step(&leg, 1);
        p.step_progress_mut().distance_traveled = 50.0;
        assert_eq!(p.distance_traveled(), 150.0);
    }

    #[test]
    fn duration_remaining_includes_pending_steps() {
        let leg = three_step_leg();
        let mut p = LegProgress::at_step(&leg, 1);
        p.step_progress_mut().distance_traveled = 50.0;
        // Current step: (1 - 50/200) * 60 = 45 s.  Pending step 2: 90 s.
        assert_eq!(p.duration_remaining(), 135.0);
    }

    #[test]
    fn fraction_over_leg_total() {
        let leg = three_step_leg();
        let mut p = LegProgress::at_step(&leg, 1);
        p.step_progress_mut().distance_traveled = 50.0;
        assert_eq!(p.fraction_traveled(), 150.0 / 600.0);
    }

    #[test]
    fn fraction_stays_in_unit_interval_for_bounded_distance() {
        let leg = three_step_leg();
        for i in 0..3 {
            let mut p = LegProgress::at_step(&leg, i);
            let full = p.current_step().distance_m;
            for traveled in [0.0, full * 0.5, full] {
                p.step_progress_mut().distance_traveled = traveled;
                let f = p.fraction_traveled();
                assert!((0.0..=1.0).contains(&f), "fraction {f} out of range");
            }
        }
    }

    #[test]
    fn set_step_index_resets_step_progress() {
        let leg = three_step_leg();
        let mut p = LegProgress::new(&leg);
        p.step_progress_mut().distance_traveled = 99.0;
        p.step_progress_mut().distance_to_maneuver = Some(1.0);

        p.set_step_index(2);
        assert_eq!(p.step_index(), 2);
        assert_eq!(p.step_progress().distance_traveled, 0.0);
        assert_eq!(p.step_progress().distance_to_maneuver, None);
        assert_eq!(p.step_progress().step().distance_m, 300.0);
    }

    #[test]
    fn set_step_index_keeps_alert_level() {
        // Only the owned step progress is replaced; the leg-level tag stays.
        let leg = three_step_leg();
        let mut p = LegProgress::new(&leg);
        p.alert_level = AlertLevel::High;
        p.set_step_index(1);
        assert_eq!(p.alert_level, AlertLevel::High);
    }

    #[test]
    fn alert_level_defaults_to_none_and_is_writable() {
        let leg = three_step_leg();
        let mut p = LegProgress::new(&leg);
        assert_eq!(p.alert_level, AlertLevel::None);
        p.alert_level = AlertLevel::Depart;
        assert_eq!(p.alert_level, AlertLevel::Depart);
    }

    #[test]
    fn upcoming_and_following_steps() {
        let leg = three_step_leg();
        let p = LegProgress::new(&leg);
        assert_eq!(p.current_step().distance_m, 100.0);
        assert_eq!(p.upcoming_step().unwrap().distance_m, 200.0);
        assert_eq!(p.following_step().unwrap().distance_m, 300.0);

        let p = LegProgress::at_step(&leg, 1);
        assert_eq!(p.upcoming_step().unwrap().distance_m, 300.0);
        assert!(p.following_step().is_none());

        let p = LegProgress::at_step(&leg, 2);
        assert!(p.upcoming_step().is_none());
        assert!(p.following_step().is_none());
    }

    #[test]
    fn step_neighbors_by_equality() {
        let first = named_step("first", 100.0, 30.0);
        let middle = named_step("middle", 200.0, 60.0);
        let last = named_step("last", 300.0, 90.0);
        let leg = Leg::from_steps("Main St", vec![first.clone(), middle.clone(), last.clone()]);
        let p = LegProgress::new(&leg);

        assert_eq!(p.step_before(&middle), Some(&first));
        assert_eq!(p.step_after(&middle), Some(&last));
        // Boundary steps have no neighbor on that side.
        assert!(p.step_before(&first).is_none());
        assert!(p.step_after(&last).is_none());
    }

    #[test]
    fn step_neighbors_absent_for_foreign_step() {
        let leg = three_step_leg();
        let p = LegProgress::new(&leg);
        let foreign = named_step("not in this leg", 42.0, 7.0);
        assert!(p.step_before(&foreign).is_none());
        assert!(p.step_after(&foreign).is_none());
        assert!(!p.is_current_step(&foreign));
    }

    #[test]
    fn is_current_step_matches_cursor() {
        let leg = three_step_leg();
        let p = LegProgress::at_step(&leg, 1);
        assert!(p.is_current_step(&leg.steps()[1]));
        assert!(!p.is_current_step(&leg.steps()[0]));
        assert!(!p.is_current_step(&leg.steps()[2]));
    }

    #[test]
    fn duplicate_steps_resolve_to_first_match() {
        // Two structurally identical steps: equality queries cannot tell
        // them apart and always land on index 0.
        let dup = named_step("repeat", 100.0, 30.0);
        let other = named_step("between", 200.0, 60.0);
        let leg = Leg::from_steps("Loop Rd", vec![dup.clone(), other.clone(), dup.clone()]);

        let p = LegProgress::at_step(&leg, 2);
        // The cursor is on the second copy, but the first match wins.
        assert!(!p.is_current_step(&dup));
        assert!(p.step_before(&dup).is_none());
        assert_eq!(p.step_after(&dup), Some(&other));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn at_step_out_of_range_panics() {
        let leg = three_step_leg();
        let _ = LegProgress::at_step(&leg, 3);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn set_step_index_out_of_range_panics() {
        let leg = three_step_leg();
        let mut p = LegProgress::new(&leg);
        p.set_step_index(3);
    }
}

// ── RouteProgress ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod route_progress {
    use super::*;

    #[test]
    fn aggregates_current_leg_into_route_totals() {
        // 1500 m route, 250 m traveled on the first leg's only step.
        let route = two_leg_route();
        let mut p = RouteProgress::new(&route);
        p.leg_progress_mut().step_progress_mut().distance_traveled = 250.0;

        assert_eq!(p.distance_traveled(), 250.0);
        assert_eq!(p.distance_remaining(), 1250.0);
        assert_eq!(p.fraction_traveled(), 250.0 / 1500.0);
    }

    #[test]
    fn duration_remaining_spans_pending_legs() {
        let route = two_leg_route();
        let mut p = RouteProgress::new(&route);
        p.leg_progress_mut().step_progress_mut().distance_traveled = 250.0;
        // Current leg: (1 - 0.25) * 120 = 90 s.  Pending leg: 60 s.
        assert_eq!(p.duration_remaining(), 150.0);
    }

    #[test]
    fn completed_legs_count_in_full() {
        // Resume mid-route: leg 1, step 1, 25 m into a 100 m step.
        let route = Route::from_legs(vec![
            three_step_leg(),
            Leg::from_steps("Bridge", vec![step(400.0, 80.0), step(100.0, 20.0)]),
        ]);
        let mut p = RouteProgress::at_leg(&route, 1);
        p.leg_progress_mut().set_step_index(1);
        p.leg_progress_mut().step_progress_mut().distance_traveled = 25.0;

        assert_eq!(p.distance_traveled(), 600.0 + 400.0 + 25.0);
        assert_eq!(p.distance_remaining(), route.distance_m - p.distance_traveled());
        // Current step: (1 - 25/100) * 20 = 15 s; no pending steps or legs.
        assert_eq!(p.duration_remaining(), 15.0);
    }

    #[test]
    fn new_starts_at_first_leg_step_zero() {
        let route = two_leg_route();
        let p = RouteProgress::new(&route);
        assert_eq!(p.leg_index(), 0);
        assert_eq!(p.leg_progress().step_index(), 0);
        assert_eq!(p.distance_traveled(), 0.0);
        assert_eq!(p.fraction_traveled(), 0.0);
        assert_eq!(p.duration_remaining(), route.expected_travel_secs);
    }

    #[test]
    fn set_leg_index_discards_prior_leg_state() {
        let route = two_leg_route();
        let mut p = RouteProgress::new(&route);
        p.leg_progress_mut().step_progress_mut().distance_traveled = 900.0;
        p.leg_progress_mut().alert_level = AlertLevel::Arrive;

        p.set_leg_index(1);
        assert_eq!(p.leg_index(), 1);
        assert_eq!(p.leg_progress().step_index(), 0);
        assert_eq!(p.leg_progress().distance_traveled(), 0.0);
        assert_eq!(p.leg_progress().alert_level, AlertLevel::None);
        assert_eq!(p.current_leg().summary, "Second Ave");
        // The completed leg now counts in full.
        assert_eq!(p.distance_traveled(), 1000.0);
    }

    #[test]
    fn set_leg_index_reset_is_idempotent() {
        // Resetting to a leg the cursor is already on still zeroes progress.
        let route = two_leg_route();
        let mut p = RouteProgress::new(&route);
        p.leg_progress_mut().step_progress_mut().distance_traveled = 250.0;
        p.set_leg_index(0);
        assert_eq!(p.distance_traveled(), 0.0);
    }

    #[test]
    fn duration_strictly_decreases_at_every_level() {
        let route = two_leg_route();
        let mut p = RouteProgress::new(&route);

        p.leg_progress_mut().step_progress_mut().distance_traveled = 100.0;
        let route_before = p.duration_remaining();
        let leg_before = p.leg_progress().duration_remaining();
        let step_before = p.leg_progress().step_progress().duration_remaining();

        p.leg_progress_mut().step_progress_mut().distance_traveled = 300.0;
        assert!(p.duration_remaining() < route_before);
        assert!(p.leg_progress().duration_remaining() < leg_before);
        assert!(p.leg_progress().step_progress().duration_remaining() < step_before);
    }

    #[test]
    fn zero_length_route_fraction_is_one() {
        let route = Route::from_legs(vec![Leg::from_steps("Nowhere", vec![step(0.0, 0.0)])]);
        let p = RouteProgress::new(&route);
        assert_eq!(p.fraction_traveled(), 1.0);
        assert_eq!(p.leg_progress().fraction_traveled(), 1.0);
        assert_eq!(p.duration_remaining(), 0.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn at_leg_out_of_range_panics() {
        let route = two_leg_route();
        let _ = RouteProgress::at_leg(&route, 2);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn set_leg_index_out_of_range_panics() {
        let route = two_leg_route();
        let mut p = RouteProgress::new(&route);
        p.set_leg_index(2);
    }
}
