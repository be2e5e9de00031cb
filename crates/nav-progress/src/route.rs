//! Per-route travel progress: the leg cursor and the top of the hierarchy.

use nav_route::{Leg, Route};

use crate::LegProgress;

/// Progress along an entire route.
///
/// The single mutable authority for "where in the route am I": tracks which
/// leg is current, owns the [`LegProgress`] for that leg, and aggregates
/// leg-level metrics into route-level ones.  Constructed once per travel
/// session and driven by the navigation-update loop; the route itself is
/// borrowed immutably for the whole session.
#[derive(Debug)]
pub struct RouteProgress<'r> {
    route: &'r Route,
    leg_index: usize,
    leg_progress: LegProgress<'r>,
}

impl<'r> RouteProgress<'r> {
    /// Fresh progress at step 0 of the first leg.
    ///
    /// # Panics
    ///
    /// Panics if the route has no legs or its first leg has no steps.
    pub fn new(route: &'r Route) -> Self {
        Self::at_leg(route, 0)
    }

    /// Fresh progress at step 0 of leg `leg_index` (e.g. when resuming a
    /// session mid-route).
    ///
    /// # Panics
    ///
    /// Panics if `leg_index >= route.leg_count()` or the leg has no steps.
    pub fn at_leg(route: &'r Route, leg_index: usize) -> Self {
        assert!(
            leg_index < route.leg_count(),
            "leg index {leg_index} out of range for route with {} legs",
            route.leg_count(),
        );
        Self {
            route,
            leg_index,
            leg_progress: LegProgress::new(&route.legs()[leg_index]),
        }
    }

    /// The route this progress is tracking.
    #[inline]
    pub fn route(&self) -> &'r Route {
        self.route
    }

    // ── Leg cursor ────────────────────────────────────────────────────────

    #[inline]
    pub fn leg_index(&self) -> usize {
        self.leg_index
    }

    /// Move the cursor to leg `leg_index`.
    ///
    /// Side effect: replaces the owned [`LegProgress`] with a fresh one at
    /// step 0 of the new leg — all step-level progress and the alert tag are
    /// discarded, regardless of prior state.
    ///
    /// # Panics
    ///
    /// Panics if `leg_index >= route.leg_count()`, or if the new leg has no
    /// steps.  Callers must validate the index first; an out-of-range index
    /// means a stale route or a collaborator bug, not a recoverable
    /// condition.
    pub fn set_leg_index(&mut self, leg_index: usize) {
        assert!(
            leg_index < self.route.leg_count(),
            "leg index {leg_index} out of range for route with {} legs",
            self.route.leg_count(),
        );
        self.leg_index = leg_index;
        self.leg_progress = LegProgress::new(&self.route.legs()[leg_index]);
    }

    /// The leg the traveler is currently on.
    #[inline]
    pub fn current_leg(&self) -> &'r Leg {
        &self.route.legs()[self.leg_index]
    }

    /// Progress within the current leg.
    #[inline]
    pub fn leg_progress(&self) -> &LegProgress<'r> {
        &self.leg_progress
    }

    /// Mutable progress within the current leg — step-index changes, alert
    /// writes, and location-fix updates all go through this.
    #[inline]
    pub fn leg_progress_mut(&mut self) -> &mut LegProgress<'r> {
        &mut self.leg_progress
    }

    // ── Derived metrics ───────────────────────────────────────────────────

    /// Metres traveled along the route: completed legs plus the current
    /// leg's own progress.
    pub fn distance_traveled(&self) -> f64 {
        let completed: f64 = self.route.legs()[..self.leg_index]
            .iter()
            .map(|l| l.distance_m)
            .sum();
        completed + self.leg_progress.distance_traveled()
    }

    /// Seconds remaining on the route: legs after the current one plus the
    /// current leg's own remainder.
    pub fn duration_remaining(&self) -> f64 {
        let pending: f64 = self.route.legs()[self.leg_index + 1..]
            .iter()
            .map(|l| l.expected_travel_secs)
            .sum();
        pending + self.leg_progress.duration_remaining()
    }

    /// Fraction of the route traveled.  1.0 for a zero-length route.
    pub fn fraction_traveled(&self) -> f64 {
        if self.route.distance_m <= 0.0 {
            return 1.0;
        }
        self.distance_traveled() / self.route.distance_m
    }

    /// Metres left on the route: `route.distance_m − distance_traveled()`.
    pub fn distance_remaining(&self) -> f64 {
        self.route.distance_m - self.distance_traveled()
    }
}
