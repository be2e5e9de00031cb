//! Per-leg travel progress: the step cursor.

use nav_route::{Leg, Step};

use crate::{AlertLevel, StepProgress};

/// Progress along one leg of the route.
///
/// Tracks which step is current, owns the [`StepProgress`] for that step,
/// and aggregates step-level metrics into leg-level ones.  The owned
/// `StepProgress` is constructed eagerly and is never absent.
///
/// # Step identity
///
/// The `step_before`/`step_after`/`is_current_step` queries locate a step by
/// structural equality.  Steps carry no unique key, so if a leg contains two
/// identical steps these queries resolve to the **first** match; behavior
/// for such legs is unspecified beyond that.
#[derive(Debug)]
pub struct LegProgress<'r> {
    leg: &'r Leg,
    step_index: usize,
    step_progress: StepProgress<'r>,

    /// Proximity tag for the next maneuver.  Written and cleared by the
    /// alert-decision process; stored verbatim here.
    pub alert_level: AlertLevel,
}

impl<'r> LegProgress<'r> {
    /// Fresh progress at step 0 of `leg`.
    ///
    /// # Panics
    ///
    /// Panics if `leg` has no steps.
    pub fn new(leg: &'r Leg) -> Self {
        Self::at_step(leg, 0)
    }

    /// Fresh progress at step `step_index` of `leg`.
    ///
    /// # Panics
    ///
    /// Panics if `step_index >= leg.step_count()`.
    pub fn at_step(leg: &'r Leg, step_index: usize) -> Self {
        assert!(
            step_index < leg.step_count(),
            "step index {step_index} out of range for leg with {} steps",
            leg.step_count(),
        );
        Self {
            leg,
            step_index,
            step_progress: StepProgress::new(&leg.steps()[step_index]),
            alert_level: AlertLevel::None,
        }
    }

    /// The leg this progress is tracking.
    #[inline]
    pub fn leg(&self) -> &'r Leg {
        self.leg
    }

    // ── Step cursor ───────────────────────────────────────────────────────

    #[inline]
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// Move the cursor to step `step_index`.
    ///
    /// Side effect: replaces the owned [`StepProgress`] with a fresh one for
    /// the new step — distance traveled resets to 0 and the maneuver
    /// distance to `None`, regardless of prior state.
    ///
    /// # Panics
    ///
    /// Panics if `step_index >= leg.step_count()`.  Callers must validate
    /// the index first; an out-of-range index means a stale route or a
    /// collaborator bug, not a recoverable condition.
    pub fn set_step_index(&mut self, step_index: usize) {
        assert!(
            step_index < self.leg.step_count(),
            "step index {step_index} out of range for leg with {} steps",
            self.leg.step_count(),
        );
        self.step_index = step_index;
        self.step_progress = StepProgress::new(&self.leg.steps()[step_index]);
    }

    /// Progress within the current step.
    #[inline]
    pub fn step_progress(&self) -> &StepProgress<'r> {
        &self.step_progress
    }

    /// Mutable progress within the current step — the location tracker
    /// writes `distance_traveled` and `distance_to_maneuver` through this.
    #[inline]
    pub fn step_progress_mut(&mut self) -> &mut StepProgress<'r> {
        &mut self.step_progress
    }

    // ── Derived metrics ───────────────────────────────────────────────────

    /// Metres traveled along the leg: completed steps plus the current
    /// step's own progress.
    pub fn distance_traveled(&self) -> f64 {
        let completed: f64 = self.leg.steps()[..self.step_index]
            .iter()
            .map(|s| s.distance_m)
            .sum();
        completed + self.step_progress.distance_traveled
    }

    /// Seconds remaining on the leg: steps after the current one plus the
    /// current step's own remainder.
    pub fn duration_remaining(&self) -> f64 {
        let pending: f64 = self.leg.steps()[self.step_index + 1..]
            .iter()
            .map(|s| s.expected_travel_secs)
            .sum();
        pending + self.step_progress.duration_remaining()
    }

    /// Fraction of the leg traveled.  1.0 for a zero-length leg.
    pub fn fraction_traveled(&self) -> f64 {
        if self.leg.distance_m <= 0.0 {
            return 1.0;
        }
        self.distance_traveled() / self.leg.distance_m
    }

    // ── Step queries ──────────────────────────────────────────────────────

    /// The step the traveler is currently on.
    #[inline]
    pub fn current_step(&self) -> &'r Step {
        &self.leg.steps()[self.step_index]
    }

    /// The step after the current one, or `None` at the end of the leg.
    pub fn upcoming_step(&self) -> Option<&'r Step> {
        self.leg.steps().get(self.step_index + 1)
    }

    /// The step two ahead of the current one, or `None` past the end.
    pub fn following_step(&self) -> Option<&'r Step> {
        self.leg.steps().get(self.step_index + 2)
    }

    /// The step immediately before `step`, or `None` if `step` is not in
    /// this leg or is its first step.
    pub fn step_before(&self, step: &Step) -> Option<&'r Step> {
        let index = self.position_of(step)?;
        if index > 0 {
            Some(&self.leg.steps()[index - 1])
        } else {
            None
        }
    }

    /// The step immediately after `step`, or `None` if `step` is not in
    /// this leg or is its last step.
    pub fn step_after(&self, step: &Step) -> Option<&'r Step> {
        let index = self.position_of(step)?;
        self.leg.steps().get(index + 1)
    }

    /// `true` iff `step` is the step the cursor is on.
    pub fn is_current_step(&self, step: &Step) -> bool {
        self.position_of(step) == Some(self.step_index)
    }

    /// First index of `step` within the leg by structural equality.
    fn position_of(&self, step: &Step) -> Option<usize> {
        self.leg.steps().iter().position(|s| s == step)
    }
}
