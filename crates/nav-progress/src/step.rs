//! Per-step travel progress — the leaf of the hierarchy.

use nav_route::Step;

/// Progress within a single step.
///
/// `distance_traveled` is written by the location tracker on every position
/// fix.  It is conceptually bounded by `[0, step.distance_m]` but not
/// enforced here — map-matching may briefly report positions past the end of
/// a step, and clamping is the tracker's call to make.
#[derive(Debug)]
pub struct StepProgress<'r> {
    step: &'r Step,

    /// Metres traveled along the current step, as reported by the location
    /// tracker.
    pub distance_traveled: f64,

    /// Metres from the traveler's snapped position to the step's maneuver
    /// point.  `None` until the tracker first computes it.
    pub distance_to_maneuver: Option<f64>,
}

impl<'r> StepProgress<'r> {
    /// Fresh progress at the start of `step`: zero distance traveled, no
    /// maneuver distance yet.
    pub fn new(step: &'r Step) -> Self {
        Self {
            step,
            distance_traveled: 0.0,
            distance_to_maneuver: None,
        }
    }

    /// The step this progress is tracking.
    #[inline]
    pub fn step(&self) -> &'r Step {
        self.step
    }

    /// Metres left on the step: `step.distance_m − distance_traveled`.
    #[inline]
    pub fn distance_remaining(&self) -> f64 {
        self.step.distance_m - self.distance_traveled
    }

    /// Fraction of the step traveled.
    ///
    /// Returns 1.0 for a zero-length step (see the crate-level policy on
    /// degenerate distances).
    pub fn fraction_traveled(&self) -> f64 {
        if self.step.distance_m <= 0.0 {
            return 1.0;
        }
        self.distance_traveled / self.step.distance_m
    }

    /// Seconds left on the step, scaled from the expected travel time by the
    /// untraveled fraction.
    pub fn duration_remaining(&self) -> f64 {
        (1.0 - self.fraction_traveled()) * self.step.expected_travel_secs
    }
}
