//! `nav-progress` — hierarchical travel-progress tracking over a precomputed
//! route.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                     |
//! |-----------|--------------------------------------------------------------|
//! | [`alert`] | `AlertLevel` — passive maneuver-proximity tag                |
//! | [`step`]  | `StepProgress` — distance traveled within the current step   |
//! | [`leg`]   | `LegProgress` — step cursor + step-level aggregation         |
//! | [`route`] | `RouteProgress` — leg cursor + route-level aggregation       |
//!
//! # Model
//!
//! Three nested cursors, each a thin layer over the one below:
//!
//! 1. [`RouteProgress`] tracks which leg of the route is current and owns one
//!    [`LegProgress`].
//! 2. [`LegProgress`] tracks which step of that leg is current and owns one
//!    [`StepProgress`].
//! 3. [`StepProgress`] tracks raw distance traveled within the current step —
//!    the only state the location tracker touches on every position fix.
//!
//! Control flows top-down: advancing a leg index rebuilds the owned
//! `LegProgress` at step 0; advancing a step index rebuilds the owned
//! `StepProgress` with zeroed distance.  The owned child is constructed
//! eagerly and is never absent.  Reads flow bottom-up: every
//! distance/duration/fraction query recomputes from the leaf on each call, so
//! values are never stale.
//!
//! # Degenerate distances
//!
//! `fraction_traveled()` is defined as 1.0 whenever the total distance at
//! that level is zero (a zero-length step, leg, or route has nothing left to
//! travel).  This also pins `duration_remaining()` to 0 for zero-length
//! steps instead of propagating NaN.
//!
//! # Single-writer model
//!
//! No locking and no I/O.  Every mutator takes `&mut self`; one
//! sequential owner (the navigation-update loop) drives index changes and
//! distance updates.  Share across threads only behind external
//! synchronization.

pub mod alert;
pub mod leg;
pub mod route;
pub mod step;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use alert::AlertLevel;
pub use leg::LegProgress;
pub use route::RouteProgress;
pub use step::StepProgress;
