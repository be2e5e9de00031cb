//! `nav-route` — the immutable route model for the `rust_nav` workspace.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`geo`]    | `GeoPoint` — maneuver coordinates, haversine distance       |
//! | [`route`]  | `Step`, `Leg`, `Route` — the static route hierarchy         |
//! | [`loader`] | CSV route interchange (`load_route_csv`)                    |
//! | [`error`]  | `RouteError`, `RouteResult<T>`                              |
//!
//! # Trust model
//!
//! A `Route` is a *precomputed* artifact handed over by a directions
//! provider.  This crate stores it verbatim: leg and route totals are taken
//! as given and are **not** revalidated against the sum of their parts.  The
//! `from_steps`/`from_legs` constructors derive the totals for callers that
//! assemble routes by hand, which makes the sums consistent by construction.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                        |
//! |---------|---------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `GeoPoint`, `Step`, `Leg`,  |
//!           | and `Route` for JSON round-trips of precomputed routes.       |

pub mod error;
pub mod geo;
pub mod loader;
pub mod route;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RouteError, RouteResult};
pub use geo::GeoPoint;
pub use loader::{load_route_csv, load_route_reader};
pub use route::{Leg, Route, Step};
