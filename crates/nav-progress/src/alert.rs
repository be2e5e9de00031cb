//! Maneuver-proximity alert tag.
//!
//! The progress model only *stores* this value.  Deciding when to raise or
//! clear an alert (from distance to maneuver, speed, road class…) belongs to
//! the alert-decision process that owns the navigation loop; there are no
//! transition rules here.

/// Coarse proximity of the traveler to the next maneuver.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum AlertLevel {
    /// No alert pending (default state).
    #[default]
    None,
    /// The traveler just departed on a new leg.
    Depart,
    /// The maneuver is far ahead.
    Low,
    /// The maneuver is approaching.
    Medium,
    /// The maneuver is imminent.
    High,
    /// The traveler is arriving at the leg's destination.
    Arrive,
}

impl AlertLevel {
    /// Human-readable label, useful for log lines and CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            AlertLevel::None   => "none",
            AlertLevel::Depart => "depart",
            AlertLevel::Low    => "low",
            AlertLevel::Medium => "medium",
            AlertLevel::High   => "high",
            AlertLevel::Arrive => "arrive",
        }
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
