use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictKind {
    Overlap,
    Adjacent,
    DoubleBooking,
    Capacity,
}

impl ConflictKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictKind::Overlap => "overlap",
            ConflictKind::Adjacent => "adjacent",
            ConflictKind::DoubleBooking => "double-booking",
            ConflictKind::Capacity => "capacity",
        }
    }
}

/// A configurable predicate used to flag scheduling problems.
///
/// Rules are evaluated in the order they appear in the rule list; the
/// resulting conflicts keep that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictRule {
    pub kind: ConflictKind,
    pub enabled: bool,
    /// Minimum gap in minutes between two bookings (adjacent rule only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_min: Option<i64>,
    /// Maximum bookings allowed at the same (date, time) (capacity rule only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<usize>,
}

impl ConflictRule {
    pub fn overlap() -> Self {
        Self {
            kind: ConflictKind::Overlap,
            enabled: true,
            buffer_min: None,
            max_capacity: None,
        }
    }

    pub fn adjacent(buffer_min: i64) -> Self {
        Self {
            kind: ConflictKind::Adjacent,
            enabled: true,
            buffer_min: Some(buffer_min),
            max_capacity: None,
        }
    }

    pub fn double_booking() -> Self {
        Self {
            kind: ConflictKind::DoubleBooking,
            enabled: true,
            buffer_min: None,
            max_capacity: None,
        }
    }

    pub fn capacity(max_capacity: usize) -> Self {
        Self {
            kind: ConflictKind::Capacity,
            enabled: true,
            buffer_min: None,
            max_capacity: Some(max_capacity),
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// The default rule set: overlap + adjacent(buffer) + double-booking +
/// capacity(max). Declaration order here fixes the report order.
pub fn default_rules(buffer_min: i64, max_capacity: usize) -> Vec<ConflictRule> {
    vec![
        ConflictRule::overlap(),
        ConflictRule::adjacent(buffer_min),
        ConflictRule::double_booking(),
        ConflictRule::capacity(max_capacity),
    ]
}

/// One detected scheduling problem for a candidate slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conflict {
    pub kind: ConflictKind,
    /// Human-readable description naming the conflicting booking.
    pub detail: String,
    /// Id of the conflicting appointment, when the conflict is pairwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_id: Option<u32>,
}
