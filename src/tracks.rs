// Bounded scalar tracks: stress, threat and guts all move the same way and only differ in
// their bounds.
use serde::{Deserialize, Serialize};

pub const MAX_THREAT: i32 = 10;
pub const MAX_GUTS: i32 = 5;

// Clamp without panicking: inverted bounds resolve to `max`.
fn clamp(value: i32, min: i32, max: i32) -> i32 {
    value.max(min).min(max)
}

// Apply a relative change and keep the result inside [min, max].
pub fn apply_delta(current: i32, delta: i32, min: i32, max: i32) -> i32 {
    clamp(current.saturating_add(delta), min, max)
}

// Replace the value outright, still inside [min, max].
pub fn set_value(value: i32, min: i32, max: i32) -> i32 {
    clamp(value, min, max)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarTrack {
    pub current: i32,
    pub min: i32,
    pub max: i32,
}

impl ScalarTrack {
    pub fn new(current: i32, min: i32, max: i32) -> Self {
        Self {
            current: set_value(current, min, max),
            min,
            max,
        }
    }

    // Psychological strain, 0..=max_stress.
    pub fn stress(max_stress: i32) -> Self {
        Self::new(0, 0, max_stress)
    }

    // Danger counter, 0..=10.
    pub fn threat() -> Self {
        Self::new(0, 0, MAX_THREAT)
    }

    // Heroic points, 0..=5. A fresh survivor starts with a full pool.
    pub fn guts() -> Self {
        Self::new(MAX_GUTS, 0, MAX_GUTS)
    }

    pub fn apply(self, delta: i32) -> Self {
        Self {
            current: apply_delta(self.current, delta, self.min, self.max),
            ..self
        }
    }

    pub fn set(self, value: i32) -> Self {
        Self {
            current: set_value(value, self.min, self.max),
            ..self
        }
    }

    pub fn with_max(self, max: i32) -> Self {
        Self::new(self.current, self.min, max)
    }

    pub fn is_maxed(&self) -> bool {
        self.current >= self.max
    }

    pub fn is_empty(&self) -> bool {
        self.current <= self.min
    }
}
