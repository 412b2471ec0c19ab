//! Creature - A stat-bearing entity with controlled access to its stats

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vitality every creature is created with
pub const DEFAULT_VITALITY: i64 = 100;
/// Offense power of a freshly created creature
pub const DEFAULT_OFFENSE_POWER: i64 = 0;
/// Defense power of a freshly created creature
pub const DEFAULT_DEFENSE_POWER: i64 = 0;

/// A creature with fixed vitality and two freely writable combat stats.
///
/// Offense and defense accept any integer, including zero and negative
/// values. Vitality is set at construction and has no mutator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    /// Health points, always restored to the default when deserialized
    #[serde(skip_deserializing, default = "default_vitality")]
    vitality: i64,
    #[serde(default)]
    offense_power: i64,
    #[serde(default)]
    defense_power: i64,
}

fn default_vitality() -> i64 {
    DEFAULT_VITALITY
}

impl Default for Creature {
    fn default() -> Self {
        Creature {
            vitality: DEFAULT_VITALITY,
            offense_power: DEFAULT_OFFENSE_POWER,
            defense_power: DEFAULT_DEFENSE_POWER,
        }
    }
}

impl Creature {
    /// Create a creature with default stats
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vitality(&self) -> i64 {
        self.vitality
    }

    pub fn offense_power(&self) -> i64 {
        self.offense_power
    }

    /// Overwrite offense power (no bounds checks)
    pub fn set_offense_power(&mut self, value: i64) {
        tracing::trace!(stat = "offense_power", old = self.offense_power, new = value, "set stat");
        self.offense_power = value;
    }

    pub fn defense_power(&self) -> i64 {
        self.defense_power
    }

    /// Overwrite defense power (no bounds checks)
    pub fn set_defense_power(&mut self, value: i64) {
        tracing::trace!(stat = "defense_power", old = self.defense_power, new = value, "set stat");
        self.defense_power = value;
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vitality={} offense={} defense={}",
            self.vitality, self.offense_power, self.defense_power
        )
    }
}
