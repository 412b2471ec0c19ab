//! Values the demonstration program writes through the mutators

use crate::creature::Creature;
use serde::{Deserialize, Serialize};

/// Stats applied to a fresh creature by the demo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoSettings {
    #[serde(default = "default_offense_power")]
    pub offense_power: i64,
    #[serde(default = "default_defense_power")]
    pub defense_power: i64,
}

impl Default for DemoSettings {
    fn default() -> Self {
        DemoSettings {
            offense_power: default_offense_power(),
            defense_power: default_defense_power(),
        }
    }
}

fn default_offense_power() -> i64 {
    50
}
fn default_defense_power() -> i64 {
    30
}

impl DemoSettings {
    /// Write both configured stats onto a creature
    pub fn apply(&self, creature: &mut Creature) {
        creature.set_offense_power(self.offense_power);
        creature.set_defense_power(self.defense_power);
    }
}
