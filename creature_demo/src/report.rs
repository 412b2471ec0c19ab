//! Console formatting for the demo

use creature_core::Creature;

/// Package, version and target platform of this build
pub fn version_line() -> String {
    format!(
        "{} {} ({}-{})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::ARCH,
        std::env::consts::OS
    )
}

/// Attack and defense lines, newline terminated
pub fn stat_lines(creature: &Creature) -> String {
    format!(
        "The creature's attack stat is: {}\nThe creature's defense stat is: {}\n",
        creature.offense_power(),
        creature.defense_power()
    )
}
