//! creature_core - A stat-bearing creature entity
//!
//! This library provides:
//! - Creature: fixed vitality plus read/write offense and defense power
//! - DemoSettings: TOML-loadable values for the demonstration program

pub mod config;
pub mod creature;
pub mod prelude;

pub use config::{ConfigError, DemoSettings};
pub use creature::{Creature, DEFAULT_DEFENSE_POWER, DEFAULT_OFFENSE_POWER, DEFAULT_VITALITY};
