//! Prelude module for convenient imports
//!
//! ```rust
//! use creature_core::prelude::*;
//! ```

pub use crate::creature::Creature;
pub use crate::config::{load_toml, parse_toml, ConfigError, DemoSettings};
