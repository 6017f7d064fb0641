//! Characters: shared stats, the hero, enemies, and attack resolution.

#![allow(unused_imports)]

pub mod combatant;
pub mod enemy;
pub mod hero;
pub mod stats;

pub use combatant::*;
pub use enemy::*;
pub use hero::*;
pub use stats::*;
