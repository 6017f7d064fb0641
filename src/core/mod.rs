//! Core configuration, roll math, errors and events.

#![allow(unused_imports)]

pub mod combat_math;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;

pub use combat_math::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use events::*;
