//! Crawler - Terminal Turn-Based Dungeon Crawler Library
//!
//! Ten days, one goblin a day. The engines under [`actions`], [`combat`] and
//! [`game`] are pure state transitions that report [`core::GameEvent`]s; the
//! [`ui`] module owns all terminal I/O.

pub mod actions;
pub mod build_info;
pub mod character;
pub mod combat;
pub mod core;
pub mod game;
pub mod items;
pub mod ui;

pub use crate::core::config::GameConfig;
pub use crate::core::error::{GameError, Result};
