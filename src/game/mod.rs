//! Day loop: run state, day progression and the interactive driver.

#![allow(unused_imports)]

pub mod logic;
pub mod runner;
pub mod state;

pub use logic::*;
pub use runner::*;
pub use state::*;
