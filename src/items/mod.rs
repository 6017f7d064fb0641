//! Item system: item types, the hero's inventory, and the item catalog.

#![allow(unused_imports)]

pub mod catalog;
pub mod inventory;
pub mod types;

pub use inventory::*;
pub use types::*;
