//! Action table: the tagged actions characters can take and their dispatch.

#![allow(unused_imports)]

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
