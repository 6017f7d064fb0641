//! Terminal front end: console I/O, prompts, rendering and flavor text.

#![allow(unused_imports)]

pub mod console;
pub mod prompts;
pub mod render;
pub mod text;

pub use console::*;
pub use prompts::*;
pub use render::*;
pub use text::*;
