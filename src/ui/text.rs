//! Flavor text selection.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::config::TextConfig;

/// A random wake-up line for `name`.
pub fn start_message(text: &TextConfig, name: &str, rng: &mut impl Rng) -> String {
    text.start_templates
        .choose(rng)
        .map(|template| template.replace("{name}", name))
        .unwrap_or_default()
}

pub fn move_message(text: &TextConfig, rng: &mut impl Rng) -> String {
    text.move_templates.choose(rng).cloned().unwrap_or_default()
}
