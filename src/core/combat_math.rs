//! Shared roll math for combat and day events.
//!
//! Every chance in the game is a percent compared against a uniform draw in
//! `1..=100`. Crit, flee and item finds succeed when the draw is at or below
//! the chance; the hero's dodge direction is selected by [`DodgeRule`].

use rand::Rng;
use serde::Deserialize;

/// How a dodge roll is compared against the dodge chance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DodgeRule {
    /// Dodge when the roll is greater than or equal to the chance.
    #[default]
    RollAtLeast,
    /// Dodge when the roll is less than or equal to the chance, like every other roll.
    RollAtMost,
}

impl DodgeRule {
    pub fn dodges(self, roll: u32, dodge_chance: u32) -> bool {
        match self {
            DodgeRule::RollAtLeast => roll >= dodge_chance,
            DodgeRule::RollAtMost => roll <= dodge_chance,
        }
    }
}

/// Uniform draw in `1..=100`.
pub fn roll_percent(rng: &mut impl Rng) -> u32 {
    rng.gen_range(1..=100)
}

/// Rolls a standard `roll <= chance` check.
pub fn roll_chance(chance_percent: u32, rng: &mut impl Rng) -> bool {
    roll_percent(rng) <= chance_percent
}

pub fn roll_dodge(rule: DodgeRule, dodge_chance: u32, rng: &mut impl Rng) -> bool {
    rule.dodges(roll_percent(rng), dodge_chance)
}

/// Applies the crit multiplier, rounding half to even.
///
/// 20 becomes 30, 15 becomes 22.
pub fn crit_damage(base_damage: i32, multiplier: f64) -> i32 {
    (base_damage as f64 * multiplier).round_ties_even() as i32
}

/// Uniform draw in an inclusive `(min, max)` range.
pub fn roll_range_u32(range: (u32, u32), rng: &mut impl Rng) -> u32 {
    rng.gen_range(range.0..=range.1)
}

pub fn roll_range_i32(range: (i32, i32), rng: &mut impl Rng) -> i32 {
    rng.gen_range(range.0..=range.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_roll_percent_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let roll = roll_percent(&mut rng);
            assert!((1..=100).contains(&roll));
        }
    }

    #[test]
    fn test_roll_chance_always_and_never() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(roll_chance(100, &mut rng));
            assert!(!roll_chance(0, &mut rng));
        }
    }

    #[test]
    fn test_roll_chance_converges() {
        let mut rng = StdRng::seed_from_u64(42);
        let hits = (0..10_000).filter(|_| roll_chance(25, &mut rng)).count();
        // 25% of 10k, generous band
        assert!((2_200..=2_800).contains(&hits), "hits = {hits}");
    }

    #[test]
    fn test_dodge_rule_direction() {
        // Roll at least: high rolls dodge
        assert!(DodgeRule::RollAtLeast.dodges(50, 50));
        assert!(DodgeRule::RollAtLeast.dodges(100, 50));
        assert!(!DodgeRule::RollAtLeast.dodges(49, 50));

        // Roll at most: low rolls dodge
        assert!(DodgeRule::RollAtMost.dodges(50, 50));
        assert!(DodgeRule::RollAtMost.dodges(1, 50));
        assert!(!DodgeRule::RollAtMost.dodges(51, 50));
    }

    #[test]
    fn test_dodge_extremes() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            // A chance of 1 under roll-at-least always dodges, 101 never does
            assert!(roll_dodge(DodgeRule::RollAtLeast, 1, &mut rng));
            assert!(!roll_dodge(DodgeRule::RollAtLeast, 101, &mut rng));
            assert!(!roll_dodge(DodgeRule::RollAtMost, 0, &mut rng));
        }
    }

    #[test]
    fn test_crit_damage() {
        assert_eq!(crit_damage(20, 1.5), 30);
        assert_eq!(crit_damage(15, 1.5), 22);
        assert_eq!(crit_damage(25, 1.5), 38);
        assert_eq!(crit_damage(10, 2.0), 20);
    }

    #[test]
    fn test_roll_range_inclusive() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..2_000 {
            let xp = roll_range_u32((15, 30), &mut rng);
            assert!((15..=30).contains(&xp));
            seen_min |= xp == 15;
            seen_max |= xp == 30;
        }
        assert!(seen_min && seen_max);

        assert_eq!(roll_range_i32((-3, -3), &mut rng), -3);
    }
}
