//! One-shot rolls
//!
//! Stateless helpers for callers that do not keep a `DiceSet` around.

use rand::Rng;

use super::DiceSet;

/// Roll `count` dice with `sides` faces once and return the total
pub fn roll_once(count: u32, sides: u32) -> u64 {
    DiceSet::new(count, sides).roll()
}

/// Roll `count` dice with `sides` faces once and return the total plus each die's result
pub fn roll_once_with_detail(count: u32, sides: u32) -> (u64, Vec<u32>) {
    DiceSet::new(count, sides).roll_with_detail()
}

/// Roll an existing set. Only its generator advances.
pub fn roll_set<R: Rng>(set: &mut DiceSet<R>) -> u64 {
    set.roll()
}

/// Roll an existing set and return each die's result as well
pub fn roll_set_with_detail<R: Rng>(set: &mut DiceSet<R>) -> (u64, Vec<u32>) {
    set.roll_with_detail()
}
