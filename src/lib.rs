//! simpledice - NdM dice sets
//!
//! Roll, average and format sets of identical dice. Each `DiceSet` owns its
//! own random generator; invalid sizes are clamped instead of rejected.

pub mod dice;

pub use dice::{
    roll_once, roll_once_with_detail, roll_set, roll_set_with_detail, DiceSet, DEFAULT_COUNT,
    DEFAULT_SEPARATOR, DEFAULT_SIDES, DEGENERATE_SIDES,
};
