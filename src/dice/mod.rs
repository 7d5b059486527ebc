//! Dice module
//!
//! Implements NdM dice sets with:
//! - Clamped construction and in-place resizing
//! - Summed rolls, optionally with per-die results
//! - Expected-value averages rounded down or up
//! - "3d6"-style display with a custom separator
//! - One-shot roll helpers

mod once;
mod set;

pub use once::{roll_once, roll_once_with_detail, roll_set, roll_set_with_detail};
pub use set::{DiceSet, DEFAULT_COUNT, DEFAULT_SEPARATOR, DEFAULT_SIDES, DEGENERATE_SIDES};
