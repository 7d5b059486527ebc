//! NdM dice sets
//!
//! A `DiceSet` holds a dice count and a side count, owns its own random
//! generator, and rolls, averages and formats itself. Out-of-range inputs are
//! clamped rather than rejected:
//! - count below 1 becomes 1
//! - sides below 2 becomes 0, which marks the set as degenerate

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

/// Dice count used by `DiceSet::default()`
pub const DEFAULT_COUNT: u32 = 1;

/// Side count used by `DiceSet::default()`
pub const DEFAULT_SIDES: u32 = 6;

/// Separator used by `Display`
pub const DEFAULT_SEPARATOR: &str = "d";

/// Side count stored when fewer than 2 sides are requested
pub const DEGENERATE_SIDES: u32 = 0;

/// A set of `count` dice with `sides` faces each
///
/// Not `Clone`: every set owns its generator, and a copied generator would
/// replay the same rolls.
pub struct DiceSet<R = StdRng> {
    count: u32,
    sides: u32,
    rng: R,
}

impl DiceSet<StdRng> {
    /// Create a dice set seeded from OS entropy
    pub fn new(count: u32, sides: u32) -> Self {
        Self::with_rng(count, sides, StdRng::from_os_rng())
    }

    /// Create a dice set with a reproducible roll sequence
    pub fn seeded(count: u32, sides: u32, seed: u64) -> Self {
        Self::with_rng(count, sides, StdRng::seed_from_u64(seed))
    }
}

impl Default for DiceSet<StdRng> {
    fn default() -> Self {
        Self::new(DEFAULT_COUNT, DEFAULT_SIDES)
    }
}

impl<R> DiceSet<R> {
    /// Number of dice in this set
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Number of sides on each die (0 when degenerate)
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Minimum possible outcome
    pub fn min(&self) -> u64 {
        u64::from(self.count)
    }

    /// Maximum possible outcome
    pub fn max(&self) -> u64 {
        u64::from(self.count) * u64::from(self.sides)
    }

    /// Whether the sides were clamped to `DEGENERATE_SIDES`
    pub fn is_degenerate(&self) -> bool {
        self.sides == DEGENERATE_SIDES
    }

    /// Replace both the count and the sides, clamping as on construction
    pub fn change_set(&mut self, count: u32, sides: u32) {
        let (count, sides) = clamp(count, sides);
        self.count = count;
        self.sides = sides;
    }

    /// Theoretical mean of the summed dice
    pub fn mean(&self) -> f64 {
        (f64::from(self.sides) + 1.0) / 2.0 * f64::from(self.count)
    }

    /// Expected result, rounded down or, with `round_up`, up
    pub fn average(&self, round_up: bool) -> u64 {
        // Twice the mean is exact in u64: (2^32) * (2^32 - 1) < 2^64
        let doubled = (u64::from(self.sides) + 1) * u64::from(self.count);
        if round_up {
            doubled.div_ceil(2)
        } else {
            doubled / 2
        }
    }

    /// Render as `{count}{separator}{sides}`, e.g. "3d6" or "10x2"
    pub fn format(&self, separator: &str) -> String {
        format!("{}{}{}", self.count, separator, self.sides)
    }
}

impl<R: Rng> DiceSet<R> {
    /// Create a dice set that draws from the given generator
    pub fn with_rng(count: u32, sides: u32, rng: R) -> Self {
        let (count, sides) = clamp(count, sides);
        Self { count, sides, rng }
    }

    /// Roll every die and return the total
    pub fn roll(&mut self) -> u64 {
        let mut total: u64 = 0;
        for _ in 0..self.count {
            total += u64::from(self.draw());
        }

        trace!("Rolled {}: {}", self, total);
        total
    }

    /// Roll every die and return the total plus each die's result in draw order
    pub fn roll_with_detail(&mut self) -> (u64, Vec<u32>) {
        let mut rolls = Vec::with_capacity(self.count as usize);
        for _ in 0..self.count {
            rolls.push(self.draw());
        }

        let total: u64 = rolls.iter().copied().map(u64::from).sum();
        trace!("Rolled {}: {} {:?}", self, total, rolls);
        (total, rolls)
    }

    /// Draw one die. Degenerate sets always yield 0 and leave the generator untouched.
    fn draw(&mut self) -> u32 {
        if self.is_degenerate() {
            return 0;
        }
        self.rng.random_range(1..=self.sides)
    }
}

impl<R> fmt::Display for DiceSet<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.count, DEFAULT_SEPARATOR, self.sides)
    }
}

impl<R> fmt::Debug for DiceSet<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiceSet")
            .field("count", &self.count)
            .field("sides", &self.sides)
            .finish_non_exhaustive()
    }
}

fn clamp(count: u32, sides: u32) -> (u32, u32) {
    let clamped_count = count.max(1);
    if clamped_count != count {
        debug!("Dice count {} clamped to {}", count, clamped_count);
    }

    let clamped_sides = if sides < 2 { DEGENERATE_SIDES } else { sides };
    if clamped_sides != sides {
        debug!("Die sides {} clamped to {}", sides, clamped_sides);
    }

    (clamped_count, clamped_sides)
}
