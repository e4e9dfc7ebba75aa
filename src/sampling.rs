//! Random activator/inhibitor flag vectors for a given level.
//!
//! Independent of the enumeration pipeline: a level and a number of units go in,
//! one flag per unit comes out, true meaning the unit is active.

use rand::{seq::SliceRandom, Rng};

use crate::error::{RegulatoryLogicError, Result};
use crate::logical_function::StateLevel;

/// `None` gives no active unit, `All` gives every unit active, `Some` gives
/// at least one active and at least one inactive unit.
pub fn sample_flags<R: Rng>(level: StateLevel, cardinality: usize, rng: &mut R) -> Result<Vec<bool>> {
    match level {
        StateLevel::None => Ok(vec![false; cardinality]),
        StateLevel::All => Ok(vec![true; cardinality]),
        StateLevel::Some => {
            if cardinality < 2 {
                return Err(RegulatoryLogicError::UnsatisfiableSample { level, cardinality });
            }
            let n_active = rng.random_range(1..cardinality);
            let mut flags: Vec<bool> = (0..cardinality).map(|i| i < n_active).collect();
            flags.shuffle(rng);
            Ok(flags)
        }
    }
}

pub fn sample_flags_str<R: Rng>(level: &str, cardinality: usize, rng: &mut R) -> Result<Vec<bool>> {
    sample_flags(level.parse()?, cardinality, rng)
}

/// Level described by a flag vector. Empty vectors have no meaningful level.
pub fn level_of(flags: &[bool]) -> Option<StateLevel> {
    let n_active = flags.iter().filter(|f| **f).count();
    match n_active {
        _ if flags.is_empty() => None,
        0 => Some(StateLevel::None),
        n if n == flags.len() => Some(StateLevel::All),
        _ => Some(StateLevel::Some),
    }
}
