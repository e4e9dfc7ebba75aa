use std::{cmp::Ordering, fmt, str::FromStr};

use crate::error::RegulatoryLogicError;

/// Number of levels an activator or inhibitor signal can take.
pub const N_LEVELS: usize = 3;

/// Number of distinct (activator, inhibitor) input pairs.
pub const N_INPUT_PAIRS: usize = N_LEVELS * N_LEVELS;

/// Discrete level of a regulatory signal, ordered None < Some < All.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateLevel {
    None,
    Some,
    All,
}

impl StateLevel {
    /// All levels in canonical (rank) order.
    pub const LEVELS: [StateLevel; N_LEVELS] = [StateLevel::None, StateLevel::Some, StateLevel::All];

    pub fn rank(self) -> usize {
        match self {
            StateLevel::None => 0,
            StateLevel::Some => 1,
            StateLevel::All => 2,
        }
    }

    pub fn from_rank(rank: usize) -> Option<Self> {
        Self::LEVELS.get(rank).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            StateLevel::None => "None",
            StateLevel::Some => "Some",
            StateLevel::All => "All",
        }
    }

    fn valid_names() -> String {
        Self::LEVELS
            .iter()
            .map(|level| level.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl PartialOrd for StateLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StateLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for StateLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StateLevel {
    type Err = RegulatoryLogicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::LEVELS
            .iter()
            .copied()
            .find(|level| level.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RegulatoryLogicError::InvalidState {
                value: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}

/// An (activator, inhibitor) combination of levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputPair {
    pub activator: StateLevel,
    pub inhibitor: StateLevel,
}

impl InputPair {
    pub fn new(activator: StateLevel, inhibitor: StateLevel) -> Self {
        Self { activator, inhibitor }
    }

    /// Every input pair, activator outer and inhibitor inner.
    /// This is the one ordering used by generation, lookup, genes and reports.
    pub fn canonical() -> [InputPair; N_INPUT_PAIRS] {
        let mut pairs = [InputPair::new(StateLevel::None, StateLevel::None); N_INPUT_PAIRS];
        for activator in StateLevel::LEVELS {
            for inhibitor in StateLevel::LEVELS {
                let pair = InputPair::new(activator, inhibitor);
                pairs[pair.position()] = pair;
            }
        }
        pairs
    }

    /// Position of the pair in the canonical order.
    pub fn position(&self) -> usize {
        self.activator.rank() * N_LEVELS + self.inhibitor.rank()
    }
}

impl fmt::Display for InputPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.activator, self.inhibitor)
    }
}

/// Parses `activator,inhibitor` (a `:` separator is accepted too).
impl FromStr for InputPair {
    type Err = RegulatoryLogicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (activator, inhibitor) = s
            .split_once(|c: char| c == ',' || c == ':')
            .ok_or_else(|| RegulatoryLogicError::InvalidState {
                value: s.to_string(),
                valid: format!("<activator>,<inhibitor> with levels {}", StateLevel::valid_names()),
            })?;
        Ok(InputPair::new(activator.parse()?, inhibitor.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_order() {
        assert!(StateLevel::None < StateLevel::Some);
        assert!(StateLevel::Some < StateLevel::All);
        let ranks: Vec<usize> = StateLevel::LEVELS.iter().map(|l| l.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2]);
        assert_eq!(StateLevel::from_rank(2), Some(StateLevel::All));
        assert_eq!(StateLevel::from_rank(3), None);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("none".parse::<StateLevel>().unwrap(), StateLevel::None);
        assert_eq!("SOME".parse::<StateLevel>().unwrap(), StateLevel::Some);
        assert_eq!(" All ".parse::<StateLevel>().unwrap(), StateLevel::All);
    }

    #[test]
    fn test_parse_invalid_names_value_and_valid_set() {
        let err = "Most".parse::<StateLevel>().unwrap_err();
        match &err {
            RegulatoryLogicError::InvalidState { value, valid } => {
                assert_eq!(value, "Most");
                assert_eq!(valid, "None, Some, All");
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert_eq!(err.to_string(), "invalid state 'Most', expected one of None, Some, All");
    }

    #[test]
    fn test_canonical_pairs() {
        let pairs = InputPair::canonical();
        assert_eq!(pairs.len(), 9);
        assert_eq!(pairs[0], InputPair::new(StateLevel::None, StateLevel::None));
        assert_eq!(pairs[1], InputPair::new(StateLevel::None, StateLevel::Some));
        assert_eq!(pairs[3], InputPair::new(StateLevel::Some, StateLevel::None));
        assert_eq!(pairs[8], InputPair::new(StateLevel::All, StateLevel::All));
        for (i, pair) in pairs.iter().enumerate() {
            assert_eq!(pair.position(), i);
        }
    }

    #[test]
    fn test_parse_pair() {
        let pair: InputPair = "all,none".parse().unwrap();
        assert_eq!(pair, InputPair::new(StateLevel::All, StateLevel::None));
        let pair: InputPair = "Some:All".parse().unwrap();
        assert_eq!(pair, InputPair::new(StateLevel::Some, StateLevel::All));
        assert!("All".parse::<InputPair>().is_err());
        assert!("All,Lots".parse::<InputPair>().is_err());
        assert_eq!(pair.to_string(), "(Some, All)");
    }
}
