use log::trace;

use super::function::RegulatoryFunction;
use super::states::{InputPair, StateLevel};

/// A pure yes/no check on a regulatory function.
pub trait FunctionPredicate {
    fn name(&self) -> &'static str;

    fn is_satisfied(&self, function: &RegulatoryFunction) -> bool;
}

/// Output never decreases as the activator level rises, for every inhibitor level.
pub fn monotonic_increasing_in_activator(function: &RegulatoryFunction) -> bool {
    StateLevel::LEVELS.iter().all(|&inhibitor| {
        ordered_level_pairs().all(|(low, high)| {
            let low_out = function.lookup(InputPair::new(low, inhibitor));
            let high_out = function.lookup(InputPair::new(high, inhibitor));
            u8::from(low_out) <= u8::from(high_out)
        })
    })
}

/// Output never increases as the inhibitor level rises, for every activator level.
pub fn monotonic_decreasing_in_inhibitor(function: &RegulatoryFunction) -> bool {
    StateLevel::LEVELS.iter().all(|&activator| {
        ordered_level_pairs().all(|(low, high)| {
            let low_out = function.lookup(InputPair::new(activator, low));
            let high_out = function.lookup(InputPair::new(activator, high));
            u8::from(low_out) >= u8::from(high_out)
        })
    })
}

/// Full activation without inhibition switches on; full inhibition without activation switches off.
pub fn boundary_condition(function: &RegulatoryFunction) -> bool {
    function.lookup(InputPair::new(StateLevel::All, StateLevel::None))
        && !function.lookup(InputPair::new(StateLevel::None, StateLevel::All))
}

// every (a, b) with rank(a) < rank(b)
fn ordered_level_pairs() -> impl Iterator<Item = (StateLevel, StateLevel)> {
    StateLevel::LEVELS.into_iter().flat_map(|low| {
        StateLevel::LEVELS
            .into_iter()
            .filter(move |high| low.rank() < high.rank())
            .map(move |high| (low, high))
    })
}

pub struct MonotonicIncreasingInActivator;

impl FunctionPredicate for MonotonicIncreasingInActivator {
    fn name(&self) -> &'static str {
        "monotonic increasing in activator"
    }

    fn is_satisfied(&self, function: &RegulatoryFunction) -> bool {
        monotonic_increasing_in_activator(function)
    }
}

pub struct MonotonicDecreasingInInhibitor;

impl FunctionPredicate for MonotonicDecreasingInInhibitor {
    fn name(&self) -> &'static str {
        "monotonic decreasing in inhibitor"
    }

    fn is_satisfied(&self, function: &RegulatoryFunction) -> bool {
        monotonic_decreasing_in_inhibitor(function)
    }
}

pub struct BoundaryCondition;

impl FunctionPredicate for BoundaryCondition {
    fn name(&self) -> &'static str {
        "boundary condition"
    }

    fn is_satisfied(&self, function: &RegulatoryFunction) -> bool {
        boundary_condition(function)
    }
}

/// Conjunction of predicates. A function passes when every predicate holds.
pub struct PredicateFilter {
    predicates: Vec<Box<dyn FunctionPredicate>>,
}

impl PredicateFilter {
    pub fn new(predicates: Vec<Box<dyn FunctionPredicate>>) -> Self {
        Self { predicates }
    }

    /// Both monotonicity predicates plus the boundary condition.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(MonotonicIncreasingInActivator),
            Box::new(MonotonicDecreasingInInhibitor),
            Box::new(BoundaryCondition),
        ])
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn accepts(&self, function: &RegulatoryFunction) -> bool {
        match self.predicates.iter().find(|p| !p.is_satisfied(function)) {
            Some(failed) => {
                trace!("Function {} rejected: {}", function, failed.name());
                false
            }
            None => true,
        }
    }

    /// Keeps the functions accepted by every predicate, in their original order.
    pub fn filter(&self, functions: &[RegulatoryFunction]) -> Vec<RegulatoryFunction> {
        functions.iter().filter(|f| self.accepts(f)).copied().collect()
    }
}

impl Default for PredicateFilter {
    fn default() -> Self {
        Self::standard()
    }
}

/// Filters with the standard predicate set.
pub fn filter(functions: &[RegulatoryFunction]) -> Vec<RegulatoryFunction> {
    PredicateFilter::standard().filter(functions)
}
