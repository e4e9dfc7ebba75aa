mod states;
mod function;
mod function_generator;
mod predicates;

pub use states::{InputPair, StateLevel, N_INPUT_PAIRS, N_LEVELS};

pub use function::{OutputBit, RegulatoryFunction};

pub use function_generator::{
    function_space_size, generate_all, ExhaustiveFunctionGenerator, FunctionGenerator,
    MAX_FUNCTION_SPACE, N_OUTPUTS,
};

pub use predicates::{
    boundary_condition, filter, monotonic_decreasing_in_inhibitor,
    monotonic_increasing_in_activator, BoundaryCondition, FunctionPredicate,
    MonotonicDecreasingInInhibitor, MonotonicIncreasingInActivator, PredicateFilter,
};
