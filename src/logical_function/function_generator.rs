use log::debug;

use super::function::{OutputBit, RegulatoryFunction};
use super::states::{N_INPUT_PAIRS, N_LEVELS};
use crate::error::{RegulatoryLogicError, Result};

/// Number of output values a regulatory function can produce.
pub const N_OUTPUTS: usize = 2;

/// Largest function space the generator agrees to enumerate.
pub const MAX_FUNCTION_SPACE: usize = 1 << 20;

const FIXED_SPACE_SIZE: usize = 1 << N_INPUT_PAIRS;

const _: () = assert!(FIXED_SPACE_SIZE <= MAX_FUNCTION_SPACE);

/// Size of the space of functions from `levels x levels` input pairs to `outputs` values,
/// refusing anything above [`MAX_FUNCTION_SPACE`].
pub fn function_space_size(levels: usize, outputs: usize) -> Result<usize> {
    let too_large = || RegulatoryLogicError::FunctionSpaceTooLarge { levels, outputs };
    let n_pairs = levels.checked_mul(levels).ok_or_else(too_large)?;
    num::checked_pow(outputs, n_pairs)
        .filter(|size| *size <= MAX_FUNCTION_SPACE)
        .ok_or_else(too_large)
}

pub trait FunctionGenerator {
    fn generate_all(&self) -> Vec<RegulatoryFunction>;
}

/// Enumerates every total function over the canonical input pairs.
///
/// Functions come out in the order of the cartesian product of the output
/// alphabet `[1, 0]` over the nine pairs, first pair most significant:
/// function 0 is constant 1, the last one constant 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExhaustiveFunctionGenerator {
    space_size: usize,
}

impl ExhaustiveFunctionGenerator {
    /// Generator for the 3-level, 2-output domain.
    pub fn new() -> Self {
        Self { space_size: FIXED_SPACE_SIZE }
    }

    /// Checks the requested domain against [`MAX_FUNCTION_SPACE`] before anything
    /// is enumerated. Only the 3-level, 2-output domain has a function representation.
    pub fn with_domain(levels: usize, outputs: usize) -> Result<Self> {
        let space_size = function_space_size(levels, outputs)?;
        if (levels, outputs) != (N_LEVELS, N_OUTPUTS) {
            return Err(RegulatoryLogicError::UnsupportedDomain { levels, outputs });
        }
        Ok(Self { space_size })
    }

    pub fn space_size(&self) -> usize {
        self.space_size
    }

    fn function_at(index: usize) -> RegulatoryFunction {
        let mut outputs: [OutputBit; N_INPUT_PAIRS] = [false; N_INPUT_PAIRS];
        for (position, output) in outputs.iter_mut().enumerate() {
            let digit = (index >> (N_INPUT_PAIRS - 1 - position)) & 1;
            // digit 0 selects "1", the first symbol of the alphabet
            *output = digit == 0;
        }
        RegulatoryFunction::new(index, outputs)
    }
}

impl Default for ExhaustiveFunctionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionGenerator for ExhaustiveFunctionGenerator {
    fn generate_all(&self) -> Vec<RegulatoryFunction> {
        let functions: Vec<RegulatoryFunction> =
            (0..self.space_size).map(Self::function_at).collect();
        debug!("Generated {} regulatory functions", functions.len());
        functions
    }
}

/// All functions of the fixed 3-level, 2-output domain in generation order.
pub fn generate_all() -> Vec<RegulatoryFunction> {
    ExhaustiveFunctionGenerator::new().generate_all()
}
