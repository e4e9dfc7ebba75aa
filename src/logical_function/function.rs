use std::fmt;

use bitvec::prelude::*;

use super::states::{InputPair, N_INPUT_PAIRS};

/// Output of a regulatory function. Compared numerically: `false` (0) < `true` (1).
pub type OutputBit = bool;

type OutputTable = BitArr!(for N_INPUT_PAIRS, in u16, Lsb0);

/// Total mapping from every [`InputPair`] to an [`OutputBit`].
///
/// Bit `i` of the table holds the output of the `i`-th pair in canonical
/// order. The table is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegulatoryFunction {
    index: usize,
    outputs: OutputTable,
}

impl RegulatoryFunction {
    pub fn new(index: usize, outputs: [OutputBit; N_INPUT_PAIRS]) -> Self {
        let mut table: OutputTable = BitArray::ZERO;
        for (position, bit) in outputs.into_iter().enumerate() {
            table.set(position, bit);
        }
        Self { index, outputs: table }
    }

    /// Builds a function from a closure evaluated on each canonical pair.
    pub fn from_fn<F>(index: usize, mut rule: F) -> Self
    where
        F: FnMut(InputPair) -> OutputBit,
    {
        let outputs = InputPair::canonical().map(|pair| rule(pair));
        Self::new(index, outputs)
    }

    /// Position in generation order. Carries no meaning beyond reporting.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn lookup(&self, pair: InputPair) -> OutputBit {
        self.outputs[pair.position()]
    }

    /// Lookup that reports a missing entry as `None`. Always `Some` for a total function.
    pub fn get(&self, pair: InputPair) -> Option<OutputBit> {
        self.outputs.get(pair.position()).map(|bit| *bit)
    }

    /// Outputs in canonical pair order.
    pub fn outputs(&self) -> impl Iterator<Item = OutputBit> + '_ {
        self.outputs[..N_INPUT_PAIRS].iter().by_vals()
    }

    pub fn entries(&self) -> impl Iterator<Item = (InputPair, OutputBit)> + '_ {
        InputPair::canonical().into_iter().zip(self.outputs())
    }

    /// Outputs as a string of '0'/'1', first canonical pair first.
    pub fn bit_string(&self) -> String {
        self.outputs().map(|bit| if bit { '1' } else { '0' }).collect()
    }

    /// Multi-line listing: a `Function {number}:` header then one `pair -> bit` line per entry.
    pub fn describe(&self, number: usize) -> String {
        let mut text = format!("Function {}:\n", number);
        for (pair, bit) in self.entries() {
            text.push_str(&format!("  {} -> {}\n", pair, u8::from(bit)));
        }
        text
    }
}

impl fmt::Display for RegulatoryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} [{}]", self.index, self.bit_string())
    }
}
