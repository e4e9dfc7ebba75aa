use log::debug;

use super::output_matrix::{GeneOutput, OutputMatrix, OutputRow};
use crate::genes::{Gene, GeneRegistry};
use crate::logical_function::RegulatoryFunction;

/// Anything that can tell the output it produces for a gene.
pub trait GeneOutputLookup {
    fn output_for(&self, gene: &Gene) -> GeneOutput;
}

impl GeneOutputLookup for RegulatoryFunction {
    fn output_for(&self, gene: &Gene) -> GeneOutput {
        self.get(gene.input_pair())
            .map(GeneOutput::Bit)
            .unwrap_or(GeneOutput::Unavailable)
    }
}

pub struct FunctionEvaluator<'a> {
    genes: &'a GeneRegistry,
}

impl<'a> FunctionEvaluator<'a> {
    pub fn new(genes: &'a GeneRegistry) -> Self {
        Self { genes }
    }

    pub fn evaluate_one(&self, function: &RegulatoryFunction) -> OutputRow {
        let cells = self.genes.iter().map(|gene| function.output_for(gene)).collect();
        OutputRow::new(function.index(), cells)
    }

    /// One row per function, in the order given; one column per gene, in registry order.
    pub fn evaluate(&self, functions: &[RegulatoryFunction]) -> OutputMatrix {
        let rows: Vec<OutputRow> = functions.iter().map(|f| self.evaluate_one(f)).collect();
        debug!("Evaluated {} functions on {} genes", rows.len(), self.genes.len());
        OutputMatrix::new(self.genes.labels(), rows)
    }
}

pub fn evaluate(functions: &[RegulatoryFunction], genes: &GeneRegistry) -> OutputMatrix {
    FunctionEvaluator::new(genes).evaluate(functions)
}
