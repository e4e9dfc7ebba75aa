mod evaluator;
mod output_matrix;

pub use evaluator::{evaluate, FunctionEvaluator, GeneOutputLookup};
pub use output_matrix::{GeneOutput, OutputMatrix, OutputRow, FUNCTION_COLUMN};
