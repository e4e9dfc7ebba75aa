use std::path::PathBuf;

use log::info;

use crate::error::Result;
use crate::evaluation::{FunctionEvaluator, GeneOutput, OutputMatrix};
use crate::export_import::{persist_matrix, DEFAULT_REPORT_PATH};
use crate::genes::GeneRegistry;
use crate::logical_function::{
    ExhaustiveFunctionGenerator, FunctionGenerator, InputPair, PredicateFilter, RegulatoryFunction,
    N_LEVELS, N_OUTPUTS,
};
use crate::report::{describe_functions, render_table};

/// What a run prints and where it saves the report.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub output_file: Option<PathBuf>,
    pub list_functions: bool,
    pub list_filtered: bool,
    pub print_table: bool,
    /// Input pairs to print the filtered functions' outputs for.
    pub queries: Vec<InputPair>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_file: Some(PathBuf::from(DEFAULT_REPORT_PATH)),
            list_functions: false,
            list_filtered: false,
            print_table: true,
            queries: Vec::new(),
        }
    }
}

/// Everything computed by one pass of generate, filter and evaluate.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub functions: Vec<RegulatoryFunction>,
    pub filtered: Vec<RegulatoryFunction>,
    pub genes: GeneRegistry,
    pub matrix: OutputMatrix,
}

pub fn compute() -> Result<PipelineOutput> {
    let generator = ExhaustiveFunctionGenerator::with_domain(N_LEVELS, N_OUTPUTS)?;
    let functions = generator.generate_all();
    info!("Generated {} regulatory functions", functions.len());

    let filtered = PredicateFilter::standard().filter(&functions);
    info!("{} functions are monotonic and satisfy the boundary condition", filtered.len());

    let genes = GeneRegistry::canonical();
    let matrix = FunctionEvaluator::new(&genes).evaluate(&filtered);

    Ok(PipelineOutput { functions, filtered, genes, matrix })
}

/// Output of every filtered function at `pair`, as a two-column table.
pub fn query_table(filtered: &[RegulatoryFunction], pair: InputPair) -> (Vec<String>, Vec<Vec<String>>) {
    let headers = vec!["Function".to_string(), pair.to_string()];
    let rows = filtered
        .iter()
        .map(|f| {
            let output = GeneOutput::Bit(f.lookup(pair));
            vec![format!("Function {}", f.index()), output.to_string()]
        })
        .collect();
    (headers, rows)
}

/// Computes the report, prints what the config asks for and persists the matrix.
pub fn run(config: &ReportConfig) -> Result<PipelineOutput> {
    let output = compute()?;

    if config.list_functions {
        println!("All functions:\n");
        print!("{}", describe_functions(&output.functions));
    }
    if config.list_filtered {
        println!("Filtered functions:\n");
        print!("{}", describe_functions(&output.filtered));
    }

    let headers = output.matrix.headers();
    let rows = output.matrix.table_rows();

    if let Some(path) = &config.output_file {
        persist_matrix(&output.matrix, path)?;
    }
    if config.print_table {
        println!("{}", render_table(&headers, &rows));
    }
    for pair in &config.queries {
        let (query_headers, query_rows) = query_table(&output.filtered, *pair);
        println!("{}", render_table(&query_headers, &query_rows));
    }

    Ok(output)
}
