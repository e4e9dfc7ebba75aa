use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use regulatory_logic::{
    export_import::DEFAULT_REPORT_PATH,
    logical_function::InputPair,
    pipeline::{run, ReportConfig},
};

/// Enumerates the activator/inhibitor regulatory functions, keeps the monotonic
/// boundary-correct ones and reports their output for every gene state.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Where to save the gene output table
    #[arg(short = 'o', long, default_value = DEFAULT_REPORT_PATH)]
    output: PathBuf,

    /// Print every generated function
    #[arg(long)]
    list_functions: bool,

    /// Print every function that passes the filter
    #[arg(long)]
    list_filtered: bool,

    /// Do not print the gene output table
    #[arg(long)]
    no_table: bool,

    /// Do not save the gene output table
    #[arg(long)]
    no_save: bool,

    /// Print the filtered functions' output at ACTIVATOR,INHIBITOR (e.g. Some,None)
    #[arg(short = 'q', long = "query")]
    queries: Vec<String>,
}

// Execution example:
// cargo run
// cargo run -- --list-filtered -q Some,Some -o reports/gene_outputs.csv

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let queries = cli
        .queries
        .iter()
        .map(|q| q.parse::<InputPair>())
        .collect::<Result<Vec<_>, _>>()
        .context("parsing --query")?;

    let config = ReportConfig {
        output_file: (!cli.no_save).then(|| cli.output.clone()),
        list_functions: cli.list_functions,
        list_filtered: cli.list_filtered,
        print_table: !cli.no_table,
        queries,
    };

    run(&config).context("computing gene output report")?;
    Ok(())
}
