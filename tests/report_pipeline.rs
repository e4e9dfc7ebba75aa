use rstest::{fixture, rstest};
use tempfile::tempdir;

use regulatory_logic::{
    evaluation::{evaluate, GeneOutput, OutputMatrix},
    export_import::{persist, persist_matrix, read_matrix, read_report},
    genes::GeneRegistry,
    logical_function::{filter, generate_all, RegulatoryFunction},
    pipeline::{compute, run, ReportConfig},
    RegulatoryLogicError,
};

#[fixture]
fn filtered() -> Vec<RegulatoryFunction> {
    filter(&generate_all())
}

#[fixture]
fn matrix(filtered: Vec<RegulatoryFunction>) -> OutputMatrix {
    evaluate(&filtered, &GeneRegistry::canonical())
}

#[rstest]
fn rows_equal_function_outputs(filtered: Vec<RegulatoryFunction>, matrix: OutputMatrix) {
    assert_eq!(matrix.n_rows(), filtered.len());
    for (f, row) in filtered.iter().zip(matrix.get_rows()) {
        assert_eq!(row.get_function_index(), f.index());
        let expected: Vec<GeneOutput> = f.outputs().map(GeneOutput::Bit).collect();
        assert_eq!(row.get_cells(), expected.as_slice());
    }
}

#[rstest]
fn no_cell_is_unavailable(matrix: OutputMatrix) {
    for row in matrix.get_rows() {
        assert!(row.get_cells().iter().all(|c| *c != GeneOutput::Unavailable));
    }
}

#[rstest]
fn header_and_row_contract(matrix: OutputMatrix) {
    let headers = matrix.headers();
    assert_eq!(headers[0], "Function");
    assert_eq!(headers[1..], (1..=9).map(|i| format!("Gene{}", i)).collect::<Vec<_>>()[..]);
    for (row, record) in matrix.get_rows().iter().zip(matrix.table_rows()) {
        assert_eq!(record.len(), 10);
        assert_eq!(record[0], format!("Function {}", row.get_function_index()));
        assert!(record[1..].iter().all(|v| v == "0" || v == "1"));
    }
}

#[rstest]
fn persisted_report_round_trips(matrix: OutputMatrix) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("gene_outputs.csv");
    persist_matrix(&matrix, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let first_line = text.lines().next().unwrap();
    assert_eq!(first_line, "Function,Gene1,Gene2,Gene3,Gene4,Gene5,Gene6,Gene7,Gene8,Gene9");
    assert_eq!(text.lines().count(), 19);

    let (headers, rows) = read_report(&path).unwrap();
    assert_eq!(headers, matrix.headers());
    assert_eq!(rows, matrix.table_rows());
    assert_eq!(read_matrix(&path).unwrap(), matrix);
}

#[rstest]
fn persist_into_a_file_path_fails() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let err = persist(&["Function".to_string()], &[], blocker.join("out.csv")).unwrap_err();
    assert!(matches!(err, RegulatoryLogicError::Persistence { .. }));
}

#[rstest]
fn run_writes_configured_destination() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.csv");
    let config = ReportConfig {
        output_file: Some(path.clone()),
        print_table: false,
        ..ReportConfig::default()
    };
    let output = run(&config).unwrap();
    assert_eq!(read_matrix(&path).unwrap(), output.matrix);
}

#[rstest]
fn run_without_destination_saves_nothing() {
    let config = ReportConfig {
        output_file: None,
        print_table: false,
        ..ReportConfig::default()
    };
    let output = run(&config).unwrap();
    assert_eq!(output.matrix, compute().unwrap().matrix);
}
