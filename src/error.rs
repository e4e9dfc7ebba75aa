use std::path::PathBuf;

use thiserror::Error;

use crate::logical_function::StateLevel;

pub type Result<T> = std::result::Result<T, RegulatoryLogicError>;

#[derive(Debug, Error)]
pub enum RegulatoryLogicError {
    /// A level string outside the known set of states.
    #[error("invalid state '{value}', expected one of {valid}")]
    InvalidState { value: String, valid: String },

    #[error("could not persist report to {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A persisted report that does not follow the output contract.
    #[error("malformed report{}: {reason}", at_line(.line))]
    MalformedReport { line: Option<usize>, reason: String },

    #[error("function space for {levels} levels and {outputs} outputs exceeds the enumeration limit")]
    FunctionSpaceTooLarge { levels: usize, outputs: usize },

    #[error("no function representation for {levels} levels and {outputs} outputs")]
    UnsupportedDomain { levels: usize, outputs: usize },

    #[error("cannot sample {cardinality} flags for level {level}")]
    UnsatisfiableSample { level: StateLevel, cardinality: usize },
}

impl RegulatoryLogicError {
    pub(crate) fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Persistence { path: path.into(), source }
    }
}

fn at_line(line: &Option<usize>) -> String {
    line.map(|l| format!(" at line {}", l)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_report_message() {
        let with_line = RegulatoryLogicError::MalformedReport { line: Some(3), reason: "bad output value '2'".to_string() };
        assert_eq!(with_line.to_string(), "malformed report at line 3: bad output value '2'");

        let without_line = RegulatoryLogicError::MalformedReport { line: None, reason: "UTF8".to_string() };
        assert_eq!(without_line.to_string(), "malformed report: UTF8");
    }
}
