pub mod measurement;
pub mod reference;
pub mod transmission;

use thiserror::Error;

/// Shape or value problems that make a measurement run unusable.
///
/// `sample` is the 1-based position among data rows; comment and blank lines
/// of the source file are not counted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    #[error("measurement table is empty")]
    EmptyTable,
    #[error("sample {sample} has no trial columns")]
    NoTrials { sample: usize },
    #[error("sample {sample} has {found} trial columns, expected {expected}")]
    RaggedRow {
        sample: usize,
        expected: usize,
        found: usize,
    },
    #[error("sample {sample}, column {column}: value is not finite")]
    NonFinite { sample: usize, column: usize },
    #[error(
        "raw power ({raw_power} mW) equals ambient power ({ambient_power} mW); transmission is undefined"
    )]
    DegenerateReference { raw_power: f64, ambient_power: f64 },
    #[error("reference power must be finite (raw={raw_power}, ambient={ambient_power})")]
    NonFiniteReference { raw_power: f64, ambient_power: f64 },
}
