use crate::model::InvalidInputError;
use crate::model::measurement::MeasurementTable;
use crate::model::reference::ReferencePower;
use crate::model::transmission::{ReducedRow, TransmissionMatrix};
use crate::pipeline::stage2_normalize::normalize_table;

#[derive(Debug, Clone)]
pub struct Stage3Output {
    pub reference: ReferencePower,
    pub matrix: TransmissionMatrix,
    pub reduced: Vec<ReducedRow>,
}

/// Normalizes trial readings against a reference and collapses each sample
/// to its mean and population standard deviation.
#[derive(Debug, Clone, Copy)]
pub struct TransmissionReducer {
    reference: ReferencePower,
}

impl TransmissionReducer {
    pub fn new(reference: ReferencePower) -> Self {
        Self { reference }
    }

    /// Reduced rows come back alongside the per-trial transmissions they
    /// were computed from.
    pub fn reduce(&self, table: &MeasurementTable) -> Stage3Output {
        let matrix = normalize_table(table, &self.reference);
        let reduced = reduce_matrix(&matrix);
        Stage3Output {
            reference: self.reference,
            matrix,
            reduced,
        }
    }
}

/// Validates a raw `thickness, trial...` table and reference pair, then reduces it.
///
/// The reference is checked before the table, so a degenerate reference is
/// reported even when the table is also malformed.
pub fn reduce_rows(
    rows: &[Vec<f64>],
    raw_power: f64,
    ambient_power: f64,
) -> Result<Stage3Output, InvalidInputError> {
    let reference = ReferencePower::new(raw_power, ambient_power)?;
    let table = MeasurementTable::from_rows(rows.to_vec())?;
    Ok(TransmissionReducer::new(reference).reduce(&table))
}

pub fn reduce_matrix(matrix: &TransmissionMatrix) -> Vec<ReducedRow> {
    matrix
        .rows
        .iter()
        .map(|row| ReducedRow {
            thickness: row.thickness,
            transmission_avg: mean(&row.trials),
            transmission_stdev: population_stdev(&row.trials),
        })
        .collect()
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Standard deviation with divisor `n`.
pub fn population_stdev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_reduce.rs"]
mod tests;
