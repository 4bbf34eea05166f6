use crate::model::measurement::MeasurementTable;
use crate::model::reference::ReferencePower;
use crate::model::transmission::{TransmissionMatrix, TransmissionRow};

pub fn normalize_table(table: &MeasurementTable, reference: &ReferencePower) -> TransmissionMatrix {
    let mut rows = Vec::with_capacity(table.n_rows());
    for row in table.rows() {
        let trials = row
            .trials
            .iter()
            .map(|&v| reference.transmission(v))
            .collect();
        rows.push(TransmissionRow {
            thickness: row.thickness,
            trials,
        });
    }
    TransmissionMatrix {
        rows,
        n_trials: table.n_trials(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_normalize.rs"]
mod tests;
