use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct TransmissionRow {
    pub thickness: f64,
    /// Per-trial transmission [%], in input column order.
    pub trials: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransmissionMatrix {
    pub rows: Vec<TransmissionRow>,
    pub n_trials: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReducedRow {
    pub thickness: f64,
    pub transmission_avg: f64,
    pub transmission_stdev: f64,
}
