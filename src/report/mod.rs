pub mod json;
pub mod plot;
pub mod text;

use serde::Serialize;

use crate::model::reference::ReferencePower;
use crate::model::transmission::{ReducedRow, TransmissionMatrix};

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputMeta {
    pub path: String,
    pub label: String,
    pub wavelength_nm: f64,
    pub n_samples: usize,
    pub n_trials: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Extremes {
    pub min_avg_pct: f64,
    pub max_avg_pct: f64,
    pub max_stdev_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub input: InputMeta,
    pub reference: ReferencePower,
    pub extremes: Extremes,
    pub rows: Vec<ReducedRow>,
}

#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    pub label: &'a str,
    pub wavelength_nm: f64,
    pub reference: &'a ReferencePower,
    pub matrix: &'a TransmissionMatrix,
    pub reduced: &'a [ReducedRow],
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

/// Label with spaces turned into underscores, safe for output file names.
pub fn file_label(label: &str) -> String {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return "transmission".to_string();
    }
    trimmed
        .chars()
        .map(|c| match c {
            ' ' => '_',
            '/' | '\\' => '-',
            other => other,
        })
        .collect()
}

pub fn extremes(rows: &[ReducedRow]) -> Extremes {
    if rows.is_empty() {
        return Extremes {
            min_avg_pct: 0.0,
            max_avg_pct: 0.0,
            max_stdev_pct: 0.0,
        };
    }
    let mut min_avg = f64::INFINITY;
    let mut max_avg = f64::NEG_INFINITY;
    let mut max_stdev = 0.0f64;
    for r in rows {
        min_avg = min_avg.min(r.transmission_avg);
        max_avg = max_avg.max(r.transmission_avg);
        max_stdev = max_stdev.max(r.transmission_stdev);
    }
    Extremes {
        min_avg_pct: min_avg,
        max_avg_pct: max_avg,
        max_stdev_pct: max_stdev,
    }
}

pub fn plot_title(wavelength_nm: f64, label: &str) -> String {
    format!("{} nm Optical Transmission: {}", format_wavelength(wavelength_nm), label)
}

fn format_wavelength(wavelength_nm: f64) -> String {
    if wavelength_nm.fract() == 0.0 {
        format!("{:.0}", wavelength_nm)
    } else {
        format!("{}", wavelength_nm)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
