use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::reference::ReferencePower;
use crate::model::transmission::{ReducedRow, TransmissionMatrix};
use crate::report::json::render_summary_json;
use crate::report::plot::{ErrorBarPlot, PlotError, render_errorbar_plot};
use crate::report::text::render_report_text;
use crate::report::{
    InputMeta, ReportContext, SummaryData, ToolMeta, extremes, file_label, format_f64_6,
    plot_title,
};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Plot(#[from] PlotError),
}

#[derive(Debug, Clone)]
pub struct Stage4Input<'a> {
    pub input_path: &'a Path,
    pub label: &'a str,
    pub wavelength_nm: f64,
    pub reference: &'a ReferencePower,
    pub matrix: &'a TransmissionMatrix,
    pub reduced: &'a [ReducedRow],
    pub tool_name: String,
    pub tool_version: String,
}

#[derive(Debug, Clone, Default)]
pub struct ReportPaths {
    pub table: PathBuf,
    pub report: PathBuf,
    pub summary: PathBuf,
    pub plot: Option<PathBuf>,
}

pub fn write_reports(
    input: &Stage4Input<'_>,
    out_dir: &Path,
    with_plot: bool,
) -> Result<ReportPaths, ReportError> {
    fs::create_dir_all(out_dir)?;
    let stem = file_label(input.label);

    // The plot goes first so a rendering failure leaves no tables behind.
    let plot_path = if with_plot {
        let path = out_dir.join(format!("{stem}.png"));
        let plot = ErrorBarPlot {
            title: plot_title(input.wavelength_nm, input.label),
            legend: input.label.to_string(),
            rows: input.reduced,
        };
        render_errorbar_plot(&path, &plot)?;
        Some(path)
    } else {
        None
    };

    let table_path = out_dir.join(format!("{stem}.tsv"));
    write_reduced_tsv(input, &table_path)?;

    let summary_path = out_dir.join("summary.json");
    let summary = build_summary(input);
    write_text(&summary_path, &render_summary_json(&summary)?)?;

    let report_path = out_dir.join(format!("{stem}_report.txt"));
    let ctx = ReportContext {
        label: input.label,
        wavelength_nm: input.wavelength_nm,
        reference: input.reference,
        matrix: input.matrix,
        reduced: input.reduced,
    };
    write_text(&report_path, &render_report_text(&ctx))?;

    tracing::info!(
        out_dir = %out_dir.display(),
        table = %table_path.display(),
        "reports written"
    );

    Ok(ReportPaths {
        table: table_path,
        report: report_path,
        summary: summary_path,
        plot: plot_path,
    })
}

fn write_reduced_tsv(input: &Stage4Input<'_>, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "thickness_mm",
        "transmission_avg_pct",
        "transmission_stdev_pct",
        "n_trials",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    for row in input.reduced {
        let fields = [
            format_f64_6(row.thickness),
            format_f64_6(row.transmission_avg),
            format_f64_6(row.transmission_stdev),
            input.matrix.n_trials.to_string(),
        ];
        writeln!(w, "{}", fields.join("\t"))?;
    }
    w.flush()
}

pub fn build_summary(input: &Stage4Input<'_>) -> SummaryData {
    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        input: InputMeta {
            path: input.input_path.display().to_string(),
            label: input.label.to_string(),
            wavelength_nm: input.wavelength_nm,
            n_samples: input.reduced.len(),
            n_trials: input.matrix.n_trials,
        },
        reference: *input.reference,
        extremes: extremes(input.reduced),
        rows: input.reduced.to_vec(),
    }
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(content.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
