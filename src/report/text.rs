use crate::report::{ReportContext, format_f64_6, plot_title};

pub fn render_report_text(ctx: &ReportContext<'_>) -> String {
    let mut out = String::new();

    let title = plot_title(ctx.wavelength_nm, ctx.label);
    out.push_str(&title);
    out.push('\n');
    out.push_str(&"=".repeat(title.chars().count()));
    out.push_str("\n\n");

    out.push_str("1. Reference power\n");
    out.push_str(&format!(
        "Raw source power [mW]: {}\n",
        format_f64_6(ctx.reference.raw_power)
    ));
    out.push_str(&format!(
        "Ambient light power [mW]: {}\n\n",
        format_f64_6(ctx.reference.ambient_power)
    ));

    out.push_str("2. Per-trial transmission [%]\n");
    for row in &ctx.matrix.rows {
        let trials = row
            .trials
            .iter()
            .map(|v| format_f64_6(*v))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "{} mm: {}\n",
            format_f64_6(row.thickness),
            trials
        ));
    }
    out.push('\n');

    out.push_str("3. Average transmission [%]\n");
    for row in ctx.reduced {
        out.push_str(&format!(
            "{} mm: {} +/- {}\n",
            format_f64_6(row.thickness),
            format_f64_6(row.transmission_avg),
            format_f64_6(row.transmission_stdev)
        ));
    }

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
