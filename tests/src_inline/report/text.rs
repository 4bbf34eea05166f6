use super::*;
use crate::model::reference::ReferencePower;
use crate::model::transmission::{ReducedRow, TransmissionMatrix, TransmissionRow};

#[test]
fn test_underline_matches_title_width_for_non_ascii_label() {
    let reference = ReferencePower::new(5.0, 0.0).unwrap();
    let matrix = TransmissionMatrix {
        rows: vec![TransmissionRow {
            thickness: 0.5,
            trials: vec![80.0, 82.0],
        }],
        n_trials: 2,
    };
    let reduced = [ReducedRow {
        thickness: 0.5,
        transmission_avg: 81.0,
        transmission_stdev: 1.0,
    }];
    let ctx = ReportContext {
        label: "Agar 50 µm Ø",
        wavelength_nm: 980.0,
        reference: &reference,
        matrix: &matrix,
        reduced: &reduced,
    };

    let text = render_report_text(&ctx);
    let mut lines = text.lines();
    let title = lines.next().unwrap();
    let underline = lines.next().unwrap();
    assert_eq!(title, "980 nm Optical Transmission: Agar 50 µm Ø");
    assert!(underline.chars().all(|c| c == '='));
    assert_eq!(underline.chars().count(), title.chars().count());
    assert!(text.contains("0.500000 mm: 81.000000 +/- 1.000000"));
}
