use super::*;
use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

#[test]
fn test_parse_measurements_basic() {
    let data = "1.0,4.9,5.0,4.8\n2.0, 3.9 ,4.0,4.1\n";
    let rows = parse_measurements(data.as_bytes()).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], vec![2.0, 3.9, 4.0, 4.1]);
}

#[test]
fn test_parse_skips_comments_and_blank_lines() {
    let data = "# thickness,trial1,trial2\n\n0.5,1.0,1.1\n   \n1.5,0.8,0.9\n";
    let rows = parse_measurements(data.as_bytes()).unwrap();
    assert_eq!(rows, vec![vec![0.5, 1.0, 1.1], vec![1.5, 0.8, 0.9]]);
}

#[test]
fn test_parse_non_numeric_cell_reports_position() {
    let data = "1.0,2.0,3.0\n2.0,abc,3.0\n";
    let err = parse_measurements(data.as_bytes()).unwrap_err();
    match err {
        InputError::Parse {
            line,
            column,
            value,
        } => {
            assert_eq!(line, 2);
            assert_eq!(column, 2);
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_keeps_ragged_rows_for_the_reducer() {
    let data = "1.0,2.0,3.0\n2.0,2.5\n";
    let rows = parse_measurements(data.as_bytes()).unwrap();
    assert_eq!(rows, vec![vec![1.0, 2.0, 3.0], vec![2.0, 2.5]]);
}

#[test]
fn test_parse_comment_only_input_gives_no_rows() {
    let rows = parse_measurements("# only a comment\n\n".as_bytes()).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_load_measurements_plain_and_gz() {
    let dir = tempfile::tempdir().unwrap();
    let content = "1.0,4.0,4.2\n2.0,3.0,3.2\n";

    let plain = dir.path().join("agar.csv");
    std::fs::write(&plain, content).unwrap();
    let a = load_measurements(&plain).unwrap();

    let gz = dir.path().join("agar.csv.gz");
    let mut enc = GzEncoder::new(std::fs::File::create(&gz).unwrap(), Compression::default());
    enc.write_all(content.as_bytes()).unwrap();
    enc.finish().unwrap();
    let b = load_measurements(&gz).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.len(), 2);
}

#[test]
fn test_load_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.csv");
    let err = load_measurements(&path).unwrap_err();
    assert!(matches!(err, InputError::Open { .. }));
    assert!(err.to_string().contains("missing.csv"));
}

#[test]
fn test_dataset_label_from_file_stem() {
    assert_eq!(dataset_label(Path::new("data/gelatin_1.csv")), "gelatin_1");
    assert_eq!(dataset_label(Path::new("data/gelatin_1.csv.gz")), "gelatin_1");
    assert_eq!(dataset_label(Path::new("phantom")), "phantom");
    assert_eq!(dataset_label(Path::new("/")), "measurements");
}
