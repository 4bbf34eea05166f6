use super::*;

fn base_args() -> Vec<&'static str> {
    vec![
        "phantom-transmission",
        "run",
        "--input",
        "data/agar.csv",
        "--out",
        "plots",
        "--raw-power",
        "5.091",
        "--ambient-power",
        "0.01829",
    ]
}

#[test]
fn test_parse_args_defaults() {
    let config = parse_args(base_args()).unwrap();
    assert_eq!(config.input_path, PathBuf::from("data/agar.csv"));
    assert_eq!(config.out_dir, PathBuf::from("plots"));
    assert_eq!(config.raw_power, 5.091);
    assert_eq!(config.ambient_power, 0.01829);
    assert_eq!(config.label, "agar");
    assert_eq!(config.wavelength_nm, DEFAULT_WAVELENGTH_NM);
    assert!(config.plot);
}

#[test]
fn test_parse_args_label_and_flags() {
    let mut args = base_args();
    args.extend(["--label", "Agar 2%", "--wavelength-nm", "850", "--no-plot"]);
    let config = parse_args(args).unwrap();
    assert_eq!(config.label, "Agar 2%");
    assert_eq!(config.wavelength_nm, 850.0);
    assert!(!config.plot);
}

#[test]
fn test_parse_args_requires_reference_power() {
    let args = vec![
        "phantom-transmission",
        "run",
        "--input",
        "a.csv",
        "--out",
        "out",
        "--raw-power",
        "5.0",
    ];
    assert!(parse_args(args).is_err());
}

#[test]
fn test_run_end_to_end_without_plot() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("gelatin.csv");
    std::fs::write(&input_path, "1.0,5.091,5.091\n2.0,0.01829,0.01829\n").unwrap();
    let config = RunConfig {
        input_path,
        out_dir: dir.path().join("out"),
        raw_power: 5.091,
        ambient_power: 0.01829,
        label: "gelatin".to_string(),
        wavelength_nm: DEFAULT_WAVELENGTH_NM,
        plot: false,
    };
    run(&config).unwrap();

    let tsv = std::fs::read_to_string(dir.path().join("out").join("gelatin.tsv")).unwrap();
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines[1], "1.000000\t100.000000\t0.000000\t2");
    assert_eq!(lines[2], "2.000000\t0.000000\t0.000000\t2");
}

#[test]
fn test_run_rejects_equal_reference() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("agar.csv");
    std::fs::write(&input_path, "1.0,2.0,2.1\n").unwrap();
    let config = RunConfig {
        input_path,
        out_dir: dir.path().join("out"),
        raw_power: 1.0,
        ambient_power: 1.0,
        label: "x".to_string(),
        wavelength_nm: DEFAULT_WAVELENGTH_NM,
        plot: false,
    };
    let err = run(&config).unwrap_err();
    assert!(matches!(
        err,
        RunError::Invalid(InvalidInputError::DegenerateReference { .. })
    ));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_run_reports_ragged_rows_by_sample() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("agar.csv");
    std::fs::write(&input_path, "# header\n1.0,2.0,2.1\n\n2.0,1.5\n").unwrap();
    let config = RunConfig {
        input_path,
        out_dir: dir.path().join("out"),
        raw_power: 5.091,
        ambient_power: 0.01829,
        label: "agar".to_string(),
        wavelength_nm: DEFAULT_WAVELENGTH_NM,
        plot: false,
    };
    let err = run(&config).unwrap_err();
    assert!(matches!(
        err,
        RunError::Invalid(InvalidInputError::RaggedRow {
            sample: 2,
            expected: 2,
            found: 1
        })
    ));
    assert!(!dir.path().join("out").exists());
}
