use std::fs;

use tempfile::tempdir;

use stringart_cli::{Args, ChordSpec, run};

fn args_for(output: String) -> Args {
    Args {
        points: 36,
        chords: vec![
            "0,7".parse::<ChordSpec>().unwrap(),
            "7,14,red".parse::<ChordSpec>().unwrap(),
            "-1,18".parse::<ChordSpec>().unwrap(),
        ],
        color: None,
        output,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_writes_svg() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("cardioid.svg");

    let args = args_for(output_path.to_string_lossy().to_string());
    run(&args).expect("run should succeed");

    let content = fs::read_to_string(&output_path).expect("output file should exist");
    assert!(content.contains("<svg"), "output should be an SVG document");
    assert_eq!(content.matches("<line").count(), 3);
    assert_eq!(content.matches("<circle").count(), 36);
}

#[test]
fn e2e_zero_points_fails_without_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("empty.svg");

    let mut args = args_for(output_path.to_string_lossy().to_string());
    args.points = 0;

    assert!(run(&args).is_err());
    assert!(!output_path.exists(), "no file should be written on failure");
}

#[test]
fn e2e_bad_color_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("bad.svg");

    let mut args = args_for(output_path.to_string_lossy().to_string());
    args.color = Some("no-such-color".to_string());

    assert!(run(&args).is_err());
}
