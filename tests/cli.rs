use clap::Parser;
use skim_submit::cli::{Cli, Command};
use skim_submit::{App, AppError, Config};
use std::fs;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("skim_submit").chain(args.iter().copied()))
        .expect("命令行解析失败")
}

fn run(app: &App, args: &[&str]) -> Result<String, AppError> {
    let mut out = Vec::new();
    app.run_with(parse(args).command, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

/// root/DYJetsToLL_M-50/{v1_20230101, v2_20230215}
/// root/ZZTo4L/v1_20230301
fn make_sample_tree(root: &Path) {
    for sub in [
        "DYJetsToLL_M-50/v1_20230101",
        "DYJetsToLL_M-50/v2_20230215",
        "ZZTo4L/v1_20230301",
    ] {
        fs::create_dir_all(root.join(sub)).unwrap();
    }
}

fn config_with_filter_sets() -> Config {
    let mut config = Config::default();
    config
        .filter_sets
        .insert("dy".to_string(), vec!["DYJetsToLL_M-50".to_string()]);
    config
        .filter_sets
        .insert("zz".to_string(), vec!["ZZTo4L".to_string()]);
    config
}

#[test]
fn test_parse_submit_positionals() {
    let cli = parse(&["submit", "2017", "signal", "ttZ", "--dry-run"]);
    match cli.command {
        Command::Submit { args, dry_run } => {
            assert_eq!(args, vec!["2017", "signal", "ttZ"]);
            assert!(dry_run);
        }
        other => panic!("意外的子命令: {:?}", other),
    }
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli = parse(&["files", "/data", ".root", "--json", "--chunk-size", "10"]);
    assert!(cli.json);
    assert!(matches!(
        cli.command,
        Command::Files {
            chunk_size: Some(10),
            ..
        }
    ));
}

#[test]
fn test_conflicting_filter_switches_rejected() {
    let result = Cli::try_parse_from([
        "skim_submit",
        "samples",
        "/data",
        "2023",
        "--apply-name-filter",
        "--no-name-filter",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_samples_with_filter_set() {
    let dir = tempfile::tempdir().unwrap();
    make_sample_tree(dir.path());
    let app = App::new(config_with_filter_sets(), false);
    let root = dir.path().to_str().unwrap();

    let output = run(
        &app,
        &["samples", root, "2023", "--filter-set", "dy", "--apply-name-filter"],
    )
    .unwrap();
    let lines: Vec<&str> = output.lines().collect();
    let parent = dir.path().join("DYJetsToLL_M-50");
    assert_eq!(
        lines,
        vec![
            parent.join("v1_20230101").to_str().unwrap(),
            parent.join("v2_20230215").to_str().unwrap(),
        ]
    );
}

#[test]
fn test_samples_without_filter_lists_everything() {
    let dir = tempfile::tempdir().unwrap();
    make_sample_tree(dir.path());
    let app = App::new(config_with_filter_sets(), false);
    let root = dir.path().to_str().unwrap();

    let output = run(&app, &["samples", root, "2023", "--no-name-filter"]).unwrap();
    assert_eq!(output.lines().count(), 3);
}

#[test]
fn test_samples_unknown_filter_set_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let app = App::new(config_with_filter_sets(), false);
    let root = dir.path().to_str().unwrap();

    let err = run(&app, &["samples", root, "2023", "--filter-set", "nope"]).unwrap_err();
    assert!(matches!(err, AppError::Usage(_)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_samples_json_output() {
    let dir = tempfile::tempdir().unwrap();
    make_sample_tree(dir.path());
    let app = App::new(config_with_filter_sets(), true);
    let root = dir.path().to_str().unwrap();

    let output = run(&app, &["samples", root, "v1_", "--no-name-filter"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let names: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["v1_20230101", "v1_20230301"]);
}

#[test]
fn test_files_in_chunks() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("sub")).unwrap();
    for f in ["a.root", "b.root", "c.txt", "sub/d.root"] {
        fs::write(root.join(f), "").unwrap();
    }
    let app = App::new(Config::default(), false);

    let output = run(
        &app,
        &["files", root.to_str().unwrap(), ".root", "--chunk-size", "2"],
    )
    .unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        format!("{} {}", root.join("a.root").display(), root.join("b.root").display())
    );
    assert_eq!(lines[1], root.join("sub/d.root").display().to_string());
}

#[test]
fn test_files_zero_chunk_size_is_invalid() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.root"), "").unwrap();
    let app = App::new(Config::default(), false);

    let err = run(
        &app,
        &["files", dir.path().to_str().unwrap(), ".root", "--chunk-size", "0"],
    )
    .unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_files_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let app = App::new(Config::default(), false);

    let err = run(&app, &["files", missing.to_str().unwrap(), ".root"]).unwrap_err();
    assert!(matches!(err, AppError::Scan(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_submit_dry_run_writes_script() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.job.working_dir = Some(dir.path().to_path_buf());
    config.job.script_name = dir.path().join("submit.sh").to_string_lossy().into_owned();
    let app = App::new(config, false);

    let output = run(&app, &["submit", "2016", "signal", "ttZ", "--dry-run"]).unwrap();
    assert_eq!(output.trim(), "dry-run");

    let body = fs::read_to_string(dir.path().join("submit.sh")).unwrap();
    assert!(body.contains("./ttZAnalysis 2016 signal ttZ"));
}

#[test]
fn test_submit_wrong_argument_count_is_usage_error() {
    let app = App::new(Config::default(), false);
    let err = run(&app, &["submit", "2016", "signal", "--dry-run"]).unwrap_err();
    assert!(matches!(err, AppError::Usage(_)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_submit_bad_wall_time_is_invalid_argument() {
    let app = App::new(Config::default(), false);
    let err = run(
        &app,
        &["submit", "2016", "signal", "ttZ", "forever", "--dry-run"],
    )
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidArgument(_)));
}
