use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_dataset(path: &Path) {
    let mut text = String::from("gene");
    for t in 1..=20 {
        write!(text, "\tt{t}").unwrap();
    }
    text.push('\n');

    text.push_str("A");
    for t in 1..=20 {
        write!(text, "\t{}", t as f64).unwrap();
    }
    text.push('\n');

    text.push_str("B");
    for t in 1..=20u32 {
        let v = if (5..=17).contains(&t) { 9.0 } else { 1.0 };
        write!(text, "\t{v}").unwrap();
    }
    text.push('\n');

    text.push_str("C");
    for t in 1..=20u32 {
        let noise = if t % 2 == 0 { 1e-9 } else { -1e-9 };
        write!(text, "\t{}", t as f64 + noise).unwrap();
    }
    text.push('\n');

    fs::write(path, text).unwrap();
}

/// Three linear candidates; none deviates from its reference line enough to
/// pass the adjusted threshold.
fn write_null_dataset(path: &Path) {
    let mut text = String::from("gene");
    for t in 1..=20 {
        write!(text, "\tt{t}").unwrap();
    }
    text.push('\n');
    for (gene, slope) in [("A", 1.0), ("B", 2.0), ("C", 0.5)] {
        text.push_str(gene);
        for t in 1..=20 {
            write!(text, "\t{}", slope * t as f64).unwrap();
        }
        text.push('\n');
    }
    fs::write(path, text).unwrap();
}

fn cmd_args(input: &Path) -> Vec<String> {
    let mut args = vec![
        "--input".to_string(),
        input.display().to_string(),
        "--algorithm".to_string(),
        "Euclidean".to_string(),
        "--monte-carlo".to_string(),
        "200".to_string(),
    ];
    args.push("--time-stamps".to_string());
    args.extend((1..=20).map(|t| t.to_string()));
    args.push("--repeat1-cols".to_string());
    args.extend((1..=20).map(|c| c.to_string()));
    args
}

#[test]
fn full_run_emits_table_and_grid() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("data.tsv");
    write_dataset(&input);
    let grid_base = tmp.path().join("out");
    let json = tmp.path().join("report.json");

    let mut cmd = Command::cargo_bin("kira-transient").unwrap();
    cmd.args(cmd_args(&input));
    cmd.arg("--seed").arg("11");
    cmd.arg("--grid-name").arg(&grid_base);
    cmd.arg("--json").arg(&json);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Pvalue\tadj_Pvalue"))
        .stdout(predicate::str::contains("B\t"));

    assert!(tmp.path().join("out.png").exists());

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(report["tool"], "kira-transient");
    assert_eq!(report["schema_version"], "v1");
    assert_eq!(report["analysis"]["seed"], 11);
    assert_eq!(report["input_meta"]["rows"], 3);
    assert!(report["results"]["significant"].as_u64().unwrap() >= 1);
    let plotted: Vec<&str> = report["results"]["plotted"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert!(plotted.contains(&"B"));
}

#[test]
fn no_significant_candidates_skips_the_grid() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("null.tsv");
    write_null_dataset(&input);
    let grid_base = tmp.path().join("out");

    let mut cmd = Command::cargo_bin("kira-transient").unwrap();
    cmd.args(cmd_args(&input));
    cmd.arg("--seed").arg("11");
    cmd.arg("--grid-name").arg(&grid_base);
    cmd.assert().success().stdout(predicate::str::contains(
        "No significant transient candidates found for plotting.",
    ));

    assert!(!tmp.path().join("out.png").exists());
}

#[test]
fn same_seed_gives_identical_output() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("null.tsv");
    write_null_dataset(&input);
    let grid_base = tmp.path().join("out");

    let run = || {
        let mut cmd = Command::cargo_bin("kira-transient").unwrap();
        cmd.args(cmd_args(&input));
        cmd.arg("--seed").arg("42");
        cmd.arg("--grid-name").arg(&grid_base);
        cmd.output().unwrap().stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn zero_monte_carlo_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("data.tsv");
    write_dataset(&input);

    let mut args = cmd_args(&input);
    let pos = args.iter().position(|a| a == "200").unwrap();
    args[pos] = "0".to_string();

    let mut cmd = Command::cargo_bin("kira-transient").unwrap();
    cmd.args(args);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("monte_carlo must be positive"));
}

#[test]
fn unknown_algorithm_fails_fast() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("data.tsv");
    write_dataset(&input);

    let mut args = cmd_args(&input);
    let pos = args.iter().position(|a| a == "Euclidean").unwrap();
    args[pos] = "Chebyshev".to_string();

    let mut cmd = Command::cargo_bin("kira-transient").unwrap();
    cmd.args(args);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn short_trajectories_are_reported_as_degenerate() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("short.tsv");
    fs::write(
        &input,
        "gene\tt1\tt2\tt3\tt4\ng1\t1\t2\t3\t4\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("kira-transient").unwrap();
    cmd.arg("--input").arg(&input);
    cmd.arg("--algorithm").arg("Euclidean");
    cmd.args(["--time-stamps", "1", "2", "4", "8"]);
    cmd.args(["--repeat1-cols", "1", "2", "3", "4"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("degenerate trajectory"));
}

#[test]
fn replicate_and_time_axis_mismatch_is_invalid() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("data.tsv");
    write_dataset(&input);

    let mut cmd = Command::cargo_bin("kira-transient").unwrap();
    cmd.arg("--input").arg(&input);
    cmd.arg("--algorithm").arg("Euclidean");
    cmd.args(["--time-stamps", "1", "2", "4"]);
    cmd.args(["--repeat1-cols", "1", "2"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}
