use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{setup_test_config, ssp, temp_out};

#[test]
fn test_calc_with_defaults() {
    let cfg = setup_test_config("calc_defaults");

    ssp()
        .args(["--config", &cfg, "--no-color", "calc"])
        .assert()
        .success()
        .stdout(contains("Per job:      45 min"))
        .stdout(contains("225-037"))
        .stdout(contains("Lunch break"))
        .stdout(contains("09:15"))
        .stdout(contains("End time:     10:00"));
}

#[test]
fn test_calc_overnight_without_break() {
    let cfg = setup_test_config("calc_overnight");

    ssp()
        .args([
            "--config", &cfg, "--no-color", "calc", "--start", "22:00", "--end", "02:00",
            "--no-lunch", "--job", "A", "--job", "B",
        ])
        .assert()
        .success()
        .stdout(contains("2 h"))
        .stdout(contains("00:00"))
        .stdout(contains("Lunch break").not());
}

#[test]
fn test_calc_degenerate_shift_warns() {
    let cfg = setup_test_config("calc_degenerate");

    ssp()
        .args([
            "--config", &cfg, "calc", "--start", "06:00", "--end", "06:00", "--no-lunch",
            "--job", "A",
        ])
        .assert()
        .success()
        .stdout(contains("Nothing to split"));
}

#[test]
fn test_calc_invalid_time_fails() {
    let cfg = setup_test_config("calc_invalid");

    ssp()
        .args(["--config", &cfg, "calc", "--start", "6h30"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_calc_too_many_jobs_fails() {
    let cfg = setup_test_config("calc_too_many");
    let mut args = vec!["--config".to_string(), cfg, "calc".to_string()];
    for i in 0..7 {
        args.push("--job".to_string());
        args.push(format!("J{i}"));
    }

    ssp()
        .args(&args)
        .assert()
        .failure()
        .stderr(contains("max 6 jobs"));
}

#[test]
fn test_calc_json_to_stdout() {
    let cfg = setup_test_config("calc_json");

    let out = ssp()
        .args([
            "--config", &cfg, "calc", "--job", "A:rose", "--job", "B", "--job", "C", "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["interval_minutes"], 60);
    assert_eq!(v["intervals"][0]["color"], "rose");
    assert_eq!(v["intervals"][1]["color"], "indigo");
    assert_eq!(v["intervals"][2]["type"], "break");
}

#[test]
fn test_calc_csv_to_file() {
    let cfg = setup_test_config("calc_csv_file");
    let out = temp_out("calc_csv_file", "csv");

    ssp()
        .args(["--config", &cfg, "calc", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("position,type,job_id,name,color,start,end,duration_minutes"));
    assert!(content.contains("break,,Lunch break"));

    // refusing to overwrite without --force
    ssp()
        .args(["--config", &cfg, "calc", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));

    ssp()
        .args(["--config", &cfg, "calc", "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success();
}

#[test]
fn test_calc_uses_config_file_values() {
    let cfg = setup_test_config("calc_config_values");
    fs::write(
        &cfg,
        "shift_start: \"08:00\"\nshift_end: \"12:00\"\nlunch_break: false\njobs:\n  - name: Alpha\n    color: sky\n  - name: \"\"\n",
    )
    .unwrap();

    ssp()
        .args(["--config", &cfg, "--no-color", "calc"])
        .assert()
        .success()
        .stdout(contains("Alpha"))
        .stdout(contains("Job 2"))
        .stdout(contains("Per job:      2 h"));
}

#[test]
fn test_init_creates_config_and_check_passes() {
    let cfg = setup_test_config("init_check");

    ssp()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("Config file created"));
    assert!(fs::metadata(&cfg).is_ok());

    ssp()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("already exists"));

    ssp()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("complete"));

    ssp()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("shift_start"))
        .stdout(contains("225-040"));
}

#[test]
fn test_config_check_reports_missing_fields() {
    let cfg = setup_test_config("check_missing");
    fs::write(&cfg, "shift_start: \"07:00\"\n").unwrap();

    ssp()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields"))
        .stdout(contains("jobs"));
}

#[test]
fn test_jobs_lists_configured_jobs() {
    let cfg = setup_test_config("jobs_list");

    ssp()
        .args(["--config", &cfg, "--no-color", "jobs"])
        .assert()
        .success()
        .stdout(contains("225-037"))
        .stdout(contains("emerald"))
        .stdout(contains("sky"));
}
