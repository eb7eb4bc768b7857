use crate::common::{make_temp_dir, row_for, run_in, write_plain_config, write_roster};
use std::fs;

#[test]
fn explicit_config_must_exist() {
    let dir = make_temp_dir("config");
    write_roster(&dir, &[("Ana", "Ops", 5)]);

    let output = run_in(&dir, &["--roster", "roster.json", "--config", "nope.json"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration file 'nope.json' not found."));
}

#[test]
fn invalid_config_json_is_reported() {
    let dir = make_temp_dir("config");
    write_roster(&dir, &[("Ana", "Ops", 5)]);
    fs::write(dir.join("config.json"), "{ not json").unwrap();

    let output = run_in(&dir, &["--roster", "roster.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid JSON in 'config.json'"));
}

#[test]
fn set_overrides_apply_for_one_run() {
    let dir = make_temp_dir("config");
    write_plain_config(&dir);
    write_roster(&dir, &[("Ana", "Ops", 2)]);

    let output = run_in(
        &dir,
        &[
            "--roster",
            "roster.json",
            "--set",
            "START_DATE=2025-03-07",
            "--set",
            "weekend_policy=sunday-only",
        ],
    );
    assert!(output.status.success());

    // Friday, then Saturday as a working day.
    let ana = row_for(&output.stdout, "Ana").expect("Ana row");
    assert_eq!(&ana[3..5], &["2025-03-07", "2025-03-08"]);

    let on_disk = fs::read_to_string(dir.join("config.json")).unwrap();
    assert!(on_disk.contains("saturday-sunday"));
}

#[test]
fn configured_blocked_dates_and_holidays_apply() {
    let dir = make_temp_dir("config");
    let cfg = r#"{
      "start_date": { "value": "2025-03-17" },
      "blocked_dates": { "value": "2025-03-18" },
      "holiday_calendar": { "value": "colombia" },
      "file_logging_enabled": { "value": "False" }
    }"#;
    fs::write(dir.join("config.json"), cfg).unwrap();
    write_roster(&dir, &[("Ana", "Ops", 3)]);

    let output = run_in(&dir, &["--roster", "roster.json"]);
    assert!(output.status.success());

    // The blocked Tuesday is stepped over inside the period.
    let ana = row_for(&output.stdout, "Ana").expect("Ana row");
    assert_eq!(&ana[3..5], &["2025-03-17", "2025-03-20"]);
    assert!(!dir.join("logs").exists());
}

#[test]
fn unknown_override_key_fails() {
    let dir = make_temp_dir("config");
    write_plain_config(&dir);
    write_roster(&dir, &[("Ana", "Ops", 2)]);

    let output = run_in(&dir, &["--roster", "roster.json", "--set", "COLOR=blue"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown configuration key"));
}
