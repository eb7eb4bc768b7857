use crate::common::{
    make_temp_dir, normalized_lines, read_log_contents, row_for, run_in, write_plain_config,
    write_roster,
};

#[test]
fn prints_consecutive_weeks_for_one_area() {
    let dir = make_temp_dir("run");
    write_plain_config(&dir);
    write_roster(&dir, &[("Ana", "Ops", 5), ("Bruno", "Ops", 5), ("Carla", "Sales", 5)]);

    let output = run_in(&dir, &["--roster", "roster.json"]);
    assert!(output.status.success(), "run should succeed: {:?}", output);

    let ana = row_for(&output.stdout, "Ana").expect("Ana row");
    assert_eq!(&ana[3..5], &["2025-03-03", "2025-03-07"]);
    let bruno = row_for(&output.stdout, "Bruno").expect("Bruno row");
    assert_eq!(&bruno[3..5], &["2025-03-10", "2025-03-14"]);
    let carla = row_for(&output.stdout, "Carla").expect("Carla row");
    assert_eq!(&carla[3..5], &["2025-03-03", "2025-03-07"]);

    let lines = normalized_lines(&output.stdout);
    assert!(lines.iter().any(|l| l == "3 of 3 employee(s) placed."));
}

#[test]
fn blocked_dates_from_the_command_line_are_skipped() {
    let dir = make_temp_dir("run");
    write_plain_config(&dir);
    write_roster(&dir, &[("Ana", "Ops", 5)]);

    let output = run_in(
        &dir,
        &["--roster", "roster.json", "--blocked", "2025-03-03:2025-03-07"],
    );
    assert!(output.status.success());

    let ana = row_for(&output.stdout, "Ana").expect("Ana row");
    assert_eq!(&ana[3..5], &["2025-03-10", "2025-03-14"]);
}

#[test]
fn forced_start_is_reported_and_unknown_names_warn() {
    let dir = make_temp_dir("run");
    write_plain_config(&dir);
    write_roster(&dir, &[("Ana", "Ops", 5)]);

    let output = run_in(
        &dir,
        &[
            "--roster",
            "roster.json",
            "--force",
            "Ana=2025-03-12",
            "--force",
            "Zed=2025-03-12",
        ],
    );
    assert!(output.status.success());

    let ana = row_for(&output.stdout, "Ana").expect("Ana row");
    assert_eq!(ana[3], "2025-03-12");
    assert_eq!(ana[5], "forced start");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("WARN: Ignoring forced start for unknown employee 'Zed'"));
}

#[test]
fn area_filter_limits_printed_rows() {
    let dir = make_temp_dir("run");
    write_plain_config(&dir);
    write_roster(&dir, &[("Ana", "Ops", 5), ("Carla", "Sales", 5)]);

    let output = run_in(&dir, &["--roster", "roster.json", "--area", "sales"]);
    assert!(output.status.success());

    assert!(row_for(&output.stdout, "Carla").is_some());
    assert!(row_for(&output.stdout, "Ana").is_none());
}

#[test]
fn run_log_records_each_decision() {
    let dir = make_temp_dir("run");
    write_plain_config(&dir);
    write_roster(&dir, &[("Ana", "Ops", 5), ("Bruno", "Ops", 5)]);

    let output = run_in(&dir, &["--roster", "roster.json"]);
    assert!(output.status.success());

    let log = read_log_contents(&dir).expect("run log should exist");
    assert!(log.contains("Starting allocation"));
    assert!(log.contains("Bruno (Ops): area conflict through 2025-03-07"));
    assert!(log.contains("Finished allocation from 2025-03-03: 2 of 2 employee(s) placed."));
}

#[test]
fn missing_roster_fails() {
    let dir = make_temp_dir("run");
    write_plain_config(&dir);

    let output = run_in(&dir, &["--roster", "absent.json"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read roster"));
}

#[test]
fn duplicate_names_fail_the_run() {
    let dir = make_temp_dir("run");
    write_plain_config(&dir);
    write_roster(&dir, &[("Ana", "Ops", 5), ("Ana", "Sales", 3)]);

    let output = run_in(&dir, &["--roster", "roster.json"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Duplicate employee name in roster: 'Ana'"));
}

#[test]
fn reversed_blocked_range_is_rejected_before_running() {
    let dir = make_temp_dir("run");
    write_plain_config(&dir);
    write_roster(&dir, &[("Ana", "Ops", 5)]);

    let output = run_in(
        &dir,
        &["--roster", "roster.json", "--blocked", "2025-03-07:2025-03-03"],
    );
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid date range"));
    assert!(stderr.contains("Usage: vacaplan"));
}

#[test]
fn help_prints_usage() {
    let dir = make_temp_dir("run");
    let output = run_in(&dir, &["--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--roster <file.json>"));
}
