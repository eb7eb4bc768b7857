use crate::common::{make_temp_dir, run_in, write_plain_config, write_roster};
use vacaplan::core::models::StartOrigin;
use vacaplan::core::persist::load_assignments;

#[test]
fn output_file_holds_every_assignment() {
    let dir = make_temp_dir("persist");
    write_plain_config(&dir);
    write_roster(&dir, &[("Ana", "Ops", 5), ("Bruno", "Ops", 0)]);

    let output = run_in(
        &dir,
        &["--roster", "roster.json", "--output", "out/plan.json"],
    );
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Results written to out/plan.json"));

    let file = load_assignments(&dir.join("out").join("plan.json")).unwrap();
    assert_eq!(file.search_base.to_string(), "2025-03-03");
    assert_eq!(file.assignments.len(), 2);

    let bruno = &file.assignments[0];
    assert_eq!(bruno.name, "Bruno");
    assert_eq!(bruno.start_date, None);
    assert_eq!(bruno.unassigned_reason.as_deref(), Some("no-entitlement"));

    let ana = &file.assignments[1];
    assert_eq!(ana.start_date.map(|d| d.to_string()).as_deref(), Some("2025-03-03"));
    assert_eq!(ana.end_date.map(|d| d.to_string()).as_deref(), Some("2025-03-07"));
    assert_eq!(ana.origin, Some(StartOrigin::Default));
}
