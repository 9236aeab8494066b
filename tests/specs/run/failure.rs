//! First-failure abort specs

use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn failing_phase_status_becomes_the_exit_code() {
    let p = Project::empty();
    p.all_phases("true");
    p.phase("mongodb_setup", "exit 7");

    p.rig()
        .assert()
        .code(7)
        .stderr(predicate::str::contains(
            "Phase mongodb_setup failed with status 7",
        ));
}

#[test]
fn phases_after_a_failure_never_start() {
    let p = Project::empty();
    p.all_phases("true");
    p.phase("workload_setup", "exit 5");
    p.phase("test_control", "touch test-control-ran");

    p.rig().assert().code(5);

    assert!(p.work_file("o.infrastructure_provisioning").exists());
    assert!(p.work_file("o.workload_setup").exists());
    assert!(!p.work_file("o.mongodb_setup").exists());
    assert!(!p.work_file("o.test_control").exists());
    assert!(!p.work_file("test-control-ran").exists());
}

#[test]
fn rerun_after_a_fix_uses_the_same_file_scheme() {
    let p = Project::empty();
    p.all_phases("true");
    p.phase("test_control", "exit 2");
    p.rig().assert().code(2);

    // Operator fixes the phase and reruns; no runner change needed.
    p.phase("test_control", "true");
    p.rig().assert().success();

    for name in PHASES {
        assert!(p.work_file(&format!("o.{name}")).exists());
    }
}

#[test]
fn failing_phase_output_is_still_captured() {
    let p = Project::empty();
    p.all_phases("true");
    p.phase("workload_setup", "echo about-to-fail >&2; exit 9");

    p.rig().assert().code(9);

    let log = std::fs::read_to_string(p.work_file("o.workload_setup")).unwrap();
    assert!(log.contains("about-to-fail"));
}

#[test]
fn missing_phase_executable_fails_the_run() {
    let p = Project::empty();
    p.all_phases("true");
    std::fs::remove_file(p.bin_file("test_control")).unwrap();

    p.rig()
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot spawn phase test_control"));
}
