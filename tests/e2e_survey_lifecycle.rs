mod common;
use common::cli::{WsnWorkspace, run_wsn, run_wsn_ok};

#[test]
fn test_survey_create_delete_lifecycle() {
    let workspace = WsnWorkspace::new();
    run_wsn_ok(&workspace, ["init"], "init");

    let add_alice = run_wsn_ok(&workspace, ["survey", "add", "Alice", "120"], "add_alice");
    assert!(add_alice.stdout.contains("#0"), "stdout: {}", add_alice.stdout);
    assert!(add_alice.stdout.contains("Alice"));
    assert!(add_alice.stdout.contains("120 L/day"));

    let add_bob = run_wsn_ok(&workspace, ["survey", "add", "Bob", "80"], "add_bob");
    assert!(add_bob.stdout.contains("#1"), "stdout: {}", add_bob.stdout);

    let data = run_wsn_ok(&workspace, ["data"], "data_both");
    assert!(data.stdout.contains("Surveys (2)"));
    assert!(data.stdout.contains("Alice"));
    assert!(data.stdout.contains("Bob"));

    let remove = run_wsn_ok(&workspace, ["survey", "remove", "0"], "remove_alice");
    assert!(remove.stdout.contains("Alice"), "stdout: {}", remove.stdout);

    let data = run_wsn_ok(&workspace, ["data"], "data_after_delete");
    assert!(data.stdout.contains("Surveys (1)"));
    assert!(!data.stdout.contains("Alice"));
    assert!(data.stdout.contains("Bob"));

    // Second delete of the same id reports not-found.
    let again = run_wsn(&workspace, ["survey", "remove", "0"], "remove_again");
    assert!(!again.success());
    assert!(again.stderr.contains("not found"), "stderr: {}", again.stderr);
}

#[test]
fn test_deleted_survey_id_never_reused_across_invocations() {
    let workspace = WsnWorkspace::new();
    run_wsn_ok(&workspace, ["init"], "init");

    run_wsn_ok(&workspace, ["survey", "add", "Alice", "120"], "add_0");
    run_wsn_ok(&workspace, ["survey", "add", "Bob", "80"], "add_1");
    run_wsn_ok(&workspace, ["survey", "remove", "1"], "remove_1");

    let third = run_wsn_ok(&workspace, ["survey", "add", "Cara", "60"], "add_2");
    // Max surviving id is 0, but id 1 was already issued in this file's
    // lifetime; the counter resumes past it.
    assert!(third.stdout.contains("#1"), "stdout: {}", third.stdout);
}

#[test]
fn test_survey_add_accepts_negative_usage() {
    let workspace = WsnWorkspace::new();
    run_wsn_ok(&workspace, ["init"], "init");

    // Usage has no enforced lower bound; a bare negative number must
    // parse as the positional value, not as a flag.
    let added = run_wsn_ok(
        &workspace,
        ["survey", "add", "--json", "Alice", "-5"],
        "add_negative",
    );
    let value: serde_json::Value = serde_json::from_str(&added.stdout).expect("valid JSON");
    assert_eq!(value["data"]["usage"], -5);
}

#[test]
fn test_survey_add_json_envelope() {
    let workspace = WsnWorkspace::new();
    run_wsn_ok(&workspace, ["init"], "init");

    let added = run_wsn_ok(
        &workspace,
        ["survey", "add", "--json", "Carol", "42"],
        "add_json",
    );
    let value: serde_json::Value = serde_json::from_str(&added.stdout).expect("valid JSON");
    assert_eq!(value["message"], "Survey submitted successfully");
    assert_eq!(value["data"]["id"], 0);
    assert_eq!(value["data"]["name"], "Carol");
    assert_eq!(value["data"]["usage"], 42);
    assert!(value["data"]["timestamp"].is_string());
}

#[test]
fn test_supplied_timestamp_survives_to_listing() {
    let workspace = WsnWorkspace::new();
    run_wsn_ok(&workspace, ["init"], "init");

    run_wsn_ok(
        &workspace,
        [
            "survey",
            "add",
            "Dana",
            "33",
            "--timestamp",
            "2026-08-23T19:45:01Z",
        ],
        "add_with_ts",
    );

    let data = run_wsn_ok(&workspace, ["data", "--json"], "data_json");
    let value: serde_json::Value = serde_json::from_str(&data.stdout).expect("valid JSON");
    assert_eq!(value["surveys"][0]["timestamp"], "2026-08-23T19:45:01Z");
    assert_eq!(value["totalSurveys"], 1);
    assert_eq!(value["totalIssues"], 0);
}

#[test]
fn test_data_without_init_reports_not_initialized() {
    let workspace = WsnWorkspace::new();

    let data = run_wsn(&workspace, ["data"], "data_uninitialized");
    assert!(!data.success());
    assert!(
        data.stderr.contains("not initialized"),
        "stderr: {}",
        data.stderr
    );
}

#[test]
fn test_init_twice_requires_force() {
    let workspace = WsnWorkspace::new();
    run_wsn_ok(&workspace, ["init"], "init");

    let again = run_wsn(&workspace, ["init"], "init_again");
    assert!(!again.success());
    assert!(
        again.stderr.contains("already initialized"),
        "stderr: {}",
        again.stderr
    );

    run_wsn_ok(&workspace, ["init", "--force"], "init_force");
}

#[test]
fn test_corrupt_surveys_file_leaves_issues_intact() {
    let workspace = WsnWorkspace::new();
    run_wsn_ok(&workspace, ["init"], "init");
    run_wsn_ok(&workspace, ["survey", "add", "Alice", "120"], "add_survey");
    run_wsn_ok(
        &workspace,
        ["issue", "report", "Well 3", "pump leaking"],
        "report_issue",
    );

    std::fs::write(workspace.path().join(".watsan/surveys.json"), "{broken").unwrap();

    // The corrupted collection degrades to empty; the sibling
    // collection is unaffected.
    let data = run_wsn_ok(&workspace, ["data"], "data_after_corruption");
    assert!(data.stdout.contains("Surveys (0)"), "stdout: {}", data.stdout);
    assert!(data.stdout.contains("Issues (1)"), "stdout: {}", data.stdout);
    assert!(data.stdout.contains("Well 3"));
    assert!(data.stdout.contains("pump leaking"));
}
