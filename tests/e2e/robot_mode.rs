//! Robot-mode end-to-end tests.

use serde_json::{json, Value};

use crate::common::cli::CliRunner;
use crate::common::fixtures::TestProject;

#[test]
fn robot_report_for_applied_theme() {
    let project = TestProject::next().with_src().with_globals_css("src/app/globals.css");
    let result = CliRunner::new()
        .in_dir(project.path())
        .run_robot(&["-y", "--no-install", "--primary", "336699", "--secondary", "ff8800"]);

    result
        .assert_success()
        .assert_json_field("/message", &json!("Theme configured successfully."))
        .assert_json_field("/dry_run", &json!(false))
        .assert_json_field("/project_name", &json!("fixture-site"))
        .assert_json_field("/answers/install", &json!(false))
        .assert_json_field("/answers/colors/primary", &json!("#336699"))
        .assert_json_field("/theme/status", &json!("applied"))
        .assert_json_field("/theme/palette/primary_light", &json!("#5c85ad"))
        .assert_json_field("/theme/palette/primary_dark", &json!("#29527a"))
        .assert_json_array_len("/folders_created", 3)
        .assert_json_array_len("/commands", 0);

    let stylesheet = result.json()["theme"]["stylesheet"]
        .as_str()
        .map(String::from)
        .unwrap();
    assert!(stylesheet.ends_with("globals.css"));
}

#[test]
fn robot_report_for_declined_theme() {
    let project = TestProject::next().with_src().with_dir("src/hooks");
    CliRunner::new()
        .in_dir(project.path())
        .run_robot(&["--no-install", "-y", "--no-theme"])
        .assert_success()
        .assert_json_field("/theme/status", &json!("declined"))
        .assert_json_field("/message", &json!("Done. No theme changes applied."))
        .assert_json_field("/answers/colors", &Value::Null)
        .assert_json_array_len("/folders_created", 2)
        .assert_json_array_len("/folders_existing", 1);
}

#[test]
fn robot_dry_run_lists_planned_effects() {
    let project = TestProject::next().with_globals_css("app/globals.css");
    let result = CliRunner::new().in_dir(project.path()).run(&[
        "--format",
        "json-compact",
        "-y",
        "--dry-run",
        "--primary",
        "336699",
        "--secondary",
        "ff8800",
    ]);

    result
        .assert_success()
        .assert_json_field("/dry_run", &json!(true))
        .assert_json_array_len("/commands", 2)
        .assert_json_field("/commands/0/program", &json!("npx"))
        .assert_json_field("/commands/1/args", &json!(["shadcn", "add", "button"]))
        .assert_json_array_len("/planned", 4)
        .assert_json_field("/planned/0/op", &json!("create_dir"))
        .assert_json_field("/planned/3/op", &json!("write"));

    assert_eq!(result.stdout.trim().lines().count(), 1);
    assert!(!project.join("components").exists());
}

#[test]
fn robot_error_is_json_on_stderr() {
    let project = TestProject::empty();
    let result = CliRunner::new().in_dir(project.path()).run_robot(&["-y"]);
    result.assert_exit_code(1);
    assert!(result.stdout.trim().is_empty());

    let err = result.stderr_json();
    assert_eq!(err["error"], json!(true));
    assert_eq!(
        err["message"],
        json!("package.json not found. Run this inside a Next.js project.")
    );
    assert_eq!(err["recoverable"], json!(true));
    assert!(err["suggestion"].is_string());
}

#[test]
fn compact_error_is_single_line() {
    let project = TestProject::empty();
    let result = CliRunner::new()
        .in_dir(project.path())
        .run(&["--format", "json-compact", "-y"]);
    result.assert_exit_code(1);

    assert_eq!(result.stderr.trim_end().lines().count(), 1);
    assert_eq!(result.stderr_json()["recoverable"], json!(true));
}

#[test]
fn robot_version() {
    CliRunner::new()
        .run_robot(&["version"])
        .assert_success()
        .assert_json_field("/tool", &json!("nxs"))
        .assert_json_field("/version", &json!(env!("CARGO_PKG_VERSION")));
}
