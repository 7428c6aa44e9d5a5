//! Subcommands that do not need a project.

use assert_cmd::Command;
use predicates::prelude::*;

fn nxs() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_nxs"));
    cmd.env("RUST_LOG", "off")
        .env("NO_COLOR", "1")
        .env_remove("NXS_FORMAT");
    cmd
}

#[test]
fn shade_lightens_by_default() {
    nxs()
        .args(["shade", "336699"])
        .assert()
        .success()
        .stdout("5c85ad\n");
}

#[test]
fn no_color_env_values_are_accepted() {
    for value in ["1", "true", "yes", "0", ""] {
        nxs()
            .env("NO_COLOR", value)
            .args(["shade", "336699"])
            .assert()
            .code(0)
            .stdout("5c85ad\n");
    }

    nxs()
        .env("NO_COLOR", "1")
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn shade_darken_and_factor() {
    nxs()
        .args(["shade", "336699", "--darken"])
        .assert()
        .success()
        .stdout("29527a\n");

    nxs()
        .args(["shade", "ABCDEF", "--factor", "0"])
        .assert()
        .success()
        .stdout("abcdef\n");

    nxs()
        .args(["shade", "123456", "--factor", "5"])
        .assert()
        .success()
        .stdout("ffffff\n");

    nxs()
        .args(["shade", "123456", "--darken", "--factor", "-1"])
        .assert()
        .success()
        .stdout("123456\n");
}

#[test]
fn shade_rejects_malformed_color() {
    nxs()
        .args(["shade", "12345g"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid color '12345g'"));
}

#[test]
fn shade_robot_json() {
    nxs()
        .args(["shade", "336699", "--darken", "--format", "json-compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r##""result":"#29527a""##))
        .stdout(predicate::str::contains(r#""mode":"darken""#));
}

#[test]
fn css_prints_stylesheet() {
    nxs()
        .args(["css", "--primary", "336699", "--secondary", "ff8800"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("@import \"tailwindcss\";"))
        .stdout(predicate::str::contains("--primary-dark: #29527a;"))
        .stdout(predicate::str::contains("--secondary: #ff8800;"))
        .stdout(predicate::str::contains(".text-secondary { color: var(--secondary); }"));
}

#[test]
fn css_robot_includes_palette() {
    let output = nxs()
        .args(["--robot", "css", "--primary", "336699", "--secondary", "ff8800"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["palette"]["primary_light"], "#5c85ad");
    assert!(body["css"].as_str().unwrap().contains("--ring: #336699;"));
}

#[test]
fn version_human() {
    nxs()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "nxs {}",
            env!("CARGO_PKG_VERSION")
        )))
        .stdout(predicate::str::contains("commit:"));
}

#[test]
fn completions_for_bash() {
    nxs()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nxs"))
        .stdout(predicate::str::contains("shade"));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    nxs()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("frobnicate"));
}
