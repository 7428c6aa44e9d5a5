//! Full runs against real temporary directories.

use std::fs;

use tempfile::TempDir;

use nxs::config::Config;
use nxs::output::mock::RecordingOutput;
use nxs::prompt::mock::{Answer, ScriptedPrompter};
use nxs::runner::mock::RecordingRunner;
use nxs::theme::{render_globals_css, ThemeColors, ThemePalette};
use nxs::workflow::{Workflow, THEME_APPLIED_MESSAGE};
use nxs::workspace::LocalWorkspace;

fn next_project(with_src: bool) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("package.json"),
        r#"{"dependencies":{"next":"15.1.0"}}"#,
    )
    .unwrap();
    let app = if with_src {
        temp.path().join("src/app")
    } else {
        temp.path().join("app")
    };
    fs::create_dir_all(&app).unwrap();
    fs::write(app.join("globals.css"), "body {}\n").unwrap();
    temp
}

fn colors(primary: &str, secondary: &str) -> Vec<Answer> {
    vec![
        Answer::Text(primary.to_string()),
        Answer::Text(secondary.to_string()),
    ]
}

#[test]
fn stylesheet_is_fully_overwritten() {
    let temp = next_project(true);
    let ws = LocalWorkspace::new();
    let runner = RecordingRunner::new();
    let output = RecordingOutput::new();
    let config = Config::default();
    let mut script = vec![Answer::No, Answer::Yes, Answer::Yes];
    script.extend(colors("336699", "ff8800"));
    let prompter = ScriptedPrompter::new(script);

    let report = Workflow::new(&ws, &runner, &prompter, &output, &config)
        .run(temp.path())
        .unwrap();
    assert_eq!(report.message, THEME_APPLIED_MESSAGE);

    let expected = render_globals_css(&ThemePalette::derive(
        ThemeColors {
            primary: "336699".parse().unwrap(),
            secondary: "ff8800".parse().unwrap(),
        },
        0.2,
    ));
    let written = fs::read_to_string(temp.path().join("src/app/globals.css")).unwrap();
    assert_eq!(written, expected);

    for name in ["components", "hooks", "utils"] {
        assert!(temp.path().join("src").join(name).is_dir());
    }
}

#[test]
fn rerun_is_idempotent() {
    let temp = next_project(false);
    let ws = LocalWorkspace::new();
    let runner = RecordingRunner::new();
    let output = RecordingOutput::new();
    let config = Config::default();

    let run = || {
        let mut script = vec![Answer::No, Answer::Yes, Answer::Yes];
        script.extend(colors("0A0B0C", "FFFFFF"));
        let prompter = ScriptedPrompter::new(script);
        Workflow::new(&ws, &runner, &prompter, &output, &config)
            .run(temp.path())
            .unwrap()
    };

    let first = run();
    let css_first = fs::read_to_string(temp.path().join("app/globals.css")).unwrap();
    let second = run();
    let css_second = fs::read_to_string(temp.path().join("app/globals.css")).unwrap();

    assert_eq!(first.folders_created.len(), 3);
    assert!(second.folders_created.is_empty());
    assert_eq!(second.folders_existing.len(), 3);
    assert_eq!(css_first, css_second);
    assert!(css_first.contains("--primary: #0a0b0c;"));
}

#[test]
fn existing_folder_contents_survive() {
    let temp = next_project(true);
    let hooks = temp.path().join("src/hooks");
    fs::create_dir_all(&hooks).unwrap();
    fs::write(hooks.join("use-toggle.ts"), "export {}\n").unwrap();

    let ws = LocalWorkspace::new();
    let runner = RecordingRunner::new();
    let output = RecordingOutput::new();
    let config = Config::default();
    let prompter = ScriptedPrompter::new(vec![Answer::No, Answer::Yes, Answer::No]);

    Workflow::new(&ws, &runner, &prompter, &output, &config)
        .run(temp.path())
        .unwrap();

    assert_eq!(
        fs::read_to_string(hooks.join("use-toggle.ts")).unwrap(),
        "export {}\n"
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("src/app/globals.css")).unwrap(),
        "body {}\n"
    );
}
