//! End-to-end creation pipeline tests against a temporary development root

mod common;

use common::{FakeRunner, Workspace};
use newproject_core::{EditorChoice, ProjectKind, StrategyTag};
use newproject_scaffold::{Dispatcher, Error, Platform, ProjectRequest, Step, StepOutcome};
use std::fs;

fn dispatch(
    ws: &Workspace,
    runner: &FakeRunner,
    request: ProjectRequest,
) -> newproject_scaffold::Result<newproject_scaffold::CreationReport> {
    Dispatcher::new(&ws.config, runner)
        .with_platform(Platform::Linux)
        .dispatch(&request)
}

#[test]
fn test_every_kind_creates_its_project_directory() {
    let ws = Workspace::new();
    let runner = FakeRunner::all_installed();

    for kind in ProjectKind::ALL {
        let report = dispatch(&ws, &runner, ProjectRequest::new(kind, "demo")).unwrap();
        let expected = ws.project_dir(kind, "demo");

        assert!(expected.is_dir(), "{:?}: {} missing", kind, expected);
        assert_eq!(report.project_dir, expected);
        assert_eq!(report.strategy, kind.strategy_tag());
        assert!(report.is_clean(), "{:?}: {:?}", kind, report.failures().collect::<Vec<_>>());
    }
}

#[test]
fn test_existing_project_is_rejected_without_mutation() {
    let ws = Workspace::new();
    let runner = FakeRunner::all_installed();

    for kind in ProjectKind::ALL {
        let dir = ws.project_dir(kind, "taken");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("keep.txt"), "mine").unwrap();
    }
    let before = ws.snapshot();

    for kind in ProjectKind::ALL {
        let result = dispatch(&ws, &runner, ProjectRequest::new(kind, "taken"));
        assert!(
            matches!(result, Err(Error::AlreadyExists { .. })),
            "{:?}: {:?}",
            kind,
            result
        );
    }

    assert_eq!(ws.snapshot(), before);
    assert!(runner.calls().is_empty());
}

#[test]
fn test_invalid_names_are_rejected_for_every_kind() {
    let ws = Workspace::new();
    let runner = FakeRunner::all_installed();
    let before = ws.snapshot();

    for kind in ProjectKind::ALL {
        for name in ["my project", "a&&b", "a||b", "", "nested/demo", ".."] {
            let result = dispatch(&ws, &runner, ProjectRequest::new(kind, name));
            let err = result.unwrap_err();
            assert!(matches!(err, Error::InvalidName { .. }), "{:?} {:?}: {}", kind, name, err);
            assert_eq!(err.exit_code(), 22);
        }
    }

    assert_eq!(ws.snapshot(), before);
    assert!(runner.calls().is_empty());
}

#[test]
fn test_missing_dev_root_wins_over_kind_folder_state() {
    let ws = Workspace::new();
    let runner = FakeRunner::all_installed();
    let config = ws.config.clone().with_dev_root(ws.root.join("gone"));

    for kind in ProjectKind::ALL {
        let result = Dispatcher::new(&config, &runner).dispatch(&ProjectRequest::new(kind, "demo"));
        let err = result.unwrap_err();
        assert!(matches!(err, Error::DevRootNotFound { .. }), "{:?}: {}", kind, err);
        assert_eq!(err.exit_code(), 2);
    }
    assert!(!ws.root.join("gone").exists());
}

#[test]
fn test_missing_kind_folder_is_not_created() {
    let ws = Workspace::bare();
    let runner = FakeRunner::all_installed();

    let err = dispatch(&ws, &runner, ProjectRequest::new(ProjectKind::Go, "demo")).unwrap_err();
    assert!(matches!(err, Error::KindFolderNotFound { .. }));
    assert!(!ws.kind_folder(ProjectKind::Go).exists());
}

#[test]
fn test_python_demo_end_to_end() {
    let ws = Workspace::new();
    let runner = FakeRunner::all_installed();

    let report = dispatch(&ws, &runner, ProjectRequest::new(ProjectKind::Python, "demo")).unwrap();
    let dir = ws.project_dir(ProjectKind::Python, "demo");

    assert!(report.is_clean());
    assert!(dir.join("demo.py").is_file());
    assert!(dir.join("venv").is_dir());
    assert!(dir.join(".git").is_dir());

    let readme = fs::read_to_string(dir.join("README.md")).unwrap();
    assert_eq!(readme.lines().next(), Some("# demo"));

    let gitignore = fs::read_to_string(dir.join(".gitignore")).unwrap();
    assert_eq!(gitignore, ws.config.gitignore_content(ProjectKind::Python));

    let steps: Vec<Step> = report.steps.iter().map(|r| r.step.clone()).collect();
    assert_eq!(
        steps,
        vec![
            Step::Preconditions,
            Step::CreateDir,
            Step::RuntimeEnv,
            Step::WriteFile {
                path: "demo.py".to_string()
            },
            Step::Readme,
            Step::VcsInit,
            Step::IgnoreFile,
            Step::Editor,
        ]
    );
    assert!(matches!(report.outcome(&Step::Editor), Some(StepOutcome::Skipped)));
}

#[test]
fn test_ignore_file_failure_keeps_starter_and_readme() {
    let ws = Workspace::new();
    let runner = FakeRunner::all_installed().blocking_ignore_file();

    let report = dispatch(&ws, &runner, ProjectRequest::new(ProjectKind::Go, "demo")).unwrap();
    let dir = ws.project_dir(ProjectKind::Go, "demo");

    assert!(dir.join("main.go").is_file());
    assert!(dir.join("README.md").is_file());
    assert!(report.outcome(&Step::VcsInit).unwrap().is_done());
    assert!(matches!(
        report.outcome(&Step::IgnoreFile).and_then(StepOutcome::error),
        Some(Error::IoWriteFailed { .. })
    ));
    assert_eq!(report.failures().count(), 1);
}

#[test]
fn test_missing_venv_tool_is_not_fatal() {
    let ws = Workspace::new();
    let runner = FakeRunner::all_installed().without("python3");

    let report = dispatch(&ws, &runner, ProjectRequest::new(ProjectKind::Python, "demo")).unwrap();
    let dir = ws.project_dir(ProjectKind::Python, "demo");

    assert!(!dir.join("venv").exists());
    assert!(dir.join("demo.py").is_file());
    assert!(matches!(
        report.outcome(&Step::RuntimeEnv).and_then(StepOutcome::error),
        Some(Error::ToolNotFound { .. })
    ));
}

#[test]
fn test_windows_venv_prefers_virtualenv() {
    let ws = Workspace::new();
    let runner = FakeRunner::all_installed();

    Dispatcher::new(&ws.config, &runner)
        .with_platform(Platform::Windows)
        .dispatch(&ProjectRequest::new(ProjectKind::Python, "winproj"))
        .unwrap();

    assert!(runner.ran("virtualenv"));
    assert!(!runner.ran("python3"));
    assert!(ws.project_dir(ProjectKind::Python, "winproj").join("venv").is_dir());
}

#[test]
fn test_missing_git_is_not_fatal() {
    let ws = Workspace::new();
    let runner = FakeRunner::all_installed().without("git");

    let report = dispatch(&ws, &runner, ProjectRequest::new(ProjectKind::Lua, "demo")).unwrap();
    let dir = ws.project_dir(ProjectKind::Lua, "demo");

    assert!(dir.join("main.lua").is_file());
    assert!(dir.join("README.md").is_file());
    assert!(!dir.join(".gitignore").exists());
    assert!(matches!(
        report.outcome(&Step::VcsInit).and_then(StepOutcome::error),
        Some(Error::ToolNotFound { .. })
    ));
    assert!(matches!(report.outcome(&Step::IgnoreFile), Some(StepOutcome::Skipped)));
}

#[test]
fn test_failing_git_init_is_not_fatal() {
    let ws = Workspace::new();
    let runner = FakeRunner::all_installed().failing("git");

    let report = dispatch(&ws, &runner, ProjectRequest::new(ProjectKind::Go, "demo")).unwrap();
    let dir = ws.project_dir(ProjectKind::Go, "demo");

    assert!(matches!(
        report.outcome(&Step::VcsInit).and_then(StepOutcome::error),
        Some(Error::ToolExecutionFailed { .. })
    ));
    assert!(report.outcome(&Step::IgnoreFile).is_some_and(StepOutcome::is_done));
    assert!(report.outcome(&Step::Readme).is_some_and(StepOutcome::is_done));
    assert!(matches!(report.outcome(&Step::Editor), Some(StepOutcome::Skipped)));
    assert_eq!(report.failures().count(), 1);

    assert!(dir.join("main.go").is_file());
    assert!(dir.join(".gitignore").is_file());
    assert!(!dir.join(".git").exists());
}

#[test]
fn test_failing_venv_tool_is_not_fatal() {
    let ws = Workspace::new();
    let runner = FakeRunner::all_installed().failing("python3");

    let report = dispatch(&ws, &runner, ProjectRequest::new(ProjectKind::Python, "demo")).unwrap();
    let dir = ws.project_dir(ProjectKind::Python, "demo");

    assert!(matches!(
        report.outcome(&Step::RuntimeEnv).and_then(StepOutcome::error),
        Some(Error::ToolExecutionFailed { .. })
    ));
    for step in [Step::Readme, Step::VcsInit, Step::IgnoreFile] {
        assert!(report.outcome(&step).is_some_and(StepOutcome::is_done), "{}", step);
    }
    assert_eq!(report.failures().count(), 1);

    assert!(dir.join("demo.py").is_file());
    assert!(dir.join(".git").is_dir());
    assert!(dir.join(".gitignore").is_file());
}

#[test]
fn test_absolute_name_stays_inside_kind_folder() {
    let ws = Workspace::new();
    let runner = FakeRunner::all_installed();
    let outside = ws.root.parent().unwrap().join("escaped");
    let before = ws.snapshot();

    let err = dispatch(&ws, &runner, ProjectRequest::new(ProjectKind::Go, outside.as_str())).unwrap_err();

    assert!(matches!(err, Error::InvalidName { .. }), "{}", err);
    assert_eq!(err.exit_code(), 22);
    assert!(!outside.exists());
    assert_eq!(ws.snapshot(), before);
    assert!(runner.calls().is_empty());
}

#[test]
fn test_delegated_missing_generator_creates_nothing() {
    let ws = Workspace::new();
    let runner = FakeRunner::all_installed().without("cargo");

    let err = dispatch(&ws, &runner, ProjectRequest::new(ProjectKind::Rust, "demo")).unwrap_err();

    assert!(matches!(err, Error::ToolNotFound { ref tool } if tool == "cargo"));
    assert_eq!(err.exit_code(), 127);
    assert!(!ws.project_dir(ProjectKind::Rust, "demo").exists());
    assert!(runner.calls().is_empty());
}

#[test]
fn test_delegated_generator_invocation() {
    let ws = Workspace::new();
    let runner = FakeRunner::all_installed();

    let report = dispatch(
        &ws,
        &runner,
        ProjectRequest::new(ProjectKind::Ocaml, "demo").with_editor(Some(EditorChoice::Code)),
    )
    .unwrap();
    let dir = ws.project_dir(ProjectKind::Ocaml, "demo");

    assert_eq!(report.strategy, StrategyTag::Delegated);
    assert_eq!(
        runner.calls(),
        vec![
            vec!["dune".to_string(), "init".to_string(), "project".to_string(), dir.to_string()],
            vec!["code".to_string(), dir.to_string()],
        ]
    );
    assert!(report.outcome(&Step::Readme).is_none());
    assert!(report.outcome(&Step::VcsInit).is_none());
}

#[test]
fn test_delegated_generator_failure_is_fatal() {
    let ws = Workspace::new();
    let runner = FakeRunner::all_installed().failing("bundler");

    let err = dispatch(&ws, &runner, ProjectRequest::new(ProjectKind::Ruby, "demo")).unwrap_err();
    assert!(matches!(err, Error::ToolExecutionFailed { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_delegated_success_without_output_is_fatal() {
    let ws = Workspace::new();
    let runner = FakeRunner::all_installed().silent("v");

    let err = dispatch(&ws, &runner, ProjectRequest::new(ProjectKind::Vlang, "demo")).unwrap_err();
    assert!(matches!(err, Error::ToolExecutionFailed { ref tool, .. } if tool == "v"));
    assert!(!runner.ran("code"));
}

#[test]
fn test_web_project_layout() {
    let ws = Workspace::new();
    let runner = FakeRunner::all_installed();

    let report = dispatch(&ws, &runner, ProjectRequest::new(ProjectKind::Web, "site")).unwrap();
    let dir = ws.project_dir(ProjectKind::Web, "site");

    for file in ["index.html", "styles/style.css", "scripts/index.js", "README.md", ".gitignore"] {
        assert!(dir.join(file).is_file(), "{} missing", file);
    }
    let html = fs::read_to_string(dir.join("index.html")).unwrap();
    assert!(html.contains("site"), "project name not substituted: {}", html);
    assert!(report.is_clean());
}

#[test]
fn test_non_specific_project() {
    let ws = Workspace::new();
    let runner = FakeRunner::all_installed();

    dispatch(&ws, &runner, ProjectRequest::new(ProjectKind::NonSpecific, "notes")).unwrap();
    let dir = ws.project_dir(ProjectKind::NonSpecific, "notes");

    let mut entries: Vec<String> = dir
        .read_dir_utf8()
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string())
        .collect();
    entries.sort();
    assert_eq!(entries, vec![".git", ".gitignore", "README.md"]);
    assert_eq!(
        fs::read_to_string(dir.join(".gitignore")).unwrap(),
        ws.config.inner().default_gitignore_content
    );
}

#[test]
fn test_missing_editor_is_not_fatal() {
    let ws = Workspace::new();
    let runner = FakeRunner::all_installed().without("pycharm");

    let report = dispatch(
        &ws,
        &runner,
        ProjectRequest::new(ProjectKind::Java, "demo").with_editor(Some(EditorChoice::Pycharm)),
    )
    .unwrap();

    assert!(ws.project_dir(ProjectKind::Java, "demo").join("Main.java").is_file());
    assert!(matches!(
        report.outcome(&Step::Editor).and_then(StepOutcome::error),
        Some(Error::ToolNotFound { .. })
    ));
}

#[test]
fn test_second_request_for_same_name_fails() {
    let ws = Workspace::new();
    let runner = FakeRunner::all_installed();

    dispatch(&ws, &runner, ProjectRequest::new(ProjectKind::Cpp, "demo")).unwrap();
    let err = dispatch(&ws, &runner, ProjectRequest::new(ProjectKind::Cpp, "demo")).unwrap_err();
    assert_eq!(err.exit_code(), 17);
}
