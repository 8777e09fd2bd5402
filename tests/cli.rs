use assert_cmd::Command;
use predicates::prelude::*;
use std::{fs, path::Path};
use tempfile::TempDir;

struct Env {
    store: TempDir,
    here: TempDir,
}

impl Env {
    fn new() -> Self {
        let env = Env {
            store: TempDir::new().unwrap(),
            here: TempDir::new().unwrap(),
        };
        fs::write(env.store.path().join("python.py"), "#!/usr/bin/env python\n").unwrap();
        env
    }

    fn newt(&self) -> Command {
        let mut cmd = Command::cargo_bin("newt").unwrap();
        cmd.env("NEWT_TEMPLATES", self.store.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .current_dir(self.here.path());
        cmd
    }

    fn here(&self) -> &Path {
        self.here.path()
    }
}

#[test]
fn no_arguments_prints_usage_and_listing() {
    let env = Env::new();

    env.newt()
        .assert()
        .code(exitcode::USAGE)
        .stdout(predicate::str::contains("Usage: newt target [output_name ...]"))
        .stdout(predicate::str::contains("Available targets:"))
        .stdout(predicate::str::contains("Name"))
        .stdout(predicate::str::contains("python    ->    python.py"));
}

#[test]
fn target_is_copied_under_its_own_name() {
    let env = Env::new();

    env.newt().arg("python").assert().success();

    assert_eq!(
        fs::read_to_string(env.here().join("python.py")).unwrap(),
        "#!/usr/bin/env python\n"
    );
}

#[test]
fn output_names_replace_the_template_name() {
    let env = Env::new();

    env.newt().args(&["python", "myscript.py"]).assert().success();

    assert!(env.here().join("myscript.py").is_file());
    assert!(!env.here().join("python.py").exists());
    assert_eq!(
        fs::read(env.here().join("myscript.py")).unwrap(),
        fs::read(env.store.path().join("python.py")).unwrap()
    );
}

#[test]
fn unknown_target_is_reported() {
    let env = Env::new();

    env.newt()
        .arg("unknown_target")
        .assert()
        .code(exitcode::USAGE)
        .stdout(predicate::str::contains(
            "Chosen target 'unknown_target' doesn't exist.",
        ))
        .stdout(predicate::str::contains("Available targets:"));
}

#[test]
fn closed_stdin_never_overwrites() {
    let env = Env::new();
    fs::write(env.here().join("python.py"), "mine").unwrap();

    env.newt()
        .arg("python")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped"));

    assert_eq!(fs::read_to_string(env.here().join("python.py")).unwrap(), "mine");
}

#[test]
fn piped_answers_are_not_trusted() {
    let env = Env::new();
    fs::write(env.here().join("python.py"), "mine").unwrap();

    env.newt()
        .arg("python")
        .write_stdin("y\n")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(env.here().join("python.py")).unwrap(), "mine");
}

#[test]
fn running_inside_the_store_fails_without_touching_it() {
    let env = Env::new();

    env.newt()
        .arg("python")
        .current_dir(env.store.path())
        .assert()
        .code(exitcode::IOERR)
        .stdout(predicate::str::contains("is the template itself"));

    assert_eq!(
        fs::read_to_string(env.store.path().join("python.py")).unwrap(),
        "#!/usr/bin/env python\n"
    );
}

#[test]
fn output_names_may_start_with_a_hyphen() {
    let env = Env::new();

    env.newt().args(&["python", "-x.py"]).assert().success();
    env.newt().args(&["python", "--", "-v"]).assert().success();

    assert!(env.here().join("-x.py").is_file());
    assert!(env.here().join("-v").is_file());
}

#[test]
fn directory_templates_are_copied_without_merging_unasked() {
    let env = Env::new();
    let paper = env.store.path().join("paper");
    fs::create_dir_all(paper.join("figures")).unwrap();
    fs::write(paper.join("main.tex"), "\\documentclass{article}").unwrap();
    fs::write(paper.join("figures").join("plot.py"), "").unwrap();
    fs::create_dir(env.here().join("thesis")).unwrap();
    fs::write(env.here().join("thesis").join("notes.md"), "keep").unwrap();

    env.newt()
        .args(&["paper", "thesis", "draft"])
        .assert()
        .success();

    let draft = env.here().join("draft");
    assert!(draft.join("main.tex").is_file());
    assert!(draft.join("figures").join("plot.py").is_file());
    assert!(!env.here().join("thesis").join("main.tex").exists());
    assert_eq!(
        fs::read_to_string(env.here().join("thesis").join("notes.md")).unwrap(),
        "keep"
    );
}

#[test]
fn list_flag_shows_directories_with_a_marker() {
    let env = Env::new();
    fs::create_dir(env.store.path().join("paper")).unwrap();

    env.newt()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("paper     ->    paper/"))
        .stdout(predicate::str::contains("python    ->    python.py"));
}

#[test]
fn default_store_lives_in_home_and_is_created() {
    let home = TempDir::new().unwrap();
    let here = TempDir::new().unwrap();

    Command::cargo_bin("newt")
        .unwrap()
        .env_remove("NEWT_TEMPLATES")
        .env("HOME", home.path())
        .current_dir(here.path())
        .assert()
        .code(exitcode::USAGE)
        .stdout(predicate::str::contains("Name"));

    assert!(home.path().join(".newt_templates").is_dir());
}
