use std::fs;

use predicates::str::contains;
use tempfile::TempDir;

macro_rules! mono {
    () => {
        assert_cmd::cargo::cargo_bin_cmd!("mono")
    };
}

fn create_monorepo() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(dir.path().join("mono.yml"), "language: nodejs\npackages_dir: packages\n")
        .expect("write mono.yml");
    for name in ["core", "ui"] {
        let package = dir.path().join("packages").join(name);
        fs::create_dir_all(&package).expect("create package dir");
        fs::write(
            package.join("package.json"),
            format!(r#"{{"name": "{name}", "version": "1.0.0"}}"#),
        )
        .expect("write package.json");
    }
    dir
}

#[test]
fn add_writes_changeset_file() {
    let repo = create_monorepo();

    mono!()
        .args([
            "changeset", "add", "--package", "ui", "--bump", "minor", "--type", "add", "--message",
            "Add dark mode.",
        ])
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(contains("Created changeset for ui:"));

    let files: Vec<_> = fs::read_dir(repo.path().join("packages/ui/.changesets"))
        .expect("changeset dir")
        .map(|entry| entry.expect("entry").path())
        .collect();
    assert_eq!(files.len(), 1);
    let content = fs::read_to_string(&files[0]).expect("read changeset");
    assert!(content.contains("bump: minor"));
    assert!(content.contains("type: add"));
    assert!(content.ends_with("\n\nAdd dark mode.\n"));
}

#[test]
fn add_requires_package_in_monorepo() {
    let repo = create_monorepo();

    mono!()
        .args(["changeset", "add", "-b", "patch", "-t", "fix", "-m", "Fix."])
        .current_dir(repo.path())
        .assert()
        .failure()
        .stderr(contains("--package is required in a monorepo (available: core, ui)"));
}

#[test]
fn add_rejects_unknown_package() {
    let repo = create_monorepo();

    mono!()
        .args(["changeset", "add", "-p", "web", "-b", "patch", "-t", "fix", "-m", "Fix."])
        .current_dir(repo.path())
        .assert()
        .failure()
        .stderr(contains("unknown package 'web'"));
}

#[test]
fn add_rejects_invalid_bump() {
    let repo = create_monorepo();

    mono!()
        .args(["changeset", "add", "-p", "ui", "-b", "huge", "-t", "fix", "-m", "Fix."])
        .current_dir(repo.path())
        .assert()
        .failure()
        .stderr(contains("invalid value 'huge'"));
}

#[test]
fn add_rejects_blank_message() {
    let repo = create_monorepo();

    mono!()
        .args(["changeset", "add", "-p", "ui", "-b", "patch", "-t", "fix", "-m", "   "])
        .current_dir(repo.path())
        .assert()
        .failure()
        .stderr(contains("error:"));
}
