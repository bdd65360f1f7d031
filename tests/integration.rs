use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_groovydoc")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

// -- stdout mode --

#[test]
fn stdout_confluence_default_template() {
    let assert = cmd().arg(fixture_path("pipeline.groovy")).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert!(output.contains("<h2>checkoutRepo</h2>"));
    assert!(output.contains("<h2>archive</h2>"));
    assert!(output.contains("<h2>notify</h2>"));
    assert!(!output.contains("internalHelper"));
    assert!(!output.contains("${groovy."), "unfilled placeholder in: {output}");
    let checkout = output.find("<h2>checkoutRepo</h2>").unwrap();
    let notify = output.find("<h2>notify</h2>").unwrap();
    assert!(checkout < notify);
}

#[test]
fn stdout_markdown() {
    cmd()
        .args(["-f", "markdown"])
        .arg(fixture_path("pipeline.groovy"))
        .assert()
        .success()
        .stdout(predicate::str::contains("* [checkoutRepo](#checkoutrepo)"))
        .stdout(predicate::str::contains("```groovy\ndef notify( String channel, String message )\n```"));
}

#[test]
fn stdout_json() {
    let assert = cmd()
        .args(["-f", "json"])
        .arg(fixture_path("pipeline.groovy"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("\"functions\""));
    assert!(output.contains("\"type\": \"String\""));
    assert!(output.contains("\"returns\": \"Nothing.\""));
    assert!(!output.contains("\"source\""));
}

// -- file mode --

#[test]
fn output_dir_gets_one_file_per_input() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("pipeline.groovy"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let output = std::fs::read_to_string(dir.path().join("pipeline.xhtml")).unwrap();
    assert!(output.contains("<h2>checkoutRepo</h2>"));
}

#[test]
fn directory_input_is_scanned() {
    let dir = TempDir::new().unwrap();
    cmd()
        .args(["-o", dir.path().to_str().unwrap(), "-f", "md"])
        .arg(format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR")))
        .assert()
        .success();

    assert!(dir.path().join("pipeline.md").exists());
    assert!(!dir.path().join("template.md").exists());
}

#[test]
fn same_stem_in_two_directories_fails() {
    let src = TempDir::new().unwrap();
    for dir in ["a", "b"] {
        std::fs::create_dir(src.path().join(dir)).unwrap();
        std::fs::write(
            src.path().join(dir).join("utils.groovy"),
            format!("/**\n * From {dir}.\n */\ndef from_{dir}()\n"),
        )
        .unwrap();
    }
    let out = TempDir::new().unwrap();

    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .arg(src.path().join("a/utils.groovy").to_str().unwrap())
        .arg(src.path().join("b/utils.groovy").to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("both render to"))
        .stderr(predicate::str::contains("utils.xhtml"));

    let output = std::fs::read_to_string(out.path().join("utils.xhtml")).unwrap();
    assert!(output.contains("From a."));
}

#[test]
fn undocumented_file_writes_nothing() {
    let src = TempDir::new().unwrap();
    let input = src.path().join("plain.groovy");
    std::fs::write(&input, "def plain() { 1 }\n").unwrap();
    let out = TempDir::new().unwrap();

    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .arg(input.to_str().unwrap())
        .assert()
        .success();

    assert!(!out.path().join("plain.xhtml").exists());
}

// -- templates --

#[test]
fn custom_template() {
    let assert = cmd()
        .args(["-t", &fixture_path("template.xhtml")])
        .arg(fixture_path("pipeline.groovy"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert!(output.starts_with("<h1>Pipeline library</h1>\n"));
    assert!(output.contains("<h2 id=\"notify\">notify</h2>"));
    assert!(output.contains("<p>Returns: Nothing useful.</p>"));
    assert!(output.contains("<strong>repo</strong>"));
    assert!(output.trim_end().ends_with("<p>Generated by groovydoc.</p>"));
}

#[test]
fn template_into_target_page() {
    let assert = cmd()
        .args(["-t", &fixture_path("template.xhtml")])
        .args(["--target", &fixture_path("target.xhtml")])
        .arg(fixture_path("pipeline.groovy"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert!(output.starts_with("<p>Intro written by hand.</p>\n"));
    assert!(output.contains("<h2 id=\"archive\">archive</h2>"));
    assert!(!output.contains("<h1>Pipeline library</h1>"));
    assert!(!output.contains("${groovy.target}"));
}

#[test]
fn template_without_markers_fails() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("bad.xhtml");
    std::fs::write(&template, "<p>${groovy.title}</p>").unwrap();

    cmd()
        .args(["-t", template.to_str().unwrap()])
        .arg(fixture_path("pipeline.groovy"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid template"));
}

// -- errors --

#[test]
fn invalid_format_fails() {
    cmd()
        .args(["-f", "xml"])
        .arg(fixture_path("pipeline.groovy"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn missing_input_is_skipped_with_warning() {
    cmd()
        .arg("no/such/file.groovy")
        .assert()
        .success()
        .stderr(predicate::str::contains("no files matched"));
}

#[test]
fn unknown_log_level_fails() {
    cmd()
        .args(["--log-level", "bogus"])
        .arg(fixture_path("pipeline.groovy"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn files_are_required() {
    cmd().assert().failure();
}
