use assert_cmd::cargo::cargo_bin_cmd;
use grimoire_parser::rulebook::testing::{OBJECTS_SAMPLE, SPELLS_SAMPLE};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

fn write_source(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("grimoire");
    cmd.arg("--list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("json (.json)")
            .and(predicate::str::contains("tsv (.tsv)"))
            .and(predicate::str::contains("yaml (.yml)")),
    );
}

#[test]
fn prints_tsv_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let spells = write_source(dir.path(), "06-spells.txt", SPELLS_SAMPLE);

    let mut cmd = cargo_bin_cmd!("grimoire");
    cmd.arg(&spells).args(["--stdout", "--format", "tsv"]);

    cmd.assert().success().stdout(
        predicate::str::contains("Title\tType\tComment\tLevel\tEffect")
            .and(predicate::str::contains("Light\tCANTRIP\tA mote of light appears.")),
    );
}

#[test]
fn writes_output_tree() {
    let dir = tempfile::tempdir().unwrap();
    let objects = write_source(dir.path(), "05-objects.txt", OBJECTS_SAMPLE);
    let out = dir.path().join("out");

    let mut cmd = cargo_bin_cmd!("grimoire");
    cmd.arg(&objects)
        .arg("--output")
        .arg(&out)
        .args(["-f", "json", "-f", "yaml"]);
    cmd.assert().success();

    let json = fs::read_to_string(out.join("json/objects-of-power.json")).unwrap();
    assert!(json.contains("\"Ember Ring\": {"));
    assert!(out.join("yaml/objects-of-power.yml").exists());
    assert!(!out.join("tsv").exists());
}

#[test]
fn type_flag_parses_headerless_files() {
    let dir = tempfile::tempdir().unwrap();
    let spells = write_source(dir.path(), "spells.txt", "Foo (SPELL)\nLevel: 3\n");

    let mut cmd = cargo_bin_cmd!("grimoire");
    cmd.arg(&spells)
        .args(["--type", "spells", "--stdout", "--format", "json"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"Spells\"").and(predicate::str::contains("\"Level\": \"3\"")));
}

#[test]
fn type_flag_keeps_cantrips() {
    let dir = tempfile::tempdir().unwrap();
    let spells = write_source(
        dir.path(),
        "spells.txt",
        "Foo (SPELL)\nLevel: 3\nLight (CANTRIP): Glow.\n",
    );

    let mut cmd = cargo_bin_cmd!("grimoire");
    cmd.arg(&spells)
        .args(["--type", "spells", "--stdout", "--format", "json"]);

    cmd.assert().success().stdout(
        predicate::str::contains("\"Cantrips\"")
            .and(predicate::str::contains("\"Effect\": \"Glow.\"")),
    );
}

#[test]
fn sources_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let spells = write_source(dir.path(), "spells.txt", SPELLS_SAMPLE);
    let config = dir.path().join("grimoire.toml");
    fs::write(
        &config,
        format!(
            "[[input.sources]]\npath = {:?}\n\n[output]\nformats = [\"yaml\"]\n",
            spells.display().to_string()
        ),
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("grimoire");
    cmd.arg("--config").arg(&config).arg("--stdout");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Bar Bolt:\n    Title: Bar Bolt"));
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("grimoire");
    cmd.arg(dir.path().join("nope.txt")).arg("--stdout");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("input file not found"));
}

#[test]
fn unknown_format_fails() {
    let dir = tempfile::tempdir().unwrap();
    let spells = write_source(dir.path(), "spells.txt", SPELLS_SAMPLE);

    let mut cmd = cargo_bin_cmd!("grimoire");
    cmd.arg(&spells)
        .arg("--output")
        .arg(dir.path().join("out"))
        .args(["--format", "xml"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("format 'xml' not found"));
}

#[test]
fn no_inputs_fails() {
    let mut cmd = cargo_bin_cmd!("grimoire");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no input files given"));
}

#[test]
fn unknown_type_is_a_usage_error() {
    let mut cmd = cargo_bin_cmd!("grimoire");
    cmd.args(["rules.txt", "--type", "bestiary"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown document type 'bestiary'"));
}
