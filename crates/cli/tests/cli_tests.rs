// Integration tests for the `landform` binary: stdout contract and exit codes.
// Run with: cargo test -p landform-cli --test cli_tests -- --nocapture

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn landform() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_landform"));
    cmd.current_dir(env!("CARGO_MANIFEST_DIR"));
    cmd.env_remove("LANDFORM_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn fixture(name: &str) -> String {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "fixtures", name].iter().collect();
    path.to_str().unwrap().to_string()
}

fn run(args: &[&str]) -> Output {
    landform().args(args).output().expect("run landform")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(stdout.trim())
        .unwrap_or_else(|e| panic!("stdout must be valid JSON: {e}\nstdout:\n{stdout}"))
}

fn temp_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// ---------------------------------------------------------------------------
// fill
// ---------------------------------------------------------------------------

#[test]
fn fill_json_reports_ordered_updates() {
    let output = run(&["fill", &fixture("kathmandu.recognizer.json"), "--json"]);
    assert!(output.status.success(), "exit code was {:?}", output.status);

    let report = stdout_json(&output);
    let updates = report["updates"].as_array().unwrap();
    let fields: Vec<&str> = updates.iter().map(|u| u["field"].as_str().unwrap()).collect();
    assert_eq!(
        fields,
        vec![
            "owner_name",
            "ward",
            "plot_number",
            "kitta",
            "province",
            "district",
            "municipality",
            "area",
            "area_unit"
        ]
    );
    assert_eq!(updates[4]["value"], "Bagmati Pradesh");
    assert_eq!(updates[6]["value"], "Kageshwari Manohara Municipality");
    assert_eq!(updates[0]["provenance"], "auto_filled");
    assert_eq!(report["extracted_count"], 8);
    assert_eq!(report["area"]["unit"], "ropani");
}

#[test]
fn fill_plain_output_is_tab_separated() {
    let output = run(&["fill", &fixture("kathmandu.recognizer.json")]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().any(|l| l == "district\tKathmandu"), "stdout:\n{stdout}");
    assert!(stdout.lines().any(|l| l == "area_unit\tropani"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Extracted 8 field(s), auto-filled 9."), "stderr:\n{stderr}");
}

#[test]
fn fill_unknown_place_is_partial_success() {
    let output = run(&["fill", &fixture("unknown-place.recognizer.json"), "--json"]);
    assert!(output.status.success());

    let report = stdout_json(&output);
    assert_eq!(report["updates"].as_array().unwrap().len(), 1);
    assert_eq!(report["location"]["district"], serde_json::Value::Null);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("please select it manually"));
}

#[test]
fn fill_upstream_failure_exits_10_with_message() {
    let output = run(&["fill", &fixture("upstream-failure.recognizer.json")]);
    assert_eq!(output.status.code(), Some(10));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not extract text from the document."), "stderr:\n{stderr}");
}

#[test]
fn fill_apply_keeps_user_entries() {
    let output = run(&[
        "fill",
        &fixture("kathmandu.recognizer.json"),
        "--state",
        &fixture("user-edited.form.json"),
        "--apply",
        "--json",
    ]);
    assert!(output.status.success());

    let state = stdout_json(&output);
    assert_eq!(state["owner_name"]["value"], "Ram P. Sharma");
    assert_eq!(state["owner_name"]["provenance"], "user_entered");
    assert_eq!(state["district"]["value"], "Kathmandu");
    assert_eq!(state["municipality"]["value"], "Kageshwari Manohara Municipality");
    assert_eq!(state["municipality"]["provenance"], "auto_filled");
    assert_eq!(state["area_unit"]["value"], "sqft");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("kept user-entered: owner_name, district, area_unit"));
}

#[test]
fn fill_reads_stdin() {
    let mut child = landform()
        .args(["fill", "-", "--json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"{"success":true,"extracted_fields":{"district":"Kaski","area":"4 bigha"}}"#)
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let report = stdout_json(&output);
    assert_eq!(report["location"]["province"], "Gandaki Pradesh");
    assert_eq!(report["area"]["unit"], "bigha");
}

#[test]
fn fill_with_substitute_gazetteer_and_config() {
    let config = temp_file("[resolver]\nleaf_fallback = true\n");
    let recognizer = temp_file(r#"{"success":true,"extracted_fields":{"municipality":"Annapurna"}}"#);
    let output = run(&[
        "fill",
        recognizer.path().to_str().unwrap(),
        "--gazetteer",
        &fixture("fixture.gazetteer.toml"),
        "--config",
        config.path().to_str().unwrap(),
        "--json",
    ]);
    assert!(output.status.success());

    let report = stdout_json(&output);
    assert_eq!(report["location"]["district"], "Kaski");
    assert_eq!(report["location"]["municipality"], "Annapurna");
}

#[test]
fn fill_malformed_input_is_usage_error() {
    let bad = temp_file("{not json");
    let output = run(&["fill", bad.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn fill_missing_file_is_io_error() {
    let output = run(&["fill", "tests/fixtures/does-not-exist.json"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn fill_bad_gazetteer_is_invalid_config() {
    let table = temp_file("[[province]]\nname = \"\"\n");
    let output = run(&[
        "fill",
        &fixture("kathmandu.recognizer.json"),
        "--gazetteer",
        table.path().to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(12));
}

// ---------------------------------------------------------------------------
// resolve
// ---------------------------------------------------------------------------

#[test]
fn resolve_prints_triple() {
    let output = run(&[
        "resolve",
        "--district",
        "Kathmandu Municipality",
        "--municipality",
        "Kageshwari Manohara Municipality",
        "--json",
    ]);
    assert!(output.status.success());

    let loc = stdout_json(&output);
    assert_eq!(loc["province"], "Bagmati Pradesh");
    assert_eq!(loc["district"], "Kathmandu");
    assert_eq!(loc["municipality"], "Kageshwari Manohara Municipality");
}

#[test]
fn resolve_unknown_district_exits_11() {
    let output = run(&["resolve", "--district", "Unknown Place", "--municipality", "Nowhere"]);
    assert_eq!(output.status.code(), Some(11));
    assert!(output.stdout.is_empty());
}

#[test]
fn resolve_without_text_is_usage_error() {
    let output = run(&["resolve"]);
    assert_eq!(output.status.code(), Some(2));
}

// ---------------------------------------------------------------------------
// parse-area
// ---------------------------------------------------------------------------

#[test]
fn parse_area_plain_and_fallback() {
    let output = run(&["parse-area", "12.5 sq ft"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "12.5 square-foot");

    let output = run(&["parse-area", "1369", "--fallback", "sqm"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1369 square-meter");
}

#[test]
fn parse_area_without_number_exits_13() {
    let output = run(&["parse-area", "abc"]);
    assert_eq!(output.status.code(), Some(13));
}

#[test]
fn parse_area_unknown_fallback_is_usage_error() {
    let output = run(&["parse-area", "5", "--fallback", "acre"]);
    assert_eq!(output.status.code(), Some(2));
}

// ---------------------------------------------------------------------------
// gazetteer + validate-config
// ---------------------------------------------------------------------------

#[test]
fn gazetteer_lists_levels() {
    let output = run(&["gazetteer", "--json"]);
    assert!(output.status.success());
    let provinces = stdout_json(&output);
    assert_eq!(provinces.as_array().unwrap().len(), 7);
    assert_eq!(provinces[0], "Koshi Pradesh");

    let output = run(&["gazetteer", "--district", "Kaski"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().next(), Some("Pokhara Metropolitan"));
}

#[test]
fn gazetteer_unknown_province_exits_11() {
    let output = run(&["gazetteer", "--province", "Atlantis"]);
    assert_eq!(output.status.code(), Some(11));
}

#[test]
fn validate_config_accepts_and_rejects() {
    let good = temp_file("default_unit = \"ropani\"\n[matcher]\nmin_substring_len = 3\n");
    let output = run(&["validate-config", good.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("default unit:      ropani"));

    let bad = temp_file("[matcher]\nextra_admin_tokens = [\"\"]\n");
    let output = run(&["validate-config", bad.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(12));
}
