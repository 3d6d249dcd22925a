//! End-to-end tests for the `transcode` binary.

use assert_cmd::Command;
use std::process::Output;
use tempfile::TempDir;

/// A `transcode` command isolated from any user or project config.
fn transcode(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("transcode").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env_remove("RUST_LOG")
        .arg("--root")
        .arg(home.path());
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn convert_stdin_to_cpp() {
    let home = TempDir::new().unwrap();
    let output = transcode(&home)
        .args(["convert", "--to", "cpp"])
        .write_stdin("x = 5\nprint(x)\n")
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.starts_with("#include <iostream>"));
    assert!(out.contains("    int x = 5;\n    cout << x << endl;"));
    assert!(!out.contains("Converted to"));
}

#[test]
fn convert_to_several_targets_prints_headers() {
    let home = TempDir::new().unwrap();
    let output = transcode(&home)
        .args(["convert", "--to", "java,javascript"])
        .write_stdin("name = \"Ada\"")
        .output()
        .unwrap();

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Converted to JAVA:"));
    assert!(out.contains("String name = \"Ada\";"));
    assert!(out.contains("Converted to JAVASCRIPT:"));
    assert!(out.contains("const name = \"Ada\";"));
}

#[test]
fn unknown_target_fails_without_output() {
    let home = TempDir::new().unwrap();
    let output = transcode(&home)
        .args(["convert", "--to", "unknown-lang"])
        .write_stdin("x = 1")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(
        stderr(&output)
            .contains("Error converting to unknown-lang: unsupported target: unknown-lang")
    );
}

#[test]
fn malformed_line_aborts_by_default() {
    let home = TempDir::new().unwrap();
    let output = transcode(&home)
        .args(["convert", "--to", "java"])
        .write_stdin("print(\"open\"\ny = 1")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(stderr(&output).contains("line 1: malformed print call"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn malformed_line_skipped_on_request() {
    let home = TempDir::new().unwrap();
    let output = transcode(&home)
        .args(["convert", "--to", "java", "--on-malformed", "skip", "--report"])
        .write_stdin("print(\"open\"\ny = 1")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).contains("int y = 1;"));
    assert!(stderr(&output).contains("java: line 1 dropped"));
}

#[test]
fn project_config_sets_policy_and_targets() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".normalize");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("transcode.toml"),
        "[convert]\ntargets = [\"cpp\"]\non_malformed = \"skip\"\n",
    )
    .unwrap();

    let output = transcode(&home)
        .arg("convert")
        .write_stdin("def broken(:\nz = 2.5")
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("    double z = 2.5;"));
    assert!(!out.contains("Converted to"));
}

#[test]
fn out_dir_writes_one_file_per_target() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("calc.py");
    std::fs::write(&input, "total = a + b\n").unwrap();
    let out_dir = home.path().join("out");

    let output = transcode(&home)
        .arg("convert")
        .arg(&input)
        .arg("--all")
        .arg("--out-dir")
        .arg(&out_dir)
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    let java = std::fs::read_to_string(out_dir.join("calc.java")).unwrap();
    assert!(java.contains("double total = a + b;"));
    let cpp = std::fs::read_to_string(out_dir.join("calc.cpp")).unwrap();
    assert!(cpp.contains("auto total = a + b;"));
    let js = std::fs::read_to_string(out_dir.join("calc.js")).unwrap();
    assert!(js.contains("const total = a + b;"));
}

#[test]
fn targets_lists_every_target() {
    let home = TempDir::new().unwrap();
    let output = transcode(&home).arg("targets").output().unwrap();

    assert!(output.status.success());
    let out = stdout(&output);
    for id in ["javascript", "java", "cpp"] {
        assert!(out.contains(id), "missing {id}");
    }
}

#[test]
fn targets_json_includes_profiles() {
    let home = TempDir::new().unwrap();
    let output = transcode(&home).args(["targets", "--json"]).output().unwrap();

    let profiles: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<_> = profiles
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["javascript", "java", "cpp"]);
    assert_eq!(profiles[1]["types"]["inferred"], "double");
}

#[test]
fn classify_prints_one_record_per_line() {
    let home = TempDir::new().unwrap();
    let output = transcode(&home)
        .arg("classify")
        .write_stdin("x = int(input())\nprint(x")
        .output()
        .unwrap();

    assert!(output.status.success());
    let records: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["rule"], "input");
    assert_eq!(records[0]["statement"]["kind"], "input_binding");
    assert_eq!(records[1]["error"], "malformed print call: print(x");
}

#[test]
fn classify_numbers_lines_like_convert() {
    let home = TempDir::new().unwrap();
    let output = transcode(&home)
        .arg("classify")
        .write_stdin("x = 1\r\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let records: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["rule"], "assignment");
    assert_eq!(records[1]["line"], 2);
    assert_eq!(records[1]["rule"], "blank");
}
