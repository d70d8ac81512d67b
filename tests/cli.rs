use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn write_script(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn prints_token_stream_for_a_script() -> Result<(), Box<dyn std::error::Error>> {
    let script = write_script("rulox_cli_var.lox", "var x = 10;\n");

    let mut cmd = Command::cargo_bin("rulox")?;
    cmd.arg(&script);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("VAR 1"))
        .stdout(predicate::str::contains("IDENTIFIER \"x\" 1"))
        .stdout(predicate::str::contains("EQUAL 1"))
        .stdout(predicate::str::contains("NUMBER 10.0 1"))
        .stdout(predicate::str::contains("SEMICOLON 1"))
        .stdout(predicate::str::contains("EOF 2"));

    Ok(())
}

#[test]
fn lexical_errors_map_to_exit_code_65() -> Result<(), Box<dyn std::error::Error>> {
    let script = write_script("rulox_cli_bad_char.lox", "1 @ 2\n");

    let mut cmd = Command::cargo_bin("rulox")?;
    cmd.arg(&script);
    cmd.assert()
        .code(65)
        .stdout(predicate::str::contains("NUMBER 1.0 1"))
        .stdout(predicate::str::contains("NUMBER 2.0 1"))
        .stderr(predicate::str::contains("[line 1]"))
        .stderr(predicate::str::contains("Unexpected character `@`"));

    Ok(())
}

#[test]
fn unterminated_string_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let script = write_script("rulox_cli_unterminated.lox", "\"abc");

    let mut cmd = Command::cargo_bin("rulox")?;
    cmd.arg(&script);
    cmd.assert()
        .code(65)
        .stderr(predicate::str::contains("Unterminated string"));

    Ok(())
}

#[test]
fn too_many_arguments_is_a_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rulox")?;
    cmd.args(["a.lox", "b.lox"]);
    cmd.assert()
        .code(42)
        .stderr(predicate::str::contains("Usage"));

    Ok(())
}

#[test]
fn missing_script_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rulox")?;
    cmd.arg("no/such/file.lox");
    cmd.assert().failure().code(1);

    Ok(())
}

#[test]
fn version_switch_prints_name_and_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rulox")?;
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("rulox"));

    Ok(())
}
