//! Integration tests for the xtask binary.
//!
//! These run the compiled binary as a subprocess and check what lands on
//! stdout, which is what build scripts redirect into generated files.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn xtask() -> Command {
    Command::new(env!("CARGO_BIN_EXE_xtask"))
}

/// Run xtask with `args`, feeding `stdin` to it.
fn run(args: &[&str], stdin: &str, dir: Option<&Path>) -> Output {
    let mut cmd = xtask();
    cmd.args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }
    let mut child = cmd.spawn().expect("failed to spawn xtask");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for xtask")
}

fn stdout_of(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        output.status.success(),
        "xtask failed (exit={:?}):\nstderr:\n{stderr}",
        output.status.code(),
    );
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn table_prints_keyer_array() {
    let out = stdout_of(&run(&["table"], "", None));
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 17);
    assert_eq!(lines[0], "static unsigned Code[] = {");
    assert_eq!(
        lines[1],
        "  0x0000010, 0x0000000, 0x0045D5D, 0x0000000, // ' ', '!', '\"', '#'"
    );
    assert_eq!(
        lines[15],
        "  0x0004757, 0x0011DD7, 0x0004577,            // 'X', 'Y', 'Z'"
    );
    assert_eq!(lines[16], "};");
}

#[test]
fn table_output_is_reproducible() {
    let first = stdout_of(&run(&["table"], "", None));
    let second = stdout_of(&run(&["table", "--verbose"], "", None));
    assert_eq!(first, second);
}

#[test]
fn table_rejects_zero_items_per_line() {
    let output = run(&["table", "--items-per-line", "0"], "", None);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("items_per_line"));
}

#[test]
fn help_embeds_stdin() {
    let out = stdout_of(&run(&["help"], "He said \"hi\"\n", None));
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[4], "static char* HelpString =");
    assert_eq!(lines[5], r#"  "He said \"hi\"\n""#);
    assert_eq!(lines[6], ";");
    assert_eq!(lines.len(), 7);
}

#[test]
fn help_with_empty_stdin() {
    let out = stdout_of(&run(&["help", "--quiet"], "", None));
    assert_eq!(out.lines().count(), 6);
    assert!(out.ends_with("static char* HelpString =\n;\n"));
}

#[test]
fn help_rejects_bad_name() {
    let output = run(&["help", "--name", "bad name"], "", None);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not a valid string name"));
}

#[test]
fn quiet_and_verbose_conflict() {
    let output = run(&["table", "-q", "-v"], "", None);
    assert!(!output.status.success());
}

#[test]
fn codegen_writes_configured_files() {
    let root = tempfile::tempdir().unwrap();
    std::fs::write(root.path().join("Cargo.toml"), "[workspace]\nmembers = []\n").unwrap();
    std::fs::write(
        root.path().join("codegen.toml"),
        r#"
[[tables]]
name = "Code"
output = "out/code.inc"

[[help]]
name = "HelpString"
input = "help.txt"
output = "out/help.inc"
"#,
    )
    .unwrap();
    std::fs::write(root.path().join("help.txt"), "Morse trainer\n").unwrap();

    let table = stdout_of(&run(&["table"], "", None));
    let output = run(&["codegen"], "", Some(root.path()));
    assert!(stdout_of(&output).is_empty());

    let written = std::fs::read_to_string(root.path().join("out/code.inc")).unwrap();
    assert_eq!(written, table);

    let help = std::fs::read_to_string(root.path().join("out/help.inc")).unwrap();
    assert!(help.contains("  \"Morse trainer\\n\"\n"));
}
