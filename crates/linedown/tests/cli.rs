//! End-to-end tests driving the compiled binary.

use std::io::Write;
use std::process::{Command, Stdio};

use pretty_assertions::assert_eq;

const BIN: &str = env!("CARGO_BIN_EXE_linedown");

#[test]
fn test_render_file_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("page.ld");
    std::fs::write(&input, "# Title\nplain").unwrap();

    let result = Command::new(BIN)
        .arg("render")
        .arg(&input)
        .output()
        .unwrap();

    assert!(result.status.success());
    assert_eq!(
        String::from_utf8(result.stdout).unwrap(),
        "<h1>Title</h1><p>plain</p>\n"
    );
}

#[test]
fn test_render_stdin_to_stdout() {
    let mut child = Command::new(BIN)
        .arg("render")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"** bold line")
        .unwrap();

    let result = child.wait_with_output().unwrap();

    assert!(result.status.success());
    assert_eq!(
        String::from_utf8(result.stdout).unwrap(),
        "<strong>bold line</strong>\n"
    );
}

#[test]
fn test_render_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("page.ld");
    let output = dir.path().join("page.html");
    std::fs::write(&input, "---").unwrap();

    let result = Command::new(BIN)
        .arg("render")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .output()
        .unwrap();

    assert!(result.status.success());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "<hr></hr>");
}

#[test]
fn test_render_missing_input_fails() {
    let result = Command::new(BIN)
        .arg("render")
        .arg("/nonexistent/input.ld")
        .output()
        .unwrap();

    assert!(!result.status.success());
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert!(stderr.contains("Error:"), "stderr was: {stderr}");
}

#[test]
fn test_build_renders_source_tree() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("docs");
    std::fs::create_dir_all(source.join("nested")).unwrap();
    std::fs::write(source.join("index.ld"), "# Home").unwrap();
    std::fs::write(source.join("nested").join("deep.md"), "* deep").unwrap();
    std::fs::write(
        dir.path().join("linedown.toml"),
        "[build]\nsource_dir = \"docs\"\nout_dir = \"html\"\n",
    )
    .unwrap();

    let result = Command::new(BIN)
        .arg("build")
        .arg("--config")
        .arg(dir.path().join("linedown.toml"))
        .output()
        .unwrap();

    assert!(
        result.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("html").join("index.html")).unwrap(),
        "<h1>Home</h1>"
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("html").join("nested").join("deep.html")).unwrap(),
        "<em>deep</em>"
    );
}

#[test]
fn test_build_cli_overrides_take_precedence() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("content");
    let out = dir.path().join("site");
    std::fs::create_dir_all(&source).unwrap();
    std::fs::write(source.join("a.md"), "~~ under").unwrap();
    std::fs::write(dir.path().join("linedown.toml"), "").unwrap();

    let result = Command::new(BIN)
        .arg("build")
        .arg("--config")
        .arg(dir.path().join("linedown.toml"))
        .arg("--source-dir")
        .arg(&source)
        .arg("--out-dir")
        .arg(&out)
        .output()
        .unwrap();

    assert!(
        result.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    assert_eq!(
        std::fs::read_to_string(out.join("a.html")).unwrap(),
        "<u>under</u>"
    );
}

#[test]
fn test_build_missing_source_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("linedown.toml"), "").unwrap();

    let result = Command::new(BIN)
        .arg("build")
        .arg("--config")
        .arg(dir.path().join("linedown.toml"))
        .output()
        .unwrap();

    assert!(!result.status.success());
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert!(
        stderr.contains("source directory does not exist"),
        "stderr was: {stderr}"
    );
}
