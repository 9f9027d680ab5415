use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_collect_writes_payload() -> Result<()> {
    let test = CliTest::with_file("a/b.py", "x=1")?;
    test.write_file("README.md", "# hi\n")?;
    test.write_file("style.css", "body {}")?;
    test.write_file("node_modules/pkg/index.js", "module.exports = {};")?;

    let output = test.command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("payload.txt")?,
        "\n\n--- FILE: README.md ---\n# hi\n\n\n--- FILE: a/b.py ---\nx=1"
    );
    assert_snapshot!(stdout(&output).trim_end(), @"✓ Collected 2 files (57 bytes) into payload.txt");

    Ok(())
}

#[test]
fn test_collect_empty_project() -> Result<()> {
    let test = CliTest::with_file("notes.txt", "not collected")?;

    let output = test.command().output()?;
    assert!(output.status.success());

    assert_eq!(test.read_file("payload.txt")?, "");
    assert_snapshot!(stdout(&output).trim_end(), @"✓ No matching files under ., wrote empty payload to payload.txt");

    Ok(())
}

#[test]
fn test_collect_overwrites_existing_output() -> Result<()> {
    let test = CliTest::with_file("main.py", "print(1)")?;
    test.write_file("payload.txt", "stale content from an earlier run")?;

    let output = test.command().output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("payload.txt")?,
        "\n\n--- FILE: main.py ---\nprint(1)"
    );

    Ok(())
}

#[test]
fn test_collect_never_reads_its_own_output() -> Result<()> {
    let test = CliTest::with_file("notes.txt", "n")?;
    test.write_file("payload.txt", "old payload")?;

    let output = test.command().args(["--ext", "txt"]).output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("payload.txt")?,
        "\n\n--- FILE: notes.txt ---\nn"
    );

    Ok(())
}

#[test]
fn test_collect_with_root_and_output() -> Result<()> {
    let test = CliTest::with_file("your_project_folder/src/app.js", "let a = 1;")?;
    test.write_file("outside.js", "not under root")?;

    let output = test
        .command()
        .args(["--root", "your_project_folder", "-o", "context.txt"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("context.txt")?,
        "\n\n--- FILE: your_project_folder/src/app.js ---\nlet a = 1;"
    );
    assert!(!test.root().join("payload.txt").exists());

    Ok(())
}

#[test]
fn test_collect_to_stdout() -> Result<()> {
    let test = CliTest::with_file("doc.md", "# Title")?;

    let output = test.command().args(["-o", "-"]).output()?;
    assert!(output.status.success());

    assert_eq!(stdout(&output), "\n\n--- FILE: doc.md ---\n# Title");
    assert!(stderr(&output).contains("into stdout"));
    assert!(!test.root().join("payload.txt").exists());

    Ok(())
}

#[test]
fn test_collect_size_boundary() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("under.md", vec![b'a'; 99_999])?;
    test.write_file("exact.md", vec![b'a'; 100_000])?;

    let output = test.command().output()?;
    assert!(output.status.success());

    let payload = test.read_file("payload.txt")?;
    assert!(payload.contains("--- FILE: under.md ---"));
    assert!(!payload.contains("exact.md"));

    Ok(())
}

#[test]
fn test_collect_invalid_utf8() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("bad.py", b"a = '\xff\xfe'".as_slice())?;

    let output = test.command().output()?;
    assert!(output.status.success());
    assert_eq!(
        test.read_file("payload.txt")?,
        "\n\n--- FILE: bad.py ---\na = ''"
    );

    let output = test.command().args(["--decode", "replace"]).output()?;
    assert!(output.status.success());
    assert_eq!(
        test.read_file("payload.txt")?,
        "\n\n--- FILE: bad.py ---\na = '\u{FFFD}\u{FFFD}'"
    );

    Ok(())
}

#[test]
fn test_collect_is_idempotent() -> Result<()> {
    let test = CliTest::with_file("z/last.md", "z")?;
    test.write_file("a/first.js", "a")?;
    test.write_file("m.py", "m")?;

    test.command().output()?;
    let first = test.read_file("payload.txt")?;
    test.command().output()?;
    let second = test.read_file("payload.txt")?;

    assert_eq!(first, second);
    assert_eq!(
        first,
        "\n\n--- FILE: a/first.js ---\na\n\n--- FILE: m.py ---\nm\n\n--- FILE: z/last.md ---\nz"
    );

    Ok(())
}

#[test]
fn test_collect_missing_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["--root", "does_not_exist"]).output()?;
    assert!(output.status.success());
    assert_eq!(test.read_file("payload.txt")?, "");

    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".payloadrc.json",
        r#"{
         "extensions": [".rs"],
         "excludes": ["target"],
         "output": "ctx.txt"
     }"#,
    )?;
    test.write_file("src/lib.rs", "pub fn f() {}")?;
    test.write_file("target/debug/build.rs", "generated")?;
    test.write_file("main.py", "print()")?;

    let output = test.command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("ctx.txt")?,
        "\n\n--- FILE: src/lib.rs ---\npub fn f() {}"
    );

    Ok(())
}

#[test]
fn test_flags_override_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".payloadrc.json", r#"{ "extensions": [".rs"] }"#)?;
    test.write_file("src/lib.rs", "pub fn f() {}")?;
    test.write_file("main.py", "print()")?;

    let output = test.command().args(["--ext", "py"]).output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("payload.txt")?,
        "\n\n--- FILE: main.py ---\nprint()"
    );

    Ok(())
}

#[test]
fn test_no_excludes_flag() -> Result<()> {
    let test = CliTest::with_file("node_modules/index.js", "x")?;

    let output = test.command().arg("--no-excludes").output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("payload.txt")?,
        "\n\n--- FILE: node_modules/index.js ---\nx"
    );

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_collect_warns_about_unreadable_paths() -> Result<()> {
    let test = CliTest::with_file("good.md", "kept")?;
    std::os::unix::fs::symlink(test.root().join("gone.md"), test.root().join("ghost.md"))?;

    let output = test.command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("payload.txt")?,
        "\n\n--- FILE: good.md ---\nkept"
    );
    let stderr = stderr(&output);
    assert!(stderr.contains("warning:"));
    assert!(stderr.contains("1 path(s) could not be read"));

    Ok(())
}

#[test]
fn test_invalid_config_file_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".payloadrc.json", r#"{ "maxFileSize": 0 }"#)?;

    let output = test.command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Invalid config file"));
    assert!(!test.root().join("payload.txt").exists());

    Ok(())
}

#[test]
fn test_unwritable_output_fails() -> Result<()> {
    let test = CliTest::with_file("a.md", "a")?;

    let output = test
        .command()
        .args(["-o", "missing_dir/payload.txt"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to create output file: missing_dir/payload.txt"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    assert!(output.status.success());

    let help = stdout(&output);
    for flag in ["--root", "--output", "--ext", "--exclude", "--max-size", "--decode"] {
        assert!(help.contains(flag), "help should mention {flag}");
    }

    Ok(())
}
