use std::{io::Write, process::Stdio};

use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, DEMO_BUNDLE, stderr, stdout};

#[test]
fn test_single_set_with_yes() -> Result<()> {
    let test = CliTest::with_demo()?;

    let mut cmd = test.command();
    cmd.args(["demo", "--yes"]);
    test.settings().bind(|| {
        assert_cmd_snapshot!(cmd, @r"
        success: true
        exit_code: 0
        ----- stdout -----
        Converting demo...
        ✓ Wrote [ROOT]/i18n/demo.py (2 languages, 1 message)

        ----- stderr -----
        ");
    });
    assert_eq!(test.read_file("i18n/demo.py")?, DEMO_BUNDLE);

    Ok(())
}

#[test]
fn test_confirmation_accepted() -> Result<()> {
    let test = CliTest::with_demo()?;

    let mut cmd = test.command();
    cmd.arg("demo");
    test.settings().bind(|| {
        assert_cmd_snapshot!(cmd.pass_stdin("y\n"), @r"
        success: true
        exit_code: 0
        ----- stdout -----
        Destination file is [ROOT]/i18n/demo.py. ([y]es, [N]o) Converting demo...
        ✓ Wrote [ROOT]/i18n/demo.py (2 languages, 1 message)

        ----- stderr -----
        ");
    });
    assert_eq!(test.read_file("i18n/demo.py")?, DEMO_BUNDLE);

    Ok(())
}

#[test]
fn test_confirmation_declined_writes_nothing() -> Result<()> {
    let test = CliTest::with_demo()?;

    // stdin is closed, which counts as the default answer ("no").
    let output = test.command().arg("demo").stdin(Stdio::null()).output()?;

    assert!(output.status.success());
    assert!(stdout(&output).ends_with("([y]es, [N]o) \nQuitting...\n"));
    assert!(!test.root().join("i18n/demo.py").exists());

    Ok(())
}

#[test]
fn test_unknown_set_is_asked_again() -> Result<()> {
    let test = CliTest::with_demo()?;

    let mut cmd = test.command();
    cmd.arg("dmeo");
    test.settings().bind(|| {
        assert_cmd_snapshot!(cmd.pass_stdin("demo\nyes\n"), @r"
        success: true
        exit_code: 0
        ----- stdout -----
        [ROOT]/i18n/dmeo does not exist. Please retry.
        Please input the folder to convert (no input to leave): Destination file is [ROOT]/i18n/demo.py. ([y]es, [N]o) Converting demo...
        ✓ Wrote [ROOT]/i18n/demo.py (2 languages, 1 message)

        ----- stderr -----
        ");
    });
    assert!(test.root().join("i18n/demo.py").is_file());

    Ok(())
}

#[test]
fn test_answer_piped_through_stdin() -> Result<()> {
    let test = CliTest::with_demo()?;

    let mut child = test
        .command()
        .arg("demo")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(b"maybe\nYES\n")?;
    let output = child.wait_with_output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).matches("Destination file is").count(), 2);
    assert_eq!(test.read_file("i18n/demo.py")?, DEMO_BUNDLE);

    Ok(())
}

#[test]
fn test_unknown_set_with_yes_fails() -> Result<()> {
    let test = CliTest::with_demo()?;

    let mut cmd = test.command();
    cmd.args(["nope", "-y"]);
    test.settings().bind(|| {
        assert_cmd_snapshot!(cmd, @r"
        success: false
        exit_code: 1
        ----- stdout -----
        ✘ Compiled 0 of 1 translation set (1 failed)

        ----- stderr -----
        ✘ error: nope (resolve): [ROOT]/i18n/nope does not exist
        ");
    });

    Ok(())
}

#[test]
fn test_unsupported_flag_is_only_a_warning() -> Result<()> {
    let test = CliTest::with_demo()?;

    let mut cmd = test.command();
    cmd.args(["-lang:de", "demo", "-y"]);
    test.settings().bind(|| {
        assert_cmd_snapshot!(cmd, @r"
        success: true
        exit_code: 0
        ----- stdout -----
        Converting demo...
        ✓ Wrote [ROOT]/i18n/demo.py (2 languages, 1 message)

        ----- stderr -----
        warning: -lang:de is not supported
        ");
    });
    assert_eq!(test.read_file("i18n/demo.py")?, DEMO_BUNDLE);

    Ok(())
}

#[test]
fn test_legacy_help_flag() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("-help").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage: bundlegen"));

    Ok(())
}

#[test]
fn test_verbose_lists_skipped_files() -> Result<()> {
    let test = CliTest::with_demo()?;
    test.write_file("i18n/demo/it.json", "{ broken")?;

    let output = test.command().args(["demo", "-y", "-v"]).output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("note: skipped it:"));
    assert_eq!(test.read_file("i18n/demo.py")?, DEMO_BUNDLE);

    Ok(())
}
