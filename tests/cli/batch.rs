use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, DEMO_BUNDLE, stderr, stdout};

#[test]
fn test_batch_compiles_every_set() -> Result<()> {
    let test = CliTest::with_demo()?;
    test.write_file("i18n/other/de.json", r#"{"b": "B", "a": "A"}"#)?;
    test.write_file("i18n/.cache/en.json", r#"{"a": "A"}"#)?;

    let mut cmd = test.command();
    test.settings().bind(|| {
        assert_cmd_snapshot!(cmd, @r"
        success: true
        exit_code: 0
        ----- stdout -----
        Converting demo...
        ✓ Wrote [ROOT]/i18n/demo.py (2 languages, 1 message)
        Converting other...
        ✓ Wrote [ROOT]/i18n/other.py (1 language, 2 messages)
        ✓ Compiled 2 of 2 translation sets

        ----- stderr -----
        ");
    });

    assert_eq!(test.read_file("i18n/demo.py")?, DEMO_BUNDLE);
    assert!(
        test.read_file("i18n/other.py")?
            .contains("    'de': {\r\n        'a': u'A',\r\n        'b': u'B',\r\n    },\r\n")
    );
    assert!(!test.root().join("i18n/.cache.py").exists());

    Ok(())
}

#[test]
fn test_batch_is_idempotent() -> Result<()> {
    let test = CliTest::with_demo()?;
    test.write_file(
        "i18n/demo/gsw.json",
        r#"{"hello": "Hoi", "@metadata": {"authors": ["Ueli ", 7]}}"#,
    )?;

    test.command().output()?;
    let first = test.read_file("i18n/demo.py")?;
    test.command().output()?;
    let second = test.read_file("i18n/demo.py")?;

    assert_eq!(first, second);
    assert!(first.contains("    # Author: 7\r\n    # Author: Ueli\r\n    'als': {\r\n"));

    Ok(())
}

#[test]
fn test_batch_continues_after_failed_set() -> Result<()> {
    let test = CliTest::with_demo()?;
    test.write_file("i18n/alpha/en.json", r#"{"a": "A"}"#)?;
    // A directory in place of the bundle cannot be overwritten.
    test.write_file("i18n/alpha.py/keep", "kept")?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("error: alpha (write): failed to write"));
    assert!(stdout(&output).ends_with("Compiled 2 of 3 translation sets (1 failed)\n"));
    assert_eq!(test.read_file("i18n/alpha.py/keep")?, "kept");
    assert_eq!(test.read_file("i18n/demo.py")?, DEMO_BUNDLE);

    Ok(())
}

#[test]
fn test_missing_root_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    test.settings().bind(|| {
        assert_cmd_snapshot!(cmd, @r"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Cannot compile from [ROOT]/i18n: root directory '[ROOT]/i18n' does not exist
        ");
    });

    Ok(())
}

#[test]
fn test_root_from_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".bundlegenrc.json",
        r#"{ "root": "translations", "codeMap": { "de": "de-formal" } }"#,
    )?;
    test.write_file("translations/site/de.json", r#"{"a": "A"}"#)?;

    let mut cmd = test.command();
    test.settings().bind(|| {
        assert_cmd_snapshot!(cmd, @r"
        success: true
        exit_code: 0
        ----- stdout -----
        Converting site...
        ✓ Wrote [ROOT]/translations/site.py (1 language, 1 message)

        ----- stderr -----
        ");
    });
    assert!(test.read_file("translations/site.py")?.contains("    'de-formal': {\r\n"));

    Ok(())
}

#[test]
fn test_invalid_config_file() -> Result<()> {
    let test = CliTest::with_demo()?;
    test.write_file(".bundlegenrc.json", r#"{ "sourceExtension": ".json" }"#)?;

    let mut cmd = test.command();
    test.settings().bind(|| {
        assert_cmd_snapshot!(cmd, @r#"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Invalid config file: "[ROOT]/.bundlegenrc.json": Extensions are written without a leading dot: ".json"
        "#);
    });
    assert!(!test.root().join("i18n/demo.py").exists());

    Ok(())
}

#[test]
fn test_root_flag_overrides_config() -> Result<()> {
    let test = CliTest::with_demo()?;
    test.write_file(".bundlegenrc.json", r#"{ "root": "elsewhere" }"#)?;

    let mut cmd = test.command();
    cmd.args(["--root", "i18n"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Converting demo...
    ✓ Wrote i18n/demo.py (2 languages, 1 message)

    ----- stderr -----
    ");
    assert_eq!(test.read_file("i18n/demo.py")?, DEMO_BUNDLE);

    Ok(())
}
