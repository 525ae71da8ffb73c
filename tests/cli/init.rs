use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["messagesRoot"], "./locales");
    assert_eq!(parsed["defaultNamespace"], "translation");
    assert_eq!(parsed["nsSeparator"], ":");
    assert_eq!(parsed["keySeparator"], ".");
    assert_eq!(parsed["pluralSeparator"], "_");
    assert!(
        parsed["pluralVariants"]
            .as_array()
            .is_some_and(|variants| variants.iter().any(|v| v == "other")),
        "Config should list plural variants"
    );

    // 2-space indentation
    assert!(content.contains("\n  \""), "Config should be pretty-printed");

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .keyrefrc.json"));

    assert!(test.root().join(".keyrefrc.json").exists());
    let content = test.read_file(".keyrefrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".keyrefrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: .keyrefrc.json already exists"));
    assert_eq!(test.read_file(".keyrefrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("locales/en/translation.json", r#"{"title": "Title"}"#)?;

    let output = test.resolve_command().arg("title").output()?;
    assert!(
        output.status.success(),
        "Resolve should work with initialized config. stderr: {}",
        stderr(&output)
    );

    Ok(())
}
