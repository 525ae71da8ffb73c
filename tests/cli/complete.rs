use anyhow::Result;
use serde_json::{Value, json};

use crate::{CliTest, stdout};

fn project() -> Result<CliTest> {
    let test = CliTest::with_file(
        "locales/en/common.json",
        r#"{"menu": {"save": "Save", "saveAs": "Save as", "open": "Open"}}"#,
    )?;
    test.write_file(
        "locales/de/common.json",
        r#"{"menu": {"save": "Speichern", "search": "Suchen"}}"#,
    )?;
    Ok(test)
}

#[test]
fn test_complete_partial_segment() -> Result<()> {
    let test = project()?;

    let output = test.complete_command().arg("common:menu.sa").output()?;

    assert!(output.status.success());
    // `de` is scanned first; duplicates keep their first position.
    assert_eq!(stdout(&output), "common:menu.save\ncommon:menu.saveAs\n");

    Ok(())
}

#[test]
fn test_complete_after_separator_lists_all_children() -> Result<()> {
    let test = project()?;

    let output = test.complete_command().arg("common:menu.").output()?;

    assert!(output.status.success());
    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(
        lines,
        vec![
            "common:menu.save",
            "common:menu.search",
            "common:menu.saveAs",
            "common:menu.open",
        ]
    );

    Ok(())
}

#[test]
fn test_complete_unknown_path_is_empty() -> Result<()> {
    let test = project()?;

    let output = test.complete_command().arg("common:nothing.he").output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "");

    Ok(())
}

#[test]
fn test_complete_json() -> Result<()> {
    let test = project()?;

    let output = test
        .complete_command()
        .args(["common:menu.o", "--format", "json"])
        .output()?;

    let value: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        value,
        json!({
            "key": "common:menu.o",
            "variants": ["pen"],
            "completions": ["common:menu.open"],
        })
    );

    Ok(())
}
