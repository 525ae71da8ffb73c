use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

fn project() -> Result<CliTest> {
    let test = CliTest::with_file(
        "locales/en/common.json",
        r#"{
  "title": "Title",
  "menu": { "save": "Save", "open": "Open" },
  "apple_one": "apple",
  "apple_other": "apples"
}"#,
    )?;
    test.write_file(
        "locales/de/common.yaml",
        "title: Titel\nmenu:\n  save: Speichern\n  close: Schliessen\napple_one: Apfel\napple_other: Äpfel\n",
    )?;
    test.write_file("locales/en/translation.json", r#"{"welcome": "Welcome"}"#)?;
    Ok(test)
}

#[test]
fn test_resolved_keys_exit_zero() -> Result<()> {
    let test = project()?;

    let output = test
        .resolve_command()
        .args(["common:title", "common:menu.save", "welcome"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("\"common:title\"  resolved"));
    // Ties go to the first document in path order: `de` before `en`.
    assert!(out.contains("= value: \"Speichern\""));
    assert!(out.contains("\"welcome\"  resolved"));
    assert!(out.contains("Resolved 3 keys against 3 translation files - no problems found"));

    Ok(())
}

#[test]
fn test_key_resolved_in_any_locale() -> Result<()> {
    let test = project()?;

    // `close` only exists in the YAML file.
    let output = test.resolve_command().arg("common:menu.close").output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("= value: \"Schliessen\""));
    assert!(out.contains("common.yaml"));
    assert!(out.contains("= missing in: en"));

    Ok(())
}

#[test]
fn test_partially_translated_is_warning() -> Result<()> {
    let test = project()?;

    // `open` only exists in the `en` file.
    let output = test.resolve_command().arg("common:menu.open").output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("warning: \"common:menu.open\"  partially translated"));
    assert!(out.contains("= value: \"Open\""));
    assert!(out.contains("= missing in: de"));
    assert!(out.contains("1 problems (0 errors, 1 warning)"));

    let output = test
        .resolve_command()
        .args(["common:menu.open", "--format", "json"])
        .output()?;
    let reports: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(reports[0]["status"], "partially-translated");
    assert_eq!(reports[0]["severity"], "warning");
    assert_eq!(reports[0]["missingIn"], serde_json::json!(["de"]));

    Ok(())
}

#[test]
fn test_unresolved_key_fails() -> Result<()> {
    let test = project()?;

    let output = test.resolve_command().arg("common:menu.print.label").output()?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("error: \"common:menu.print.label\"  unresolved key"));
    assert!(out.contains("   | common:menu.print.label\n"));
    assert!(out.contains("   |             ^^^^^^^^^^^\n"));
    assert!(out.contains("= resolved: menu"));
    assert!(out.contains("= missing: print.label"));
    assert!(out.contains("1 problems (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_unknown_namespace() -> Result<()> {
    let test = project()?;

    let output = test.resolve_command().arg("shop:cart").output()?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("unresolved namespace"));
    assert!(out.contains("no translation file for namespace \"shop\""));

    Ok(())
}

#[test]
fn test_object_reference_is_warning() -> Result<()> {
    let test = project()?;

    let output = test.resolve_command().arg("common:menu").output()?;

    // Warnings alone do not fail the run.
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("warning: \"common:menu\"  reference to object"));
    assert!(out.contains("1 problems (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_plural_reference() -> Result<()> {
    let test = project()?;

    let output = test.resolve_command().arg("common:apple").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("reference to plural forms"));

    Ok(())
}

#[test]
fn test_default_namespace_override() -> Result<()> {
    let test = project()?;

    let output = test
        .resolve_command()
        .args(["title", "--default-namespace", "common"])
        .output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("= value: \"Titel\""));

    Ok(())
}

#[test]
fn test_suppressed_default_namespace() -> Result<()> {
    let test = project()?;
    test.write_file(".keyrefrc.json", r#"{ "suppressUnresolvedDefaultNs": true }"#)?;

    let output = test.resolve_command().arg("just some text").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("suppressed"));

    Ok(())
}

#[test]
fn test_config_messages_root() -> Result<()> {
    let test = CliTest::with_file(".keyrefrc.json", r#"{ "messagesRoot": "./i18n" }"#)?;
    test.write_file("i18n/translation.json", r#"{"a": {"b": "B"}}"#)?;
    test.write_file("src/app/.keep", "")?;

    // Config is found from a subdirectory and its paths stay relative to it.
    let output = test
        .command()
        .current_dir(test.root().join("src/app"))
        .args(["resolve", "a.b"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("= value: \"B\""));

    Ok(())
}

#[test]
fn test_fragments_file() -> Result<()> {
    let test = project()?;
    test.write_file(
        "keys.json",
        r#"[
  [
    { "source": "${ns}", "resolved": "common", "kind": "interpolated" },
    { "source": ":menu." },
    { "source": "${action}", "resolved": "save", "kind": "interpolated" }
  ],
  [
    { "source": "common:" },
    { "source": "${section}", "resolved": "menu", "kind": "interpolated" }
  ]
]"#,
    )?;

    let output = test
        .resolve_command()
        .args(["--fragments", "keys.json", "--format", "json"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let reports: Value = serde_json::from_str(&stdout(&output))?;
    let reports = reports.as_array().expect("array of reports");
    assert_eq!(reports.len(), 2);

    assert_eq!(reports[0]["key"], "common:menu.save");
    assert_eq!(reports[0]["source"], "${ns}:menu.${action}");
    assert_eq!(reports[0]["status"], "resolved");
    assert_eq!(reports[0]["value"], "Speichern");

    // A template pointing at an object is only partially resolved.
    assert_eq!(reports[1]["status"], "partially-resolved");
    assert_eq!(reports[1]["severity"], Value::Null);

    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let test = project()?;

    let output = test
        .resolve_command()
        .args(["common:menu.print", "--format", "json"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let reports: Value = serde_json::from_str(&stdout(&output))?;
    let report = &reports[0];
    assert_eq!(report["status"], "unresolved");
    assert_eq!(report["severity"], "error");
    assert_eq!(report["namespace"], "common");
    assert_eq!(report["resolvedPath"], serde_json::json!(["menu"]));
    assert_eq!(report["unresolved"], serde_json::json!(["print"]));
    assert_eq!(report["highlight"], serde_json::json!({"start": 12, "end": 17}));

    Ok(())
}

#[test]
fn test_broken_file_is_a_warning() -> Result<()> {
    let test = project()?;
    test.write_file("locales/fr/common.json", "{ broken")?;

    let output = test.resolve_command().arg("common:title").output()?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("warning: 1 file(s) could not be loaded (use -v for details)"));

    let output = test.resolve_command().args(["common:title", "-v"]).output()?;
    assert!(stderr(&output).contains("Failed to parse JSON file"));

    Ok(())
}

#[test]
fn test_missing_messages_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.resolve_command().arg("title").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("does not exist"));

    Ok(())
}

#[test]
fn test_no_keys() -> Result<()> {
    let test = project()?;

    let output = test.resolve_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("No keys given"));

    Ok(())
}
