use std::{fs, path::Path};

use anyhow::{Context as _, Result, bail};
use rayon::prelude::*;

use super::{CommandResult, CommandSummary, ResolveContext, ResolveSummary};
use crate::{
    cli::args::ResolveCommand,
    core::{Fragment, Severity},
};

pub fn resolve(cmd: ResolveCommand) -> Result<CommandResult> {
    let mut expressions: Vec<Vec<Fragment>> =
        cmd.keys.iter().map(|key| vec![Fragment::literal(key)]).collect();
    if let Some(ref path) = cmd.fragments {
        expressions.extend(read_fragments(path)?);
    }
    if expressions.is_empty() {
        bail!("No keys given. Pass key expressions or --fragments <FILE>.");
    }

    let ctx = ResolveContext::new(&cmd.common)?;

    let reports: Vec<_> = expressions
        .par_iter()
        .map(|fragments| ctx.report_key(fragments))
        .collect();

    let error_count = reports
        .iter()
        .filter(|r| r.severity == Some(Severity::Error))
        .count();
    let warning_count = reports
        .iter()
        .filter(|r| r.severity == Some(Severity::Warning))
        .count();

    Ok(CommandResult {
        summary: CommandSummary::Resolve(ResolveSummary {
            reports,
            document_count: ctx.catalog.documents().len(),
        }),
        format: cmd.format,
        error_count,
        warning_count,
    })
}

/// Read a JSON array of key expressions, each an array of fragments:
///
/// ```json
/// [[{"source": "${ns}", "resolved": "common", "kind": "interpolated"}, {"source": ":title"}]]
/// ```
fn read_fragments(path: &Path) -> Result<Vec<Vec<Fragment>>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read fragments file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse fragments file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use crate::cli::commands::resolve::*;
    use crate::core::FragmentKind;
    use tempfile::tempdir;

    #[test]
    fn test_read_fragments() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keys.json");
        fs::write(
            &path,
            r#"[
                [{"source": "${ns}", "resolved": "common", "kind": "interpolated"}, {"source": ":title"}],
                [{"source": "menu.save"}]
            ]"#,
        )
        .unwrap();

        let expressions = read_fragments(&path).unwrap();
        assert_eq!(expressions.len(), 2);
        assert_eq!(expressions[0][0].kind(), FragmentKind::Interpolated);
        assert_eq!(expressions[0][0].resolved(), "common");
        assert_eq!(expressions[0][1].kind(), FragmentKind::Literal);
        assert_eq!(expressions[1][0].source(), "menu.save");
    }

    #[test]
    fn test_read_fragments_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keys.json");
        fs::write(&path, "{").unwrap();

        let error = read_fragments(&path).unwrap_err();
        assert!(error.to_string().contains("Failed to parse fragments file"));
    }
}
