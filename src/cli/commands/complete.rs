use std::collections::HashSet;

use anyhow::Result;

use super::{CommandResult, CommandSummary, CompleteSummary, ResolveContext};
use crate::cli::args::CompleteCommand;

/// List what can follow the partially typed last segment of `cmd.key`,
/// across every document of the key's namespace.
pub fn complete(cmd: CompleteCommand) -> Result<CommandResult> {
    let ctx = ResolveContext::new(&cmd.common)?;
    let variants = completion_variants(&ctx, &cmd.key);

    Ok(CommandResult {
        summary: CommandSummary::Complete(CompleteSummary {
            key: cmd.key,
            variants,
        }),
        format: cmd.format,
        error_count: 0,
        warning_count: 0,
    })
}

fn completion_variants(ctx: &ResolveContext, text: &str) -> Vec<String> {
    let key = ctx.parser().parse_literal(text);
    let composite_key = key.composite_key();

    let mut seen = HashSet::new();
    ctx.candidates(&key)
        .into_iter()
        .flat_map(|document| {
            ctx.resolver()
                .list_key_variants(&composite_key, document.tree(), true)
        })
        .filter(|variant| seen.insert(variant.clone()))
        .collect()
}
