//! Placeholder arms for unhandled match cases.
//!
//! The checker prints example cases on the lines following the trigger,
//! either one per line or as a parenthesised `|`-separated alternation.
//! Cases that need real syntax to reconstruct (tuples, guards, nested
//! constructor applications) are dropped rather than guessed.

use lsp_types::{CodeAction, Range};

use crate::action::quick_fix;
use crate::context::DispatchContext;
use crate::geometry::{closing_delimiter, insert_before_last_character};

use super::{padding, strip_trigger};

const TRIGGER: &str = "You forgot to handle a possible case here, for example:";

pub(super) fn attempt(
    context: &DispatchContext<'_>,
    index: usize,
    line: &str,
) -> Option<CodeAction> {
    strip_trigger(line, TRIGGER)?;
    let cases: Vec<String> = context
        .following_lines(index)
        .flat_map(split_alternatives)
        .filter_map(normalise_case)
        .collect();
    if cases.is_empty() {
        return None;
    }

    let range = context.range();
    let text = render_cases(range, &cases);
    Some(quick_fix(
        "Insert missing cases",
        context.uri(),
        vec![insert_before_last_character(range, &text)],
        context.diagnostic(),
    ))
}

/// Splits a message line into candidate case texts.
fn split_alternatives(line: &str) -> Vec<&str> {
    let trimmed = line.trim();
    if !trimmed.contains('|') {
        return vec![trimmed];
    }

    let body = trimmed.strip_prefix('(').unwrap_or(trimmed);
    let inner = body.strip_suffix(')').unwrap_or(body);
    inner.split('|').collect()
}

/// Rewrites a candidate into source syntax, or rejects it.
pub(crate) fn normalise_case(candidate: &str) -> Option<String> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() || trimmed.starts_with('(') || trimmed.contains(',') {
        return None;
    }

    let case = trimmed
        .strip_prefix('`')
        .map_or_else(|| trimmed.to_owned(), |tag| format!("#{tag}"));

    match case.split_once(' ') {
        None => Some(case),
        Some((_, payload)) if payload.trim_start().starts_with('(') => None,
        Some((constructor, payload)) => Some(format!("{constructor}({})", payload.trim())),
    }
}

/// Renders one `assert false` arm per case, aligned to the closing brace.
pub(crate) fn render_cases(range: Range, cases: &[String]) -> String {
    let pad = padding(closing_delimiter(range).character);
    let arms: Vec<String> = cases
        .iter()
        .enumerate()
        .map(|(position, case)| {
            let lead = if position == 0 { "" } else { pad.as_str() };
            format!("{lead}| {case} => assert false")
        })
        .collect();
    format!("{}\n{pad}", arms.join("\n"))
}
