//! Shared fixtures and helpers for engine tests.

use std::str::FromStr;

use lsp_types::{CodeAction, Diagnostic, Position, Range, TextEdit, Uri};
use rstest::fixture;

use crate::{ActionRegistry, DispatchContext, dispatch};

/// Common URI used by engine tests.
#[fixture]
pub(crate) fn sample_uri() -> Uri {
    Uri::from_str("file:///workspace/src/Main.res").expect("invalid test URI")
}

/// Builds a range from start and end line/character pairs.
pub(crate) fn span(start: (u32, u32), end: (u32, u32)) -> Range {
    Range::new(Position::new(start.0, start.1), Position::new(end.0, end.1))
}

/// Builds a diagnostic whose message is `lines` joined by newlines.
pub(crate) fn diagnostic(lines: &[&str], range: Range) -> Diagnostic {
    Diagnostic::new_simple(range, lines.join("\n"))
}

/// Dispatches `lines` against `range` and returns the registered actions.
pub(crate) fn fixes(lines: &[&str], range: Range) -> Vec<CodeAction> {
    let uri = sample_uri();
    let source = diagnostic(lines, range);
    let mut registry = ActionRegistry::new();
    let context = DispatchContext::new(&source, lines.iter().copied(), &uri, range);
    dispatch(&context, &mut registry);
    registry
        .actions_for(&uri)
        .iter()
        .map(|entry| entry.action.clone())
        .collect()
}

/// Dispatches `lines` and returns the single registered action.
pub(crate) fn single_fix(lines: &[&str], range: Range) -> CodeAction {
    let mut actions = fixes(lines, range);
    assert_eq!(actions.len(), 1, "expected exactly one action: {actions:?}");
    actions.remove(0)
}

/// Returns the edits an action applies to the sample URI.
pub(crate) fn edits(action: &CodeAction) -> Vec<TextEdit> {
    action
        .edit
        .as_ref()
        .and_then(|edit| edit.changes.as_ref())
        .and_then(|changes| changes.get(&sample_uri()))
        .cloned()
        .expect("action should edit the sample URI")
}

/// Applies `edits` to ASCII `source`, mimicking an editor.
pub(crate) fn apply(source: &str, edits: &[TextEdit]) -> String {
    let mut ordered = edits.to_vec();
    ordered.sort_by_key(|edit| {
        std::cmp::Reverse((edit.range.start.line, edit.range.start.character))
    });

    let mut updated = source.to_owned();
    for edit in ordered {
        let start = offset(&updated, edit.range.start);
        let end = offset(&updated, edit.range.end);
        updated.replace_range(start..end, &edit.new_text);
    }
    updated
}

fn offset(source: &str, position: Position) -> usize {
    let line = usize::try_from(position.line).expect("line fits usize");
    let character = usize::try_from(position.character).expect("character fits usize");
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line)
        .map(str::len)
        .sum();
    line_start + character
}
