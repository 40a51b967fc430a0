//! Quick-fix code action assembly.

use std::collections::HashMap;

use lsp_types::{CodeAction, CodeActionKind, Diagnostic, TextEdit, Uri, WorkspaceEdit};

/// Builds a preferred quick-fix action applying `edits` to `uri`.
///
/// Every action the engine emits is the single candidate for its message
/// line, so it is always marked as preferred.
pub(crate) fn quick_fix(
    title: impl Into<String>,
    uri: &Uri,
    edits: Vec<TextEdit>,
    diagnostic: &Diagnostic,
) -> CodeAction {
    CodeAction {
        title: title.into(),
        kind: Some(CodeActionKind::QUICKFIX),
        diagnostics: Some(vec![diagnostic.clone()]),
        edit: Some(WorkspaceEdit {
            changes: Some(HashMap::from([(uri.clone(), edits)])),
            ..WorkspaceEdit::default()
        }),
        is_preferred: Some(true),
        ..CodeAction::default()
    }
}
