//! "Did you mean" identifier suggestions.

use lsp_types::{CodeAction, TextEdit};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::action::quick_fix;
use crate::context::DispatchContext;

use super::strip_trigger;

const TRIGGER: &str = "Hint: Did you mean";

#[expect(clippy::expect_used, reason = "the pattern is a compile-time literal")]
static SUGGESTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Did you mean ([A-Za-z0-9_']*)").expect("suggestion pattern should compile")
});

pub(super) fn attempt(context: &DispatchContext<'_>, line: &str) -> Option<CodeAction> {
    strip_trigger(line, TRIGGER)?;
    let suggestion = SUGGESTION
        .captures(line)?
        .get(1)
        .map(|capture| regex::Match::as_str(&capture))
        .filter(|identifier| !identifier.is_empty())?;

    Some(quick_fix(
        format!("Replace with '{suggestion}'"),
        context.uri(),
        vec![TextEdit::new(context.range(), suggestion.to_owned())],
        context.diagnostic(),
    ))
}
