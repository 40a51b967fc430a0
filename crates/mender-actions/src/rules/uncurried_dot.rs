//! Uncurried calls missing their `.` marker.

use lsp_types::{CodeAction, Position};

use crate::action::quick_fix;
use crate::context::DispatchContext;
use crate::geometry::insertion;

use super::strip_trigger;

const TRIGGER: &str = "This is an uncurried ReScript function. It must be applied with a dot.";

pub(super) fn attempt(context: &DispatchContext<'_>, line: &str) -> Option<CodeAction> {
    strip_trigger(line, TRIGGER)?;
    // The reported range ends on the callee; the argument list opens one
    // column later.
    let end = context.range().end;
    let after_paren = Position::new(end.line, end.character.saturating_add(1));
    Some(quick_fix(
        "Insert uncurried application dot",
        context.uri(),
        vec![insertion(after_paren, ". ")],
        context.diagnostic(),
    ))
}
