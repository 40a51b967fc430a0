//! Top-level expressions that must evaluate to `unit`.

use lsp_types::CodeAction;

use crate::action::quick_fix;
use crate::context::DispatchContext;
use crate::geometry::wrap_range;

use super::strip_trigger;

const TRIGGER: &str = "Toplevel expression is expected to have unit type.";

pub(super) fn attempt(context: &DispatchContext<'_>, line: &str) -> Option<CodeAction> {
    strip_trigger(line, TRIGGER)?;
    Some(quick_fix(
        "Wrap expression in ignore",
        context.uri(),
        wrap_range(context.range(), "ignore(", ")").into(),
        context.diagnostic(),
    ))
}
