//! Values that only need an optional constructor around them.

use lsp_types::CodeAction;

use crate::action::quick_fix;
use crate::context::DispatchContext;
use crate::geometry::wrap_range;

use super::strip_trigger;

const TRIGGER: &str = "Somewhere wanted: option<";
const ACTUAL_TYPE: &str = "This has type:";

pub(super) fn attempt(
    context: &DispatchContext<'_>,
    index: usize,
    line: &str,
) -> Option<CodeAction> {
    let wanted = strip_trigger(line, TRIGGER)?.strip_suffix('>')?.trim();
    let actual = context
        .preceding_line(index)
        .and_then(|previous| strip_trigger(previous, ACTUAL_TYPE))?
        .trim();

    // Textual equality only: aliases and structurally equal types are not
    // resolved, so anything else may need a real conversion.
    if wanted.is_empty() || wanted != actual {
        return None;
    }

    Some(quick_fix(
        "Wrap value in Some",
        context.uri(),
        wrap_range(context.range(), "Some(", ")").into(),
        context.diagnostic(),
    ))
}
