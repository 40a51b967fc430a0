//! Primitive-to-type conversions the checker spells out.

use lsp_types::CodeAction;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::action::quick_fix;
use crate::context::DispatchContext;
use crate::geometry::wrap_range;

use super::strip_trigger;

const TRIGGER: &str = "You can convert ";

#[expect(clippy::expect_used, reason = "the pattern is a compile-time literal")]
static CONVERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"You can convert (\w+) to (\w+) with ([\w.]+)")
        .expect("conversion pattern should compile")
});

pub(super) fn attempt(context: &DispatchContext<'_>, line: &str) -> Option<CodeAction> {
    strip_trigger(line, TRIGGER)?;
    let captures = CONVERSION.captures(line)?;
    let from = captures.get(1)?.as_str();
    let to = captures.get(2)?.as_str();
    // A sentence-ending period is matched by the function class.
    let function = captures.get(3)?.as_str().trim_end_matches('.');
    if function.is_empty() {
        return None;
    }

    Some(quick_fix(
        format!("Convert {from} to {to} with {function}"),
        context.uri(),
        wrap_range(context.range(), &format!("{function}("), ")").into(),
        context.diagnostic(),
    ))
}
