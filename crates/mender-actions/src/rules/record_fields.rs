//! Placeholders for undefined record fields.
//!
//! The checker lists the missing field names after the trigger, wrapping the
//! list onto as many following lines as it needs. Every remaining message
//! line is read as part of that list.

use lsp_types::{CodeAction, Range};

use crate::action::quick_fix;
use crate::context::DispatchContext;
use crate::geometry::{closing_delimiter, insert_before_last_character};

use super::{padding, strip_trigger};

const TRIGGER: &str = "Some record fields are undefined:";

pub(super) fn attempt(
    context: &DispatchContext<'_>,
    index: usize,
    line: &str,
) -> Option<CodeAction> {
    let remainder = strip_trigger(line, TRIGGER)?;
    let fields: Vec<&str> = remainder
        .split_whitespace()
        .chain(context.following_lines(index).flat_map(str::split_whitespace))
        .collect();
    if fields.is_empty() {
        return None;
    }

    let range = context.range();
    let text = render_fields(range, &fields);
    Some(quick_fix(
        "Add missing record fields",
        context.uri(),
        vec![insert_before_last_character(range, &text)],
        context.diagnostic(),
    ))
}

/// Renders the inserted field placeholders for a record literal spanning
/// `range`.
pub(crate) fn render_fields(range: Range, fields: &[&str]) -> String {
    if range.start.line == range.end.line {
        return fields
            .iter()
            .map(|field| format!(", {field}: assert false"))
            .collect();
    }

    let brace_column = closing_delimiter(range).character;
    let field_padding = padding(brace_column.saturating_add(2));
    let mut text = String::new();
    for (position, field) in fields.iter().enumerate() {
        let pad = if position == 0 { "  " } else { field_padding.as_str() };
        text.push_str(&format!("{pad}{field}: assert false,\n"));
    }
    text.push_str(&padding(brace_column));
    text
}
