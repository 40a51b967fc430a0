//! JSON rendering of synthesised code actions.

use std::io::Write;

use lsp_types::{CodeAction, Position, Range, Uri};
use mender_actions::ActionRegistry;
use serde::Serialize;

use crate::errors::AppError;

/// A registered action together with the range it resolves.
#[derive(Debug, Serialize)]
struct RangedAction<'a> {
    range: Range,
    action: &'a CodeAction,
}

/// Writes the actions registered for `uri` to `writer` as a JSON array.
///
/// With a cursor `position` only the matching actions are written, without
/// their ranges, in the shape an editor's code action request returns.
pub(crate) fn write_actions<W: Write>(
    writer: &mut W,
    registry: &ActionRegistry,
    uri: &Uri,
    position: Option<Position>,
    pretty: bool,
) -> Result<(), AppError> {
    let rendered = match position {
        Some(cursor) => {
            let actions: Vec<&CodeAction> = registry.actions_at(uri, cursor).collect();
            to_json(&actions, pretty)
        }
        None => {
            let entries: Vec<RangedAction<'_>> = registry
                .actions_for(uri)
                .iter()
                .map(|entry| RangedAction {
                    range: entry.range,
                    action: &entry.action,
                })
                .collect();
            to_json(&entries, pretty)
        }
    }
    .map_err(AppError::SerialiseOutput)?;

    writeln!(writer, "{rendered}").map_err(AppError::WriteOutput)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
