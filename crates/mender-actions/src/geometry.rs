//! Range-to-edit transforms shared by the rules.
//!
//! Every offset adjustment the rules make goes through these helpers so the
//! column arithmetic lives in one place. Columns are the UTF-16 `character`
//! values carried by LSP positions and are used verbatim; subtractions
//! saturate at column zero.

use lsp_types::{Position, Range, TextEdit};

/// Wraps `range` in `prefix` and `suffix`.
///
/// Returns two insertions: `prefix` at the start of the range and `suffix`
/// at its end. A zero-width, single-line range marks a single token whose
/// reported start sits one column past the token, so the prefix insertion
/// is moved one character earlier in that case.
///
/// # Example
///
/// ```
/// use lsp_types::{Position, Range};
/// use mender_actions::wrap_range;
///
/// let range = Range::new(Position::new(3, 5), Position::new(3, 9));
/// let [open, close] = wrap_range(range, "Some(", ")");
/// assert_eq!(open.range.start, Position::new(3, 5));
/// assert_eq!(close.range.start, Position::new(3, 9));
/// ```
#[must_use]
pub fn wrap_range(range: Range, prefix: &str, suffix: &str) -> [TextEdit; 2] {
    let start = if is_single_token(range) {
        Position::new(range.start.line, range.start.character.saturating_sub(1))
    } else {
        range.start
    };

    [insertion(start, prefix), insertion(range.end, suffix)]
}

/// Inserts `text` immediately before the last character covered by `range`.
///
/// Used when `range` spans a delimited body (a record literal or a match
/// expression) and new content must land just inside the closing
/// delimiter.
#[must_use]
pub fn insert_before_last_character(range: Range, text: &str) -> TextEdit {
    insertion(closing_delimiter(range), text)
}

/// Returns the position of the last character covered by `range`.
pub(crate) const fn closing_delimiter(range: Range) -> Position {
    Position {
        line: range.end.line,
        character: range.end.character.saturating_sub(1),
    }
}

/// Builds a zero-width edit inserting `text` at `position`.
pub(crate) fn insertion(position: Position, text: &str) -> TextEdit {
    TextEdit::new(Range::new(position, position), text.to_owned())
}

fn is_single_token(range: Range) -> bool {
    range.start == range.end
}
