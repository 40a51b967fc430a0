//! Per-diagnostic dispatch input.

use lsp_types::{Diagnostic, Range, Uri};

/// Everything the rules may read while synthesising fixes for one
/// diagnostic.
///
/// The message lines are kept in the order the checker emitted them; rules
/// look both backwards (the optional-wrap rule reads the preceding line) and
/// forwards (the record-field and match-case rules consume every following
/// line).
///
/// # Example
///
/// ```
/// use std::str::FromStr;
///
/// use lsp_types::{Diagnostic, Position, Range, Uri};
/// use mender_actions::DispatchContext;
///
/// let range = Range::new(Position::new(0, 4), Position::new(0, 7));
/// let diagnostic = Diagnostic::new_simple(range, String::from("Hint: Did you mean foo?"));
/// let uri = Uri::from_str("file:///src/Main.res").expect("valid URI");
/// let context = DispatchContext::from_diagnostic(&diagnostic, &uri);
/// assert_eq!(context.lines(), ["Hint: Did you mean foo?"]);
/// ```
#[derive(Debug, Clone)]
pub struct DispatchContext<'a> {
    diagnostic: &'a Diagnostic,
    lines: Vec<&'a str>,
    uri: &'a Uri,
    range: Range,
}

impl<'a> DispatchContext<'a> {
    /// Bundles a diagnostic with its pre-split message lines, the file it
    /// belongs to and the range fixes should target.
    #[must_use]
    pub fn new(
        diagnostic: &'a Diagnostic,
        lines: impl IntoIterator<Item = &'a str>,
        uri: &'a Uri,
        range: Range,
    ) -> Self {
        Self {
            diagnostic,
            lines: lines.into_iter().collect(),
            uri,
            range,
        }
    }

    /// Splits the diagnostic's own message into lines and targets its own
    /// range.
    #[must_use]
    pub fn from_diagnostic(diagnostic: &'a Diagnostic, uri: &'a Uri) -> Self {
        Self::new(diagnostic, diagnostic.message.lines(), uri, diagnostic.range)
    }

    /// Returns the diagnostic being resolved.
    #[must_use]
    pub const fn diagnostic(&self) -> &'a Diagnostic {
        self.diagnostic
    }

    /// Returns the message lines in emission order.
    #[must_use]
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Returns the file the diagnostic was reported against.
    #[must_use]
    pub const fn uri(&self) -> &'a Uri {
        self.uri
    }

    /// Returns the range generated edits are computed from.
    #[must_use]
    pub const fn range(&self) -> Range {
        self.range
    }

    /// Returns the line at `index`, if any.
    pub(crate) fn line(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).copied()
    }

    /// Returns the line immediately before `index`, if any.
    pub(crate) fn preceding_line(&self, index: usize) -> Option<&'a str> {
        index.checked_sub(1).and_then(|previous| self.line(previous))
    }

    /// Returns every line after `index`.
    pub(crate) fn following_lines(&self, index: usize) -> impl Iterator<Item = &'a str> + '_ {
        self.lines.iter().skip(index.saturating_add(1)).copied()
    }
}
