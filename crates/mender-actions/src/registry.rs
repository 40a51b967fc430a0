//! Accumulator of synthesised actions, keyed by file.
//!
//! The registry is the only state that outlives a dispatch call. Its owner
//! fills it while walking a file's diagnostics and clears it when the file
//! is re-analysed; entries keep the order in which they were registered,
//! which is diagnostic order and then message-line order.

use std::collections::HashMap;

use lsp_types::{CodeAction, Position, Range, Uri};

/// A code action together with the diagnostic range it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredAction {
    /// Diagnostic range the action resolves.
    pub range: Range,
    /// The synthesised quick fix.
    pub action: CodeAction,
}

impl RegisteredAction {
    /// Returns whether `position` lies inside the action's range, both ends
    /// included.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        let start = (self.range.start.line, self.range.start.character);
        let end = (self.range.end.line, self.range.end.character);
        let point = (position.line, position.character);
        !is_before(point, start) && !is_before(end, point)
    }
}

/// Per-file, append-ordered store of code actions.
///
/// Registration does not deduplicate: dispatching the same diagnostic twice
/// records its action twice.
#[derive(Debug, Clone, Default)]
pub struct ActionRegistry {
    files: HashMap<Uri, Vec<RegisteredAction>>,
}

impl ActionRegistry {
    /// Builds an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `action` for `uri`, recording the range it resolves.
    pub fn register(&mut self, uri: &Uri, range: Range, action: CodeAction) {
        self.files
            .entry(uri.clone())
            .or_default()
            .push(RegisteredAction { range, action });
    }

    /// Returns every action registered for `uri` in registration order.
    #[must_use]
    pub fn actions_for(&self, uri: &Uri) -> &[RegisteredAction] {
        self.files.get(uri).map_or(&[], Vec::as_slice)
    }

    /// Returns the actions for `uri` whose range contains `position`.
    ///
    /// Answers an editor's "code actions at cursor" request; results keep
    /// registration order rather than range order.
    pub fn actions_at(
        &self,
        uri: &Uri,
        position: Position,
    ) -> impl Iterator<Item = &CodeAction> + '_ {
        self.actions_for(uri)
            .iter()
            .filter(move |entry| entry.contains(position))
            .map(|entry| &entry.action)
    }

    /// Drops every action registered for `uri`.
    pub fn clear_file(&mut self, uri: &Uri) {
        self.files.remove(uri);
    }

    /// Drops every registered action.
    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// Returns the total number of registered actions across all files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    /// Returns `true` when no action has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.values().all(Vec::is_empty)
    }
}

const fn is_before(left: (u32, u32), right: (u32, u32)) -> bool {
    left.0 < right.0 || (left.0 == right.0 && left.1 < right.1)
}
