//! Quick-fix synthesis from compiler diagnostic messages.
//!
//! Given a diagnostic reported by the ReScript type checker, this crate
//! decides whether a mechanical source edit resolves it and, if so, builds a
//! ready-to-apply LSP quick fix. Recognition is driven by a fixed, ordered
//! list of [`Rule`]s matched against the lines of the diagnostic message;
//! edits are computed directly from the diagnostic range so surrounding
//! indentation and delimiters are preserved without re-parsing the file.
//!
//! # Components
//!
//! - [`dispatch`] walks message lines and tries each rule in priority order
//! - [`Rule`] enumerates the recognised message shapes
//! - [`wrap_range`] and [`insert_before_last_character`] compute edits
//! - [`ActionRegistry`] accumulates actions per file for later position
//!   queries
//!
//! The engine never fails: a line no rule recognises simply yields no fix.

mod action;
mod context;
mod dispatch;
mod geometry;
mod registry;
mod rules;

pub use context::DispatchContext;
pub use dispatch::{dispatch, dispatch_all, dispatch_diagnostic};
pub use geometry::{insert_before_last_character, wrap_range};
pub use registry::{ActionRegistry, RegisteredAction};
pub use rules::Rule;

#[cfg(test)]
mod tests;
