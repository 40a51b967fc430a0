//! Rule dispatch over a diagnostic's message lines.

use lsp_types::{Diagnostic, Uri};
use tracing::{debug, trace};

use crate::context::DispatchContext;
use crate::registry::ActionRegistry;
use crate::rules::Rule;

/// Tracing target for dispatch operations.
pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");

/// Runs the rules over every message line of one diagnostic.
///
/// For each line the rules are tried in [`Rule::PRIORITY`] order and the
/// first one producing an action wins that line; its action is registered
/// against the context's file and range. A diagnostic whose message has
/// several recognisable lines may therefore register several actions.
///
/// Returns the number of actions registered.
///
/// # Example
///
/// ```
/// use std::str::FromStr;
///
/// use lsp_types::{Diagnostic, Position, Range, Uri};
/// use mender_actions::{ActionRegistry, DispatchContext, dispatch};
///
/// let range = Range::new(Position::new(2, 8), Position::new(2, 11));
/// let diagnostic = Diagnostic::new_simple(range, String::from("Hint: Did you mean foo?"));
/// let uri = Uri::from_str("file:///src/Main.res").expect("valid URI");
/// let mut registry = ActionRegistry::new();
///
/// let registered = dispatch(&DispatchContext::from_diagnostic(&diagnostic, &uri), &mut registry);
/// assert_eq!(registered, 1);
/// assert_eq!(registry.actions_for(&uri)[0].action.title, "Replace with 'foo'");
/// ```
pub fn dispatch(context: &DispatchContext<'_>, registry: &mut ActionRegistry) -> usize {
    let mut registered = 0_usize;
    for index in 0..context.lines().len() {
        let Some((rule, action)) = Rule::PRIORITY
            .iter()
            .find_map(|rule| rule.attempt(context, index).map(|action| (*rule, action)))
        else {
            trace!(target: DISPATCH_TARGET, line = index, "no rule matched");
            continue;
        };

        debug!(
            target: DISPATCH_TARGET,
            rule = %rule,
            line = index,
            title = %action.title,
            "registered quick fix"
        );
        registry.register(context.uri(), context.range(), action);
        registered = registered.saturating_add(1);
    }
    registered
}

/// Dispatches a diagnostic using its own message and range.
pub fn dispatch_diagnostic(
    diagnostic: &Diagnostic,
    uri: &Uri,
    registry: &mut ActionRegistry,
) -> usize {
    dispatch(&DispatchContext::from_diagnostic(diagnostic, uri), registry)
}

/// Dispatches every diagnostic reported for `uri`, in order.
///
/// Returns the total number of actions registered.
pub fn dispatch_all<'a>(
    diagnostics: impl IntoIterator<Item = &'a Diagnostic>,
    uri: &Uri,
    registry: &mut ActionRegistry,
) -> usize {
    let total = diagnostics.into_iter().fold(0_usize, |sum, diagnostic| {
        sum.saturating_add(dispatch_diagnostic(diagnostic, uri, registry))
    });
    debug!(target: DISPATCH_TARGET, uri = ?uri, total, "dispatched diagnostics");
    total
}
