//! Behaviour-driven tests for quick-fix synthesis.

use std::cell::RefCell;

use lsp_types::{CodeAction, Diagnostic, Position, Range};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use crate::tests::support::{apply, sample_uri};
use crate::{ActionRegistry, DispatchContext, dispatch};

// =============================================================================
// Test World
// =============================================================================

/// State shared across BDD steps.
#[derive(Default)]
struct TestWorld {
    /// Source text the diagnostic refers to.
    source: String,
    /// Diagnostic range.
    range: Option<Range>,
    /// Message lines in emission order.
    lines: Vec<String>,
    /// Registry populated by dispatch.
    registry: ActionRegistry,
}

impl TestWorld {
    fn actions(&self) -> Vec<CodeAction> {
        self.registry
            .actions_for(&sample_uri())
            .iter()
            .map(|entry| entry.action.clone())
            .collect()
    }
}

#[fixture]
fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::default())
}

/// Strips surrounding double quotes from a string if present.
fn strip_quotes(s: &str) -> &str {
    s.trim_matches('"')
}

/// Parses `"line:character"` into a position.
fn position(text: &str) -> Position {
    let (line, character) = strip_quotes(text)
        .split_once(':')
        .expect("position should be line:character");
    Position::new(
        line.parse().expect("valid line"),
        character.parse().expect("valid character"),
    )
}

// =============================================================================
// Given Steps
// =============================================================================

#[given("the source line {source}")]
fn given_source_line(world: &RefCell<TestWorld>, source: String) {
    let mut w = world.borrow_mut();
    w.source.push_str(strip_quotes(&source));
    w.source.push('\n');
}

#[given("a diagnostic from {start} to {end}")]
fn given_diagnostic(world: &RefCell<TestWorld>, start: String, end: String) {
    world.borrow_mut().range = Some(Range::new(position(&start), position(&end)));
}

#[given("the message line {line}")]
fn given_message_line(world: &RefCell<TestWorld>, line: String) {
    world
        .borrow_mut()
        .lines
        .push(strip_quotes(&line).to_owned());
}

// =============================================================================
// When Steps
// =============================================================================

#[when("the diagnostic is dispatched")]
fn when_dispatched(world: &RefCell<TestWorld>) {
    let mut w = world.borrow_mut();
    let range = w.range.expect("range should be set");
    let diagnostic = Diagnostic::new_simple(range, w.lines.join("\n"));
    let uri = sample_uri();
    let lines = w.lines.clone();
    let context = DispatchContext::new(&diagnostic, lines.iter().map(String::as_str), &uri, range);
    dispatch(&context, &mut w.registry);
}

// =============================================================================
// Then Steps
// =============================================================================

#[then("exactly {count} quick fix is registered")]
fn then_count_registered(world: &RefCell<TestWorld>, count: usize) {
    assert_eq!(world.borrow().actions().len(), count);
}

#[then("no quick fix is registered")]
fn then_none_registered(world: &RefCell<TestWorld>) {
    assert!(world.borrow().registry.is_empty());
}

#[then("the quick fix is titled {title}")]
fn then_titled(world: &RefCell<TestWorld>, title: String) {
    let w = world.borrow();
    let actions = w.actions();
    let first = actions.first().expect("a quick fix should be registered");
    assert_eq!(first.title, strip_quotes(&title));
    assert_eq!(first.is_preferred, Some(true));
}

#[then("applying it yields the line {expected}")]
fn then_applied_line(world: &RefCell<TestWorld>, expected: String) {
    let w = world.borrow();
    let actions = w.actions();
    let first = actions.first().expect("a quick fix should be registered");
    let edits = first
        .edit
        .as_ref()
        .and_then(|edit| edit.changes.as_ref())
        .and_then(|changes| changes.get(&sample_uri()))
        .expect("edits for the sample URI");
    let updated = apply(&w.source, edits);
    assert_eq!(updated.trim_end(), strip_quotes(&expected));
}

// =============================================================================
// Scenario Bindings
// =============================================================================

#[scenario(
    path = "tests/features/quick_fixes.feature",
    name = "Identifier suggestion replaces the misspelt name"
)]
fn identifier_suggestion(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/quick_fixes.feature",
    name = "Conversion hint wraps the value"
)]
fn conversion_hint(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/quick_fixes.feature",
    name = "Uncurried call receives its dot"
)]
fn uncurried_call(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/quick_fixes.feature",
    name = "Optional wrap is vetoed for differing types"
)]
fn optional_wrap_vetoed(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/quick_fixes.feature",
    name = "Unrelated diagnostics carry no fix"
)]
fn unrelated_diagnostic(world: RefCell<TestWorld>) {
    drop(world);
}
