//! Pattern rules recognising fixable diagnostic message shapes.
//!
//! Each rule inspects one message line (plus, for some rules, its
//! neighbours) and either synthesises exactly one quick fix or declines.
//! Declining covers every failure mode alike: the trigger did not match,
//! the captured text was malformed, or a safety guard vetoed the rewrite.

mod did_you_mean;
pub(crate) mod match_cases;
mod optional_wrap;
pub(crate) mod record_fields;
mod type_conversion;
mod uncurried_dot;
mod unit_wrap;

use std::fmt;

use lsp_types::CodeAction;

use crate::context::DispatchContext;

/// Code rewrite recognised from a diagnostic message line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Replaces a misspelt identifier with the checker's suggestion.
    IdentifierSuggestion,
    /// Adds `assert false` placeholders for undefined record fields.
    MissingRecordFields,
    /// Wraps a value in the conversion function the checker names.
    TypeConversion,
    /// Wraps a top-level expression in `ignore(...)`.
    TopLevelUnitWrap,
    /// Inserts the `.` marker into an uncurried call.
    UncurriedDotInsert,
    /// Adds `assert false` arms for unhandled match cases.
    MissingMatchCases,
    /// Wraps a value in `Some(...)` where an option is expected.
    OptionalWrap,
}

impl Rule {
    /// Rules in the order the dispatcher tries them for each line.
    pub const PRIORITY: [Self; 7] = [
        Self::IdentifierSuggestion,
        Self::MissingRecordFields,
        Self::TypeConversion,
        Self::TopLevelUnitWrap,
        Self::UncurriedDotInsert,
        Self::MissingMatchCases,
        Self::OptionalWrap,
    ];

    /// Returns the identifier used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IdentifierSuggestion => "identifier-suggestion",
            Self::MissingRecordFields => "missing-record-fields",
            Self::TypeConversion => "type-conversion",
            Self::TopLevelUnitWrap => "top-level-unit-wrap",
            Self::UncurriedDotInsert => "uncurried-dot-insert",
            Self::MissingMatchCases => "missing-match-cases",
            Self::OptionalWrap => "optional-wrap",
        }
    }

    /// Attempts to synthesise a fix for the message line at `index`.
    ///
    /// Returns `None` when the rule does not apply to the line.
    #[must_use]
    pub fn attempt(self, context: &DispatchContext<'_>, index: usize) -> Option<CodeAction> {
        let line = context.line(index)?;
        match self {
            Self::IdentifierSuggestion => did_you_mean::attempt(context, line),
            Self::MissingRecordFields => record_fields::attempt(context, index, line),
            Self::TypeConversion => type_conversion::attempt(context, line),
            Self::TopLevelUnitWrap => unit_wrap::attempt(context, line),
            Self::UncurriedDotInsert => uncurried_dot::attempt(context, line),
            Self::MissingMatchCases => match_cases::attempt(context, index, line),
            Self::OptionalWrap => optional_wrap::attempt(context, index, line),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Returns the text following `prefix` when the trimmed line starts with it.
fn strip_trigger<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    line.trim().strip_prefix(prefix)
}

/// Builds `count` spaces of padding.
fn padding(count: u32) -> String {
    " ".repeat(usize::try_from(count).unwrap_or_default())
}
