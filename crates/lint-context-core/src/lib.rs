//! # lint-context-core
//!
//! Diagnostic-context resolution engine for linters.
//!
//! Given a parsed syntax tree, a target node, and an elaboration info
//! tree, this crate answers the questions a linter must settle before
//! it can safely emit a warning:
//!
//! - [`find_syntax_stack`] resolves the chain of enclosing syntax
//!   nodes around a location, and [`stack_matches`] tests that chain
//!   against an expected [`KindPattern`]
//! - [`collect_macro_expansions`] recovers the macro names whose
//!   expansion produced a node, outermost invocation first
//! - [`get_linter_value`] resolves a linter's effective on/off state
//!   from the two-level option hierarchy (`linter.all` overridden by
//!   `linter.<name>`)
//! - [`log_lint`] forwards a violation to an external [`MessageSink`],
//!   tagged with the owning linter's name
//!
//! All operations are synchronous, read-only traversals over immutable
//! shared trees; missing ranges, absent provenance, and mistyped
//! options surface as empty results rather than errors. The only
//! failure that propagates is [`SinkError`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod emit;
mod expansion;
mod options;
mod stack;
mod syntax;

pub use emit::{
    log_lint, LintDiagnostic, LintMessage, MemorySink, MessageSink, Severity, SinkError,
};
pub use expansion::{
    collect_macro_expansions, ElabInfo, InfoTree, MacroChain, MacroExpansion,
};
pub use options::{
    get_linter_all, get_linter_value, linter_option_name, LinterOptions, OptionsError, LINTER_ALL,
};
pub use stack::{find_syntax_stack, stack_matches, KindPattern, StackFrame, SyntaxStack};
pub use syntax::{SourceRange, SyntaxKind, SyntaxNode};
