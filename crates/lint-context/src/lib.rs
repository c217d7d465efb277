//! # lint-context
//!
//! Diagnostic-context resolution for linters.
//!
//! This is the facade crate: it re-exports the core engine and adds
//! the [`Linter`] descriptor, which bundles a linter's name and
//! default enabled state with option-gated warning emission.
//!
//! ## Quick start
//!
//! ```rust
//! use lint_context::{Linter, LinterOptions, MemorySink, SourceRange, SyntaxNode};
//!
//! let unused = Linter::new("unusedVariables")
//!     .description("warn on variables that are never read");
//!
//! let options = LinterOptions::new().set("linter.all", false).set(
//!     unused.option_name(),
//!     true, // force-enabled despite the global switch
//! );
//! let mut sink = MemorySink::new();
//!
//! let decl = SyntaxNode::new("decl").with_range(SourceRange::new(0, 10));
//! unused.check(&options, &mut sink, &decl, "unused variable `x`")?;
//!
//! assert_eq!(sink.messages[0].text, "unused variable `x` [unusedVariables]");
//! # Ok::<(), lint_context::SinkError>(())
//! ```
//!
//! ## Context queries
//!
//! Rules typically combine [`find_syntax_stack`] + [`stack_matches`]
//! to test the enclosing syntax shape, and
//! [`collect_macro_expansions`] to attribute generated code back to
//! the macro the user actually wrote.

#![forbid(unsafe_code)]

pub use lint_context_core::*;

mod linter;
pub use linter::Linter;
