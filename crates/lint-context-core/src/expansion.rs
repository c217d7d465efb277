//! Elaboration info trees and macro-expansion provenance collection.

use crate::syntax::{SourceRange, SyntaxKind, SyntaxNode};
use tracing::trace;

/// A macro-expansion marker attached to an elaboration step.
///
/// `before` is the surface syntax of the macro invocation and `after`
/// the syntax it expanded to. Either may be missing on partially
/// recorded steps; only steps carrying both describe a usable
/// expansion.
#[derive(Debug, Clone, Default)]
pub struct MacroExpansion {
    /// Surface syntax of the macro call.
    pub before: Option<SyntaxNode>,
    /// Syntax produced by the expansion.
    pub after: Option<SyntaxNode>,
}

/// Provenance payload of one elaboration step.
#[derive(Debug, Clone, Default)]
pub struct ElabInfo {
    /// Syntax the step elaborated.
    pub syntax: Option<SyntaxNode>,
    /// Range covered by the step's semantic result.
    pub semantic_range: Option<SourceRange>,
    /// Present when the step records a macro expansion.
    pub expansion: Option<MacroExpansion>,
}

impl ElabInfo {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the elaborated syntax.
    #[must_use]
    pub fn with_syntax(mut self, syntax: SyntaxNode) -> Self {
        self.syntax = Some(syntax);
        self
    }

    /// Sets the semantic result range.
    #[must_use]
    pub fn with_semantic_range(mut self, range: SourceRange) -> Self {
        self.semantic_range = Some(range);
        self
    }

    /// Marks the step as a macro expansion.
    #[must_use]
    pub fn with_expansion(mut self, expansion: MacroExpansion) -> Self {
        self.expansion = Some(expansion);
        self
    }
}

/// Elaboration trace tree, built once per elaborated command and
/// read-only during linting.
#[derive(Debug, Clone)]
pub enum InfoTree {
    /// Context wrapper; transparent to provenance queries.
    Context(Box<InfoTree>),
    /// One elaboration step and the steps nested under it.
    Node {
        /// Provenance payload for this step.
        info: ElabInfo,
        /// Nested steps, in elaboration order.
        children: Vec<InfoTree>,
    },
}

impl InfoTree {
    /// Creates a leaf step with the given payload.
    #[must_use]
    pub fn leaf(info: ElabInfo) -> Self {
        Self::Node {
            info,
            children: Vec::new(),
        }
    }

    /// Creates a step with nested children.
    #[must_use]
    pub fn node(info: ElabInfo, children: Vec<InfoTree>) -> Self {
        Self::Node { info, children }
    }

    /// Wraps a subtree in a context layer.
    #[must_use]
    pub fn context(inner: InfoTree) -> Self {
        Self::Context(Box::new(inner))
    }
}

/// Macro names describing a node's provenance, outermost invocation
/// first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacroChain {
    names: Vec<SyntaxKind>,
}

impl MacroChain {
    /// Returns the macro names, outermost first.
    #[must_use]
    pub fn names(&self) -> &[SyntaxKind] {
        &self.names
    }

    /// Number of chain entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the chain carries no attributable macro name.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Recovers the chain of macro expansions that produced `target`.
///
/// Returns `None` when the info tree holds no expansion provenance for
/// the node at all, and `Some` of an empty chain when the node sits
/// inside expansion infrastructure that no macro name can be
/// attributed to. Otherwise the chain lists macro names outermost
/// invocation first, so a linter can attribute a warning to the
/// surface syntax the user actually wrote.
///
/// An expansion step contributes its name (the head kind of its
/// `before` syntax) when the target lies within the step's semantic
/// range non-strictly and within its syntactic range strictly.
/// Adjacent steps naming the same macro for the same node coalesce
/// into a single chain entry.
#[must_use]
pub fn collect_macro_expansions(target: &SyntaxNode, tree: &InfoTree) -> Option<MacroChain> {
    let target_range = target.range()?;
    let names = collect(target_range, tree)?;
    Some(MacroChain { names })
}

fn collect(target_range: SourceRange, tree: &InfoTree) -> Option<Vec<SyntaxKind>> {
    match tree {
        InfoTree::Context(inner) => collect(target_range, inner),
        InfoTree::Node { info, children } => {
            // Merge child chains in elaboration order, dropping
            // duplicated adjacent entries.
            let mut collected: Option<Vec<SyntaxKind>> = None;
            for child in children {
                if let Some(names) = collect(target_range, child) {
                    let merged = collected.get_or_insert_with(Vec::new);
                    for name in names {
                        if merged.last() != Some(&name) {
                            merged.push(name);
                        }
                    }
                }
            }

            // Only fully formed expansion steps can contribute:
            // `before` and `after` are independently optional.
            let Some(expansion) = &info.expansion else {
                return collected;
            };
            let Some(before) = &expansion.before else {
                return collected;
            };
            if expansion.after.is_none() {
                return collected;
            }

            let Some(semantic) = info.semantic_range else {
                return collected;
            };
            if !semantic.contains(target_range) {
                return collected;
            }

            let syntactic = info
                .syntax
                .as_ref()
                .and_then(SyntaxNode::range)
                .or_else(|| before.range());
            let attributable =
                syntactic.map_or(false, |range| range.contains_strictly(target_range));
            if !attributable {
                // The target is known to lie within expansion
                // infrastructure, but this step cannot name it.
                return Some(collected.unwrap_or_default());
            }

            let name = before.kind().clone();
            trace!(%name, "macro expansion step attributed");
            let mut names = collected.unwrap_or_default();
            // An outer step re-targeting the same node merges with the
            // chain head instead of adding a second entry.
            if names.first() != Some(&name) {
                names.insert(0, name);
            }
            Some(names)
        }
    }
}
