//! Syntax tree primitives: kind tags, source ranges, and shared nodes.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Interned syntactic kind tag (e.g. `"cmd"`, `"decl"`, `"ident"`).
///
/// Cloning is cheap; equality compares tag content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyntaxKind(Arc<str>);

impl SyntaxKind {
    /// Creates a kind tag from a string.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self(Arc::from(tag))
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SyntaxKind {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl PartialEq<str> for SyntaxKind {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for SyntaxKind {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Half-open interval over source positions.
///
/// Invariant: `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRange {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}

impl SourceRange {
    /// Creates a range covering `start..end`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "range start must not exceed end");
        Self { start, end }
    }

    /// Canonical non-strict containment: `other` lies within `self`,
    /// endpoints included. A range contains itself.
    #[must_use]
    pub fn contains(self, other: SourceRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Endpoint-exclusive containment: `other` must additionally end
    /// before `self` does. A range never strictly contains itself.
    #[must_use]
    pub fn contains_strictly(self, other: SourceRange) -> bool {
        self.start <= other.start && other.end < self.end
    }

    /// Number of positions covered.
    #[must_use]
    pub fn len(self) -> usize {
        self.end - self.start
    }

    /// True when the range covers no positions.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: SyntaxKind,
    range: Option<SourceRange>,
    children: Vec<SyntaxNode>,
}

/// Immutable, structurally shared parse-tree node.
///
/// Cloning a node shares the underlying data. Trees are never mutated
/// after construction, so nodes may be read from any number of
/// traversal contexts (and threads) at once.
#[derive(Debug, Clone)]
pub struct SyntaxNode(Arc<NodeData>);

impl SyntaxNode {
    /// Creates a childless node without a source range (synthetic).
    #[must_use]
    pub fn new(kind: impl Into<SyntaxKind>) -> Self {
        Self(Arc::new(NodeData {
            kind: kind.into(),
            range: None,
            children: Vec::new(),
        }))
    }

    /// Sets an explicit source range.
    #[must_use]
    pub fn with_range(mut self, range: SourceRange) -> Self {
        Arc::make_mut(&mut self.0).range = Some(range);
        self
    }

    /// Appends one child.
    #[must_use]
    pub fn with_child(mut self, child: SyntaxNode) -> Self {
        Arc::make_mut(&mut self.0).children.push(child);
        self
    }

    /// Appends several children in order.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = SyntaxNode>) -> Self {
        Arc::make_mut(&mut self.0).children.extend(children);
        self
    }

    /// Returns the node's kind tag.
    #[must_use]
    pub fn kind(&self) -> &SyntaxKind {
        &self.0.kind
    }

    /// Returns the node's ordered children.
    #[must_use]
    pub fn children(&self) -> &[SyntaxNode] {
        &self.0.children
    }

    /// Returns the child at `index`, if any.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<&SyntaxNode> {
        self.0.children.get(index)
    }

    /// Returns the node's source range.
    ///
    /// A node without an explicit range spans its ranged descendants:
    /// the range runs from the first child range to the last. Fully
    /// synthetic subtrees have no range at all.
    #[must_use]
    pub fn range(&self) -> Option<SourceRange> {
        if let Some(range) = self.0.range {
            return Some(range);
        }
        let start = self.0.children.iter().find_map(SyntaxNode::range)?.start;
        let end = self.0.children.iter().rev().find_map(SyntaxNode::range)?.end;
        Some(SourceRange::new(start, end))
    }

    /// Pointer identity: true when both handles refer to the same node.
    #[must_use]
    pub fn same_node(a: &SyntaxNode, b: &SyntaxNode) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}
