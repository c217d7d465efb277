//! Ancestor-stack resolution and kind-pattern matching.

use crate::syntax::{SourceRange, SyntaxKind, SyntaxNode};
use tracing::trace;

/// One descent step: the ancestor passed through and the child index
/// the descent continued into.
#[derive(Debug, Clone)]
pub struct StackFrame {
    /// Ancestor node.
    pub parent: SyntaxNode,
    /// Index of the child the descent took.
    pub child_index: usize,
}

/// Ordered ancestor path from a tree root down toward a target node,
/// outermost frame first.
#[derive(Debug, Clone, Default)]
pub struct SyntaxStack {
    frames: Vec<StackFrame>,
}

impl SyntaxStack {
    /// Returns the frames, outermost first.
    #[must_use]
    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    /// Returns the kind tags of the frames, outermost first.
    pub fn kinds(&self) -> impl Iterator<Item = &SyntaxKind> {
        self.frames.iter().map(|frame| frame.parent.kind())
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True when the stack holds no frames (the target matched the
    /// search root itself).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Tests this stack against a pattern. See [`stack_matches`].
    #[must_use]
    pub fn matches(&self, pattern: &KindPattern) -> bool {
        stack_matches(self, pattern)
    }
}

/// Expected ancestor kinds, anchored at the innermost end of a stack.
///
/// Entries are listed outermost-first like the stacks they match;
/// wildcard entries match any kind.
#[derive(Debug, Clone, Default)]
pub struct KindPattern {
    entries: Vec<Option<SyntaxKind>>,
}

impl KindPattern {
    /// Creates an empty pattern, which matches any stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pattern from kind tags, outermost first.
    #[must_use]
    pub fn of(tags: &[&str]) -> Self {
        Self {
            entries: tags.iter().map(|tag| Some(SyntaxKind::new(tag))).collect(),
        }
    }

    /// Appends an entry requiring the given kind.
    #[must_use]
    pub fn kind(mut self, tag: &str) -> Self {
        self.entries.push(Some(SyntaxKind::new(tag)));
        self
    }

    /// Appends a wildcard entry matching any kind.
    #[must_use]
    pub fn any(mut self) -> Self {
        self.entries.push(None);
        self
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the pattern has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves the chain of ancestors leading from `root` down to
/// `target`.
///
/// Succeeds with an empty stack when `root` itself matches `target`
/// (same kind, identical range). A target without a source range is
/// never found. Sibling ranges are assumed disjoint, so the descent
/// commits to the first child whose subtree contains the target and
/// never backtracks across siblings.
///
/// On failure no partial path is returned. The search only reads the
/// tree and is safe to run from any number of callers at once.
#[must_use]
pub fn find_syntax_stack(target: &SyntaxNode, root: &SyntaxNode) -> Option<SyntaxStack> {
    let target_range = target.range()?;
    let mut frames = descend(target, target_range, root)?;
    // Frames are collected on unwind, innermost parent first.
    frames.reverse();
    Some(SyntaxStack { frames })
}

fn descend(
    target: &SyntaxNode,
    target_range: SourceRange,
    root: &SyntaxNode,
) -> Option<Vec<StackFrame>> {
    let root_range = root.range()?;
    if !root_range.contains(target_range) {
        return None;
    }
    if root.kind() == target.kind() && root_range == target_range {
        trace!(kind = %root.kind(), start = root_range.start, "syntax stack search hit");
        return Some(Vec::new());
    }
    for (child_index, child) in root.children().iter().enumerate() {
        if let Some(mut frames) = descend(target, target_range, child) {
            frames.push(StackFrame {
                parent: root.clone(),
                child_index,
            });
            return Some(frames);
        }
    }
    None
}

/// Tests a stack against a pattern of expected kinds.
///
/// The pattern anchors at the innermost end: trailing outer frames of
/// the stack beyond the pattern's length are ignored, so a rule can
/// require "directly inside a `do` block inside a `let`" without
/// caring what encloses the `let`. A pattern longer than the stack
/// never matches; an empty pattern matches any stack.
#[must_use]
pub fn stack_matches(stack: &SyntaxStack, pattern: &KindPattern) -> bool {
    if pattern.entries.len() > stack.frames.len() {
        return false;
    }
    stack
        .frames
        .iter()
        .rev()
        .zip(pattern.entries.iter().rev())
        .all(|(frame, expected)| {
            expected
                .as_ref()
                .map_or(true, |kind| frame.parent.kind() == kind)
        })
}
