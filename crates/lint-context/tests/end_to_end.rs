//! Integration test: full diagnostic-context flow through the facade.
//!
//! Builds the `cmd -> decl -> ident` tree, resolves the grandchild's
//! ancestor stack, matches it against a kind pattern, resolves the
//! option hierarchy, and emits a gated warning — the exact sequence a
//! linter rule runs.

use lint_context::{
    collect_macro_expansions, find_syntax_stack, ElabInfo, InfoTree, KindPattern, Linter,
    LinterOptions, MacroExpansion, MemorySink, Severity, SourceRange, SyntaxKind, SyntaxNode,
    LINTER_ALL,
};

fn sample_tree() -> (SyntaxNode, SyntaxNode, SyntaxNode) {
    let grandchild = SyntaxNode::new("ident").with_range(SourceRange::new(0, 3));
    let child = SyntaxNode::new("decl")
        .with_range(SourceRange::new(0, 10))
        .with_child(grandchild.clone());
    let root = SyntaxNode::new("cmd").with_child(child.clone());
    (root, child, grandchild)
}

#[test]
fn resolves_stack_and_matches_anchored_pattern() {
    let (root, child, grandchild) = sample_tree();

    let stack = find_syntax_stack(&grandchild, &root).expect("grandchild should be found");
    assert_eq!(stack.len(), 2);
    assert!(SyntaxNode::same_node(&stack.frames()[0].parent, &root));
    assert_eq!(stack.frames()[0].child_index, 0);
    assert!(SyntaxNode::same_node(&stack.frames()[1].parent, &child));
    assert_eq!(stack.frames()[1].child_index, 0);

    let kinds: Vec<&str> = stack.kinds().map(SyntaxKind::as_str).collect();
    assert_eq!(kinds, ["cmd", "decl"]);

    assert!(stack.matches(&KindPattern::of(&["decl"])));
    assert!(stack.matches(&KindPattern::of(&["cmd", "decl"])));
    assert!(!stack.matches(&KindPattern::of(&["cmd"])));
}

#[test]
fn gated_warning_reaches_the_sink() {
    let (root, _, grandchild) = sample_tree();
    let unused = Linter::new("unusedVariables").default_enabled(false);

    // Globally off, force-enabled per linter.
    let options = LinterOptions::new()
        .set(LINTER_ALL, false)
        .set(unused.option_name(), true);
    assert!(unused.enabled(&options));

    let stack = find_syntax_stack(&grandchild, &root).expect("grandchild should be found");
    assert!(stack.matches(&KindPattern::of(&["decl"])));

    let mut sink = MemorySink::new();
    unused
        .check(&options, &mut sink, &grandchild, "unused variable `x`")
        .expect("memory sink never fails");

    assert_eq!(sink.messages.len(), 1);
    assert_eq!(sink.messages[0].severity, Severity::Warning);
    assert_eq!(
        sink.messages[0].text,
        "unused variable `x` [unusedVariables]"
    );
    assert_eq!(sink.messages[0].position, Some(0));
}

#[test]
fn globally_disabled_linter_stays_silent() {
    let (_, _, grandchild) = sample_tree();
    let linter = Linter::new("unusedVariables");
    let options = LinterOptions::new().set(LINTER_ALL, false);

    let mut sink = MemorySink::new();
    linter
        .check(&options, &mut sink, &grandchild, "unused variable `x`")
        .expect("memory sink never fails");
    assert!(sink.messages.is_empty());
}

#[test]
fn macro_provenance_attributes_generated_syntax() {
    let (_, _, grandchild) = sample_tree();

    let expansion_step = |name: &str, start: usize, end: usize| {
        let before = SyntaxNode::new(name).with_range(SourceRange::new(start, end));
        ElabInfo::new()
            .with_syntax(before.clone())
            .with_semantic_range(SourceRange::new(start, end))
            .with_expansion(MacroExpansion {
                before: Some(before),
                after: Some(SyntaxNode::new("expanded").with_range(SourceRange::new(start, end))),
            })
    };

    // Outer macro m1 expanded to syntax itself produced by m2.
    let info_tree = InfoTree::context(InfoTree::node(
        expansion_step("m1", 0, 8),
        vec![InfoTree::leaf(expansion_step("m2", 0, 6))],
    ));

    let chain =
        collect_macro_expansions(&grandchild, &info_tree).expect("provenance should be found");
    let names: Vec<&str> = chain.names().iter().map(SyntaxKind::as_str).collect();
    assert_eq!(names, ["m1", "m2"]);

    // A tree without markers yields no provenance at all.
    let bare = InfoTree::leaf(ElabInfo::new().with_semantic_range(SourceRange::new(0, 10)));
    assert!(collect_macro_expansions(&grandchild, &bare).is_none());
}
