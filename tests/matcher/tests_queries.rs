//! Queries over the chip fixture through the public API.

use rstest::rstest;

use hdlkit::matcher::verilog::module_name;
use hdlkit::matcher::{
    MatchResult, MatcherError, Query, TraversalOrder, any, any_of, child, has_ancestor, has_child,
    has_descendant, leaf, node, preprocessing, unless,
};
use hdlkit::syntax::Symbol;
use hdlkit::{NodeKind, TokenKind};

use crate::helpers::tree_fixtures::chip_tree;

fn names<'t>(results: impl Iterator<Item = MatchResult<'t>>, binding: &str) -> Vec<&'t str> {
    results
        .map(|found| found.leaf(binding).unwrap().text())
        .collect()
}

fn describe(symbol: Symbol<'_>) -> String {
    match symbol {
        Symbol::Node(node) => node.kind().to_string(),
        Symbol::Leaf(leaf) => leaf.text().to_string(),
    }
}

#[test]
fn test_instance_names() {
    let tree = chip_tree();
    let query = Query::new(
        node(NodeKind::GATE_INSTANCE).and(child(0, leaf(TokenKind::SYMBOL_IDENTIFIER).bind("name"))),
    )
    .unwrap();
    assert_eq!(
        names(query.search(&tree, TraversalOrder::PreOrder), "name"),
        ["g1", "u_sub"]
    );
}

#[test]
fn test_design_unit_names() {
    let tree = chip_tree();
    let query = Query::new(
        any_of([
            node(NodeKind::MODULE_DECLARATION),
            node(NodeKind::INTERFACE_DECLARATION),
            node(NodeKind::PROGRAM_DECLARATION),
        ])
        .and(module_name(any().bind("name"))),
    )
    .unwrap();
    assert_eq!(
        names(query.search(&tree, TraversalOrder::PreOrder), "name"),
        ["bus_if", "prog", "top"]
    );
}

#[test]
fn test_preprocessing_nodes_are_targetable() {
    let tree = chip_tree();
    let query = Query::new(preprocessing()).unwrap();
    let found: Vec<String> = query
        .search(&tree, TraversalOrder::PreOrder)
        .map(|found| describe(found.symbol()))
        .collect();
    assert_eq!(found, ["kPreprocessorInclude", "kPreprocessorDefine"]);
}

#[test]
fn test_leaves_inside_directives() {
    let tree = chip_tree();
    let inside = Query::new(leaf(TokenKind::SYMBOL_IDENTIFIER).and(has_ancestor(preprocessing()))).unwrap();
    assert_eq!(inside.search(&tree, TraversalOrder::PreOrder).count(), 0);

    let directive_leaves = Query::new(has_ancestor(preprocessing())).unwrap();
    let texts: Vec<String> = directive_leaves
        .search(&tree, TraversalOrder::PreOrder)
        .map(|found| describe(found.symbol()))
        .collect();
    assert_eq!(
        texts,
        [
            "`include",
            "\"defs.svh\"",
            "`define",
            "DRIVE",
            "(x) assign x = 0;"
        ]
    );
}

#[test]
fn test_skipping_directives() {
    let tree = chip_tree();
    let all = Query::new(node(NodeKind::PREPROCESSOR_DEFINE)).unwrap();
    let outside = Query::new(node(NodeKind::PREPROCESSOR_DEFINE).and(unless(preprocessing()))).unwrap();
    assert_eq!(all.search(&tree, TraversalOrder::PreOrder).count(), 1);
    assert_eq!(outside.search(&tree, TraversalOrder::PreOrder).count(), 0);
}

#[rstest]
#[case(TraversalOrder::PreOrder)]
#[case(TraversalOrder::PostOrder)]
fn test_rerunning_a_query_yields_the_same_sequence(#[case] order: TraversalOrder) {
    let tree = chip_tree();
    let query = Query::new(has_descendant(node(NodeKind::UNQUALIFIED_ID)).bind("scope")).unwrap();
    let first: Vec<MatchResult<'_>> = query.search(&tree, order).collect();
    let second: Vec<MatchResult<'_>> = query.search(&tree, order).collect();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_orders_agree_on_the_match_set() {
    let tree = chip_tree();
    let query = Query::new(has_descendant(node(NodeKind::UNQUALIFIED_ID))).unwrap();
    let mut pre: Vec<_> = query
        .search(&tree, TraversalOrder::PreOrder)
        .map(|found| found.symbol().id())
        .collect();
    let mut post: Vec<_> = query
        .search(&tree, TraversalOrder::PostOrder)
        .map(|found| found.symbol().id())
        .collect();
    assert_ne!(pre, post);
    pre.sort();
    post.sort();
    assert_eq!(pre, post);
}

#[test]
fn test_first_match_stops_early() {
    let tree = chip_tree();
    let query = Query::new(node(NodeKind::ENUM_NAME).and(child(0, any().bind("name")))).unwrap();
    let first = query.first(&tree, TraversalOrder::PreOrder).unwrap();
    assert_eq!(first.leaf("name").unwrap().text(), "IDLE");
    assert_eq!(
        query.search(&tree, TraversalOrder::PreOrder).next(),
        Some(first)
    );
}

#[test]
fn test_construction_errors() {
    assert_eq!(
        Query::new(any().bind("x").and(has_child(any().bind("x")))).unwrap_err(),
        MatcherError::DuplicateBinding("x".into())
    );
    assert!(matches!(
        Query::new(node(NodeKind::MODULE_DECLARATION).and(node(NodeKind::CLASS_DECLARATION))),
        Err(MatcherError::Contradiction { .. })
    ));
    assert!(matches!(
        Query::new(node(NodeKind::MODULE_DECLARATION).and(leaf(TokenKind::SYMBOL_IDENTIFIER))),
        Err(MatcherError::Contradiction { .. })
    ));
}
