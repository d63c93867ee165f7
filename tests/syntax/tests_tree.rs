//! Tree model invariants over a realistic tree.

use std::collections::HashSet;

use hdlkit::syntax::{Symbol, SymbolId};
use hdlkit::{NodeKind, TokenKind, TreeBuilder};

use crate::helpers::tree_fixtures::{CHIP, chip_tree};

#[test]
fn test_leaf_text_matches_source_slice() {
    let tree = chip_tree();
    assert_eq!(tree.source(), CHIP);
    for leaf in tree.leaves() {
        assert_eq!(&CHIP[leaf.range()], leaf.text(), "{leaf:?}");
    }
}

#[test]
fn test_children_know_their_parent() {
    let tree = chip_tree();
    for symbol in tree.root().unwrap().preorder() {
        if let Symbol::Node(node) = symbol {
            for child in node.present_children() {
                assert_eq!(child.parent(), Some(node));
            }
        }
    }
}

#[test]
fn test_preorder_visits_every_symbol_once() {
    let tree = chip_tree();
    let ids: Vec<SymbolId> = tree.root().unwrap().preorder().map(Symbol::id).collect();
    let unique: HashSet<SymbolId> = ids.iter().copied().collect();
    assert_eq!(ids.len(), unique.len());
    assert_eq!(ids.len(), tree.leaf_count() + tree.node_count());
}

#[test]
fn test_leaves_in_preorder_follow_source_order() {
    let tree = chip_tree();
    let starts: Vec<u32> = tree
        .root()
        .unwrap()
        .preorder()
        .filter_map(Symbol::as_leaf)
        .map(|leaf| leaf.range().start().into())
        .collect();
    assert!(starts.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_postorder_is_reverse_dependency_order() {
    let tree = chip_tree();
    let order: Vec<SymbolId> = tree.root().unwrap().postorder().map(Symbol::id).collect();
    let position = |id: SymbolId| order.iter().position(|seen| *seen == id).unwrap();
    for symbol in tree.root().unwrap().preorder() {
        if let Some(parent) = symbol.parent() {
            assert!(position(symbol.id()) < position(parent.symbol().id()));
        }
    }
}

#[test]
fn test_root_spans_the_whole_file() {
    let tree = chip_tree();
    let range = tree.root().unwrap().text_range().unwrap();
    assert_eq!(u32::from(range.start()), 0);
    assert_eq!(&CHIP[range], CHIP.trim_end());
}

#[test]
fn test_trees_are_shareable_across_threads() {
    let tree = chip_tree();
    let counts: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| tree.root().unwrap().preorder().count()))
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });
    assert!(counts.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_builder_rejects_reattachment() {
    let mut builder = TreeBuilder::new("a b");
    let a = builder.token(TokenKind::SYMBOL_IDENTIFIER, 0, "a");
    let list = builder.node(NodeKind::ARGUMENT_LIST, [Some(a)]).unwrap();
    assert!(builder.node(NodeKind::EXPRESSION, [Some(a)]).is_err());
    let tree = builder.finish(Some(list)).unwrap();
    assert_eq!(tree.node_count(), 1);
}
