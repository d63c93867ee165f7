//! Deterministic traversals over a [`SyntaxTree`](super::SyntaxTree)
//!
//! Both walkers use an explicit stack, so deeply nested trees (long
//! `else if` chains, large concatenations) cannot overflow the call stack.
//! Children are always visited in attachment order; elided slots are skipped.

use super::tree::{LeafRef, NodeRef, Symbol};
use crate::base::TextRange;

/// Parent-before-children traversal.
#[derive(Debug, Clone)]
pub struct Preorder<'t> {
    stack: Vec<Symbol<'t>>,
}

impl<'t> Iterator for Preorder<'t> {
    type Item = Symbol<'t>;

    fn next(&mut self) -> Option<Symbol<'t>> {
        let symbol = self.stack.pop()?;
        if let Symbol::Node(node) = symbol {
            self.stack.extend(node.present_children().rev());
        }
        Some(symbol)
    }
}

/// Children-before-parent traversal.
#[derive(Debug, Clone)]
pub struct Postorder<'t> {
    // The flag records whether the node's children were already pushed.
    stack: Vec<(Symbol<'t>, bool)>,
}

impl<'t> Iterator for Postorder<'t> {
    type Item = Symbol<'t>;

    fn next(&mut self) -> Option<Symbol<'t>> {
        loop {
            let (symbol, expanded) = self.stack.pop()?;
            match symbol {
                Symbol::Node(node) if !expanded => {
                    self.stack.push((symbol, true));
                    self.stack
                        .extend(node.present_children().rev().map(|child| (child, false)));
                }
                Symbol::Node(_) | Symbol::Leaf(_) => return Some(symbol),
            }
        }
    }
}

impl<'t> Symbol<'t> {
    /// This symbol and all its descendants, parents first.
    pub fn preorder(self) -> Preorder<'t> {
        Preorder { stack: vec![self] }
    }

    /// This symbol and all its descendants, children first.
    pub fn postorder(self) -> Postorder<'t> {
        Postorder {
            stack: vec![(self, false)],
        }
    }

    /// Proper descendants in pre-order (excludes `self`).
    pub fn descendants(self) -> Preorder<'t> {
        let mut walk = self.preorder();
        walk.next();
        walk
    }

    /// First leaf in source order, if the subtree has any.
    pub fn leftmost_leaf(self) -> Option<LeafRef<'t>> {
        self.preorder().find_map(Symbol::as_leaf)
    }

    /// Last leaf in source order, if the subtree has any.
    pub fn rightmost_leaf(self) -> Option<LeafRef<'t>> {
        // Mirrored pre-order: the last child is popped first.
        let mut stack = vec![self];
        while let Some(symbol) = stack.pop() {
            match symbol {
                Symbol::Leaf(leaf) => return Some(leaf),
                Symbol::Node(node) => stack.extend(node.present_children()),
            }
        }
        None
    }

    /// Byte range from the leftmost leaf's start to the rightmost leaf's end.
    pub fn text_range(self) -> Option<TextRange> {
        let left = self.leftmost_leaf()?.range();
        let right = self.rightmost_leaf()?.range();
        Some(left.cover(right))
    }

    /// Follow nodes that have exactly one present child.
    pub fn descend_through_singletons(self) -> Symbol<'t> {
        let mut current = self;
        while let Symbol::Node(node) = current {
            let mut children = node.present_children();
            match (children.next(), children.next()) {
                (Some(only), None) => current = only,
                _ => break,
            }
        }
        current
    }
}

impl<'t> NodeRef<'t> {
    pub fn preorder(self) -> Preorder<'t> {
        self.symbol().preorder()
    }

    pub fn postorder(self) -> Postorder<'t> {
        self.symbol().postorder()
    }

    pub fn text_range(self) -> Option<TextRange> {
        self.symbol().text_range()
    }
}
