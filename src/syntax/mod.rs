//! Syntax layer: kind taxonomy and the concrete syntax tree
//!
//! - [`TokenKind`] / [`NodeKind`] - lexical and grammar kinds with total stringification
//! - [`SyntaxTree`] - arena-backed, read-only CST for one file
//! - [`TreeBuilder`] - append-only construction API for the external parser
//! - [`Preorder`] / [`Postorder`] - deterministic walkers
//!
//! Depends only on [`crate::base`].

mod builder;
pub mod node_kind;
pub mod token_kind;
mod tree;
mod walk;

pub use builder::{TreeBuilder, TreeError};
pub use node_kind::{NodeKind, UNKNOWN_NODE_PREFIX, is_preprocessing_node, node_kind_name};
pub use token_kind::{TokenClass, TokenKind, UNKNOWN_TOKEN_PREFIX, token_kind_name};
pub use tree::{Leaf, LeafId, LeafRef, NodeId, NodeRef, Symbol, SymbolId, SyntaxTree};
pub use walk::{Postorder, Preorder};
