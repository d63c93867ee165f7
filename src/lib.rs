//! # hdlkit-base
//!
//! Core library for SystemVerilog concrete syntax trees, tree matching, and
//! cross-reference fact emission.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! index     → Kythe-style fact emission (anchors, nodes, edges)
//!   ↓
//! matcher   → Composable tree predicates, lazy pre/post-order search
//!   ↓
//! syntax    → Token/node kind taxonomy, arena-backed CST, tree builder
//!   ↓
//! base      → Primitives (TextRange, TextSize, LineIndex, Position)
//! ```
//!
//! Lexing and parsing are not part of this crate: an external parser feeds
//! tokens and grammar productions into [`syntax::TreeBuilder`].

// ============================================================================
// MODULES (dependency order: base → syntax → matcher → index)
// ============================================================================

/// Foundation types: TextRange, LineIndex, Position
pub mod base;

/// Syntax: kind taxonomy, arena CST, builder, walkers
pub mod syntax;

/// Matcher: composable predicates and traversal over the CST
pub mod matcher;

/// Index: deterministic cross-reference fact emission
pub mod index;

// Re-export foundation types
pub use base::{LineIndex, Position, Span, TextRange, TextSize};

// Re-export the types most callers need
pub use syntax::{NodeKind, Symbol, SymbolId, SyntaxTree, TokenKind, TreeBuilder};
