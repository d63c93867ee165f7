//! Semantic fact emission
//!
//! Turns a [`SyntaxTree`](crate::syntax::SyntaxTree) into a set of
//! Kythe-style index facts: file and entity nodes, anchors over name tokens,
//! and edges between them.
//!
//! - [`extract`] - which tree shapes are declarations and references
//! - [`Emitter`] - one pass over one file, producing [`FileFacts`]
//! - [`SymbolResolver`] - externally supplied name resolution
//! - [`emit_all`] - parallel emission of many files into a [`FactSink`]
//!
//! Malformed input (anchors outside the file, unknown kinds) is reported as
//! [`Diagnostic`]s and never aborts a file.

mod diagnostics;
mod emitter;
pub mod extract;
mod facts;
#[cfg(feature = "json")]
mod json;
mod resolve;
pub mod schema;
mod sink;
mod vname;

pub use diagnostics::{Diagnostic, DiagnosticCollector, Severity, codes};
pub use emitter::{EmitError, EmitOptions, Emitter, emit, emit_unresolved};
pub use extract::{Declaration, NAME, Role, extraction_table};
pub use facts::{Entry, FileFacts, IndexFact};
#[cfg(feature = "json")]
pub use json::{JsonSink, write_entries};
pub use resolve::{ResolutionMap, Site, SymbolResolver, Unresolved};
pub use schema::{EdgeKind, EntityKind, Subkind};
pub use sink::{EmitJob, EmitSummary, FactSink, MemorySink, emit_all};
pub use vname::{FileIdentity, Signature, VName};
