//! Data-quality reporting during fact emission.
//!
//! Malformed input never aborts an emission. Each problem becomes a
//! [`Diagnostic`] carrying enough context (file, byte offset, raw kind code)
//! to locate it and, for unknown kinds, to request a taxonomy update.

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::{LineIndex, Position, TextRange, TextSize};
use crate::syntax::{NodeKind, TokenKind};

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// A fact was dropped.
    Error,
    /// Output is complete but something looked unfamiliar.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Path of the file being indexed.
    pub file: SmolStr,
    /// Byte offset the problem was found at.
    pub offset: TextSize,
    /// Line/column of `offset` (0-indexed).
    pub position: Position,
    pub severity: Severity,
    /// Diagnostic code (e.g., "E0101").
    pub code: Option<Arc<str>>,
    pub message: Arc<str>,
}

impl Diagnostic {
    pub fn error(file: impl Into<SmolStr>, offset: TextSize, position: Position, message: impl Into<Arc<str>>) -> Self {
        Self {
            file: file.into(),
            offset,
            position,
            severity: Severity::Error,
            code: None,
            message: message.into(),
        }
    }

    pub fn warning(file: impl Into<SmolStr>, offset: TextSize, position: Position, message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(file, offset, position, message)
        }
    }

    /// Set the diagnostic code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.position, self.severity)?;
        if let Some(code) = &self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Diagnostic codes for emission problems.
///
/// - **E0101-E0199**: a fact was skipped
/// - **W0101-W0199**: unfamiliar input, output unaffected
pub mod codes {
    /// Anchor range ends past the end of the file.
    pub const ANCHOR_OUT_OF_BOUNDS: &str = "E0101";
    /// Anchor range is empty.
    pub const EMPTY_ANCHOR: &str = "E0102";

    /// Node kind is not in the taxonomy.
    pub const UNKNOWN_NODE_KIND: &str = "W0101";
    /// Token kind is not in the taxonomy.
    pub const UNKNOWN_TOKEN_KIND: &str = "W0102";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics for one file.
#[derive(Clone, Debug)]
pub struct DiagnosticCollector<'a> {
    file: SmolStr,
    lines: &'a LineIndex,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> DiagnosticCollector<'a> {
    pub fn new(file: impl Into<SmolStr>, lines: &'a LineIndex) -> Self {
        Self {
            file: file.into(),
            lines,
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(
            file = %diagnostic.file,
            offset = u32::from(diagnostic.offset),
            code = diagnostic.code().unwrap_or_default(),
            "{}",
            diagnostic.message
        );
        self.diagnostics.push(diagnostic);
    }

    fn error_at(&self, offset: TextSize, message: String) -> Diagnostic {
        Diagnostic::error(self.file.clone(), offset, self.lines.position(offset), message)
    }

    fn warning_at(&self, offset: TextSize, message: String) -> Diagnostic {
        Diagnostic::warning(self.file.clone(), offset, self.lines.position(offset), message)
    }

    /// An anchor that does not fit in the file was skipped.
    pub fn anchor_out_of_bounds(&mut self, range: TextRange, text: &str) {
        let diagnostic = self
            .error_at(
                range.start(),
                format!(
                    "anchor {:?} for '{}' is outside the file (length {}); fact skipped",
                    range,
                    text,
                    u32::from(self.lines.len())
                ),
            )
            .with_code(codes::ANCHOR_OUT_OF_BOUNDS);
        self.add(diagnostic);
    }

    /// An empty anchor was skipped.
    pub fn empty_anchor(&mut self, range: TextRange, text: &str) {
        let diagnostic = self
            .error_at(
                range.start(),
                format!("anchor {range:?} for '{text}' is empty; fact skipped"),
            )
            .with_code(codes::EMPTY_ANCHOR);
        self.add(diagnostic);
    }

    pub fn unknown_node_kind(&mut self, kind: NodeKind, offset: TextSize) {
        let diagnostic = self
            .warning_at(
                offset,
                format!("{} (raw code {}) is not in the taxonomy", kind.name(), kind.raw()),
            )
            .with_code(codes::UNKNOWN_NODE_KIND);
        self.add(diagnostic);
    }

    pub fn unknown_token_kind(&mut self, kind: TokenKind, offset: TextSize) {
        let diagnostic = self
            .warning_at(
                offset,
                format!("{} (raw code {}) is not in the taxonomy", kind.name(), kind.raw()),
            )
            .with_code(codes::UNKNOWN_TOKEN_KIND);
        self.add(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Consume the collector and return all diagnostics.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
