//! Kythe schema vocabulary
//!
//! The literal strings here are an external interface: consumers match on
//! them byte for byte, so changing one is a breaking change.

/// Language tag carried in every semantic VName.
pub const LANGUAGE: &str = "verilog";

// ============================================================================
// FACT NAMES
// ============================================================================

pub const FACT_NODE_KIND: &str = "/kythe/node/kind";
pub const FACT_SUBKIND: &str = "/kythe/subkind";
pub const FACT_COMPLETE: &str = "/kythe/complete";
pub const FACT_TEXT: &str = "/kythe/text";
pub const FACT_LOC_START: &str = "/kythe/loc/start";
pub const FACT_LOC_END: &str = "/kythe/loc/end";

/// Fact name used on edge entries, which carry no value.
pub const EDGE_FACT_NAME: &str = "/";

/// Value of [`FACT_COMPLETE`] on definitions.
pub const COMPLETE_DEFINITION: &str = "definition";

// ============================================================================
// NODE KINDS
// ============================================================================

/// Value of [`FACT_NODE_KIND`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    File,
    Anchor,
    /// Modules, programs and classes.
    Record,
    Interface,
    Package,
    Variable,
    Function,
    Macro,
    Constant,
    TypeAlias,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::File => "file",
            EntityKind::Anchor => "anchor",
            EntityKind::Record => "record",
            EntityKind::Interface => "interface",
            EntityKind::Package => "package",
            EntityKind::Variable => "variable",
            EntityKind::Function => "function",
            EntityKind::Macro => "macro",
            EntityKind::Constant => "constant",
            EntityKind::TypeAlias => "talias",
        }
    }
}

/// Value of [`FACT_SUBKIND`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Subkind {
    Module,
    Program,
    Class,
    /// Class constructor (`function new`).
    Constructor,
}

impl Subkind {
    pub fn as_str(self) -> &'static str {
        match self {
            Subkind::Module => "module",
            Subkind::Program => "program",
            Subkind::Class => "class",
            Subkind::Constructor => "constructor",
        }
    }
}

// ============================================================================
// EDGE KINDS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EdgeKind {
    /// Anchor → the entity it declares.
    DefinesBinding,
    /// Anchor → the entity it names.
    Ref,
    /// Anchor → the function or task it calls.
    RefCall,
    /// Anchor → the package it imports.
    RefImports,
    /// Anchor → the macro it expands.
    RefExpands,
    /// Anchor → the file it includes.
    RefIncludes,
    /// Entity → its enclosing entity.
    ChildOf,
    /// Class → its base class.
    Extends,
    /// Out-of-line definition → the prototype it implements.
    Overrides,
}

impl EdgeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeKind::DefinesBinding => "/kythe/edge/defines/binding",
            EdgeKind::Ref => "/kythe/edge/ref",
            EdgeKind::RefCall => "/kythe/edge/ref/call",
            EdgeKind::RefImports => "/kythe/edge/ref/imports",
            EdgeKind::RefExpands => "/kythe/edge/ref/expands",
            EdgeKind::RefIncludes => "/kythe/edge/ref/includes",
            EdgeKind::ChildOf => "/kythe/edge/childof",
            EdgeKind::Extends => "/kythe/edge/extends",
            EdgeKind::Overrides => "/kythe/edge/overrides",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
