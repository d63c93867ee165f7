//! Site extraction: which tree shapes declare or reference names
//!
//! Extraction is table-driven. Each row pairs a node kind with a matcher that
//! binds the name leaf as [`NAME`] and a [`Role`] saying what the site means.
//! A node kind may have several rows; they are tried in table order.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use tracing::error;

use super::schema::{EdgeKind, EntityKind, Subkind};
use crate::matcher::verilog::{class_name, function_name, macro_call_id, module_name, task_name};
use crate::matcher::{
    Matcher, Query, Step, any, child, has_child, leaf, node, path_to, unwrap_identifier,
};
use crate::syntax::{LeafRef, NodeKind, NodeRef, TokenKind};

/// Binding name every extraction matcher uses for the name leaf.
pub const NAME: &str = "name";

/// What an extracted site means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Declares an entity.
    Declares(Declaration),
    /// Refers to an entity through an edge of this kind.
    References(EdgeKind),
    /// A header port: declares a variable once an earlier port in the same
    /// list carried a direction or type, otherwise refers to a body port.
    Port,
    /// Names the base class of the enclosing class.
    Extends,
    /// Repeats the name of the enclosing declaration after its end keyword.
    EndLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Declaration {
    pub kind: EntityKind,
    pub subkind: Option<Subkind>,
    /// Names declared inside this entity are scoped under it.
    pub opens_scope: bool,
    /// Signature includes the enclosing scope; otherwise file-global.
    pub scoped: bool,
}

impl Declaration {
    pub(crate) const fn scope(kind: EntityKind, subkind: Option<Subkind>) -> Self {
        Self {
            kind,
            subkind,
            opens_scope: true,
            scoped: true,
        }
    }

    pub(crate) const fn member(kind: EntityKind) -> Self {
        Self {
            kind,
            subkind: None,
            opens_scope: false,
            scoped: true,
        }
    }

    pub(crate) const fn global(kind: EntityKind) -> Self {
        Self {
            kind,
            subkind: None,
            opens_scope: false,
            scoped: false,
        }
    }
}

pub(crate) struct Rule {
    pub(crate) query: Query,
    pub(crate) role: Role,
}

impl Rule {
    /// Name leaf of the site at `node`, if this rule applies there.
    pub(crate) fn name_leaf<'t>(&self, node: NodeRef<'t>) -> Option<LeafRef<'t>> {
        self.query.matches(node.symbol())?.leaf(NAME)
    }
}

fn name() -> Matcher {
    any().bind(NAME)
}

fn identifier() -> Matcher {
    leaf(TokenKind::SYMBOL_IDENTIFIER).bind(NAME)
}

/// `kUnqualifiedId > SymbolIdentifier` as a direct child.
fn unqualified_child() -> Matcher {
    path_to(
        [Step::from(NodeKind::UNQUALIFIED_ID), TokenKind::SYMBOL_IDENTIFIER.into()],
        name(),
    )
}

/// Some direct child is, or wraps, the name: `a` or `kUnqualifiedId > a`.
fn named_child() -> Matcher {
    has_child(unwrap_identifier(name()))
}

/// The extraction table, in application order.
pub fn extraction_table() -> Vec<(NodeKind, Matcher, Role)> {
    use EntityKind::*;
    use Role::*;

    vec![
        // Declarations
        (
            NodeKind::MODULE_DECLARATION,
            module_name(name()),
            Declares(Declaration::scope(Record, Some(Subkind::Module))),
        ),
        (
            NodeKind::PROGRAM_DECLARATION,
            module_name(name()),
            Declares(Declaration::scope(Record, Some(Subkind::Program))),
        ),
        (
            NodeKind::INTERFACE_DECLARATION,
            module_name(name()),
            Declares(Declaration::scope(Interface, None)),
        ),
        (
            NodeKind::PACKAGE_DECLARATION,
            has_child(identifier()),
            Declares(Declaration::scope(Package, None)),
        ),
        (
            NodeKind::CLASS_DECLARATION,
            class_name(name()),
            Declares(Declaration::scope(Record, Some(Subkind::Class))),
        ),
        (
            NodeKind::FUNCTION_DECLARATION,
            function_name(name()),
            Declares(Declaration::scope(Function, None)),
        ),
        (
            NodeKind::FUNCTION_PROTOTYPE,
            function_name(name()),
            Declares(Declaration::member(Function)),
        ),
        (
            NodeKind::TASK_DECLARATION,
            task_name(name()),
            Declares(Declaration::scope(Function, None)),
        ),
        (
            NodeKind::TASK_PROTOTYPE,
            task_name(name()),
            Declares(Declaration::member(Function)),
        ),
        (
            NodeKind::PREPROCESSOR_DEFINE,
            has_child(leaf(TokenKind::PP_IDENTIFIER).bind(NAME)),
            Declares(Declaration::global(Macro)),
        ),
        (
            NodeKind::CLASS_CONSTRUCTOR,
            has_child(leaf(TokenKind::NEW_KW).bind(NAME)),
            Declares(Declaration::scope(Function, Some(Subkind::Constructor))),
        ),
        (
            NodeKind::CLASS_CONSTRUCTOR,
            path_to(
                [Step::from(NodeKind::CLASS_CONSTRUCTOR_PROTOTYPE), TokenKind::NEW_KW.into()],
                name(),
            ),
            Declares(Declaration::scope(Function, Some(Subkind::Constructor))),
        ),
        (
            NodeKind::CLASS_CONSTRUCTOR_PROTOTYPE,
            has_child(leaf(TokenKind::NEW_KW).bind(NAME)),
            Declares(Declaration {
                subkind: Some(Subkind::Constructor),
                ..Declaration::member(Function)
            }),
        ),
        (
            NodeKind::TYPE_DECLARATION,
            has_child(identifier()),
            Declares(Declaration::scope(TypeAlias, None)),
        ),
        (
            NodeKind::TYPE_ASSIGNMENT,
            child(0, identifier()),
            Declares(Declaration::member(TypeAlias)),
        ),
        (
            NodeKind::PARAM_DECLARATION,
            path_to(
                [Step::from(NodeKind::PARAM_TYPE), TokenKind::SYMBOL_IDENTIFIER.into()],
                name(),
            ),
            Declares(Declaration::member(Constant)),
        ),
        (
            NodeKind::ENUM_NAME,
            child(0, identifier()),
            Declares(Declaration::member(Constant)),
        ),
        (
            NodeKind::REGISTER_VARIABLE,
            child(0, identifier()),
            Declares(Declaration::member(Variable)),
        ),
        (
            NodeKind::VARIABLE_DECLARATION_ASSIGNMENT,
            child(0, identifier()),
            Declares(Declaration::member(Variable)),
        ),
        (
            NodeKind::GATE_INSTANCE,
            child(0, identifier()),
            Declares(Declaration::member(Variable)),
        ),
        (
            NodeKind::NET_VARIABLE,
            child(0, identifier()),
            Declares(Declaration::member(Variable)),
        ),
        (
            NodeKind::NET_DECLARATION_ASSIGNMENT,
            child(0, identifier()),
            Declares(Declaration::member(Variable)),
        ),
        (
            NodeKind::FOR_INITIALIZATION,
            has_child(identifier()),
            Declares(Declaration::member(Variable)),
        ),
        (
            NodeKind::DATA_TYPE_IMPLICIT_ID_DIMENSIONS,
            has_child(identifier()),
            Declares(Declaration::member(Variable)),
        ),
        // Ports
        (
            NodeKind::PORT_DECLARATION,
            named_child(),
            Declares(Declaration::member(Variable)),
        ),
        (
            NodeKind::PORT,
            path_to(
                [
                    Step::from(NodeKind::PORT_REFERENCE),
                    NodeKind::UNQUALIFIED_ID.into(),
                    TokenKind::SYMBOL_IDENTIFIER.into(),
                ],
                name(),
            ),
            Port,
        ),
        (
            NodeKind::IDENTIFIER_UNPACKED_DIMENSIONS,
            child(0, identifier()),
            Declares(Declaration::member(Variable)),
        ),
        (
            NodeKind::PORT_ITEM,
            path_to(
                [Step::from(NodeKind::DATA_TYPE_IMPLICIT_BASIC_ID_DIMENSIONS)],
                named_child(),
            ),
            Declares(Declaration::member(Variable)),
        ),
        (
            NodeKind::PORT_ITEM,
            named_child(),
            Declares(Declaration::member(Variable)),
        ),
        (
            NodeKind::TF_VARIABLE_IDENTIFIER,
            child(0, identifier()),
            Declares(Declaration::member(Variable)),
        ),
        // References
        (
            NodeKind::FUNCTION_CALL,
            path_to(
                [
                    Step::from(NodeKind::LOCAL_ROOT),
                    NodeKind::UNQUALIFIED_ID.into(),
                    TokenKind::SYMBOL_IDENTIFIER.into(),
                ],
                name(),
            ),
            References(EdgeKind::RefCall),
        ),
        (
            NodeKind::METHOD_CALL_EXTENSION,
            unqualified_child(),
            References(EdgeKind::RefCall),
        ),
        (
            NodeKind::MACRO_CALL,
            macro_call_id(name()),
            References(EdgeKind::RefExpands),
        ),
        (
            NodeKind::PREPROCESSOR_INCLUDE,
            has_child(leaf(TokenKind::STRING_LITERAL).bind(NAME)),
            References(EdgeKind::RefIncludes),
        ),
        (
            NodeKind::PACKAGE_IMPORT_ITEM,
            child(0, identifier()),
            References(EdgeKind::RefImports),
        ),
        (
            NodeKind::PACKAGE_IMPORT_ITEM,
            child(2, identifier()),
            References(EdgeKind::Ref),
        ),
        (
            NodeKind::ACTUAL_NAMED_PORT,
            child(1, identifier()),
            References(EdgeKind::Ref),
        ),
        (
            NodeKind::PARAM_BY_NAME,
            child(1, identifier()),
            References(EdgeKind::Ref),
        ),
        (
            NodeKind::HIERARCHY_EXTENSION,
            unqualified_child(),
            References(EdgeKind::Ref),
        ),
        (NodeKind::EXTENDS_LIST, unqualified_child(), Extends),
        (NodeKind::EXTENDS_LIST, has_child(identifier()), Extends),
        (NodeKind::LABEL, child(1, identifier()), EndLabel),
        (
            NodeKind::UNQUALIFIED_ID,
            child(0, identifier()),
            References(EdgeKind::Ref),
        ),
    ]
}

static RULES: LazyLock<FxHashMap<NodeKind, Vec<Rule>>> = LazyLock::new(|| {
    let mut rules: FxHashMap<NodeKind, Vec<Rule>> = FxHashMap::default();
    for (kind, matcher, role) in extraction_table() {
        match Query::new(node(kind).and(matcher)) {
            Ok(query) => rules.entry(kind).or_default().push(Rule { query, role }),
            Err(err) => error!(kind = %kind, %err, "invalid extraction rule dropped"),
        }
    }
    rules
});

/// Rules for nodes of `kind`, in table order.
pub(crate) fn rules_for(kind: NodeKind) -> &'static [Rule] {
    RULES.get(&kind).map(Vec::as_slice).unwrap_or_default()
}
