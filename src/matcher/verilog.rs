//! Ready-made matchers for common SystemVerilog tree shapes
//!
//! Each function returns an unbound [`Matcher`] meant to be composed with a
//! node matcher for the enclosing construct, e.g.
//! `node(NodeKind::FUNCTION_CALL).and(function_call_has_id().bind("name"))`.

use super::pattern::{Matcher, Step, has_child, path, path_to, unwrap_identifier};
use crate::syntax::{NodeKind, TokenKind};

/// The identifier leaf of an unqualified reference: `foo` in `x = foo();`.
pub fn unqualified_reference_has_id() -> Matcher {
    path([
        Step::from(NodeKind::LOCAL_ROOT),
        NodeKind::UNQUALIFIED_ID.into(),
        TokenKind::SYMBOL_IDENTIFIER.into(),
    ])
}

/// Same shape as [`unqualified_reference_has_id`], named for call sites.
pub fn function_call_has_id() -> Matcher {
    unqualified_reference_has_id()
}

/// A call that is qualified: `pkg::f()`.
pub fn function_call_is_qualified() -> Matcher {
    path([Step::from(NodeKind::LOCAL_ROOT), NodeKind::QUALIFIED_ID.into()])
}

/// Argument list of a call: `(a, b)` in `f(a, b)`.
pub fn function_call_arguments() -> Matcher {
    path([Step::from(NodeKind::PAREN_GROUP), NodeKind::ARGUMENT_LIST.into()])
}

/// A top-level call inside an expression: `foo()` in `x = foo();`.
pub fn expression_has_function_call() -> Matcher {
    path([
        Step::from(NodeKind::REFERENCE_CALL_BASE),
        NodeKind::FUNCTION_CALL.into(),
    ])
}

/// `obj.randomize()` inside an expression.
pub fn expression_has_randomize_call_extension() -> Matcher {
    path([
        Step::from(NodeKind::REFERENCE_CALL_BASE),
        NodeKind::RANDOMIZE_METHOD_CALL_EXTENSION.into(),
    ])
}

/// `randomize(obj)` inside an expression.
pub fn expression_has_randomize_function() -> Matcher {
    path([Step::from(NodeKind::RANDOMIZE_FUNCTION_CALL)])
}

/// Right-hand side that is a call: `bar(...)`, `zz.bar(...)`, `zz::bar(...)`.
pub fn rvalue_is_function_call() -> Matcher {
    path([
        Step::from(NodeKind::EXPRESSION),
        NodeKind::REFERENCE_CALL_BASE.into(),
        NodeKind::FUNCTION_CALL.into(),
    ])
}

/// The expression inside a `void'(...)` cast.
pub fn voidcast_has_expression() -> Matcher {
    path([Step::from(NodeKind::PAREN_GROUP), NodeKind::EXPRESSION.into()])
}

/// Positional parameter list: `foo #(1, 2) bar;`.
pub fn actual_parameter_list_has_positional_list() -> Matcher {
    path([
        Step::from(NodeKind::PAREN_GROUP),
        NodeKind::ACTUAL_PARAMETER_POSITIONAL_LIST.into(),
    ])
}

/// Port list of a gate or module instance: `bar(port1, port2)`.
pub fn gate_instance_has_port_list() -> Matcher {
    path([Step::from(NodeKind::PAREN_GROUP), NodeKind::PORT_ACTUAL_LIST.into()])
}

/// Label of a `begin : name` block.
pub fn has_begin_label() -> Matcher {
    path([Step::from(NodeKind::BEGIN), NodeKind::LABEL.into()])
}

/// `always @*`.
pub fn always_statement_has_event_control_star() -> Matcher {
    path([
        Step::from(NodeKind::PROCEDURAL_TIMING_CONTROL_STATEMENT),
        NodeKind::EVENT_CONTROL.into(),
        TokenKind::char(b'*').into(),
    ])
}

/// Plain `always` (not `always_ff`/`always_comb`/`always_latch`).
pub fn always_keyword() -> Matcher {
    path([Step::from(TokenKind::ALWAYS_KW)])
}

pub fn always_comb_keyword() -> Matcher {
    path([Step::from(TokenKind::ALWAYS_COMB_KW)])
}

pub fn always_ff_keyword() -> Matcher {
    path([Step::from(TokenKind::ALWAYS_FF_KW)])
}

pub fn string_literal_keyword() -> Matcher {
    path([Step::from(TokenKind::STRING_LITERAL)])
}

/// Legacy `generate begin ... end` block.
pub fn has_generate_block() -> Matcher {
    path([
        Step::from(NodeKind::GENERATE_ITEM_LIST),
        NodeKind::GENERATE_BLOCK.into(),
    ])
}

/// `default:` item of a case statement.
pub fn has_default_case() -> Matcher {
    path([Step::from(NodeKind::DEFAULT_ITEM)])
}

/// Packed or unpacked dimension ranges of a declaration.
pub fn declaration_dimensions_has_ranges() -> Matcher {
    path([Step::from(NodeKind::DIMENSION_RANGE)])
}

/// Decimal width of a based number: `32` in `32'h0`.
pub fn number_has_constant_width() -> Matcher {
    path([Step::from(TokenKind::DEC_NUMBER)])
}

pub fn number_is_binary() -> Matcher {
    path([Step::from(TokenKind::BIN_BASE)])
}

pub fn number_has_binary_digits() -> Matcher {
    path([Step::from(TokenKind::BIN_DIGITS)])
}

pub fn number_has_based_literal() -> Matcher {
    path([Step::from(NodeKind::BASE_DIGITS)])
}

// ============================================================================
// DECLARATION NAMES
// ============================================================================

/// Name leaf of a module, interface or program header, tested with `inner`.
///
/// `node(NodeKind::MODULE_DECLARATION).and(module_name(any().bind("name")))`
/// binds the identifier leaf as `name`.
pub fn module_name(inner: Matcher) -> Matcher {
    header_name(NodeKind::MODULE_HEADER, inner)
}

pub fn class_name(inner: Matcher) -> Matcher {
    header_name(NodeKind::CLASS_HEADER, inner)
}

/// Name leaf of a function header. The name sits under an unqualified id,
/// or a qualified one for out-of-class bodies (`function void C::f();`),
/// whose last part is the leaf tested.
pub fn function_name(inner: Matcher) -> Matcher {
    header_id(NodeKind::FUNCTION_HEADER, inner)
}

pub fn task_name(inner: Matcher) -> Matcher {
    header_id(NodeKind::TASK_HEADER, inner)
}

/// Macro name leaf of a macro call: `` `FOO `` in `` `FOO(a) ``.
pub fn macro_call_id(inner: Matcher) -> Matcher {
    path_to([Step::from(TokenKind::MACRO_CALL_ID)], inner)
}

fn header_name(header: NodeKind, inner: Matcher) -> Matcher {
    path_to(
        [Step::from(header), TokenKind::SYMBOL_IDENTIFIER.into()],
        inner,
    )
}

fn header_id(header: NodeKind, inner: Matcher) -> Matcher {
    path_to(
        [Step::from(header)],
        has_child(unwrap_identifier(inner)),
    )
}
