//! Lexical token kinds for SystemVerilog
//!
//! A [`TokenKind`] is an opaque 16-bit code delivered by the external lexer.
//! The code space is laid out the way parser generators number terminals:
//!
//! ```text
//! 0          end of file
//! 1..=255    single-character literal tokens (';', '(', ...)
//! 256        error token
//! 257..      named keyword/operator/literal kinds (table below)
//! ```
//!
//! Stringification is total: codes that are not in the table never fail,
//! they render a fallback embedding the raw code.

use std::borrow::Cow;
use std::fmt;

/// Prefix of the fallback rendering for unregistered token codes.
pub const UNKNOWN_TOKEN_PREFIX: &str = "unregistered token kind #";

/// First code assigned to a named token kind.
const FIRST_NAMED: u16 = 257;

/// Broad lexical category of a named token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenClass {
    /// Reserved words (`module`, `always_ff`, ...)
    Keyword,
    /// Identifiers of any flavor (simple, escaped, system, macro)
    Identifier,
    /// Numbers, strings, time literals
    Literal,
    /// Multi-character operators and punctuation
    Operator,
    /// Compiler directives (`` `define ``, `` `ifdef ``, ...)
    Preprocessor,
    /// Whitespace and comments
    Trivia,
    /// Single characters, EOF, error, and anything unregistered
    Other,
}

/// A lexical token kind.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenKind(u16);

struct TokenKindInfo {
    name: &'static str,
    class: TokenClass,
}

macro_rules! token_kinds {
    ($($konst:ident => ($name:literal, $class:ident),)*) => {
        #[allow(non_camel_case_types, dead_code, clippy::upper_case_acronyms)]
        #[repr(u16)]
        enum Ordinal {
            __FIRST = FIRST_NAMED - 1,
            $($konst,)*
        }

        impl TokenKind {
            $(pub const $konst: TokenKind = TokenKind(Ordinal::$konst as u16);)*
        }

        static NAMED_TOKENS: &[TokenKindInfo] = &[
            $(TokenKindInfo { name: $name, class: TokenClass::$class },)*
        ];
    };
}

token_kinds! {
    // =========================================================================
    // IDENTIFIERS
    // =========================================================================
    SYMBOL_IDENTIFIER => ("SymbolIdentifier", Identifier),
    ESCAPED_IDENTIFIER => ("EscapedIdentifier", Identifier),
    SYSTEM_TF_IDENTIFIER => ("SystemTFIdentifier", Identifier),
    MACRO_IDENTIFIER => ("MacroIdentifier", Identifier),
    MACRO_CALL_ID => ("MacroCallId", Identifier),
    MACRO_ID_ITEM => ("MacroIdItem", Identifier),
    PP_IDENTIFIER => ("PP_Identifier", Identifier),

    // =========================================================================
    // LITERALS
    // =========================================================================
    DEC_NUMBER => ("TK_DecNumber", Literal),
    REAL_TIME => ("TK_RealTime", Literal),
    TIME_LITERAL => ("TK_TimeLiteral", Literal),
    DEC_BASE => ("TK_DecBase", Literal),
    BIN_BASE => ("TK_BinBase", Literal),
    OCT_BASE => ("TK_OctBase", Literal),
    HEX_BASE => ("TK_HexBase", Literal),
    DEC_DIGITS => ("TK_DecDigits", Literal),
    BIN_DIGITS => ("TK_BinDigits", Literal),
    OCT_DIGITS => ("TK_OctDigits", Literal),
    HEX_DIGITS => ("TK_HexDigits", Literal),
    UNBASED_NUMBER => ("TK_UnBasedNumber", Literal),
    STRING_LITERAL => ("TK_StringLiteral", Literal),
    EVAL_STRING_LITERAL => ("TK_EvalStringLiteral", Literal),

    // =========================================================================
    // TRIVIA
    // =========================================================================
    SPACE => ("TK_SPACE", Trivia),
    NEWLINE => ("TK_NEWLINE", Trivia),
    LINE_CONT => ("TK_LINE_CONT", Trivia),
    EOL_COMMENT => ("TK_EOL_COMMENT", Trivia),
    COMMENT_BLOCK => ("TK_COMMENT_BLOCK", Trivia),
    ATTRIBUTE => ("TK_ATTRIBUTE", Trivia),

    // =========================================================================
    // PREPROCESSOR
    // =========================================================================
    PP_INCLUDE => ("`include", Preprocessor),
    PP_DEFINE => ("`define", Preprocessor),
    PP_DEFINE_BODY => ("PP_define_body", Preprocessor),
    PP_IFDEF => ("`ifdef", Preprocessor),
    PP_IFNDEF => ("`ifndef", Preprocessor),
    PP_ELSIF => ("`elsif", Preprocessor),
    PP_ELSE => ("`else", Preprocessor),
    PP_ENDIF => ("`endif", Preprocessor),
    PP_UNDEF => ("`undef", Preprocessor),
    PP_DEFAULT_TEXT => ("PP_default_text", Preprocessor),
    DR_TIMESCALE => ("`timescale", Preprocessor),
    DR_RESETALL => ("`resetall", Preprocessor),
    DR_CELLDEFINE => ("`celldefine", Preprocessor),
    DR_ENDCELLDEFINE => ("`endcelldefine", Preprocessor),
    DR_DEFAULT_NETTYPE => ("`default_nettype", Preprocessor),
    DR_PRAGMA => ("`pragma", Preprocessor),
    DR_BEGIN_KEYWORDS => ("`begin_keywords", Preprocessor),
    DR_END_KEYWORDS => ("`end_keywords", Preprocessor),

    // =========================================================================
    // OPERATORS
    // =========================================================================
    LOGEQ => ("==", Operator),
    LOGNEQ => ("!=", Operator),
    CASE_EQ => ("===", Operator),
    CASE_NEQ => ("!==", Operator),
    WILDCARD_EQ => ("==?", Operator),
    WILDCARD_NEQ => ("!=?", Operator),
    LE => ("<=", Operator),
    GE => (">=", Operator),
    LAND => ("&&", Operator),
    LOR => ("||", Operator),
    TRIPLE_AND => ("&&&", Operator),
    NAND => ("~&", Operator),
    NOR => ("~|", Operator),
    NXOR => ("~^", Operator),
    LSHIFT => ("<<", Operator),
    RSHIFT => (">>", Operator),
    ALSHIFT => ("<<<", Operator),
    ARSHIFT => (">>>", Operator),
    POW => ("**", Operator),
    INCR => ("++", Operator),
    DECR => ("--", Operator),
    PLUS_EQ => ("+=", Operator),
    MINUS_EQ => ("-=", Operator),
    MUL_EQ => ("*=", Operator),
    DIV_EQ => ("/=", Operator),
    MOD_EQ => ("%=", Operator),
    AND_EQ => ("&=", Operator),
    OR_EQ => ("|=", Operator),
    XOR_EQ => ("^=", Operator),
    LS_EQ => ("<<=", Operator),
    RS_EQ => (">>=", Operator),
    RSS_EQ => (">>>=", Operator),
    LOGICAL_IMPLIES => ("->", Operator),
    LOGICAL_EQUIV => ("<->", Operator),
    NONBLOCKING_TRIGGER => ("->>", Operator),
    SCOPE_RES => ("::", Operator),
    COLON_EQ => (":=", Operator),
    COLON_DIV => (":/", Operator),
    POUNDPOUND => ("##", Operator),
    PIPE_ARROW => ("|->", Operator),
    PIPE_ARROW2 => ("|=>", Operator),
    EQ_GT => ("=>", Operator),
    STAR_GT => ("*>", Operator),
    PLUS_COLON => ("+:", Operator),
    MINUS_COLON => ("-:", Operator),
    DOT_STAR => (".*", Operator),
    TICK_BRACE => ("'{", Operator),

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    ALIAS_KW => ("alias", Keyword),
    ALWAYS_KW => ("always", Keyword),
    ALWAYS_COMB_KW => ("always_comb", Keyword),
    ALWAYS_FF_KW => ("always_ff", Keyword),
    ALWAYS_LATCH_KW => ("always_latch", Keyword),
    AND_KW => ("and", Keyword),
    ASSERT_KW => ("assert", Keyword),
    ASSIGN_KW => ("assign", Keyword),
    ASSUME_KW => ("assume", Keyword),
    AUTOMATIC_KW => ("automatic", Keyword),
    BEGIN_KW => ("begin", Keyword),
    BIND_KW => ("bind", Keyword),
    BIT_KW => ("bit", Keyword),
    BREAK_KW => ("break", Keyword),
    BYTE_KW => ("byte", Keyword),
    CASE_KW => ("case", Keyword),
    CASEX_KW => ("casex", Keyword),
    CASEZ_KW => ("casez", Keyword),
    CLASS_KW => ("class", Keyword),
    CLOCKING_KW => ("clocking", Keyword),
    CONST_KW => ("const", Keyword),
    CONSTRAINT_KW => ("constraint", Keyword),
    CONTINUE_KW => ("continue", Keyword),
    COVER_KW => ("cover", Keyword),
    COVERGROUP_KW => ("covergroup", Keyword),
    COVERPOINT_KW => ("coverpoint", Keyword),
    DEFAULT_KW => ("default", Keyword),
    DEFPARAM_KW => ("defparam", Keyword),
    DISABLE_KW => ("disable", Keyword),
    DO_KW => ("do", Keyword),
    ELSE_KW => ("else", Keyword),
    END_KW => ("end", Keyword),
    ENDCASE_KW => ("endcase", Keyword),
    ENDCLASS_KW => ("endclass", Keyword),
    ENDCLOCKING_KW => ("endclocking", Keyword),
    ENDFUNCTION_KW => ("endfunction", Keyword),
    ENDGENERATE_KW => ("endgenerate", Keyword),
    ENDINTERFACE_KW => ("endinterface", Keyword),
    ENDMODULE_KW => ("endmodule", Keyword),
    ENDPACKAGE_KW => ("endpackage", Keyword),
    ENDPROGRAM_KW => ("endprogram", Keyword),
    ENDPROPERTY_KW => ("endproperty", Keyword),
    ENDSEQUENCE_KW => ("endsequence", Keyword),
    ENDTASK_KW => ("endtask", Keyword),
    ENUM_KW => ("enum", Keyword),
    EXPORT_KW => ("export", Keyword),
    EXTENDS_KW => ("extends", Keyword),
    EXTERN_KW => ("extern", Keyword),
    FINAL_KW => ("final", Keyword),
    FOR_KW => ("for", Keyword),
    FOREACH_KW => ("foreach", Keyword),
    FOREVER_KW => ("forever", Keyword),
    FORK_KW => ("fork", Keyword),
    FUNCTION_KW => ("function", Keyword),
    GENERATE_KW => ("generate", Keyword),
    GENVAR_KW => ("genvar", Keyword),
    IF_KW => ("if", Keyword),
    IMPLEMENTS_KW => ("implements", Keyword),
    IMPORT_KW => ("import", Keyword),
    INITIAL_KW => ("initial", Keyword),
    INOUT_KW => ("inout", Keyword),
    INPUT_KW => ("input", Keyword),
    INT_KW => ("int", Keyword),
    INTEGER_KW => ("integer", Keyword),
    INTERFACE_KW => ("interface", Keyword),
    JOIN_KW => ("join", Keyword),
    JOIN_ANY_KW => ("join_any", Keyword),
    JOIN_NONE_KW => ("join_none", Keyword),
    LOCAL_KW => ("local", Keyword),
    LOCALPARAM_KW => ("localparam", Keyword),
    LOGIC_KW => ("logic", Keyword),
    LONGINT_KW => ("longint", Keyword),
    MODPORT_KW => ("modport", Keyword),
    MODULE_KW => ("module", Keyword),
    NEGEDGE_KW => ("negedge", Keyword),
    NEW_KW => ("new", Keyword),
    NULL_KW => ("null", Keyword),
    OR_KW => ("or", Keyword),
    OUTPUT_KW => ("output", Keyword),
    PACKAGE_KW => ("package", Keyword),
    PACKED_KW => ("packed", Keyword),
    PARAMETER_KW => ("parameter", Keyword),
    POSEDGE_KW => ("posedge", Keyword),
    PRIORITY_KW => ("priority", Keyword),
    PROGRAM_KW => ("program", Keyword),
    PROPERTY_KW => ("property", Keyword),
    PROTECTED_KW => ("protected", Keyword),
    PURE_KW => ("pure", Keyword),
    RAND_KW => ("rand", Keyword),
    RANDC_KW => ("randc", Keyword),
    REAL_KW => ("real", Keyword),
    REF_KW => ("ref", Keyword),
    REG_KW => ("reg", Keyword),
    REPEAT_KW => ("repeat", Keyword),
    RETURN_KW => ("return", Keyword),
    SEQUENCE_KW => ("sequence", Keyword),
    SHORTINT_KW => ("shortint", Keyword),
    SIGNED_KW => ("signed", Keyword),
    STATIC_KW => ("static", Keyword),
    STRING_KW => ("string", Keyword),
    STRUCT_KW => ("struct", Keyword),
    SUPER_KW => ("super", Keyword),
    TASK_KW => ("task", Keyword),
    THIS_KW => ("this", Keyword),
    TIMEPRECISION_KW => ("timeprecision", Keyword),
    TIMEUNIT_KW => ("timeunit", Keyword),
    TYPEDEF_KW => ("typedef", Keyword),
    UNION_KW => ("union", Keyword),
    UNIQUE_KW => ("unique", Keyword),
    UNSIGNED_KW => ("unsigned", Keyword),
    VIRTUAL_KW => ("virtual", Keyword),
    VOID_KW => ("void", Keyword),
    WAIT_KW => ("wait", Keyword),
    WHILE_KW => ("while", Keyword),
    WIRE_KW => ("wire", Keyword),
    XOR_KW => ("xor", Keyword),
}

impl TokenKind {
    /// End of input.
    pub const EOF: TokenKind = TokenKind(0);
    /// Lexer error token.
    pub const ERROR: TokenKind = TokenKind(256);

    /// Wrap a raw code coming from the lexer. Never fails.
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Single-character token kind, e.g. `TokenKind::char(b';')`.
    pub const fn char(c: u8) -> Self {
        Self(c as u16)
    }

    /// The raw numeric code.
    pub const fn raw(self) -> u16 {
        self.0
    }

    fn named_info(self) -> Option<&'static TokenKindInfo> {
        self.0
            .checked_sub(FIRST_NAMED)
            .and_then(|index| NAMED_TOKENS.get(index as usize))
    }

    /// The literal character for codes in the printable ASCII range.
    fn printable_char(self) -> Option<char> {
        u8::try_from(self.0)
            .ok()
            .filter(|byte| byte.is_ascii_graphic())
            .map(char::from)
    }

    /// True for EOF, error, printable single characters, and named kinds.
    pub fn is_known(self) -> bool {
        self == Self::EOF
            || self == Self::ERROR
            || self.printable_char().is_some()
            || self.named_info().is_some()
    }

    /// Display string for this kind. Total over all `u16` values.
    pub fn name(self) -> Cow<'static, str> {
        if self == Self::EOF {
            return Cow::Borrowed("<<EOF>>");
        }
        if self == Self::ERROR {
            return Cow::Borrowed("error");
        }
        if let Some(info) = self.named_info() {
            return Cow::Borrowed(info.name);
        }
        match self.printable_char() {
            Some(c) => Cow::Owned(c.to_string()),
            None => Cow::Owned(format!("{UNKNOWN_TOKEN_PREFIX}{}", self.0)),
        }
    }

    pub fn class(self) -> TokenClass {
        self.named_info()
            .map(|info| info.class)
            .unwrap_or(TokenClass::Other)
    }

    pub fn is_keyword(self) -> bool {
        self.class() == TokenClass::Keyword
    }

    pub fn is_identifier(self) -> bool {
        self.class() == TokenClass::Identifier
    }

    /// Whitespace and comments
    pub fn is_trivia(self) -> bool {
        self.class() == TokenClass::Trivia
    }

    /// All named kinds, in code order.
    pub fn named() -> impl Iterator<Item = TokenKind> {
        (0..NAMED_TOKENS.len()).map(|index| TokenKind(FIRST_NAMED + index as u16))
    }
}

/// Stringify a token kind (total function).
pub fn token_kind_name(kind: TokenKind) -> Cow<'static, str> {
    kind.name()
}

impl From<u16> for TokenKind {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenKind({}, {:?})", self.0, self.name())
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
