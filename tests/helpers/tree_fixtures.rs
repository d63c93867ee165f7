//! Hand-built syntax trees standing in for parser output.

use hdlkit::{NodeKind, SymbolId, SyntaxTree, TokenKind, TreeBuilder};

/// Places tokens by searching forward in the source text, so ranges always
/// agree with the source.
pub struct Cursor {
    builder: TreeBuilder,
    pos: usize,
}

impl Cursor {
    pub fn new(source: &str) -> Self {
        Self {
            builder: TreeBuilder::new(source),
            pos: 0,
        }
    }

    pub fn tok(&mut self, kind: TokenKind, text: &str) -> SymbolId {
        let at = self.builder.source()[self.pos..]
            .find(text)
            .unwrap_or_else(|| panic!("'{text}' not found after byte {}", self.pos))
            + self.pos;
        self.pos = at + text.len();
        self.builder.token(kind, at as u32, text)
    }

    pub fn id(&mut self, text: &str) -> SymbolId {
        self.tok(TokenKind::SYMBOL_IDENTIFIER, text)
    }

    pub fn punct(&mut self, c: char) -> SymbolId {
        self.tok(TokenKind::char(c as u8), &c.to_string())
    }

    pub fn node(&mut self, kind: NodeKind, children: &[SymbolId]) -> SymbolId {
        self.builder
            .node(kind, children.iter().copied().map(Some))
            .unwrap_or_else(|err| panic!("cannot build {kind}: {err}"))
    }

    /// `kReference > kLocalRoot > kUnqualifiedId > name`
    pub fn reference(&mut self, name: &str) -> SymbolId {
        let id = self.id(name);
        let unqualified = self.node(NodeKind::UNQUALIFIED_ID, &[id]);
        let root = self.node(NodeKind::LOCAL_ROOT, &[unqualified]);
        self.node(NodeKind::REFERENCE, &[root])
    }

    /// `( inner )` as a paren group; `inner` builds the contents.
    pub fn parens(&mut self, inner: impl FnOnce(&mut Self) -> Vec<SymbolId>) -> SymbolId {
        let mut children = vec![self.punct('(')];
        children.extend(inner(self));
        children.push(self.punct(')'));
        self.node(NodeKind::PAREN_GROUP, &children)
    }

    /// `: name`
    pub fn label(&mut self, name: &str) -> SymbolId {
        let colon = self.punct(':');
        let id = self.id(name);
        self.node(NodeKind::LABEL, &[colon, id])
    }

    /// `keyword name ;` as a module-style header.
    pub fn header(&mut self, keyword: TokenKind, keyword_text: &str, name: &str) -> SymbolId {
        let kw = self.tok(keyword, keyword_text);
        let id = self.id(name);
        let semi = self.punct(';');
        self.node(NodeKind::MODULE_HEADER, &[kw, id, semi])
    }

    pub fn finish(self, root: SymbolId) -> SyntaxTree {
        self.builder
            .finish(Some(root))
            .unwrap_or_else(|err| panic!("cannot finish tree: {err}"))
    }
}

pub const CHIP_PATH: &str = "rtl/chip.sv";

pub const CHIP: &str = r#"`include "defs.svh"
`define DRIVE(x) assign x = 0;
package pkg;
typedef logic byte_t;
parameter int DEPTH = 4;
endpackage
interface bus_if;
endinterface
program prog;
endprogram
module top;
import pkg::DEPTH;
task automatic tick();
endtask : tick
enum {IDLE, BUSY} state;
and g1(y);
sub u_sub(.clk(clk));
`DRIVE(y)
endmodule
"#;

/// Every top-level construct the extraction table knows about, in one file.
pub fn chip_tree() -> SyntaxTree {
    let mut c = Cursor::new(CHIP);

    // `include "defs.svh"
    let include_kw = c.tok(TokenKind::PP_INCLUDE, "`include");
    let path = c.tok(TokenKind::STRING_LITERAL, "\"defs.svh\"");
    let include = c.node(NodeKind::PREPROCESSOR_INCLUDE, &[include_kw, path]);

    // `define DRIVE(x) assign x = 0;
    let define_kw = c.tok(TokenKind::PP_DEFINE, "`define");
    let macro_name = c.tok(TokenKind::PP_IDENTIFIER, "DRIVE");
    let body = c.tok(TokenKind::PP_DEFINE_BODY, "(x) assign x = 0;");
    let define = c.node(NodeKind::PREPROCESSOR_DEFINE, &[define_kw, macro_name, body]);

    // package pkg; ... endpackage
    let package_kw = c.tok(TokenKind::PACKAGE_KW, "package");
    let pkg = c.id("pkg");
    let semi = c.punct(';');
    let typedef_kw = c.tok(TokenKind::TYPEDEF_KW, "typedef");
    let logic = c.tok(TokenKind::LOGIC_KW, "logic");
    let data_type = c.node(NodeKind::DATA_TYPE, &[logic]);
    let byte_t = c.id("byte_t");
    let typedef_semi = c.punct(';');
    let typedef = c.node(
        NodeKind::TYPE_DECLARATION,
        &[typedef_kw, data_type, byte_t, typedef_semi],
    );
    let parameter_kw = c.tok(TokenKind::PARAMETER_KW, "parameter");
    let int_kw = c.tok(TokenKind::INT_KW, "int");
    let depth = c.id("DEPTH");
    let param_type = c.node(NodeKind::PARAM_TYPE, &[int_kw, depth]);
    let eq = c.punct('=');
    let four = c.tok(TokenKind::DEC_NUMBER, "4");
    let four = c.node(NodeKind::NUMBER, &[four]);
    let four = c.node(NodeKind::EXPRESSION, &[four]);
    let param_semi = c.punct(';');
    let parameter = c.node(
        NodeKind::PARAM_DECLARATION,
        &[parameter_kw, param_type, eq, four, param_semi],
    );
    let package_items = c.node(NodeKind::PACKAGE_ITEM_LIST, &[typedef, parameter]);
    let endpackage = c.tok(TokenKind::ENDPACKAGE_KW, "endpackage");
    let package = c.node(
        NodeKind::PACKAGE_DECLARATION,
        &[package_kw, pkg, semi, package_items, endpackage],
    );

    // interface bus_if; endinterface
    let header = c.header(TokenKind::INTERFACE_KW, "interface", "bus_if");
    let end = c.tok(TokenKind::ENDINTERFACE_KW, "endinterface");
    let interface = c.node(NodeKind::INTERFACE_DECLARATION, &[header, end]);

    // program prog; endprogram
    let header = c.header(TokenKind::PROGRAM_KW, "program", "prog");
    let end = c.tok(TokenKind::ENDPROGRAM_KW, "endprogram");
    let program = c.node(NodeKind::PROGRAM_DECLARATION, &[header, end]);

    // module top;
    let module_header = c.header(TokenKind::MODULE_KW, "module", "top");

    // import pkg::DEPTH;
    let import_kw = c.tok(TokenKind::IMPORT_KW, "import");
    let pkg_ref = c.id("pkg");
    let scope = c.tok(TokenKind::SCOPE_RES, "::");
    let depth_ref = c.id("DEPTH");
    let item = c.node(NodeKind::PACKAGE_IMPORT_ITEM, &[pkg_ref, scope, depth_ref]);
    let semi = c.punct(';');
    let import = c.node(NodeKind::PACKAGE_IMPORT_DECLARATION, &[import_kw, item, semi]);

    // task automatic tick(); endtask : tick
    let task_kw = c.tok(TokenKind::TASK_KW, "task");
    let automatic = c.tok(TokenKind::AUTOMATIC_KW, "automatic");
    let tick = c.id("tick");
    let tick = c.node(NodeKind::UNQUALIFIED_ID, &[tick]);
    let ports = c.parens(|_| Vec::new());
    let semi = c.punct(';');
    let task_header = c.node(NodeKind::TASK_HEADER, &[task_kw, automatic, tick, ports, semi]);
    let endtask = c.tok(TokenKind::ENDTASK_KW, "endtask");
    let label = c.label("tick");
    let task = c.node(NodeKind::TASK_DECLARATION, &[task_header, endtask, label]);

    // enum {IDLE, BUSY} state;
    let enum_kw = c.tok(TokenKind::ENUM_KW, "enum");
    let open = c.punct('{');
    let idle = c.id("IDLE");
    let idle = c.node(NodeKind::ENUM_NAME, &[idle]);
    let comma = c.punct(',');
    let busy = c.id("BUSY");
    let busy = c.node(NodeKind::ENUM_NAME, &[busy]);
    let close = c.punct('}');
    let names = c.node(NodeKind::ENUM_NAME_LIST, &[open, idle, comma, busy, close]);
    let enum_type = c.node(NodeKind::ENUM_TYPE, &[enum_kw, names]);
    let state = c.id("state");
    let state = c.node(NodeKind::REGISTER_VARIABLE, &[state]);
    let semi = c.punct(';');
    let enum_decl = c.node(NodeKind::DATA_DECLARATION, &[enum_type, state, semi]);

    // and g1(y);
    let and_kw = c.tok(TokenKind::AND_KW, "and");
    let g1 = c.id("g1");
    let terminals = c.parens(|c| {
        let y = c.reference("y");
        vec![c.node(NodeKind::EXPRESSION, &[y])]
    });
    let gate = c.node(NodeKind::GATE_INSTANCE, &[g1, terminals]);
    let semi = c.punct(';');
    let gates = c.node(NodeKind::GATE_INSTANTIATION, &[and_kw, gate, semi]);

    // sub u_sub(.clk(clk));
    let sub = c.id("sub");
    let sub = c.node(NodeKind::UNQUALIFIED_ID, &[sub]);
    let sub = c.node(NodeKind::INSTANTIATION_TYPE, &[sub]);
    let u_sub = c.id("u_sub");
    let open = c.punct('(');
    let dot = c.punct('.');
    let port = c.id("clk");
    let actual = c.parens(|c| {
        let clk = c.reference("clk");
        vec![c.node(NodeKind::EXPRESSION, &[clk])]
    });
    let named = c.node(NodeKind::ACTUAL_NAMED_PORT, &[dot, port, actual]);
    let connections = c.node(NodeKind::PORT_ACTUAL_LIST, &[named]);
    let close = c.punct(')');
    let connections = c.node(NodeKind::PAREN_GROUP, &[open, connections, close]);
    let instance = c.node(NodeKind::GATE_INSTANCE, &[u_sub, connections]);
    let semi = c.punct(';');
    let instantiation = c.node(NodeKind::DATA_DECLARATION, &[sub, instance, semi]);

    // `DRIVE(y)
    let call_id = c.tok(TokenKind::MACRO_CALL_ID, "`DRIVE");
    let open = c.punct('(');
    let arg = c.id("y");
    let args = c.node(NodeKind::MACRO_ARG_LIST, &[arg]);
    let close = c.punct(')');
    let macro_call = c.node(NodeKind::MACRO_CALL, &[call_id, open, args, close]);

    let items = c.node(
        NodeKind::MODULE_ITEM_LIST,
        &[import, task, enum_decl, gates, instantiation, macro_call],
    );
    let endmodule = c.tok(TokenKind::ENDMODULE_KW, "endmodule");
    let module = c.node(NodeKind::MODULE_DECLARATION, &[module_header, items, endmodule]);

    let root = c.node(
        NodeKind::DESCRIPTION_LIST,
        &[include, define, package, interface, program, module],
    );
    c.finish(root)
}

/// `module <name>; endmodule`, the smallest declaration.
pub fn empty_module(name: &str) -> SyntaxTree {
    let source = format!("module {name}; endmodule");
    let mut c = Cursor::new(&source);
    let header = c.header(TokenKind::MODULE_KW, "module", name);
    let end = c.tok(TokenKind::ENDMODULE_KW, "endmodule");
    let module = c.node(NodeKind::MODULE_DECLARATION, &[header, end]);
    c.finish(module)
}
