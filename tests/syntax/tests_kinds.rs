//! Total stringification and preprocessing classification through the
//! public API.

use rstest::rstest;

use hdlkit::syntax::{
    UNKNOWN_NODE_PREFIX, UNKNOWN_TOKEN_PREFIX, is_preprocessing_node, node_kind_name,
    token_kind_name,
};
use hdlkit::{NodeKind, TokenKind};

#[test]
fn test_every_declared_node_kind_has_its_name() {
    for kind in NodeKind::all() {
        let name = node_kind_name(kind);
        assert!(name.starts_with('k'), "{kind:?}");
        assert!(!name.starts_with(UNKNOWN_NODE_PREFIX));
        assert_eq!(name, kind.to_string());
    }
}

#[test]
fn test_every_named_token_kind_has_its_name() {
    for kind in TokenKind::named() {
        let name = token_kind_name(kind);
        assert!(!name.is_empty());
        assert!(!name.starts_with(UNKNOWN_TOKEN_PREFIX), "{kind:?}");
    }
}

#[rstest]
#[case(5000)]
#[case(u16::MAX)]
fn test_out_of_range_token_falls_back(#[case] raw: u16) {
    let name = token_kind_name(TokenKind::from_raw(raw));
    assert!(name.starts_with(UNKNOWN_TOKEN_PREFIX));
    assert!(name.ends_with(&raw.to_string()));
}

#[rstest]
#[case(b'(', "(")]
#[case(b'~', "~")]
#[case(b'!', "!")]
fn test_printable_char_tokens_render_as_the_char(#[case] c: u8, #[case] expected: &str) {
    assert_eq!(token_kind_name(TokenKind::char(c)), expected);
}

#[rstest]
#[case(1000)]
#[case(u16::MAX)]
fn test_out_of_range_node_falls_back(#[case] raw: u16) {
    let name = node_kind_name(NodeKind::from_raw(raw));
    assert_eq!(name, format!("{UNKNOWN_NODE_PREFIX}{raw}"));
    assert!(!is_preprocessing_node(NodeKind::from_raw(raw)));
}

#[test]
fn test_preprocessing_kinds_are_exactly_the_directives() {
    let mut names: Vec<String> = NodeKind::all()
        .filter(|kind| is_preprocessing_node(*kind))
        .map(|kind| kind.to_string())
        .collect();
    names.sort();
    assert_eq!(
        names,
        [
            "kPreprocessorDefine",
            "kPreprocessorElseClause",
            "kPreprocessorElsifClause",
            "kPreprocessorIfdefClause",
            "kPreprocessorIfndefClause",
            "kPreprocessorInclude",
            "kPreprocessorUndef",
        ]
    );
}

#[rstest]
#[case(NodeKind::PREPROCESSOR_BALANCED_MODULE_ITEMS)]
#[case(NodeKind::PREPROCESSOR_BALANCED_STATEMENTS)]
#[case(NodeKind::MACRO_CALL)]
#[case(NodeKind::UNTAGGED)]
fn test_similar_names_are_not_preprocessing(#[case] kind: NodeKind) {
    assert!(!is_preprocessing_node(kind));
}
