// tests/parser_tests.rs

use astopt::ast::{BinaryOp, Node, NodeData, NodeKind, UnaryOp};
use astopt::lexer::LexError;
use astopt::parser::{ParseError, ReaderConfig, parse, parse_with_config};

const PROGRAM: &str = "\
FUNCTION_DEF (main)
  SEQUENCE
    DECLARATION (a)
      INT (10)
    FUNCTION_CALL (printf)
      EXPR_LIST
        STRING (\"%d\\n\")
        VAR (a)
    RETURN_STMT
      INT (0)
";

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_single_node() {
    assert_eq!(parse("SEQUENCE\n").unwrap(), Node::sequence(vec![]));
}

#[test]
fn test_nested_program() {
    let tree = parse(PROGRAM).unwrap();

    let expected = Node::function_def(
        "main",
        vec![Node::sequence(vec![
            Node::declaration("a", vec![Node::int(10)]),
            Node::call(
                "printf",
                vec![Node::expr_list(vec![Node::string("%d\\n"), Node::var("a")])],
            ),
            Node::return_stmt(vec![Node::int(0)]),
        ])],
    );
    assert_eq!(tree, expected);
    assert_eq!(tree.node_count(), 10);
    assert_eq!(tree.depth(), 5);
}

#[test]
fn test_siblings_after_deeper_subtree() {
    // The third line closes two levels at once
    let tree = parse("SEQUENCE\n  RETURN_STMT\n    INT (1)\n  RETURN_STMT\n").unwrap();

    assert_eq!(tree.children.len(), 2);
    assert_eq!(tree.children[0].children, vec![Node::int(1)]);
    assert!(tree.children[1].children.is_empty());
}

#[test]
fn test_children_keep_their_order() {
    let tree = parse("EXPR_LIST\n  INT (3)\n  INT (1)\n  INT (2)\n").unwrap();
    let values: Vec<_> = tree.children.iter().filter_map(Node::int_value).collect();

    assert_eq!(values, vec![3, 1, 2]);
}

#[test]
fn test_more_than_ten_children_are_kept() {
    let mut source = String::from("SEQUENCE\n");
    for i in 0..25 {
        source.push_str(&format!("  INT ({i})\n"));
    }

    assert_eq!(parse(&source).unwrap().children.len(), 25);
}

#[test]
fn test_blank_lines_are_ignored() {
    let tree = parse("\nSEQUENCE\n\n  INT (1)\n\n").unwrap();
    assert_eq!(tree, Node::sequence(vec![Node::int(1)]));
}

#[test]
fn test_windows_line_endings() {
    let tree = parse("SEQUENCE\r\n  VAR (x)\r\n").unwrap();
    assert_eq!(tree, Node::sequence(vec![Node::var("x")]));
}

#[test]
fn test_lines_after_root_are_ignored() {
    let tree = parse("INT (1)\nINT (2)\n").unwrap();
    assert_eq!(tree, Node::int(1));
}

#[test]
fn test_odd_indent_under_root_is_an_error() {
    let err = parse("SEQUENCE\n INT (1)\n").unwrap_err();
    assert!(matches!(err, ParseError::Indentation { line: 2, found: 1, expected: 0, .. }));

    let err = parse("FUNCTION_DEF (main)\n SEQUENCE\n   RETURN_STMT\n").unwrap_err();
    assert!(matches!(err, ParseError::Indentation { line: 2, found: 1, expected: 0, .. }));
}

// ============================================================================
// Arguments
// ============================================================================

#[test]
fn test_named_kinds() {
    assert_eq!(parse("FUNCTION_DEF (main)").unwrap().name(), Some("main"));
    assert_eq!(parse("DECLARATION (x)").unwrap().name(), Some("x"));
    assert_eq!(parse("VAR (x)").unwrap().name(), Some("x"));
    assert_eq!(parse("FUNCTION_CALL (puts)").unwrap().name(), Some("puts"));
}

#[test]
fn test_negative_integer() {
    assert_eq!(parse("INT (-42)").unwrap(), Node::int(-42));
}

#[test]
fn test_operators() {
    let binary = parse("BINARY_EXPR (<=)").unwrap();
    assert_eq!(binary.data, NodeData::BinaryExpr(BinaryOp::LessEqual));

    let unary = parse("UNARY_EXPR (--)").unwrap();
    assert_eq!(unary.data, NodeData::UnaryExpr(UnaryOp::Decrement));
}

#[test]
fn test_operator_is_cut_to_three_characters() {
    let tree = parse("BINARY_EXPR (<<==)").unwrap();
    assert_eq!(tree.operator(), Some("<<="));
}

#[test]
fn test_unknown_operator_is_kept() {
    let tree = parse("BINARY_EXPR (%)").unwrap();
    assert_eq!(tree.data, NodeData::BinaryExpr(BinaryOp::Other("%".into())));
}

#[test]
fn test_string_quotes_are_stripped() {
    assert_eq!(parse(r#"STRING ("hi there")"#).unwrap(), Node::string("hi there"));
    assert_eq!(parse(r#"STRING (""x"")"#).unwrap(), Node::string("x"));
    assert_eq!(parse("STRING (bare)").unwrap(), Node::string("bare"));
}

#[test]
fn test_missing_argument_gives_empty_field() {
    assert_eq!(parse("VAR").unwrap(), Node::var(""));
    assert_eq!(parse("INT").unwrap(), Node::int(0));
}

#[test]
fn test_argument_on_plain_kind_is_ignored() {
    let tree = parse("SEQUENCE (ignored)").unwrap();

    assert_eq!(tree.kind(), NodeKind::Sequence);
    assert_eq!(tree.name(), None);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unknown_kind_fails_whole_parse() {
    let err = parse("SEQUENCE\n  INT (1)\n  LOOP\n").unwrap_err();

    assert!(matches!(err, ParseError::Lex(LexError::UnknownKind { line: 3, .. })));
    assert_eq!(err.line(), Some(3));
}

#[test]
fn test_unclosed_argument() {
    let err = parse("SEQUENCE\n  VAR (x\n").unwrap_err();
    assert!(matches!(err, ParseError::Lex(LexError::MalformedArgument { line: 2, .. })));
}

#[test]
fn test_invalid_integer() {
    let err = parse("INT (abc)").unwrap_err();
    assert!(matches!(err, ParseError::Lex(LexError::MalformedArgument { .. })));
}

#[test]
fn test_integer_out_of_range() {
    let err = parse("INT (99999999999999999999)").unwrap_err();
    assert!(matches!(err, ParseError::Lex(LexError::MalformedArgument { .. })));
}

#[test]
fn test_indentation_too_deep() {
    let err = parse("SEQUENCE\n    INT (1)\n").unwrap_err();

    assert_eq!(
        err,
        ParseError::Indentation {
            line: 2,
            found: 4,
            expected: 2,
            text: "INT (1)".to_string(),
        }
    );
}

#[test]
fn test_indented_root() {
    let err = parse("  SEQUENCE\n").unwrap_err();
    assert!(matches!(err, ParseError::Indentation { line: 1, found: 2, expected: 0, .. }));
}

#[test]
fn test_odd_indentation() {
    let err = parse("SEQUENCE\n  SEQUENCE\n    INT (1)\n   INT (2)\n").unwrap_err();
    assert!(matches!(err, ParseError::Indentation { line: 4, found: 3, expected: 2, .. }));
}

#[test]
fn test_empty_input() {
    assert_eq!(parse("").unwrap_err(), ParseError::EmptyInput);
    assert_eq!(parse("\n   \n").unwrap_err(), ParseError::EmptyInput);
    assert_eq!(ParseError::EmptyInput.line(), None);
}

#[test]
fn test_children_limit() {
    let config = ReaderConfig {
        max_children: Some(2),
        ..ReaderConfig::default()
    };
    let source = "SEQUENCE\n  INT (1)\n  INT (2)\n  INT (3)\n";

    let err = parse_with_config(source, config).unwrap_err();
    assert_eq!(err, ParseError::CapacityExceeded { line: 1, limit: 2 });

    assert!(parse_with_config("SEQUENCE\n  INT (1)\n  INT (2)\n", config).is_ok());
}

#[test]
fn test_depth_limit() {
    let config = ReaderConfig {
        max_depth: 2,
        ..ReaderConfig::default()
    };

    assert!(parse_with_config("SEQUENCE\n  SEQUENCE\n    SEQUENCE\n", config).is_ok());

    let err = parse_with_config("SEQUENCE\n  SEQUENCE\n    SEQUENCE\n      INT (1)\n", config)
        .unwrap_err();
    assert_eq!(err, ParseError::DepthLimitExceeded { line: 4, limit: 2 });
}

#[test]
fn test_default_depth_limit_rejects_runaway_nesting() {
    let source: String = (0..600)
        .map(|depth| format!("{}SEQUENCE\n", "  ".repeat(depth)))
        .collect();

    assert!(matches!(
        parse(&source),
        Err(ParseError::DepthLimitExceeded { limit: 512, .. })
    ));
}
