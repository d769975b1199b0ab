use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn skips_whitespace_and_line_comments() {
    let tokens = lex("let x = 1 // trailing comment\nlet y = 2").unwrap();
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::IntLiteral,
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::IntLiteral,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn skips_block_comments() {
    assert_eq!(kinds("let /* not a spec */ x = 1"), vec![
        TokenKind::Let,
        TokenKind::Identifier,
        TokenKind::Equals,
        TokenKind::IntLiteral,
        TokenKind::Eof,
    ]);
}

#[test]
fn captures_spec_block_verbatim() {
    let tokens = lex("/*spec intent: add two numbers spec*/ function f() {}").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::SpecComment);
    match &tokens[0].literal {
        Some(Literal::Spec(text)) => assert_eq!(text, " intent: add two numbers "),
        other => panic!("expected spec literal, got {other:?}"),
    }
}

#[test]
fn unterminated_spec_block_errors() {
    let err = lex("/*spec unterminated").unwrap_err();
    assert!(matches!(err, Error::Lex { .. }));
}

#[test]
fn decodes_string_escapes() {
    let tokens = lex(r#""line\nbreak\ttab\\slash\"quote""#).unwrap();
    match &tokens[0].literal {
        Some(Literal::Str(s)) => assert_eq!(s, "line\nbreak\ttab\\slash\"quote"),
        other => panic!("expected string literal, got {other:?}"),
    }
}

#[test]
fn unterminated_string_errors_at_opening_position() {
    let err = lex("\"abc").unwrap_err();
    match err {
        Error::Lex { position, .. } => assert_eq!(position, Position::new(1, 1)),
        other => panic!("expected lex error, got {other:?}"),
    }
}

#[test]
fn interpolated_string_splits_text_and_expr_fragments() {
    let tokens = lex(r#"$"Hello, {name}!""#).unwrap();
    match &tokens[0].literal {
        Some(Literal::Interp(fragments)) => {
            assert_eq!(
                fragments,
                &vec![
                    InterpFragment::Str("Hello, ".to_string()),
                    InterpFragment::Expr { text: "name".to_string(), position: Position::new(1, 10) },
                    InterpFragment::Str("!".to_string()),
                ]
            );
        }
        other => panic!("expected interpolation literal, got {other:?}"),
    }
}

#[test]
fn interpolated_string_balances_nested_braces() {
    let tokens = lex(r#"$"{ items.filter(|x| { x > 0 }).count() }""#).unwrap();
    match &tokens[0].literal {
        Some(Literal::Interp(fragments)) => {
            assert_eq!(fragments.len(), 1);
            match &fragments[0] {
                InterpFragment::Expr { text, .. } => {
                    assert_eq!(text, " items.filter(|x| { x > 0 }).count() ");
                }
                other => panic!("expected expr fragment, got {other:?}"),
            }
        }
        other => panic!("expected interpolation literal, got {other:?}"),
    }
}

#[test]
fn lexes_int_and_decimal_literals() {
    let tokens = lex("42 3.14").unwrap();
    assert_eq!(tokens[0].literal, Some(Literal::Int(42)));
    assert_eq!(tokens[1].literal, Some(Literal::Decimal(3.14)));
}

#[test]
fn recognizes_keywords_and_identifiers() {
    assert_eq!(kinds("function pure return guard matchable"), vec![
        TokenKind::Function,
        TokenKind::Pure,
        TokenKind::Return,
        TokenKind::Guard,
        TokenKind::Identifier,
        TokenKind::Eof,
    ]);
}

#[test]
fn matches_multi_char_operators_before_single_char() {
    assert_eq!(kinds("-> => == != <= >= && ||"), vec![
        TokenKind::Arrow,
        TokenKind::FatArrow,
        TokenKind::EqEq,
        TokenKind::NotEq,
        TokenKind::LtEq,
        TokenKind::GtEq,
        TokenKind::AndAnd,
        TokenKind::OrOr,
        TokenKind::Eof,
    ]);
}

#[test]
fn tracks_line_and_column_across_newlines() {
    let tokens = lex("let x\n= 1").unwrap();
    assert_eq!(tokens[0].position, Position::new(1, 1));
    assert_eq!(tokens[2].position, Position::new(2, 1));
}

#[test]
fn unknown_character_is_a_lex_error() {
    let err = lex("let x = 1 @ 2").unwrap_err();
    match err {
        Error::Lex { message, .. } => assert!(message.contains('@')),
        other => panic!("expected lex error, got {other:?}"),
    }
}

#[test]
fn translate_position_same_line() {
    let base = Position::new(4, 10);
    let sub = Position::new(1, 3);
    assert_eq!(translate_position(base, sub), Position::new(4, 12));
}

#[test]
fn translate_position_multi_line() {
    let base = Position::new(4, 10);
    let sub = Position::new(2, 3);
    assert_eq!(translate_position(base, sub), Position::new(5, 3));
}
