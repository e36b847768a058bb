use ddl_lexer::{tokenize, LexError, Lexer, Token, TokenKind};
use proptest::prelude::*;

/// Scans to end of input, turning errors into their Illegal tokens.
fn scan_all(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = match lexer.next_token() {
            Ok(token) => token,
            Err(err) => err.into_token(),
        };
        let end = token.is_end();
        tokens.push(token);
        if end {
            return tokens;
        }
    }
}

fn pairs(source: &str) -> Vec<(TokenKind, String)> {
    scan_all(source)
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect()
}

fn pair(kind: TokenKind, text: &str) -> (TokenKind, String) {
    (kind, text.to_string())
}

#[test]
fn create_table_statement() {
    assert_eq!(
        pairs("CREATE TABLE users (id INT, name STRING);"),
        vec![
            pair(TokenKind::Keyword, "CREATE"),
            pair(TokenKind::Keyword, "TABLE"),
            pair(TokenKind::Identifier, "users"),
            pair(TokenKind::LeftParen, "("),
            pair(TokenKind::Identifier, "id"),
            pair(TokenKind::Datatype, "INT"),
            pair(TokenKind::Comma, ","),
            pair(TokenKind::Identifier, "name"),
            pair(TokenKind::Datatype, "STRING"),
            pair(TokenKind::RightParen, ")"),
            pair(TokenKind::Semicolon, ";"),
            pair(TokenKind::EndOfInput, ""),
        ]
    );
}

#[test]
fn dotted_table_name() {
    let tokens = pairs("CREATE TABLE DB.users (...)");
    assert_eq!(
        &tokens[2..5],
        &[
            pair(TokenKind::Identifier, "DB"),
            pair(TokenKind::Dot, "."),
            pair(TokenKind::Identifier, "users"),
        ]
    );
    assert_eq!(tokens[5], pair(TokenKind::LeftParen, "("));
    assert_eq!(tokens[6], pair(TokenKind::Dot, "."));
    assert_eq!(tokens.last(), Some(&pair(TokenKind::EndOfInput, "")));
}

#[test]
fn empty_input() {
    let mut lexer = Lexer::new("");
    let token = lexer.next_token().unwrap();
    assert_eq!(token.kind, TokenKind::EndOfInput);
    assert_eq!(token.text, "");
    assert_eq!(token.offset, 0);
}

#[test]
fn scanning_continues_past_illegal_character() {
    let mut lexer = Lexer::new("users @ id");

    let users = lexer.next_token().unwrap();
    assert_eq!((users.kind, users.text.as_str()), (TokenKind::Identifier, "users"));

    let err = lexer.next_token().unwrap_err();
    let LexError::UnexpectedCharacter { token } = &err;
    assert_eq!(token.kind, TokenKind::Illegal);
    assert_eq!(token.text, "@");
    assert_eq!((token.offset, token.line, token.column), (6, 1, 7));
    assert_eq!(err.to_string(), "unexpected character '@' at line 1, column 7");

    let id = lexer.next_token().unwrap();
    assert_eq!((id.kind, id.text.as_str()), (TokenKind::Identifier, "id"));
    assert!(lexer.next_token().unwrap().is_end());
}

#[test]
fn numeric_run() {
    assert_eq!(
        pairs("id 123"),
        vec![
            pair(TokenKind::Identifier, "id"),
            pair(TokenKind::Number, "123"),
            pair(TokenKind::EndOfInput, ""),
        ]
    );
}

#[test]
fn keyword_case_is_preserved() {
    for word in ["create", "Create", "CREATE"] {
        let tokens = tokenize(word).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[0].text, word);
    }
}

#[test]
fn keyword_prefix_is_identifier() {
    assert_eq!(pairs("CREATEX")[0], pair(TokenKind::Identifier, "CREATEX"));
    assert_eq!(pairs("INT2")[0], pair(TokenKind::Identifier, "INT2"));
    assert_eq!(pairs("namespaces")[0], pair(TokenKind::Identifier, "namespaces"));
}

#[test]
fn create_namespace_statement() {
    assert_eq!(
        pairs("create namespace app;\n"),
        vec![
            pair(TokenKind::Keyword, "create"),
            pair(TokenKind::Keyword, "namespace"),
            pair(TokenKind::Identifier, "app"),
            pair(TokenKind::Semicolon, ";"),
            pair(TokenKind::EndOfInput, ""),
        ]
    );
}

#[test]
fn end_marker_is_idempotent() {
    let mut lexer = Lexer::new("x ");
    lexer.next_token().unwrap();
    for _ in 0..5 {
        let token = lexer.next_token().unwrap();
        assert!(token.is_end());
        assert_eq!(token.text, "");
        assert_eq!(lexer.position(), 2);
    }
}

#[test]
fn tokenize_reports_first_error() {
    let err = tokenize("CREATE TABLE t (a INT) $").unwrap_err();
    assert_eq!(err.token().text, "$");
    assert_eq!(err.token().column, 24);
}

#[test]
fn iterator_skips_end_marker() {
    let kinds: Vec<_> = Lexer::new("a, b")
        .map(|result| result.map(|token| token.kind))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(kinds, vec![TokenKind::Identifier, TokenKind::Comma, TokenKind::Identifier]);
}

#[test]
fn lexers_run_independently_on_threads() {
    let statements = [
        "CREATE TABLE a (x INT);",
        "CREATE NAMESPACE b;",
        "CREATE TABLE c (y STRING, z INT);",
    ];
    let handles: Vec<_> = statements
        .iter()
        .map(|s| {
            let s = s.to_string();
            std::thread::spawn(move || tokenize(&s).unwrap().len())
        })
        .collect();
    let counts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![9, 5, 12]);
}

proptest! {
    #[test]
    fn terminates_within_input_length(input in any::<String>()) {
        let mut lexer = Lexer::new(&input);
        let limit = input.chars().count() + 1;
        let mut calls = 0;
        loop {
            calls += 1;
            prop_assert!(calls <= limit);
            if matches!(lexer.next_token(), Ok(ref t) if t.is_end()) {
                break;
            }
        }
    }

    #[test]
    fn tokens_and_whitespace_rebuild_input(input in "[ \t\r\na-zA-Z0-9_(),;.@#é→]{0,80}") {
        let mut rebuilt = String::new();
        let mut last_end = 0;
        for token in scan_all(&input) {
            let gap = &input[last_end..token.offset];
            prop_assert!(gap.chars().all(|c| matches!(c, ' ' | '\t' | '\n' | '\r')));
            rebuilt.push_str(gap);
            prop_assert_eq!(&input[token.offset..token.end_offset()], token.text.as_str());
            rebuilt.push_str(&token.text);
            last_end = token.end_offset();
        }
        prop_assert_eq!(rebuilt, input);
    }

    #[test]
    fn only_end_marker_has_empty_text(input in any::<String>()) {
        for token in scan_all(&input) {
            prop_assert_eq!(token.text.is_empty(), token.is_end());
        }
    }

    #[test]
    fn end_marker_repeats(input in "[a-z0-9 ,;()]{0,40}") {
        let mut lexer = Lexer::new(&input);
        while !matches!(lexer.next_token(), Ok(ref t) if t.is_end()) {}
        for _ in 0..3 {
            let token = lexer.next_token().unwrap();
            prop_assert!(token.is_end());
            prop_assert_eq!(token.offset, input.len());
        }
    }

    #[test]
    fn identifiers_are_single_tokens(input in "[a-zA-Z_][a-zA-Z0-9_]{0,40}") {
        let tokens = tokenize(&input).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert!(matches!(
            tokens[0].kind,
            TokenKind::Identifier | TokenKind::Keyword | TokenKind::Datatype
        ));
        prop_assert_eq!(&tokens[0].text, &input);
    }

    #[test]
    fn digit_runs_are_numbers(input in "[0-9]{1,30}") {
        let tokens = tokenize(&input).unwrap();
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(&tokens[0].text, &input);
    }
}
