//! Property-based tests with proptest.
//!
//! Build sources out of known lexemes joined by whitespace and comments,
//! scan them, and check the tokens line up with what went in.

mod common;

use common::{kinds, scan, scan_clean};
use lox_scanner::{Literal, TokenKind};
use proptest::prelude::*;

// -- Leaf strategies --

fn identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,12}".prop_map(|s| s)
}

fn number() -> impl Strategy<Value = String> {
    "[0-9]{1,5}(\\.[0-9]{1,4})?".prop_map(|s| s)
}

/// String literal, quotes included. May span lines.
fn string() -> impl Strategy<Value = String> {
    "[a-z0-9 \n!@#]{0,10}".prop_map(|s| format!("\"{}\"", s))
}

fn operator() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "(", ")", "{", "}", ",", ".", "-", "+", ";", "*", "/",
        "!", "!=", "=", "==", "<", "<=", ">", ">=",
    ])
    .prop_map(|s| s.to_string())
}

fn lexeme() -> impl Strategy<Value = String> {
    prop_oneof![identifier(), number(), string(), operator()]
}

/// Whitespace run or a line comment. Never empty, and a comment always
/// follows whitespace so it cannot fuse with a preceding `/`.
fn separator() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[ \t\r\n]{1,3}".prop_map(|s| s),
        1 => "[ \t]{1,2}//[a-z @#\"]{0,10}\n".prop_map(|s| s),
    ]
}

fn newlines(s: &str) -> usize {
    s.matches('\n').count()
}

proptest! {
    #[test]
    fn always_ends_with_single_end_of_file(src in any::<String>()) {
        let (tokens, _) = scan(&src);
        let eofs = tokens.iter().filter(|t| t.kind() == TokenKind::EndOfFile).count();
        prop_assert_eq!(1, eofs);
        prop_assert_eq!(TokenKind::EndOfFile, tokens.last().map(|t| t.kind()).unwrap_or(TokenKind::Nil));
    }

    #[test]
    fn lines_never_decrease(src in any::<String>()) {
        let (tokens, log) = scan(&src);
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].line() <= pair[1].line());
        }
        for pair in log.errors().windows(2) {
            prop_assert!(pair[0].line() <= pair[1].line());
        }
    }

    #[test]
    fn whitespace_and_comments_yield_only_end_of_file(
        parts in prop::collection::vec(separator(), 0..8)
    ) {
        let src = parts.concat();
        let tokens = scan_clean(&src);
        prop_assert_eq!(vec![TokenKind::EndOfFile], kinds(&tokens));
        prop_assert_eq!(1 + newlines(&src), tokens[0].line());
    }

    #[test]
    fn lexemes_come_back_in_order(
        parts in prop::collection::vec((lexeme(), separator()), 1..12)
    ) {
        let mut src = String::new();
        let mut expected = Vec::new();
        for (lexeme, sep) in &parts {
            expected.push((lexeme.clone(), 1 + newlines(&src)));
            src.push_str(lexeme);
            src.push_str(sep);
        }

        let tokens = scan_clean(&src);
        let (last, rest) = tokens.split_last().expect("end of file");
        let actual: Vec<_> = rest.iter().map(|t| (t.lexeme().to_string(), t.line())).collect();

        prop_assert_eq!(expected, actual);
        prop_assert_eq!(1 + newlines(&src), last.line());
    }

    #[test]
    fn identifiers_are_munched_whole(name in identifier()) {
        let tokens = scan_clean(&name);
        prop_assert_eq!(2, tokens.len());
        prop_assert_eq!(name.as_str(), tokens[0].lexeme());
        let expected = TokenKind::keyword(&name).unwrap_or(TokenKind::Identifier);
        prop_assert_eq!(expected, tokens[0].kind());
    }

    #[test]
    fn numbers_decode_to_their_text(text in number()) {
        let tokens = scan_clean(&text);
        prop_assert_eq!(vec![TokenKind::Number, TokenKind::EndOfFile], kinds(&tokens));
        let value: f64 = text.parse().expect("valid float");
        prop_assert_eq!(Some(&Literal::Number(value)), tokens[0].literal());
    }

    #[test]
    fn strings_decode_without_quotes(quoted in string()) {
        let tokens = scan_clean(&quoted);
        let inner = &quoted[1..quoted.len() - 1];
        prop_assert_eq!(Some(&Literal::String(inner.to_string())), tokens[0].literal());
        prop_assert_eq!(1, tokens[0].line());
        prop_assert_eq!(1 + newlines(inner), tokens[1].line());
    }
}
