#![allow(dead_code)]

use lox_scanner::{ErrorLog, Scanner, Token, TokenKind};

/// Scan `src`, returning the tokens and every reported error.
pub fn scan(src: &str) -> (Vec<Token>, ErrorLog) {
    let mut log = ErrorLog::new();
    let tokens = Scanner::new(src).scan_all(&mut log);
    (tokens, log)
}

/// Scan `src`, asserting it has no lexical errors.
pub fn scan_clean(src: &str) -> Vec<Token> {
    let (tokens, log) = scan(src);
    assert!(
        !log.had_error(),
        "unexpected errors scanning {src:?}: {:?}",
        log.errors()
    );
    tokens
}

pub fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(Token::kind).collect()
}

pub fn lexemes(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(Token::lexeme).collect()
}
