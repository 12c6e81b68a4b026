//! Lexical scanner for the Lox scripting language.
//!
//! ```
//! use lox_scanner::{ErrorLog, Scanner, TokenKind};
//!
//! let mut errors = ErrorLog::new();
//! let tokens = Scanner::new("var answer = 42;").scan_all(&mut errors);
//!
//! assert!(!errors.had_error());
//! assert_eq!(TokenKind::Var, tokens[0].kind());
//! assert_eq!(TokenKind::EndOfFile, tokens.last().unwrap().kind());
//! ```

pub mod error;
pub mod reporter;
pub mod scanner;
pub mod token;

pub use crate::error::{Error, Result};
pub use crate::reporter::{ErrorLog, Reporter};
pub use crate::scanner::Scanner;
pub use crate::token::{Literal, Token, TokenKind};

/// Scans `source` in one pass. Shorthand for `Scanner::new(source).scan_all(reporter)`.
pub fn scan(source: &str, reporter: impl Reporter) -> Vec<Token> {
    Scanner::new(source).scan_all(reporter)
}
