use crate::{
    error::{Error, Result},
    reporter::Reporter,
    token::{Literal, Token, TokenKind},
};
use peekmore::{PeekMore, PeekMoreIterator};
use phf::phf_map;
use std::str::CharIndices;
use tracing::{debug, trace};

pub(crate) static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "and" => TokenKind::And,
    "class" => TokenKind::Class,
    "else" => TokenKind::Else,
    "false" => TokenKind::False,
    "for" => TokenKind::For,
    "fun" => TokenKind::Fun,
    "if" => TokenKind::If,
    "nil" => TokenKind::Nil,
    "or" => TokenKind::Or,
    "print" => TokenKind::Print,
    "return" => TokenKind::Return,
    "super" => TokenKind::Super,
    "this" => TokenKind::This,
    "true" => TokenKind::True,
    "var" => TokenKind::Var,
    "while" => TokenKind::While,
};

type Scanned = (TokenKind, Option<Literal>);

/// Single-pass scanner over a borrowed source string.
///
/// As an iterator it yields one item per token or lexical error, skipping
/// whitespace and comments, and stops without an end-of-file token.
/// `scan_all` is the usual entry point.
pub struct Scanner<'a> {
    src: &'a str,
    chars: PeekMoreIterator<CharIndices<'a>>,
    start: usize,
    current: usize,
    line: usize,
}

impl <'a> Iterator for Scanner<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Result<Token>> {
        loop {
            self.start = self.current;
            let line = self.line;
            let next_char = self.advance()?;

            match self.scan_from_char(next_char) {
                None => continue,
                Some(Err(e)) => return Some(Err(e)),
                Some(Ok((kind, literal))) => {
                    return Some(Ok(Token::new(kind, self.lexeme(), literal, line)));
                },
            }
        }
    }
}

impl <'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekmore(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scans the whole source, handing every lexical error to `reporter`.
    /// The returned tokens always end with exactly one `EndOfFile`.
    pub fn scan_all(mut self, mut reporter: impl Reporter) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut errors = 0;

        while let Some(result) = self.next() {
            match result {
                Ok(token) => {
                    trace!(kind = ?token.kind, line = token.line, lexeme = %token.lexeme, "token");
                    tokens.push(token);
                },
                Err(e) => {
                    errors += 1;
                    let line = e.line().unwrap_or(self.line);
                    let message = e.message();
                    debug!(line, %message, "lexical error");
                    reporter.report(line, &message);
                },
            }
        }

        tokens.push(Token::end_of_file(self.line));
        debug!(tokens = tokens.len(), errors, lines = self.line, "scan complete");
        tokens
    }

    fn scan_from_char(&mut self, c: char) -> Option<Result<Scanned>> {
        use TokenKind::*;
        match c {
            '(' => simple(LeftParen),
            ')' => simple(RightParen),
            '{' => simple(LeftBrace),
            '}' => simple(RightBrace),
            ',' => simple(Comma),
            '.' => simple(Dot),
            '-' => simple(Minus),
            '+' => simple(Plus),
            ';' => simple(Semicolon),
            '*' => simple(Star),
            '!' => simple(if self.does_next_match('=') { BangEqual } else { Bang }),
            '=' => simple(if self.does_next_match('=') { EqualEqual } else { Equal }),
            '<' => simple(if self.does_next_match('=') { LessEqual } else { Less }),
            '>' => simple(if self.does_next_match('=') { GreaterEqual } else { Greater }),
            '/' => {
                if self.does_next_match('/') { // line comment
                    self.advance_until(|n| n == '\n');
                    None
                } else {
                    simple(Slash)
                }
            },
            ' ' | '\r' | '\t' => None,
            '\n' => {
                self.line += 1;
                None
            },
            '"' => Some(self.extract_string()),
            c if c.is_ascii_digit() => Some(self.extract_number()),
            c if can_start_identifier(c) => Some(Ok(self.extract_identifier())),
            c => Some(Err(Error::lexical(self.line, format!("Unexpected character '{}'.", c)))),
        }
    }

    fn advance(&mut self) -> Option<char> {
        let (index, c) = self.chars.next()?;
        self.current = index + c.len_utf8();
        Some(c)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek_nth(0).map(|&(_, c)| c)
    }

    fn peek_second(&mut self) -> Option<char> {
        self.chars.peek_nth(1).map(|&(_, c)| c)
    }

    fn does_next_match(&mut self, c: char) -> bool {
        match self.peek() {
            Some(next) if next == c => {
                self.advance();
                true
            },
            _ => false,
        }
    }

    fn lexeme(&self) -> &'a str {
        &self.src[self.start..self.current]
    }

    fn extract_string(&mut self) -> Result<Scanned> {
        let mut newline_count = 0;
        self.advance_until_for_each(|n| n == '"', |c| if c == '\n' { newline_count += 1 });
        self.line += newline_count;

        match self.advance() {
            None => Err(Error::lexical(self.line, "Unterminated string.")),
            Some(_) => { // must be the closing quote
                let text = &self.src[self.start + 1..self.current - 1];
                Ok((TokenKind::String, Some(Literal::String(text.to_string()))))
            },
        }
    }

    fn extract_number(&mut self) -> Result<Scanned> {
        self.advance_until(|n| !n.is_ascii_digit());

        let has_fraction = self.peek() == Some('.')
            && self.peek_second().map_or(false, |n| n.is_ascii_digit());
        if has_fraction {
            self.advance();
            self.advance_until(|n| !n.is_ascii_digit());
        }

        let text = self.lexeme();
        match text.parse() {
            Err(_) => Err(Error::lexical(
                self.line,
                format!("Could not convert {} into a number.", text),
            )),
            Ok(number) => Ok((TokenKind::Number, Some(Literal::Number(number)))),
        }
    }

    fn extract_identifier(&mut self) -> Scanned {
        self.advance_until(|n| !is_part_of_valid_identifier(n));

        let kind = KEYWORDS.get(self.lexeme()).copied().unwrap_or(TokenKind::Identifier);
        (kind, None)
    }

    fn advance_until(&mut self, should_stop: impl Fn(char) -> bool) {
        self.advance_until_for_each(should_stop, |_| {})
    }

    fn advance_until_for_each(
        &mut self,
        should_stop: impl Fn(char) -> bool,
        mut f: impl FnMut(char),
    ) {
        while let Some(next) = self.peek() {
            if should_stop(next) { break }
            self.advance();
            f(next);
        }
    }
}

fn simple(kind: TokenKind) -> Option<Result<Scanned>> {
    Some(Ok((kind, None)))
}

fn can_start_identifier(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_part_of_valid_identifier(c: char) -> bool {
    can_start_identifier(c) || c.is_ascii_digit()
}
