use {
    crate::{
        error::ScanError,
        token::{Token, TokenKind, TokenValue},
    },
    lazy_static::lazy_static,
    maplit::hashmap,
    std::collections::HashMap,
};

lazy_static! {
    /// Punctuation that has no longer form. `/` is absent because it may
    /// start a line comment.
    static ref SINGLE_CHAR_TOKENS: HashMap<char, TokenKind> = hashmap! {
        '(' => TokenKind::LeftParen,
        ')' => TokenKind::RightParen,
        '{' => TokenKind::LeftBrace,
        '}' => TokenKind::RightBrace,
        ',' => TokenKind::Comma,
        '.' => TokenKind::Dot,
        '-' => TokenKind::Minus,
        '+' => TokenKind::Plus,
        ';' => TokenKind::Semicolon,
        '*' => TokenKind::Star,
    };

    /// Reserved words, consulted only after a full identifier lexeme is collected.
    static ref KEYWORDS: HashMap<&'static str, TokenKind> = hashmap! {
        "and" => TokenKind::KwAnd,
        "class" => TokenKind::KwClass,
        "else" => TokenKind::KwElse,
        "false" => TokenKind::KwFalse,
        "for" => TokenKind::KwFor,
        "fun" => TokenKind::KwFun,
        "if" => TokenKind::KwIf,
        "nil" => TokenKind::KwNil,
        "or" => TokenKind::KwOr,
        "print" => TokenKind::KwPrint,
        "return" => TokenKind::KwReturn,
        "super" => TokenKind::KwSuper,
        "this" => TokenKind::KwThis,
        "true" => TokenKind::KwTrue,
        "var" => TokenKind::KwVar,
        "while" => TokenKind::KwWhile,
    };
}

trait IsIdentifier {
    fn is_identifier(&self) -> bool;
}

impl IsIdentifier for char {
    fn is_identifier(&self) -> bool {
        self.is_ascii_alphanumeric() || *self == '_'
    }
}

/// Current scanner state for iterating over the source input.
pub struct Scanner<'src> {
    source: &'src str,
    line: usize,
    start: usize,   // byte offset of the current lexeme
    current: usize, // byte offset of the scan cursor
    tokens: Vec<Token>,
    errors: Vec<ScanError>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            line: 1,
            start: 0,
            current: 0,
            tokens: vec![],
            errors: vec![],
        }
    }

    /// Scan the whole source, returning the token sequence terminated by a
    /// single EOF token, along with every lexical error encountered.
    pub fn scan_tokens(mut self) -> (Vec<Token>, Vec<ScanError>) {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }
        self.add_token(TokenKind::Eof);
        (self.tokens, self.errors)
    }

    fn scan_token(&mut self) {
        let c = self.advance();
        if let Some(kind) = SINGLE_CHAR_TOKENS.get(&c) {
            self.add_token(*kind);
            return;
        }
        match c {
            '!' => {
                let kind = if self.matches('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.matches('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.matches('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.matches('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            '/' => {
                if self.matches('/') {
                    // A comment runs to the end of the line, or to the end
                    // of input if no newline follows.
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            '"' => self.string(),
            '0'..='9' => self.number(),
            d if d.is_ascii_alphabetic() || d == '_' => self.identifier(),
            ' ' | '\r' | '\t' => {
                // Ignore whitespace.
            }
            '\n' => {
                self.line += 1;
            }
            _ => {
                self.errors.push(ScanError::UnexpectedCharacter {
                    character: c,
                    line: self.line,
                });
            }
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current..]
            .chars()
            .next()
            .expect("Got past end of input");
        self.current += c.len_utf8();
        c
    }

    /// Return true and advance if the next character is the expected one.
    fn matches(&mut self, expected: char) -> bool {
        if self.is_at_end() {
            return false;
        }
        if self.peek() != expected {
            return false;
        }
        self.current += expected.len_utf8();
        true
    }

    fn peek(&self) -> char {
        self.source[self.current..].chars().next().unwrap_or('\0')
    }

    fn peek_next(&self) -> char {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next().unwrap_or('\0')
    }

    fn string(&mut self) {
        let opening_line = self.line;
        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }
        if self.is_at_end() {
            self.errors.push(ScanError::UnterminatedString {
                line: opening_line,
            });
            return;
        }
        // The closing ".
        self.advance();

        // Skip the quotes around the string value.
        let value = &self.source[self.start + 1..self.current - 1];
        self.add_token_with_value(TokenKind::String, TokenValue::Str(value.into()));
    }

    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }
        // A fractional part needs a digit after the dot, otherwise the dot
        // is left for the next lexeme.
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }
        match self.lexeme().parse::<f64>() {
            Ok(n) => self.add_token_with_value(TokenKind::Number, TokenValue::Num(n)),
            Err(_) => self.errors.push(ScanError::NumberFormat {
                lexeme: self.lexeme().to_string(),
                line: self.line,
            }),
        }
    }

    fn identifier(&mut self) {
        while self.peek().is_identifier() {
            self.advance();
        }

        let lexeme = self.lexeme();
        match KEYWORDS.get(lexeme) {
            Some(kind) => self.add_token(*kind),
            None => {
                self.add_token_with_value(TokenKind::Identifier, TokenValue::Str(lexeme.into()))
            }
        }
    }

    fn lexeme(&self) -> &'src str {
        &self.source[self.start..self.current]
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.tokens
            .push(Token::new(kind, TokenValue::None, self.line));
    }

    fn add_token_with_value(&mut self, kind: TokenKind, value: TokenValue) {
        self.tokens.push(Token::new(kind, value, self.line));
    }
}
