#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eof,

    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    KwAnd,
    KwClass,
    KwElse,
    KwFalse,
    KwFun,
    KwFor,
    KwIf,
    KwNil,
    KwOr,
    KwPrint,
    KwReturn,
    KwSuper,
    KwThis,
    KwTrue,
    KwVar,
    KwWhile,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::KwAnd => "AND",
            TokenKind::KwClass => "CLASS",
            TokenKind::KwElse => "ELSE",
            TokenKind::KwFalse => "FALSE",
            TokenKind::KwFun => "FUN",
            TokenKind::KwFor => "FOR",
            TokenKind::KwIf => "IF",
            TokenKind::KwNil => "NIL",
            TokenKind::KwOr => "OR",
            TokenKind::KwPrint => "PRINT",
            TokenKind::KwReturn => "RETURN",
            TokenKind::KwSuper => "SUPER",
            TokenKind::KwThis => "THIS",
            TokenKind::KwTrue => "TRUE",
            TokenKind::KwVar => "VAR",
            TokenKind::KwWhile => "WHILE",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Payload attached to a token: identifiers and strings carry text,
/// numbers carry an f64, everything else carries nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    None,
    Str(String),
    Num(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: TokenValue, line: usize) -> Self {
        Self { kind, value, line }
    }

    pub fn literal_num(&self) -> Option<f64> {
        match self.value {
            TokenValue::Num(x) => Some(x),
            _ => None,
        }
    }

    pub fn literal_str(&self) -> Option<&str> {
        match self.value {
            TokenValue::Str(ref s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            TokenValue::None => write!(f, "{} {}", self.kind, self.line),
            TokenValue::Str(s) => write!(f, "{} \"{}\" {}", self.kind, s, self.line),
            TokenValue::Num(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{} {:.1} {}", self.kind, n, self.line)
                } else {
                    write!(f, "{} {} {}", self.kind, n, self.line)
                }
            }
        }
    }
}
