use thiserror::Error;

/// A recoverable lexical error. The scanner records these and keeps going;
/// only the driver decides whether they are fatal to the run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScanError {
    #[error("[line {line}] Error: Unexpected character `{character}`")]
    UnexpectedCharacter { character: char, line: usize },
    #[error("[line {line}] Error: Unterminated string")]
    UnterminatedString { line: usize },
    #[error("[line {line}] Error: Invalid number literal `{lexeme}`")]
    NumberFormat { lexeme: String, line: usize },
}

impl ScanError {
    pub fn line(&self) -> usize {
        match self {
            ScanError::UnexpectedCharacter { line, .. } => *line,
            ScanError::UnterminatedString { line } => *line,
            ScanError::NumberFormat { line, .. } => *line,
        }
    }
}

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Could not read from file: {0}")]
    IoError(#[from] std::io::Error),
}
