//! Shell reply types
//!
//! Defines the typed result of a command and how the shell prints it

use std::fmt::{self, Write as _};

/// Reply produced by a command
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Acknowledgement: OK
    Ok,

    /// A stored value: "Alice"
    Value(String),

    /// Missing value: (nil)
    Nil,

    /// Integers: (integer) 3
    Integer(i64),

    /// Booleans: true / false
    Bool(bool),

    /// List of strings: 1) "a"
    List(Vec<String>),

    /// Free-form text, printed as is
    Text(String),

    /// Errors: (error) message
    Error(String),
}

impl Reply {
    /// Create a value reply
    pub fn value(s: impl Into<String>) -> Self {
        Reply::Value(s.into())
    }

    /// Create an integer reply
    pub fn integer(i: i64) -> Self {
        Reply::Integer(i)
    }

    /// Create a text reply
    pub fn text(s: impl Into<String>) -> Self {
        Reply::Text(s.into())
    }

    /// Create an error
    pub fn error(s: impl Into<String>) -> Self {
        Reply::Error(s.into())
    }

    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error(_))
    }
}

/// Write `s` in double quotes, escaping only `"` and `\`
///
/// The output reads back through the line tokenizer as the same string.
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        if c == '"' || c == '\\' {
            f.write_char('\\')?;
        }
        f.write_char(c)?;
    }
    f.write_char('"')
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Ok => write!(f, "OK"),
            Reply::Value(v) => write_quoted(f, v),
            Reply::Nil => write!(f, "(nil)"),
            Reply::Integer(i) => write!(f, "(integer) {}", i),
            Reply::Bool(b) => write!(f, "{}", b),
            Reply::List(items) if items.is_empty() => write!(f, "(empty list)"),
            Reply::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}) ", i + 1)?;
                    write_quoted(f, item)?;
                }
                Ok(())
            }
            Reply::Text(t) => write!(f, "{}", t),
            Reply::Error(e) => write!(f, "(error) {}", e),
        }
    }
}

/// Line tokenizing errors
#[derive(Debug, Clone, PartialEq)]
pub enum ProtocolError {
    /// A quoted token was never closed
    UnterminatedQuote,

    /// A quote appeared in the middle of a bare token
    UnexpectedQuote(usize),

    /// The line is not valid UTF-8
    InvalidUtf8,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::UnterminatedQuote => write!(f, "unterminated quoted string"),
            ProtocolError::UnexpectedQuote(pos) => {
                write!(f, "unexpected quote at position {}", pos)
            }
            ProtocolError::InvalidUtf8 => write!(f, "invalid UTF-8"),
        }
    }
}

impl std::error::Error for ProtocolError {}
