//! Command line tokenizer
//!
//! Splits one line of shell input into a command name and its arguments

use super::types::ProtocolError;

/// Shell line parser
pub struct LineParser;

impl LineParser {
    /// Parse a line into tokens
    ///
    /// Returns Ok(Some(tokens)) for a command,
    /// Ok(None) if the line is blank,
    /// Err(e) if the quoting is malformed
    ///
    /// Tokens are separated by whitespace. A token wrapped in double quotes
    /// may contain whitespace or be empty; inside it `\"` and `\\` escape.
    pub fn parse(line: &str) -> Result<Option<Vec<String>>, ProtocolError> {
        let mut tokens = Vec::new();
        let mut chars = line.char_indices().peekable();

        while let Some(&(_, c)) = chars.peek() {
            if c.is_whitespace() {
                chars.next();
                continue;
            }

            if c == '"' {
                chars.next();
                tokens.push(Self::read_quoted(&mut chars)?);

                // A closing quote must end the token
                if let Some(&(next_pos, next)) = chars.peek() {
                    if !next.is_whitespace() {
                        return Err(ProtocolError::UnexpectedQuote(next_pos));
                    }
                }
                continue;
            }

            let mut token = String::new();
            while let Some(&(pos, c)) = chars.peek() {
                if c.is_whitespace() {
                    break;
                }
                if c == '"' {
                    return Err(ProtocolError::UnexpectedQuote(pos));
                }
                token.push(c);
                chars.next();
            }
            tokens.push(token);
        }

        if tokens.is_empty() {
            Ok(None)
        } else {
            Ok(Some(tokens))
        }
    }

    /// Read a quoted token body, the opening quote already consumed
    fn read_quoted<I>(chars: &mut std::iter::Peekable<I>) -> Result<String, ProtocolError>
    where
        I: Iterator<Item = (usize, char)>,
    {
        let mut token = String::new();

        while let Some((_, c)) = chars.next() {
            match c {
                '"' => return Ok(token),
                '\\' => match chars.next() {
                    Some((_, escaped @ ('"' | '\\'))) => token.push(escaped),
                    Some((_, other)) => {
                        token.push('\\');
                        token.push(other);
                    }
                    None => return Err(ProtocolError::UnterminatedQuote),
                },
                other => token.push(other),
            }
        }

        Err(ProtocolError::UnterminatedQuote)
    }
}
