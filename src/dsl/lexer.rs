//! Lexer (tokenizer) for circuit descriptions.

use crate::error::{PhasorError, Result};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in a circuit description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An identifier (component name, parameter name, keyword)
    Identifier,
    /// A number (integer or floating point, possibly with suffix)
    Number,
    /// A directive (starts with '.')
    Directive,
    /// Colon ':' separating a component name from a terminal number
    Colon,
    /// Equals sign '='
    Equals,
    /// Newline
    Newline,
    /// End of file
    Eof,
}

/// Lexer for tokenizing circuit description input.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();

        let start_line = self.line;
        let start_column = self.column;
        let token = |kind, text: String| Token {
            kind,
            text,
            line: start_line,
            column: start_column,
        };

        let Some(&ch) = self.chars.peek() else {
            return Ok(token(TokenKind::Eof, String::new()));
        };

        match ch {
            '\n' => {
                self.advance();
                Ok(token(TokenKind::Newline, "\n".to_string()))
            }
            '.' => {
                self.advance();
                let name = self.read_identifier();
                if name.is_empty() {
                    return Err(PhasorError::lexer(
                        start_line,
                        start_column,
                        "expected directive name after '.'",
                    ));
                }
                Ok(token(TokenKind::Directive, format!(".{}", name)))
            }
            ':' => {
                self.advance();
                Ok(token(TokenKind::Colon, ":".to_string()))
            }
            '=' => {
                self.advance();
                Ok(token(TokenKind::Equals, "=".to_string()))
            }
            '-' | '+' | '0'..='9' => {
                let text = self.read_number();
                if parse_value(&text).is_none() {
                    return Err(PhasorError::lexer(
                        start_line,
                        start_column,
                        format!("malformed number '{}'", text),
                    ));
                }
                Ok(token(TokenKind::Number, text))
            }
            _ if ch.is_alphabetic() || ch == '_' => {
                Ok(token(TokenKind::Identifier, self.read_identifier()))
            }
            _ => Err(PhasorError::lexer(
                start_line,
                start_column,
                format!("unexpected character '{}'", ch),
            )),
        }
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Consume the next char if it matches `pred`.
    fn eat(&mut self, pred: impl Fn(char) -> bool) -> Option<char> {
        match self.chars.peek() {
            Some(&ch) if pred(ch) => self.advance(),
            _ => None,
        }
    }

    /// Append chars to `out` while they match `pred`.
    fn take_while(&mut self, out: &mut String, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.eat(&pred) {
            out.push(ch);
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while self.eat(|c| matches!(c, ' ' | '\t' | '\r')).is_some() {}
            if self.eat(|c| c == '#' || c == ';').is_none() {
                break;
            }
            // Comment runs to end of line
            while self.eat(|c| c != '\n').is_some() {}
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut text = String::new();
        self.take_while(&mut text, |c| c.is_alphanumeric() || c == '_');
        text
    }

    /// `[sign] digits [. digits] [e [sign] digits] [suffix]`
    fn read_number(&mut self) -> String {
        let sign = |c: char| c == '-' || c == '+';
        let digit = |c: char| c.is_ascii_digit();
        let mut text = String::new();

        text.extend(self.eat(sign));
        self.take_while(&mut text, digit);
        if let Some(dot) = self.eat(|c| c == '.') {
            text.push(dot);
            self.take_while(&mut text, digit);
        }
        if let Some(e) = self.eat(|c| c == 'e' || c == 'E') {
            text.push(e);
            text.extend(self.eat(sign));
            self.take_while(&mut text, digit);
        }
        text.extend(self.eat(|c| {
            matches!(c, 'p' | 'n' | 'u' | 'µ' | 'm' | 'k' | 'K' | 'M' | 'G')
        }));

        text
    }
}

/// Parse a number string with optional unit suffix.
///
/// Returns `None` for empty, malformed or non-finite input.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    let last = text.chars().last()?;

    let multiplier = match last {
        'p' => 1e-12,
        'n' => 1e-9,
        'u' | 'µ' => 1e-6,
        'm' => 1e-3,
        'k' | 'K' => 1e3,
        'M' => 1e6,
        'G' => 1e9,
        _ => 1.0,
    };
    let num_str = if multiplier != 1.0 {
        &text[..text.len() - last.len_utf8()]
    } else {
        text
    };

    num_str
        .parse::<f64>()
        .ok()
        .map(|v| v * multiplier)
        .filter(|v| v.is_finite())
}
