/*
Tokenizer for the CPL (constraint programming language) source text.

Whitespace is space and tab; newlines are whitespace too but advance the
line counter. `%` starts a comment to end-of-line. A name is a maximal run
of non-whitespace, non-paren characters; a number token matches `[0-9]+`
only when followed by whitespace, `%`, or a parenthesis, so `a_1` stays one
name while `1 )` yields a number.
*/

use std::fmt;

use crate::error::Lexical;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Open,
    Close,
    Name(String),
    Number(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Position,
}

fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n' || c == '\r'
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Tokenizes CPL source text into a flat list of tokens.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Lexical> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0usize;
    let mut line = 1usize;
    let mut column = 1usize;

    let advance = |i: &mut usize, line: &mut usize, column: &mut usize, chars: &[char]| {
        if chars[*i] == '\n' {
            *line += 1;
            *column = 1;
        } else {
            *column += 1;
        }
        *i += 1;
    };

    while i < chars.len() {
        let c = chars[i];

        if is_whitespace(c) {
            advance(&mut i, &mut line, &mut column, &chars);
            continue;
        }

        if c == '%' {
            while i < chars.len() && chars[i] != '\n' {
                advance(&mut i, &mut line, &mut column, &chars);
            }
            continue;
        }

        let start_pos = Position { line, column };

        if c == '(' {
            tokens.push(Token { kind: TokenKind::Open, pos: start_pos });
            advance(&mut i, &mut line, &mut column, &chars);
            continue;
        }

        if c == ')' {
            tokens.push(Token { kind: TokenKind::Close, pos: start_pos });
            advance(&mut i, &mut line, &mut column, &chars);
            continue;
        }

        // Gather the maximal non-whitespace, non-paren, non-comment run.
        let mut raw = String::new();
        while i < chars.len()
            && !is_whitespace(chars[i])
            && chars[i] != '('
            && chars[i] != ')'
            && chars[i] != '%'
        {
            raw.push(chars[i]);
            advance(&mut i, &mut line, &mut column, &chars);
        }

        if raw.is_empty() {
            return Err(Lexical::EmptyName(start_pos));
        }

        // A number token only if the run is all digits AND the next
        // non-consumed character is whitespace, a paren, a comment start,
        // or end of input.
        let all_digits = !raw.is_empty() && raw.chars().all(is_digit);
        if all_digits {
            let next_ok = i >= chars.len()
                || is_whitespace(chars[i])
                || chars[i] == '('
                || chars[i] == ')'
                || chars[i] == '%';
            if next_ok {
                let n: i64 = raw.parse().expect("all_digits guarantees a valid integer");
                tokens.push(Token { kind: TokenKind::Number(n), pos: start_pos });
                continue;
            }
        }

        tokens.push(Token { kind: TokenKind::Name(raw), pos: start_pos });
    }

    Ok(tokens)
}
