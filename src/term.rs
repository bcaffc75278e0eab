/*
CPL terms and the stack-based parser that builds them from tokens.

The parser avoids recursion (so it survives deeply nested input) by keeping
an explicit stack of in-progress tuples: `(` pushes a new empty tuple onto
the stack, `)` pops it (rejecting empty tuples) and appends it to whatever
is now on top of the stack, or to the top-level term list if the stack is
empty.
*/

use crate::error::Parse;
use crate::token::{Position, Token, TokenKind};

#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Name(String),
    Number(i64),
    Tuple(Vec<Term>),
}

impl Term {
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Term::Name(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_tuple_headed_by(&self, op: &str) -> bool {
        match self {
            Term::Tuple(children) => children.first().and_then(Term::as_name) == Some(op),
            _ => false,
        }
    }
}

/// Parses a flat token stream into a sequence of top-level terms.
pub fn parse(tokens: &[Token]) -> Result<Vec<Term>, Parse> {
    // Each stack frame is an in-progress tuple's children plus the position
    // of its opening paren (for error reporting).
    let mut stack: Vec<(Vec<Term>, Position)> = Vec::new();
    let mut top_level: Vec<Term> = Vec::new();

    for token in tokens {
        match &token.kind {
            TokenKind::Open => {
                stack.push((Vec::new(), token.pos));
            }
            TokenKind::Close => {
                let (children, open_pos) = stack.pop().ok_or(Parse::UnbalancedParens(token.pos))?;
                if children.is_empty() {
                    return Err(Parse::EmptyTuple(open_pos));
                }
                let tuple = Term::Tuple(children);
                append_term(&mut stack, &mut top_level, tuple);
            }
            TokenKind::Name(name) => {
                append_term(&mut stack, &mut top_level, Term::Name(name.clone()));
            }
            TokenKind::Number(n) => {
                append_term(&mut stack, &mut top_level, Term::Number(*n));
            }
        }
    }

    if let Some((_, open_pos)) = stack.last() {
        return Err(Parse::UnbalancedParens(*open_pos));
    }

    Ok(top_level)
}

fn append_term(stack: &mut Vec<(Vec<Term>, Position)>, top_level: &mut Vec<Term>, term: Term) {
    match stack.last_mut() {
        Some((children, _)) => children.push(term),
        None => top_level.push(term),
    }
}
