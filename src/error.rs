/*
Error taxonomy for the CPL front-end and solver core.

Names of the error enums overlap with the stage they are raised from, so the
intended use is to namespace via the module the error originates in, e.g.
`error::Lexical::EmptyName`. Each stage enum converts into the top-level
`Error` via `From`, which is what every public, fallible API returns.
*/

use std::fmt;

use crate::token::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lexical {
    EmptyName(Position),
    UnterminatedConstruct(Position),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parse {
    EmptyTuple(Position),
    UnbalancedParens(Position),
    UnexpectedTopLevelAtom(Position),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Macro {
    DuplicateDefinition(String),
    ArityMismatch { name: String, expected: usize, found: usize },
    UnknownReference(String),
    TupleIntoCompoundName(String),
    MalformedDefinition(String),
    MalformedCalc(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    ArityMismatch { operator: String, expected: String, found: usize },
    NumberWhereBooleanExpected(i64),
    UnassignedVariable(String),
    DanglingMacroReference(String),
    NotAnAtom(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Domain {
    NotAThreeCnf { clause_len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverInvariant {
    FixedFreePartitionBroken,
    TrailIndexMismatch { literal: i64, expected: usize, found: Option<usize> },
    DanglingDecisionReference { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Lexical(Lexical),
    Parse(Parse),
    Macro(Macro),
    Shape(Shape),
    Domain(Domain),
    SolverInvariant(SolverInvariant),
}

impl From<Lexical> for Error {
    fn from(e: Lexical) -> Self {
        Error::Lexical(e)
    }
}

impl From<Parse> for Error {
    fn from(e: Parse) -> Self {
        Error::Parse(e)
    }
}

impl From<Macro> for Error {
    fn from(e: Macro) -> Self {
        Error::Macro(e)
    }
}

impl From<Shape> for Error {
    fn from(e: Shape) -> Self {
        Error::Shape(e)
    }
}

impl From<Domain> for Error {
    fn from(e: Domain) -> Self {
        Error::Domain(e)
    }
}

impl From<SolverInvariant> for Error {
    fn from(e: SolverInvariant) -> Self {
        Error::SolverInvariant(e)
    }
}

impl fmt::Display for Lexical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lexical::EmptyName(pos) => write!(f, "empty name at {pos}"),
            Lexical::UnterminatedConstruct(pos) => write!(f, "unterminated construct at {pos}"),
        }
    }
}

impl fmt::Display for Parse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parse::EmptyTuple(pos) => write!(f, "empty tuple at {pos}"),
            Parse::UnbalancedParens(pos) => write!(f, "unbalanced parentheses at {pos}"),
            Parse::UnexpectedTopLevelAtom(pos) => write!(f, "unexpected top-level atom at {pos}"),
        }
    }
}

impl fmt::Display for Macro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Macro::DuplicateDefinition(name) => write!(f, "duplicate macro definition: {name}"),
            Macro::ArityMismatch { name, expected, found } => {
                write!(f, "macro {name} expects {expected} argument(s), found {found}")
            }
            Macro::UnknownReference(name) => write!(f, "dangling macro reference: #{name}"),
            Macro::TupleIntoCompoundName(name) => {
                write!(f, "cannot substitute a tuple into compound name segment: {name}")
            }
            Macro::MalformedDefinition(detail) => write!(f, "malformed macro definition: {detail}"),
            Macro::MalformedCalc(detail) => write!(f, "malformed calc expression: {detail}"),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::ArityMismatch { operator, expected, found } => {
                write!(f, "{operator} expects {expected} argument(s), found {found}")
            }
            Shape::NumberWhereBooleanExpected(n) => {
                write!(f, "number {n} used where a Boolean expression was required")
            }
            Shape::UnassignedVariable(label) => {
                write!(f, "(? {label}) has no assignment")
            }
            Shape::DanglingMacroReference(name) => write!(f, "dangling macro reference: {name}"),
            Shape::NotAnAtom(detail) => write!(f, "expected a name or number, found {detail}"),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::NotAThreeCnf { clause_len } => {
                write!(f, "clause of length {clause_len} is not a 1/2/3-literal clause")
            }
        }
    }
}

impl fmt::Display for SolverInvariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverInvariant::FixedFreePartitionBroken => {
                write!(f, "fixed/free variable partition is broken")
            }
            SolverInvariant::TrailIndexMismatch { literal, expected, found } => {
                write!(f, "trail index mismatch for literal {literal}: expected {expected}, found {found:?}")
            }
            SolverInvariant::DanglingDecisionReference { index } => {
                write!(f, "decision reference at index {index} does not point to a decision rule")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lexical(e) => write!(f, "lexical error: {e}"),
            Error::Parse(e) => write!(f, "parse error: {e}"),
            Error::Macro(e) => write!(f, "macro error: {e}"),
            Error::Shape(e) => write!(f, "shape error: {e}"),
            Error::Domain(e) => write!(f, "domain error: {e}"),
            Error::SolverInvariant(e) => write!(f, "solver invariant error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
