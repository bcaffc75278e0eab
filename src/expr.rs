/*
Propositional AST and AST lowering from macro-expanded terms.

`and`/`/\\`, `or`/`\/`, `not`/`~`, `imply`/`->` and `iff`/`<->` are recognized
both by their word form and their symbolic form. `(_ t1 ... tk)` joins the
textual form of each `ti` with `_` into a single compound variable name —
this is how indexed macro expansion produces a family of distinct variables
from one template. `(? v)` resolves `v` against an externally supplied
assignment map, producing `Var(v)` when the assignment is true or `Not(Var(v))`
when it's false — the variable itself stays named in the compiled form rather
than vanishing into an anonymous constant. An unassigned `v` is an error, not
a false default.
*/

use std::collections::HashMap;

use crate::error::Shape;
use crate::term::Term;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Var(String),
    Bool(bool),
    Not(Box<Expr>),
    And(Vec<Expr>),
    Or(Vec<Expr>),
    Imply(Box<Expr>, Box<Expr>),
    Iff(Box<Expr>, Box<Expr>),
}

/// Lowers a macro-expanded term into a propositional expression, resolving
/// any `(? v)` external-assignment references against `assignment`.
pub fn lower(term: &Term, assignment: &HashMap<String, bool>) -> Result<Expr, Shape> {
    match term {
        Term::Number(n) => Err(Shape::NumberWhereBooleanExpected(*n)),
        Term::Name(s) => {
            if let Some(name) = s.strip_prefix('#') {
                return Err(Shape::DanglingMacroReference(name.to_string()));
            }
            Ok(Expr::Var(s.clone()))
        }
        Term::Tuple(children) => lower_tuple(children, assignment),
    }
}

fn lower_tuple(children: &[Term], assignment: &HashMap<String, bool>) -> Result<Expr, Shape> {
    let head = children
        .first()
        .and_then(Term::as_name)
        .ok_or_else(|| Shape::NotAnAtom("a tuple whose head is not a name".to_string()))?;
    let args = &children[1..];

    match head {
        "and" | "/\\" => {
            let terms = args.iter().map(|a| lower(a, assignment)).collect::<Result<Vec<_>, _>>()?;
            Ok(Expr::And(terms))
        }
        "or" | "\\/" => {
            let terms = args.iter().map(|a| lower(a, assignment)).collect::<Result<Vec<_>, _>>()?;
            Ok(Expr::Or(terms))
        }
        "not" | "~" => {
            if args.len() != 1 {
                return Err(Shape::ArityMismatch { operator: head.to_string(), expected: "1".to_string(), found: args.len() });
            }
            Ok(Expr::Not(Box::new(lower(&args[0], assignment)?)))
        }
        "imply" | "->" => {
            if args.len() != 2 {
                return Err(Shape::ArityMismatch { operator: head.to_string(), expected: "2".to_string(), found: args.len() });
            }
            let a = lower(&args[0], assignment)?;
            let b = lower(&args[1], assignment)?;
            Ok(Expr::Imply(Box::new(a), Box::new(b)))
        }
        "iff" | "<->" => {
            if args.len() != 2 {
                return Err(Shape::ArityMismatch { operator: head.to_string(), expected: "2".to_string(), found: args.len() });
            }
            let a = lower(&args[0], assignment)?;
            let b = lower(&args[1], assignment)?;
            Ok(Expr::Iff(Box::new(a), Box::new(b)))
        }
        "_" => {
            if args.is_empty() {
                return Err(Shape::ArityMismatch { operator: "_".to_string(), expected: "at least 1".to_string(), found: 0 });
            }
            let segments = args.iter().map(atom_text).collect::<Result<Vec<_>, _>>()?;
            Ok(Expr::Var(segments.join("_")))
        }
        "?" => {
            if args.len() != 1 {
                return Err(Shape::ArityMismatch { operator: "?".to_string(), expected: "1".to_string(), found: args.len() });
            }
            let label = atom_text(&args[0])?;
            match assignment.get(&label) {
                Some(true) => Ok(Expr::Var(label)),
                Some(false) => Ok(Expr::Not(Box::new(Expr::Var(label)))),
                None => Err(Shape::UnassignedVariable(label)),
            }
        }
        "empty" => Ok(Expr::Bool(true)),
        other => Err(Shape::NotAnAtom(format!("unrecognized operator {other}"))),
    }
}

fn atom_text(term: &Term) -> Result<String, Shape> {
    match term {
        Term::Name(s) => {
            if let Some(name) = s.strip_prefix('#') {
                Err(Shape::DanglingMacroReference(name.to_string()))
            } else {
                Ok(s.clone())
            }
        }
        Term::Number(n) => Ok(n.to_string()),
        Term::Tuple(_) => Err(Shape::NotAnAtom("a tuple".to_string())),
    }
}
