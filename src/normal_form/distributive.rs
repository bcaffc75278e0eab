/*
Distributive CNF lowering: remove `->`/`<->` (CDNNF), push negations
down to the atoms (NNF), then distribute `or` over `and` by cartesian product
to reach clausal form. No auxiliary variables are introduced, but an
`Or` of `k` conjunctions of size `n` each produces up to `n^k` clauses.
*/

use crate::cnf::{Cnf, Literal, VarTable};
use crate::expr::Expr;

pub fn compile(expr: &Expr, vars: VarTable) -> Cnf {
    let mut vars = vars;
    let nnf = to_nnf(&remove_implications(expr), false);
    let clauses = products(&nnf, &mut vars);
    let mut cnf = Cnf::new(vars);
    for clause in clauses {
        cnf.add_clause(clause);
    }
    cnf
}

fn remove_implications(expr: &Expr) -> Expr {
    match expr {
        Expr::Var(name) => Expr::Var(name.clone()),
        Expr::Bool(b) => Expr::Bool(*b),
        Expr::Not(inner) => Expr::Not(Box::new(remove_implications(inner))),
        Expr::And(children) => Expr::And(children.iter().map(remove_implications).collect()),
        Expr::Or(children) => Expr::Or(children.iter().map(remove_implications).collect()),
        Expr::Imply(a, b) => {
            let a = remove_implications(a);
            let b = remove_implications(b);
            Expr::Or(vec![Expr::Not(Box::new(a)), b])
        }
        Expr::Iff(a, b) => {
            let a = remove_implications(a);
            let b = remove_implications(b);
            Expr::And(vec![
                Expr::Or(vec![Expr::Not(Box::new(a.clone())), b.clone()]),
                Expr::Or(vec![Expr::Not(Box::new(b)), a]),
            ])
        }
    }
}

/// Pushes negation down to the atoms. `negate` is whether the term being
/// visited sits under an odd number of enclosing negations.
fn to_nnf(expr: &Expr, negate: bool) -> Expr {
    match expr {
        Expr::Var(name) => {
            if negate {
                Expr::Not(Box::new(Expr::Var(name.clone())))
            } else {
                Expr::Var(name.clone())
            }
        }
        Expr::Bool(b) => Expr::Bool(b ^ negate),
        Expr::Not(inner) => to_nnf(inner, !negate),
        Expr::And(children) => fold_nnf(children, negate, true),
        Expr::Or(children) => fold_nnf(children, negate, false),
        Expr::Imply(_, _) | Expr::Iff(_, _) => {
            unreachable!("remove_implications runs before to_nnf")
        }
    }
}

fn fold_nnf(children: &[Expr], negate: bool, is_and: bool) -> Expr {
    if children.is_empty() {
        // AND() is vacuously true, OR() is vacuously false; De Morgan's under
        // negation swaps which one an empty AND/OR degenerates to.
        let vacuous_true = is_and;
        return Expr::Bool(vacuous_true ^ negate);
    }
    let mapped: Vec<Expr> = children.iter().map(|c| to_nnf(c, negate)).collect();
    match (is_and, negate) {
        (true, false) | (false, true) => Expr::And(mapped),
        (true, true) | (false, false) => Expr::Or(mapped),
    }
}

/// Builds the cartesian-product clause set for an NNF expression. Each
/// returned `Vec<Literal>` is one (not yet deduplicated) clause.
fn products(expr: &Expr, vars: &mut VarTable) -> Vec<Vec<Literal>> {
    match expr {
        Expr::Bool(true) => vec![],
        Expr::Bool(false) => vec![vec![]],
        Expr::Var(name) => vec![vec![vars.intern(name) as Literal]],
        Expr::Not(inner) => match inner.as_ref() {
            Expr::Var(name) => vec![vec![-(vars.intern(name) as Literal)]],
            Expr::Bool(b) => {
                if *b {
                    vec![vec![]]
                } else {
                    vec![]
                }
            }
            _ => unreachable!("NNF guarantees negation only wraps an atom"),
        },
        Expr::And(children) => children.iter().flat_map(|c| products(c, vars)).collect(),
        Expr::Or(children) => {
            let mut acc: Vec<Vec<Literal>> = vec![Vec::new()];
            for child in children {
                let child_clauses = products(child, vars);
                let mut next = Vec::with_capacity(acc.len() * child_clauses.len().max(1));
                for prefix in &acc {
                    for clause in &child_clauses {
                        let mut combined = prefix.clone();
                        combined.extend_from_slice(clause);
                        next.push(combined);
                    }
                }
                acc = next;
            }
            acc
        }
        Expr::Imply(_, _) | Expr::Iff(_, _) => {
            unreachable!("remove_implications runs before products")
        }
    }
}
