/*
Tseytin CNF lowering: remove double negation, then walk the
expression bottom-up, introducing one auxiliary variable per subexpression
and a fixed clause template asserting the auxiliary is equivalent to the
subexpression it stands for. Linear in the size of the input; the price is
that the model includes auxiliary variables with no CPL-level label.
*/

use crate::cnf::{Cnf, Literal, Var, VarTable};
use crate::expr::Expr;

pub fn compile(expr: &Expr, vars: VarTable) -> Cnf {
    let mut vars = vars;
    let simplified = remove_double_negation(expr);
    let mut builder = Builder { vars: &mut vars, clauses: Vec::new(), true_var: None };
    let root = builder.encode(&simplified);
    let mut clauses = builder.clauses;
    clauses.push(vec![root]);
    let mut cnf = Cnf::new(vars);
    for clause in clauses {
        cnf.add_clause(clause);
    }
    cnf
}

fn remove_double_negation(expr: &Expr) -> Expr {
    match expr {
        Expr::Not(inner) => {
            if let Expr::Not(inner_inner) = inner.as_ref() {
                remove_double_negation(inner_inner)
            } else {
                Expr::Not(Box::new(remove_double_negation(inner)))
            }
        }
        Expr::Var(name) => Expr::Var(name.clone()),
        Expr::Bool(b) => Expr::Bool(*b),
        Expr::And(children) => Expr::And(children.iter().map(remove_double_negation).collect()),
        Expr::Or(children) => Expr::Or(children.iter().map(remove_double_negation).collect()),
        Expr::Imply(a, b) => {
            Expr::Imply(Box::new(remove_double_negation(a)), Box::new(remove_double_negation(b)))
        }
        Expr::Iff(a, b) => Expr::Iff(Box::new(remove_double_negation(a)), Box::new(remove_double_negation(b))),
    }
}

struct Builder<'a> {
    vars: &'a mut VarTable,
    clauses: Vec<Vec<Literal>>,
    true_var: Option<Var>,
}

impl<'a> Builder<'a> {
    fn true_literal(&mut self) -> Literal {
        if self.true_var.is_none() {
            let v = self.vars.fresh_auxiliary();
            self.true_var = Some(v);
            self.clauses.push(vec![v as Literal]);
        }
        self.true_var.expect("just set above") as Literal
    }

    fn false_literal(&mut self) -> Literal {
        -self.true_literal()
    }

    /// Encodes `expr`, returning the literal that stands for its truth value.
    fn encode(&mut self, expr: &Expr) -> Literal {
        match expr {
            Expr::Var(name) => self.vars.intern(name) as Literal,
            Expr::Bool(true) => self.true_literal(),
            Expr::Bool(false) => self.false_literal(),
            Expr::Not(inner) => {
                let q = self.encode(inner);
                self.tseytin_not(q)
            }
            Expr::And(children) => self.fold(children, Self::tseytin_and, true),
            Expr::Or(children) => self.fold(children, Self::tseytin_or, false),
            Expr::Imply(a, b) => {
                let q = self.encode(a);
                let r = self.encode(b);
                self.tseytin_imply(q, r)
            }
            Expr::Iff(a, b) => {
                let q = self.encode(a);
                let r = self.encode(b);
                self.tseytin_iff(q, r)
            }
        }
    }

    fn fold(&mut self, children: &[Expr], op: fn(&mut Self, Literal, Literal) -> Literal, identity_true: bool) -> Literal {
        if children.is_empty() {
            return if identity_true { self.true_literal() } else { self.false_literal() };
        }
        let mut acc = self.encode(&children[0]);
        for child in &children[1..] {
            let lit = self.encode(child);
            acc = op(self, acc, lit);
        }
        acc
    }

    fn tseytin_not(&mut self, q: Literal) -> Literal {
        let aux = self.vars.fresh_auxiliary() as Literal;
        self.clauses.push(vec![-aux, -q]);
        self.clauses.push(vec![aux, q]);
        aux
    }

    fn tseytin_and(&mut self, q: Literal, r: Literal) -> Literal {
        let aux = self.vars.fresh_auxiliary() as Literal;
        self.clauses.push(vec![-aux, q]);
        self.clauses.push(vec![-aux, r]);
        self.clauses.push(vec![aux, -q, -r]);
        aux
    }

    fn tseytin_or(&mut self, q: Literal, r: Literal) -> Literal {
        let aux = self.vars.fresh_auxiliary() as Literal;
        self.clauses.push(vec![-aux, q, r]);
        self.clauses.push(vec![aux, -q]);
        self.clauses.push(vec![aux, -r]);
        aux
    }

    fn tseytin_imply(&mut self, q: Literal, r: Literal) -> Literal {
        let aux = self.vars.fresh_auxiliary() as Literal;
        self.clauses.push(vec![-aux, -q, r]);
        self.clauses.push(vec![aux, q]);
        self.clauses.push(vec![aux, -r]);
        aux
    }

    fn tseytin_iff(&mut self, q: Literal, r: Literal) -> Literal {
        let aux = self.vars.fresh_auxiliary() as Literal;
        self.clauses.push(vec![-aux, -q, r]);
        self.clauses.push(vec![-aux, q, -r]);
        self.clauses.push(vec![aux, q, r]);
        self.clauses.push(vec![aux, -q, -r]);
        aux
    }
}
