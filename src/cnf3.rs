/*
Interned 3-CNF: the representation the CDCL engine actually searches
over. Every clause coming out of Tseytin lowering has one, two or three
literals; this module rejects anything wider (`Domain::NotAThreeCnf`) and
reshapes the rest into a form unit propagation can use directly:

- unit clauses are recorded once, to be assigned before search starts.
- two-literal clauses are indexed by the *negation* of either literal,
  mapping to the other: once one side is falsified (its negation becomes
  true), the other is immediately forced true.
- three-literal clauses are indexed by every sorted pair of the *negations*
  of their literals, mapping to the third: once two sides are falsified
  the third is forced true.

A plain `HashMap` keyed this way is simpler to read and to get right than a
dense, pre-sized index keyed by literal bit-patterns, and the clause counts
this solver deals with don't call for the latter.
*/

use std::collections::HashMap;

use crate::cnf::{Clause, Cnf, Literal, VarTable};
use crate::error::Domain;

#[derive(Debug, Clone, Default)]
pub struct Cnf3 {
    pub vars: VarTable,
    pub units: Vec<Literal>,
    pub doubles: Vec<[Literal; 2]>,
    pub triples: Vec<[Literal; 3]>,
    pub double_clauses: HashMap<Literal, Vec<Literal>>,
    pub triple_clauses: HashMap<(Literal, Literal), Vec<Literal>>,
}

pub fn pair_key(a: Literal, b: Literal) -> (Literal, Literal) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl Cnf3 {
    pub fn from_cnf(cnf: Cnf) -> Result<Cnf3, Domain> {
        let mut out = Cnf3 { vars: cnf.vars, ..Default::default() };
        for clause in cnf.clauses {
            out.insert_clause(clause)?;
        }
        Ok(out)
    }

    fn insert_clause(&mut self, clause: Clause) -> Result<(), Domain> {
        match clause.literals.len() {
            1 => {
                self.units.push(clause.literals[0]);
            }
            2 => {
                let [a, b] = [clause.literals[0], clause.literals[1]];
                self.double_clauses.entry(-a).or_default().push(b);
                self.double_clauses.entry(-b).or_default().push(a);
                self.doubles.push([a, b]);
            }
            3 => {
                let [a, b, c] = [clause.literals[0], clause.literals[1], clause.literals[2]];
                self.triple_clauses.entry(pair_key(-a, -b)).or_default().push(c);
                self.triple_clauses.entry(pair_key(-a, -c)).or_default().push(b);
                self.triple_clauses.entry(pair_key(-b, -c)).or_default().push(a);
                self.triples.push([a, b, c]);
            }
            other => return Err(Domain::NotAThreeCnf { clause_len: other }),
        }
        Ok(())
    }

    /// Reconstructs an equivalent plain `Cnf`, e.g. for cross-checking
    /// against the DP/DPLL solvers.
    pub fn to_cnf(&self) -> Cnf {
        let mut cnf = Cnf::new(self.vars.clone());
        for &lit in &self.units {
            cnf.add_clause(vec![lit]);
        }
        for pair in &self.doubles {
            cnf.add_clause(pair.to_vec());
        }
        for triple in &self.triples {
            cnf.add_clause(triple.to_vec());
        }
        cnf
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty() && self.doubles.is_empty() && self.triples.is_empty()
    }
}
