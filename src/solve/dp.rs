/*
Davis-Putnam: eliminate variables one at a time by resolution instead
of branching. For the variable being eliminated, every clause containing it
positively is resolved against every clause containing it negatively; the
originals are dropped and the (non-tautological) resolvents take their
place. An empty clause means unsatisfiable; running out of clauses before
running out of variables means satisfiable. No model is produced — a
resolution refutation doesn't carry one, and reconstructing a witness from
the elimination order is exactly the job DPLL and CDCL do instead.
*/

use crate::cnf::{Clause, Cnf, Literal};
use crate::stats::Statistics;

pub fn check_sat_by_dp(cnf: &Cnf) -> bool {
    let mut stats = Statistics::new();
    check_sat_by_dp_with_stats(cnf, &mut stats)
}

/// Discards any clause C for which some other, distinct clause C' is a
/// literal subset of C: C' already forces everything C would, so C adds
/// nothing. Smaller clauses are considered first since only a smaller (or
/// equal) clause can subsume a larger one.
fn remove_subsumed(mut clauses: Vec<Clause>) -> Vec<Clause> {
    clauses.sort_by_key(|c| c.literals.len());
    let mut kept: Vec<Clause> = Vec::with_capacity(clauses.len());
    'clauses: for clause in clauses {
        for other in &kept {
            if other.literals.len() < clause.literals.len() && other.literals.iter().all(|l| clause.literals.contains(l)) {
                continue 'clauses;
            }
        }
        kept.push(clause);
    }
    kept
}

pub fn check_sat_by_dp_with_stats(cnf: &Cnf, stats: &mut Statistics) -> bool {
    let mut clauses: Vec<Clause> = cnf.clauses.clone();
    clauses.sort();
    clauses.dedup();
    clauses = remove_subsumed(clauses);
    let mut remaining_vars: Vec<Literal> = cnf.vars.vars().map(|v| v as Literal).collect();

    loop {
        if clauses.iter().any(Clause::is_empty) {
            return false;
        }
        if clauses.is_empty() {
            return true;
        }
        let var = match remaining_vars.pop() {
            Some(v) => v,
            None => return true,
        };

        let (with_pos, rest): (Vec<Clause>, Vec<Clause>) =
            clauses.into_iter().partition(|c| c.literals.contains(&var));
        let (with_neg, mut untouched): (Vec<Clause>, Vec<Clause>) =
            rest.into_iter().partition(|c| c.literals.contains(&-var));

        for p in &with_pos {
            for n in &with_neg {
                stats.increment_propagation_count();
                let resolvent: Vec<Literal> = p
                    .literals
                    .iter()
                    .chain(n.literals.iter())
                    .copied()
                    .filter(|&l| l.abs() != var.abs())
                    .collect();
                if let Some(clause) = Clause::new(resolvent) {
                    untouched.push(clause);
                }
            }
        }

        untouched.sort();
        untouched.dedup();
        clauses = remove_subsumed(untouched);
    }
}
