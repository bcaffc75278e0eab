/*
DPLL: unit-propagate, then branch on an undetermined variable, trying
one polarity and then (on failure) the other. Each recursive call clones the
working clause set and the partial assignment before propagating into it,
mirroring a simple recursive-descent solver rather than an in-place
trail with undo — correctness over clause-sharing cleverness.
*/

use std::collections::HashMap;

use crate::cnf::{label_model, Cnf, Literal, Model, Var};
use crate::stats::Statistics;

fn assign(cnf: &mut Cnf, lit: Literal, model: &mut HashMap<Var, bool>) {
    let var = lit.unsigned_abs();
    model.insert(var, lit > 0);
    cnf.clauses.retain(|c| !c.literals.contains(&lit));
    for clause in cnf.clauses.iter_mut() {
        clause.literals.retain(|&l| l != -lit);
    }
}

fn unit_propagate(cnf: &mut Cnf, model: &mut HashMap<Var, bool>, stats: &mut Statistics) {
    loop {
        let unit = cnf.clauses.iter().find_map(|c| c.unit());
        match unit {
            Some(lit) => {
                stats.increment_propagation_count();
                assign(cnf, lit, model);
            }
            None => break,
        }
    }
}

fn pick_literal(cnf: &Cnf) -> Option<Literal> {
    cnf.clauses.first().and_then(|c| c.literals.first().copied())
}

fn search(mut cnf: Cnf, mut model: HashMap<Var, bool>, decision: Option<Literal>, stats: &mut Statistics) -> Option<HashMap<Var, bool>> {
    if let Some(lit) = decision {
        assign(&mut cnf, lit, &mut model);
    }
    unit_propagate(&mut cnf, &mut model, stats);

    if cnf.is_trivially_false() {
        return None;
    }
    if cnf.is_trivially_true() {
        return Some(model);
    }

    let literal = pick_literal(&cnf).expect("non-empty, non-trivial clause set has a literal to pick");

    if let Some(result) = search(cnf.clone(), model.clone(), Some(literal), stats) {
        return Some(result);
    }
    stats.increment_backtrack_count();
    search(cnf, model, Some(-literal), stats)
}

pub fn check_sat_by_dpll(cnf: &Cnf) -> Option<Model> {
    let mut stats = Statistics::new();
    check_sat_by_dpll_with_stats(cnf, &mut stats)
}

pub fn check_sat_by_dpll_with_stats(cnf: &Cnf, stats: &mut Statistics) -> Option<Model> {
    let assignment = search(cnf.clone(), HashMap::new(), None, stats)?;
    Some(label_model(&cnf.vars, &assignment))
}
