/*
The CDCL search loop.

`fixed` (assignment/position) and `free` partition the variable set exactly
once each: a variable moves from `free` to `fixed` when it is pushed onto the
trail, and back on backjump. `Rule` is the trail entry: which literal, why
(`Antecedent`), and its genealogy (see `conflict.rs`). Unit clauses are
assigned before the first decision (`initialize`); thereafter the loop picks
a free variable, decides it, propagates to a fixpoint, and on conflict
backjumps to just past the genealogy's second-last decision, learning the
negation of its last decision's literal as a permanent unit.
*/

use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cnf::{label_model, Literal, Model, Var};
use crate::cnf3::Cnf3;
use crate::config::SolverConfig;
use crate::error::SolverInvariant;
use crate::stats::Statistics;

use super::conflict::combine_pair;
use super::decide::choose_decision_literal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Antecedent {
    Decision,
    Given,
    Double(usize),
    Triple(usize, usize),
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub literal: Literal,
    pub antecedent: Antecedent,
    pub decide_a: Option<usize>,
    pub decide_b: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    True,
    False,
    Unassigned,
}

struct Conflict {
    decide_a: Option<usize>,
    decide_b: Option<usize>,
}

pub struct Engine<'a> {
    cnf3: &'a Cnf3,
    pub trail: Vec<Rule>,
    position: HashMap<Var, usize>,
    assignment: HashMap<Var, bool>,
    decisions: Vec<usize>,
    free: HashSet<Var>,
    pub learned_units: Vec<Literal>,
    rng: StdRng,
    pub stats: Statistics,
    checks_enabled: bool,
    /// Trail cursor: literals at indices below this have already had their
    /// consequences pushed via `double_clauses`/`triple_clauses`.
    processed: usize,
    /// Mirrors every literal pushed to the trail so far, for triple-clause
    /// lookups that need to ask "is the other half of this pair true yet?"
    true_literals: HashSet<Literal>,
}

impl<'a> Engine<'a> {
    pub fn new(cnf3: &'a Cnf3, config: &SolverConfig) -> Self {
        Engine {
            cnf3,
            trail: Vec::new(),
            position: HashMap::new(),
            assignment: HashMap::new(),
            decisions: Vec::new(),
            free: cnf3.vars.vars().collect(),
            learned_units: Vec::new(),
            rng: StdRng::seed_from_u64(config.cdcl_seed),
            stats: Statistics::new(),
            checks_enabled: config.enable_cdcl_checks,
            processed: 0,
            true_literals: HashSet::new(),
        }
    }

    fn status(&self, lit: Literal) -> Status {
        match self.assignment.get(&lit.unsigned_abs()) {
            None => Status::Unassigned,
            Some(&value) => {
                if value == (lit > 0) {
                    Status::True
                } else {
                    Status::False
                }
            }
        }
    }

    fn index_of(&self, lit: Literal) -> usize {
        self.position[&lit.unsigned_abs()]
    }

    fn push(&mut self, literal: Literal, antecedent: Antecedent, decide_a: Option<usize>, decide_b: Option<usize>) -> usize {
        let idx = self.trail.len();
        let var = literal.unsigned_abs();
        self.assignment.insert(var, literal > 0);
        self.position.insert(var, idx);
        self.free.remove(&var);
        self.trail.push(Rule { literal, antecedent, decide_a, decide_b });
        idx
    }

    fn decide(&mut self, literal: Literal) {
        let idx = self.trail.len();
        let idx = self.push(literal, Antecedent::Decision, Some(idx), None);
        self.decisions.push(idx);
    }

    fn force_given(&mut self, literal: Literal) {
        self.push(literal, Antecedent::Given, None, None);
        self.stats.increment_propagation_count();
    }

    fn force(&mut self, literal: Literal, antecedent: Antecedent) {
        let (decide_a, decide_b) = match antecedent {
            Antecedent::Double(i) => (self.trail[i].decide_a, self.trail[i].decide_b),
            Antecedent::Triple(i, j) => combine_pair(
                (self.trail[i].decide_a, self.trail[i].decide_b),
                (self.trail[j].decide_a, self.trail[j].decide_b),
            ),
            Antecedent::Decision | Antecedent::Given => (None, None),
        };
        self.push(literal, antecedent, decide_a, decide_b);
        self.stats.increment_propagation_count();
    }

    fn conflict_of(&self, literals: &[Literal]) -> Conflict {
        let mut genealogy = (self.trail[self.index_of(literals[0])].decide_a, self.trail[self.index_of(literals[0])].decide_b);
        for &lit in &literals[1..] {
            let entry = &self.trail[self.index_of(lit)];
            genealogy = combine_pair(genealogy, (entry.decide_a, entry.decide_b));
        }
        Conflict { decide_a: genealogy.0, decide_b: genealogy.1 }
    }

    fn propagate(&mut self) -> Option<Conflict> {
        while self.processed < self.trail.len() {
            let idx = self.processed;
            self.processed += 1;
            let lit = self.trail[idx].literal;

            if let Some(forced) = self.cnf3.double_clauses.get(&lit).cloned() {
                for q in forced {
                    match self.status(q) {
                        Status::True => {}
                        Status::False => return Some(self.conflict_of(&[-lit, q])),
                        Status::Unassigned => {
                            let antecedent = Antecedent::Double(idx);
                            self.force(q, antecedent);
                        }
                    }
                }
            }

            let already_true: Vec<Literal> = self.true_literals.iter().copied().collect();
            for other in already_true {
                if let Some(forced) = self.cnf3.triple_clauses.get(&crate::cnf3::pair_key(lit, other)).cloned() {
                    for r in forced {
                        match self.status(r) {
                            Status::True => {}
                            Status::False => return Some(self.conflict_of(&[-lit, -other, r])),
                            Status::Unassigned => {
                                let antecedent = Antecedent::Triple(idx, self.index_of(other));
                                self.force(r, antecedent);
                            }
                        }
                    }
                }
            }

            self.true_literals.insert(lit);
        }
        None
    }

    fn backjump_to(&mut self, target: usize) {
        while self.trail.len() > target {
            let rule = self.trail.pop().expect("loop guard ensures non-empty");
            let var = rule.literal.unsigned_abs();
            self.assignment.remove(&var);
            self.position.remove(&var);
            self.free.insert(var);
            self.true_literals.remove(&rule.literal);
        }
        self.processed = self.processed.min(target);
        self.decisions.retain(|&d| d < target);
    }

    fn check_invariants(&self) -> Result<(), SolverInvariant> {
        if !self.checks_enabled {
            return Ok(());
        }
        if self.free.len() + self.assignment.len() != self.cnf3.vars.len() {
            return Err(SolverInvariant::FixedFreePartitionBroken);
        }
        for (&var, &idx) in &self.position {
            let found = self.trail.get(idx).map(|rule| rule.literal.unsigned_abs());
            if found != Some(var) {
                return Err(SolverInvariant::TrailIndexMismatch { literal: var as Literal, expected: idx, found: self.position.get(&var).copied() });
            }
        }
        Ok(())
    }

    /// Assigns every original unit clause before the first decision.
    fn initialize(&mut self) -> Option<Conflict> {
        for &lit in &self.cnf3.units.clone() {
            match self.status(lit) {
                Status::True => {}
                Status::False => return Some(self.conflict_of(&[lit, -lit])),
                Status::Unassigned => self.force_given(lit),
            }
        }
        None
    }
}

/// Runs CDCL search to completion, returning a satisfying model or `None`.
pub fn solve(cnf3: &Cnf3, config: &SolverConfig) -> Option<Model> {
    let mut stats = Statistics::new();
    solve_with_stats(cnf3, config, &mut stats)
}

pub fn solve_with_stats(cnf3: &Cnf3, config: &SolverConfig, stats: &mut Statistics) -> Option<Model> {
    let mut engine = Engine::new(cnf3, config);

    if let Some(conflict) = engine.initialize() {
        let _ = conflict; // unit clauses alone are contradictory: no decision can save this
        *stats = std::mem::take(&mut engine.stats);
        return None;
    }
    if let Some(conflict) = engine.propagate() {
        let _ = conflict;
        *stats = std::mem::take(&mut engine.stats);
        return None;
    }
    engine.check_invariants().expect("invariant check failed after initialization");

    loop {
        if engine.free.is_empty() {
            *stats = std::mem::take(&mut engine.stats);
            return Some(label_model(&cnf3.vars, &engine.assignment));
        }

        let literal = choose_decision_literal(&engine.free, &mut engine.rng);
        engine.decide(literal);

        loop {
            match engine.propagate() {
                None => break,
                Some(conflict) => {
                    engine.stats.increment_learned_clause_count();
                    match conflict.decide_a {
                        None => {
                            *stats = std::mem::take(&mut engine.stats);
                            return None;
                        }
                        Some(decide_a) => {
                            let flipped = -engine.trail[decide_a].literal;
                            let new_start = conflict.decide_b.map(|d| d + 1).unwrap_or(0);
                            log::trace!("conflict: backjumping to trail index {new_start}, learning {flipped}");
                            engine.backjump_to(new_start);
                            engine.learned_units.push(flipped);
                            engine.force_given(flipped);
                        }
                    }
                }
            }
        }
        engine.check_invariants().expect("invariant check failed after a decision round");
    }
}

