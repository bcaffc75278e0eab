/*
Clause/CNF data model.

A literal is a signed, non-zero integer: positive for the variable itself,
negative for its negation. A clause is a disjunction of literals with
duplicates removed and no complementary pair (a clause containing both `l`
and `-l` is a tautology and is simply never added — it contributes nothing
to satisfiability). `VarTable` interns variable names (from CPL compound
labels) to small integers and remembers the label for each, the way the
front-end hands variable numbers to the solver core and the solver hands
labelled models back.
*/

use std::collections::HashMap;
use std::fmt;

pub type Literal = i64;
pub type Var = u64;

#[derive(Debug, Default, Clone)]
pub struct VarTable {
    name_to_id: HashMap<String, Var>,
    labels: HashMap<Var, String>,
    next: Var,
}

impl VarTable {
    pub fn new() -> Self {
        VarTable { name_to_id: HashMap::new(), labels: HashMap::new(), next: 1 }
    }

    /// Returns the existing id for `name`, interning a fresh one if needed.
    pub fn intern(&mut self, name: &str) -> Var {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }
        let id = self.next;
        self.next += 1;
        self.name_to_id.insert(name.to_string(), id);
        self.labels.insert(id, name.to_string());
        id
    }

    /// Allocates a variable with no source label, for Tseytin auxiliaries.
    pub fn fresh_auxiliary(&mut self) -> Var {
        let id = self.next;
        self.next += 1;
        let label = format!("_aux{id}");
        self.labels.insert(id, label);
        id
    }

    pub fn label(&self, var: Var) -> Option<&str> {
        self.labels.get(&var).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn vars(&self) -> impl Iterator<Item = Var> + '_ {
        self.labels.keys().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Clause {
    pub literals: Vec<Literal>,
}

impl Clause {
    /// Builds a clause from raw literals, deduplicating and returning `None`
    /// if the clause is a tautology (so the caller can simply drop it).
    pub fn new(mut literals: Vec<Literal>) -> Option<Clause> {
        literals.sort_by_key(|l| l.abs());
        literals.dedup();
        for window in literals.windows(2) {
            if window[0] == -window[1] {
                return None;
            }
        }
        // dedup above only removes adjacent equal values; after sorting by
        // magnitude, a literal and its negation are adjacent too, so a single
        // linear scan catches both exact duplicates and tautologies.
        Some(Clause { literals })
    }

    pub fn unit(&self) -> Option<Literal> {
        if self.literals.len() == 1 {
            Some(self.literals[0])
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, " \\/ ")?;
            }
            write!(f, "{lit}")?;
        }
        write!(f, ")")
    }
}

#[derive(Debug, Clone, Default)]
pub struct Cnf {
    pub clauses: Vec<Clause>,
    pub vars: VarTable,
}

impl Cnf {
    pub fn new(vars: VarTable) -> Self {
        Cnf { clauses: Vec::new(), vars }
    }

    /// Adds a clause built from raw literals; tautologies are silently
    /// dropped rather than stored, since it contributes nothing to satisfiability.
    pub fn add_clause(&mut self, literals: Vec<Literal>) {
        if let Some(clause) = Clause::new(literals) {
            self.clauses.push(clause);
        }
    }

    /// True when the clause set is empty: vacuously satisfiable.
    pub fn is_trivially_true(&self) -> bool {
        self.clauses.is_empty()
    }

    /// True when some clause is empty: unsatisfiable regardless of the rest.
    pub fn is_trivially_false(&self) -> bool {
        self.clauses.iter().any(Clause::is_empty)
    }
}

impl fmt::Display for Cnf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, " /\\ ")?;
            }
            write!(f, "{clause}")?;
        }
        Ok(())
    }
}

/// A satisfying assignment, keyed by the original CPL variable label.
pub type Model = HashMap<String, bool>;

/// Reconstructs a labelled model from a complete var -> literal-sign map.
pub fn label_model(vars: &VarTable, assignment: &HashMap<Var, bool>) -> Model {
    assignment
        .iter()
        .filter_map(|(&var, &value)| vars.label(var).map(|label| (label.to_string(), value)))
        .collect()
}
