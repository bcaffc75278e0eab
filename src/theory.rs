/*
SMT theory plug-in interface.

`Theory` is deliberately minimal: given a `Problem`, decide satisfiability.
`BooleanTheory` is the provider this crate ships, wrapping the CPL pipeline
and the three propositional procedures. A linear-arithmetic (simplex) theory
for combination with this one is an explicit non-goal and has no
implementation here — `Theory`/`Problem` exist so one could be added as an
independent plug-in without touching the Boolean core.
*/

use crate::cnf::{Cnf, Model};
use crate::config::SolverConfig;
use crate::solve::{cdcl, dp, dpll};

pub trait Problem {
    fn is_satisfiable(&self) -> bool;
}

pub trait Theory {
    type Problem: Problem;

    fn check(&self, problem: &Self::Problem) -> bool;
}

/// A CNF formula together with which procedure should decide it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Procedure {
    Dp,
    Dpll,
}

pub struct BooleanProblem {
    pub cnf: Cnf,
    pub procedure: Procedure,
}

impl Problem for BooleanProblem {
    fn is_satisfiable(&self) -> bool {
        match self.procedure {
            Procedure::Dp => dp::check_sat_by_dp(&self.cnf),
            Procedure::Dpll => dpll::check_sat_by_dpll(&self.cnf).is_some(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BooleanTheory;

impl Theory for BooleanTheory {
    type Problem = BooleanProblem;

    fn check(&self, problem: &Self::Problem) -> bool {
        problem.is_satisfiable()
    }
}

/// Decides a CNF3 formula via CDCL and, if satisfiable, returns the model.
/// CDCL needs the 3-CNF shape and a `SolverConfig` (for the decision seed
/// and invariant checks), so it sits outside the uniform `Theory` trait
/// above rather than forcing every theory to accept that extra state.
pub fn check_via_cdcl(cnf3: &crate::cnf3::Cnf3, config: &SolverConfig) -> Option<Model> {
    cdcl::solve(cnf3, config)
}
