/*
cpl_sat: a propositional satisfiability solver fronted by a small
S-expression constraint language (CPL). Source text is tokenized and parsed
into `Term`s, macro-expanded, lowered into a propositional `Expr`, then
lowered again into clausal form by one of two transforms (distributive or
Tseytin) before being handed to one of three decision procedures (DP, DPLL,
CDCL).
*/

pub mod cnf;
pub mod cnf3;
pub mod config;
pub mod error;
pub mod expr;
pub mod macros;
pub mod normal_form;
pub mod solve;
pub mod stats;
pub mod term;
pub mod theory;
pub mod token;

#[cfg(test)]
mod term_tests;
#[cfg(test)]
mod macros_tests;
#[cfg(test)]
mod expr_tests;
#[cfg(test)]
mod dp_tests;
#[cfg(test)]
mod cdcl_tests;

use std::collections::HashMap;

use cnf::{Cnf, Model, VarTable};
use cnf3::Cnf3;
use config::{NormalForm, SolverConfig};
use error::Error;
use expr::Expr;
use stats::Statistics;

/// Tokenizes, parses, macro-expands and lowers `source` into a propositional
/// expression, resolving any `(? v)` references against `assignment`.
pub fn compile_cpl_to_expr(source: &str, assignment: &HashMap<String, bool>) -> Result<Expr, Error> {
    let tokens = token::tokenize(source)?;
    log::trace!("tokenized {} tokens", tokens.len());
    let top_level = term::parse(&tokens)?;
    let (defs, subject) = macros::split_definitions(top_level)?;
    log::debug!("expanding {} macro definitions", defs.len());
    let expanded = macros::expand(&defs, subject)?;
    let expr = expr::lower(&expanded, assignment)?;
    Ok(expr)
}

/// Compiles CPL source all the way to clausal form, per the configured
/// normal-form transform.
pub fn compile_cpl_to_cnf(source: &str, assignment: &HashMap<String, bool>, normal_form: NormalForm) -> Result<Cnf, Error> {
    let expr = compile_cpl_to_expr(source, assignment)?;
    let vars = VarTable::new();
    log::debug!("lowering via {normal_form:?}");
    let cnf = match normal_form {
        NormalForm::Distributive => normal_form::distributive::compile(&expr, vars),
        NormalForm::Tseytin => normal_form::tseytin::compile(&expr, vars),
    };
    log::info!("lowered to {} clauses over {} variables", cnf.clauses.len(), cnf.vars.len());
    Ok(cnf)
}

/// Reshapes a `Cnf` into the interned 3-CNF the CDCL engine requires. Every
/// clause must have one, two or three literals — which Tseytin lowering
/// guarantees by construction, but the distributive lowering does not.
pub fn convert_clauses_to_cdcl_input(cnf: Cnf) -> Result<Cnf3, Error> {
    Ok(Cnf3::from_cnf(cnf)?)
}

/// The inverse conversion, e.g. for cross-checking CDCL's input against
/// what DP/DPLL see.
pub fn convert_cdcl_input_to_clauses(cnf3: &Cnf3) -> Cnf {
    cnf3.to_cnf()
}

pub fn check_sat_by_dp(cnf: &Cnf) -> bool {
    solve::dp::check_sat_by_dp(cnf)
}

pub fn check_sat_by_dpll(cnf: &Cnf) -> Option<Model> {
    solve::dpll::check_sat_by_dpll(cnf)
}

pub fn check_sat_by_cdcl(cnf3: &Cnf3, config: &SolverConfig) -> Option<Model> {
    solve::cdcl::solve(cnf3, config)
}

pub fn check_sat_by_cdcl_with_stats(cnf3: &Cnf3, config: &SolverConfig, stats: &mut Statistics) -> Option<Model> {
    solve::cdcl::solve_with_stats(cnf3, config, stats)
}
