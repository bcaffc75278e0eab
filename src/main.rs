use std::collections::HashMap;
use std::env;
use std::fs;
use std::process::ExitCode;

use cpl_sat::config::{NormalForm, SolverConfig};
use cpl_sat::{check_sat_by_cdcl, compile_cpl_to_cnf, convert_clauses_to_cdcl_input};

/*
Thin demo binary: reads a CPL source file named on the command line, lowers
it via Tseytin, and decides it with CDCL. Not a configurable CLI or a
benchmark harness — see SolverConfig for the knobs the library itself
exposes to embedders.
*/
fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "cpl_sat".to_string());
    let path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: {program} <source.cpl>");
            return ExitCode::FAILURE;
        }
    };

    let source = match fs::read_to_string(&path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("compiling {path}");
    let cnf = match compile_cpl_to_cnf(&source, &HashMap::new(), NormalForm::Tseytin) {
        Ok(cnf) => cnf,
        Err(err) => {
            eprintln!("{path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let cnf3 = match convert_clauses_to_cdcl_input(cnf) {
        Ok(cnf3) => cnf3,
        Err(err) => {
            eprintln!("{path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    log::debug!("handing {} clauses to CDCL", cnf3.units.len() + cnf3.doubles.len() + cnf3.triples.len());
    match check_sat_by_cdcl(&cnf3, &SolverConfig::default()) {
        Some(model) => {
            println!("SAT");
            let mut names: Vec<_> = model.keys().collect();
            names.sort();
            for name in names {
                println!("{name} = {}", model[name]);
            }
            ExitCode::SUCCESS
        }
        None => {
            println!("UNSAT");
            ExitCode::SUCCESS
        }
    }
}
