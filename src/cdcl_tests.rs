/* START OF CDCL TESTS */

#[cfg(test)]
mod test {
    use crate::cnf::{Cnf, VarTable};
    use crate::cnf3::Cnf3;
    use crate::config::SolverConfig;
    use crate::solve::cdcl::solve;

    fn config() -> SolverConfig {
        SolverConfig { enable_cdcl_checks: true, cdcl_seed: 7, ..SolverConfig::default() }
    }

    #[test]
    fn conflicting_unit_clauses_are_unsat() {
        let mut cnf = Cnf::new(VarTable::new());
        cnf.add_clause(vec![1]);
        cnf.add_clause(vec![-1]);
        let cnf3 = Cnf3::from_cnf(cnf).unwrap();
        assert!(solve(&cnf3, &config()).is_none());
    }

    #[test]
    fn pigeonhole_two_pigeons_one_hole_is_unsat() {
        let mut cnf = Cnf::new(VarTable::new());
        cnf.add_clause(vec![1]);
        cnf.add_clause(vec![2]);
        cnf.add_clause(vec![-1, -2]);
        let cnf3 = Cnf3::from_cnf(cnf).unwrap();
        assert!(solve(&cnf3, &config()).is_none());
    }

    #[test]
    fn simple_satisfiable_instance_produces_a_model() {
        let mut vars = VarTable::new();
        let p = vars.intern("p") as i64;
        let q = vars.intern("q") as i64;
        let mut cnf = Cnf::new(vars);
        cnf.add_clause(vec![p, q]);
        cnf.add_clause(vec![-p, q]);
        let cnf3 = Cnf3::from_cnf(cnf).unwrap();
        let model = solve(&cnf3, &config()).expect("satisfiable");
        assert_eq!(model.get("q"), Some(&true));
    }

    #[test]
    fn three_way_conflict_over_a_triple_clause_is_detected() {
        // (a \/ b \/ c) together with units forcing a, b, c all false.
        let mut cnf = Cnf::new(VarTable::new());
        cnf.add_clause(vec![1, 2, 3]);
        cnf.add_clause(vec![-1]);
        cnf.add_clause(vec![-2]);
        cnf.add_clause(vec![-3]);
        let cnf3 = Cnf3::from_cnf(cnf).unwrap();
        assert!(solve(&cnf3, &config()).is_none());
    }

    #[test]
    fn same_seed_is_deterministic() {
        let mut vars = VarTable::new();
        let a = vars.intern("a") as i64;
        let b = vars.intern("b") as i64;
        let c = vars.intern("c") as i64;
        let mut cnf = Cnf::new(vars);
        cnf.add_clause(vec![a, b, c]);
        cnf.add_clause(vec![-a, b]);
        cnf.add_clause(vec![-b, c]);
        let cnf3 = Cnf3::from_cnf(cnf).unwrap();

        let first = solve(&cnf3, &config());
        let second = solve(&cnf3, &config());
        assert_eq!(first, second);
    }
}
