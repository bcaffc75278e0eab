/* START OF DP TESTS */

#[cfg(test)]
mod test {
    use crate::cnf::{Cnf, VarTable};
    use crate::solve::dp::check_sat_by_dp;

    #[test]
    fn single_positive_unit_is_sat() {
        let mut cnf = Cnf::new(VarTable::new());
        cnf.add_clause(vec![1]);
        assert!(check_sat_by_dp(&cnf));
    }

    #[test]
    fn unit_and_its_negation_is_unsat() {
        let mut cnf = Cnf::new(VarTable::new());
        cnf.add_clause(vec![1]);
        cnf.add_clause(vec![-1]);
        assert!(!check_sat_by_dp(&cnf));
    }

    #[test]
    fn a_single_clause_with_its_own_complement_is_a_tautology_and_sat() {
        let mut cnf = Cnf::new(VarTable::new());
        cnf.add_clause(vec![1, -1]);
        assert!(check_sat_by_dp(&cnf));
    }

    #[test]
    fn empty_cnf_is_sat() {
        let cnf = Cnf::new(VarTable::new());
        assert!(check_sat_by_dp(&cnf));
    }

    #[test]
    fn pigeonhole_two_pigeons_one_hole_is_unsat() {
        // p1 and p2 both want hole h: (p1) /\ (p2) /\ (~p1 \/ ~p2)
        let mut cnf = Cnf::new(VarTable::new());
        cnf.add_clause(vec![1]);
        cnf.add_clause(vec![2]);
        cnf.add_clause(vec![-1, -2]);
        assert!(!check_sat_by_dp(&cnf));
    }

    #[test]
    fn satisfiable_three_clause_instance() {
        let mut cnf = Cnf::new(VarTable::new());
        cnf.add_clause(vec![1, 2]);
        cnf.add_clause(vec![-1, 2]);
        cnf.add_clause(vec![-2, 3]);
        assert!(check_sat_by_dp(&cnf));
    }

    #[test]
    fn a_subsumed_clause_does_not_turn_a_satisfiable_instance_unsat() {
        // {1} subsumes {1, 2}: the wider clause adds nothing, and dropping it
        // must not change the answer.
        let mut cnf = Cnf::new(VarTable::new());
        cnf.add_clause(vec![1]);
        cnf.add_clause(vec![1, 2]);
        cnf.add_clause(vec![-2, 3]);
        assert!(check_sat_by_dp(&cnf));
    }

    #[test]
    fn subsumption_does_not_mask_a_genuine_contradiction() {
        // {1} subsumes {1, 2}, but {-1} still contradicts the surviving unit.
        let mut cnf = Cnf::new(VarTable::new());
        cnf.add_clause(vec![1]);
        cnf.add_clause(vec![1, 2]);
        cnf.add_clause(vec![-1]);
        assert!(!check_sat_by_dp(&cnf));
    }
}
