/* START OF EXPR TESTS */

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use crate::error::Shape;
    use crate::expr::{lower, Expr};
    use crate::term::parse;
    use crate::token::tokenize;

    fn lower_str(source: &str, assignment: &HashMap<String, bool>) -> Result<Expr, Shape> {
        let tokens = tokenize(source).unwrap();
        let terms = parse(&tokens).unwrap();
        lower(&terms[0], assignment)
    }

    #[test]
    fn bare_name_is_a_variable() {
        assert_eq!(lower_str("p", &HashMap::new()).unwrap(), Expr::Var("p".to_string()));
    }

    #[test]
    fn symbolic_and_matches_word_form() {
        let word = lower_str("(and p q)", &HashMap::new()).unwrap();
        let symbol = lower_str("(/\\ p q)", &HashMap::new()).unwrap();
        assert_eq!(word, symbol);
        assert_eq!(word, Expr::And(vec![Expr::Var("p".to_string()), Expr::Var("q".to_string())]));
    }

    #[test]
    fn not_requires_exactly_one_argument() {
        let err = lower_str("(not p q)", &HashMap::new()).unwrap_err();
        assert!(matches!(err, Shape::ArityMismatch { .. }));
    }

    #[test]
    fn imply_and_iff_lower_to_binary_nodes() {
        assert_eq!(
            lower_str("(-> p q)", &HashMap::new()).unwrap(),
            Expr::Imply(Box::new(Expr::Var("p".to_string())), Box::new(Expr::Var("q".to_string())))
        );
        assert_eq!(
            lower_str("(<-> p q)", &HashMap::new()).unwrap(),
            Expr::Iff(Box::new(Expr::Var("p".to_string())), Box::new(Expr::Var("q".to_string())))
        );
    }

    #[test]
    fn compound_label_joins_segments_with_underscore() {
        assert_eq!(lower_str("(_ x 1 y)", &HashMap::new()).unwrap(), Expr::Var("x_1_y".to_string()));
    }

    #[test]
    fn external_assignment_true_resolves_to_the_variable_itself() {
        let mut assignment = HashMap::new();
        assignment.insert("v".to_string(), true);
        assert_eq!(lower_str("(? v)", &assignment).unwrap(), Expr::Var("v".to_string()));
    }

    #[test]
    fn external_assignment_false_resolves_to_the_negated_variable() {
        let mut assignment = HashMap::new();
        assignment.insert("v".to_string(), false);
        assert_eq!(lower_str("(? v)", &assignment).unwrap(), Expr::Not(Box::new(Expr::Var("v".to_string()))));
    }

    #[test]
    fn unassigned_external_variable_is_an_error() {
        let err = lower_str("(? v)", &HashMap::new()).unwrap_err();
        assert!(matches!(err, Shape::UnassignedVariable(name) if name == "v"));
    }

    #[test]
    fn bare_number_is_not_a_valid_boolean_expression() {
        let err = lower_str("5", &HashMap::new()).unwrap_err();
        assert!(matches!(err, Shape::NumberWhereBooleanExpected(5)));
    }

    #[test]
    fn dangling_macro_reference_is_an_error() {
        let err = lower_str("#foo", &HashMap::new()).unwrap_err();
        assert!(matches!(err, Shape::DanglingMacroReference(name) if name == "foo"));
    }
}
