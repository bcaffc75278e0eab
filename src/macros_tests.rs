/* START OF MACROS TESTS */

#[cfg(test)]
mod test {
    use crate::error::Macro as MacroError;
    use crate::macros::{expand, split_definitions};
    use crate::term::{parse, Term};
    use crate::token::tokenize;

    fn compile_subject(source: &str) -> Term {
        let tokens = tokenize(source).expect("tokenize");
        let top_level = parse(&tokens).expect("parse");
        let (defs, subject) = split_definitions(top_level).expect("split");
        expand(&defs, subject).expect("expand")
    }

    #[test]
    fn no_definitions_passes_subject_through() {
        let term = compile_subject("(p q)");
        assert_eq!(term, Term::Tuple(vec![Term::Name("p".to_string()), Term::Name("q".to_string())]));
    }

    #[test]
    fn nullary_macro_is_spliced_in() {
        let term = compile_subject("(macro foo (p q)) (and #foo r)");
        assert_eq!(
            term,
            Term::Tuple(vec![
                Term::Name("and".to_string()),
                Term::Tuple(vec![Term::Name("p".to_string()), Term::Name("q".to_string())]),
                Term::Name("r".to_string()),
            ])
        );
    }

    #[test]
    fn parameterized_macro_substitutes_compound_name() {
        let term = compile_subject("(macro bit (i) (x_i y_i)) (bit 3)");
        assert_eq!(
            term,
            Term::Tuple(vec![Term::Name("x_3".to_string()), Term::Name("y_3".to_string())])
        );
    }

    #[test]
    fn tuple_into_compound_name_is_an_error() {
        let tokens = tokenize("(macro bit (i) (x_i)) (bit (a b))").unwrap();
        let top_level = parse(&tokens).unwrap();
        let (defs, subject) = split_definitions(top_level).unwrap();
        let err = expand(&defs, subject).unwrap_err();
        assert!(matches!(err, MacroError::TupleIntoCompoundName(_)));
    }

    #[test]
    fn duplicate_macro_name_is_rejected() {
        let tokens = tokenize("(macro foo (p)) (macro foo (q)) #foo").unwrap();
        let top_level = parse(&tokens).unwrap();
        let err = split_definitions(top_level).unwrap_err();
        assert!(matches!(err, MacroError::DuplicateDefinition(name) if name == "foo"));
    }

    #[test]
    fn arity_mismatch_is_rejected() {
        let tokens = tokenize("(macro bit (i j) (x_i_j)) (bit 1)").unwrap();
        let top_level = parse(&tokens).unwrap();
        let (defs, subject) = split_definitions(top_level).unwrap();
        let err = expand(&defs, subject).unwrap_err();
        assert!(matches!(err, MacroError::ArityMismatch { expected: 2, found: 1, .. }));
    }

    #[test]
    fn if_true_keeps_body() {
        let term = compile_subject("(if 1 p)");
        assert_eq!(term, Term::Name("p".to_string()));
    }

    #[test]
    fn if_false_becomes_empty() {
        let term = compile_subject("(if 0 p)");
        assert_eq!(term, Term::Tuple(vec![Term::Name("empty".to_string())]));
    }

    #[test]
    fn calc_evaluates_postfix_arithmetic() {
        let term = compile_subject("(calc 2 3 +)");
        assert_eq!(term, Term::Number(5));
    }

    #[test]
    fn calc_inside_indexed_body_sees_concrete_index() {
        let term = compile_subject("(/\\* i 1 3 (p_i (calc i 1 +)))");
        assert_eq!(
            term,
            Term::Tuple(vec![
                Term::Name("/\\".to_string()),
                Term::Tuple(vec![Term::Name("p_1".to_string()), Term::Number(2)]),
                Term::Tuple(vec![Term::Name("p_2".to_string()), Term::Number(3)]),
                Term::Tuple(vec![Term::Name("p_3".to_string()), Term::Number(4)]),
            ])
        );
    }

    #[test]
    fn linear_indexed_expansion_covers_the_whole_range() {
        let term = compile_subject("(\\/* i 0 2 p_i)");
        assert_eq!(
            term,
            Term::Tuple(vec![
                Term::Name("\\/".to_string()),
                Term::Name("p_0".to_string()),
                Term::Name("p_1".to_string()),
                Term::Name("p_2".to_string()),
            ])
        );
    }

    #[test]
    fn pairwise_indexed_expansion_covers_all_unordered_pairs() {
        let term = compile_subject("(/\\** 1 i j 3 (x_i_j))");
        assert_eq!(
            term,
            Term::Tuple(vec![
                Term::Name("/\\".to_string()),
                Term::Tuple(vec![Term::Name("x_1_2".to_string())]),
                Term::Tuple(vec![Term::Name("x_1_3".to_string())]),
                Term::Tuple(vec![Term::Name("x_2_3".to_string())]),
            ])
        );
    }
}
