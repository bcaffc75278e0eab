/* START OF TERM TESTS */

#[cfg(test)]
mod test {
    use crate::error::Parse;
    use crate::term::{parse, Term};
    use crate::token::tokenize;

    fn parse_str(source: &str) -> Result<Vec<Term>, Parse> {
        let tokens = tokenize(source).expect("tokenize");
        parse(&tokens)
    }

    #[test]
    fn flat_tuple() {
        let terms = parse_str("(and p q)").unwrap();
        assert_eq!(
            terms,
            vec![Term::Tuple(vec![
                Term::Name("and".to_string()),
                Term::Name("p".to_string()),
                Term::Name("q".to_string()),
            ])]
        );
    }

    #[test]
    fn nested_tuples() {
        let terms = parse_str("(and (or p q) r)").unwrap();
        assert_eq!(
            terms,
            vec![Term::Tuple(vec![
                Term::Name("and".to_string()),
                Term::Tuple(vec![
                    Term::Name("or".to_string()),
                    Term::Name("p".to_string()),
                    Term::Name("q".to_string()),
                ]),
                Term::Name("r".to_string()),
            ])]
        );
    }

    #[test]
    fn multiple_top_level_terms() {
        let terms = parse_str("(macro foo (p)) #foo").unwrap();
        assert_eq!(terms.len(), 2);
    }

    #[test]
    fn empty_tuple_is_rejected() {
        let err = parse_str("()").unwrap_err();
        assert!(matches!(err, Parse::EmptyTuple(_)));
    }

    #[test]
    fn unmatched_close_paren_is_rejected() {
        let err = parse_str("(p))").unwrap_err();
        assert!(matches!(err, Parse::UnbalancedParens(_)));
    }

    #[test]
    fn trailing_open_tuple_is_rejected_at_eof() {
        let err = parse_str("(and p").unwrap_err();
        assert!(matches!(err, Parse::UnbalancedParens(_)));
    }

    #[test]
    fn is_tuple_headed_by_matches_operator_name() {
        let terms = parse_str("(and p q)").unwrap();
        assert!(terms[0].is_tuple_headed_by("and"));
        assert!(!terms[0].is_tuple_headed_by("or"));
    }
}
