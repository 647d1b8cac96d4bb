//! Fragment parsers
//!
//! Entry points for text that holds only a match expression or only a filter
//! chain, such as annotation values. They share the lexer, decoders and
//! error types with the document parser.

use crate::error::RouteResult;
use crate::lexer::tokenize;
use crate::parser::ast::{Filter, Predicate};
use crate::parser::Parser;

/// Parse `predicate ('&&' predicate)*`. `*` conjuncts are accepted and
/// dropped; an empty fragment yields no predicates.
pub fn parse_predicates(fragment: &str) -> RouteResult<Vec<Predicate>> {
    let tokens = tokenize(fragment)?;
    let predicates = Parser::new(tokens).parse_predicate_fragment()?;

    tracing::debug!(predicates = predicates.len(), "parsed predicate fragment");
    Ok(predicates)
}

/// Parse `filter ('->' filter)*`. An empty fragment yields no filters.
pub fn parse_filters(fragment: &str) -> RouteResult<Vec<Filter>> {
    let tokens = tokenize(fragment)?;
    let filters = Parser::new(tokens).parse_filter_fragment()?;

    tracing::debug!(filters = filters.len(), "parsed filter fragment");
    Ok(filters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouteError;
    use crate::parser::ast::Arg;

    #[test]
    fn test_empty_fragments() {
        assert_eq!(parse_predicates("").unwrap(), vec![]);
        assert_eq!(parse_predicates("  \n\t").unwrap(), vec![]);
        assert_eq!(parse_filters("").unwrap(), vec![]);
        assert_eq!(parse_filters(" ").unwrap(), vec![]);
    }

    #[test]
    fn test_catch_all_fragment() {
        assert_eq!(parse_predicates("*").unwrap(), vec![]);
    }

    #[test]
    fn test_predicates_keep_promoted_names() {
        // Promotion only happens when a whole route is built.
        let predicates = parse_predicates(r#"Path("/a") && Traffic(.5)"#).unwrap();
        assert_eq!(
            predicates,
            vec![
                Predicate::new("Path", vec!["/a".into()]),
                Predicate::new("Traffic", vec![Arg::Number(0.5)]),
            ]
        );
    }

    #[test]
    fn test_fragment_errors() {
        assert!(matches!(parse_filters(r#"a("x"#), Err(RouteError::Lex(_))));
        assert!(matches!(parse_filters("a() b()"), Err(RouteError::Parse(_))));
        assert!(matches!(parse_filters(r#"a() -> "https://x.org""#), Err(RouteError::Parse(_))));
        assert!(matches!(parse_predicates("A() -> b()"), Err(RouteError::Parse(_))));
        assert!(matches!(parse_predicates("A() &&"), Err(RouteError::Parse(_))));
    }
}
