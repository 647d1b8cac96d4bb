//! Fuzz target for the full parse pipeline
//!
//! Whatever parses must print back to text that parses to the same routes.
//!
//! Run with: cargo +nightly fuzz run parser_fuzz -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;
use waypoint_dsl::{parse, parse_filters, parse_predicates, print_routes, PrintOptions, RouteError};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        match parse(input) {
            Ok(routes) => {
                assert!(!routes.is_empty(), "A parsed document has at least one route");

                let printed = print_routes(&routes, &PrintOptions::default());
                let reparsed = parse(&printed).expect("printed routes should parse");
                assert_eq!(reparsed, routes, "Round trip should preserve routes");
            }
            Err(RouteError::Lex(err)) => assert!(err.span.line >= 1),
            Err(RouteError::Parse(err)) => {
                assert!(err.span.line >= 1, "Error line should be >= 1");
                assert!(!err.expected.is_empty(), "Error should say what was expected");
            }
            Err(RouteError::Build(_)) => {}
        }

        // Fragment entry points share the lexer and must not panic either
        let _ = parse_predicates(input);
        let _ = parse_filters(input);
    }
});
