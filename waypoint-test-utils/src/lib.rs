//! WAYPOINT Test Utilities
//!
//! Shared test infrastructure for the route language:
//! - Proptest generators for arguments, predicates, filters, backends and routes
//! - Fixture documents covering every backend kind
//! - Assertions for parse outcomes and the print/parse round trip

pub use waypoint_dsl::{
    parse, parse_definitions, parse_filters, parse_predicates, print_filters, print_predicates,
    print_routes, Arg, Backend, BackendType, BuildError, Filter, PrintOptions, Predicate, Route,
    RouteDef, RouteError, RouteResult,
};

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for route-language values.
    //!
    //! Every generated value prints to text that parses back to an equal value.
    //! Regex arguments of generic predicates and filters only come from regex
    //! literals, so `arb_regex_pattern` never leaves a `[` unclosed. Promoted
    //! pattern fields can also be set from strings and use
    //! `arb_promoted_pattern`, which does.

    use super::*;
    use proptest::prelude::*;
    use waypoint_dsl::model::names;

    /// Route ids, filter names and load balancer algorithms.
    pub fn arb_identifier() -> impl Strategy<Value = String> {
        "[a-z_][a-zA-Z0-9_]{0,12}".prop_map(|s| s)
    }

    /// Names for predicates that stay in the generic list.
    pub fn arb_predicate_name() -> impl Strategy<Value = String> {
        "[A-Z][a-zA-Z0-9]{0,10}".prop_filter("promoted predicate name", |name| {
            !names::is_promoted(name)
        })
    }

    /// Any string value, including quotes, backslashes and control characters.
    pub fn arb_string_value() -> impl Strategy<Value = String> {
        prop_oneof![
            "\\PC{0,24}",
            r#"[\\"\a\f\t\n\r\v\x08 a-z/*]{0,12}"#,
            Just(String::new()),
        ]
    }

    fn arb_regex_atom() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-zA-Z0-9.^$*+?|(){}-]{1,4}",
            Just(r"\d".to_string()),
            Just(r"\.".to_string()),
            Just("/".to_string()),
            Just(r"\".to_string()),
            Just("[[:upper:]]".to_string()),
            Just(r"[\]]".to_string()),
            Just(r"[\[]".to_string()),
            "[a-z/\"]{1,3}".prop_map(|class| format!("[{}]", class)),
        ]
    }

    /// A regex pattern as stored after decoding.
    pub fn arb_regex_pattern() -> impl Strategy<Value = String> {
        prop::collection::vec(arb_regex_atom(), 0..6).prop_map(|atoms| atoms.concat())
    }

    /// A pattern stored in a promoted route field. Besides regex patterns
    /// this covers text with unbalanced brackets, as set by `Host("a[b")`.
    pub fn arb_promoted_pattern() -> impl Strategy<Value = String> {
        prop_oneof![
            3 => arb_regex_pattern(),
            1 => "[a-z\\[\\]/]{1,8}",
            1 => arb_regex_pattern().prop_map(|pattern| format!("{}[", pattern)),
        ]
    }

    /// A finite number. Integers are common in real documents, so they get
    /// their own branch.
    pub fn arb_number() -> impl Strategy<Value = f64> {
        prop_oneof![
            (-1000i32..1000).prop_map(f64::from),
            -1.0e6f64..1.0e6f64,
            (0u32..1000).prop_map(|n| f64::from(n) / 1000.0),
        ]
    }

    pub fn arb_arg() -> impl Strategy<Value = Arg> {
        prop_oneof![
            arb_string_value().prop_map(Arg::String),
            arb_regex_pattern().prop_map(Arg::Regex),
            arb_number().prop_map(Arg::Number),
        ]
    }

    pub fn arb_args() -> impl Strategy<Value = Vec<Arg>> {
        prop::collection::vec(arb_arg(), 0..4)
    }

    /// A predicate that is never promoted into a dedicated route field.
    pub fn arb_predicate() -> impl Strategy<Value = Predicate> {
        (arb_predicate_name(), arb_args()).prop_map(|(name, args)| Predicate { name, args })
    }

    pub fn arb_filter() -> impl Strategy<Value = Filter> {
        (arb_identifier(), arb_args()).prop_map(|(name, args)| Filter { name, args })
    }

    pub fn arb_backend() -> impl Strategy<Value = Backend> {
        prop_oneof![
            arb_string_value().prop_map(|url| Backend::Network { url }),
            Just(Backend::Shunt),
            Just(Backend::LoopBack),
            (
                prop::option::of(arb_identifier()),
                prop::collection::vec("https://[a-z]{1,8}\\.org(:[0-9]{2,4})?", 1..4),
            )
                .prop_map(|(algorithm, endpoints)| Backend::LoadBalanced {
                    algorithm,
                    endpoints,
                }),
        ]
    }

    /// A route without an id, with every promoted field exercised.
    pub fn arb_route() -> impl Strategy<Value = Route> {
        let promoted = (
            prop::option::of(arb_string_value()),
            prop::option::of("GET|POST|PUT|DELETE|PATCH"),
            prop::collection::vec(arb_promoted_pattern(), 0..3),
            prop::collection::vec(arb_promoted_pattern(), 0..3),
            prop::collection::btree_map("[A-Z][a-zA-Z-]{0,12}", arb_string_value(), 0..3),
            prop::collection::btree_map(
                "[A-Z][a-zA-Z-]{0,12}",
                prop::collection::vec(arb_promoted_pattern(), 1..3),
                0..3,
            ),
        );

        (
            promoted,
            prop::collection::vec(arb_predicate(), 0..4),
            prop::collection::vec(arb_filter(), 0..4),
            arb_backend(),
        )
            .prop_map(
                |(
                    (path, method, host_regexps, path_regexps, headers, header_regexps),
                    predicates,
                    filters,
                    backend,
                )| {
                    let mut route = Route::new(backend);
                    route.path = path;
                    route.method = method;
                    route.host_regexps = host_regexps;
                    route.path_regexps = path_regexps;
                    route.headers = headers;
                    route.header_regexps = header_regexps;
                    route.predicates = predicates;
                    route.filters = filters;
                    route
                },
            )
    }

    /// One to five routes with distinct ids.
    pub fn arb_document() -> impl Strategy<Value = Vec<Route>> {
        prop::collection::vec(arb_route(), 1..5).prop_map(|routes| {
            routes
                .into_iter()
                .enumerate()
                .map(|(i, route)| route.with_id(format!("route{}", i)))
                .collect()
        })
    }
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

pub mod fixtures {
    //! Fixture documents and the routes they describe.

    use super::*;

    /// A valid document with one route per backend kind.
    pub const BACKENDS_DOCUMENT: &str = r#"
        api: Path("/api") && Method("GET")
            -> setRequestHeader("X-Forwarded-Proto", "https")
            -> "https://api.example.org";
        static: PathRegexp(/^\/static\//) && Header("Accept", "text/css")
            -> <shunt>;
        retry: Host(/^retry[.]example[.]org$/)
            -> setPath("/")
            -> <loopback>;
        pool: Traffic(.25) && HeaderRegexp("User-Agent", /bot/)
            -> <roundRobin, "https://a.example.org", "https://b.example.org">;
        catchAll: * -> "https://www.example.org"
    "#;

    /// Documents that must fail, paired with what they get wrong.
    pub const INVALID_DOCUMENTS: &[(&str, &str)] = &[
        ("", "empty document"),
        ("* -> <>", "load balancer without endpoints"),
        ("* -> <roundRobin>", "algorithm without endpoints"),
        ("* -> number(3.) -> <shunt>", "number without fraction digits"),
        (
            r#"Path("/a") -> <shunt> Path("/b") -> <shunt>"#,
            "missing separator",
        ),
        (r#"Path("/a") -> <shunt>; Path("/b") -> <shunt>"#, "unlabeled definitions"),
        (r#"Path("/a") -> filter()"#, "missing backend"),
        (r#"Path("/a -> <shunt>"#, "unterminated string"),
        ("PathRegexp(/[/) -> <shunt>", "unterminated regex"),
        ("// comment\n* -> <shunt>", "comment syntax"),
    ];

    pub fn catch_all_route() -> Route {
        Route::new(Backend::network("https://www.example.org")).with_id("catchAll")
    }

    pub fn api_route() -> Route {
        let mut route = Route::new(Backend::network("https://api.example.org")).with_id("api");
        route.path = Some("/api".to_string());
        route.method = Some("GET".to_string());
        route.filters.push(Filter::new(
            "setRequestHeader",
            vec!["X-Forwarded-Proto".into(), "https".into()],
        ));
        route
    }

    pub fn load_balanced_route() -> Route {
        let mut route = Route::new(Backend::LoadBalanced {
            algorithm: Some("roundRobin".to_string()),
            endpoints: vec![
                "https://a.example.org".to_string(),
                "https://b.example.org".to_string(),
            ],
        })
        .with_id("pool");
        route
            .predicates
            .push(Predicate::new("Traffic", vec![Arg::Number(0.25)]));
        route
            .header_regexps
            .insert("User-Agent".to_string(), vec!["bot".to_string()]);
        route
    }
}

// ============================================================================
// CUSTOM ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Assertions for parse outcomes and round trips.

    use super::*;

    /// Assert that a RouteResult is Ok.
    #[track_caller]
    pub fn assert_ok<T: std::fmt::Debug>(result: &RouteResult<T>) {
        assert!(result.is_ok(), "Expected Ok, got Err: {:?}", result);
    }

    #[track_caller]
    pub fn assert_lex_error<T: std::fmt::Debug>(result: &RouteResult<T>) {
        match result {
            Err(RouteError::Lex(_)) => {}
            other => panic!("Expected Lex error, got: {:?}", other),
        }
    }

    #[track_caller]
    pub fn assert_parse_error<T: std::fmt::Debug>(result: &RouteResult<T>) {
        match result {
            Err(RouteError::Parse(_)) => {}
            other => panic!("Expected Parse error, got: {:?}", other),
        }
    }

    #[track_caller]
    pub fn assert_build_error<T: std::fmt::Debug>(result: &RouteResult<T>) {
        match result {
            Err(RouteError::Build(_)) => {}
            other => panic!("Expected Build error, got: {:?}", other),
        }
    }

    /// Print the routes with the given options and parse them back.
    #[track_caller]
    pub fn assert_round_trip(routes: &[Route], options: &PrintOptions) {
        let printed = print_routes(routes, options);
        match parse(&printed) {
            Ok(parsed) => assert_eq!(parsed, routes, "round trip changed routes:\n{}", printed),
            Err(err) => panic!("printed routes failed to parse: {}\n{}", err, printed),
        }
    }

    /// Assert that the routes use the given backend kinds, in order.
    #[track_caller]
    pub fn assert_backend_types(routes: &[Route], expected: &[BackendType]) {
        let actual: Vec<BackendType> = routes.iter().map(Route::backend_type).collect();
        assert_eq!(actual, expected);
    }
}

// ============================================================================
// TESTS
// ============================================================================
