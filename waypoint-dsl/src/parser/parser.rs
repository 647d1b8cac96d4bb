//! Parser implementation

use super::ast::*;
use crate::error::{ParseError, RouteResult};
use crate::lexer::*;

// ============================================================================
// PARSER
// ============================================================================

/// Recursive-descent parser over a token sequence.
///
/// Grammar:
/// ```text
/// document   := routedef (';' routedef)* ';'?
/// routedef   := (identifier ':')? matchexpr '->' (filter '->')* backend
/// matchexpr  := term ('&&' term)*
/// term       := '*' | call
/// filter     := call
/// call       := identifier '(' (arg (',' arg)*)? ')'
/// arg        := string | regex | number
/// backend    := string | '<' 'shunt' '>' | '<' 'loopback' '>'
///             | '<' (identifier ',')? string (',' string)* '>'
/// ```
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) pos: usize,
}

impl Parser {
    /// Create a new parser from a vector of tokens.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| &t.kind) != Some(&TokenKind::Eof) {
            let span = tokens.last().map(|t| t.span).unwrap_or_default();
            tokens.push(Token {
                kind: TokenKind::Eof,
                span: Span {
                    start: span.end,
                    ..span
                },
            });
        }
        Self { tokens, pos: 0 }
    }

    /// Parse a whole routing document into its route definitions.
    ///
    /// Definitions must be separated by `;`. When there is more than one,
    /// every definition must carry an id.
    pub fn parse_document(&mut self) -> Result<Vec<RouteDef>, ParseError> {
        if self.is_at_end() {
            return Err(self.error("route definition"));
        }

        let mut definitions: Vec<RouteDef> = Vec::new();

        loop {
            let def = self.parse_route_def()?;

            if let Some(first) = definitions.first() {
                if let Some(unlabeled) = [first, &def].into_iter().find(|d| d.id.is_none()) {
                    return Err(ParseError {
                        span: unlabeled.span,
                        expected: "route id".to_string(),
                        found: "unlabeled route definition".to_string(),
                    });
                }
            }
            definitions.push(def);

            if self.check(&TokenKind::Semicolon) {
                self.advance();
                if self.is_at_end() {
                    break;
                }
            } else if self.is_at_end() {
                break;
            } else {
                return Err(self.error("';'"));
            }
        }

        Ok(definitions)
    }

    /// Parse a fragment holding only a match expression.
    pub fn parse_predicate_fragment(&mut self) -> Result<Vec<Predicate>, ParseError> {
        if self.is_at_end() {
            return Ok(Vec::new());
        }

        let predicates = self.parse_match_expr()?;
        self.expect_end()?;
        Ok(predicates)
    }

    /// Parse a fragment holding only a filter chain.
    pub fn parse_filter_fragment(&mut self) -> Result<Vec<Filter>, ParseError> {
        if self.is_at_end() {
            return Ok(Vec::new());
        }

        let mut filters = vec![self.parse_filter()?];
        while self.check(&TokenKind::Arrow) {
            self.advance();
            filters.push(self.parse_filter()?);
        }
        self.expect_end()?;
        Ok(filters)
    }

    /// Parse a single route definition.
    fn parse_route_def(&mut self) -> Result<RouteDef, ParseError> {
        let span = self.current().span;

        let id = if self.check_identifier() && self.peek_kind(1) == Some(&TokenKind::Colon) {
            let id = self.expect_identifier("route id")?;
            self.advance(); // ':'
            Some(id)
        } else {
            None
        };

        let matchers = self.parse_match_expr()?;
        self.expect(TokenKind::Arrow)?;

        let mut filters = Vec::new();
        while self.check_identifier() {
            filters.push(self.parse_filter()?);
            if !self.check(&TokenKind::Arrow) {
                return Err(self.error("'->' followed by a backend"));
            }
            self.advance();
        }

        let backend = self.parse_backend()?;

        Ok(RouteDef {
            id,
            matchers,
            filters,
            backend,
            span,
        })
    }

    /// Parse `*` or a `&&`-joined conjunction. Catch-all terms are dropped.
    fn parse_match_expr(&mut self) -> Result<Vec<Matcher>, ParseError> {
        let mut matchers = Vec::new();

        loop {
            if self.check(&TokenKind::Any) {
                self.advance();
            } else if self.check_identifier() {
                let (name, args) = self.parse_call("predicate")?;
                matchers.push(Predicate { name, args });
            } else {
                return Err(self.error("predicate or '*'"));
            }

            if !self.check(&TokenKind::And) {
                break;
            }
            self.advance();
        }

        Ok(matchers)
    }

    fn parse_filter(&mut self) -> Result<Filter, ParseError> {
        let (name, args) = self.parse_call("filter")?;
        Ok(Filter { name, args })
    }

    /// Parse `name(args...)`.
    fn parse_call(&mut self, what: &str) -> Result<(String, Vec<Arg>), ParseError> {
        let name = self.expect_identifier(what)?;
        self.expect(TokenKind::LParen)?;

        let mut args = Vec::new();
        if self.check(&TokenKind::RParen) {
            self.advance();
            return Ok((name, args));
        }

        loop {
            args.push(self.parse_arg()?);
            if self.check(&TokenKind::Comma) {
                self.advance();
                continue;
            }
            if self.check(&TokenKind::RParen) {
                self.advance();
                break;
            }
            return Err(self.error("',' or ')'"));
        }

        Ok((name, args))
    }

    fn parse_arg(&mut self) -> Result<Arg, ParseError> {
        let arg = match &self.current().kind {
            TokenKind::String(s) => Arg::String(s.clone()),
            TokenKind::Regex(r) => Arg::Regex(r.clone()),
            TokenKind::Number(n) => Arg::Number(*n),
            _ => return Err(self.error("argument (string, regex or number)")),
        };
        self.advance();
        Ok(arg)
    }

    /// Parse the mandatory backend clause.
    fn parse_backend(&mut self) -> Result<Backend, ParseError> {
        match &self.current().kind {
            TokenKind::String(url) => {
                let url = url.clone();
                self.advance();
                Ok(Backend::Network { url })
            }
            TokenKind::LAngle => {
                self.advance();
                self.parse_angle_backend()
            }
            _ => Err(self.error("backend")),
        }
    }

    /// Parse what follows `<`: `shunt>`, `loopback>` or a load balancer.
    ///
    /// A lone identifier other than `shunt`/`loopback` is an algorithm
    /// without endpoints and is rejected.
    fn parse_angle_backend(&mut self) -> Result<Backend, ParseError> {
        let kind = self.current().kind.clone();
        let next = self.peek_kind(1).cloned();

        match (kind, next) {
            (TokenKind::Identifier(name), Some(TokenKind::RAngle)) => {
                let backend = match name.as_str() {
                    "shunt" => Backend::Shunt,
                    "loopback" => Backend::LoopBack,
                    _ => {
                        self.advance();
                        return Err(self.error("',' followed by load balancer endpoints"));
                    }
                };
                self.advance();
                self.advance();
                Ok(backend)
            }
            (TokenKind::Identifier(algorithm), Some(TokenKind::Comma)) => {
                self.advance();
                self.advance();
                let endpoints = self.parse_endpoints()?;
                Ok(Backend::LoadBalanced {
                    algorithm: Some(algorithm),
                    endpoints,
                })
            }
            (TokenKind::String(_), _) => {
                let endpoints = self.parse_endpoints()?;
                Ok(Backend::LoadBalanced {
                    algorithm: None,
                    endpoints,
                })
            }
            (TokenKind::RAngle, _) => Err(self.error("load balancer endpoint")),
            _ => Err(self.error("'shunt', 'loopback' or load balancer endpoints")),
        }
    }

    /// Parse `"url" (',' "url")* '>'`.
    fn parse_endpoints(&mut self) -> Result<Vec<String>, ParseError> {
        let mut endpoints = vec![self.expect_string("load balancer endpoint")?];

        while self.check(&TokenKind::Comma) {
            self.advance();
            endpoints.push(self.expect_string("load balancer endpoint")?);
        }

        if !self.check(&TokenKind::RAngle) {
            return Err(self.error("',' or '>'"));
        }
        self.advance();
        Ok(endpoints)
    }

    // ========================================================================
    // Helper methods
    // ========================================================================

    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub(crate) fn peek_kind(&self, offset: usize) -> Option<&TokenKind> {
        self.tokens.get(self.pos + offset).map(|t| &t.kind)
    }

    pub(crate) fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current().kind) == std::mem::discriminant(kind)
    }

    fn check_identifier(&self) -> bool {
        matches!(self.current().kind, TokenKind::Identifier(_))
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.check(&kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(&kind.to_string()))
        }
    }

    fn expect_end(&self) -> Result<(), ParseError> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self.error("end of input"))
        }
    }

    pub(crate) fn expect_identifier(&mut self, what: &str) -> Result<String, ParseError> {
        match &self.current().kind {
            TokenKind::Identifier(s) => {
                let s = s.clone();
                self.advance();
                Ok(s)
            }
            _ => Err(self.error(what)),
        }
    }

    pub(crate) fn expect_string(&mut self, what: &str) -> Result<String, ParseError> {
        match &self.current().kind {
            TokenKind::String(s) => {
                let s = s.clone();
                self.advance();
                Ok(s)
            }
            _ => Err(self.error(what)),
        }
    }

    pub(crate) fn error(&self, expected: &str) -> ParseError {
        let token = self.current();
        ParseError {
            span: token.span,
            expected: expected.to_string(),
            found: token.kind.to_string(),
        }
    }
}

// ============================================================================
// CONVENIENCE FUNCTIONS
// ============================================================================

/// Lex and parse a routing document into route definitions.
pub fn parse_definitions(source: &str) -> RouteResult<Vec<RouteDef>> {
    let tokens = tokenize(source)?;
    let token_count = tokens.len();
    let definitions = Parser::new(tokens).parse_document()?;

    tracing::debug!(
        definitions = definitions.len(),
        tokens = token_count,
        "parsed route definitions"
    );
    Ok(definitions)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LexErrorReason, RouteError};

    const SINGLE_ROUTE: &str = r#"
        PathRegexp(/\.html$/) && Header("Accept", "text/html") ->
        modPath(/\.html$/, ".jsx") ->
        requestHeader("X-Type", "page") ->
        "https://render.example.com""#;

    fn lex(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .tokenize()
            .map(|tokens| tokens.into_iter().map(|t| t.kind).collect())
            .unwrap_or_default()
    }

    fn lex_error(source: &str) -> LexErrorReason {
        match Lexer::new(source).tokenize() {
            Err(err) => err.reason,
            Ok(tokens) => panic!("expected lex error, got {:?}", tokens),
        }
    }

    fn parse_one(source: &str) -> RouteDef {
        let mut defs = parse_definitions(source).expect("parse failed");
        assert_eq!(defs.len(), 1);
        defs.remove(0)
    }

    fn parse_err(source: &str) -> ParseError {
        match parse_definitions(source) {
            Err(RouteError::Parse(err)) => err,
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    // ========================================================================
    // Lexer Tests
    // ========================================================================

    #[test]
    fn test_lexer_symbols() {
        let kinds = lex("( ) , : ; * < > -> &&");
        assert_eq!(
            kinds,
            vec![
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Comma,
                TokenKind::Colon,
                TokenKind::Semicolon,
                TokenKind::Any,
                TokenKind::LAngle,
                TokenKind::RAngle,
                TokenKind::Arrow,
                TokenKind::And,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lexer_identifiers() {
        let kinds = lex("Path _private route_1");
        assert_eq!(kinds[0], TokenKind::Identifier("Path".to_string()));
        assert_eq!(kinds[1], TokenKind::Identifier("_private".to_string()));
        assert_eq!(kinds[2], TokenKind::Identifier("route_1".to_string()));
    }

    #[test]
    fn test_lexer_string_literals() {
        let kinds = lex(r#""hello" "world\ntest" "escaped\"quote""#);
        assert_eq!(kinds[0], TokenKind::String("hello".to_string()));
        assert_eq!(kinds[1], TokenKind::String("world\ntest".to_string()));
        assert_eq!(kinds[2], TokenKind::String("escaped\"quote".to_string()));
    }

    #[test]
    fn test_lexer_regex_literals() {
        let kinds = lex(r"/^\/api/ /[/]/ /a\\b/");
        assert_eq!(kinds[0], TokenKind::Regex("^/api".to_string()));
        assert_eq!(kinds[1], TokenKind::Regex("[/]".to_string()));
        assert_eq!(kinds[2], TokenKind::Regex(r"a\b".to_string()));
    }

    #[test]
    fn test_lexer_numbers() {
        let kinds = lex("42 2.5 -10 .3 -.25");
        assert_eq!(kinds[0], TokenKind::Number(42.0));
        assert_eq!(kinds[1], TokenKind::Number(2.5));
        assert_eq!(kinds[2], TokenKind::Number(-10.0));
        assert_eq!(kinds[3], TokenKind::Number(0.3));
        assert_eq!(kinds[4], TokenKind::Number(-0.25));
    }

    #[test]
    fn test_lexer_arrow_is_not_negative_number() {
        assert_eq!(lex("->1")[0], TokenKind::Arrow);
        assert_eq!(lex("->1")[1], TokenKind::Number(1.0));
    }

    #[test]
    fn test_lexer_malformed_number() {
        assert_eq!(
            lex_error("number(3.)"),
            LexErrorReason::MalformedNumber("3.".to_string())
        );
        assert_eq!(
            lex_error("1.2.3"),
            LexErrorReason::MalformedNumber("1.2.3".to_string())
        );
    }

    #[test]
    fn test_lexer_unterminated_literals() {
        assert_eq!(lex_error(r#"Path("/foo"#), LexErrorReason::UnterminatedString);
        assert_eq!(lex_error(r#""trailing\"#), LexErrorReason::UnterminatedString);
        assert_eq!(lex_error("PathRegexp(/foo"), LexErrorReason::UnterminatedRegex);
        assert_eq!(lex_error("PathRegexp(/[/)"), LexErrorReason::UnterminatedRegex);
    }

    #[test]
    fn test_lexer_error_on_invalid_char() {
        assert_eq!(lex_error("Path @"), LexErrorReason::InvalidCharacter('@'));
        assert_eq!(lex_error("a & b"), LexErrorReason::InvalidCharacter('&'));
        assert_eq!(lex_error("a - b"), LexErrorReason::InvalidCharacter('-'));
    }

    #[test]
    fn test_lexer_error_position() {
        let err = Lexer::new("* ->\n  foo() ?").tokenize().unwrap_err();
        assert_eq!(err.span.line, 2);
        assert_eq!(err.span.column, 9);
        assert_eq!(err.span.start, 13);
    }

    #[test]
    fn test_lexer_newline_inside_string_advances_line() {
        let tokens = Lexer::new("\"a\nb\" x").tokenize().unwrap();
        assert_eq!(tokens[1].span.line, 2);
        assert_eq!(tokens[1].text("\"a\nb\" x"), "x");
    }

    // ========================================================================
    // Parser Tests
    // ========================================================================

    #[test]
    fn test_parse_single_route() {
        let def = parse_one(SINGLE_ROUTE);

        assert_eq!(def.id, None);
        assert_eq!(
            def.matchers,
            vec![
                Predicate::new("PathRegexp", vec![Arg::Regex(r"\.html$".to_string())]),
                Predicate::new("Header", vec!["Accept".into(), "text/html".into()]),
            ]
        );
        assert_eq!(
            def.filters,
            vec![
                Filter::new(
                    "modPath",
                    vec![Arg::Regex(r"\.html$".to_string()), ".jsx".into()]
                ),
                Filter::new("requestHeader", vec!["X-Type".into(), "page".into()]),
            ]
        );
        assert_eq!(def.backend, Backend::network("https://render.example.com"));
    }

    #[test]
    fn test_parse_single_route_with_id() {
        let def = parse_one(&format!("testroute: {}", SINGLE_ROUTE));
        assert_eq!(def.id.as_deref(), Some("testroute"));
        assert_eq!(def.filters.len(), 2);
    }

    #[test]
    fn test_parse_document_preserves_order() {
        let source = r#"
            route0: Path("/a") -> "https://a.example.org";
            route1: Path("/b") -> fixPath() -> "https://b.example.org";
            route2: Method("POST") && Path("/api") -> requestHeader("X-Type", "ajax") -> <shunt>;
            catchAll: * -> "https://www.example.org";
            catchAllWithCustom: * && Custom() -> <loopback>
        "#;
        let defs = parse_definitions(source).unwrap();
        let ids: Vec<_> = defs.iter().map(|d| d.id.clone().unwrap()).collect();
        assert_eq!(
            ids,
            vec!["route0", "route1", "route2", "catchAll", "catchAllWithCustom"]
        );
        assert!(defs[3].matchers.is_empty());
        assert_eq!(defs[4].matchers, vec![Predicate::new("Custom", vec![])]);
        assert_eq!(defs[4].backend, Backend::LoopBack);
    }

    #[test]
    fn test_parse_trailing_semicolon() {
        let defs = parse_definitions(r#"a: * -> <shunt>; b: * -> <shunt>;"#).unwrap();
        assert_eq!(defs.len(), 2);
    }

    #[test]
    fn test_parse_missing_semicolon_fails() {
        let err = parse_err(
            r#"
            route0: Method("GET") -> "https://backend-0.example.com"
            route1: Method("POST") -> "https://backend-1.example.com""#,
        );
        assert_eq!(err.expected, "';'");
        assert_eq!(err.found, "identifier `route1`");
        assert_eq!(err.span.line, 3);
    }

    #[test]
    fn test_parse_unlabeled_definitions_fail() {
        let err = parse_err(r#"* -> <shunt> * -> <shunt>"#);
        assert_eq!(err.expected, "';'");

        let err = parse_err(r#"* -> <shunt>; * -> <shunt>"#);
        assert_eq!(err.expected, "route id");
        assert_eq!(err.span.column, 1);

        let err = parse_err(r#"a: * -> <shunt>; * -> <shunt>"#);
        assert_eq!(err.expected, "route id");
        assert_eq!(err.span.column, 18);
    }

    #[test]
    fn test_parse_empty_document_fails() {
        assert_eq!(parse_err("").expected, "route definition");
        assert_eq!(parse_err("  \n ").expected, "route definition");
    }

    #[test]
    fn test_parse_double_semicolon_fails() {
        parse_err("a: * -> <shunt>;; b: * -> <shunt>");
    }

    #[test]
    fn test_parse_missing_backend_fails() {
        assert_eq!(parse_err("* -> foo()").expected, "'->' followed by a backend");
        assert_eq!(parse_err("* -> foo() ->").expected, "backend");
        assert_eq!(parse_err("* ->").expected, "backend");
        assert_eq!(parse_err(r#"Path("/")"#).expected, "'->'");
    }

    #[test]
    fn test_parse_numbers_in_args() {
        let def = parse_one("* -> number(.3) -> number(2.5, -1) -> <shunt>");
        assert_eq!(def.filters[0].args, vec![Arg::Number(0.3)]);
        assert_eq!(def.filters[1].args, vec![Arg::Number(2.5), Arg::Number(-1.0)]);

        assert!(matches!(
            parse_definitions("* -> number(3.) -> <shunt>"),
            Err(RouteError::Lex(_))
        ));
    }

    #[test]
    fn test_parse_regex_literals() {
        let cases = [
            (r"PathRegexp(/[/]/)-> <shunt>", "[/]"),
            (r"PathRegexp(/[\[]/)-> <shunt>", r"[\[]"),
            (r"PathRegexp(/[\]]/)-> <shunt>", r"[\]]"),
            (r"PathRegexp(/[\\]/)-> <shunt>", r"[\]"),
            (r"PathRegexp(/[\/]/)-> <shunt>", "[/]"),
            (r#"PathRegexp(/["]/)-> <shunt>"#, r#"["]"#),
            (r#"PathRegexp(/[\"]/)-> <shunt>"#, r#"[\"]"#),
            (r"PathRegexp(/\//)-> <shunt>", "/"),
            (r"PathRegexp(/[[:upper:]]/)-> <shunt>", "[[:upper:]]"),
        ];

        for (source, expected) in cases {
            let def = parse_one(source);
            assert_eq!(
                def.matchers[0].args[0],
                Arg::Regex(expected.to_string()),
                "source: {}",
                source
            );
        }
    }

    #[test]
    fn test_parse_string_escapes_in_filter_args() {
        let cases = [
            (r#"* -> PathRegexp("\\hello") -> <shunt>"#, r"\hello"),
            (r#"* -> PathRegexp("\"") -> <shunt>"#, "\""),
            (
                r#"* -> PathRegexp("\a\b\r\n\f\t\v") -> <shunt>"#,
                "\x07\x08\r\n\x0c\t\x0b",
            ),
            (r#"* -> PathRegexp("\ ") -> <shunt>"#, " "),
            (r#"* -> PathRegexp("\zalando") -> <shunt>"#, "zalando"),
            (r#"* -> PathRegexp("\/path") -> <shunt>"#, "/path"),
            (r#"* -> PathRegexp("\\/path") -> <shunt>"#, r"\/path"),
        ];

        for (source, expected) in cases {
            let def = parse_one(source);
            assert_eq!(def.filters[0].args[0], Arg::String(expected.to_string()));
        }
    }

    #[test]
    fn test_parse_lb_backend_rejections() {
        assert_eq!(parse_err("* -> <>").expected, "load balancer endpoint");
        assert_eq!(parse_err("* -> <   >").expected, "load balancer endpoint");

        let err = parse_err("* -> <roundRobin>");
        assert_eq!(err.expected, "',' followed by load balancer endpoints");
        assert_eq!(err.found, "'>'");

        parse_err(r#"* -> <roundRobin,>"#);
        parse_err(r#"* -> <"https://a.org",>"#);
        parse_err(r#"* -> <"https://a.org" "https://b.org">"#);
        parse_err(r#"* -> <"https://a.org""#);
    }

    #[test]
    fn test_parse_lb_backend() {
        let def = parse_one(r#"* -> <"https://example.org">"#);
        assert_eq!(
            def.backend,
            Backend::LoadBalanced {
                algorithm: None,
                endpoints: vec!["https://example.org".to_string()],
            }
        );

        let def = parse_one(
            r#"* -> foo() -> <algFoo,
                   "https://example1.org",
                   "https://example2.org">"#,
        );
        assert_eq!(def.filters, vec![Filter::new("foo", vec![])]);
        assert_eq!(
            def.backend,
            Backend::LoadBalanced {
                algorithm: Some("algFoo".to_string()),
                endpoints: vec![
                    "https://example1.org".to_string(),
                    "https://example2.org".to_string(),
                ],
            }
        );
    }

    #[test]
    fn test_parse_malformed_calls() {
        const ARG: &str = "argument (string, regex or number)";
        assert_eq!(parse_err(r#"Path("/a",) -> <shunt>"#).expected, ARG);
        assert_eq!(parse_err(r#"Path(foo) -> <shunt>"#).expected, ARG);
        assert_eq!(parse_err(r#"Path("/a" "/b") -> <shunt>"#).expected, "',' or ')'");
        assert_eq!(parse_err("Path -> <shunt>").expected, "'('");
        assert_eq!(parse_err(r#"&& Path("/") -> <shunt>"#).expected, "predicate or '*'");
    }

    #[test]
    fn test_parse_returns_lexer_errors() {
        assert!(matches!(
            parse_definitions("invalid code"),
            Err(RouteError::Parse(_))
        ));
        assert!(matches!(
            parse_definitions("Path(\"/\") -> #"),
            Err(RouteError::Lex(_))
        ));
    }

    #[test]
    fn test_parse_predicate_fragment() {
        let mut parser = Parser::new(tokenize(r#"Foo("a") && * && Bar(1)"#).unwrap());
        let predicates = parser.parse_predicate_fragment().unwrap();
        assert_eq!(
            predicates,
            vec![
                Predicate::new("Foo", vec!["a".into()]),
                Predicate::new("Bar", vec![Arg::Number(1.0)]),
            ]
        );

        let mut parser = Parser::new(tokenize(r#"Foo() -> <shunt>"#).unwrap());
        assert_eq!(
            parser.parse_predicate_fragment().unwrap_err().expected,
            "end of input"
        );
    }

    #[test]
    fn test_parse_filter_fragment() {
        let mut parser = Parser::new(tokenize(r#"a() -> b("x", /y/)"#).unwrap());
        let filters = parser.parse_filter_fragment().unwrap();
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[1].args, vec!["x".into(), Arg::Regex("y".to_string())]);

        let mut parser = Parser::new(tokenize("a() ->").unwrap());
        assert_eq!(parser.parse_filter_fragment().unwrap_err().expected, "filter");
    }

    #[test]
    fn test_parser_without_eof_token() {
        let mut parser = Parser::new(Vec::new());
        assert!(parser.parse_document().is_err());
        assert_eq!(Parser::new(Vec::new()).parse_filter_fragment(), Ok(vec![]));
    }
}

// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================
