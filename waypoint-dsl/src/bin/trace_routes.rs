/// Route Document Tracer - Shows the flow through Lexer → Parser → Routes
///
/// Usage: cargo run --bin trace_routes <routes-file>
///
/// Output and logging are configured through WAYPOINT_PRETTY, WAYPOINT_INDENT,
/// WAYPOINT_OUTPUT and WAYPOINT_LOG.

use std::fs;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use waypoint_dsl::{
    parse_definitions, print_routes, tokenize, OutputFormat, RouteBuilder, TraceConfig,
};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --bin trace_routes <routes-file>");
        eprintln!();
        eprintln!("Example:");
        eprintln!("  WAYPOINT_PRETTY=true cargo run --bin trace_routes routes.eskip");
        return ExitCode::FAILURE;
    }

    let config = match TraceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(waypoint_dsl::config::DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let path = &args[1];
    tracing::info!(path = %path, output = %config.output, "tracing route document");

    let source = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("❌ Failed to read {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    println!("╔═══════════════════════════════════════════════════════════════");
    println!("║ ROUTE DOCUMENT TRACER");
    println!("╚═══════════════════════════════════════════════════════════════\n");

    // Step 1: Tokens
    match tokenize(&source) {
        Ok(tokens) => println!("🔤 TOKENS: {}\n", tokens.len()),
        Err(e) => {
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    }

    // Step 2: Route definitions
    let definitions = match parse_definitions(&source) {
        Ok(defs) => defs,
        Err(e) => {
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("🌳 AST:");
    println!("─────────────────────────────────────────────────────────────");
    println!("{:#?}", definitions);
    println!();

    // Step 3: Routes
    let routes = match RouteBuilder::build_all(&definitions) {
        Ok(routes) => routes,
        Err(e) => {
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("🛣  ROUTES: {}", routes.len());
    println!("─────────────────────────────────────────────────────────────");
    match config.output {
        OutputFormat::Routes => {
            for route in &routes {
                println!("{:#?}", route);
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&routes) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("❌ Failed to serialize routes: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }
    println!();

    // Step 4: Round-trip
    println!("🔄 CANONICAL DOCUMENT:");
    println!("─────────────────────────────────────────────────────────────");
    println!("{}", print_routes(&routes, &config.print));
    println!();

    println!("✅ Parse succeeded!");
    ExitCode::SUCCESS
}
