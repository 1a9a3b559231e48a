//! Addrmatch API CLI
//!
//! Starts the HTTP server for the address comparison service.

use addrmatch_api::{config::ApiConfig, start_server, ApiError};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ApiError> {
    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        // Load from specified config file
        let config_path = &args[2];
        ApiConfig::from_file(config_path)?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("No config file specified, using default configuration");
        eprintln!("Usage: addrmatch-api --config <path-to-config.toml>");
        eprintln!();
        ApiConfig::default()
    };

    // Start the server
    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Addrmatch API - Address Equivalence Decision Service");
    println!();
    println!("USAGE:");
    println!("    addrmatch-api --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("EXAMPLE:");
    println!("    addrmatch-api --config config/api.toml");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file may contain:");
    println!("    - bind_address: IP address to bind (default: '127.0.0.1')");
    println!("    - bind_port: Port number (default: 8080)");
    println!("    - [oracle] endpoint, model, timeout_secs");
    println!();
    println!("ENVIRONMENT:");
    println!("    GEMINI_API_KEY    Oracle credential (required for comparisons)");
    println!();
}
