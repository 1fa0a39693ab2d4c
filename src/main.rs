// cs2modrewrite-rust/src/main.rs

// Declare modules
mod cli;
mod config;
mod errors;
mod extract;
mod logger;
mod profile;
mod rewrite;
mod validate;

// Use imports
use crate::config::Config;
use crate::errors::Result;
use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use tracing::{debug, error, info};

fn main() -> ExitCode {
    // --- Parse Command Line Arguments ---
    let args = cli::CliArgs::parse();

    // --- Load Configuration (primarily from Env) ---
    let config_from_env = match Config::load(
        args.inputfile.clone(),
        args.c2server.clone(),
        args.redirect.clone(),
    ) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("[E] Configuration Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // --- Apply CLI Overrides ---
    let config = cli::apply_cli_overrides(config_from_env, &args);

    // --- Setup Logging ---
    if let Err(e) = logger::setup_logging(&config) {
        eprintln!("[E] Logging Setup Error: {}", e);
        return ExitCode::FAILURE;
    }

    // --- Validate URLs before touching the profile ---
    if let Err(e) = validate::validate_urls(&config) {
        let _ = cli::CliArgs::command().print_help();
        println!();
        println!("{}", e);
        return ExitCode::FAILURE;
    }

    // --- Run the conversion ---
    match run_conversion(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Conversion failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

// Main application logic separated
fn run_conversion(config: &Config) -> Result<()> {
    info!("Reading profile {}", config.profile_path.display());
    let raw = profile::load(&config.profile_path)?;
    let contents = profile::strip_comments(&raw);

    let extraction = extract::extract(&contents);
    debug!("Extracted User-Agent: '{}'", extraction.user_agent);
    info!(
        "Extracted {} unique URIs, {} extraction errors",
        rewrite::unique_uris(&extraction).len(),
        extraction.errors.len()
    );

    let output = rewrite::render(&extraction, &config.c2_server, &config.redirect);

    // Generated rules and field-level diagnostics share stdout.
    println!("#### Save the following as .htaccess in the root web directory");
    println!("{}", output);

    if !extraction.errors.is_empty() {
        println!("\n##########\n[!] ERRORS");
        for message in &extraction.errors {
            println!("{}", message);
        }
    }

    Ok(())
}
