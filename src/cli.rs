// cs2modrewrite-rust/src/cli.rs
use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

const ABOUT: &str = "Converts Cobalt Strike profiles to Apache mod_rewrite .htaccess file format \
by using the User-Agent and URI Endpoint to create rewrite rules. Make sure the profile passes \
a c2lint check before running this tool.";

#[derive(Parser, Debug)]
#[command(author, version, about = ABOUT, long_about = None)]
#[command(name = "cs2modrewrite-rust")]
#[command(bin_name = "cs2modrewrite-rust")]
pub struct CliArgs {
    /// C2 Profile file
    #[arg(short = 'i', value_name = "FILE", required = true)]
    pub inputfile: PathBuf,

    /// C2 Server (http://teamserver)
    #[arg(short = 'c', value_name = "URL", required = true)]
    pub c2server: String,

    /// Redirect to this URL (http://google.com)
    #[arg(short = 'r', value_name = "URL", required = true)]
    pub redirect: String,

    /// Enable debug logging
    #[arg(long, env = "CS2MR_DEBUG", action = clap::ArgAction::SetTrue)]
    pub debug: bool,
}

pub fn apply_cli_overrides(mut config: Config, args: &CliArgs) -> Config {
    if args.debug {
        config.debug = true;
    }
    config
}
