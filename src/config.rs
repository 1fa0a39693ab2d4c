// cs2modrewrite-rust/src/config.rs
use crate::errors::{Result, RewriteError};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub profile_path: PathBuf,
    pub c2_server: String,
    pub redirect: String,
    pub log_to_cmdline: bool,
    pub debug: bool,
}

impl Config {
    pub fn load(profile_path: PathBuf, c2_server: String, redirect: String) -> Result<Self> {
        let debug = parse_env_bool("CS2MR_DEBUG", false)?;
        // Default ON
        let log_to_cmdline = parse_env_bool("CS2MR_LOG_TO_CMDLINE", true)?;

        Ok(Config {
            profile_path,
            c2_server,
            redirect,
            log_to_cmdline,
            debug,
        })
    }
}

fn parse_env_bool(env_var: &str, default: bool) -> Result<bool> {
    match std::env::var(env_var) {
        Ok(val_str) => Ok(val_str == "1" || val_str.to_lowercase() == "true"),
        Err(std::env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(RewriteError::Config(format!(
            "Error reading env var {}: {}",
            env_var, e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_carries_inputs_through() {
        let config = Config::load(
            PathBuf::from("profile.txt"),
            "http://c2.example.com".to_string(),
            "http://google.com".to_string(),
        )
        .unwrap();
        assert_eq!(config.profile_path, PathBuf::from("profile.txt"));
        assert_eq!(config.c2_server, "http://c2.example.com");
        assert_eq!(config.redirect, "http://google.com");
        assert!(config.log_to_cmdline);
    }
}
