// cs2modrewrite-rust/src/validate.rs
use crate::config::Config;
use crate::errors::{Result, RewriteError};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Best-effort URL shape check: scheme, then domain / localhost / dotted
    // quad, optional port, optional path or query. Not a full URL grammar
    // (no port range, IPv6 or percent-encoding validation).
    static ref URL_REGEX: Regex = Regex::new(
        r"(?i)^(?:http|ftp)s?://(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)|localhost|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})(?::\d+)?(?:/?|[/?]\S+)$"
    )
    .expect("URL validation regex must compile");
}

pub fn is_valid_url(candidate: &str) -> bool {
    URL_REGEX.is_match(candidate)
}

/// Both URLs must pass the shape check before any profile processing starts.
/// The c2 server is checked first, so it names the first failure.
pub fn validate_urls(config: &Config) -> Result<()> {
    if !is_valid_url(&config.c2_server) {
        return Err(RewriteError::MalformedUrl {
            name: "c2server".to_string(),
            value: config.c2_server.clone(),
        });
    }
    if !is_valid_url(&config.redirect) {
        return Err(RewriteError::MalformedUrl {
            name: "redirect".to_string(),
            value: config.redirect.clone(),
        });
    }
    Ok(())
}
