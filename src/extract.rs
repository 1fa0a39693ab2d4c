// cs2modrewrite-rust/src/extract.rs
//
// Marker scanning over the comment-stripped profile text. The profile is not
// tokenized; fields are located by literal substring search and sliced to the
// next line terminator.

const UA_MARKER: &str = "set useragent";
const HTTP_GET: &str = "http-get";
const HTTP_POST: &str = "http-post";
const SET_URI: &str = "set uri ";
const HTTP_STAGER: &str = "http-stager";
const SET_URI_X86: &str = "set uri_x86";
const SET_URI_X64: &str = "set uri_x64";

const ERR_UA: &str = "[!] User-Agent Not Found";
const ERR_GET: &str = "[!] GET URIs Not Found";
const ERR_POST: &str = "[!] POST URIs Not Found";
const ERR_X86: &str = "[!] x86 Stager URIs Not Found";
const ERR_X64: &str = "[!] x64 Stager URIs Not Found";

/// Raw field values pulled out of a profile. A field is empty when its marker
/// was absent; each absence also appends one message to `errors`. Extraction
/// never aborts, so a partially populated result is normal.
#[derive(Debug, Default)]
pub struct Extraction {
    pub user_agent: String,
    pub get_uri: String,
    pub post_uri: String,
    pub stager_x86: String,
    pub stager_x64: String,
    pub errors: Vec<String>,
}

pub fn extract(contents: &str) -> Extraction {
    let mut extraction = Extraction::default();

    match contents.find(UA_MARKER) {
        Some(pos) => extraction.user_agent = value_after(contents, pos + UA_MARKER.len()),
        None => extraction.errors.push(ERR_UA.to_string()),
    }

    // GET and POST share one global `set uri ` presence test, so a profile
    // with a GET URI but no POST URI is never distinctly flagged. Inherited
    // behavior, kept for compatibility.
    let get_start = contents.find(HTTP_GET).unwrap_or(0);
    if contents.contains(SET_URI) {
        if let Some(pos) = find_from(contents, SET_URI, get_start) {
            extraction.get_uri = value_after(contents, pos + SET_URI.len());
        }
    } else {
        extraction.errors.push(ERR_GET.to_string());
    }

    let post_start = contents.find(HTTP_POST).unwrap_or(0);
    if contents.contains(SET_URI) {
        if let Some(pos) = find_from(contents, SET_URI, post_start) {
            extraction.post_uri = value_after(contents, pos + SET_URI.len());
        }
    } else {
        extraction.errors.push(ERR_POST.to_string());
    }

    let stager_start = contents.find(HTTP_STAGER).unwrap_or(0);
    if contents.contains(SET_URI_X86) {
        if let Some(pos) = find_from(contents, SET_URI_X86, stager_start) {
            extraction.stager_x86 = value_after(contents, pos + SET_URI_X86.len());
        }
    } else {
        extraction.errors.push(ERR_X86.to_string());
    }

    if contents.contains(SET_URI_X64) {
        if let Some(pos) = find_from(contents, SET_URI_X64, stager_start) {
            extraction.stager_x64 = value_after(contents, pos + SET_URI_X64.len());
        }
    } else {
        extraction.errors.push(ERR_X64.to_string());
    }

    extraction
}

fn find_from(contents: &str, marker: &str, start: usize) -> Option<usize> {
    contents[start..].find(marker).map(|i| start + i)
}

/// Slices from the value start to the next line terminator (or end of input),
/// trims, and strips the quoting artifacts.
fn value_after(contents: &str, value_start: usize) -> String {
    let rest = &contents[value_start..];
    let line = match rest.find('\n') {
        Some(i) => &rest[..i],
        None => rest,
    };
    strip_quoting(line.trim())
}

/// Positional strip of the leading `"` and the trailing `";` pair. Not
/// syntactic: values shorter than three characters collapse to empty, and
/// unquoted values lose their outer characters. Kept byte-for-byte compatible
/// with the profiles this tool has always consumed.
fn strip_quoting(trimmed: &str) -> String {
    let chars: Vec<char> = trimmed.chars().collect();
    if chars.len() < 3 {
        return String::new();
    }
    chars[1..chars.len() - 2].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PROFILE: &str = r#"set sleeptime "30000";
set useragent "Mozilla/5.0 (compatible)";

http-get {
    set uri "/ca /en-ca";
    client {
        header "Accept" "text/html";
    }
}

http-post {
    set uri "/submit.php";
}

http-stager {
    set uri_x86 "/stage32";
    set uri_x64 "/stage64";
}
"#;

    #[test]
    fn test_full_profile_extracts_all_fields() {
        let extraction = extract(FULL_PROFILE);
        assert_eq!(extraction.user_agent, "Mozilla/5.0 (compatible)");
        assert_eq!(extraction.get_uri, "/ca /en-ca");
        assert_eq!(extraction.post_uri, "/submit.php");
        assert_eq!(extraction.stager_x86, "/stage32");
        assert_eq!(extraction.stager_x64, "/stage64");
        assert!(extraction.errors.is_empty());
    }

    #[test]
    fn test_get_and_post_are_section_scoped() {
        let extraction = extract(FULL_PROFILE);
        // Both use the same generic marker; the section offset keeps them apart.
        assert_ne!(extraction.get_uri, extraction.post_uri);
    }

    #[test]
    fn test_missing_stager_section() {
        let profile = "set useragent \"UA!\";\nhttp-get {\n    set uri \"/a\";\n}\nhttp-post {\n    set uri \"/b\";\n}\n";
        let extraction = extract(profile);
        assert_eq!(extraction.stager_x86, "");
        assert_eq!(extraction.stager_x64, "");
        assert_eq!(
            extraction.errors,
            vec![ERR_X86.to_string(), ERR_X64.to_string()]
        );
    }

    #[test]
    fn test_empty_profile_records_every_error() {
        let extraction = extract("");
        assert_eq!(
            extraction.errors,
            vec![
                ERR_UA.to_string(),
                ERR_GET.to_string(),
                ERR_POST.to_string(),
                ERR_X86.to_string(),
                ERR_X64.to_string(),
            ]
        );
        assert_eq!(extraction.user_agent, "");
        assert_eq!(extraction.get_uri, "");
    }

    #[test]
    fn test_quoting_strip_is_positional() {
        assert_eq!(strip_quoting("\"Mozilla/5.0\";"), "Mozilla/5.0");
        // Too short to carry the expected quoting: collapses to empty.
        assert_eq!(strip_quoting("X"), "");
        assert_eq!(strip_quoting("ab"), "");
        // Unquoted values lose their outer characters.
        assert_eq!(strip_quoting("plain"), "la");
    }

    #[test]
    fn test_value_ends_at_line_terminator() {
        let profile = "set useragent \"First\";\nset useragent \"Second\";\n";
        let extraction = extract(profile);
        assert_eq!(extraction.user_agent, "First");
    }
}
