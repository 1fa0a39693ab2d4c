// cs2modrewrite-rust/src/profile.rs
use crate::errors::{Result, RewriteError};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::Path;

lazy_static! {
    // A comment runs from '#' through the newline; the newline is consumed
    // too, so the comment and the following line break collapse together.
    static ref COMMENT_REGEX: Regex =
        Regex::new(r"#[^\n]*\n").expect("comment regex must compile");
}

/// Reads the whole profile into memory. No retry, no partial read.
pub fn load(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| RewriteError::ProfileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Strips every line comment before marker scanning. Fragile by nature: a
/// literal '#' inside a value discards the rest of that line.
pub fn strip_comments(contents: &str) -> String {
    COMMENT_REGEX.replace_all(contents, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_strip_removes_comment_and_newline() {
        let input = "# leading comment\nset useragent \"UA\";\n";
        assert_eq!(strip_comments(input), "set useragent \"UA\";\n");

        // The terminator is consumed, so the next line joins the remainder.
        let inline = "set uri \"/a\"; # trailing\nset uri \"/b\";\n";
        assert_eq!(strip_comments(inline), "set uri \"/a\"; set uri \"/b\";\n");
    }

    #[test]
    fn test_strip_is_idempotent() {
        let input = "# one\nkeep this\n# two\nand this\n";
        let once = strip_comments(input);
        let twice = strip_comments(&once);
        assert_eq!(once, twice);
        assert_eq!(once, "keep this\nand this\n");
    }

    #[test]
    fn test_hash_inside_value_truncates_line() {
        let input = "set uri \"/page#frag\";\nset host \"x\";\n";
        assert_eq!(strip_comments(input), "set uri \"/pageset host \"x\";\n");
    }

    #[test]
    fn test_load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "set useragent \"UA\";").unwrap();
        let contents = load(file.path()).unwrap();
        assert!(contents.contains("set useragent"));
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let err = load(Path::new("/nonexistent/profile.txt")).unwrap_err();
        match err {
            RewriteError::ProfileRead { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/profile.txt"));
            }
            other => panic!("expected ProfileRead, got {:?}", other),
        }
    }
}
