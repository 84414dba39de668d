//! Duplicate directive merge pass.
//!
//! Appending a template onto an existing `.gitattributes` file can leave the
//! `* text=auto` directive declared twice. The merge keeps the first
//! occurrence authoritative and demotes every later one to an inert comment
//! pair, so the duplicate stays visible for manual review instead of being
//! silently dropped.

use regex::Regex;
use std::sync::LazyLock;

/// Matched as a substring: a line containing the directive anywhere counts.
static DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\* text=auto").expect("DIRECTIVE must compile"));

/// Annotation written above each demoted duplicate.
const DUPLICATE_NOTE: &str = "# Commented because this line appears before in the file.";

/// Rewrite `content` so the `* text=auto` directive stays active at most once.
///
/// Lines are scanned in order. Non-matching lines and the first match pass
/// through verbatim; each later match becomes two lines, the annotation and
/// the original line behind a `# ` prefix. Input with zero or one occurrence
/// comes back byte-for-byte unchanged, trailing newline included.
pub fn merge_duplicate_directives(content: &str) -> String {
    let mut found = false;
    let mut output: Vec<String> = Vec::new();

    for line in content.split('\n') {
        if !DIRECTIVE.is_match(line) {
            output.push(line.to_string());
        } else if !found {
            output.push(line.to_string());
            found = true;
        } else {
            output.push(DUPLICATE_NOTE.to_string());
            output.push(format!("# {}", line));
        }
    }

    output.join("\n")
}
