//! Hygiene — enforces coding standards at test time.
//!
//! Scans the crate's production sources for antipatterns that violate
//! project standards. Each pattern has a budget of zero; a new occurrence
//! fails the suite with the offending files listed.

use std::fs;
use std::path::Path;

/// Patterns that must not appear in production code. Test files (`*_test.rs`
/// siblings and this directory) are exempt.
const FORBIDDEN: &[(&str, &str)] = &[
    (".unwrap()", "panics on Err/None; propagate instead"),
    (".expect(", "panics on Err/None; propagate instead"),
    ("panic!(", "crashes the process"),
    ("unreachable!(", "crashes the process"),
    ("todo!(", "unfinished code"),
    ("unimplemented!(", "unfinished code"),
    ("#[allow(dead_code)]", "delete the code or wire it up"),
];

struct SourceFile {
    path: String,
    content: String,
}

fn production_sources() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        if path.extension().is_none_or(|e| e != "rs") {
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

#[test]
fn production_code_is_panic_free() {
    let files = production_sources();
    assert!(!files.is_empty(), "no sources found; is the test running from the crate root?");

    let mut violations = Vec::new();
    for (pattern, why) in FORBIDDEN {
        for file in &files {
            let count = file
                .content
                .lines()
                .filter(|line| line.contains(pattern))
                .count();
            if count > 0 {
                violations.push(format!("  {}: {count}x `{pattern}` — {why}", file.path));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "forbidden patterns in production code:\n{}",
        violations.join("\n")
    );
}
