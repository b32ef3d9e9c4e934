//! Source hygiene budgets, checked at test time.
//!
//! Scans `src/` for patterns that crash the page or swallow browser errors.
//! Each pattern has a budget; lower it when a hit goes away, never raise it
//! without removing another.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
}

// Panics abort the wasm instance and take every controller with it.
const UNWRAP: Budget = Budget { pattern: ".unwrap()", max: 0 };
// The compile-time email pattern in `contact.rs`.
const EXPECT: Budget = Budget { pattern: ".expect(", max: 1 };
const PANIC: Budget = Budget { pattern: "panic!(", max: 0 };
const UNREACHABLE: Budget = Budget { pattern: "unreachable!(", max: 0 };
const TODO: Budget = Budget { pattern: "todo!(", max: 0 };
const UNIMPLEMENTED: Budget = Budget { pattern: "unimplemented!(", max: 0 };

// Errors dropped without a log line.
const SILENT_DISCARD: Budget = Budget { pattern: "let _ =", max: 0 };
const DOT_OK: Budget = Budget { pattern: ".ok()", max: 0 };

// Page-lifetime callbacks only: `listen` and the reveal observer.
const FORGET: Budget = Budget { pattern: ".forget()", max: 2 };

const ALLOW_DEAD_CODE: Budget = Budget { pattern: "#[allow(dead_code)]", max: 0 };

/// Production `.rs` files under `src/` as `(path, content)`, without the sibling `*_test.rs` files.
fn source_files() -> Vec<(String, String)> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if path.extension().is_none_or(|e| e != "rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((path_str, content));
        }
    }
}

fn check(budget: &Budget) {
    let hits: Vec<(String, usize)> = source_files()
        .into_iter()
        .filter_map(|(path, content)| {
            let count = content.lines().filter(|line| line.contains(budget.pattern)).count();
            (count > 0).then_some((path, count))
        })
        .collect();
    let count: usize = hits.iter().map(|(_, c)| c).sum();
    let listing = hits
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(
        count <= budget.max,
        "`{}` budget exceeded: found {count}, max {}.\n{listing}",
        budget.pattern,
        budget.max
    );
}

#[test]
fn scan_finds_the_crate_sources() {
    let files = source_files();
    assert!(files.iter().any(|(path, _)| path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn unwrap_budget() {
    check(&UNWRAP);
}

#[test]
fn expect_budget() {
    check(&EXPECT);
}

#[test]
fn panic_budget() {
    check(&PANIC);
}

#[test]
fn unreachable_budget() {
    check(&UNREACHABLE);
}

#[test]
fn todo_budget() {
    check(&TODO);
}

#[test]
fn unimplemented_budget() {
    check(&UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    check(&SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    check(&DOT_OK);
}

#[test]
fn forget_budget() {
    check(&FORGET);
}

#[test]
fn allow_dead_code_budget() {
    check(&ALLOW_DEAD_CODE);
}
