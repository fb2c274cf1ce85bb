//! Hygiene: source-level budgets for the scheduling crate.
//!
//! Every production file under `src/` is scanned for constructs that either
//! crash the process or swallow an error. Budgets only ever go down.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

/// Panicking constructs.
const PANICS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "propagate with ? or fall back explicitly" },
    Budget { pattern: ".expect(", max: 0, why: "propagate with ? or fall back explicitly" },
    Budget { pattern: "panic!(", max: 0, why: "return a typed error" },
    Budget { pattern: "unreachable!(", max: 0, why: "make the match exhaustive" },
    Budget { pattern: "todo!(", max: 0, why: "finish the stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "finish the stub" },
];

/// Constructs that drop an error on the floor.
const DISCARDS: &[Budget] = &[
    Budget { pattern: "let _ =", max: 0, why: "inspect or log the result" },
    Budget { pattern: ".ok()", max: 0, why: "match on the error instead" },
];

const STYLE: &[Budget] = &[Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete unused code" }];

struct SourceFile {
    path: String,
    content: String,
}

fn production_sources() -> Vec<SourceFile> {
    let mut files = Vec::new();
    walk(Path::new("src"), &mut files);
    files
}

fn walk(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        let is_rust = path.extension().is_some_and(|e| e == "rs");
        if !is_rust || name.ends_with("_test.rs") || name.ends_with("test_support.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: name, content });
        }
    }
}

fn check(budgets: &[Budget]) {
    let files = production_sources();
    assert!(!files.is_empty(), "no sources found under src/");

    let mut failures = Vec::new();
    for budget in budgets {
        let hits: Vec<(String, usize)> = files
            .iter()
            .map(|f| (f.path.clone(), f.content.lines().filter(|l| l.contains(budget.pattern)).count()))
            .filter(|(_, n)| *n > 0)
            .collect();
        let found: usize = hits.iter().map(|(_, n)| n).sum();
        if found > budget.max {
            let detail: Vec<String> = hits.iter().map(|(p, n)| format!("    {p}: {n}")).collect();
            failures.push(format!(
                "{} budget exceeded: found {found}, max {} ({})\n{}",
                budget.pattern,
                budget.max,
                budget.why,
                detail.join("\n")
            ));
        }
    }
    assert!(failures.is_empty(), "\n{}", failures.join("\n"));
}

#[test]
fn panic_budgets() {
    check(PANICS);
}

#[test]
fn discard_budgets() {
    check(DISCARDS);
}

#[test]
fn style_budgets() {
    check(STYLE);
}
