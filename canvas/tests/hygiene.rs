//! Hygiene: enforces coding standards at test time
//!
//! These tests scan the engine source tree for antipatterns. The engine runs
//! inside pointer-event handlers in the browser, where a panic takes the whole
//! page down, so every panic budget is zero. Two structural budgets pin down
//! where the crate may touch the browser and where it may truncate floats to
//! pixel indices.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

/// A pattern and how many production lines may contain it.
struct Budget {
    pattern: &'static str,
    max: usize,
    hint: &'static str,
}

// Panics: these crash the page.
const PANICS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, hint: "propagate with `?` or fall back" },
    Budget { pattern: ".expect(", max: 0, hint: "propagate with `?` or fall back" },
    Budget { pattern: "panic!(", max: 0, hint: "return a typed error" },
    Budget { pattern: "unreachable!(", max: 0, hint: "make the match exhaustive" },
    Budget { pattern: "todo!(", max: 0, hint: "finish the stub" },
    Budget { pattern: "unimplemented!(", max: 0, hint: "finish the stub" },
];

// Silent loss: errors discarded without being logged.
const DISCARDS: &[Budget] = &[
    Budget { pattern: "let _ =", max: 0, hint: "log the error at debug" },
    Budget { pattern: ".ok()", max: 0, hint: "log the error at debug" },
];

// Output goes through the `log` facade, never straight to stdout/stderr.
const PRINTS: &[Budget] = &[
    Budget { pattern: "println!(", max: 0, hint: "use log::debug!" },
    Budget { pattern: "eprintln!(", max: 0, hint: "use log::warn!" },
    Budget { pattern: "dbg!(", max: 0, hint: "use log::debug!" },
];

const MAX_ALLOW_DEAD_CODE: usize = 0;

/// Only the browser surface may name `web_sys` types.
const BROWSER_MODULES: &[&str] = &["render.rs"];

/// Float-to-pixel truncation lives in the region and raster helpers only.
const PIXEL_CASTS: &[(&str, usize)] = &[("frame.rs", 3), ("surface.rs", 1)];

struct SourceFile {
    path: String,
    content: String,
}

impl SourceFile {
    fn name(&self) -> &str {
        Path::new(&self.path).file_name().and_then(|n| n.to_str()).unwrap_or_default()
    }

    /// Lines containing `pattern`, skipping comments.
    fn count(&self, pattern: &str) -> usize {
        self.content
            .lines()
            .map(str::trim_start)
            .filter(|line| !line.starts_with("//"))
            .filter(|line| line.contains(pattern))
            .count()
    }
}

/// Collect production `.rs` files from `src/`, excluding `_test.rs` files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found under src/");
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
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.path.clone(), file.count(pattern)))
        .filter(|(_, count)| *count > 0)
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn check(budgets: &[Budget]) {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in budgets {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            failures.push(format!(
                "`{}` budget exceeded: found {count}, max {} ({}).\n{}",
                budget.pattern,
                budget.max,
                budget.hint,
                format_hits(&found)
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn panic_budgets() {
    check(PANICS);
}

#[test]
fn silent_discard_budgets() {
    check(DISCARDS);
}

#[test]
fn print_budgets() {
    check(PRINTS);
}

#[test]
fn allow_dead_code_budget() {
    let files = source_files();
    let found = hits(&files, "#[allow(dead_code)]");
    let count: usize = found.iter().map(|(_, c)| c).sum();
    assert!(
        count <= MAX_ALLOW_DEAD_CODE,
        "#[allow(dead_code)] budget exceeded: found {count}, max {MAX_ALLOW_DEAD_CODE}.\n{}",
        format_hits(&found)
    );
}

#[test]
fn browser_types_stay_in_render() {
    let offenders: Vec<_> = source_files()
        .into_iter()
        .filter(|file| !BROWSER_MODULES.contains(&file.name()))
        .map(|file| (file.path.clone(), file.count("web_sys")))
        .filter(|(_, count)| *count > 0)
        .collect();
    assert!(
        offenders.is_empty(),
        "web_sys used outside {BROWSER_MODULES:?}; go through the Surface trait.\n{}",
        format_hits(&offenders)
    );
}

#[test]
fn pixel_casts_stay_in_helpers() {
    let mut failures = Vec::new();
    for file in source_files() {
        let allowed = PIXEL_CASTS
            .iter()
            .find(|(name, _)| *name == file.name())
            .map_or(0, |(_, max)| *max);
        let count = file.count(" as u32");
        if count > allowed {
            failures.push(format!("  {}: {count} `as u32` casts, max {allowed}", file.path));
        }
    }
    assert!(
        failures.is_empty(),
        "truncating casts outside the pixel helpers; use u32::try_from or extend the helper.\n{}",
        failures.join("\n")
    );
}
