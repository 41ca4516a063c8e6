//! Integration tests for on-disk projects and concurrent scanning.
//!
//! These tests load `bloxd.toml` from temporary project layouts, lint the
//! scripts they contain, and check that engines are shareable across threads.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bloxd_config::{find_project_root, load_config, ConfigError};
use bloxd_conformance::{lint_files, make_config};
use bloxd_diagnostics::{DiagnosticRenderer, Severity, TerminalRenderer};
use bloxd_lint::{scan, LintEngine, LintError};
use bloxd_source::SourceDb;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn write_project(dir: &Path, config: &str, scripts: &[(&str, &str)]) {
    fs::write(dir.join("bloxd.toml"), config).unwrap();
    for (rel, content) in scripts {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

fn scripts_in(dir: &Path, ext: &str) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir).unwrap().flatten() {
        let path = entry.path();
        if path.is_dir() {
            out.extend(scripts_in(&path, ext));
        } else if path.extension().and_then(|e| e.to_str()) == Some(ext) {
            out.push(path);
        }
    }
    out.sort();
    out
}

// ---------------------------------------------------------------------------
// Projects on disk
// ---------------------------------------------------------------------------

#[test]
fn project_config_drives_engine() {
    let tmp = TempDir::new().unwrap();
    write_project(
        tmp.path(),
        r#"
[project]
name = "arena"
src = "scripts"

[lint]
deny = ["no-var"]
allow = ["E101"]
"#,
        &[
            ("scripts/main.js", "var hp = 10; // health\n"),
            ("scripts/world/spawn.js", "let x = 1;\n"),
        ],
    );

    let root = find_project_root(&tmp.path().join("scripts").join("world")).unwrap();
    let config = load_config(&root).unwrap();
    assert_eq!(config.project.name, "arena");

    let files = scripts_in(&root.join(&config.project.src), "js");
    assert_eq!(files.len(), 2);

    let engine = LintEngine::try_new(&config.lint).unwrap();
    let mut db = SourceDb::new();
    for f in &files {
        db.load_file(f).unwrap();
    }
    let diags: Vec<_> = db
        .files()
        .flat_map(|f| engine.scan(Some(f.content.as_str())))
        .collect();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].rule, "no-var");
    assert_eq!(diags[0].severity, Severity::Error);
}

#[test]
fn conflicting_config_is_rejected() {
    let tmp = TempDir::new().unwrap();
    write_project(
        tmp.path(),
        "[project]\nname = \"arena\"\n[lint]\ndeny = [\"no-var\"]\nallow = [\"no-var\"]\n",
        &[],
    );
    let err = load_config(tmp.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn name_and_code_conflict_is_rejected_by_engine() {
    let tmp = TempDir::new().unwrap();
    write_project(
        tmp.path(),
        "[project]\nname = \"arena\"\n[lint]\ndeny = [\"no-var\"]\nallow = [\"W101\"]\n",
        &[],
    );
    let config = load_config(tmp.path()).unwrap();
    let err = LintEngine::try_new(&config.lint).unwrap_err();
    assert_eq!(err, LintError::ConflictingRule("no-var".to_string()));
}

#[test]
fn unknown_rule_in_config_is_rejected_by_engine() {
    let tmp = TempDir::new().unwrap();
    write_project(
        tmp.path(),
        "[project]\nname = \"arena\"\n[lint]\nwarn = \"no-eval\"\n",
        &[],
    );
    let config = load_config(tmp.path()).unwrap();
    assert_eq!(config.lint.warn, vec!["no-eval"]);
    assert!(LintEngine::try_new(&config.lint).is_err());
}

#[test]
fn multi_file_results_keep_file_order() {
    let result = lint_files(
        &[
            ("a.js", "let a = 1;"),
            ("b.js", "await b;"),
            ("c.js", "var c;\n// c"),
        ],
        &make_config(),
    );
    let counts: Vec<_> = result.files.iter().map(|(_, d)| d.len()).collect();
    assert_eq!(counts, vec![0, 1, 2]);
    assert_eq!(result.error_count, 2);
    assert_eq!(result.warning_count, 1);
}

#[test]
fn rendered_report_points_at_token() {
    let mut db = SourceDb::new();
    let id = db.add_source("main.js", "let a = 1;\nlet b = await c;\n".to_string());
    let file = db.get_file(id);
    let diags = scan(Some(file.content.as_str()));
    assert_eq!(diags.len(), 1);

    let out = TerminalRenderer::new(false).render(&diags[0], file);
    assert!(out.starts_with("error[E102]: Async/await"));
    assert!(out.contains("main.js:2:9"));
    assert!(out.contains("let b = await c;"));
    assert!(out.contains("^^^^^"));
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[test]
fn concurrent_scans_match_sequential() {
    let inputs: Vec<String> = (0..32)
        .map(|i| match i % 4 {
            0 => format!("var v{i} = {i};"),
            1 => format!("let x = {i}; // note"),
            2 => format!("async function f{i}() {{ await g(); }}"),
            _ => format!("let clean{i} = {i};"),
        })
        .collect();
    let expected: Vec<_> = inputs.iter().map(|s| scan(Some(s.as_str()))).collect();

    let inputs = Arc::new(inputs);
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let inputs = Arc::clone(&inputs);
            std::thread::spawn(move || {
                inputs
                    .iter()
                    .skip(t)
                    .step_by(8)
                    .map(|s| scan(Some(s.as_str())))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (t, handle) in handles.into_iter().enumerate() {
        let got = handle.join().unwrap();
        let want: Vec<_> = expected.iter().skip(t).step_by(8).cloned().collect();
        assert_eq!(got, want);
    }
}

#[test]
fn shared_engine_across_threads() {
    let engine = LintEngine::with_defaults();
    std::thread::scope(|s| {
        let a = s.spawn(|| engine.scan(Some("var a;")));
        let b = s.spawn(|| engine.scan(Some("// b")));
        assert_eq!(a.join().unwrap()[0].rule, "no-var");
        assert_eq!(b.join().unwrap()[0].rule, "no-line-comment");
    });
}
