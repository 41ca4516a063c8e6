//! `bloxd lint` — scan scripts and report diagnostics.
//!
//! 1. Load `bloxd.toml` if one applies
//! 2. Merge `--allow`/`--deny` with the config's lint section
//! 3. Collect scripts (paths, the project's script directory, or stdin)
//! 4. Scan every buffer in parallel
//! 5. Render diagnostics and a summary

use std::io::Read;
use std::path::PathBuf;

use bloxd_config::LintConfig;
use bloxd_diagnostics::{Diagnostic, DiagnosticRenderer, Severity, TerminalRenderer};
use bloxd_lint::LintEngine;
use bloxd_source::{FileId, SourceDb};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::pipeline::{collect_scripts, load_project};
use crate::{GlobalArgs, LintArgs, ReportFormat};

/// Name shown for a buffer read from stdin.
const STDIN_NAME: &str = "<stdin>";

/// Diagnostics of one file in JSON output.
#[derive(Serialize)]
struct FileReport<'a> {
    path: String,
    diagnostics: &'a [Diagnostic],
}

/// Runs the `bloxd lint` command.
///
/// Returns exit code 0 if no errors were reported, 1 otherwise.
pub fn run(args: &LintArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project = load_project(global)?;

    let base = project
        .as_ref()
        .map(|p| p.config.lint.clone())
        .unwrap_or_default();
    let registry = LintEngine::with_defaults();
    let engine = LintEngine::try_new(&merge_lint_config(&registry, &base, args))?;

    let mut source_db = SourceDb::new();
    let mut skipped = 0usize;
    if args.stdin {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        source_db.add_source(STDIN_NAME, content);
    } else {
        let (roots, extensions) = match &project {
            Some(p) if args.paths.is_empty() => {
                if !global.quiet {
                    eprintln!(
                        "   Checking {} v{}",
                        p.config.project.name, p.config.project.version
                    );
                }
                (vec![p.src_dir()], p.config.project.extensions.clone())
            }
            Some(p) => (args.paths.clone(), p.config.project.extensions.clone()),
            None if args.paths.is_empty() => (vec![PathBuf::from(".")], vec!["js".to_string()]),
            None => (args.paths.clone(), vec!["js".to_string()]),
        };
        for path in collect_scripts(&roots, &extensions)? {
            if let Err(e) = source_db.load_file(&path) {
                warn!(path = %path.display(), error = %e, "skipping unreadable script");
                if !global.quiet {
                    eprintln!("warning: skipping {}: {e}", path.display());
                }
                skipped += 1;
            }
        }
    }

    if source_db.is_empty() {
        if !global.quiet {
            eprintln!("warning: no scripts found");
        }
        return Ok(0);
    }

    let reports = scan_all(&engine, &source_db);

    match args.format {
        ReportFormat::Text => {
            let renderer = TerminalRenderer::new(global.color);
            for (file_id, diagnostics) in &reports {
                let file = source_db.get_file(*file_id);
                for diag in diagnostics {
                    eprintln!("{}", renderer.render(diag, file));
                }
            }
        }
        ReportFormat::Json => {
            let json_reports: Vec<FileReport<'_>> = reports
                .iter()
                .map(|(file_id, diagnostics)| FileReport {
                    path: source_db.get_file(*file_id).path.display().to_string(),
                    diagnostics,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&json_reports)?);
        }
    }

    let all = || reports.iter().flat_map(|(_, d)| d.iter());
    let error_count = all().filter(|d| d.severity == Severity::Error).count();
    let warning_count = all().filter(|d| d.severity == Severity::Warning).count();

    if !global.quiet && args.format == ReportFormat::Text {
        eprintln!(
            "   Result: {} file(s), {} error(s), {} warning(s)",
            source_db.len(),
            error_count,
            warning_count
        );
        if skipped > 0 {
            eprintln!("   Skipped: {skipped} unreadable file(s)");
        }
    }

    if error_count > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}

/// Scans every loaded buffer, in parallel, keeping load order in the result.
fn scan_all(engine: &LintEngine, source_db: &SourceDb) -> Vec<(FileId, Vec<Diagnostic>)> {
    let files: Vec<_> = source_db.files().collect();
    files
        .par_iter()
        .map(|file| {
            let diagnostics = engine.scan(Some(file.content.as_str()));
            debug!(path = %file.path.display(), count = diagnostics.len(), "linted file");
            (file.id, diagnostics)
        })
        .collect()
}

/// Merges CLI `--allow`/`--deny` flags with the config file's lint section.
///
/// Entries are first resolved to rule names through `registry`, so `W101`
/// and `no-var` count as the same rule. CLI flags take precedence: if a rule
/// appears in both CLI `--allow` and config `deny`, the CLI `--allow` wins.
fn merge_lint_config(registry: &LintEngine, config: &LintConfig, args: &LintArgs) -> LintConfig {
    let LintConfig {
        mut deny,
        mut allow,
        warn,
    } = registry.canonicalize(config);

    for rule in registry.canonical_entries(&args.deny) {
        allow.retain(|r| *r != rule);
        if !deny.contains(&rule) {
            deny.push(rule);
        }
    }
    for rule in registry.canonical_entries(&args.allow) {
        deny.retain(|r| *r != rule);
        if !allow.contains(&rule) {
            allow.push(rule);
        }
    }

    LintConfig { deny, allow, warn }
}
