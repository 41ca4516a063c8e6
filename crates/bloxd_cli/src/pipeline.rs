//! Shared pipeline helpers for CLI commands.
//!
//! Contains project resolution and script discovery used by `lint` and
//! `rules`.

use std::path::{Path, PathBuf};

use bloxd_config::{ProjectConfig, CONFIG_FILE};
use tracing::debug;

use crate::GlobalArgs;

/// A project located on disk together with its parsed configuration.
pub struct Project {
    /// Directory containing `bloxd.toml`.
    pub root: PathBuf,
    /// The parsed configuration.
    pub config: ProjectConfig,
}

impl Project {
    /// Directory holding the project's scripts.
    pub fn src_dir(&self) -> PathBuf {
        self.root.join(&self.config.project.src)
    }
}

/// Loads the project configuration named by the global args, if any.
///
/// With `--config`, the path must exist (a file selects its parent directory,
/// a directory is used as is). Without it, the nearest `bloxd.toml` above the
/// current directory is used; having none is not an error.
pub fn load_project(global: &GlobalArgs) -> Result<Option<Project>, Box<dyn std::error::Error>> {
    let root = match global.config {
        Some(ref config_path) => {
            let p = PathBuf::from(config_path);
            let dir = if p.is_file() {
                p.parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from("."))
            } else {
                p
            };
            if !dir.join(CONFIG_FILE).is_file() {
                return Err(format!("no {CONFIG_FILE} found at {config_path}").into());
            }
            dir
        }
        None => match bloxd_config::find_project_root(&std::env::current_dir()?) {
            Some(dir) => dir,
            None => {
                debug!("no {CONFIG_FILE} found, using default settings");
                return Ok(None);
            }
        },
    };

    let config = bloxd_config::load_config(&root)?;
    Ok(Some(Project { root, config }))
}

/// Expands the given paths into the list of script files to lint.
///
/// Files are taken as given. Directories are walked recursively for files
/// whose extension is in `extensions`; each directory's results are sorted.
pub fn collect_scripts(
    paths: &[PathBuf],
    extensions: &[String],
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(discover_scripts(path, extensions)?);
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            return Err(format!("no such file or directory: {}", path.display()).into());
        }
    }
    Ok(files)
}

/// Discovers script files in the given directory (recursive), sorted by path.
pub fn discover_scripts(
    dir: &Path,
    extensions: &[String],
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut files = Vec::new();
    walk_dir(dir, extensions, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk_dir(
    dir: &Path,
    extensions: &[String],
    files: &mut Vec<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk_dir(&path, extensions, files)?;
        } else if has_script_extension(&path, extensions) {
            files.push(path);
        }
    }
    Ok(())
}

/// Returns `true` if the file's extension is one of `extensions`.
pub fn has_script_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want == ext))
}
