//! `bloxd rules` — list the built-in lint rules.

use bloxd_lint::{LintEngine, LintRule};

use crate::pipeline::load_project;
use crate::GlobalArgs;

/// Runs the `bloxd rules` command.
///
/// Prints one row per rule with its effective severity under the current
/// project configuration (`off` for allowed rules).
pub fn run(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let lint = load_project(global)?
        .map(|p| p.config.lint)
        .unwrap_or_default();
    let engine = LintEngine::try_new(&lint)?;

    for row in rule_rows(&engine) {
        println!("{row}");
    }
    Ok(0)
}

fn rule_rows(engine: &LintEngine) -> Vec<String> {
    engine
        .rules()
        .iter()
        .map(|rule| format_rule(engine, rule.as_ref()))
        .collect()
}

fn format_rule(engine: &LintEngine, rule: &dyn LintRule) -> String {
    let level = engine
        .effective_severity(rule)
        .map_or_else(|| "off".to_string(), |s| s.to_string());
    format!(
        "{:<6}{:<18}{:<9}{}",
        rule.code().to_string(),
        rule.name(),
        level,
        rule.description()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloxd_config::LintConfig;

    #[test]
    fn default_rows() {
        let rows = rule_rows(&LintEngine::with_defaults());
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("W101  no-var            warning  "));
        assert!(rows[1].starts_with("E101  no-line-comment   error    "));
        assert!(rows[2].starts_with("E102  no-async-await    error    "));
    }

    #[test]
    fn configured_rows() {
        let config = LintConfig {
            deny: vec!["no-var".to_string()],
            allow: vec!["E101".to_string()],
            warn: Vec::new(),
        };
        let rows = rule_rows(&LintEngine::new(&config));
        assert!(rows[0].contains(" error "));
        assert!(rows[1].contains(" off "));
    }
}
