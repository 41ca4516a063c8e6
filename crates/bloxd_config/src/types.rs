//! Configuration types deserialized from `bloxd.toml`.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

/// The top-level project configuration parsed from `bloxd.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// Core project metadata (name, script directory, extensions).
    pub project: ProjectMeta,
    /// Lint settings (deny/allow/warn rules).
    #[serde(default)]
    pub lint: LintConfig,
}

/// Core project metadata required in every `bloxd.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectMeta {
    /// The project name.
    pub name: String,
    /// The project version string.
    #[serde(default = "default_version")]
    pub version: String,
    /// A brief description of the project.
    #[serde(default)]
    pub description: String,
    /// Directory holding the scripts, relative to `bloxd.toml`.
    #[serde(default = "default_src")]
    pub src: String,
    /// File extensions treated as Bloxd scripts (without the leading dot).
    ///
    /// Accepts a single string or a list; defaults to `["js"]`.
    #[serde(default = "default_extensions", deserialize_with = "deserialize_string_or_vec")]
    pub extensions: Vec<String>,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

fn default_src() -> String {
    "src".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["js".to_string()]
}

/// Lint configuration controlling which rules are reported and at what level.
///
/// Entries are rule names (`no-var`) or rule codes (`W101`).
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct LintConfig {
    /// Rules whose diagnostics are promoted to errors.
    #[serde(default, deserialize_with = "deserialize_string_or_vec")]
    pub deny: Vec<String>,
    /// Rules that are not run at all.
    #[serde(default, deserialize_with = "deserialize_string_or_vec")]
    pub allow: Vec<String>,
    /// Rules whose diagnostics are reported as warnings.
    #[serde(default, deserialize_with = "deserialize_string_or_vec")]
    pub warn: Vec<String>,
}

/// Deserializes a field that can be either a single string or a list of strings.
///
/// Allows `deny = "no-var"` as shorthand for `deny = ["no-var"]`.
fn deserialize_string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(vec![v.to_string()])
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut vec = Vec::new();
            while let Some(val) = seq.next_element::<String>()? {
                vec.push(val);
            }
            Ok(vec)
        }
    }

    deserializer.deserialize_any(StringOrVec)
}
