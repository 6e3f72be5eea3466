use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::{EditorConfig, Preset};

/// Config file looked up in the working directory when no path is given
pub const CONFIG_FILE: &str = "quotelist.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("could not serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("{0}")]
    UnknownPreset(String),
}

/// Resolve the effective configuration.
///
/// An explicit path must exist. Otherwise `quotelist.toml` in `dir` is used
/// when present, falling back to the built-in `preset`.
pub fn load_config(
    explicit: Option<&Path>,
    dir: &Path,
    preset: Option<Preset>,
) -> Result<EditorConfig, ConfigError> {
    let fallback = preset.unwrap_or_default();
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = dir.join(CONFIG_FILE);
            if !candidate.is_file() {
                tracing::debug!(preset = %fallback, "no config file, using preset");
                return Ok(EditorConfig::preset(fallback));
            }
            candidate
        }
    };
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    let config = parse_config(&text, fallback)?;
    tracing::debug!(path = %path.display(), preset = %config.preset, "loaded config");
    Ok(config)
}

/// Parse config text layered over a preset.
///
/// The document's own `preset` key wins over `fallback`. Keys present in the
/// document replace the preset's values; everything else is inherited.
pub fn parse_config(text: &str, fallback: Preset) -> Result<EditorConfig, ConfigError> {
    let document: toml::Table = toml::from_str(text)?;
    let preset = match document.get("preset") {
        Some(toml::Value::String(name)) => name.parse().map_err(ConfigError::UnknownPreset)?,
        Some(other) => {
            return Err(ConfigError::UnknownPreset(format!(
                "preset must be a string, got {}",
                other.type_str()
            )));
        }
        None => fallback,
    };

    let mut merged = match toml::Value::try_from(EditorConfig::preset(preset))? {
        toml::Value::Table(table) => table,
        _ => toml::Table::new(),
    };
    merge_tables(&mut merged, document);
    merged.insert("preset".into(), toml::Value::String(preset.name().into()));

    Ok(toml::Value::Table(merged).try_into()?)
}

/// Render a configuration as TOML
pub fn render_config(config: &EditorConfig) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(config)?)
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(overlay_table) => {
                if let Some(toml::Value::Table(base_table)) = base.get_mut(&key) {
                    merge_tables(base_table, overlay_table);
                    continue;
                }
                base.insert(key, toml::Value::Table(overlay_table));
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}
