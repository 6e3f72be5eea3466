use std::fs;
use std::path::{Path, PathBuf};

use crate::ops::editor::Intent;

/// Error type for intent scripts
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse script: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Read a JSON array of intents. `-` reads from stdin.
pub fn read_script(path: &Path) -> Result<Vec<Intent>, ScriptError> {
    let text = if path == Path::new("-") {
        std::io::read_to_string(std::io::stdin()).map_err(|e| ScriptError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?
    } else {
        fs::read_to_string(path).map_err(|e| ScriptError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?
    };
    parse_script(&text)
}

pub fn parse_script(text: &str) -> Result<Vec<Intent>, ScriptError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::drag::DragResult;
    use tempfile::TempDir;

    #[test]
    fn reads_script_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("script.json");
        fs::write(
            &path,
            r#"[{"intent":"add","text":"a"},{"intent":"drag_complete","source":{"index":0},"destination":{"index":1}}]"#,
        )
        .unwrap();
        let intents = read_script(&path).unwrap();
        assert_eq!(
            intents,
            vec![
                Intent::Add { text: "a".into() },
                Intent::DragComplete(DragResult::dropped(0, 1)),
            ]
        );
    }

    #[test]
    fn missing_file_reports_path() {
        let tmp = TempDir::new().unwrap();
        let err = read_script(&tmp.path().join("gone.json")).unwrap_err();
        assert!(err.to_string().contains("gone.json"));
    }

    #[test]
    fn unknown_intent_is_a_parse_error() {
        let err = parse_script(r#"[{"intent":"explode"}]"#).unwrap_err();
        assert!(matches!(err, ScriptError::ParseError(_)));
    }
}
