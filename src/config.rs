use crate::EvnoteError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
pub struct EvnoteConfig {
    #[serde(default)]
    pub comments: HashMap<String, String>,
}

/// Load a commentary table from a TOML file. The file replaces the built-in
/// table entirely; there is no merging.
pub fn load_table(path: &Path) -> Result<HashMap<String, String>, EvnoteError> {
    let content = std::fs::read_to_string(path)?;
    let config: EvnoteConfig = toml::from_str(&content)
        .map_err(|e| EvnoteError::Config(format!("{}: {e}", path.display())))?;
    validate_table(&config.comments)?;
    Ok(config.comments)
}

fn validate_table(table: &HashMap<String, String>) -> Result<(), EvnoteError> {
    for (id, text) in table {
        if text.trim().is_empty() {
            return Err(EvnoteError::Config(format!("comments[\"{id}\"] is empty")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_toml(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("comments.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_comments_table() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_toml(
            &dir,
            "[comments]\n\"ev-1\" = \"first\"\n\"ev-2\" = \"second\"\n",
        );

        let table = load_table(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table["ev-1"], "first");
    }

    #[test]
    fn empty_commentary_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_toml(&dir, "[comments]\n\"ev-1\" = \"  \"\n");

        let err = load_table(&path).unwrap_err();
        assert!(matches!(err, EvnoteError::Config(_)));
        assert!(err.to_string().contains("ev-1"));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_toml(&dir, "[comments\n");

        assert!(matches!(load_table(&path), Err(EvnoteError::Config(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");

        assert!(matches!(load_table(&path), Err(EvnoteError::Io(_))));
    }

    #[test]
    fn missing_comments_section_yields_empty_table() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_toml(&dir, "");

        let table = load_table(&path).unwrap();
        assert!(table.is_empty());
    }
}
