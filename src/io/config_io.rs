use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::AppConfig;

/// Read config.toml from the data directory.
///
/// A missing or unparseable file yields the defaults; configuration is
/// never a reason to refuse to start.
pub fn read_config(data_dir: &Path) -> AppConfig {
    let path = data_dir.join("config.toml");
    let Ok(text) = fs::read_to_string(&path) else {
        return AppConfig::default();
    };
    toml::from_str(&text).unwrap_or_default()
}

/// Resolve the data directory: an explicit override wins, otherwise
/// `~/.slate`, falling back to `.slate` in the current directory when no
/// home directory can be determined.
pub fn resolve_data_dir(override_dir: Option<&str>) -> PathBuf {
    match override_dir {
        Some(dir) => PathBuf::from(dir),
        None => dirs::home_dir()
            .map(|home| home.join(".slate"))
            .unwrap_or_else(|| PathBuf::from(".slate")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::view::SortOrder;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_config_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = read_config(tmp.path());
        assert_eq!(config.data_file, "tasks.json");
        assert_eq!(config.default_sort, SortOrder::Asc);
    }

    #[test]
    fn config_file_is_honored() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "data_file = \"work.json\"\ndefault_sort = \"desc\"\n",
        )
        .unwrap();
        let config = read_config(tmp.path());
        assert_eq!(config.data_file, "work.json");
        assert_eq!(config.default_sort, SortOrder::Desc);
    }

    #[test]
    fn malformed_config_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "not toml {{{").unwrap();
        let config = read_config(tmp.path());
        assert_eq!(config.data_file, "tasks.json");
    }

    #[test]
    fn explicit_data_dir_wins() {
        assert_eq!(resolve_data_dir(Some("/tmp/x")), PathBuf::from("/tmp/x"));
    }
}
