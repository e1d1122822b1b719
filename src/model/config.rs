use serde::{Deserialize, Serialize};

use crate::model::view::SortOrder;

/// Configuration from config.toml in the data directory.
///
/// Every field has a default so a missing or partial file works.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Filename of the task slot inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,
    /// Sort direction applied at startup ("asc" or "desc")
    #[serde(default)]
    pub default_sort: SortOrder,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_file: default_data_file(),
            default_sort: SortOrder::default(),
        }
    }
}

fn default_data_file() -> String {
    "tasks.json".to_string()
}
