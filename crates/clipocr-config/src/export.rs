use serde::{Deserialize, Serialize};

fn default_header() -> String {
    "识别结果".to_string()
}

fn default_file_name() -> String {
    "history.csv".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// Name of the single CSV column
    #[serde(default = "default_header")]
    pub header: String,
    /// File name proposed by the save dialog
    #[serde(default = "default_file_name")]
    pub default_file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            header: default_header(),
            default_file_name: default_file_name(),
        }
    }
}
