//! Upload acceptance limits.

use serde::{Deserialize, Serialize};

/// Limits applied to an uploaded file before any parsing happens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Maximum accepted file size in bytes.
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size_bytes: u64,
    /// Accepted file extensions, lowercase, without the dot.
    ///
    /// `ai` is advertised in the laser format hint but has never been on
    /// the acceptance list.
    #[serde(default = "default_accepted_extensions")]
    pub accepted_extensions: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_upload_size_bytes: default_max_upload_size(),
            accepted_extensions: default_accepted_extensions(),
        }
    }
}

impl UploadConfig {
    /// Whether a file extension (lowercase, no dot) is accepted.
    pub fn accepts(&self, extension: &str) -> bool {
        self.accepted_extensions.iter().any(|e| e == extension)
    }
}

fn default_max_upload_size() -> u64 {
    50 * 1024 * 1024
}

fn default_accepted_extensions() -> Vec<String> {
    ["stl", "step", "stp", "dxf", "svg", "dwg", "pdf", "obj", "3mf"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_known_extensions() {
        let config = UploadConfig::default();
        assert!(config.accepts("stl"));
        assert!(config.accepts("3mf"));
        assert!(!config.accepts("exe"));
        assert!(!config.accepts("ai"));
    }
}
