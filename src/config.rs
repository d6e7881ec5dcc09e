use serde::Deserialize;
use std::path::Path;

/// Application configuration loaded from an optional config.yaml.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,

    /// Maximum accepted request body size in bytes.
    pub max_upload_bytes: usize,

    /// Maximum decoded image size in pixels. Uploads beyond this are
    /// rejected before the pipeline runs, bounding per-request memory.
    pub max_pixels: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:10000".to_string(),
            max_upload_bytes: 25 * 1024 * 1024,
            max_pixels: 40_000_000,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults when
    /// no path is given or the file cannot be read or parsed. `BIND_ADDR`
    /// in the environment overrides the configured bind address.
    pub fn load(path: Option<&Path>) -> Self {
        let mut config = match path {
            Some(p) => match std::fs::read_to_string(p) {
                Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                    Ok(config) => {
                        tracing::info!(path = %p.display(), "Loaded configuration");
                        config
                    }
                    Err(e) => {
                        tracing::warn!(%e, "Failed to parse config, using defaults");
                        Self::default()
                    }
                },
                Err(e) => {
                    tracing::warn!(%e, "Failed to read config, using defaults");
                    Self::default()
                }
            },
            None => Self::default(),
        };

        if let Ok(addr) = std::env::var("BIND_ADDR") {
            config.bind_addr = addr;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr, "0.0.0.0:10000");
        assert_eq!(config.max_upload_bytes, 25 * 1024 * 1024);
        assert_eq!(config.max_pixels, 40_000_000);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: AppConfig = serde_yaml::from_str("bind_addr: 127.0.0.1:8080").unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.max_pixels, 40_000_000);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = "bind_addr: 0.0.0.0:3000\nmax_upload_bytes: 1048576\nmax_pixels: 1000000\n";
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.max_upload_bytes, 1_048_576);
        assert_eq!(config.max_pixels, 1_000_000);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_pixels: 5000").unwrap();

        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config.max_pixels, 5000);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load(Some(Path::new("/nonexistent/config.yaml")));
        assert_eq!(config.max_pixels, AppConfig::default().max_pixels);
    }
}
