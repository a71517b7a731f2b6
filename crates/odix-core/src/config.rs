use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_progress_interval() -> usize {
    1000
}

/// Global configuration loaded from `~/.config/odix/config.toml`.
///
/// Everything here is a default; positional CLI arguments override it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OdixConfig {
    /// Glob pattern used when none is given on the command line.
    pub default_pattern: String,
    /// Input folder used when none is given, relative to the working directory.
    pub default_folder: PathBuf,
    /// Output file name, placed inside the input folder when no path is given.
    pub output_name: String,
    /// Print a progress line after this many URLs within one file.
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,
}

impl Default for OdixConfig {
    fn default() -> Self {
        Self {
            default_pattern: "query*.csv".to_string(),
            default_folder: PathBuf::from("files"),
            output_name: "indexes.csv".to_string(),
            progress_interval: 1000,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("odix")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<OdixConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = OdixConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: OdixConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = OdixConfig::default();
        assert_eq!(cfg.default_pattern, "query*.csv");
        assert_eq!(cfg.default_folder, PathBuf::from("files"));
        assert_eq!(cfg.output_name, "indexes.csv");
        assert_eq!(cfg.progress_interval, 1000);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = OdixConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: OdixConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.default_pattern, cfg.default_pattern);
        assert_eq!(parsed.default_folder, cfg.default_folder);
        assert_eq!(parsed.output_name, cfg.output_name);
        assert_eq!(parsed.progress_interval, cfg.progress_interval);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            default_pattern = "export-*.csv"
            default_folder = "/srv/dumps"
            output_name = "fields.csv"
        "#;
        let cfg: OdixConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.default_pattern, "export-*.csv");
        assert_eq!(cfg.default_folder, PathBuf::from("/srv/dumps"));
        assert_eq!(cfg.output_name, "fields.csv");
        // progress_interval falls back to its default when omitted.
        assert_eq!(cfg.progress_interval, 1000);
    }

    #[test]
    fn config_toml_progress_interval() {
        let toml = r#"
            default_pattern = "query*.csv"
            default_folder = "files"
            output_name = "indexes.csv"
            progress_interval = 250
        "#;
        let cfg: OdixConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.progress_interval, 250);
    }
}
