/// `load_config` module: Loads an optional YAML config file and maps it onto the core [`ArchiveConfig`].
///
/// This module is the only place where user-supplied YAML config is parsed.
///
/// # Responsibilities
/// - Parse the YAML file into the YAML-side section structs below
/// - Overlay every key that is present onto [`ArchiveConfig::default`]
/// - Reject unknown keys and empty values with clear diagnostics
///
/// # Accepted schema (every key optional)
///
/// ```yaml
/// site:
///   title: KMC Kibela Archive
///   service_name: KMC Kibela
///   service_url: https://kmc.kibe.la
/// layout:
///   notes_dir: notes
///   attachments_dir: attachments
/// ```
///
/// # Errors
/// All errors use `anyhow::Error` and are surfaced at the CLI boundary.
use anyhow::{bail, Result};
use kibela_archive_core::ArchiveConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{error, info};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub layout: LayoutSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    pub title: Option<String>,
    pub service_name: Option<String>,
    pub service_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutSection {
    pub notes_dir: Option<String>,
    pub attachments_dir: Option<String>,
}

impl CliConfig {
    /// Overlays the keys present in the file onto the defaults.
    pub fn into_archive_config(self) -> Result<ArchiveConfig> {
        let mut config = ArchiveConfig::default();
        let overrides = [
            ("site.title", self.site.title, &mut config.site_title),
            ("site.service_name", self.site.service_name, &mut config.service_name),
            ("site.service_url", self.site.service_url, &mut config.service_url),
            ("layout.notes_dir", self.layout.notes_dir, &mut config.notes_dir),
            (
                "layout.attachments_dir",
                self.layout.attachments_dir,
                &mut config.attachments_dir,
            ),
        ];
        for (key, value, slot) in overrides {
            if let Some(value) = value {
                if value.trim().is_empty() {
                    bail!("Config key `{key}` must not be empty");
                }
                *slot = value;
            }
        }
        Ok(config)
    }
}

/// Loads a YAML config file and returns the effective [`ArchiveConfig`].
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ArchiveConfig> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let config_content = match fs::read_to_string(path_ref) {
        Ok(content) => {
            info!(config_path = ?path_ref, "Config file read successfully");
            content
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
            return Err(anyhow::anyhow!(
                "Failed to read config file {:?}: {}",
                path_ref,
                e
            ));
        }
    };

    if config_content.trim().is_empty() {
        info!(config_path = ?path_ref, "Config file is empty, using defaults");
        return Ok(ArchiveConfig::default());
    }

    let raw: CliConfig = match serde_yaml::from_str(&config_content) {
        Ok(conf) => {
            info!(config_path = ?path_ref, "Parsed config YAML successfully");
            conf
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
            return Err(anyhow::anyhow!("Failed to parse config YAML: {e}"));
        }
    };

    raw.into_archive_config()
}
