use tracing::{debug, info};

pub const DEFAULT_SITE_TITLE: &str = "KMC Kibela Archive";
pub const DEFAULT_SERVICE_NAME: &str = "KMC Kibela";
pub const DEFAULT_SERVICE_URL: &str = "https://kmc.kibe.la";
pub const DEFAULT_NOTES_DIR: &str = "notes";
pub const DEFAULT_ATTACHMENTS_DIR: &str = "attachments";

/// Site-level settings embedded in pages, and the source layout names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveConfig {
    /// Label of the back-link on every note page.
    pub site_title: String,
    /// Link text of the index banner.
    pub service_name: String,
    /// Link target of the index banner.
    pub service_url: String,
    /// Sub-directory of the source holding note files.
    pub notes_dir: String,
    /// Sub-directory of the source (and of the output) holding attachments.
    pub attachments_dir: String,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            site_title: DEFAULT_SITE_TITLE.to_string(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            service_url: DEFAULT_SERVICE_URL.to_string(),
            notes_dir: DEFAULT_NOTES_DIR.to_string(),
            attachments_dir: DEFAULT_ATTACHMENTS_DIR.to_string(),
        }
    }
}

impl ArchiveConfig {
    pub fn trace_loaded(&self) {
        info!(
            site_title = %self.site_title,
            service_url = %self.service_url,
            notes_dir = %self.notes_dir,
            attachments_dir = %self.attachments_dir,
            "Loaded ArchiveConfig"
        );
        debug!(?self, "ArchiveConfig loaded (full debug)");
    }
}
