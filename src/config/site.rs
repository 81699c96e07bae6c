//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::helpers::LONG_DATE_FORMAT;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Blog title, handed to templates as `site.title`
    pub title: String,

    // Directories, relative to the base directory
    pub posts_dir: String,
    pub templates_dir: String,
    pub site_dir: String,

    /// Stylesheet copied from the templates directory into the site
    pub stylesheet: String,

    /// chrono format for the long-form post date
    pub date_format: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            posts_dir: "posts".to_string(),
            templates_dir: "templates".to_string(),
            site_dir: "site".to_string(),
            stylesheet: "style.css".to_string(),
            date_format: LONG_DATE_FORMAT.to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
