//! vomit-rs: a tiny static blog generator
//!
//! Turns a directory of dated Markdown files (`YYYY-MM-DD-slug.md`) into one
//! HTML page per post, an `index.html` listing the posts newest first, and a
//! copy of the stylesheet. The pipeline runs once, start to finish:
//!
//! 1. discover and load posts ([`content::loader`])
//! 2. order them by date ([`content::sort_posts`])
//! 3. render pages through the `post` and `index` templates ([`generator`])

pub mod commands;
pub mod config;
pub mod content;
pub mod diagnostics;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use commands::generate::BuildReport;

/// The main application
#[derive(Debug, Clone)]
pub struct Vomit {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Markdown sources
    pub posts_dir: PathBuf,
    /// `post.html`, `index.html` and the stylesheet
    pub templates_dir: PathBuf,
    /// Output directory
    pub site_dir: PathBuf,
}

impl Vomit {
    /// Create a new instance from a directory, reading `_config.yml` if
    /// one exists there
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create an instance from an explicit configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let posts_dir = base_dir.join(&config.posts_dir);
        let templates_dir = base_dir.join(&config.templates_dir);
        let site_dir = base_dir.join(&config.site_dir);

        Self {
            config,
            base_dir,
            posts_dir,
            templates_dir,
            site_dir,
        }
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<BuildReport> {
        commands::generate::run(self)
    }

    /// Remove the generated site
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Scaffold a new dated post from an existing file
    pub fn add_post(&self, source: &Path, options: &commands::add::AddOptions) -> Result<PathBuf> {
        commands::add::run(self, source, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_directories() {
        let dir = tempfile::tempdir().unwrap();
        let vomit = Vomit::new(dir.path()).unwrap();
        assert_eq!(vomit.posts_dir, dir.path().join("posts"));
        assert_eq!(vomit.templates_dir, dir.path().join("templates"));
        assert_eq!(vomit.site_dir, dir.path().join("site"));
    }

    #[test]
    fn test_config_file_overrides_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "posts_dir: src/posts\nsite_dir: public\n",
        )
        .unwrap();

        let vomit = Vomit::new(dir.path()).unwrap();
        assert_eq!(vomit.posts_dir, dir.path().join("src/posts"));
        assert_eq!(vomit.site_dir, dir.path().join("public"));
        assert_eq!(vomit.templates_dir, dir.path().join("templates"));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "title: [unclosed").unwrap();
        assert!(Vomit::new(dir.path()).is_err());
    }
}
