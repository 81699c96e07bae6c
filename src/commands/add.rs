//! Scaffold a new dated post from an existing file

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::{FrontMatter, PostFilename};
use crate::Vomit;

/// Options for `add`
#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    /// Title for the new post; also the source of its slug
    pub title: Option<String>,
    /// Publication date, today if unset
    pub date: Option<NaiveDate>,
}

/// Copy `source` into the posts directory as `<date>-<slug>.md`.
///
/// With a title, the copy gets a fresh front-matter block carrying it (any
/// block already in the source is dropped). Returns the created path.
pub fn run(vomit: &Vomit, source: &Path, options: &AddOptions) -> Result<PathBuf> {
    let content =
        fs::read_to_string(source).with_context(|| format!("Failed to read {:?}", source))?;

    let date = options.date.unwrap_or_else(|| Local::now().date_naive());
    let slug = match &options.title {
        Some(title) => slug::slugify(title),
        None => slug::slugify(source_slug(source)),
    };
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug for {:?}; pass --title", source);
    }

    fs::create_dir_all(&vomit.posts_dir)?;
    let target = vomit
        .posts_dir
        .join(format!("{}-{}.md", date.format("%Y-%m-%d"), slug));

    if target.exists() {
        anyhow::bail!("File already exists: {:?}", target);
    }

    let content = match &options.title {
        Some(title) => {
            let body = FrontMatter::split(&content)
                .map(|(_, body)| body)
                .unwrap_or(&content);
            format!("---\ntitle: {}\n---\n\n{}", title, body)
        }
        None => content,
    };

    fs::write(&target, content).with_context(|| format!("Failed to write {:?}", target))?;
    tracing::info!("Created: {:?}", target);

    Ok(target)
}

/// Slug of an existing file: the part after its date prefix if it has one,
/// otherwise the whole stem
fn source_slug(source: &Path) -> String {
    match PostFilename::parse(source) {
        Ok(name) => name.slug,
        Err(_) => source
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default(),
    }
}
