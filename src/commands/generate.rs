//! Generate static files

use anyhow::Result;
use std::time::Instant;

use crate::content::loader::ContentLoader;
use crate::content::{sort_posts, Post};
use crate::diagnostics::Diagnostics;
use crate::error::Error;
use crate::generator::Generator;
use crate::Vomit;

/// Outcome of one pipeline run
#[derive(Debug)]
pub struct BuildReport {
    /// The corpus, newest first
    pub posts: Vec<Post>,
    /// Everything skipped, warned about or failed along the way
    pub diagnostics: Diagnostics,
}

/// Run the whole pipeline once: discover, load, order, emit.
///
/// Returns an error only when a required directory is missing, before any
/// output is written. Per-file and per-page problems end up in the report.
pub fn run(vomit: &Vomit) -> Result<BuildReport> {
    let start = Instant::now();

    for dir in [&vomit.posts_dir, &vomit.templates_dir] {
        if !dir.is_dir() {
            return Err(Error::DirectoryNotFound { path: dir.clone() }.into());
        }
    }

    let mut diagnostics = Diagnostics::new();

    let loader = ContentLoader::new(vomit);
    let mut posts = loader.discover_posts(&mut diagnostics)?;
    sort_posts(&mut posts);

    tracing::info!("Loaded {} posts", posts.len());

    Generator::new(vomit).generate(&posts, &mut diagnostics)?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated in {:.2}s ({})",
        duration.as_secs_f64(),
        diagnostics.summary()
    );

    Ok(BuildReport { posts, diagnostics })
}
