//! Generator module - writes post pages, the index page and the stylesheet

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::Post;
use crate::diagnostics::Diagnostics;
use crate::error::{Error, Result};
use crate::templates::{
    index_context, post_context, SiteData, TemplateRenderer, INDEX_TEMPLATE, POST_TEMPLATE,
};
use crate::Vomit;

/// Static site generator using Tera templates
pub struct Generator<'a> {
    vomit: &'a Vomit,
    renderer: TemplateRenderer,
    site_data: SiteData,
}

impl<'a> Generator<'a> {
    /// Create a generator with templates loaded from the templates directory
    pub fn new(vomit: &'a Vomit) -> Self {
        Self::with_renderer(vomit, TemplateRenderer::load(&vomit.templates_dir))
    }

    pub fn with_renderer(vomit: &'a Vomit, renderer: TemplateRenderer) -> Self {
        Self {
            vomit,
            renderer,
            site_data: SiteData {
                title: vomit.config.title.clone(),
            },
        }
    }

    /// Generate the entire site from posts already in display order.
    ///
    /// Every page is attempted; failures are recorded in `diagnostics`.
    /// Only failing to create the site directory is returned as an error.
    pub fn generate(&self, posts: &[Post], diagnostics: &mut Diagnostics) -> Result<()> {
        let site_dir = &self.vomit.site_dir;
        fs::create_dir_all(site_dir).map_err(|e| Error::io(site_dir, e))?;

        self.generate_post_pages(posts, diagnostics);
        self.generate_index_page(posts, diagnostics);
        self.copy_stylesheet(diagnostics);

        Ok(())
    }

    /// Generate individual post pages
    fn generate_post_pages(&self, posts: &[Post], diagnostics: &mut Diagnostics) {
        let mut written: HashSet<&str> = HashSet::new();

        for post in posts {
            let output_path = self.vomit.site_dir.join(post.output_name());

            if !written.insert(post.output_name()) {
                diagnostics.warning(
                    &output_path,
                    format!(
                        "'{}' is produced by more than one post; the later one wins",
                        post.output_name()
                    ),
                );
            }

            let result = self
                .renderer
                .render(POST_TEMPLATE, &post_context(&self.site_data, post))
                .and_then(|html| write_page(&output_path, &html));

            match result {
                Ok(()) => tracing::debug!("Generated post: {:?}", output_path),
                Err(e) => diagnostics.failed(&output_path, e),
            }
        }
    }

    /// Generate the index page listing every post
    fn generate_index_page(&self, posts: &[Post], diagnostics: &mut Diagnostics) {
        let output_path = self.vomit.site_dir.join("index.html");

        let result = self
            .renderer
            .render(INDEX_TEMPLATE, &index_context(&self.site_data, posts))
            .and_then(|html| write_page(&output_path, &html));

        match result {
            Ok(()) => tracing::debug!("Generated index: {:?}", output_path),
            Err(e) => diagnostics.failed(&output_path, e),
        }
    }

    /// Copy the stylesheet from the templates directory into the site
    fn copy_stylesheet(&self, diagnostics: &mut Diagnostics) {
        let stylesheet = &self.vomit.config.stylesheet;
        let source = self.vomit.templates_dir.join(stylesheet);
        let dest: PathBuf = self.vomit.site_dir.join(stylesheet);

        match fs::copy(&source, &dest) {
            Ok(_) => tracing::debug!("Copied: {:?} -> {:?}", source, dest),
            Err(e) => diagnostics.failed(&source, Error::io(&source, e)),
        }
    }
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).map_err(|e| Error::io(path, e))
}
