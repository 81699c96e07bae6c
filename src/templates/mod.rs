//! Page templates using the Tera template engine
//!
//! Two named templates are read from the templates directory: `post`
//! (`post.html`) renders one post, `index` (`index.html`) renders the list
//! of all posts. A template that can't be loaded only breaks the pages that
//! use it.

use serde::Serialize;
use std::collections::HashMap;
use std::error::Error as _;
use std::path::Path;
use tera::{Context, Tera};

use crate::content::Post;
use crate::error::{Error, Result};

/// Template for a single post page
pub const POST_TEMPLATE: &str = "post";
/// Template for the index page
pub const INDEX_TEMPLATE: &str = "index";

/// Template renderer over a fixed set of named templates
pub struct TemplateRenderer {
    tera: Tera,
    /// Templates that failed to load, with the reason
    broken: HashMap<String, String>,
}

impl TemplateRenderer {
    /// Load `post.html` and `index.html` from `templates_dir`
    pub fn load(templates_dir: &Path) -> Self {
        let mut renderer = Self::empty();

        for name in [POST_TEMPLATE, INDEX_TEMPLATE] {
            let path = templates_dir.join(format!("{}.html", name));
            if let Err(e) = renderer.tera.add_template_file(&path, Some(name)) {
                renderer.mark_broken(name, &e);
            } else {
                tracing::debug!("Loaded template '{}' from {:?}", name, path);
            }
        }

        renderer
    }

    /// Build a renderer from in-memory template sources
    pub fn from_sources(sources: &[(&str, &str)]) -> Self {
        let mut renderer = Self::empty();
        for (name, source) in sources {
            if let Err(e) = renderer.tera.add_raw_template(name, source) {
                renderer.mark_broken(name, &e);
            }
        }
        renderer
    }

    fn empty() -> Self {
        let mut tera = Tera::default();
        // Post bodies are already HTML
        tera.autoescape_on(vec![]);
        Self {
            tera,
            broken: HashMap::new(),
        }
    }

    fn mark_broken(&mut self, name: &str, err: &tera::Error) {
        let message = error_chain(err);
        tracing::warn!("Template '{}' unavailable: {}", name, message);
        self.broken.insert(name.to_string(), message);
    }

    /// Whether a template loaded successfully
    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Render a template with given context
    pub fn render(&self, name: &str, context: &Context) -> Result<String> {
        if let Some(message) = self.broken.get(name) {
            return Err(Error::Template {
                name: name.to_string(),
                message: message.clone(),
            });
        }
        if !self.has_template(name) {
            return Err(Error::Template {
                name: name.to_string(),
                message: "template not found".to_string(),
            });
        }

        self.tera.render(name, context).map_err(|e| Error::Template {
            name: name.to_string(),
            message: error_chain(&e),
        })
    }
}

/// Tera nests the useful message in the source chain
fn error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Site-wide values available to every template as `site`
#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
}

/// Context for a post page: `site` and `post`
pub fn post_context(site: &SiteData, post: &Post) -> Context {
    let mut context = Context::new();
    context.insert("site", site);
    context.insert("post", post);
    context
}

/// Context for the index page: `site` and `posts`, newest first
pub fn index_context(site: &SiteData, posts: &[Post]) -> Context {
    let mut context = Context::new();
    context.insert("site", site);
    context.insert("posts", posts);
    context
}
