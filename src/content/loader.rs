//! Content loader - discovers and loads posts from the posts directory

use std::borrow::Cow;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{sort_posts, FrontMatter, MarkdownRenderer, Post, PostFilename};
use crate::diagnostics::Diagnostics;
use crate::error::{Error, Result};
use crate::helpers::format_date;
use crate::Vomit;

/// Extensions accepted as post sources
const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];

/// Loads content from the posts directory
pub struct ContentLoader<'a> {
    vomit: &'a Vomit,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(vomit: &'a Vomit) -> Self {
        Self {
            vomit,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load all posts, newest first
    pub fn load_posts(&self, diagnostics: &mut Diagnostics) -> Result<Vec<Post>> {
        let mut posts = self.discover_posts(diagnostics)?;
        sort_posts(&mut posts);
        Ok(posts)
    }

    /// Walk the posts directory and load every Markdown file, in discovery
    /// order. Files that fail to load are recorded and left out; only a
    /// missing or unreadable posts directory fails the whole call.
    pub fn discover_posts(&self, diagnostics: &mut Diagnostics) -> Result<Vec<Post>> {
        let posts_dir = &self.vomit.posts_dir;
        if !posts_dir.is_dir() {
            return Err(Error::DirectoryNotFound {
                path: posts_dir.clone(),
            });
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(posts_dir)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(Error::DirectoryNotFound {
                        path: posts_dir.clone(),
                    })
                }
                Err(e) => {
                    let path = e.path().unwrap_or(posts_dir.as_path()).to_path_buf();
                    let source = e
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("filesystem loop"));
                    diagnostics.failed(&path, Error::io(path.clone(), source));
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            let path = entry.path();
            if !is_markdown_file(path) {
                let reason = Error::UnsupportedFileType {
                    path: path.to_path_buf(),
                };
                diagnostics.skipped(path, reason.to_string());
                continue;
            }

            match self.load_post(path, diagnostics) {
                Ok(post) => {
                    tracing::debug!("Loaded post {:?} ({})", path, post.output_name());
                    posts.push(post);
                }
                Err(e) => diagnostics.failed(path, e),
            }
        }

        tracing::info!("Discovered {} posts in {:?}", posts.len(), posts_dir);
        Ok(posts)
    }

    /// Load a single post from a file
    pub fn load_post(&self, path: &Path, diagnostics: &mut Diagnostics) -> Result<Post> {
        let name = PostFilename::parse(path)?;
        let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
        let content = String::from_utf8_lossy(&bytes);
        if matches!(content, Cow::Owned(_)) {
            diagnostics.warning(path, "not valid UTF-8; invalid bytes were replaced");
        }

        let (front_matter, body) = match FrontMatter::split(&content) {
            Ok(parsed) => parsed,
            Err(e) => {
                diagnostics.warning(path, format!("{}; treating the whole file as body", e));
                (FrontMatter::default(), &*content)
            }
        };

        let title = front_matter
            .title
            .unwrap_or_else(|| name.fallback_title());
        let formatted_date = format_date(&name.date, &self.vomit.config.date_format);
        let body_html = self.renderer.render(body);

        Ok(Post::new(
            name.output_name(),
            title,
            name.date,
            formatted_date,
            body_html,
        ))
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| MARKDOWN_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn site() -> (TempDir, Vomit) {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("posts")).unwrap();
        let vomit = Vomit::new(dir.path()).unwrap();
        (dir, vomit)
    }

    fn write_post(vomit: &Vomit, name: &str, content: &str) -> std::path::PathBuf {
        let path = vomit.posts_dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_post_with_front_matter() {
        let (_dir, vomit) = site();
        let path = write_post(
            &vomit,
            "2023-06-01-hello-world.md",
            "---\ntitle: Hello World\n---\n\nFirst *post*.\n",
        );

        let mut diagnostics = Diagnostics::new();
        let post = ContentLoader::new(&vomit)
            .load_post(&path, &mut diagnostics)
            .unwrap();

        assert_eq!(post.title(), "Hello World");
        assert_eq!(post.output_name(), "2023-06-01-hello-world.html");
        assert_eq!(post.date(), NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
        assert_eq!(post.formatted_date(), "June 1, 2023");
        assert!(post.body_html().contains("<em>post</em>"));
        assert!(!post.body_html().contains("title:"));
        assert!(diagnostics.entries().is_empty());
    }

    #[test]
    fn test_load_post_without_front_matter_uses_filename() {
        let (_dir, vomit) = site();
        let path = write_post(&vomit, "2023-05-15-second-post.md", "Just text.\n");

        let post = ContentLoader::new(&vomit)
            .load_post(&path, &mut Diagnostics::new())
            .unwrap();
        assert_eq!(post.title(), "Second Post");
        assert!(post.body_html().contains("<p>Just text.</p>"));
    }

    #[test]
    fn test_unclosed_front_matter_becomes_body() {
        let (_dir, vomit) = site();
        let path = write_post(
            &vomit,
            "2023-01-01-never-closed.md",
            "---\ntitle: Open\n\nBody\n",
        );

        let mut diagnostics = Diagnostics::new();
        let post = ContentLoader::new(&vomit)
            .load_post(&path, &mut diagnostics)
            .unwrap();

        assert_eq!(post.title(), "Never Closed");
        assert!(post.body_html().contains("title: Open"));
        assert!(post.body_html().contains("Body"));
        assert_eq!(diagnostics.count(Severity::Warning), 1);
    }

    #[test]
    fn test_latin1_post_is_kept() {
        let (_dir, vomit) = site();
        let path = vomit.posts_dir.join("2023-06-01-cafe.md");
        fs::write(&path, b"Caf\xe9 au lait\n").unwrap();

        let mut diagnostics = Diagnostics::new();
        let posts = ContentLoader::new(&vomit)
            .discover_posts(&mut diagnostics)
            .unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title(), "Cafe");
        assert!(posts[0].body_html().contains("Caf\u{FFFD} au lait"));
        assert!(!diagnostics.has_failures());
        assert_eq!(diagnostics.count(Severity::Warning), 1);
    }

    #[test]
    fn test_malformed_filename() {
        let (_dir, vomit) = site();
        let path = write_post(&vomit, "not-a-date.md", "text");

        let err = ContentLoader::new(&vomit)
            .load_post(&path, &mut Diagnostics::new())
            .unwrap_err();
        assert!(matches!(err, Error::MalformedFilename { .. }));
    }

    #[test]
    fn test_discover_walks_recursively_and_skips() {
        let (_dir, vomit) = site();
        write_post(&vomit, "2023-06-01-hello-world.md", "---\ntitle: Hello World\n---\nhi");
        write_post(&vomit, "2022/2022-03-04-nested.markdown", "nested");
        write_post(&vomit, "notes.txt", "not markdown");
        write_post(&vomit, "not-a-date.md", "bad name");

        let mut diagnostics = Diagnostics::new();
        let posts = ContentLoader::new(&vomit)
            .discover_posts(&mut diagnostics)
            .unwrap();

        let mut names: Vec<_> = posts.iter().map(|p| p.output_name()).collect();
        names.sort();
        assert_eq!(
            names,
            vec!["2022-03-04-nested.html", "2023-06-01-hello-world.html"]
        );
        assert_eq!(diagnostics.count(Severity::Skipped), 1);
        assert_eq!(diagnostics.count(Severity::Failed), 1);
        assert!(matches!(
            diagnostics.errors().next(),
            Some(Error::MalformedFilename { .. })
        ));
    }

    #[test]
    fn test_load_posts_sorted() {
        let (_dir, vomit) = site();
        write_post(&vomit, "2020-01-01-a.md", "a");
        write_post(&vomit, "2023-01-01-c.md", "c");
        write_post(&vomit, "2021-01-01-b.md", "b");

        let posts = ContentLoader::new(&vomit)
            .load_posts(&mut Diagnostics::new())
            .unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title()).collect();
        assert_eq!(titles, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_missing_posts_dir() {
        let dir = tempfile::tempdir().unwrap();
        let vomit = Vomit::new(dir.path()).unwrap();

        let err = ContentLoader::new(&vomit)
            .discover_posts(&mut Diagnostics::new())
            .unwrap_err();
        assert!(matches!(err, Error::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_empty_posts_dir() {
        let (_dir, vomit) = site();
        let posts = ContentLoader::new(&vomit)
            .discover_posts(&mut Diagnostics::new())
            .unwrap();
        assert!(posts.is_empty());
    }
}
