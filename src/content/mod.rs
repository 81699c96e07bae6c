//! Content module - handles posts and content processing

mod filename;
mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use filename::PostFilename;
pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use post::{sort_posts, Post};
