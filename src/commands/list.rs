//! List the posts that would be generated

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::content::Post;
use crate::diagnostics::Diagnostics;
use crate::Vomit;

/// Print every post, newest first
pub fn run(vomit: &Vomit) -> Result<()> {
    let mut diagnostics = Diagnostics::new();
    let posts = ContentLoader::new(vomit).load_posts(&mut diagnostics)?;

    println!("Posts ({}):", posts.len());
    for line in listing(&posts) {
        println!("  {}", line);
    }

    if diagnostics.has_failures() {
        println!("({})", diagnostics.summary());
    }

    Ok(())
}

/// One `date - title [output]` line per post
pub fn listing(posts: &[Post]) -> Vec<String> {
    posts
        .iter()
        .map(|post| {
            format!(
                "{} - {} [{}]",
                post.date().format("%Y-%m-%d"),
                post.title(),
                post.output_name()
            )
        })
        .collect()
}
