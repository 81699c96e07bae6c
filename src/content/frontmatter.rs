//! Front-matter parsing
//!
//! A post may open with a block fenced by `---` lines. Inside it only
//! `title:` is recognised; every other line is ignored:
//!
//! ```text
//! ---
//! title: Hello World
//! author: ignored
//! ---
//!
//! Body starts here.
//! ```

use crate::error::{Error, Result};

const FENCE: &str = "---";
const TITLE_KEY: &str = "title:";
const BOM: char = '\u{FEFF}';

/// Front-matter data from a post
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: Option<String>,
}

impl FrontMatter {
    /// Parse front-matter from the start of `content`.
    ///
    /// Returns the metadata and the byte offset where the body begins. The
    /// offset points just past the closing fence line, and past one blank
    /// line following it if there is one. Content that does not open with a
    /// fence has no front matter and a body offset of 0.
    pub fn parse(content: &str) -> Result<(Self, usize)> {
        // A leading byte-order mark is not part of the first line
        let bom_len = if content.starts_with(BOM) { BOM.len_utf8() } else { 0 };
        let mut lines = content[bom_len..].split_inclusive('\n');

        let Some(first) = lines.next() else {
            return Ok((FrontMatter::default(), 0));
        };
        if !is_fence(first) {
            return Ok((FrontMatter::default(), 0));
        }

        let mut cursor = bom_len + first.len();
        let mut front_matter = FrontMatter::default();

        for line in lines {
            cursor += line.len();

            if is_fence(line) {
                if let Some(next) = content[cursor..].split_inclusive('\n').next() {
                    if next.trim().is_empty() {
                        cursor += next.len();
                    }
                }
                return Ok((front_matter, cursor));
            }

            if let Some(value) = line.strip_prefix(TITLE_KEY) {
                let value = value.trim();
                front_matter.title = (!value.is_empty()).then(|| value.to_string());
            }
        }

        Err(Error::UnclosedFrontMatter)
    }

    /// Like [`FrontMatter::parse`], but hands back the body slice itself
    pub fn split(content: &str) -> Result<(Self, &str)> {
        let (front_matter, offset) = Self::parse(content)?;
        Ok((front_matter, &content[offset..]))
    }
}

fn is_fence(line: &str) -> bool {
    line.trim_end_matches(['\n', '\r']) == FENCE
}
