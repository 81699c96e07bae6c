//! Source filename grammar: `YYYY-MM-DD[-slug].ext`

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

use crate::error::{Error, Result};

lazy_static! {
    static ref DATED_STEM: Regex = Regex::new(r"^(\d{4}-\d{2}-\d{2})(?:-(.*))?$").unwrap();
}

/// The parts of a source file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFilename {
    /// File name without its extension, date prefix included
    pub stem: String,
    pub date: NaiveDate,
    /// Everything after `YYYY-MM-DD-`; may be empty
    pub slug: String,
}

impl PostFilename {
    /// Parse the base name of `path`
    pub fn parse(path: &Path) -> Result<Self> {
        let malformed = |reason: &str| Error::MalformedFilename {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        };

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| malformed("file name is not valid UTF-8"))?;

        let caps = DATED_STEM
            .captures(stem)
            .ok_or_else(|| malformed("expected a YYYY-MM-DD prefix"))?;

        let date = NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d")
            .map_err(|e| malformed(&format!("invalid date '{}': {}", &caps[1], e)))?;

        Ok(Self {
            stem: stem.to_string(),
            date,
            slug: caps.get(2).map(|m| m.as_str()).unwrap_or_default().to_string(),
        })
    }

    /// Output file name: the stem with an `.html` extension
    pub fn output_name(&self) -> String {
        format!("{}.html", self.stem)
    }

    /// Human title derived from the slug, e.g. `second-post` -> `Second Post`
    pub fn fallback_title(&self) -> String {
        let title = self
            .slug
            .split(['-', '_'])
            .filter(|word| !word.is_empty())
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ");

        if title.is_empty() {
            self.stem.clone()
        } else {
            title
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dated_name() {
        let name = PostFilename::parse(Path::new("posts/2023-06-01-hello-world.md")).unwrap();
        assert_eq!(name.stem, "2023-06-01-hello-world");
        assert_eq!(name.date, NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
        assert_eq!(name.slug, "hello-world");
        assert_eq!(name.output_name(), "2023-06-01-hello-world.html");
    }

    #[test]
    fn test_markdown_extension() {
        let name = PostFilename::parse(Path::new("2021-12-31-new_year.markdown")).unwrap();
        assert_eq!(name.output_name(), "2021-12-31-new_year.html");
        assert_eq!(name.fallback_title(), "New Year");
    }

    #[test]
    fn test_fallback_title() {
        let name = PostFilename::parse(Path::new("2023-05-15-second-post.md")).unwrap();
        assert_eq!(name.fallback_title(), "Second Post");
    }

    #[test]
    fn test_date_only_name() {
        let name = PostFilename::parse(Path::new("2023-05-15.md")).unwrap();
        assert_eq!(name.slug, "");
        assert_eq!(name.fallback_title(), "2023-05-15");
        assert_eq!(name.output_name(), "2023-05-15.html");
    }

    #[test]
    fn test_missing_date_prefix() {
        let err = PostFilename::parse(Path::new("posts/not-a-date.md")).unwrap_err();
        assert!(matches!(err, Error::MalformedFilename { .. }));
    }

    #[test]
    fn test_short_name() {
        let err = PostFilename::parse(Path::new("2023.md")).unwrap_err();
        assert!(matches!(err, Error::MalformedFilename { .. }));
    }

    #[test]
    fn test_invalid_calendar_date() {
        let err = PostFilename::parse(Path::new("2023-02-30-leap.md")).unwrap_err();
        match err {
            Error::MalformedFilename { reason, .. } => assert!(reason.contains("2023-02-30")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_date_must_be_followed_by_dash() {
        assert!(PostFilename::parse(Path::new("2023-06-01hello.md")).is_err());
    }
}
