//! Post model

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// A blog post
///
/// Built once by the loader and only read afterwards; fields are private so
/// derived values (`output_name`, `formatted_date`) can't drift from their
/// sources.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    /// Output file name, `<stem>.html`
    output_name: String,

    title: String,

    /// Publication date, from the file name
    #[serde(serialize_with = "serialize_ymd")]
    date: NaiveDate,

    /// Long-form date, e.g. "January 2, 2006"
    formatted_date: String,

    /// Rendered HTML content
    body_html: String,
}

impl Post {
    pub(crate) fn new(
        output_name: String,
        title: String,
        date: NaiveDate,
        formatted_date: String,
        body_html: String,
    ) -> Self {
        Self {
            output_name,
            title,
            date,
            formatted_date,
            body_html,
        }
    }

    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn formatted_date(&self) -> &str {
        &self.formatted_date
    }

    pub fn body_html(&self) -> &str {
        &self.body_html
    }
}

fn serialize_ymd<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format("%Y-%m-%d"))
}

/// Order posts newest first. The sort is stable, so posts sharing a date
/// keep their discovery order.
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(name: &str, y: i32, m: u32, d: u32) -> Post {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        Post::new(
            format!("{name}.html"),
            name.to_string(),
            date,
            date.format("%B %-d, %Y").to_string(),
            String::new(),
        )
    }

    fn names(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.title()).collect()
    }

    #[test]
    fn test_sort_newest_first() {
        let mut posts = vec![
            post("old", 2020, 1, 1),
            post("new", 2023, 6, 1),
            post("mid", 2021, 3, 9),
        ];
        sort_posts(&mut posts);
        assert_eq!(names(&posts), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut posts = vec![
            post("first", 2023, 1, 1),
            post("newer", 2023, 2, 1),
            post("second", 2023, 1, 1),
            post("third", 2023, 1, 1),
        ];
        sort_posts(&mut posts);
        assert_eq!(names(&posts), vec!["newer", "first", "second", "third"]);
    }

    #[test]
    fn test_sort_empty() {
        let mut posts: Vec<Post> = Vec::new();
        sort_posts(&mut posts);
        assert!(posts.is_empty());
    }

    #[test]
    fn test_serialized_date_is_ymd() {
        let value = tera::Context::from_serialize(post("x", 2006, 1, 2)).unwrap();
        let json = value.into_json();
        assert_eq!(json["date"], "2006-01-02");
        assert_eq!(json["formatted_date"], "January 2, 2006");
        assert_eq!(json["output_name"], "x.html");
    }
}
