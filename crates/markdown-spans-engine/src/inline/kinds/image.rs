use std::sync::OnceLock;

use regex::Regex;

use super::MarkupRef;

/// Image reference `![alt](url)`.
pub struct Image;

impl Image {
    fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX
            .get_or_init(|| Regex::new(r"!\[([^\]]*)\]\(([^)]*)\)").expect("Invalid image regex"))
    }

    /// All image references in `text`, left to right, non-overlapping.
    pub fn find_all(text: &str) -> Vec<MarkupRef<'_>> {
        Self::regex()
            .captures_iter(text)
            .filter_map(|caps| MarkupRef::from_captures(&caps))
            .collect()
    }
}
