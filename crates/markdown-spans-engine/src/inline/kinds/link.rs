use std::sync::OnceLock;

use regex::Regex;

use super::MarkupRef;

/// Link reference `[anchor](url)`.
///
/// The same markup directly after a `!` is an image, not a link.
pub struct Link;

impl Link {
    /// Marks the following bracket as an image instead.
    pub const IMAGE_BANG: u8 = b'!';

    fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX
            .get_or_init(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").expect("Invalid link regex"))
    }

    /// All link references in `text`, left to right, non-overlapping.
    ///
    /// `regex` has no look-behind, so a match preceded by `!` is dropped and
    /// the search resumes one byte later.
    pub fn find_all(text: &str) -> Vec<MarkupRef<'_>> {
        let mut found = Vec::new();
        let mut pos = 0;

        while pos <= text.len() {
            let Some(caps) = Self::regex().captures_at(text, pos) else {
                break;
            };
            let Some(found_ref) = MarkupRef::from_captures(&caps) else {
                break;
            };
            let start = found_ref.range.start;
            if start > 0 && text.as_bytes()[start - 1] == Self::IMAGE_BANG {
                // `[` is one byte, so start + 1 is a char boundary
                pos = start + 1;
                continue;
            }
            pos = found_ref.range.end;
            found.push(found_ref);
        }

        found
    }
}
