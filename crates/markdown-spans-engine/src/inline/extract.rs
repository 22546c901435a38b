use super::kinds::{Image, Link};

/// Extracts `(alt, url)` pairs for every `![alt](url)` in `text`, in order
/// of appearance.
///
/// Unterminated markup does not match and is simply not reported.
pub fn extract_markdown_images(text: &str) -> Vec<(&str, &str)> {
    Image::find_all(text)
        .into_iter()
        .map(|r| (r.text, r.url))
        .collect()
}

/// Extracts `(anchor, url)` pairs for every `[anchor](url)` in `text`, in
/// order of appearance. Image markup is never reported as a link.
pub fn extract_markdown_links(text: &str) -> Vec<(&str, &str)> {
    Link::find_all(text)
        .into_iter()
        .map(|r| (r.text, r.url))
        .collect()
}
