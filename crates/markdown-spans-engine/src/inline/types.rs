use serde::{Deserialize, Serialize};

use super::{InlineError, extract};

/// The classification of a span.
///
/// Images and links carry their URL inside the variant, so only those two
/// kinds can ever have one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    PlainText,
    Bold,
    Italic,
    Code,
    Image { url: String },
    Link { url: String },
}

/// The kinds a delimiter pair can wrap text in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelimitedKind {
    Bold,
    Italic,
    Code,
}

impl From<DelimitedKind> for SpanKind {
    fn from(kind: DelimitedKind) -> Self {
        match kind {
            DelimitedKind::Bold => SpanKind::Bold,
            DelimitedKind::Italic => SpanKind::Italic,
            DelimitedKind::Code => SpanKind::Code,
        }
    }
}

/// One contiguous unit of classified inline text.
///
/// `text` is `None` for a degenerate span with nothing in it. Such spans are
/// never split, only passed along. For images and links `text` holds the alt
/// or anchor text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextSpan {
    pub text: Option<String>,
    pub kind: SpanKind,
}

impl TextSpan {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: Some(text.into()),
            kind,
        }
    }

    /// A span of the given kind with no text at all.
    pub fn without_text(kind: SpanKind) -> Self {
        Self { text: None, kind }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::PlainText)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Bold)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Italic)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Code)
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(alt, SpanKind::Image { url: url.into() })
    }

    pub fn link(anchor: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(anchor, SpanKind::Link { url: url.into() })
    }

    pub fn delimited(text: impl Into<String>, kind: DelimitedKind) -> Self {
        Self::new(text, kind.into())
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The target URL, present only for images and links.
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            SpanKind::Image { url } | SpanKind::Link { url } => Some(url),
            _ => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.kind, SpanKind::PlainText)
    }

    /// True for plain-text spans with non-empty text, the only spans that
    /// image and link splitting will expand.
    pub fn is_candidate(&self) -> bool {
        self.is_plain() && self.text().is_some_and(|t| !t.is_empty())
    }

    /// Image references in this span's text.
    ///
    /// Fails with [`InlineError::MissingText`] when the span has no text.
    pub fn extract_images(&self) -> Result<Vec<(&str, &str)>, InlineError> {
        self.text()
            .map(extract::extract_markdown_images)
            .ok_or(InlineError::MissingText)
    }

    /// Link references in this span's text, images excluded.
    ///
    /// Fails with [`InlineError::MissingText`] when the span has no text.
    pub fn extract_links(&self) -> Result<Vec<(&str, &str)>, InlineError> {
        self.text()
            .map(extract::extract_markdown_links)
            .ok_or(InlineError::MissingText)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_only_on_images_and_links() {
        assert_eq!(TextSpan::image("alt", "a.png").url(), Some("a.png"));
        assert_eq!(TextSpan::link("home", "/").url(), Some("/"));
        assert_eq!(TextSpan::bold("b").url(), None);
        assert_eq!(TextSpan::plain("p").url(), None);
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(TextSpan::plain("a"), TextSpan::new("a", SpanKind::PlainText));
        assert_ne!(TextSpan::plain("a"), TextSpan::italic("a"));
        assert_ne!(TextSpan::link("a", "x"), TextSpan::link("a", "y"));
        assert_ne!(TextSpan::plain(""), TextSpan::without_text(SpanKind::PlainText));
    }

    #[test]
    fn candidates_are_non_empty_plain_text() {
        assert!(TextSpan::plain("x").is_candidate());
        assert!(!TextSpan::plain("").is_candidate());
        assert!(!TextSpan::without_text(SpanKind::PlainText).is_candidate());
        assert!(!TextSpan::code("x").is_candidate());
    }

    #[test]
    fn delimited_kind_maps_to_span_kind() {
        assert_eq!(
            TextSpan::delimited("c", DelimitedKind::Code),
            TextSpan::code("c")
        );
        assert_eq!(SpanKind::from(DelimitedKind::Bold), SpanKind::Bold);
        assert_eq!(SpanKind::from(DelimitedKind::Italic), SpanKind::Italic);
    }

    #[test]
    fn extracting_from_textless_span_fails() {
        let null = TextSpan::without_text(SpanKind::PlainText);
        assert_eq!(null.extract_images(), Err(InlineError::MissingText));
        assert_eq!(null.extract_links(), Err(InlineError::MissingText));
    }

    #[test]
    fn extracting_from_span_text() {
        let span = TextSpan::plain("see ![cat](cat.png) and [dog](dog.html)");
        assert_eq!(span.extract_images(), Ok(vec![("cat", "cat.png")]));
        assert_eq!(span.extract_links(), Ok(vec![("dog", "dog.html")]));
    }
}
