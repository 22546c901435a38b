//! # Inline Kinds
//!
//! Span kinds that own their markup. Delimiter strings and reference
//! patterns live here, not in the splitting code.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = "`"`
//! - **`Emphasis`**: `BOLD = "**"`, `ITALIC = "*"`
//! - **`Image`**: `![alt](url)`
//! - **`Link`**: `[anchor](url)`, never preceded by `!`

pub mod code_span;
pub mod emphasis;
pub mod image;
pub mod link;

use std::ops::Range;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use image::Image;
pub use link::Link;

/// One image or link reference found in a text, borrowing from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupRef<'a> {
    /// Byte range of the whole markup, brackets and parentheses included.
    pub range: Range<usize>,
    /// Alt text for images, anchor text for links.
    pub text: &'a str,
    pub url: &'a str,
}

impl<'a> MarkupRef<'a> {
    fn from_captures(caps: &regex::Captures<'a>) -> Option<Self> {
        let whole = caps.get(0)?;
        Some(Self {
            range: whole.range(),
            text: caps.get(1)?.as_str(),
            url: caps.get(2)?.as_str(),
        })
    }
}
