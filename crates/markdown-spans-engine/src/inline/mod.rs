//! # Inline Parsing
//!
//! Turns one raw inline markdown string into an ordered sequence of
//! [`TextSpan`]s (plain text, bold, italic, code, image, link).
//!
//! ## Architecture
//!
//! Inline parsing is a pipeline of pure list transformations. Each stage
//! takes the spans produced so far and expands the plain-text ones:
//!
//! 1. Delimiter pairs, in rule order (`` ` `` code, `**` bold, `*` italic)
//! 2. Images `![alt](url)`
//! 3. Links `[anchor](url)`
//!
//! Only plain-text spans with text are ever split. Every other span keeps
//! its position in the sequence untouched.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan`, `SpanKind`, `DelimitedKind`
//! - **`kinds`**: Span kinds with owned markup (`CodeSpan`, `Emphasis`, `Image`, `Link`)
//! - **`extract`**: Regex extraction of image and link references
//! - **`split`**: The three `split_nodes_*` stages
//! - **`rules`**: `InlineRules`, the ordered delimiter rule set
//! - **`parser`**: `text_to_text_nodes()` main entry point
//!
//! ## Precedence
//!
//! Code runs before bold and italic, so `` `**not bold**` `` stays a single
//! Code span. Bold runs before italic, so the two stars of `**` are gone
//! before the single-star italic delimiter is scanned.

pub mod error;
pub mod extract;
pub mod kinds;
pub mod parser;
pub mod rules;
pub mod split;
pub mod types;

pub use error::InlineError;
pub use extract::{extract_markdown_images, extract_markdown_links};
pub use parser::{text_to_text_nodes, text_to_text_nodes_with};
pub use rules::{DelimiterRule, InlineRules};
pub use split::{split_nodes_delimiter, split_nodes_image, split_nodes_link};
pub use types::{DelimitedKind, SpanKind, TextSpan};
