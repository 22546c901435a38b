pub mod inline;

// Re-export key types for easier usage
pub use inline::{
    DelimitedKind, DelimiterRule, InlineError, InlineRules, SpanKind, TextSpan,
    extract_markdown_images, extract_markdown_links, split_nodes_delimiter, split_nodes_image,
    split_nodes_link, text_to_text_nodes, text_to_text_nodes_with,
};
