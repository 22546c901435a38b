/// Errors raised while turning inline markdown into spans.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InlineError {
    #[error("Unbalanced delimiter `{delimiter}`: found {count} occurrences in {text:?}")]
    UnbalancedDelimiter {
        delimiter: String,
        count: usize,
        text: String,
    },
    #[error("Span has no text to extract from")]
    MissingText,
    #[error("Delimiter must not be empty")]
    EmptyDelimiter,
    #[error("Delimiter `{earlier}` is applied before `{later}` and would consume it")]
    ShadowedDelimiter { earlier: String, later: String },
}
