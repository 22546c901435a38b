use log::{trace, warn};

use super::{
    InlineError,
    kinds::{Image, Link, MarkupRef},
    types::{DelimitedKind, SpanKind, TextSpan},
};

/// Splits every plain-text span on paired occurrences of `delimiter`.
///
/// Text outside a pair stays plain, text inside a pair becomes `kind`.
/// Whitespace is kept as is and empty segments are dropped, so an empty
/// plain-text span disappears. Spans of other kinds, and spans without
/// text, are passed through in place.
///
/// # Errors
/// - [`InlineError::EmptyDelimiter`] if `delimiter` is empty.
/// - [`InlineError::UnbalancedDelimiter`] if any plain-text span holds an odd
///   number of delimiters. The whole call fails, not just that span.
pub fn split_nodes_delimiter(
    nodes: Vec<TextSpan>,
    delimiter: &str,
    kind: DelimitedKind,
) -> Result<Vec<TextSpan>, InlineError> {
    if delimiter.is_empty() {
        return Err(InlineError::EmptyDelimiter);
    }

    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        let text = match node {
            TextSpan {
                text: Some(text),
                kind: SpanKind::PlainText,
            } => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let parts: Vec<&str> = text.split(delimiter).collect();
        let count = parts.len() - 1;
        if count % 2 != 0 {
            warn!("unclosed `{delimiter}` in {text:?}");
            return Err(InlineError::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
                count,
                text,
            });
        }

        trace!("`{delimiter}` split {text:?} into {} parts", parts.len());
        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            // Even parts sit outside a delimiter pair
            if i % 2 == 0 {
                out.push(TextSpan::plain(part));
            } else {
                out.push(TextSpan::delimited(part, kind));
            }
        }
    }

    Ok(out)
}

/// Expands `![alt](url)` markup in plain-text spans into image spans.
///
/// Text around each image stays plain. A segment that is empty or only
/// whitespace is dropped; any other segment is kept verbatim. Spans that
/// are not plain text, or have no or empty text, are passed through in
/// place. Unterminated markup is left in the text.
pub fn split_nodes_image(nodes: Vec<TextSpan>) -> Vec<TextSpan> {
    split_nodes_markup(nodes, Image::find_all, |alt, url| TextSpan::image(alt, url))
}

/// Expands `[anchor](url)` markup in plain-text spans into link spans.
///
/// Same rules as [`split_nodes_image`]. Image markup is never consumed.
pub fn split_nodes_link(nodes: Vec<TextSpan>) -> Vec<TextSpan> {
    split_nodes_markup(nodes, Link::find_all, |anchor, url| {
        TextSpan::link(anchor, url)
    })
}

fn split_nodes_markup(
    nodes: Vec<TextSpan>,
    find: fn(&str) -> Vec<MarkupRef<'_>>,
    make: fn(&str, &str) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            TextSpan {
                text: Some(text),
                kind: SpanKind::PlainText,
            } if !text.is_empty() => match expand_markup(&text, find, make) {
                Some(spans) => out.extend(spans),
                None => out.push(TextSpan::plain(text)),
            },
            other => {
                trace!("passing through {other:?}");
                out.push(other);
            }
        }
    }
    out
}

/// Returns `None` when `text` holds no markup at all.
fn expand_markup(
    text: &str,
    find: fn(&str) -> Vec<MarkupRef<'_>>,
    make: fn(&str, &str) -> TextSpan,
) -> Option<Vec<TextSpan>> {
    let found = find(text);
    if found.is_empty() {
        return None;
    }
    trace!("expanding {} references in {text:?}", found.len());

    let mut spans = Vec::with_capacity(found.len() * 2 + 1);
    let mut last = 0;
    for markup in &found {
        push_segment(&mut spans, &text[last..markup.range.start]);
        spans.push(make(markup.text, markup.url));
        last = markup.range.end;
    }
    push_segment(&mut spans, &text[last..]);

    Some(spans)
}

fn push_segment(spans: &mut Vec<TextSpan>, segment: &str) {
    if !segment.trim().is_empty() {
        spans.push(TextSpan::plain(segment));
    }
}
