use log::debug;

use super::{
    InlineError,
    rules::InlineRules,
    split::{split_nodes_delimiter, split_nodes_image, split_nodes_link},
    types::TextSpan,
};

/// Parses one inline markdown string into an ordered list of spans using
/// the default rules: code, bold, italic, then images, then links.
///
/// # Errors
/// [`InlineError::UnbalancedDelimiter`] when a backtick, `**` or `*` is left
/// unclosed.
pub fn text_to_text_nodes(text: &str) -> Result<Vec<TextSpan>, InlineError> {
    text_to_text_nodes_with(text, &InlineRules::default())
}

/// Parses `text` with a custom delimiter rule set.
///
/// Delimiter rules run in the order given, then images are split out, then
/// links. The rules are not validated here; see [`InlineRules::validate`].
pub fn text_to_text_nodes_with(
    text: &str,
    rules: &InlineRules,
) -> Result<Vec<TextSpan>, InlineError> {
    let mut nodes = vec![TextSpan::plain(text)];

    for rule in &rules.delimiters {
        nodes = split_nodes_delimiter(nodes, &rule.delimiter, rule.kind)?;
        debug!("after `{}`: {} spans", rule.delimiter, nodes.len());
    }

    let nodes = split_nodes_image(nodes);
    let nodes = split_nodes_link(nodes);
    debug!("parsed {} spans from {} bytes", nodes.len(), text.len());

    Ok(nodes)
}
