use serde::{Deserialize, Serialize};

use super::{
    InlineError,
    kinds::{CodeSpan, Emphasis},
    types::DelimitedKind,
};

/// A delimiter and the kind of span its pairs produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimiterRule {
    pub delimiter: String,
    pub kind: DelimitedKind,
}

impl DelimiterRule {
    pub fn new(delimiter: impl Into<String>, kind: DelimitedKind) -> Self {
        Self {
            delimiter: delimiter.into(),
            kind,
        }
    }
}

/// Delimiter rules applied in order before images and links are split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineRules {
    pub delimiters: Vec<DelimiterRule>,
}

impl Default for InlineRules {
    /// Code, then bold, then italic.
    fn default() -> Self {
        Self {
            delimiters: vec![
                DelimiterRule::new(CodeSpan::TICK, DelimitedKind::Code),
                DelimiterRule::new(Emphasis::BOLD, DelimitedKind::Bold),
                DelimiterRule::new(Emphasis::ITALIC, DelimitedKind::Italic),
            ],
        }
    }
}

impl InlineRules {
    /// Checks that every delimiter is non-empty and that no delimiter runs
    /// before a longer one containing it (`*` before `**` would eat the
    /// bold markers).
    pub fn validate(&self) -> Result<(), InlineError> {
        for (i, earlier) in self.delimiters.iter().enumerate() {
            if earlier.delimiter.is_empty() {
                return Err(InlineError::EmptyDelimiter);
            }
            let shadowed = self.delimiters[i + 1..].iter().find(|later| {
                later.delimiter.len() > earlier.delimiter.len()
                    && later.delimiter.contains(earlier.delimiter.as_str())
            });
            if let Some(later) = shadowed {
                return Err(InlineError::ShadowedDelimiter {
                    earlier: earlier.delimiter.clone(),
                    later: later.delimiter.clone(),
                });
            }
        }
        Ok(())
    }
}
