/// Code span inline type with owned delimiter constant.
///
/// Code is split out first, so markers inside backticks are never read as
/// emphasis.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const TICK: &'static str = "`";
}
