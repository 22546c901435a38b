/// Bold and italic delimiters.
///
/// `ITALIC` is a substring of `BOLD`, so bold has to be split first.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD: &'static str = "**";
    pub const ITALIC: &'static str = "*";
}
