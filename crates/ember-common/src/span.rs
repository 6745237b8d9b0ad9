use serde::Serialize;

/// A single byte offset into source text.
///
/// Expression nodes record the locations of the tokens they were built from
/// (a literal, an opening parenthesis, a `:` or `::`). Composite expressions
/// derive their start location from their first child instead of storing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct SourceLoc(pub u32);

/// Byte-offset span into source text. Start is inclusive, end is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start ({start}) must be <= end ({end})");
        Self { start, end }
    }
}

impl From<SourceLoc> for Span {
    /// An empty span sitting at `loc`.
    fn from(loc: SourceLoc) -> Self {
        Span::new(loc.0, loc.0)
    }
}
