/// A position in source text, tracking the line for reporting.
///
/// `start` and `end` are character offsets into the source; `line` is the
/// 1-based line containing `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize) -> Self {
        Self { start, end, line }
    }
}

/// Token classification for div tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `<div ...>` — opens a nesting level.
    Open,
    /// `</div>` — closes the most recent open.
    Close,
    /// `<div ... />` — complete on its own, no nesting effect.
    SelfClose,
}

/// A token produced by the div scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}
