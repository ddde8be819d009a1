use crate::line_index::LineIndex;
use crate::token::{Span, Token, TokenKind};

/// Div tag scanner.
///
/// Walks the source left to right looking for `<` and tries to match a div
/// tag there. Recognition is ASCII case-insensitive and enforces the
/// tag-name boundary: `div` must be followed by whitespace, `>`, or `/`,
/// so `<divider>` never matches. Attribute text is not parsed structurally;
/// the tag runs to the first `>` after the name.
///
/// Scanning is infallible. Text that fails to match (including an
/// unterminated `<div` with no later `>`) produces no token and scanning
/// resumes after the `<`.
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    tokens: Vec<Token>,
    line_index: LineIndex,
}

impl Scanner {
    /// Create a new scanner for the given source.
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            tokens: Vec::new(),
            line_index: LineIndex::new(source),
        }
    }

    /// Tokenize the entire source into a vector of div tag tokens,
    /// in ascending offset order.
    pub fn tokenize(source: &str) -> Vec<Token> {
        let mut scanner = Scanner::new(source);
        scanner.scan_tokens();
        scanner.tokens
    }

    fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            if self.peek() == '<' && self.scan_tag() {
                continue;
            }
            self.advance();
        }
    }

    /// Try to match a div tag at the current `<`. On a match, emits the
    /// token and moves past it; otherwise leaves `pos` untouched.
    fn scan_tag(&mut self) -> bool {
        if self.matches_ci(self.pos + 1, "/div") {
            self.scan_close_tag()
        } else if self.matches_ci(self.pos + 1, "div") && self.at_name_boundary(self.pos + 4) {
            self.scan_open_tag()
        } else {
            false
        }
    }

    /// Close tag: `</div`, optional whitespace, `>`.
    fn scan_close_tag(&mut self) -> bool {
        let mut p = self.pos + 5;
        while p < self.chars.len() && self.chars[p].is_whitespace() {
            p += 1;
        }
        if p < self.chars.len() && self.chars[p] == '>' {
            self.emit(TokenKind::Close, self.pos, p + 1);
            self.pos = p + 1;
            true
        } else {
            false
        }
    }

    /// Open or self-closing tag: `<div` up to the first `>`.
    ///
    /// A `>` inside a quoted attribute value terminates the tag early;
    /// this is a known limitation, kept rather than guessed around.
    /// Self-closing is decided by the tag text's own trailing characters:
    /// the character immediately before the terminating `>` is `/`.
    fn scan_open_tag(&mut self) -> bool {
        let mut p = self.pos + 4;
        while p < self.chars.len() && self.chars[p] != '>' {
            p += 1;
        }
        if p >= self.chars.len() {
            return false;
        }
        let kind = if self.chars[p - 1] == '/' {
            TokenKind::SelfClose
        } else {
            TokenKind::Open
        };
        self.emit(kind, self.pos, p + 1);
        self.pos = p + 1;
        true
    }

    // --- Helpers ---

    /// Case-insensitive match of `pat` (given in lowercase) at `start`.
    fn matches_ci(&self, start: usize, pat: &str) -> bool {
        let mut i = start;
        for expected in pat.chars() {
            if i >= self.chars.len() || self.chars[i].to_ascii_lowercase() != expected {
                return false;
            }
            i += 1;
        }
        true
    }

    /// The tag name ends at `i`: whitespace, `>`, or `/`.
    fn at_name_boundary(&self, i: usize) -> bool {
        i < self.chars.len()
            && (self.chars[i].is_whitespace() || self.chars[i] == '>' || self.chars[i] == '/')
    }

    fn emit(&mut self, kind: TokenKind, start: usize, end: usize) {
        let line = self.line_index.line_of(start);
        self.tokens.push(Token::new(kind, Span::new(start, end, line)));
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.pos]
        }
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}
