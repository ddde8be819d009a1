//! divcheck Lexer
//!
//! Tokenizes HTML-like text into a stream of `<div>` tag events:
//! opens, closes, and self-closing tags, in document order.
//! Everything that is not a div tag is skipped; the lexer never fails,
//! since malformed markup is a report outcome for the balance scanner,
//! not a lexing error.
//!
//! # Example
//!
//! ```
//! use divcheck_lexer::{Scanner, TokenKind};
//!
//! let tokens = Scanner::tokenize("<div class=\"a\"></div>");
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].kind, TokenKind::Open);
//! assert_eq!(tokens[1].kind, TokenKind::Close);
//! ```

pub mod line_index;
pub mod scanner;
pub mod token;

pub use line_index::LineIndex;
pub use scanner::Scanner;
pub use token::{Span, Token, TokenKind};
