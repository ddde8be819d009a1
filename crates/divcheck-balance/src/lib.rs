//! divcheck Balance Scanner
//!
//! Consumes the div token stream and tracks nesting with a stack of
//! open-tag line numbers, producing a [`BalanceReport`]: the matched
//! open/close events in document order, the extra closes (closing tags
//! with no open before them), and the unclosed opens left on the stack.
//!
//! The scan always covers the whole buffer; range restriction is a pure
//! post-filter applied by the renderers in [`report`], since matching
//! requires full-document context.

pub mod balance;
pub mod report;

pub use balance::{BalanceReport, Event};

use std::path::Path;

/// Fatal input error. Structural imbalance is never an error, only a
/// report outcome.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Read a file, tokenize it, and scan it for balance.
pub fn check_file(path: &Path) -> Result<BalanceReport, CheckError> {
    let source = std::fs::read_to_string(path).map_err(|source| CheckError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(check_source(&source))
}

/// Tokenize a source buffer and scan it for balance.
pub fn check_source(source: &str) -> BalanceReport {
    let tokens = divcheck_lexer::Scanner::tokenize(source);
    BalanceReport::scan(&tokens)
}
