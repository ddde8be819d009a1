use divcheck_lexer::{Token, TokenKind};
use serde::Serialize;

/// One reportable event from the balance scan, in document order.
///
/// Self-closing tags produce no event: they never touch the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    /// An opening tag was pushed.
    Open { line: usize },
    /// A closing tag matched the open that was on top of the stack.
    Close { line: usize, opened_line: usize },
    /// A closing tag arrived with no unmatched open before it.
    ExtraClose { line: usize },
}

impl Event {
    /// The line of the tag the event itself sits on. Range filtering
    /// keys off this, never off the matched partner's line.
    pub fn line(&self) -> usize {
        match *self {
            Event::Open { line }
            | Event::Close { line, .. }
            | Event::ExtraClose { line } => line,
        }
    }
}

/// The outcome of one balance scan over a token stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceReport {
    /// All events in document order.
    pub events: Vec<Event>,
    /// Lines of opens never closed, in the order they were opened.
    pub unclosed: Vec<usize>,
    /// Lines of closes that never had an open, in document order.
    pub extra_closes: Vec<usize>,
}

impl BalanceReport {
    /// Consume the token stream once, left to right.
    ///
    /// Invariant: during the scan the stack holds exactly the lines of
    /// opens not yet matched by a later close, most recent on top.
    pub fn scan(tokens: &[Token]) -> Self {
        let mut stack: Vec<usize> = Vec::new();
        let mut events = Vec::new();
        let mut extra_closes = Vec::new();

        for token in tokens {
            let line = token.span.line;
            match token.kind {
                TokenKind::Open => {
                    stack.push(line);
                    events.push(Event::Open { line });
                }
                TokenKind::SelfClose => {}
                TokenKind::Close => match stack.pop() {
                    Some(opened_line) => {
                        events.push(Event::Close { line, opened_line });
                    }
                    None => {
                        events.push(Event::ExtraClose { line });
                        extra_closes.push(line);
                    }
                },
            }
        }

        Self {
            events,
            unclosed: stack,
            extra_closes,
        }
    }

    /// True iff every open was closed and every close had an open.
    pub fn balanced(&self) -> bool {
        self.unclosed.is_empty() && self.extra_closes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan(source: &str) -> BalanceReport {
        BalanceReport::scan(&divcheck_lexer::Scanner::tokenize(source))
    }

    // =========================================================================
    // Balanced input
    // =========================================================================

    #[test]
    fn test_empty_source_is_balanced() {
        let report = scan("");
        assert!(report.balanced());
        assert_eq!(report.events, Vec::<Event>::new());
    }

    #[test]
    fn test_simple_pair_is_balanced() {
        let report = scan("<div></div>");
        assert!(report.balanced());
        assert_eq!(report.unclosed, Vec::<usize>::new());
        assert_eq!(
            report.events,
            vec![
                Event::Open { line: 1 },
                Event::Close {
                    line: 1,
                    opened_line: 1
                },
            ]
        );
    }

    #[test]
    fn test_nested_pairs_match_inside_out() {
        let report = scan("<div>\n<div>\n</div>\n</div>");
        assert!(report.balanced());
        assert_eq!(
            report.events,
            vec![
                Event::Open { line: 1 },
                Event::Open { line: 2 },
                Event::Close {
                    line: 3,
                    opened_line: 2
                },
                Event::Close {
                    line: 4,
                    opened_line: 1
                },
            ]
        );
    }

    #[test]
    fn test_siblings_match_in_order() {
        let report = scan("<div></div>\n<div></div>");
        assert!(report.balanced());
        assert_eq!(
            report.events[1],
            Event::Close {
                line: 1,
                opened_line: 1
            }
        );
        assert_eq!(
            report.events[3],
            Event::Close {
                line: 2,
                opened_line: 2
            }
        );
    }

    // =========================================================================
    // Unclosed opens
    // =========================================================================

    #[test]
    fn test_outer_open_left_unclosed() {
        // The inner pair matches; the outer open on line 1 never closes.
        let report = scan("<div><div></div>");
        assert!(!report.balanced());
        assert_eq!(report.unclosed, vec![1]);
        assert_eq!(report.extra_closes, Vec::<usize>::new());
    }

    #[test]
    fn test_unclosed_lines_in_opening_order() {
        let report = scan("<div>\n<div>\n<div></div>");
        assert_eq!(report.unclosed, vec![1, 2]);
    }

    #[test]
    fn test_lone_open() {
        let report = scan("<div>");
        assert_eq!(report.unclosed, vec![1]);
    }

    // =========================================================================
    // Extra closes
    // =========================================================================

    #[test]
    fn test_lone_close_is_extra() {
        let report = scan("</div>");
        assert!(!report.balanced());
        assert_eq!(report.extra_closes, vec![1]);
        assert_eq!(report.unclosed, Vec::<usize>::new());
        assert_eq!(report.events, vec![Event::ExtraClose { line: 1 }]);
    }

    #[test]
    fn test_close_after_matched_pair_is_extra() {
        let report = scan("<div></div>\n</div>");
        assert_eq!(report.extra_closes, vec![2]);
        assert_eq!(report.unclosed, Vec::<usize>::new());
    }

    #[test]
    fn test_extra_close_then_unclosed_open() {
        let report = scan("</div>\n<div>");
        assert_eq!(report.extra_closes, vec![1]);
        assert_eq!(report.unclosed, vec![2]);
    }

    // =========================================================================
    // Self-closing tags
    // =========================================================================

    #[test]
    fn test_self_close_never_enters_stack() {
        let report = scan("<div/>\n<div class=\"x\" />");
        assert!(report.balanced());
        assert_eq!(report.events, Vec::<Event>::new());
    }

    #[test]
    fn test_self_close_between_pair() {
        let report = scan("<div>\n<div/>\n</div>");
        assert!(report.balanced());
        assert_eq!(
            report.events,
            vec![
                Event::Open { line: 1 },
                Event::Close {
                    line: 3,
                    opened_line: 1
                },
            ]
        );
    }

    #[test]
    fn test_close_does_not_match_self_close() {
        // The close on line 2 has nothing to pop: the self-close on
        // line 1 was never pushed.
        let report = scan("<div/>\n</div>");
        assert_eq!(report.extra_closes, vec![2]);
    }

    // =========================================================================
    // Idempotence
    // =========================================================================

    #[test]
    fn test_scan_twice_identical() {
        let tokens = divcheck_lexer::Scanner::tokenize("<div>\n</div>\n</div>\n<div>");
        assert_eq!(BalanceReport::scan(&tokens), BalanceReport::scan(&tokens));
    }
}
