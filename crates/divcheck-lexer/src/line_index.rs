/// Precomputed map from character offsets to 1-based line numbers.
///
/// Stores the offset of every line start (offset 0, plus the offset
/// immediately after each `\n`), so `line_of` is a binary search rather
/// than a rescan. Built once per source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Build the index for the given source.
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, ch) in source.chars().enumerate() {
            if ch == '\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// The 1-based line containing `offset`.
    ///
    /// Offsets past the end of the buffer map to the last line.
    pub fn line_of(&self, offset: usize) -> usize {
        // Count of line starts at or before the offset; line_starts[0] == 0,
        // so the result is always >= 1.
        self.line_starts.partition_point(|&start| start <= offset)
    }
}
