// Line scanner for Pascal sources
//
// Splits content into zero-based indexed lines with no lookahead. Both `\n`
// and `\r\n` endings are accepted; the terminator is never part of the line.

/// One line of source with its zero-based index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub index: usize,
    pub text: &'a str,
}

/// Iterate `content` line by line
pub fn scan_lines(content: &str) -> impl Iterator<Item = SourceLine<'_>> {
    content
        .lines()
        .enumerate()
        .map(|(index, text)| SourceLine { index, text })
}
