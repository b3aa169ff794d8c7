//! Splitting documents into lines.

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// True when the text is empty after trimming whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Split `text` on runs of `\n`/`\r`.
///
/// A run of separators counts once, so `\r\n` and `\n\n\r` each end a single
/// line. A leading run produces one empty first segment and a trailing run one
/// empty last segment; interior runs never produce empty segments.
pub fn segments(text: &str) -> Vec<&str> {
    let pieces: Vec<&str> = text.split(is_line_break).collect();
    let last = pieces.len() - 1;

    pieces
        .into_iter()
        .enumerate()
        .filter(|(i, piece)| *i == 0 || *i == last || !piece.is_empty())
        .map(|(_, piece)| piece)
        .collect()
}
