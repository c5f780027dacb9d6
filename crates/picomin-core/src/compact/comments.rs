/// Truncate a line at the first `--`.
///
/// Not string-aware: a `--` inside a quoted literal still starts a comment.
pub fn strip_comment(line: &[u8]) -> &[u8] {
    match line.windows(2).position(|w| w == b"--") {
        Some(at) => &line[..at],
        None => line,
    }
}
