// crates/picomin-core/src/compact/mod.rs

pub mod comments;
pub mod quote;
pub mod spaces;

use crate::compact::comments::strip_comment;
use crate::compact::spaces::{
    collapse_runs, strip_after_triggers, strip_before_triggers, trim_leading, trim_trailing,
};

/// Compact the code region: comments removed, whitespace reduced, blank and
/// comment-only lines dropped. Each LF-terminated line is processed
/// independently; surviving lines keep their terminator.
pub fn compact_code(code: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(code.len());
    for raw in code.split_inclusive(|&b| b == b'\n') {
        let (line, has_nl) = match raw.split_last() {
            Some((&b'\n', head)) => (head, true),
            _ => (raw, false),
        };
        let compacted = compact_line(line);
        if compacted.is_empty() {
            continue;
        }
        out.extend_from_slice(&compacted);
        if has_nl {
            out.push(b'\n');
        }
    }
    out
}

/// One line, no terminator. An empty result means the line is dropped.
fn compact_line(line: &[u8]) -> Vec<u8> {
    let line = strip_comment(line);
    let line = trim_leading(line);
    let collapsed = collapse_runs(line);
    let stripped = strip_after_triggers(&collapsed);
    let stripped = strip_before_triggers(&stripped);
    trim_trailing(&stripped).to_vec()
}
