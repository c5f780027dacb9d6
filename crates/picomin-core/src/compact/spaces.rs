// crates/picomin-core/src/compact/spaces.rs
//
// Quote-aware whitespace reduction, one pass per rule, in order:
// - collapse a run of 2+ horizontal-whitespace bytes to the first byte of
//   the run;
// - drop a single horizontal-whitespace byte after one of `( = , ) + - * '`;
// - drop a single horizontal-whitespace byte before one of `) = , ~ + - * '`.
//
// "Outside a string" means an even number of single quotes on the line
// strictly before the whitespace byte under consideration. Bytes inside a
// string are copied verbatim.

use crate::compact::quote::QuoteState;

const AFTER_TRIGGERS: &[u8] = b"(=,)+-*'";
const BEFORE_TRIGGERS: &[u8] = b")=,~+-*'";

fn is_hws(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Collapse each out-of-string run of 2+ spaces/tabs into its first byte.
pub fn collapse_runs(line: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(line.len());
    let mut q = QuoteState::new();
    let mut i = 0usize;
    while i < line.len() {
        let b = line[i];
        if is_hws(b) && !q.inside() {
            let mut j = i + 1;
            while j < line.len() && is_hws(line[j]) {
                j += 1;
            }
            out.push(b);
            i = j;
            continue;
        }
        q.advance(b);
        out.push(b);
        i += 1;
    }
    out
}

/// Drop an out-of-string space/tab immediately following a trigger byte.
pub fn strip_after_triggers(line: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(line.len());
    let mut q = QuoteState::new();
    for (i, &b) in line.iter().enumerate() {
        if is_hws(b) && !q.inside() && i > 0 && AFTER_TRIGGERS.contains(&line[i - 1]) {
            continue;
        }
        q.advance(b);
        out.push(b);
    }
    out
}

/// Drop an out-of-string space/tab immediately preceding a trigger byte.
pub fn strip_before_triggers(line: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(line.len());
    let mut q = QuoteState::new();
    for (i, &b) in line.iter().enumerate() {
        if is_hws(b) && !q.inside() && i + 1 < line.len() && BEFORE_TRIGGERS.contains(&line[i + 1])
        {
            continue;
        }
        q.advance(b);
        out.push(b);
    }
    out
}

/// Strip spaces/tabs from the start of a line. Literals never span lines, so
/// this needs no quote check.
pub fn trim_leading(line: &[u8]) -> &[u8] {
    let mut i = 0usize;
    while i < line.len() && is_hws(line[i]) {
        i += 1;
    }
    &line[i..]
}

/// Strip the trailing space/tab run, unless it lies inside an unterminated
/// string literal.
pub fn trim_trailing(line: &[u8]) -> &[u8] {
    let mut end = line.len();
    while end > 0 && is_hws(line[end - 1]) {
        end -= 1;
    }
    if end == line.len() {
        return line;
    }
    let mut q = QuoteState::new();
    for &b in &line[..end] {
        q.advance(b);
    }
    if q.inside() {
        line
    } else {
        &line[..end]
    }
}
