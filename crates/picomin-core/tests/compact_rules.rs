// crates/picomin-core/tests/compact_rules.rs

use picomin_core::compact_code;

fn compact_str(s: &str) -> String {
    String::from_utf8(compact_code(s.as_bytes())).expect("utf8 output")
}

#[test]
fn strips_trailing_comment() {
    assert_eq!(compact_str("x = 1 -- set x to one\n"), "x=1\n");
}

#[test]
fn drops_comment_only_and_blank_lines() {
    assert_eq!(compact_str("-- header\n\nx=1\n   \ny=2\n"), "x=1\ny=2\n");
}

#[test]
fn collapses_runs_to_the_first_byte_of_the_run() {
    assert_eq!(compact_str("a=b  c\n"), "a=b c\n");
    // tab-led run survives as a tab
    assert_eq!(compact_str("a=b\t\t c\n"), "a=b\tc\n");
}

#[test]
fn removes_space_after_triggers() {
    assert_eq!(compact_str("f( x)\n"), "f(x)\n");
    assert_eq!(compact_str("a= 1\n"), "a=1\n");
    assert_eq!(compact_str("f(a, b)\n"), "f(a,b)\n");
}

#[test]
fn removes_space_before_triggers() {
    assert_eq!(compact_str("f(x )\n"), "f(x)\n");
    assert_eq!(compact_str("a ~=b\n"), "a~=b\n");
}

#[test]
fn collapses_space_around_operators() {
    assert_eq!(compact_str("a = 1 + 2 * 3 - 4\n"), "a=1+2*3-4\n");
}

#[test]
fn keeps_single_space_between_plain_words() {
    assert_eq!(compact_str("local x = 5\n"), "local x=5\n");
    assert_eq!(compact_str("if x then\n"), "if x then\n");
}

#[test]
fn strips_line_leading_whitespace() {
    assert_eq!(
        compact_str("  if x then\n    y=1\n  end\n"),
        "if x then\ny=1\nend\n"
    );
}

#[test]
fn trims_trailing_whitespace_keeping_newline() {
    assert_eq!(compact_str("x=1   \ny=2\n"), "x=1\ny=2\n");
}

#[test]
fn last_line_without_terminator_is_compacted() {
    assert_eq!(compact_str("x = 1"), "x=1");
}
