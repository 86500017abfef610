use super::*;

#[test]
fn pluralises_counts() {
    assert_eq!(count_label(0, "item"), "0 items");
    assert_eq!(count_label(1, "song"), "1 song");
    assert_eq!(count_label(2, "URL"), "2 URLs");
}

#[test]
fn suffix_only_drops_for_one() {
    assert_eq!(plural_suffix(1), "");
    assert_eq!(plural_suffix(0), "s");
    assert_eq!(plural_suffix(10), "s");
}

#[test]
fn every_line_break_style_becomes_a_newline() {
    assert_eq!(normalise_line_breaks("a\r\nb\rc\nd"), "a\nb\nc\nd");
    assert_eq!(normalise_line_breaks("plain"), "plain");
}
