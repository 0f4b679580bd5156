use super::*;

#[test]
fn truncate_test() {
    assert_eq!("Hello", truncate("Hello world", 5));
    assert_eq!("Hello world", truncate("Hello world", 11));
    assert_eq!("Hello world", truncate("Hello world", 20));
    assert_eq!("", truncate("Hello world", 0));
    assert_eq!("zaż", truncate("zażółć", 3));
}

#[test]
fn try_truncate_test() {
    assert_eq!(Some("Hello"), try_truncate("Hello world", 5));
    assert_eq!(None, try_truncate("Hello world", 11));
    assert_eq!(None, try_truncate("", 3));
}

#[test]
fn add_padding_test() {
    assert_eq!("abc   ", add_padding("abc", 6, false));
    assert_eq!("   abc", add_padding("abc", 6, true));
    assert_eq!("ab", add_padding("abc", 2, false));
    assert_eq!("ab", add_padding("abc", 2, true));
    assert_eq!("      ", add_padding("", 6, false));
    assert_eq!("żółw ", add_padding("żółw", 5, false));
}
