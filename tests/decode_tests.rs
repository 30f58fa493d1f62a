use morse::{decode_from_morse, encode_to_morse};

fn decode(code: &str) -> String {
    decode_from_morse(Some(code)).unwrap()
}

#[test]
fn test_decode_both_word_separators() {
    assert_eq!(decode(".- -...   -.-. -.."), "AB CD");
    assert_eq!(decode(".- -... / -.-. -.."), "AB CD");
}

#[test]
fn test_unresolvable_code_is_dropped() {
    assert_eq!(decode(".- ...... -..."), "AB");
    assert_eq!(decode("* * .-"), "A");
}

#[test]
fn test_exact_three_blank_rule() {
    assert_eq!(decode("-  -"), "TT");
    assert_eq!(decode("-   -"), "T T");
    assert_eq!(decode("-    -"), "T T");
    assert_eq!(decode("-      -"), "T  T");
}

#[test]
fn test_leading_slash_is_not_a_separator() {
    assert_eq!(decode(" / -"), " T");
    assert_eq!(decode("/ -"), "T");
}

#[test]
fn test_absent_and_empty_input() {
    assert_eq!(decode_from_morse(None), None);
    assert_eq!(decode_from_morse(Some("")), Some(String::new()));
}

#[test]
fn test_round_trip_sentence() {
    let text = "The quick brown fox jumps over the lazy dog 0123456789";
    for slash in [false, true] {
        let code = encode_to_morse(Some(text), slash).unwrap();
        assert_eq!(decode(&code), text.to_uppercase());
    }
}
