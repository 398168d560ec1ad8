use morse_flash::core::export::morse_notation;
use morse_flash::core::timing::total_units;
use morse_flash::Element::{self, Dash, Dot, InterLetterGap, InterWordGap, IntraCharacterGap};
use morse_flash::{encode, encode_optional, relative_units};

fn yes_sir() -> Vec<Element> {
    vec![
        Dash, // Y
        IntraCharacterGap,
        Dot,
        IntraCharacterGap,
        Dash,
        IntraCharacterGap,
        Dash,
        InterLetterGap,
        Dot, // E
        InterLetterGap,
        Dot, // S
        IntraCharacterGap,
        Dot,
        IntraCharacterGap,
        Dot,
        InterWordGap,
        Dot, // S
        IntraCharacterGap,
        Dot,
        IntraCharacterGap,
        Dot,
        InterLetterGap,
        Dot, // I
        IntraCharacterGap,
        Dot,
        InterLetterGap,
        Dot, // R
        IntraCharacterGap,
        Dash,
        IntraCharacterGap,
        Dot,
    ]
}

#[test]
fn test_yes_sir_fixture() {
    let expected = yes_sir();
    assert_eq!(expected.len(), 31);

    let result = encode("YES SIR");
    for (i, (want, got)) in expected.iter().zip(result.iter()).enumerate() {
        assert_eq!(want, got, "element {} differs", i);
    }
    assert_eq!(result, expected);
}

#[test]
fn test_yes_sir_lowercase() {
    assert_eq!(encode("yes sir"), yes_sir());
}

#[test]
fn test_empty_and_absent_messages() {
    assert!(encode("").is_empty());
    assert!(encode_optional(None).is_empty());
    assert!(encode_optional(Some("   ")).is_empty());
    assert_eq!(encode_optional(Some("E")), vec![Dot]);
}

#[test]
fn test_spaces_are_never_collapsed() {
    let word_gaps = |s: &str| encode(s).iter().filter(|e| **e == InterWordGap).count();

    assert_eq!(word_gaps(" SOS"), 1);
    assert_eq!(word_gaps("SOS "), 1);
    assert_eq!(word_gaps("SOS  SOS"), 2);
    assert_eq!(word_gaps("  SOS   SOS  "), 7);
    assert_eq!(encode(" E")[0], InterWordGap);
    assert_eq!(encode("E ").last(), Some(&InterWordGap));
}

#[test]
fn test_unsupported_characters_are_transparent() {
    assert_eq!(encode("A#B"), encode("AB"));
    assert_eq!(morse_notation(&encode("A#B")), ".- -...");
    assert_eq!(encode("~~~"), Vec::<Element>::new());
}

#[test]
fn test_punctuation_and_digits() {
    assert_eq!(morse_notation(&encode("73!")), "--... ...-- -.-.--");
    assert_eq!(morse_notation(&encode("a@b.c")), ".- .--.-. -... .-.-.- -.-.");
}

#[test]
fn test_standard_word_length() {
    for element in Element::ALL {
        assert!(relative_units(element) > 0);
    }
    assert_eq!(total_units(&encode("PARIS ")), 50);
    assert_eq!(total_units(&encode("PARIS PARIS ")), 100);
}

#[test]
fn test_encoding_is_identical_across_threads() {
    let expected = encode("The quick brown fox 1234 ÄÖÜ?");
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| encode("The quick brown fox 1234 ÄÖÜ?")))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
