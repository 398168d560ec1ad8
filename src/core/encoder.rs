use crate::core::code_table::CodeTable;
use crate::domain::model::Element;

/// The only character that separates words.
pub const WORD_SEPARATOR: char = ' ';

/// Locale-independent uppercase mapping.
///
/// Covers ASCII and the accented letters of the built-in table. Anything else
/// is returned unchanged.
pub fn normalize_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }
    match c {
        'ä' => 'Ä',
        'æ' => 'Æ',
        'ą' => 'Ą',
        'à' => 'À',
        'å' => 'Å',
        'ç' => 'Ç',
        'ĉ' => 'Ĉ',
        'ć' => 'Ć',
        'š' => 'Š',
        'ð' => 'Ð',
        'ś' => 'Ś',
        'è' => 'È',
        'ł' => 'Ł',
        'é' => 'É',
        'đ' => 'Đ',
        'ę' => 'Ę',
        'ĝ' => 'Ĝ',
        'ĥ' => 'Ĥ',
        'ĵ' => 'Ĵ',
        'ź' => 'Ź',
        'ñ' => 'Ñ',
        'ń' => 'Ń',
        'ö' => 'Ö',
        'ø' => 'Ø',
        'ó' => 'Ó',
        'ŝ' => 'Ŝ',
        'þ' => 'Þ',
        'ü' => 'Ü',
        'ŭ' => 'Ŭ',
        'ż' => 'Ż',
        other => other,
    }
}

pub fn normalize_message(message: &str) -> String {
    message.chars().map(normalize_char).collect()
}

#[derive(Debug, Clone, Copy)]
pub struct MessageEncoder<'t> {
    table: &'t CodeTable,
}

impl MessageEncoder<'static> {
    pub fn standard() -> Self {
        Self::new(CodeTable::standard())
    }
}

impl<'t> MessageEncoder<'t> {
    pub fn new(table: &'t CodeTable) -> Self {
        Self { table }
    }

    /// Encodes `message` into an owned element sequence.
    ///
    /// Blank messages give an empty sequence. Every space contributes its own
    /// `InterWordGap`. Characters missing from the table are dropped without
    /// touching the word-boundary state, so `"A#B"` encodes like `"AB"`.
    pub fn encode(&self, message: &str) -> Vec<Element> {
        if message.trim().is_empty() {
            return Vec::new();
        }

        let mut encoded = Vec::with_capacity(message.len() * 4);
        let mut at_start_of_word = true;
        let mut skipped = 0usize;

        for c in message.chars().map(normalize_char) {
            if c == WORD_SEPARATOR {
                encoded.push(Element::InterWordGap);
                at_start_of_word = true;
            } else if let Some(elements) = self.table.lookup(c) {
                if !at_start_of_word {
                    encoded.push(Element::InterLetterGap);
                }
                encoded.extend_from_slice(elements);
                at_start_of_word = false;
            } else {
                skipped += 1;
            }
        }

        if skipped > 0 {
            tracing::debug!("Skipped {} character(s) with no morse code", skipped);
        }

        encoded
    }

    pub fn encode_optional(&self, message: Option<&str>) -> Vec<Element> {
        message.map(|m| self.encode(m)).unwrap_or_default()
    }

    /// Distinct characters of `message` that [`encode`](Self::encode) would drop.
    pub fn unsupported_chars(&self, message: &str) -> Vec<char> {
        let mut unsupported = Vec::new();
        for c in message.chars() {
            if c != WORD_SEPARATOR && !self.table.contains(c) && !unsupported.contains(&c) {
                unsupported.push(c);
            }
        }
        unsupported
    }
}

pub fn encode(message: &str) -> Vec<Element> {
    MessageEncoder::standard().encode(message)
}

pub fn encode_optional(message: Option<&str>) -> Vec<Element> {
    MessageEncoder::standard().encode_optional(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Element::{Dash, Dot, InterLetterGap, InterWordGap, IntraCharacterGap};

    #[test]
    fn test_blank_messages_encode_to_nothing() {
        assert!(encode("").is_empty());
        assert!(encode(" ").is_empty());
        assert!(encode("  \t\n ").is_empty());
        assert!(encode_optional(None).is_empty());
    }

    #[test]
    fn test_unsupported_only_encodes_to_nothing() {
        assert!(encode("#%^*").is_empty());
        assert!(encode("中文").is_empty());
    }

    #[test]
    fn test_encode_single_character() {
        assert_eq!(
            encode("U"),
            vec![Dot, IntraCharacterGap, Dot, IntraCharacterGap, Dash]
        );
    }

    #[test]
    fn test_encode_word() {
        assert_eq!(
            encode("OK"),
            vec![
                Dash,
                IntraCharacterGap,
                Dash,
                IntraCharacterGap,
                Dash,
                InterLetterGap,
                Dash,
                IntraCharacterGap,
                Dot,
                IntraCharacterGap,
                Dash
            ]
        );
    }

    #[test]
    fn test_lowercase_matches_uppercase() {
        assert_eq!(encode("ok"), encode("OK"));
        assert_eq!(encode("Ärger über ß"), encode("ÄRGER ÜBER ß"));
    }

    #[test]
    fn test_every_space_is_a_word_gap() {
        assert_eq!(encode(" E"), vec![InterWordGap, Dot]);
        assert_eq!(encode("E "), vec![Dot, InterWordGap]);
        assert_eq!(encode("E  E"), vec![Dot, InterWordGap, InterWordGap, Dot]);
    }

    #[test]
    fn test_unsupported_character_keeps_word_state() {
        assert_eq!(encode("A#B"), encode("AB"));
        assert_eq!(encode("#E"), vec![Dot]);
        assert_eq!(encode("E #E"), vec![Dot, InterWordGap, Dot]);
    }

    #[test]
    fn test_non_space_whitespace_is_skipped() {
        assert_eq!(encode("E\tE"), vec![Dot, InterLetterGap, Dot]);
    }

    #[test]
    fn test_accented_letters_use_their_table_codes() {
        assert_eq!(encode("é"), encode("É"));
        assert_eq!(
            encode("ñ"),
            vec![
                Dash,
                IntraCharacterGap,
                Dash,
                IntraCharacterGap,
                Dot,
                IntraCharacterGap,
                Dash,
                IntraCharacterGap,
                Dash
            ]
        );
    }

    #[test]
    fn test_normalize_char_is_fixed() {
        assert_eq!(normalize_char('a'), 'A');
        assert_eq!(normalize_char('z'), 'Z');
        assert_eq!(normalize_char('1'), '1');
        assert_eq!(normalize_char('ż'), 'Ż');
        // Outside the closed set: left alone.
        assert_eq!(normalize_char('ß'), 'ß');
        assert_eq!(normalize_char('ı'), 'ı');
        assert_eq!(normalize_message("sos ä"), "SOS Ä");
    }

    #[test]
    fn test_custom_table() {
        let table = CodeTable::from_entries([('x', "-..-")]).unwrap();
        let encoder = MessageEncoder::new(&table);
        assert_eq!(
            encoder.encode("x a"),
            vec![
                Dash,
                IntraCharacterGap,
                Dot,
                IntraCharacterGap,
                Dot,
                IntraCharacterGap,
                Dash,
                InterWordGap
            ]
        );
    }

    #[test]
    fn test_unsupported_chars() {
        let encoder = MessageEncoder::standard();
        assert_eq!(encoder.unsupported_chars("A#B# c~"), vec!['#', '~']);
        assert!(encoder.unsupported_chars("SOS sos").is_empty());
    }
}
