//! Character to morse code table.
//!
//! The table is authored as `.`/`-` strings because those are easy to read
//! and review. Every string is expanded once into [`Element`]s and the result
//! is never mutated afterwards.

use crate::core::encoder::normalize_char;
use crate::domain::model::Element;
use crate::utils::error::{MorseError, Result};
use std::collections::BTreeMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Authored table. Keys are already in their uppercase form.
pub const STANDARD_CODES: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('0', "-----"),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
    ('Ä', ".-.-"),
    ('Æ', ".-.-"),
    ('Ą', ".-.-"),
    ('À', ".--.-"),
    ('Å', ".--.-"),
    ('Ç', "-.-.."),
    ('Ĉ', "-.-.."),
    ('Ć', "-.-.."),
    ('Š', "----"),
    ('Ð', "..--."),
    ('Ś', "...-..."),
    ('È', ".-..-"),
    ('Ł', ".-..-"),
    ('É', "..-.."),
    ('Đ', "..-.."),
    ('Ę', "..-.."),
    ('Ĝ', "--.-."),
    ('Ĥ', "----"),
    ('Ĵ', ".---."),
    ('Ź', "--..-."),
    ('Ñ', "--.--"),
    ('Ń', "--.--"),
    ('Ö', "---."),
    ('Ø', "---."),
    ('Ó', "---."),
    ('Ŝ', "...-."),
    ('Þ', ".--.."),
    ('Ü', "..--"),
    ('Ŭ', "..--"),
    ('Ż', "--..-"),
];

/// Why a single code string could not be expanded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("code is empty")]
    Empty,
    #[error("unexpected symbol {symbol:?} at position {position}")]
    UnexpectedSymbol { symbol: char, position: usize },
}

/// Expands `"..-"` into `[Dot, IntraCharacterGap, Dot, IntraCharacterGap, Dash]`.
pub fn expand_code(code: &str) -> std::result::Result<Vec<Element>, CodeError> {
    if code.is_empty() {
        return Err(CodeError::Empty);
    }

    let mut elements = Vec::with_capacity(code.len() * 2 - 1);
    for (position, symbol) in code.chars().enumerate() {
        if position > 0 {
            elements.push(Element::IntraCharacterGap);
        }
        match symbol {
            '.' => elements.push(Element::Dot),
            '-' => elements.push(Element::Dash),
            other => {
                return Err(CodeError::UnexpectedSymbol {
                    symbol: other,
                    position,
                })
            }
        }
    }

    Ok(elements)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CodeEntry {
    code: String,
    elements: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    entries: BTreeMap<char, CodeEntry>,
}

impl CodeTable {
    /// Builds a table from `(character, code)` pairs.
    ///
    /// Keys go through [`normalize_char`], so `'ä'` and `'Ä'` land on the
    /// same entry; a later pair overrides an earlier one.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, S)>,
        S: AsRef<str>,
    {
        let mut table = Self {
            entries: BTreeMap::new(),
        };
        for (character, code) in entries {
            table.insert(character, code.as_ref())?;
        }
        Ok(table)
    }

    /// The built-in table, built on first use.
    ///
    /// # Panics
    ///
    /// If [`STANDARD_CODES`] contains a malformed code. The process must not
    /// encode anything with a corrupt table.
    pub fn standard() -> &'static CodeTable {
        static STANDARD: OnceLock<CodeTable> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let table = CodeTable::from_entries(STANDARD_CODES.iter().copied())
                .unwrap_or_else(|e| panic!("built-in morse code table is corrupt: {}", e));
            tracing::debug!("Built standard morse code table with {} entries", table.len());
            table
        })
    }

    /// Copy of this table with `extra` entries added or overridden.
    pub fn with_extra<I, S>(&self, extra: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, S)>,
        S: AsRef<str>,
    {
        let mut table = self.clone();
        for (character, code) in extra {
            let replaced = table.insert(character, code.as_ref())?;
            if replaced {
                tracing::debug!("Overriding code for '{}' with {}", character, code.as_ref());
            }
        }
        Ok(table)
    }

    fn insert(&mut self, character: char, code: &str) -> Result<bool> {
        let elements = expand_code(code).map_err(|e| MorseError::InvalidCode {
            character,
            code: code.to_string(),
            reason: e.to_string(),
        })?;
        let previous = self.entries.insert(
            normalize_char(character),
            CodeEntry {
                code: code.to_string(),
                elements,
            },
        );
        Ok(previous.is_some())
    }

    /// Expanded elements for `c`, after case normalization.
    pub fn lookup(&self, c: char) -> Option<&[Element]> {
        self.entries
            .get(&normalize_char(c))
            .map(|entry| entry.elements.as_slice())
    }

    /// The authored `.`/`-` string for `c`.
    pub fn source_code(&self, c: char) -> Option<&str> {
        self.entries.get(&normalize_char(c)).map(|entry| entry.code.as_str())
    }

    pub fn contains(&self, c: char) -> bool {
        self.entries.contains_key(&normalize_char(c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(character, code, elements)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str, &[Element])> + '_ {
        self.entries
            .iter()
            .map(|(c, entry)| (*c, entry.code.as_str(), entry.elements.as_slice()))
    }
}
