//! Text preparation for the standard PDF fonts.

use std::fmt::Debug;

pub trait Transliterator: Send + Sync + Debug {
    /// Returns `text` using only characters the active font encoding can show.
    fn transliterate(&self, text: &str) -> String;
}

/// Restricts text to printable Latin-1, which the WinAnsi-encoded standard
/// fonts render one byte per character.
#[derive(Debug, Default, Clone, Copy)]
pub struct WinAnsiTransliterator;

impl WinAnsiTransliterator {
    fn map_char(c: char, out: &mut String) {
        match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => out.push('"'),
            '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2212}' => {
                out.push('-')
            }
            '\u{2026}' => out.push_str("..."),
            '\u{2022}' => out.push('*'),
            '\u{00A0}' | '\u{2002}' | '\u{2003}' | '\u{2009}' => out.push(' '),
            '\t' => out.push(' '),
            '\u{0152}' => out.push_str("OE"),
            '\u{0153}' => out.push_str("oe"),
            '\u{0160}' => out.push('S'),
            '\u{0161}' => out.push('s'),
            '\u{017D}' => out.push('Z'),
            '\u{017E}' => out.push('z'),
            '\u{0141}' => out.push('L'),
            '\u{0142}' => out.push('l'),
            c if c.is_control() => {}
            c if (c as u32) <= 0xFF => out.push(c),
            _ => out.push('?'),
        }
    }
}

impl Transliterator for WinAnsiTransliterator {
    fn transliterate(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            Self::map_char(c, &mut out);
        }
        out
    }
}
