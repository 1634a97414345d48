//! Character classification used by the script filter and the n-gram extractor.
//!
//! Everything here is a pure, table-free function over code points. A character
//! is a *word character* when it is alphabetic or a combining mark that belongs
//! inside a word (viramas, nuktas, Hebrew points, Arabic harakat, Thai tone
//! marks). Digits, punctuation, symbols and whitespace are separators.

use std::fmt;

// Hangul syllables + jamo + compatibility + extended ranges.
#[inline(always)]
pub fn is_hangul(c: char) -> bool {
    matches!(c as u32,
        0xAC00..=0xD7AF  | // Syllables
        0x1100..=0x11FF  | // Jamo
        0x3130..=0x318F  | // Compatibility Jamo
        0xA960..=0xA97F  | // Jamo Ext A
        0xD7B0..=0xD7FF  | // Jamo Ext B
        0xFFA0..=0xFFDC    // Halfwidth Jamo
    )
}

// Hiragana block + the hentaigana half of Kana Supplement.
#[inline(always)]
pub fn is_hiragana(c: char) -> bool {
    matches!(c as u32, 0x3040..=0x309F | 0x1B000..=0x1B16F)
}

// Katakana + phonetic extensions + halfwidth forms.
#[inline(always)]
pub fn is_katakana(c: char) -> bool {
    matches!(c as u32,
        0x30A0..=0x30FF  | // Katakana
        0x31F0..=0x31FF  | // Phonetic Extensions
        0xFF66..=0xFF9F    // Halfwidth Katakana
    )
}

// Unified Han blocks + extensions A–I + compatibility block.
#[inline(always)]
pub fn is_cjk_unified_ideograph(c: char) -> bool {
    matches!(c as u32,
        0x4E00..=0x9FFF   | // Unified
        0x3400..=0x4DBF   | // Ext A
        0x20000..=0x2A6DF | // Ext B
        0x2A700..=0x2B73F | // Ext C
        0x2B740..=0x2B81F | // Ext D
        0x2B820..=0x2CEAF | // Ext E
        0x2CEB0..=0x2EBEF | // Ext F
        0x30000..=0x3134F | // Ext G
        0x31350..=0x323AF | // Ext H
        0xF900..=0xFAFF     // Compatibility
    )
}

#[inline(always)]
pub fn is_kangxi_radical(c: char) -> bool {
    matches!(c as u32, 0x2F00..=0x2FDF)
}

#[inline(always)]
pub fn is_han(c: char) -> bool {
    // 々 (U+3005) and 〆 (U+3006) behave as ideographs inside words.
    is_cjk_unified_ideograph(c) || is_kangxi_radical(c) || matches!(c as u32, 0x3005..=0x3007)
}

pub const fn is_virama(c: char) -> bool {
    matches!(
        c as u32,
        0x094D | // Devanagari
        0x09CD | // Bengali
        0x0A4D | // Gurmukhi
        0x0ACD | // Gujarati
        0x0B4D | // Oriya
        0x0BCD | // Tamil
        0x0C4D | // Telugu
        0x0CCD | // Kannada
        0x0D4D | // Malayalam
        0x0DCA | // Sinhala
        0x103A | // Myanmar
        0x17D2 | // Khmer
        0x1BAA | // Tai Tham
        0x1B44 // Balinese
    )
}

#[inline(always)]
pub const fn is_nukta(c: char) -> bool {
    matches!(c as u32, 0x093C | 0x09BC | 0x0A3C | 0x0ABC | 0x0B3C | 0x0C3C | 0x0CBC)
}

/// Non-spacing marks that must stay attached to the surrounding word even when
/// `char::is_alphabetic` rejects them.
#[inline(always)]
pub fn is_combining_mark(c: char) -> bool {
    if is_virama(c) || is_nukta(c) {
        return true;
    }
    matches!(c as u32,
        0x0300..=0x036F | // Combining Diacritical Marks
        0x1AB0..=0x1AFF | // Combining Diacritical Marks Extended
        0x1DC0..=0x1DFF | // Combining Diacritical Marks Supplement
        0x0591..=0x05BD | // Hebrew cantillation + points
        0x05BF          |
        0x05C1..=0x05C2 |
        0x05C4..=0x05C5 |
        0x05C7          |
        0x064B..=0x065F | // Arabic harakat
        0x0670          | // Superscript alef
        0x06D6..=0x06DC | // Quranic annotation
        0x0E47..=0x0E4E | // Thai tone marks
        0x3099..=0x309A   // Combining kana voicing
    )
}

/// Letters and in-word marks. Everything else separates words.
#[inline(always)]
pub fn is_word_char(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    c.is_alphabetic() || is_combining_mark(c)
}

/// Writing systems the language catalogue distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Script {
    Latin,
    Cyrillic,
    Greek,
    Armenian,
    Georgian,
    Hebrew,
    Arabic,
    Devanagari,
    Bengali,
    Gurmukhi,
    Gujarati,
    Tamil,
    Telugu,
    Thai,
    Hangul,
    Han,
    Hiragana,
    Katakana,
}

impl Script {
    pub const ALL: [Script; 18] = [
        Script::Latin,
        Script::Cyrillic,
        Script::Greek,
        Script::Armenian,
        Script::Georgian,
        Script::Hebrew,
        Script::Arabic,
        Script::Devanagari,
        Script::Bengali,
        Script::Gurmukhi,
        Script::Gujarati,
        Script::Tamil,
        Script::Telugu,
        Script::Thai,
        Script::Hangul,
        Script::Han,
        Script::Hiragana,
        Script::Katakana,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Script::Latin => "Latin",
            Script::Cyrillic => "Cyrillic",
            Script::Greek => "Greek",
            Script::Armenian => "Armenian",
            Script::Georgian => "Georgian",
            Script::Hebrew => "Hebrew",
            Script::Arabic => "Arabic",
            Script::Devanagari => "Devanagari",
            Script::Bengali => "Bengali",
            Script::Gurmukhi => "Gurmukhi",
            Script::Gujarati => "Gujarati",
            Script::Tamil => "Tamil",
            Script::Telugu => "Telugu",
            Script::Thai => "Thai",
            Script::Hangul => "Hangul",
            Script::Han => "Han",
            Script::Hiragana => "Hiragana",
            Script::Katakana => "Katakana",
        }
    }

    #[inline(always)]
    const fn bit(self) -> u32 {
        1 << (self as u8)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the script of a word character, or `None` for separators and for
/// letters of scripts outside the catalogue (those still form words).
#[inline]
pub fn script_of(c: char) -> Option<Script> {
    let cp = c as u32;

    // Fast path: ASCII
    if cp < 0x80 {
        return c.is_ascii_alphabetic().then_some(Script::Latin);
    }
    if !is_word_char(c) {
        return None;
    }
    if is_han(c) {
        return Some(Script::Han);
    }
    if is_hiragana(c) {
        return Some(Script::Hiragana);
    }
    if is_katakana(c) {
        return Some(Script::Katakana);
    }
    if is_hangul(c) {
        return Some(Script::Hangul);
    }

    let script = match cp {
        0x00AA | 0x00BA => Script::Latin,
        0x00C0..=0x02AF | // Latin-1 Supplement + Extended A/B + IPA
        0x1E00..=0x1EFF | // Latin Extended Additional (Vietnamese, Yoruba)
        0x2C60..=0x2C7F | // Latin Extended-C
        0xA720..=0xA7FF => Script::Latin,
        0x0370..=0x03FF | 0x1F00..=0x1FFF => Script::Greek,
        0x0400..=0x052F | // Cyrillic + Supplement
        0x1C80..=0x1C8F |
        0x2DE0..=0x2DFF |
        0xA640..=0xA69F => Script::Cyrillic,
        0x0530..=0x058F => Script::Armenian,
        0x10A0..=0x10FF | 0x1C90..=0x1CBF | 0x2D00..=0x2D2F => Script::Georgian,
        0x0590..=0x05FF | 0xFB1D..=0xFB4F => Script::Hebrew,
        0x0600..=0x06FF | // Arabic
        0x0750..=0x077F | // Arabic Supplement
        0x0870..=0x08FF | // Arabic Extended-A/B
        0xFB50..=0xFDFF | // Presentation Forms-A
        0xFE70..=0xFEFE => Script::Arabic,
        0x0900..=0x097F | 0xA8E0..=0xA8FF => Script::Devanagari,
        0x0980..=0x09FF => Script::Bengali,
        0x0A00..=0x0A7F => Script::Gurmukhi,
        0x0A80..=0x0AFF => Script::Gujarati,
        0x0B80..=0x0BFF | 0x11FC0..=0x11FFF => Script::Tamil,
        0x0C00..=0x0C7F => Script::Telugu,
        0x0E00..=0x0E7F => Script::Thai,
        _ => return None,
    };
    Some(script)
}

/// Bit set over [`Script`]. `Copy`, const-constructible, so language entries
/// can carry one in static data.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScriptSet(u32);

impl ScriptSet {
    pub const EMPTY: ScriptSet = ScriptSet(0);

    pub const fn from_slice(scripts: &[Script]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < scripts.len() {
            bits |= scripts[i].bit();
            i += 1;
        }
        ScriptSet(bits)
    }

    #[inline(always)]
    pub fn insert(&mut self, script: Script) {
        self.0 |= script.bit();
    }

    #[inline(always)]
    pub const fn contains(self, script: Script) -> bool {
        self.0 & script.bit() != 0
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline(always)]
    pub const fn is_subset(self, other: ScriptSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Script> {
        Script::ALL.into_iter().filter(move |s| self.contains(*s))
    }
}

impl fmt::Debug for ScriptSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Script> for ScriptSet {
    fn from_iter<I: IntoIterator<Item = Script>>(iter: I) -> Self {
        let mut set = ScriptSet::EMPTY;
        for script in iter {
            set.insert(script);
        }
        set
    }
}
