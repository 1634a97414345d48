use crate::lang::{Language, LanguageEntry};
use crate::unicode::{Script, ScriptSet};

use paste::paste;
use phf::{Map, phf_map};
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// ---------------------------------------------------------------------------
///    Macro – generates everything from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
($(
        $code:ident, $code_str:literal, $iso1:literal, $name:literal,
        scripts: [ $($script:ident),+ $(,)? ],
        markers: [ $($m:literal),* $(,)? ],
        extinct: $extinct:expr
    ),* $(,)?) => {
        // Public `Language` constants
        $(
            pub const $code: Language = Language { code: $code_str, iso_639_1: $iso1, name: $name };
        )*

        // Per-language static data modules
        $(
            paste! {
                mod [<$code:lower _data>] {
                    use super::*;

                    pub const SCRIPT_SET: ScriptSet = ScriptSet::from_slice(&[$(Script::$script),+]);
                    pub static MARKERS: &[char] = &[$($m),*];
                    pub const EXTINCT: bool = $extinct;
                }
            }
        )*

        // Global lookup table (public)
        paste! {
            pub static LANG_TABLE: Map<&'static str, LanguageEntry> = phf_map! {
                $(
                    $code_str => LanguageEntry {
                        scripts: [<$code:lower _data>]::SCRIPT_SET,
                        marker_chars: [<$code:lower _data>]::MARKERS,
                        extinct: [<$code:lower _data>]::EXTINCT,
                    }
                ),*
            };
        }

        /// Every language, in declaration order.
        pub static ALL_LANGUAGES: &[Language] = &[$($code),*];

        // Helper: ISO 639-3 lookup
        pub fn from_code(code: &str) -> Option<Language> {
            let upper = code.to_uppercase();
            match upper.as_str() {
                $(
                    $code_str => Some($code),
                )*
                _ => None,
            }
        }

        // Helper: ISO 639-1 lookup
        pub fn from_iso_639_1(code: &str) -> Option<Language> {
            let lower = code.to_lowercase();
            match lower.as_str() {
                $(
                    $iso1 => Some($code),
                )*
                _ => None,
            }
        }
    };
}

#[inline]
pub fn all_languages() -> &'static [Language] {
    ALL_LANGUAGES
}

/// Reverse of the `markers` lists: character to every language writing it,
/// in declaration order.
pub static MARKER_OWNERS: LazyLock<FxHashMap<char, Vec<Language>>> = LazyLock::new(|| {
    let mut owners: FxHashMap<char, Vec<Language>> = FxHashMap::default();
    for &language in ALL_LANGUAGES {
        for &c in language.marker_chars() {
            let writers = owners.entry(c).or_default();
            if !writers.contains(&language) {
                writers.push(language);
            }
        }
    }
    owners
});

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
//    Declaration order is alphabetical by English name and is the order
//    `LanguageSet::all()` and friends yield.
//    `markers` lists the distinctive letters a language writes. Letters
//    shared by many languages (á, é, ó, ...) carry no signal and are absent.
// ---------------------------------------------------------------------------
define_languages! {
    AFR, "AFR", "af", "Afrikaans",
        scripts: [Latin],
        markers: ['Ë', 'ë', 'Ï', 'ï'],
        extinct: false,

    SQI, "SQI", "sq", "Albanian",
        scripts: [Latin],
        markers: ['Ç', 'ç', 'Ë', 'ë'],
        extinct: false,

    ARA, "ARA", "ar", "Arabic",
        scripts: [Arabic],
        markers: [],
        extinct: false,

    HYE, "HYE", "hy", "Armenian",
        scripts: [Armenian],
        markers: [],
        extinct: false,

    AZE, "AZE", "az", "Azerbaijani",
        scripts: [Latin],
        markers: ['Ə', 'ə', 'Ç', 'ç', 'Ğ', 'ğ', 'İ', 'ı', 'Ö', 'ö', 'Ş', 'ş', 'Ü', 'ü'],
        extinct: false,

    EUS, "EUS", "eu", "Basque",
        scripts: [Latin],
        markers: ['Ñ', 'ñ'],
        extinct: false,

    BEL, "BEL", "be", "Belarusian",
        scripts: [Cyrillic],
        markers: ['Ў', 'ў', 'Ё', 'ё', 'Ы', 'ы', 'Э', 'э', 'І', 'і'],
        extinct: false,

    BEN, "BEN", "bn", "Bengali",
        scripts: [Bengali],
        markers: [],
        extinct: false,

    NOB, "NOB", "nb", "Bokmal",
        scripts: [Latin],
        markers: ['Å', 'å', 'Æ', 'æ', 'Ø', 'ø'],
        extinct: false,

    BOS, "BOS", "bs", "Bosnian",
        scripts: [Latin],
        markers: ['Č', 'č', 'Ć', 'ć', 'Đ', 'đ', 'Š', 'š', 'Ž', 'ž'],
        extinct: false,

    BUL, "BUL", "bg", "Bulgarian",
        scripts: [Cyrillic],
        markers: [],
        extinct: false,

    CAT, "CAT", "ca", "Catalan",
        scripts: [Latin],
        markers: ['Ç', 'ç', 'Ï', 'ï', 'Ŀ', 'ŀ', 'Ü', 'ü'],
        extinct: false,

    ZHO, "ZHO", "zh", "Chinese",
        scripts: [Han],
        markers: [],
        extinct: false,

    HRV, "HRV", "hr", "Croatian",
        scripts: [Latin],
        markers: ['Č', 'č', 'Ć', 'ć', 'Đ', 'đ', 'Š', 'š', 'Ž', 'ž'],
        extinct: false,

    CES, "CES", "cs", "Czech",
        scripts: [Latin],
        markers: ['Č', 'č', 'Ď', 'ď', 'Ě', 'ě', 'Ň', 'ň', 'Ř', 'ř', 'Š', 'š', 'Ť', 'ť', 'Ů', 'ů', 'Ž', 'ž'],
        extinct: false,

    DAN, "DAN", "da", "Danish",
        scripts: [Latin],
        markers: ['Å', 'å', 'Æ', 'æ', 'Ø', 'ø'],
        extinct: false,

    NLD, "NLD", "nl", "Dutch",
        scripts: [Latin],
        markers: ['Ë', 'ë', 'Ï', 'ï'],
        extinct: false,

    ENG, "ENG", "en", "English",
        scripts: [Latin],
        markers: [],
        extinct: false,

    EPO, "EPO", "eo", "Esperanto",
        scripts: [Latin],
        markers: ['Ĉ', 'ĉ', 'Ĝ', 'ĝ', 'Ĥ', 'ĥ', 'Ĵ', 'ĵ', 'Ŝ', 'ŝ', 'Ŭ', 'ŭ'],
        extinct: false,

    EST, "EST", "et", "Estonian",
        scripts: [Latin],
        markers: ['Ä', 'ä', 'Ö', 'ö', 'Õ', 'õ', 'Š', 'š', 'Ü', 'ü', 'Ž', 'ž'],
        extinct: false,

    FIN, "FIN", "fi", "Finnish",
        scripts: [Latin],
        markers: ['Ä', 'ä', 'Ö', 'ö'],
        extinct: false,

    FRA, "FRA", "fr", "French",
        scripts: [Latin],
        markers: ['Â', 'â', 'Ç', 'ç', 'Ë', 'ë', 'Î', 'î', 'Ï', 'ï', 'Ô', 'ô', 'Œ', 'œ'],
        extinct: false,

    LUG, "LUG", "lg", "Ganda",
        scripts: [Latin],
        markers: [],
        extinct: false,

    KAT, "KAT", "ka", "Georgian",
        scripts: [Georgian],
        markers: [],
        extinct: false,

    DEU, "DEU", "de", "German",
        scripts: [Latin],
        markers: ['Ä', 'ä', 'Ö', 'ö', 'Ü', 'ü', 'ß', 'ẞ'],
        extinct: false,

    ELL, "ELL", "el", "Greek",
        scripts: [Greek],
        markers: [],
        extinct: false,

    GUJ, "GUJ", "gu", "Gujarati",
        scripts: [Gujarati],
        markers: [],
        extinct: false,

    HEB, "HEB", "he", "Hebrew",
        scripts: [Hebrew],
        markers: [],
        extinct: false,

    HIN, "HIN", "hi", "Hindi",
        scripts: [Devanagari],
        markers: [],
        extinct: false,

    HUN, "HUN", "hu", "Hungarian",
        scripts: [Latin],
        markers: ['Ö', 'ö', 'Ő', 'ő', 'Ü', 'ü', 'Ű', 'ű'],
        extinct: false,

    ISL, "ISL", "is", "Icelandic",
        scripts: [Latin],
        markers: ['Æ', 'æ', 'Ð', 'ð', 'Ö', 'ö', 'Þ', 'þ'],
        extinct: false,

    IND, "IND", "id", "Indonesian",
        scripts: [Latin],
        markers: [],
        extinct: false,

    GLE, "GLE", "ga", "Irish",
        scripts: [Latin],
        markers: [],
        extinct: false,

    ITA, "ITA", "it", "Italian",
        scripts: [Latin],
        markers: [],
        extinct: false,

    JPN, "JPN", "ja", "Japanese",
        scripts: [Han, Hiragana, Katakana],
        markers: [],
        extinct: false,

    KAZ, "KAZ", "kk", "Kazakh",
        scripts: [Cyrillic],
        markers: ['Ә', 'ә', 'Ғ', 'ғ', 'Қ', 'қ', 'Ң', 'ң', 'Ө', 'ө', 'Ұ', 'ұ', 'Ү', 'ү', 'Һ', 'һ', 'І', 'і', 'Ё', 'ё', 'Ы', 'ы', 'Э', 'э'],
        extinct: false,

    KOR, "KOR", "ko", "Korean",
        scripts: [Hangul],
        markers: [],
        extinct: false,

    LAT, "LAT", "la", "Latin",
        scripts: [Latin],
        markers: [],
        extinct: true,

    LAV, "LAV", "lv", "Latvian",
        scripts: [Latin],
        markers: ['Ā', 'ā', 'Č', 'č', 'Ē', 'ē', 'Ģ', 'ģ', 'Ī', 'ī', 'Ķ', 'ķ', 'Ļ', 'ļ', 'Ņ', 'ņ', 'Š', 'š', 'Ū', 'ū', 'Ž', 'ž'],
        extinct: false,

    LIT, "LIT", "lt", "Lithuanian",
        scripts: [Latin],
        markers: ['Ą', 'ą', 'Č', 'č', 'Ę', 'ę', 'Ė', 'ė', 'Į', 'į', 'Š', 'š', 'Ų', 'ų', 'Ū', 'ū', 'Ž', 'ž'],
        extinct: false,

    MKD, "MKD", "mk", "Macedonian",
        scripts: [Cyrillic],
        markers: ['Ѓ', 'ѓ', 'Ѕ', 'ѕ', 'Ќ', 'ќ', 'Ј', 'ј', 'Љ', 'љ', 'Њ', 'њ', 'Џ', 'џ'],
        extinct: false,

    MSA, "MSA", "ms", "Malay",
        scripts: [Latin],
        markers: [],
        extinct: false,

    MRI, "MRI", "mi", "Maori",
        scripts: [Latin],
        markers: ['Ā', 'ā', 'Ē', 'ē', 'Ī', 'ī', 'Ō', 'ō', 'Ū', 'ū'],
        extinct: false,

    MAR, "MAR", "mr", "Marathi",
        scripts: [Devanagari],
        markers: ['ळ'],
        extinct: false,

    MON, "MON", "mn", "Mongolian",
        scripts: [Cyrillic],
        markers: ['Ө', 'ө', 'Ү', 'ү', 'Ё', 'ё', 'Ы', 'ы', 'Э', 'э'],
        extinct: false,

    NNO, "NNO", "nn", "Nynorsk",
        scripts: [Latin],
        markers: ['Å', 'å', 'Æ', 'æ', 'Ø', 'ø'],
        extinct: false,

    FAS, "FAS", "fa", "Persian",
        scripts: [Arabic],
        markers: [],
        extinct: false,

    POL, "POL", "pl", "Polish",
        scripts: [Latin],
        markers: ['Ą', 'ą', 'Ć', 'ć', 'Ę', 'ę', 'Ł', 'ł', 'Ń', 'ń', 'Ś', 'ś', 'Ź', 'ź', 'Ż', 'ż'],
        extinct: false,

    POR, "POR", "pt", "Portuguese",
        scripts: [Latin],
        markers: ['Â', 'â', 'Ã', 'ã', 'Ç', 'ç', 'Ô', 'ô', 'Õ', 'õ'],
        extinct: false,

    PAN, "PAN", "pa", "Punjabi",
        scripts: [Gurmukhi],
        markers: [],
        extinct: false,

    RON, "RON", "ro", "Romanian",
        scripts: [Latin],
        markers: ['Ă', 'ă', 'Â', 'â', 'Î', 'î', 'Ș', 'ș', 'Ț', 'ț'],
        extinct: false,

    RUS, "RUS", "ru", "Russian",
        scripts: [Cyrillic],
        markers: ['Ё', 'ё', 'Ы', 'ы', 'Э', 'э'],
        extinct: false,

    SRP, "SRP", "sr", "Serbian",
        scripts: [Cyrillic],
        markers: ['Ђ', 'ђ', 'Ћ', 'ћ', 'Ј', 'ј', 'Љ', 'љ', 'Њ', 'њ', 'Џ', 'џ'],
        extinct: false,

    SNA, "SNA", "sn", "Shona",
        scripts: [Latin],
        markers: [],
        extinct: false,

    SLK, "SLK", "sk", "Slovak",
        scripts: [Latin],
        markers: ['Ä', 'ä', 'Č', 'č', 'Ď', 'ď', 'Ĺ', 'ĺ', 'Ľ', 'ľ', 'Ň', 'ň', 'Ô', 'ô', 'Ŕ', 'ŕ', 'Š', 'š', 'Ť', 'ť', 'Ž', 'ž'],
        extinct: false,

    SLV, "SLV", "sl", "Slovene",
        scripts: [Latin],
        markers: ['Č', 'č', 'Š', 'š', 'Ž', 'ž'],
        extinct: false,

    SOM, "SOM", "so", "Somali",
        scripts: [Latin],
        markers: [],
        extinct: false,

    SOT, "SOT", "st", "Sotho",
        scripts: [Latin],
        markers: [],
        extinct: false,

    SPA, "SPA", "es", "Spanish",
        scripts: [Latin],
        markers: ['Ñ', 'ñ', 'Ü', 'ü'],
        extinct: false,

    SWA, "SWA", "sw", "Swahili",
        scripts: [Latin],
        markers: [],
        extinct: false,

    SWE, "SWE", "sv", "Swedish",
        scripts: [Latin],
        markers: ['Å', 'å', 'Ä', 'ä', 'Ö', 'ö'],
        extinct: false,

    TGL, "TGL", "tl", "Tagalog",
        scripts: [Latin],
        markers: [],
        extinct: false,

    TAM, "TAM", "ta", "Tamil",
        scripts: [Tamil],
        markers: [],
        extinct: false,

    TEL, "TEL", "te", "Telugu",
        scripts: [Telugu],
        markers: [],
        extinct: false,

    THA, "THA", "th", "Thai",
        scripts: [Thai],
        markers: [],
        extinct: false,

    TSO, "TSO", "ts", "Tsonga",
        scripts: [Latin],
        markers: [],
        extinct: false,

    TSN, "TSN", "tn", "Tswana",
        scripts: [Latin],
        markers: [],
        extinct: false,

    TUR, "TUR", "tr", "Turkish",
        scripts: [Latin],
        markers: ['Â', 'â', 'Ç', 'ç', 'Ğ', 'ğ', 'İ', 'ı', 'Ö', 'ö', 'Ş', 'ş', 'Ü', 'ü'],
        extinct: false,

    UKR, "UKR", "uk", "Ukrainian",
        scripts: [Cyrillic],
        markers: ['Ґ', 'ґ', 'Є', 'є', 'І', 'і', 'Ї', 'ї'],
        extinct: false,

    URD, "URD", "ur", "Urdu",
        scripts: [Arabic],
        markers: [],
        extinct: false,

    VIE, "VIE", "vi", "Vietnamese",
        scripts: [Latin],
        markers: ['Ă', 'ă', 'Â', 'â', 'Ã', 'ã', 'Đ', 'đ', 'Ô', 'ô', 'Õ', 'õ', 'Ẹ', 'ẹ', 'Ọ', 'ọ', 'Ơ', 'ơ', 'Ư', 'ư', 'Ạ', 'ạ', 'Ả', 'ả', 'Ấ', 'ấ', 'Ầ', 'ầ', 'Ẩ', 'ẩ', 'Ẫ', 'ẫ', 'Ậ', 'ậ', 'Ắ', 'ắ', 'Ằ', 'ằ', 'Ẳ', 'ẳ', 'Ẵ', 'ẵ', 'Ặ', 'ặ', 'Ẻ', 'ẻ', 'Ẽ', 'ẽ', 'Ế', 'ế', 'Ề', 'ề', 'Ể', 'ể', 'Ễ', 'ễ', 'Ệ', 'ệ', 'Ỉ', 'ỉ', 'Ị', 'ị', 'Ỏ', 'ỏ', 'Ố', 'ố', 'Ồ', 'ồ', 'Ổ', 'ổ', 'Ỗ', 'ỗ', 'Ộ', 'ộ', 'Ớ', 'ớ', 'Ờ', 'ờ', 'Ở', 'ở', 'Ỡ', 'ỡ', 'Ợ', 'ợ', 'Ụ', 'ụ', 'Ủ', 'ủ', 'Ứ', 'ứ', 'Ừ', 'ừ', 'Ử', 'ử', 'Ữ', 'ữ', 'Ự', 'ự', 'Ỳ', 'ỳ', 'Ỵ', 'ỵ', 'Ỷ', 'ỷ', 'Ỹ', 'ỹ', 'Ĩ', 'ĩ', 'Ũ', 'ũ'],
        extinct: false,

    CYM, "CYM", "cy", "Welsh",
        scripts: [Latin],
        markers: ['Ŵ', 'ŵ', 'Ŷ', 'ŷ'],
        extinct: false,

    XHO, "XHO", "xh", "Xhosa",
        scripts: [Latin],
        markers: [],
        extinct: false,

    YOR, "YOR", "yo", "Yoruba",
        scripts: [Latin],
        markers: ['Ń', 'ń', 'Ẹ', 'ẹ', 'Ọ', 'ọ', 'Ṣ', 'ṣ'],
        extinct: false,

    ZUL, "ZUL", "zu", "Zulu",
        scripts: [Latin],
        markers: [],
        extinct: false,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::marker_owners;
    use std::collections::HashSet;

    #[test]
    fn table_is_complete() {
        assert_eq!(ALL_LANGUAGES.len(), 75);
        assert_eq!(LANG_TABLE.len(), ALL_LANGUAGES.len());
        for lang in all_languages() {
            assert!(LANG_TABLE.get(lang.code()).is_some(), "{} missing", lang.code());
            assert!(!lang.scripts().is_empty(), "{} has no script", lang.code());
        }
    }

    #[test]
    fn codes_are_distinct() {
        let iso3: HashSet<_> = ALL_LANGUAGES.iter().map(|l| l.code()).collect();
        let iso1: HashSet<_> = ALL_LANGUAGES.iter().map(|l| l.iso_639_1()).collect();
        assert_eq!(iso3.len(), ALL_LANGUAGES.len());
        assert_eq!(iso1.len(), ALL_LANGUAGES.len());
    }

    #[test]
    fn declaration_order_is_alphabetical() {
        let names: Vec<_> = ALL_LANGUAGES.iter().map(|l| l.name()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(from_code("DEU"), Some(DEU));
        assert_eq!(from_code("deu"), Some(DEU));
        assert_eq!(from_code("XXX"), None);
        assert_eq!(from_iso_639_1("en"), Some(ENG));
        assert_eq!(from_iso_639_1("EN"), Some(ENG));
        assert_eq!(from_iso_639_1("zz"), None);
    }

    #[test]
    fn marker_owners_mirror_the_language_lists() {
        for lang in all_languages() {
            for &c in lang.marker_chars() {
                assert!(marker_owners(c).contains(lang), "'{c}' lost {}", lang.code());
            }
        }
        for (&c, owners) in MARKER_OWNERS.iter() {
            for owner in owners {
                assert!(owner.marker_chars().contains(&c), "'{c}' gained {}", owner.code());
            }
            let positions: Vec<_> = owners
                .iter()
                .map(|o| ALL_LANGUAGES.iter().position(|l| l == o))
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "'{c}' out of order");
        }
    }

    #[test]
    fn markers_belong_to_the_language_script() {
        for lang in all_languages() {
            for &c in lang.marker_chars() {
                let script = crate::unicode::script_of(c).expect("markers are letters");
                assert!(lang.uses_script(script), "{}: '{c}' is {script}", lang.code());
            }
        }
    }

    #[test]
    fn german_metadata() {
        assert!(DEU.marker_chars().contains(&'ß'));
        assert_eq!(marker_owners('ß'), &[DEU]);
        assert_eq!(marker_owners('ä'), &[EST, FIN, DEU, SLK, SWE]);
        assert!(marker_owners('a').is_empty());
        assert!(marker_owners('é').is_empty());
        assert_eq!(DEU.to_string(), "German");
    }

    #[test]
    fn shared_cyrillic_letters_list_every_writer() {
        assert_eq!(marker_owners('ө'), &[KAZ, MON]);
        assert_eq!(marker_owners('Ү'), &[KAZ, MON]);
        assert_eq!(marker_owners('і'), &[BEL, KAZ, UKR]);
        assert_eq!(marker_owners('ў'), &[BEL]);
        assert_eq!(marker_owners('ї'), &[UKR]);
    }

    #[test]
    fn japanese_uses_three_scripts() {
        assert_eq!(
            JPN.scripts().iter().collect::<Vec<_>>(),
            vec![Script::Han, Script::Hiragana, Script::Katakana]
        );
        assert!(JPN.uses_script(Script::Han));
        assert!(ZHO.uses_script(Script::Han));
        assert!(!ZHO.uses_script(Script::Hiragana));
    }

    #[test]
    fn only_latin_is_extinct() {
        let extinct: Vec<_> = all_languages().iter().filter(|l| l.is_extinct()).collect();
        assert_eq!(extinct, vec![&LAT]);
    }
}
