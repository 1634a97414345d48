//! Immutable, order-preserving, deduplicated candidate sets.

use crate::config::ConfigError;
use crate::lang::Language;
use crate::lang::data::{ALL_LANGUAGES, from_code, from_iso_639_1};
use crate::unicode::Script;

/// The candidates one detector decides between.
///
/// The order in which languages were declared is kept and is the tie-break
/// order used when two candidates score exactly the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSet {
    languages: Box<[Language]>,
}

impl LanguageSet {
    /// Explicit enumeration. Later duplicates are dropped.
    pub fn from_languages<I>(languages: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = Language>,
    {
        let mut out: Vec<Language> = Vec::new();
        for lang in languages {
            if !out.contains(&lang) {
                out.push(lang);
            }
        }
        if out.is_empty() {
            return Err(ConfigError::EmptyLanguageSet);
        }
        Ok(Self {
            languages: out.into_boxed_slice(),
        })
    }

    pub fn all() -> Self {
        Self {
            languages: ALL_LANGUAGES.into(),
        }
    }

    /// Every language that is still spoken (drops extinct entries such as Latin).
    pub fn all_spoken() -> Self {
        Self {
            languages: ALL_LANGUAGES.iter().copied().filter(Language::is_spoken).collect(),
        }
    }

    pub fn all_with_script(script: Script) -> Result<Self, ConfigError> {
        Self::from_languages(ALL_LANGUAGES.iter().copied().filter(|l| l.uses_script(script)))
    }

    pub fn all_without(excluded: &[Language]) -> Result<Self, ConfigError> {
        Self::from_languages(ALL_LANGUAGES.iter().copied().filter(|l| !excluded.contains(l)))
    }

    pub fn from_iso_codes_639_1<I, S>(codes: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_codes(codes, from_iso_639_1)
    }

    pub fn from_iso_codes_639_3<I, S>(codes: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_codes(codes, from_code)
    }

    fn from_codes<I, S>(codes: I, lookup: fn(&str) -> Option<Language>) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let languages = codes
            .into_iter()
            .map(|code| {
                let code = code.as_ref();
                lookup(code).ok_or_else(|| ConfigError::UnknownIsoCode(code.to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_languages(languages)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Always `false` for a constructed set; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    #[inline]
    pub fn contains(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }

    /// Declaration rank, used to break exact score ties.
    #[inline]
    pub fn position(&self, language: Language) -> Option<usize> {
        self.languages.iter().position(|l| *l == language)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Language] {
        &self.languages
    }

    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Language> + '_ {
        self.languages.iter().copied()
    }
}

impl<'a> IntoIterator for &'a LanguageSet {
    type Item = &'a Language;
    type IntoIter = std::slice::Iter<'a, Language>;

    fn into_iter(self) -> Self::IntoIter {
        self.languages.iter()
    }
}
