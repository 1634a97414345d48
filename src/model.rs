//! Per-language statistical models.
//!
//! A [`FrequencyTable`] holds the relative frequencies of every n-gram of one
//! order seen in one language's training data. Tables are built once by a
//! [`ModelSource`](source::ModelSource), published through the
//! [`ModelCache`](cache::ModelCache) and never mutated afterwards.

pub mod cache;
pub mod source;

use crate::lang::Language;
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

pub use cache::ModelCache;
pub use source::{CorpusModelSource, JsonModelSource, ModelSource};

/// Length of an n-gram in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum NgramOrder {
    Unigram = 1,
    Bigram = 2,
    Trigram = 3,
    Quadrigram = 4,
    Fivegram = 5,
}

impl NgramOrder {
    /// Highest order any model carries.
    pub const MAX: usize = 5;

    pub const ALL: [NgramOrder; 5] = [
        NgramOrder::Unigram,
        NgramOrder::Bigram,
        NgramOrder::Trigram,
        NgramOrder::Quadrigram,
        NgramOrder::Fivegram,
    ];

    #[inline(always)]
    pub const fn value(self) -> usize {
        self as usize
    }

    pub const fn from_value(n: usize) -> Option<Self> {
        match n {
            1 => Some(NgramOrder::Unigram),
            2 => Some(NgramOrder::Bigram),
            3 => Some(NgramOrder::Trigram),
            4 => Some(NgramOrder::Quadrigram),
            5 => Some(NgramOrder::Fivegram),
            _ => None,
        }
    }

    /// The next lower order, `None` for unigrams.
    #[inline]
    pub const fn lower(self) -> Option<Self> {
        Self::from_value(self.value() - 1)
    }

    /// File stem used by on-disk models (`trigrams.json`).
    pub const fn file_stem(self) -> &'static str {
        match self {
            NgramOrder::Unigram => "unigrams",
            NgramOrder::Bigram => "bigrams",
            NgramOrder::Trigram => "trigrams",
            NgramOrder::Quadrigram => "quadrigrams",
            NgramOrder::Fivegram => "fivegrams",
        }
    }
}

impl fmt::Display for NgramOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stem = self.file_stem();
        f.write_str(&stem[..stem.len() - 1])
    }
}

/// Failure to produce a model for one (language, order) key.
///
/// `Clone` because a failed load is published once and handed to every caller
/// that asks for the same key afterwards.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("no {order} model available for {language}")]
    NotFound {
        language: Language,
        order: NgramOrder,
    },

    #[error("malformed {order} model for {language}: {reason}")]
    Malformed {
        language: Language,
        order: NgramOrder,
        reason: String,
    },

    #[error("failed to read {order} model for {language} from `{path}`: {reason}")]
    Io {
        language: Language,
        order: NgramOrder,
        path: String,
        reason: String,
    },
}

impl ModelError {
    pub(crate) fn malformed(language: Language, order: NgramOrder, reason: impl Into<String>) -> Self {
        ModelError::Malformed {
            language,
            order,
            reason: reason.into(),
        }
    }
}

/// Relative frequencies of the n-grams of one order in one language.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    language: Language,
    order: NgramOrder,
    frequencies: FxHashMap<Box<str>, f64>,
}

impl FrequencyTable {
    /// Builds a table, rejecting n-grams of the wrong length, duplicates and
    /// frequencies outside `(0, 1]`.
    pub fn new<I, S>(language: Language, order: NgramOrder, entries: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<Box<str>>,
    {
        let entries = entries.into_iter();
        let mut frequencies =
            FxHashMap::with_capacity_and_hasher(entries.size_hint().0, Default::default());

        for (ngram, frequency) in entries {
            let ngram: Box<str> = ngram.into();
            let len = ngram.chars().count();
            if len != order.value() {
                return Err(ModelError::malformed(
                    language,
                    order,
                    format!("n-gram `{ngram}` has {len} chars"),
                ));
            }
            if !(frequency > 0.0 && frequency <= 1.0) {
                return Err(ModelError::malformed(
                    language,
                    order,
                    format!("frequency {frequency} of `{ngram}` is outside (0, 1]"),
                ));
            }
            if let Some(previous) = frequencies.insert(ngram, frequency) {
                return Err(ModelError::malformed(
                    language,
                    order,
                    format!("n-gram listed twice (previous frequency {previous})"),
                ));
            }
        }

        Ok(Self {
            language,
            order,
            frequencies,
        })
    }

    /// Trains a table from raw text: unigram frequency is its share of all
    /// unigrams, higher orders are conditioned on their (n-1)-gram prefix.
    pub fn from_corpus(language: Language, order: NgramOrder, corpus: &str) -> Self {
        let frequencies = source::relative_frequencies(order, corpus)
            .into_iter()
            .map(|(ngram, (numerator, denominator))| (ngram, numerator as f64 / denominator as f64))
            .collect();
        Self {
            language,
            order,
            frequencies,
        }
    }

    #[inline]
    pub fn language(&self) -> Language {
        self.language
    }

    #[inline]
    pub fn order(&self) -> NgramOrder {
        self.order
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    #[inline]
    pub fn probability(&self, ngram: &str) -> Option<f64> {
        self.frequencies.get(ngram).copied()
    }

    #[inline]
    pub fn log_probability(&self, ngram: &str) -> Option<f64> {
        self.probability(ngram).map(f64::ln)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.frequencies.iter().map(|(k, v)| (k.as_ref(), *v))
    }
}
