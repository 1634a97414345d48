//! Where frequency tables come from.
//!
//! The detector only knows the [`ModelSource`] trait. Two sources ship with the
//! crate: [`JsonModelSource`] reads one JSON file per (language, order) from a
//! directory tree, [`CorpusModelSource`] trains tables in memory from raw text.
//!
//! # On-disk format
//!
//! `<root>/<iso 639-1>/<order>s.json`, e.g. `models/de/trigrams.json`:
//!
//! ```json
//! { "language": "GERMAN", "ngrams": { "1/3": "sch ein", "2/7": "der" } }
//! ```
//!
//! Each key is the relative frequency, as a fraction, shared by the
//! space-separated n-grams of its value.

use crate::config::{DEFAULT_MODEL_DIR, MODEL_DIR_ENV};
use crate::lang::Language;
use crate::model::{FrequencyTable, ModelError, NgramOrder};
use crate::ngram::{ExtractedNgrams, NormalizedText};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// Produces the frequency table for one (language, order) key.
///
/// Called at most once per key by the [`ModelCache`](super::ModelCache); may be
/// slow and may block on I/O.
pub trait ModelSource: Send + Sync {
    fn load(&self, language: Language, order: NgramOrder) -> Result<FrequencyTable, ModelError>;
}

impl<F> ModelSource for F
where
    F: Fn(Language, NgramOrder) -> Result<FrequencyTable, ModelError> + Send + Sync,
{
    #[inline]
    fn load(&self, language: Language, order: NgramOrder) -> Result<FrequencyTable, ModelError> {
        self(language, order)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ModelFile {
    language: String,
    ngrams: BTreeMap<String, String>,
}

/// Reads `<root>/<iso 639-1>/<order>s.json`.
#[derive(Debug, Clone)]
pub struct JsonModelSource {
    root: PathBuf,
}

impl JsonModelSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root taken from `LINGDET_MODEL_DIR`, falling back to `./models`.
    pub fn from_env() -> Self {
        let root = std::env::var_os(MODEL_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_DIR));
        Self::new(root)
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, language: Language, order: NgramOrder) -> PathBuf {
        self.root
            .join(language.iso_639_1())
            .join(format!("{}.json", order.file_stem()))
    }
}

impl ModelSource for JsonModelSource {
    fn load(&self, language: Language, order: NgramOrder) -> Result<FrequencyTable, ModelError> {
        let path = self.path_for(language, order);
        let json = std::fs::read_to_string(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ModelError::NotFound { language, order },
            _ => ModelError::Io {
                language,
                order,
                path: path.display().to_string(),
                reason: err.to_string(),
            },
        })?;
        parse_model_json(language, order, &json)
    }
}

/// Parses the JSON model format for an expected (language, order) key.
pub fn parse_model_json(
    language: Language,
    order: NgramOrder,
    json: &str,
) -> Result<FrequencyTable, ModelError> {
    let file: ModelFile = serde_json::from_str(json)
        .map_err(|err| ModelError::malformed(language, order, err.to_string()))?;

    if !file.language.eq_ignore_ascii_case(language.name()) {
        return Err(ModelError::malformed(
            language,
            order,
            format!("file is for language `{}`", file.language),
        ));
    }

    let mut entries = Vec::new();
    for (fraction, ngrams) in &file.ngrams {
        let frequency = parse_fraction(fraction)
            .ok_or_else(|| ModelError::malformed(language, order, format!("bad fraction `{fraction}`")))?;
        entries.extend(ngrams.split_whitespace().map(|ngram| (ngram, frequency)));
    }
    FrequencyTable::new(language, order, entries)
}

fn parse_fraction(fraction: &str) -> Option<f64> {
    let (numerator, denominator) = fraction.split_once('/')?;
    let numerator: u64 = numerator.trim().parse().ok()?;
    let denominator: u64 = denominator.trim().parse().ok()?;
    if denominator == 0 {
        return None;
    }
    Some(numerator as f64 / denominator as f64)
}

/// Trains tables in memory from per-language text.
#[derive(Debug, Clone, Default)]
pub struct CorpusModelSource {
    corpora: FxHashMap<Language, String>,
}

impl CorpusModelSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or appends to) the training text of `language`.
    pub fn with_corpus(mut self, language: Language, corpus: impl AsRef<str>) -> Self {
        let text = self.corpora.entry(language).or_default();
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(corpus.as_ref());
        self
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.corpora.keys().copied()
    }

    /// Serialises the trained table in the on-disk JSON format read by
    /// [`JsonModelSource`].
    pub fn model_json(&self, language: Language, order: NgramOrder) -> Result<String, ModelError> {
        let corpus = self
            .corpora
            .get(&language)
            .ok_or(ModelError::NotFound { language, order })?;

        let mut grouped: BTreeMap<String, String> = BTreeMap::new();
        for (ngram, (numerator, denominator)) in relative_frequencies(order, corpus) {
            let divisor = gcd(numerator, denominator);
            let key = format!("{}/{}", numerator / divisor, denominator / divisor);
            let ngrams = grouped.entry(key).or_default();
            if !ngrams.is_empty() {
                ngrams.push(' ');
            }
            ngrams.push_str(&ngram);
        }

        let file = ModelFile {
            language: language.name().to_uppercase(),
            ngrams: grouped,
        };
        serde_json::to_string(&file).map_err(|err| ModelError::malformed(language, order, err.to_string()))
    }
}

impl ModelSource for CorpusModelSource {
    fn load(&self, language: Language, order: NgramOrder) -> Result<FrequencyTable, ModelError> {
        let corpus = self
            .corpora
            .get(&language)
            .ok_or(ModelError::NotFound { language, order })?;
        Ok(FrequencyTable::from_corpus(language, order, corpus))
    }
}

/// `(count, denominator)` per n-gram, in first-occurrence order. Unigrams are
/// divided by the total unigram count, higher orders by the count of their
/// (n-1)-gram prefix.
pub(crate) fn relative_frequencies(order: NgramOrder, corpus: &str) -> IndexMap<Box<str>, (u64, u64)> {
    let normalized = NormalizedText::new(corpus);
    let orders: Vec<NgramOrder> = order.lower().into_iter().chain(Some(order)).collect();
    let extracted = ExtractedNgrams::from_words(normalized.words(), &orders);
    let counts = extracted.get(order);

    match order.lower() {
        None => {
            let total = u64::from(extracted.total(order));
            counts
                .iter()
                .map(|(ngram, &count)| (ngram.clone(), (u64::from(count), total)))
                .collect()
        }
        Some(lower) => {
            let prefixes = extracted.get(lower);
            counts
                .iter()
                .filter_map(|(ngram, &count)| {
                    let (last, _) = ngram.char_indices().next_back()?;
                    let prefix_count = *prefixes.get(&ngram[..last])?;
                    Some((ngram.clone(), (u64::from(count), u64::from(prefix_count))))
                })
                .collect()
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}
