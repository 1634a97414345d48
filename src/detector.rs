use thiserror::Error;

use crate::{
    config::{ConfigError, DetectorConfig, HIGH_ACCURACY_MODE_MAX_TEXT_LENGTH},
    filter,
    lang::{Language, LanguageSet},
    model::{FrequencyTable, ModelCache, ModelError, NgramOrder},
    ngram::{ExtractedNgrams, NormalizedText},
    score::{self, Scorer},
    unicode::Script,
};
use std::sync::Arc;
use tracing::{debug, trace};

const ALL_ORDERS: &[NgramOrder] = &NgramOrder::ALL;
const TRIGRAMS_ONLY: &[NgramOrder] = &[NgramOrder::Trigram];

/// Everything that can go wrong besides "could not decide", which is `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DetectorError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

/// Immutable detection engine. Cheap to share across threads; all mutable
/// state lives in the [`ModelCache`].
#[derive(Debug)]
pub struct Detector {
    languages: LanguageSet,
    config: DetectorConfig,
    cache: Arc<ModelCache>,
    scorer: Scorer,
}

impl Detector {
    pub fn builder() -> DetectorBuilder {
        DetectorBuilder::default()
    }

    #[inline]
    pub fn languages(&self) -> &LanguageSet {
        &self.languages
    }

    #[inline]
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    #[inline]
    pub fn model_cache(&self) -> &Arc<ModelCache> {
        &self.cache
    }

    /// Best match, or `None` when the text has no letters or the winner is not
    /// ahead of the runner-up by the configured minimum relative distance.
    pub fn detect_language_of(&self, text: &str) -> Result<Option<Language>, DetectorError> {
        let ranked = self.compute_language_confidence_values(text)?;
        let detected = match ranked.as_slice() {
            [] => None,
            [(only, _)] => Some(*only),
            [(first, top), (_, second), ..] => {
                (top - second >= self.config.minimum_relative_distance).then_some(*first)
            }
        };
        trace!(language = detected.map(|l| l.code()), "detection finished");
        Ok(detected)
    }

    /// Every evaluated candidate with its confidence, highest first. The values
    /// sum to one. Candidates removed by the character filter are absent.
    pub fn compute_language_confidence_values(
        &self,
        text: &str,
    ) -> Result<Vec<(Language, f64)>, DetectorError> {
        let normalized = NormalizedText::new(text);
        if !normalized.has_words() {
            return Ok(Vec::new());
        }

        if let [only] = self.languages.as_slice() {
            return Ok(vec![(*only, 1.0)]);
        }

        let candidates = filter::narrow(normalized.as_str(), self.languages.as_slice());
        if let [only] = candidates.as_slice() {
            trace!(language = only.code(), "decided by character filter");
            return Ok(vec![(*only, 1.0)]);
        }

        let orders = self.orders_for(normalized.char_count());
        let ngrams = ExtractedNgrams::from_words(normalized.words(), orders);
        if ngrams.is_empty() {
            return Ok(Vec::new());
        }

        let mut scored = Vec::with_capacity(candidates.len());
        for &language in &candidates {
            let tables = self.tables_for(language, &ngrams)?;
            let score = self.scorer.score(&ngrams, &tables);
            trace!(language = language.code(), score, "scored");
            scored.push((language, score));
        }

        // Stable: equal scores keep declaration order.
        scored.sort_by(|(_, a), (_, b)| b.total_cmp(a));

        let scores: Vec<f64> = scored.iter().map(|(_, s)| *s).collect();
        let ranked = scored
            .into_iter()
            .zip(score::confidences(&scores))
            .map(|((language, _), confidence)| (language, confidence))
            .collect();
        Ok(ranked)
    }

    /// Confidence for one language, `0.0` when it was not evaluated.
    pub fn compute_language_confidence(
        &self,
        text: &str,
        language: Language,
    ) -> Result<f64, DetectorError> {
        let values = self.compute_language_confidence_values(text)?;
        Ok(values
            .into_iter()
            .find_map(|(l, confidence)| (l == language).then_some(confidence))
            .unwrap_or(0.0))
    }

    fn orders_for(&self, char_count: usize) -> &'static [NgramOrder] {
        if self.config.low_accuracy_mode || char_count >= HIGH_ACCURACY_MODE_MAX_TEXT_LENGTH {
            TRIGRAMS_ONLY
        } else {
            ALL_ORDERS
        }
    }

    /// Only orders that produced n-grams are fetched.
    fn tables_for(
        &self,
        language: Language,
        ngrams: &ExtractedNgrams,
    ) -> Result<Vec<Arc<FrequencyTable>>, ModelError> {
        ngrams
            .orders()
            .iter()
            .filter(|&&order| !ngrams.get(order).is_empty())
            .map(|&order| self.cache.get(language, order))
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct DetectorBuilder {
    languages: Option<Result<LanguageSet, ConfigError>>,
    config: DetectorConfig,
    cache: Option<Arc<ModelCache>>,
}

impl DetectorBuilder {
    pub fn languages<I>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = Language>,
    {
        self.languages = Some(LanguageSet::from_languages(languages));
        self
    }

    pub fn language_set(mut self, languages: LanguageSet) -> Self {
        self.languages = Some(Ok(languages));
        self
    }

    pub fn all_languages(mut self) -> Self {
        self.languages = Some(Ok(LanguageSet::all()));
        self
    }

    pub fn all_spoken_languages(mut self) -> Self {
        self.languages = Some(Ok(LanguageSet::all_spoken()));
        self
    }

    pub fn all_languages_with_script(mut self, script: Script) -> Self {
        self.languages = Some(LanguageSet::all_with_script(script));
        self
    }

    pub fn all_languages_without(mut self, excluded: &[Language]) -> Self {
        self.languages = Some(LanguageSet::all_without(excluded));
        self
    }

    pub fn iso_codes_639_1<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.languages = Some(LanguageSet::from_iso_codes_639_1(codes));
        self
    }

    pub fn iso_codes_639_3<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.languages = Some(LanguageSet::from_iso_codes_639_3(codes));
        self
    }

    /// Load every model the detector may need in [`build`](Self::build)
    /// instead of on first use.
    pub fn preload_language_models(mut self) -> Self {
        self.config.preload_models = true;
        self
    }

    pub fn minimum_relative_distance(mut self, distance: f64) -> Self {
        self.config.minimum_relative_distance = distance;
        self
    }

    /// Trigrams only, regardless of text length.
    pub fn low_accuracy_mode(mut self) -> Self {
        self.config.low_accuracy_mode = true;
        self
    }

    pub fn unseen_log_probability(mut self, log_probability: f64) -> Self {
        self.config.unseen_log_probability = log_probability;
        self
    }

    /// Use this store instead of [`ModelCache::global`].
    pub fn model_cache(mut self, cache: Arc<ModelCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn build(self) -> Result<Detector, DetectorError> {
        let languages = self.languages.unwrap_or(Err(ConfigError::EmptyLanguageSet))?;
        self.config.validate()?;
        let cache = self.cache.unwrap_or_else(ModelCache::global);

        if self.config.preload_models && languages.len() > 1 {
            let orders = if self.config.low_accuracy_mode {
                TRIGRAMS_ONLY
            } else {
                ALL_ORDERS
            };
            cache.preload(languages.as_slice(), orders)?;
        }

        debug!(
            languages = languages.len(),
            low_accuracy = self.config.low_accuracy_mode,
            preload = self.config.preload_models,
            "detector built"
        );
        Ok(Detector {
            scorer: Scorer::new(self.config.unseen_log_probability),
            languages,
            config: self.config,
            cache,
        })
    }
}
