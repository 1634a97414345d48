//! Text normalisation and n-gram extraction.
//!
//! Input is NFC-composed and lower-cased, then split into maximal runs of word
//! characters (see [`crate::unicode::is_word_char`]). Digits, punctuation and
//! whitespace are dropped, never replaced by a placeholder. Every word yields
//! its overlapping n-grams for each requested order; words shorter than the
//! order yield none.
//!
//! Counts are kept in first-occurrence order so that every later summation over
//! them happens in the same order on every call.

use crate::model::NgramOrder;
use crate::unicode::is_word_char;
use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::sync::LazyLock;

static ICU4X_NFC: LazyLock<ComposingNormalizerBorrowed> =
    LazyLock::new(ComposingNormalizer::new_nfc);

pub type NgramCounts = IndexMap<Box<str>, u32>;

/// Case-folded, composed text ready for filtering and extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    text: String,
}

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        let composed = ICU4X_NFC.normalize(raw.trim());
        Self {
            text: composed.to_lowercase(),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn words(&self) -> impl Iterator<Item = &str> + Clone {
        split_words(&self.text)
    }

    #[inline]
    pub fn has_words(&self) -> bool {
        self.text.chars().any(is_word_char)
    }

    #[inline]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Maximal runs of word characters.
#[inline]
pub fn split_words(text: &str) -> impl Iterator<Item = &str> + Clone {
    text.split(|c: char| !is_word_char(c)).filter(|w| !w.is_empty())
}

/// N-gram counts per order for one input, computed once and shared by every
/// candidate language.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedNgrams {
    orders: SmallVec<[NgramOrder; 5]>,
    counts: [NgramCounts; NgramOrder::MAX],
}

impl ExtractedNgrams {
    /// Normalises `text` and extracts every requested order.
    pub fn extract(text: &str, orders: &[NgramOrder]) -> Self {
        let normalized = NormalizedText::new(text);
        Self::from_words(normalized.words(), orders)
    }

    /// Extracts from words that are already normalised.
    pub fn from_words<'a, I>(words: I, orders: &[NgramOrder]) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut orders: SmallVec<[NgramOrder; 5]> = orders.iter().copied().collect();
        orders.sort_unstable();
        orders.dedup();

        let mut out = Self {
            orders,
            counts: Default::default(),
        };

        let mut bounds: SmallVec<[usize; 32]> = SmallVec::new();
        for word in words {
            bounds.clear();
            bounds.extend(word.char_indices().map(|(i, _)| i));
            bounds.push(word.len());
            let char_len = bounds.len() - 1;

            for &order in &out.orders {
                let n = order.value();
                if char_len < n {
                    continue;
                }
                let counts = &mut out.counts[n - 1];
                for start in 0..=(char_len - n) {
                    let ngram = &word[bounds[start]..bounds[start + n]];
                    match counts.get_mut(ngram) {
                        Some(count) => *count += 1,
                        None => {
                            counts.insert(ngram.into(), 1);
                        }
                    }
                }
            }
        }
        out
    }

    /// Requested orders, ascending.
    #[inline]
    pub fn orders(&self) -> &[NgramOrder] {
        &self.orders
    }

    #[inline]
    pub fn get(&self, order: NgramOrder) -> &NgramCounts {
        &self.counts[order.value() - 1]
    }

    /// `true` when no requested order produced a single n-gram.
    pub fn is_empty(&self) -> bool {
        self.orders.iter().all(|&o| self.get(o).is_empty())
    }

    /// Total occurrences (not distinct n-grams) for one order.
    pub fn total(&self, order: NgramOrder) -> u32 {
        self.get(order).values().sum()
    }

    /// Requested orders from highest to lowest with their counts.
    pub fn iter_descending(&self) -> impl Iterator<Item = (NgramOrder, &NgramCounts)> {
        self.orders.iter().rev().map(|&o| (o, self.get(o)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_normalization::UnicodeNormalization;

    fn counts_of(map: &NgramCounts) -> Vec<(&str, u32)> {
        map.iter().map(|(k, v)| (k.as_ref(), *v)).collect()
    }

    #[test]
    fn splits_on_punctuation_digits_and_whitespace() {
        let text = NormalizedText::new("  Hello, World!! 42 times—again…  ");
        let words: Vec<_> = text.words().collect();
        assert_eq!(words, vec!["hello", "world", "times", "again"]);
    }

    #[test]
    fn empty_or_symbol_only_text_has_no_words() {
        for input in ["", "   ", "12345", "!!! ??? ...", "3.14 + 2 = 5.14"] {
            let text = NormalizedText::new(input);
            assert!(!text.has_words(), "{input:?}");
            assert_eq!(text.words().count(), 0);
        }
    }

    #[test]
    fn decomposed_input_is_composed_before_lowercasing() {
        let decomposed: String = "CAFÉ Straße".nfd().collect();
        assert_ne!(decomposed, "CAFÉ Straße");
        let text = NormalizedText::new(&decomposed);
        assert_eq!(text.as_str(), "café straße");
    }

    #[test]
    fn sliding_window_counts_overlapping_ngrams() {
        let ngrams = ExtractedNgrams::extract("banana", &[NgramOrder::Bigram, NgramOrder::Trigram]);
        assert_eq!(
            counts_of(ngrams.get(NgramOrder::Bigram)),
            vec![("ba", 1), ("an", 2), ("na", 2)]
        );
        assert_eq!(
            counts_of(ngrams.get(NgramOrder::Trigram)),
            vec![("ban", 1), ("ana", 2), ("nan", 1)]
        );
        assert_eq!(ngrams.total(NgramOrder::Bigram), 5);
    }

    #[test]
    fn ngrams_never_cross_word_boundaries() {
        let ngrams = ExtractedNgrams::extract("ab cd", &[NgramOrder::Trigram, NgramOrder::Bigram]);
        assert!(ngrams.get(NgramOrder::Trigram).is_empty());
        assert_eq!(counts_of(ngrams.get(NgramOrder::Bigram)), vec![("ab", 1), ("cd", 1)]);
    }

    #[test]
    fn short_words_contribute_nothing_at_higher_orders() {
        let ngrams = ExtractedNgrams::extract("a to the", &NgramOrder::ALL);
        assert_eq!(ngrams.total(NgramOrder::Unigram), 6);
        assert_eq!(ngrams.total(NgramOrder::Bigram), 3);
        assert_eq!(ngrams.total(NgramOrder::Trigram), 1);
        assert!(ngrams.get(NgramOrder::Quadrigram).is_empty());
        assert!(!ngrams.is_empty());
    }

    #[test]
    fn multibyte_windows_follow_char_boundaries() {
        let ngrams = ExtractedNgrams::extract("Größe 日本語", &[NgramOrder::Bigram]);
        assert_eq!(
            counts_of(ngrams.get(NgramOrder::Bigram)),
            vec![("gr", 1), ("rö", 1), ("öß", 1), ("ße", 1), ("日本", 1), ("本語", 1)]
        );
    }

    #[test]
    fn unrequested_orders_stay_empty() {
        let ngrams = ExtractedNgrams::extract("languages", &[NgramOrder::Trigram]);
        assert_eq!(ngrams.orders(), &[NgramOrder::Trigram]);
        assert!(ngrams.get(NgramOrder::Unigram).is_empty());
        let orders: Vec<_> = ngrams.iter_descending().map(|(o, _)| o).collect();
        assert_eq!(orders, vec![NgramOrder::Trigram]);
    }

    #[test]
    fn orders_are_iterated_highest_first() {
        let ngrams = ExtractedNgrams::extract("hello", &[NgramOrder::Unigram, NgramOrder::Fivegram, NgramOrder::Trigram]);
        let orders: Vec<_> = ngrams.iter_descending().map(|(o, _)| o).collect();
        assert_eq!(
            orders,
            vec![NgramOrder::Fivegram, NgramOrder::Trigram, NgramOrder::Unigram]
        );
    }
}
