//! Log-probability scoring and confidence normalisation.
//!
//! A language's score is
//!
//! ```text
//! Σ_order  w(order) · Σ_ngram  count(ngram) · ln p(ngram | language)
//! ```
//!
//! where `w(order) = order / 5`, so matches of long n-grams outweigh the
//! unigram and bigram fallback signal. An n-gram missing from the table costs
//! a fixed log probability floor instead of removing the language. Scores are
//! unnormalised and only comparable within one call.

use crate::config::DEFAULT_UNSEEN_LOG_PROBABILITY;
use crate::model::{FrequencyTable, NgramOrder};
use crate::ngram::ExtractedNgrams;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scorer {
    unseen_log_probability: f64,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(DEFAULT_UNSEEN_LOG_PROBABILITY)
    }
}

impl Scorer {
    pub const fn new(unseen_log_probability: f64) -> Self {
        Self {
            unseen_log_probability,
        }
    }

    #[inline]
    pub const fn unseen_log_probability(&self) -> f64 {
        self.unseen_log_probability
    }

    #[inline(always)]
    pub fn order_weight(order: NgramOrder) -> f64 {
        order.value() as f64 / NgramOrder::MAX as f64
    }

    /// Scores one language. `tables` holds that language's table for each
    /// order present in `ngrams`; an order without a table counts every one of
    /// its n-grams as unseen.
    pub fn score(&self, ngrams: &ExtractedNgrams, tables: &[Arc<FrequencyTable>]) -> f64 {
        let mut total = 0.0;
        for (order, counts) in ngrams.iter_descending() {
            let table = tables.iter().find(|t| t.order() == order);
            let mut order_sum = 0.0;
            for (ngram, &count) in counts {
                let log_p = table
                    .and_then(|t| t.log_probability(ngram))
                    .unwrap_or(self.unseen_log_probability);
                order_sum += f64::from(count) * log_p;
            }
            total += Self::order_weight(order) * order_sum;
        }
        total
    }
}

/// Turns log scores into probabilities that sum to one (log-sum-exp, shifted by
/// the maximum so long texts never underflow to all zeros).
pub fn confidences(scores: &[f64]) -> Vec<f64> {
    let Some(max) = scores.iter().copied().reduce(f64::max) else {
        return Vec::new();
    };
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::data::ENG;

    fn table(order: NgramOrder, entries: &[(&str, f64)]) -> Arc<FrequencyTable> {
        Arc::new(FrequencyTable::new(ENG, order, entries.iter().copied()).unwrap())
    }

    #[test]
    fn seen_ngrams_add_weighted_log_probabilities() {
        let ngrams = ExtractedNgrams::extract("abab", &[NgramOrder::Bigram]);
        // ab ×2, ba ×1
        let tables = [table(NgramOrder::Bigram, &[("ab", 0.5), ("ba", 0.25)])];
        let expected = 0.4 * (2.0 * 0.5f64.ln() + 0.25f64.ln());
        let score = Scorer::default().score(&ngrams, &tables);
        assert!((score - expected).abs() < 1e-12, "{score} vs {expected}");
    }

    #[test]
    fn unseen_ngrams_cost_the_floor_instead_of_eliminating() {
        let ngrams = ExtractedNgrams::extract("abx", &[NgramOrder::Bigram]);
        let tables = [table(NgramOrder::Bigram, &[("ab", 0.5)])];
        let scorer = Scorer::new(-10.0);
        let score = scorer.score(&ngrams, &tables);
        let expected = 0.4 * (0.5f64.ln() - 10.0);
        assert!(score.is_finite());
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn missing_table_treats_every_ngram_as_unseen() {
        let ngrams = ExtractedNgrams::extract("abc", &[NgramOrder::Unigram]);
        let score = Scorer::new(-5.0).score(&ngrams, &[]);
        assert!((score - 0.2 * 3.0 * -5.0).abs() < 1e-12);
    }

    #[test]
    fn higher_orders_weigh_more() {
        assert!(Scorer::order_weight(NgramOrder::Fivegram) > Scorer::order_weight(NgramOrder::Trigram));
        assert_eq!(Scorer::order_weight(NgramOrder::Fivegram), 1.0);
        assert_eq!(Scorer::order_weight(NgramOrder::Unigram), 0.2);
    }

    #[test]
    fn better_matching_language_scores_higher() {
        let ngrams = ExtractedNgrams::extract("the", &NgramOrder::ALL);
        let good = [
            table(NgramOrder::Unigram, &[("t", 0.1), ("h", 0.05), ("e", 0.12)]),
            table(NgramOrder::Bigram, &[("th", 0.3), ("he", 0.4)]),
            table(NgramOrder::Trigram, &[("the", 0.6)]),
        ];
        let poor = [table(NgramOrder::Unigram, &[("t", 0.1), ("h", 0.05), ("e", 0.12)])];
        let scorer = Scorer::default();
        assert!(scorer.score(&ngrams, &good) > scorer.score(&ngrams, &poor));
    }

    #[test]
    fn confidences_form_a_distribution() {
        let values = confidences(&[-1.0, -2.0, -3.0]);
        let sum: f64 = values.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!(values[0] > values[1] && values[1] > values[2]);
        assert!(confidences(&[]).is_empty());
    }

    #[test]
    fn confidences_survive_huge_negative_scores() {
        let values = confidences(&[-100_000.0, -100_010.0]);
        assert!(values.iter().all(|v| v.is_finite()));
        assert!((values.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!(values[0] > 0.99);
    }

    #[test]
    fn equal_scores_share_confidence() {
        let values = confidences(&[-7.0, -7.0, -7.0, -7.0]);
        assert!(values.iter().all(|v| (v - 0.25).abs() < 1e-12));
    }
}
