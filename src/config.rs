// src/config.rs
// Immutable per-detector settings. Tiny, Copy, and read on every call.

use thiserror::Error;

/// Longest text (in chars) scored with every n-gram order. Longer text is
/// scored with trigrams only.
pub const HIGH_ACCURACY_MODE_MAX_TEXT_LENGTH: usize = 120;

/// `ln(1e-7)`: the log probability charged for an n-gram a language model has
/// never seen.
pub const DEFAULT_UNSEEN_LOG_PROBABILITY: f64 = -16.118_095_650_958_32;

/// Margin check disabled: the best candidate always wins, exact ties go to the
/// earlier-declared language.
pub const DEFAULT_MINIMUM_RELATIVE_DISTANCE: f64 = 0.0;

pub const MAX_MINIMUM_RELATIVE_DISTANCE: f64 = 0.99;

/// Environment variable naming the model directory of the global cache.
pub const MODEL_DIR_ENV: &str = "LINGDET_MODEL_DIR";
pub const DEFAULT_MODEL_DIR: &str = "models";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("no languages configured: a detector needs at least one candidate")]
    EmptyLanguageSet,
    #[error("unknown ISO 639 code `{0}`")]
    UnknownIsoCode(String),
    #[error("minimum relative distance {0} is outside [0.0, {MAX_MINIMUM_RELATIVE_DISTANCE}]")]
    InvalidMinimumRelativeDistance(f64),
    #[error("unseen n-gram log probability {0} must be finite and negative")]
    InvalidUnseenLogProbability(f64),
    #[error("the global model cache is already initialised")]
    GlobalCacheInitialized,
}

/// Runtime settings handed to the scorer and ranking step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorConfig {
    pub minimum_relative_distance: f64,
    pub low_accuracy_mode: bool,
    pub unseen_log_probability: f64,
    pub preload_models: bool,
}

impl Default for DetectorConfig {
    #[inline(always)]
    fn default() -> Self {
        Self {
            minimum_relative_distance: DEFAULT_MINIMUM_RELATIVE_DISTANCE,
            low_accuracy_mode: false,
            unseen_log_probability: DEFAULT_UNSEEN_LOG_PROBABILITY,
            preload_models: false,
        }
    }
}

impl DetectorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let distance = self.minimum_relative_distance;
        if !(0.0..=MAX_MINIMUM_RELATIVE_DISTANCE).contains(&distance) {
            return Err(ConfigError::InvalidMinimumRelativeDistance(distance));
        }
        let floor = self.unseen_log_probability;
        if !floor.is_finite() || floor >= 0.0 {
            return Err(ConfigError::InvalidUnseenLogProbability(floor));
        }
        Ok(())
    }
}
