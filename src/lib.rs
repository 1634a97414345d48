pub mod config;
pub mod detector;
pub mod filter;
pub mod lang;
pub mod model;
pub mod ngram;
pub mod score;
pub mod unicode;

pub use config::{ConfigError, DetectorConfig};
pub use detector::{Detector, DetectorBuilder, DetectorError};
pub use lang::{Language, LanguageSet};
pub use lang::data::{
    AFR, ARA, AZE, BEL, BEN, BOS, BUL, CAT, CES, CYM, DAN, DEU, ELL, ENG, EPO, EST, EUS, FAS, FIN,
    FRA, GLE, GUJ, HEB, HIN, HRV, HUN, HYE, IND, ISL, ITA, JPN, KAT, KAZ, KOR, LAT, LAV, LIT, LUG,
    MAR, MKD, MON, MRI, MSA, NLD, NNO, NOB, PAN, POL, POR, RON, RUS, SLK, SLV, SNA, SOM, SOT, SPA,
    SQI, SRP, SWA, SWE, TAM, TEL, TGL, THA, TSN, TSO, TUR, UKR, URD, VIE, XHO, YOR, ZHO, ZUL,
};
pub use model::{
    CorpusModelSource, FrequencyTable, JsonModelSource, ModelCache, ModelError, ModelSource,
    NgramOrder,
};
pub use unicode::Script;

#[cfg(test)]
mod tests {
    include!("tests/corpus.rs");
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
