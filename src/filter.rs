//! Rule-based candidate narrowing.
//!
//! Runs before any model is touched:
//!
//! 1. Collect the scripts of every word character in the text.
//! 2. Keep only the candidates that write *all* observed scripts. A strict,
//!    non-empty subset replaces the candidate list; Han or Cyrillic text thus
//!    drops every Latin-only candidate without scoring.
//! 3. Collect the marker letters (`ß`, `ä`, `ї`, `ө`, ...). A marker written by
//!    exactly one survivor of step 2 names that survivor; markers written by
//!    none or several of them say nothing. One named language becomes the only
//!    candidate. Two or more are an ambiguous signal and leave step 2's result
//!    as is.
//! 4. Anything else returns the candidates unchanged.
//!
//! Text without any classifiable character is a no-op.

use crate::lang::{Language, marker_owners};
use crate::unicode::{ScriptSet, script_of};
use smallvec::SmallVec;

pub type Candidates = SmallVec<[Language; 8]>;

/// What the filter saw in one text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Observation {
    pub scripts: ScriptSet,
    /// Distinct marker letters, in order of first appearance.
    pub markers: SmallVec<[char; 8]>,
}

impl Observation {
    pub fn of(text: &str) -> Self {
        let mut observation = Observation::default();
        for c in text.chars() {
            let Some(script) = script_of(c) else {
                continue;
            };
            observation.scripts.insert(script);
            if !marker_owners(c).is_empty() && !observation.markers.contains(&c) {
                observation.markers.push(c);
            }
        }
        observation
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}

/// Narrows `candidates` to those consistent with the characters of `text`.
/// Order of the surviving candidates is preserved.
pub fn narrow(text: &str, candidates: &[Language]) -> Candidates {
    narrow_observed(&Observation::of(text), candidates)
}

pub fn narrow_observed(observation: &Observation, candidates: &[Language]) -> Candidates {
    if observation.is_empty() {
        return candidates.into();
    }

    let consistent: Candidates = candidates
        .iter()
        .copied()
        .filter(|l| observation.scripts.is_subset(l.scripts()))
        .collect();
    let narrowed = if consistent.is_empty() {
        tracing::trace!(scripts = ?observation.scripts, "no candidate writes every observed script");
        candidates.into()
    } else {
        consistent
    };

    let mut owners: Candidates = SmallVec::new();
    for &c in &observation.markers {
        let mut writers = marker_owners(c).iter().copied().filter(|l| narrowed.contains(l));
        if let (Some(owner), None) = (writers.next(), writers.next())
            && !owners.contains(&owner)
        {
            owners.push(owner);
        }
    }
    match owners.len() {
        1 => {
            tracing::trace!(language = owners[0].code(), "marker letter short-circuit");
            owners
        }
        0 => narrowed,
        _ => {
            tracing::trace!(owners = owners.len(), "conflicting marker letters, keeping script result");
            narrowed
        }
    }
}
