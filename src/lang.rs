pub mod data;
pub mod set;

use crate::lang::data::{LANG_TABLE, MARKER_OWNERS};
use crate::unicode::{Script, ScriptSet};
use std::fmt;

pub use set::LanguageSet;

/// A language known to the detector. Only ever referenced through the
/// constants in [`data`]; never built at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Language {
    /// ISO 639-3, upper case.
    pub code: &'static str,
    /// ISO 639-1, lower case.
    pub iso_639_1: &'static str,
    pub name: &'static str,
}

impl Language {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn iso_639_1(&self) -> &'static str {
        self.iso_639_1
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline(always)]
    pub fn entry(&self) -> &'static LanguageEntry {
        LANG_TABLE
            .get(self.code)
            .expect("language not present in LANG_TABLE – this is a bug")
    }

    #[inline]
    pub fn scripts(&self) -> ScriptSet {
        self.entry().scripts
    }

    #[inline]
    pub fn uses_script(&self, script: Script) -> bool {
        self.entry().scripts.contains(script)
    }

    /// Distinctive letters this language writes. Other languages may share
    /// them; see [`marker_owners`].
    #[inline]
    pub fn marker_chars(&self) -> &'static [char] {
        self.entry().marker_chars
    }

    #[inline]
    pub fn is_extinct(&self) -> bool {
        self.entry().extinct
    }

    #[inline]
    pub fn is_spoken(&self) -> bool {
        !self.is_extinct()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LanguageEntry {
    pub scripts: ScriptSet,
    pub marker_chars: &'static [char],
    pub extinct: bool,
}

/// Every catalogued language writing the marker `c`, in declaration order.
/// Empty for letters that are not markers.
#[inline]
pub fn marker_owners(c: char) -> &'static [Language] {
    if c.is_ascii() {
        return &[];
    }
    MARKER_OWNERS.get(&c).map(Vec::as_slice).unwrap_or_default()
}
