//! Registry of known pronoun sets
//!
//! The table is fixed at compile time and indexed once on first use.
//! Lookups trim and lowercase the identifier before matching.

use indexmap::IndexMap;
use log::debug;
use once_cell::sync::Lazy;

use super::PronounSet;
use crate::error::NeutralError;

/// Set used when no identifier is given, or a lenient lookup misses
pub const DEFAULT_SET: &str = "they";

const fn set(
    name: &'static str,
    nominative_subject: &'static str,
    oblique_object: &'static str,
    possessive_determiner: &'static str,
    possessive_pronoun: &'static str,
    reflexive: &'static str,
) -> PronounSet {
    PronounSet {
        name,
        nominative_subject,
        oblique_object,
        possessive_determiner,
        possessive_pronoun,
        reflexive,
    }
}

#[rustfmt::skip]
static PRONOUN_SETS: &[PronounSet] = &[
    set("they", "they", "them", "their", "theirs", "themself"),
    set("e",    "e",    "em",   "eir",   "eirs",   "eirself"),
    set("ey",   "ey",   "em",   "eir",   "eirs",   "emself"),
    set("tho",  "tho",  "thor", "thors", "thor",   "thongself"),
    set("hu",   "hu",   "hum",  "hus",   "hus",    "humself"),
    set("per",  "per",  "per",  "per",   "pers",   "perself"),
    set("thon", "thon", "thon", "thons", "thons",  "thonself"),
    set("jee",  "jee",  "jem",  "jeir",  "jeirs",  "jemself"),
    set("ve",   "ve",   "ver",  "vis",   "vis",    "verself"),
    set("xe",   "xe",   "xem",  "xyr",   "xyrs",   "xemself"),
    set("ze",   "ze",   "mer",  "zer",   "zers",   "zemself"),
    set("zhe",  "zhe",  "zhim", "zher",  "zhers",  "zhimself"),
];

static REGISTRY: Lazy<IndexMap<&'static str, &'static PronounSet>> =
    Lazy::new(|| PRONOUN_SETS.iter().map(|s| (s.name, s)).collect());

fn normalize(id: &str) -> String {
    id.trim().to_ascii_lowercase()
}

/// Look up a pronoun set by identifier
pub fn get(id: &str) -> Option<&'static PronounSet> {
    REGISTRY.get(normalize(id).as_str()).copied()
}

/// The default set
pub fn default_set() -> &'static PronounSet {
    &PRONOUN_SETS[0]
}

/// Resolve an optional identifier, falling back to the default set
/// when it is absent, empty or unknown
pub fn resolve(id: Option<&str>) -> &'static PronounSet {
    match id.map(str::trim).filter(|s| !s.is_empty()) {
        None => default_set(),
        Some(name) => get(name).unwrap_or_else(|| {
            debug!("Unknown pronoun set '{}', falling back to '{}'", name, DEFAULT_SET);
            default_set()
        }),
    }
}

/// Resolve an optional identifier, rejecting unknown names.
/// Absent or empty identifiers still resolve to the default set.
pub fn resolve_strict(id: Option<&str>) -> Result<&'static PronounSet, NeutralError> {
    match id.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(default_set()),
        Some(name) => get(name).ok_or_else(|| NeutralError::UnknownPronounSet {
            name: name.to_string(),
            known: names().collect::<Vec<_>>().join(", "),
        }),
    }
}

/// Registered identifiers in table order
pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.keys().copied()
}

/// Registered sets in table order
pub fn all() -> impl Iterator<Item = &'static PronounSet> {
    REGISTRY.values().copied()
}
