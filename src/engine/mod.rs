//! Pronoun substitution engine
//!
//! Each category pass rewrites the two gendered forms of one grammatical
//! category into the matching word of a pronoun set. A full rewrite runs the
//! passes in [`Category::ORDERED`] order, each on the output of the previous
//! one, so a word replaced by an earlier pass is never matched again.
//! `her` is therefore always treated as an oblique object.

use log::trace;
use serde::{Deserialize, Serialize};

pub mod agreement;
pub mod patterns;
pub mod replace;

use crate::error::NeutralError;
use crate::pronoun::{Category, PronounSet, registry};

/// How many `<subject> was` / `<subject> is` occurrences get corrected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgreementScope {
    /// Every occurrence
    #[default]
    All,
    /// Only the first occurrence of each verb
    First,
}

impl AgreementScope {
    /// Replacement limit for `Regex::replacen` (0 = unlimited)
    pub fn limit(&self) -> usize {
        match self {
            AgreementScope::All => 0,
            AgreementScope::First => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgreementScope::All => "all",
            AgreementScope::First => "first",
        }
    }
}

/// Rewrites text using one resolved pronoun set
#[derive(Debug, Clone)]
pub struct Neutralizer {
    set: &'static PronounSet,
    agreement: AgreementScope,
}

impl Default for Neutralizer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Neutralizer {
    /// Bind to a pronoun set, falling back to `they` for unknown names
    pub fn new(set: Option<&str>) -> Self {
        Self::with_set(registry::resolve(set))
    }

    /// Bind to a pronoun set, failing on unknown names
    pub fn strict(set: Option<&str>) -> Result<Self, NeutralError> {
        registry::resolve_strict(set).map(Self::with_set)
    }

    pub fn with_set(set: &'static PronounSet) -> Self {
        Self {
            set,
            agreement: AgreementScope::default(),
        }
    }

    pub fn with_agreement(mut self, agreement: AgreementScope) -> Self {
        self.agreement = agreement;
        self
    }

    pub fn pronoun_set(&self) -> &'static PronounSet {
        self.set
    }

    /// Apply a single category pass
    pub fn category(&self, category: Category, text: &str) -> String {
        let pattern = patterns::pattern_for(category);
        trace!(
            "{} pass: {} match(es) -> '{}'",
            category,
            pattern.find_iter(text).count(),
            self.set.slot(category)
        );

        let text = replace::safe_replace(text, pattern, self.set.slot(category));
        match category {
            Category::NominativeSubject => agreement::correct(self.set, &text, self.agreement),
            _ => text,
        }
    }

    /// He/She laughed
    pub fn nominative_subjects(&self, text: &str) -> String {
        self.category(Category::NominativeSubject, text)
    }

    /// I called him/her
    pub fn oblique_objects(&self, text: &str) -> String {
        self.category(Category::ObliqueObject, text)
    }

    /// His/Her eyes gleam
    pub fn possessive_determiners(&self, text: &str) -> String {
        self.category(Category::PossessiveDeterminer, text)
    }

    /// That is his/hers
    pub fn possessive_pronouns(&self, text: &str) -> String {
        self.category(Category::PossessivePronoun, text)
    }

    /// He/She likes himself/herself
    pub fn reflexives(&self, text: &str) -> String {
        self.category(Category::Reflexive, text)
    }

    /// Apply every category pass in order
    pub fn neutralize(&self, text: &str) -> String {
        Category::ORDERED
            .iter()
            .fold(text.to_string(), |acc, category| self.category(*category, &acc))
    }
}

pub fn neutralize_nominative_subjects(text: &str, pronoun_set: Option<&str>) -> String {
    Neutralizer::new(pronoun_set).nominative_subjects(text)
}

pub fn neutralize_oblique_objects(text: &str, pronoun_set: Option<&str>) -> String {
    Neutralizer::new(pronoun_set).oblique_objects(text)
}

pub fn neutralize_possessive_determiners(text: &str, pronoun_set: Option<&str>) -> String {
    Neutralizer::new(pronoun_set).possessive_determiners(text)
}

pub fn neutralize_possessive_pronouns(text: &str, pronoun_set: Option<&str>) -> String {
    Neutralizer::new(pronoun_set).possessive_pronouns(text)
}

pub fn neutralize_reflexives(text: &str, pronoun_set: Option<&str>) -> String {
    Neutralizer::new(pronoun_set).reflexives(text)
}

/// Rewrite every gendered pronoun category, defaulting to `they`
pub fn neutralize(text: &str, pronoun_set: Option<&str>) -> String {
    Neutralizer::new(pronoun_set).neutralize(text)
}
