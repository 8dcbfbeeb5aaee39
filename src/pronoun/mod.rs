//! Pronoun sets and grammatical categories
//!
//! A pronoun set supplies one word per grammatical category. The registry
//! holds the fixed table of named sets.

use serde::Serialize;

pub mod registry;

pub use registry::DEFAULT_SET;

/// Grammatical categories a pronoun can fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// He/She laughed
    NominativeSubject,
    /// I called him/her
    ObliqueObject,
    /// His/Her eyes gleam
    PossessiveDeterminer,
    /// That is his/hers
    PossessivePronoun,
    /// He/She likes himself/herself
    Reflexive,
}

impl Category {
    /// Categories in the order a full rewrite applies them
    pub const ORDERED: [Category; 5] = [
        Category::NominativeSubject,
        Category::ObliqueObject,
        Category::PossessiveDeterminer,
        Category::PossessivePronoun,
        Category::Reflexive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::NominativeSubject => "nominative-subject",
            Category::ObliqueObject => "oblique-object",
            Category::PossessiveDeterminer => "possessive-determiner",
            Category::PossessivePronoun => "possessive-pronoun",
            Category::Reflexive => "reflexive",
        }
    }

    /// The masculine and feminine words this category rewrites
    pub fn sources(&self) -> [&'static str; 2] {
        match self {
            Category::NominativeSubject => ["he", "she"],
            Category::ObliqueObject => ["him", "her"],
            Category::PossessiveDeterminer => ["his", "her"],
            Category::PossessivePronoun => ["his", "hers"],
            Category::Reflexive => ["himself", "herself"],
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A named set of neutral pronouns, one word per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PronounSet {
    pub name: &'static str,
    pub nominative_subject: &'static str,
    pub oblique_object: &'static str,
    pub possessive_determiner: &'static str,
    pub possessive_pronoun: &'static str,
    pub reflexive: &'static str,
}

impl PronounSet {
    pub fn slot(&self, category: Category) -> &'static str {
        match category {
            Category::NominativeSubject => self.nominative_subject,
            Category::ObliqueObject => self.oblique_object,
            Category::PossessiveDeterminer => self.possessive_determiner,
            Category::PossessivePronoun => self.possessive_pronoun,
            Category::Reflexive => self.reflexive,
        }
    }

    /// Slash-joined summary, e.g. `they/them/their/theirs/themself`
    pub fn summary(&self) -> String {
        Category::ORDERED.iter().map(|c| self.slot(*c)).collect::<Vec<_>>().join("/")
    }
}
