//! Whole-word, case-insensitive matchers for the gendered forms of each category

use lazy_regex::regex;
use regex::Regex;

use crate::pronoun::Category;

pub fn pattern_for(category: Category) -> &'static Regex {
    match category {
        Category::NominativeSubject => regex!(r"\b(?i-u:he|she)\b"),
        Category::ObliqueObject => regex!(r"\b(?i-u:him|her)\b"),
        Category::PossessiveDeterminer => regex!(r"\b(?i-u:his|her)\b"),
        Category::PossessivePronoun => regex!(r"\b(?i-u:his|hers)\b"),
        Category::Reflexive => regex!(r"\b(?i-u:himself|herself)\b"),
    }
}
