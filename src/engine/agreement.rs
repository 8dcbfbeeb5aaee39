//! Subject-verb agreement after a nominative rewrite
//!
//! Neutral subjects take plural verbs: `they was` becomes `they were` and
//! `they is` becomes `they are`. One pair of matchers is compiled per
//! registered pronoun set.

use indexmap::IndexMap;
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use super::AgreementScope;
use super::replace::safe_replacen;
use crate::pronoun::{PronounSet, registry};

struct Agreement {
    past: Regex,
    past_fix: String,
    present: Regex,
    present_fix: String,
}

impl Agreement {
    fn for_subject(subject: &str) -> Result<Self, regex::Error> {
        let word = regex::escape(subject);
        Ok(Self {
            past: Regex::new(&format!(r"\b(?i-u:{} +was)\b", word))?,
            past_fix: format!("{} were", subject),
            present: Regex::new(&format!(r"\b(?i-u:{} +is)\b", word))?,
            present_fix: format!("{} are", subject),
        })
    }

    fn apply(&self, text: &str, scope: AgreementScope) -> String {
        let limit = scope.limit();
        let text = safe_replacen(text, &self.past, limit, &self.past_fix);
        safe_replacen(&text, &self.present, limit, &self.present_fix)
    }
}

/// Matchers for the registered subjects, keyed by subject word
static AGREEMENTS: Lazy<IndexMap<&'static str, Agreement>> = Lazy::new(|| {
    registry::all()
        .filter_map(|set| match Agreement::for_subject(set.nominative_subject) {
            Ok(agreement) => Some((set.nominative_subject, agreement)),
            Err(e) => {
                warn!("Skipping verb agreement for subject '{}': {}", set.nominative_subject, e);
                None
            }
        })
        .collect()
});

/// Correct `was`/`is` following the set's subject form.
/// Subjects outside the registry get their matchers compiled per call.
pub fn correct(set: &PronounSet, text: &str, scope: AgreementScope) -> String {
    let subject = set.nominative_subject;
    if let Some(agreement) = AGREEMENTS.get(subject) {
        return agreement.apply(text, scope);
    }

    match Agreement::for_subject(subject) {
        Ok(agreement) => agreement.apply(text, scope),
        Err(e) => {
            warn!("Skipping verb agreement for subject '{}': {}", subject, e);
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn they() -> &'static PronounSet {
        registry::get("they").unwrap()
    }

    #[test]
    fn test_past_and_present() {
        assert_eq!(correct(they(), "they was here", AgreementScope::All), "they were here");
        assert_eq!(correct(they(), "They is here", AgreementScope::All), "They are here");
    }

    #[test]
    fn test_collapses_repeated_spaces() {
        assert_eq!(correct(they(), "they   was", AgreementScope::All), "they were");
    }

    #[test]
    fn test_scope_all_corrects_every_occurrence() {
        assert_eq!(
            correct(they(), "they was tired and they was hungry", AgreementScope::All),
            "they were tired and they were hungry"
        );
    }

    #[test]
    fn test_scope_first_corrects_once_per_verb() {
        assert_eq!(
            correct(they(), "they was tired, they is hungry, they was cold", AgreementScope::First),
            "they were tired, they are hungry, they was cold"
        );
    }

    #[test]
    fn test_whole_words_only() {
        assert_eq!(correct(they(), "they wasted it, they island", AgreementScope::All), "they wasted it, they island");
        let e = registry::get("e").unwrap();
        assert_eq!(correct(e, "the case was", AgreementScope::All), "the case was");
        assert_eq!(correct(e, "E was", AgreementScope::All), "E were");
    }

    #[test]
    fn test_unregistered_subject_is_corrected() {
        let custom = PronounSet {
            name: "they",
            nominative_subject: "fae",
            oblique_object: "faer",
            possessive_determiner: "faer",
            possessive_pronoun: "faers",
            reflexive: "faerself",
        };
        assert_eq!(correct(&custom, "Fae was here, fae is there", AgreementScope::All), "Fae were here, fae are there");
        assert_eq!(correct(&custom, "they was here", AgreementScope::All), "they was here");
    }

    #[test]
    fn test_unicode_folds_do_not_match() {
        assert_eq!(correct(they(), "they waſ", AgreementScope::All), "they waſ");
    }

    #[test]
    fn test_every_registered_set_has_agreement() {
        for set in registry::all() {
            let text = format!("{} was", set.nominative_subject);
            assert_eq!(
                correct(set, &text, AgreementScope::All),
                format!("{} were", set.nominative_subject)
            );
        }
    }
}
