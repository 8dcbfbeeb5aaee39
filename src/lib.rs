//! Gender-neutral pronoun rewriting
//!
//! Replaces gendered third-person pronouns (he/she, him/her, his/her,
//! his/hers, himself/herself) with a neutral pronoun set while keeping the
//! capitalization of each replaced word.
//!
//! ```
//! assert_eq!(
//!     neutral::neutralize("She admired herself.", None),
//!     "They admired themself."
//! );
//! assert_eq!(
//!     neutral::neutralize("He was late.", Some("xe")),
//!     "Xe were late."
//! );
//! ```

pub mod engine;
pub mod error;
pub mod pronoun;

pub use engine::{
    AgreementScope, Neutralizer, neutralize, neutralize_nominative_subjects, neutralize_oblique_objects,
    neutralize_possessive_determiners, neutralize_possessive_pronouns, neutralize_reflexives,
};
pub use error::NeutralError;
pub use pronoun::{Category, PronounSet};
