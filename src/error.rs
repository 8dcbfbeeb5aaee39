use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NeutralError {
    #[error("unknown pronoun set '{name}' (known sets: {known})")]
    UnknownPronounSet { name: String, known: String },
}
