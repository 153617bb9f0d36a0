use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Perfume not found: {name} by {brand}")]
    PerfumeNotFound { brand: String, name: String },

    #[error("Empty note list for {name} by {brand}")]
    EmptyNoteList { brand: String, name: String },

    #[error("Invalid blend weights: {0}")]
    InvalidWeights(String),
}
