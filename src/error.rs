use thiserror::Error;

/// Reasons a search result is rejected by [`crate::data_models::SearchResult::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResultError {
    #[error("result entry has an empty url")]
    EmptyUrl,

    #[error("{location}: range {beginning}..{end} is inverted")]
    InvertedRange {
        location: String,
        beginning: usize,
        end: usize,
    },

    #[error("{location}: range {beginning}..{end} exceeds text length {len}")]
    RangeOutOfBounds {
        location: String,
        beginning: usize,
        end: usize,
        len: usize,
    },

    #[error("{location}: range starting at {beginning} overlaps or precedes the previous range ending at {previous_end}")]
    UnorderedRange {
        location: String,
        beginning: usize,
        previous_end: usize,
    },
}
