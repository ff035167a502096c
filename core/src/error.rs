//! Error type for the morpheme model.
//!
//! Lookups that find nothing are not errors; they return `None` or an empty
//! list. The variants here cover RootSpace membership and malformed wire
//! input.

use thiserror::Error;

/// Errors surfaced by `ttm-core`.
#[derive(Debug, Error)]
pub enum Error {
    /// A RootSpace was asked to hold a morpheme from another root.
    #[error("morpheme root '{morpheme_root}' doesn't match space root '{space_root}'")]
    RootMismatch {
        /// Root of the rejected morpheme.
        morpheme_root: String,
        /// Root fixed by the space.
        space_root: String,
    },

    /// A required identity field is absent from serialized input.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// A serialized semantic layer carries a level outside 1–4.
    #[error("semantic level {0} is outside the scale 1-4")]
    InvalidLevel(i64),

    /// A serialized field has the wrong shape.
    #[error("malformed morpheme record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for `ttm-core` operations.
pub type Result<T> = std::result::Result<T, Error>;
