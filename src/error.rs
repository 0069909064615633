//! Error taxonomy. Deliberately tiny: synthesis itself performs no
//! validation beyond the single root-shape precondition; everything else
//! (I/O, parsing) surfaces through `anyhow` in the CLI layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The sample (or the pointer-selected subnode) is not a JSON object.
    /// Class synthesis needs string keys to name fields from.
    #[error("invalid sample: the root must be a JSON object, not an array or scalar")]
    InvalidSample,

    /// `--json-pointer` selected nothing in the document.
    #[error("JSON pointer `{0}` selects nothing in the input document")]
    PointerNotFound(String),
}
