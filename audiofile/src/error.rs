use crate::types::{HeaderField, ID};
use std::io;
use thiserror::Error;

/// The file is corrupt or not in the expected format.
///
/// Every failure of a load surfaces as one of these; the variants only say
/// where things went wrong.
#[derive(Error, Debug)]
pub enum CorruptFile {
    #[error("file is truncated: could not read {field}")]
    Truncated {
        field: HeaderField,
        #[source]
        source: io::Error,
    },
    #[error("{field} is {found}, expected {expected}")]
    BadMagic {
        field: HeaderField,
        expected: ID,
        found: ID,
    },
    #[error("data chunk declares {declared} bytes but only {read} could be read")]
    ShortPayload { declared: u32, read: usize },
    #[error("could not read data chunk")]
    Payload(#[source] io::Error),
}

impl CorruptFile {
    /// The header field (or the data chunk) this error refers to.
    pub fn field(&self) -> HeaderField {
        match self {
            CorruptFile::Truncated { field, .. } | CorruptFile::BadMagic { field, .. } => *field,
            CorruptFile::ShortPayload { .. } | CorruptFile::Payload(_) => HeaderField::Data,
        }
    }
}

pub type Result<T> = std::result::Result<T, CorruptFile>;
