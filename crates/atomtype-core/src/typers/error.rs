use thiserror::Error;

use crate::mappers::error::MappingError;

#[derive(Debug, Error)]
pub enum TypingError {
    #[error("Element with atomic number {atomic_number} has no atom type and is not a metal")]
    UnrecognizedElement { atomic_number: u8 },

    #[error("Type index {index} is out of range for {len} types")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Type remapping failed: {source}")]
    Mapping {
        #[from]
        source: MappingError,
    },
}
