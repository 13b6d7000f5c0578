use thiserror::Error;

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("Unknown atom type name '{name}' on line {line}")]
    UnknownTypeName { name: String, line: usize },

    #[error("Original type index {index} is out of range for {len} types")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}
