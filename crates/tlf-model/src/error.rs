use thiserror::Error;

#[derive(Debug, Error)]
pub enum TlfError {
    #[error("no 'outfile' marker rows found in the export; nothing to segment")]
    MissingSequenceMarker,
    #[error("duplicate toc numbers across outputs: {}", .duplicates.join(", "))]
    DuplicateIdentifier { duplicates: Vec<String> },
    #[error("missing required column(s): {0}")]
    MissingColumn(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, TlfError>;
