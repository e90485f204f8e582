use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load image: {0:?}")]
    Load(PathBuf, #[source] Box<Error>),

    #[error("Mismatched SPH record at line {0}: {1:?}")]
    MismatchedSphRecord(usize, String),

    #[error("Parse float error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    #[error("Validation Error: {0} should be {1}")]
    Validation(String, String),
}
