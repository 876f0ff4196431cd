//! Error type for file operations (config, PNG export/import)

#[derive(Debug, thiserror::Error)]
pub enum PadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ConfigParse(#[from] ron::error::SpannedError),
    #[error("Serialize error: {0}")]
    ConfigSerialize(#[from] ron::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Image has no pixels")]
    EmptyImage,
}
