use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraniteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Catalog snapshot error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Image viewer needs at least one image")]
    EmptyImageList,

    #[error("Image index {index} out of range (total: {total})")]
    IndexOutOfRange { index: usize, total: usize },

    #[error("Material not found: {0}")]
    MaterialNotFound(String),

    #[error("Invalid material: {0}")]
    InvalidMaterial(String),

    #[error("Invalid blob locator: {0}")]
    InvalidLocator(String),

    #[error("Not authorized: {0}")]
    Unauthorized(String),
}

pub type Result<T> = std::result::Result<T, GraniteError>;
