use thiserror::Error;

#[derive(Error, Debug)]
pub enum FactoryError {
    #[error("unsupported os: {0}")]
    UnsupportedPlatform(String),

    #[error("unsupported factory: {0}")]
    UnsupportedBrand(String),

    #[error("invalid kind: {0}")]
    InvalidKind(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FactoryError {
    pub fn unsupported_platform<S: Into<String>>(os: S) -> Self {
        Self::UnsupportedPlatform(os.into())
    }

    pub fn unsupported_brand<S: Into<String>>(name: S) -> Self {
        Self::UnsupportedBrand(name.into())
    }

    pub fn invalid_kind<S: ToString>(kind: S) -> Self {
        Self::InvalidKind(kind.to_string())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }
}
