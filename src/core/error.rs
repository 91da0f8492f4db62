use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtoDefaultsError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Duplicate descriptor: {0}")]
    DuplicateDescriptor(String),

    #[error("Invalid descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Unknown message type: {0}")]
    UnknownMessage(String),

    #[error("Expected {expected} default instances, registry produced {actual}")]
    CountMismatch { expected: usize, actual: usize },

    #[error("Instance is not in its default state: {0}")]
    NotDefault(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Disk I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(String),

    #[error("Invalid configuration value: {field} = {value}")]
    InvalidValue { field: String, value: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::TomlParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProtoDefaultsError>;
