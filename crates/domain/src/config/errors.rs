use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Validation(String),

    #[error("Unknown record type '{0}' in record table")]
    UnknownRecordType(String),
}
