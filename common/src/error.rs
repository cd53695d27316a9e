use thiserror::Error;

/// Reasons a piece of address text could not be decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// CIDR text without a `/prefix` part.
    #[error("missing prefix length in '{0}'")]
    MissingPrefix(String),
    #[error("invalid address '{0}'")]
    InvalidAddress(String),
    #[error("invalid prefix length '{0}'")]
    InvalidPrefix(String),
    #[error("prefix /{prefix} exceeds the {width}-bit address width")]
    PrefixTooLong { prefix: u8, width: u8 },
}
