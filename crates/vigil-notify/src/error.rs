/// Errors that can occur while delivering findings.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// Reporter configuration is missing a required value.
    #[error("Notify: invalid reporter configuration: {0}")]
    InvalidConfig(String),

    /// SMTP transport failure.
    #[error("Notify: SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// A sender or recipient address failed to parse.
    #[error("Notify: address error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// Building the outgoing message failed.
    #[error("Notify: message build error: {0}")]
    Message(#[from] lettre::error::Error),
}

/// Convenience `Result` alias for reporting operations.
pub type Result<T> = std::result::Result<T, NotifyError>;
