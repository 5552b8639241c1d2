/// Errors that can occur while delivering alerts.
///
/// # Examples
///
/// ```rust
/// use vitalwatch_notify::error::NotifyError;
///
/// let err = NotifyError::Unavailable("pager gateway offline".to_string());
/// assert!(err.to_string().contains("offline"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// Writing to a file-backed sink failed.
    #[error("Notify: I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The sink is temporarily unable to accept alerts.
    #[error("Notify: sink unavailable: {0}")]
    Unavailable(String),
}

/// Convenience `Result` alias for notification operations.
pub type Result<T> = std::result::Result<T, NotifyError>;
