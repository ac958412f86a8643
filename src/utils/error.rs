use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("non-finite value for {0}")]
    NonFinite(&'static str),

    #[error("{0} must be non-negative, got {1}")]
    Negative(&'static str, f32),

    #[error("{0} must be positive, got {1}")]
    NotPositive(&'static str, f32),

    #[error("{0} must lie in [{1}, {2}], got {3}")]
    OutOfRange(&'static str, f32, f32, f32),
}
