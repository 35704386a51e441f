//! Errors that can happen while setting up the application.
//!
//! Greetings themselves never fail. Everything around them that reads
//! configuration, installs logging or writes output returns an [`AppResult`].

/// An error from the application infrastructure.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be read or deserialized.
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    /// Configuration was read, but some values are not allowed.
    #[error("{0}")]
    Validation(String),
    /// A `.env` file exists but could not be read or parsed.
    #[error("failed to read .env: {0}")]
    Dotenv(#[from] dotenvy::Error),
    /// The global tracing subscriber could not be installed.
    #[error("logging error: {0}")]
    Logging(String),
    /// A command line argument could not be understood.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Writing output failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serde json error.
    #[error("serde json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

/// The result of calling fallible infrastructure functions.
pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = e.field_errors().into_iter().collect();
        fields.sort_by(|(a, _), (b, _)| a.cmp(b));
        let mut invalid_fields = String::new();
        for (k, v) in fields {
            let mut codes = String::new();
            for e in v {
                codes += &format!("{},", e.code);
            }
            let codes = codes.trim_end_matches(',');
            invalid_fields += &format!("{k} ({codes}),");
        }
        let invalid_fields = invalid_fields.trim_end_matches(',');
        AppError::Validation(format!("invalid field(s): {invalid_fields}"))
    }
}
