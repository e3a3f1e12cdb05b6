use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but its value cannot be parsed.
    ///
    /// Check the documentation or `.env.example` file for the expected format of the
    /// variable named in the message.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the offending environment variable
        name: String,
        /// The raw value that failed to parse
        value: String,
        /// Why the value was rejected
        reason: String,
    },
}
