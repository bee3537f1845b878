use thiserror::Error;

/// Errors that can occur while turning a flyer image into recipes
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Configuration file missing, unreadable or malformed
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// The `[openai]` table has no usable api_key
    #[error("Configuration error: openai.api_key is missing or empty")]
    MissingApiKey,

    /// Network failure or undecodable response body
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error ({status}): {body}")]
    ApiStatus { status: u16, body: String },

    /// The API answered 2xx but without a first choice carrying text
    #[error("Malformed API response: {0}")]
    MalformedResponse(String),

    /// Reading the local image or writing the transcript failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RecipeError {
    pub fn is_config(&self) -> bool {
        matches!(self, RecipeError::ConfigError(_) | RecipeError::MissingApiKey)
    }
}

pub type Result<T> = std::result::Result<T, RecipeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_classified() {
        assert!(RecipeError::MissingApiKey.is_config());
        assert!(RecipeError::ConfigError(config::ConfigError::NotFound("openai".into())).is_config());
        assert!(!RecipeError::MalformedResponse("no choices".into()).is_config());
    }

    #[test]
    fn test_api_status_message_includes_body() {
        let err = RecipeError::ApiStatus {
            status: 401,
            body: "invalid key".to_string(),
        };
        assert_eq!(err.to_string(), "API error (401): invalid key");
    }
}
