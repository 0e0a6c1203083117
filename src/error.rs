#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortenerError {
    #[error("malformed input '{input}': {reason}")]
    MalformedInput { input: String, reason: String },

    #[error("invalid config field '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },
}

impl ShortenerError {
    pub(crate) fn malformed(input: impl Into<String>, reason: impl ToString) -> Self {
        Self::MalformedInput {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn config(field: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShortenerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_input_display() {
        let error = ShortenerError::MalformedInput {
            input: "a1b".to_string(),
            reason: "Odd number of digits".to_string(),
        };
        assert_eq!(error.to_string(), "malformed input 'a1b': Odd number of digits");
    }

    #[test]
    fn test_invalid_config_display() {
        let error = ShortenerError::InvalidConfig {
            field: "token_length".to_string(),
            reason: "must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "invalid config field 'token_length': must be positive"
        );
    }

    #[test]
    fn test_malformed_helper_wraps_hex_error() {
        let error = ShortenerError::malformed("zz", hex::FromHexError::OddLength);
        match error {
            ShortenerError::MalformedInput { input, reason } => {
                assert_eq!(input, "zz");
                assert!(!reason.is_empty());
            }
            ShortenerError::InvalidConfig { .. } => panic!("Expected MalformedInput error"),
        }
    }

    #[test]
    fn test_config_helper() {
        let error = ShortenerError::config("uri_prefix", "must not be empty");
        assert_eq!(
            error,
            ShortenerError::InvalidConfig {
                field: "uri_prefix".to_string(),
                reason: "must not be empty".to_string(),
            }
        );
    }

    #[test]
    fn test_error_clone() {
        let error1 = ShortenerError::config("token_length", "zero");
        let error2 = error1.clone();
        assert_eq!(error1, error2);
    }

    #[test]
    fn test_result_type_err() {
        let error = ShortenerError::malformed("x", "bad");
        let result: Result<i32> = Err(error.clone());
        assert_eq!(result, Err(error));
    }
}
