use thiserror::Error;

pub type Result<T> = std::result::Result<T, PatternError>;

/// One subscriber that rejected an event during fan-out.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryFailure {
    pub position: usize,
    pub reason: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    #[error("unsupported {kind}: '{key}'")]
    UnsupportedVariant { kind: String, key: String },

    #[error("{failed} of {total} subscribers failed to receive the event")]
    DeliveryFailed {
        failed: usize,
        total: usize,
        failures: Vec<DeliveryFailure>,
    },

    #[error("invalid settings in {source_name}: {message}")]
    Config { source_name: String, message: String },
}

impl PatternError {
    pub fn unsupported(kind: impl Into<String>, key: impl Into<String>) -> Self {
        Self::UnsupportedVariant {
            kind: kind.into(),
            key: key.into(),
        }
    }

    pub fn config(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedVariant { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_display_names_key() {
        let error = PatternError::unsupported("payment provider", "bitcoin");
        let display = error.to_string();
        assert!(display.contains("payment provider"));
        assert!(display.contains("'bitcoin'"));
        assert!(error.is_unsupported());
    }

    #[test]
    fn test_delivery_failed_display() {
        let error = PatternError::DeliveryFailed {
            failed: 1,
            total: 3,
            failures: vec![DeliveryFailure {
                position: 2,
                reason: "mailbox full".to_string(),
            }],
        };
        assert_eq!(
            error.to_string(),
            "1 of 3 subscribers failed to receive the event"
        );
        assert!(!error.is_unsupported());
    }

    #[test]
    fn test_config_error_display() {
        let error = PatternError::config("settings.toml", "expected a string");
        assert_eq!(
            error.to_string(),
            "invalid settings in settings.toml: expected a string"
        );
    }
}
