// Demo settings: which variants to resolve at startup.
// Sources: environment variables, or a TOML/JSON settings file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{PatternError, Result};

pub const PAYMENT_PROVIDER_VAR: &str = "PAYMENT_PROVIDER";
pub const NOTIFIER_VAR: &str = "NOTIFIER";
pub const APP_NAME_VAR: &str = "APP_NAME";
pub const SETTINGS_FILE_VAR: &str = "SETTINGS_FILE";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub payment_provider: Option<String>,
    pub notifier: Option<String>,
    pub app_name: Option<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Environment settings layered over the file named by `SETTINGS_FILE`.
    pub fn load() -> Result<Self> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// Like [`Settings::load`], reading variables through `lookup`.
    /// Variables win over the file; a named file that cannot be read or
    /// parsed is an error.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let vars = Self::from_lookup(&lookup);
        match lookup(SETTINGS_FILE_VAR) {
            Some(path) => {
                tracing::debug!(path = %path, "loading settings file");
                Ok(vars.merge(Self::from_file(Path::new(&path))?))
            }
            None => Ok(vars),
        }
    }

    /// Build settings from any variable source, e.g. a map in tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            payment_provider: lookup(PAYMENT_PROVIDER_VAR),
            notifier: lookup(NOTIFIER_VAR),
            app_name: lookup(APP_NAME_VAR),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| PatternError::config("TOML", err.to_string()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|err| {
            PatternError::config(
                "JSON",
                format!("line {}, column {}: {err}", err.line(), err.column()),
            )
        })
    }

    /// Load a settings file, choosing the format from its extension.
    /// Files without a recognised extension are sniffed: `{` means JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| {
            PatternError::config(path.display().to_string(), format!("failed to read: {err}"))
        })?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let parsed = match format.as_deref() {
            Some("json") => Self::from_json(&content),
            Some("toml") => Self::from_toml(&content),
            _ if content.trim_start().starts_with('{') => Self::from_json(&content),
            _ => Self::from_toml(&content),
        };
        parsed.map_err(|err| match err {
            PatternError::Config { message, .. } => {
                PatternError::config(path.display().to_string(), message)
            }
            other => other,
        })
    }

    /// Fill unset fields from `other`.
    pub fn merge(self, other: Settings) -> Settings {
        Settings {
            payment_provider: self.payment_provider.or(other.payment_provider),
            notifier: self.notifier.or(other.notifier),
            app_name: self.app_name.or(other.app_name),
        }
    }

    /// The provider key to hand to the payment registry. A missing setting
    /// becomes the empty key, which no registry accepts.
    pub fn payment_provider_key(&self) -> &str {
        self.payment_provider.as_deref().unwrap_or("")
    }

    pub fn notifier_key(&self) -> &str {
        self.notifier.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creational::factory::{new_notifier, new_payment_processor};
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_reads_known_variables() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("PAYMENT_PROVIDER", "stripe"),
            ("NOTIFIER", "sms"),
        ]));
        assert_eq!(settings.payment_provider.as_deref(), Some("stripe"));
        assert_eq!(settings.notifier_key(), "sms");
        assert_eq!(settings.app_name, None);
        assert!(new_payment_processor(settings.payment_provider_key()).is_ok());
    }

    #[test]
    fn test_missing_provider_is_unsupported_not_default() {
        let settings = Settings::from_lookup(lookup_from(&[]));
        let err = new_payment_processor(settings.payment_provider_key())
            .err()
            .unwrap();
        assert_eq!(err, PatternError::unsupported("payment provider", ""));
    }

    #[test]
    fn test_unrecognised_provider_is_unsupported() {
        let settings = Settings::from_lookup(lookup_from(&[("PAYMENT_PROVIDER", "Stripe")]));
        let err = new_payment_processor(settings.payment_provider_key())
            .err()
            .unwrap();
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_from_toml() {
        let settings = Settings::from_toml(
            r#"
payment_provider = "crypto"
notifier = "email"
"#,
        )
        .unwrap();
        assert_eq!(settings.payment_provider_key(), "crypto");
        assert!(new_notifier(settings.notifier_key()).is_ok());
    }

    #[test]
    fn test_from_toml_rejects_wrong_type() {
        let err = Settings::from_toml("payment_provider = 12").unwrap_err();
        assert!(matches!(err, PatternError::Config { .. }));
    }

    #[test]
    fn test_from_json() {
        let settings = Settings::from_json(r#"{"app_name": "Catalog"}"#).unwrap();
        assert_eq!(settings.app_name.as_deref(), Some("Catalog"));
        assert_eq!(settings.payment_provider, None);
    }

    #[test]
    fn test_from_json_reports_position() {
        let err = Settings::from_json("{\n  \"notifier\": }").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_from_file_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "payment_provider = \"paypal\"").unwrap();
        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.payment_provider_key(), "paypal");
    }

    #[test]
    fn test_from_file_sniffs_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"notifier": "sms"}}"#).unwrap();
        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.notifier_key(), "sms");
    }

    #[test]
    fn test_from_file_missing() {
        let err = Settings::from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn test_load_with_layers_variables_over_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "payment_provider = \"paypal\"\nnotifier = \"email\"").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let settings = Settings::load_with(lookup_from(&[
            ("SETTINGS_FILE", path.as_str()),
            ("NOTIFIER", "sms"),
        ]))
        .unwrap();
        assert_eq!(settings.payment_provider_key(), "paypal");
        assert_eq!(settings.notifier_key(), "sms");
        assert_eq!(new_notifier(settings.notifier_key()).unwrap().send("hi"), "send SMS");
    }

    #[test]
    fn test_load_with_without_file_uses_variables() {
        let settings =
            Settings::load_with(lookup_from(&[("PAYMENT_PROVIDER", "crypto")])).unwrap();
        assert_eq!(settings.payment_provider_key(), "crypto");
        assert_eq!(settings.notifier, None);
    }

    #[test]
    fn test_load_with_unreadable_file_is_config_error() {
        let missing = [("SETTINGS_FILE", "/definitely/not/here.json")];
        let err = Settings::load_with(lookup_from(&missing)).unwrap_err();
        assert!(matches!(err, PatternError::Config { .. }));
    }

    #[test]
    fn test_merge_prefers_self() {
        let env = Settings {
            payment_provider: Some("stripe".to_string()),
            ..Settings::default()
        };
        let file = Settings {
            payment_provider: Some("paypal".to_string()),
            notifier: Some("email".to_string()),
            app_name: None,
        };
        let merged = env.merge(file);
        assert_eq!(merged.payment_provider_key(), "stripe");
        assert_eq!(merged.notifier_key(), "email");
    }
}
