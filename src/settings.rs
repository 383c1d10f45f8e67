use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::BuildError;
use crate::parser::links::LinkTracking;

pub const ENV_PREFIX: &str = "BUILDER";
pub const DEFAULT_API_BASE_URL: &str = "https://api.mermaid.chat/api/assistants";

/// Values that never come from the prompt: identity fields, link tracking,
/// and file locations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub assistant_name: String,
    pub organization_name: String,
    pub organization_business: String,
    /// Usually empty; all instructions live in the postlude.
    pub prompt_prelude: String,
    pub utm_params: Option<String>,
    pub checkout_base_url: Option<String>,
    pub prompt_path: PathBuf,
    pub output_path: PathBuf,
    pub api_base_url: String,
    /// Secrets file sourced by the generated script, relative to the script.
    pub env_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            assistant_name: "Your Assistant Name".to_string(),
            organization_name: "Your Organization".to_string(),
            organization_business: "Brief description of your business.".to_string(),
            prompt_prelude: String::new(),
            utm_params: None,
            checkout_base_url: None,
            prompt_path: PathBuf::from("Prompt.md"),
            output_path: PathBuf::from("update_assistant.sh"),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            env_file: ".env".to_string(),
        }
    }
}

impl Settings {
    /// Layer defaults, an optional settings file, then `BUILDER_*` variables.
    pub fn load(file: &Path) -> Result<Self, BuildError> {
        let settings = Config::builder()
            .add_source(File::from(file).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize::<Settings>()?;
        Ok(settings)
    }

    /// Tracking configuration, present only when both the base URL and the
    /// parameter string are non-empty.
    pub fn link_tracking(&self) -> Option<LinkTracking> {
        LinkTracking::new(
            self.checkout_base_url.as_deref()?,
            self.utm_params.as_deref()?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let s = Settings::load(Path::new("tests/fixtures/does-not-exist.toml")).unwrap();
        assert_eq!(s.prompt_path, PathBuf::from("Prompt.md"));
        assert_eq!(s.output_path, PathBuf::from("update_assistant.sh"));
        assert_eq!(s.api_base_url, DEFAULT_API_BASE_URL);
        assert!(s.prompt_prelude.is_empty());
    }

    #[test]
    fn file_values_override_defaults() {
        let s = Settings::load(Path::new("tests/fixtures/assistant.toml")).unwrap();
        assert_eq!(s.assistant_name, "Iara");
        assert_eq!(s.organization_name, "Curso Exemplo");
        assert_eq!(s.checkout_base_url.as_deref(), Some("https://pay.example.com/checkout"));
        // untouched keys keep their defaults
        assert_eq!(s.env_file, ".env");
    }

    #[test]
    fn tracking_needs_both_parts() {
        let mut s = Settings::default();
        assert!(s.link_tracking().is_none());

        s.checkout_base_url = Some("https://pay.example.com/checkout".into());
        assert!(s.link_tracking().is_none());

        s.utm_params = Some(String::new());
        assert!(s.link_tracking().is_none());

        s.utm_params = Some("utm_source=whatsapp".into());
        let t = s.link_tracking().unwrap();
        assert_eq!(t.tracked_url(), "https://pay.example.com/checkout?utm_source=whatsapp");
    }
}
