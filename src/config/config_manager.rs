use crate::config::constants::{
    AZURE_OPENAI_API_KEY_ENV, AZURE_OPENAI_API_VERSION_ENV, AZURE_OPENAI_DEPLOYMENT_ENV,
    AZURE_OPENAI_ENDPOINT_ENV,
};
use crate::errors::{SitelensError, SitelensResult};
use crate::structs::config::eval_settings::EvalSettings;

pub struct ConfigManager;

impl ConfigManager {
    /// Loads the four required evaluation settings from the environment.
    /// Called once at startup, before any pipeline work begins.
    pub fn load_eval_settings() -> SitelensResult<EvalSettings> {
        Self::load_eval_settings_with(|name| std::env::var(name).ok())
    }

    fn load_eval_settings_with<F>(lookup: F) -> SitelensResult<EvalSettings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing: Vec<String> = Vec::new();

        let mut fetch = |name: &str| match lookup(name) {
            Some(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
            _ => {
                missing.push(name.to_string());
                None
            }
        };

        let endpoint = fetch(AZURE_OPENAI_ENDPOINT_ENV);
        let api_key = fetch(AZURE_OPENAI_API_KEY_ENV);
        let deployment = fetch(AZURE_OPENAI_DEPLOYMENT_ENV);
        let api_version = fetch(AZURE_OPENAI_API_VERSION_ENV);

        if !missing.is_empty() {
            return Err(SitelensError::missing_configuration(missing));
        }

        match (endpoint, api_key, deployment, api_version) {
            (Some(endpoint), Some(api_key), Some(deployment), Some(api_version)) => {
                Ok(EvalSettings {
                    endpoint: endpoint.trim_end_matches('/').to_string(),
                    api_key,
                    deployment,
                    api_version,
                })
            }
            _ => Err(SitelensError::missing_configuration(vec![])),
        }
    }
}
