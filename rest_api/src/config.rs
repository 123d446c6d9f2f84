// rest_api/src/config.rs

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

use risk_core::SymptomVocabulary;

pub const DEFAULT_LISTEN_HOST: &str = "127.0.0.1";
pub const DEFAULT_LISTEN_PORT: u16 = 8083;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

/// One collaborator endpoint (patient store or note store).
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CollaboratorConfig {
    pub base_url: String,
}

/// Configuration of the risk API server and its two collaborators.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RiskApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub patient_service: CollaboratorConfig,
    pub note_service: CollaboratorConfig,
    /// Upper bound on each collaborator call; lookups surface
    /// `Unavailable` after this instead of blocking.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Optional override of the symptom term list. Absent means the
    /// built-in production vocabulary.
    #[serde(default)]
    pub symptom_terms: Option<Vec<String>>,
}

fn default_host() -> String {
    DEFAULT_LISTEN_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_LISTEN_PORT
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for RiskApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            patient_service: CollaboratorConfig {
                base_url: "http://127.0.0.1:8081/api/patients".to_string(),
            },
            note_service: CollaboratorConfig {
                base_url: "http://127.0.0.1:8082/api/notes".to_string(),
            },
            request_timeout_secs: default_request_timeout_secs(),
            symptom_terms: None,
        }
    }
}

impl RiskApiConfig {
    /// The vocabulary this deployment should extract with: the configured
    /// override when present, the built-in term list otherwise.
    pub fn vocabulary(&self) -> SymptomVocabulary {
        match &self.symptom_terms {
            Some(terms) => SymptomVocabulary::new(terms),
            None => SymptomVocabulary::default(),
        }
    }
}

// Wrapper struct to match the 'risk_api:' key in the YAML config.
#[derive(Debug, Deserialize)]
struct RiskApiConfigWrapper {
    risk_api: RiskApiConfig,
}

/// Loads the risk API configuration from `risk_api_config.yaml` next to
/// this crate, or from an explicit path. A missing file yields the
/// defaults; a present but malformed file is an error.
pub fn load_risk_api_config(config_file_path: Option<PathBuf>) -> Result<RiskApiConfig> {
    let default_config_path =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("risk_api_config.yaml");
    let path_to_use = config_file_path.unwrap_or(default_config_path);

    if !path_to_use.exists() {
        return Ok(RiskApiConfig::default());
    }

    let config_content = fs::read_to_string(&path_to_use).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read risk API config file {}: {}",
            path_to_use.display(),
            e
        )
    })?;

    let wrapper: RiskApiConfigWrapper = serde_yaml2::from_str(&config_content).map_err(|e| {
        anyhow::anyhow!(
            "Failed to parse risk API config file {}: {}",
            path_to_use.display(),
            e
        )
    })?;

    Ok(wrapper.risk_api)
}
