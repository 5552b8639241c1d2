use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// CSV export with `patientId,measurementValue,recordType,timestamp` columns.
    pub data_file: String,
    #[serde(default)]
    pub sinks: SinkConfig,
    #[serde(default)]
    pub rules: RulesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkConfig {
    /// Write every alert to the tracing log.
    #[serde(default = "default_log_sink")]
    pub log: bool,
    /// Append alerts to this file when set.
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            log: default_log_sink(),
            file: None,
        }
    }
}

fn default_log_sink() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Hypotensive hypoxemia fires only once both systolic pressure and
    /// saturation have been measured.
    #[serde(default)]
    pub strict_hypotensive_hypoxemia: bool,
}

impl ServerConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path, e))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }
}
