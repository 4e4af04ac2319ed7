use serde::Deserialize;
use vigil_check::CheckConfig;

#[derive(Debug, Deserialize)]
pub struct DaemonConfig {
    /// Seconds between scheduled runs. Absent means a single run and exit.
    pub check_interval_secs: Option<u64>,
    pub checks: CheckConfig,
    /// SMTP delivery; absent means findings go to the console.
    pub smtp: Option<SmtpConfig>,
}

#[derive(Debug, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: String,
    pub to: Vec<String>,
}

fn default_smtp_port() -> u16 {
    25
}

impl DaemonConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
