use crate::application::refresh_scheduler::DEFAULT_REFRESH_INTERVAL;
use serde::Deserialize;
use std::time::Duration;

const CONFIG_FILE: &str = "config/dashboard";

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub api: ApiSettings,
    pub refresh: RefreshSettings,
    pub identity: IdentitySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RefreshSettings {
    pub interval_secs: u64,
}

impl RefreshSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct IdentitySettings {
    pub state_file: String,
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    load_dashboard_config_from(CONFIG_FILE)
}

/// Built-in defaults, overlaid by the (optional) config file, overlaid by
/// `DASHBOARD__SECTION__KEY` environment variables.
pub fn load_dashboard_config_from(path: &str) -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .set_default("api.base_url", "http://127.0.0.1:5000")?
        .set_default("refresh.interval_secs", DEFAULT_REFRESH_INTERVAL.as_secs())?
        .set_default("identity.state_file", ".dashboard_state.json")?
        .add_source(config::File::with_name(path).required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
