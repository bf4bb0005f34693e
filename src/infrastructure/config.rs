use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

pub const ESPN_STANDINGS_BASE: &str = "https://site.api.espn.com/apis/v2/sports/";
pub const ESPN_SITE_BASE: &str = "https://site.api.espn.com/apis/site/v2/sports/";
pub const SNET_BASE: &str = "https://stats-api.sportsnet.ca/";

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
    pub logos: LogoSettings,
    pub notifications: NotificationSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamSettings {
    pub espn_standings: String,
    pub espn_site: String,
    pub snet: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    /// The SNET year probe gives up once the season year reaches this value
    pub snet_year_floor: i32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogoSettings {
    pub logos_dir: String,
    pub custom_logos_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationSettings {
    /// Shared across all instances; size it for the busiest burst of results
    /// a slow stream might have to absorb.
    pub channel_capacity: usize,
}

impl UpstreamSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Placeholders available to URL templates.
    pub fn template_vars(&self) -> HashMap<String, String> {
        let mut vars = HashMap::new();
        vars.insert("espn".to_string(), self.espn_standings.clone());
        vars.insert("espn_site".to_string(), self.espn_site.clone());
        vars.insert("snet".to_string(), self.snet.clone());
        vars
    }
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            espn_standings: ESPN_STANDINGS_BASE.to_string(),
            espn_site: ESPN_SITE_BASE.to_string(),
            snet: SNET_BASE.to_string(),
            user_agent: format!("standings-fetcher/{}", env!("CARGO_PKG_VERSION")),
            request_timeout_secs: 30,
            snet_year_floor: 2020,
        }
    }
}

pub fn load_service_config() -> anyhow::Result<ServiceConfig> {
    let upstream = UpstreamSettings::default();
    let settings = config::Config::builder()
        .set_default("server.bind_addr", "0.0.0.0:8080")?
        .set_default("upstream.espn_standings", upstream.espn_standings)?
        .set_default("upstream.espn_site", upstream.espn_site)?
        .set_default("upstream.snet", upstream.snet)?
        .set_default("upstream.user_agent", upstream.user_agent)?
        .set_default("upstream.request_timeout_secs", upstream.request_timeout_secs)?
        .set_default("upstream.snet_year_floor", i64::from(upstream.snet_year_floor))?
        .set_default("logos.logos_dir", "./logos")?
        .set_default("logos.custom_logos_dir", "./logos_custom")?
        .set_default("notifications.channel_capacity", 256_i64)?
        .add_source(config::File::with_name("config/standings").required(false))
        .add_source(config::Environment::with_prefix("STANDINGS").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Replace `${name}` placeholders in a URL template
pub fn prepare_url(template: &str, vars: &HashMap<String, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        let placeholder = format!("${{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}
