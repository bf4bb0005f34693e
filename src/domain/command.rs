// Inbound instance-scoped commands
use super::sport::InstanceConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct InstanceRef {
    #[serde(rename = "uniqueID")]
    pub unique_id: String,
}

/// Commands arrive as `{ "notification": NAME, "payload": {...} }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "notification", content = "payload")]
pub enum Command {
    #[serde(rename = "GET-LOCAL-LOGOS")]
    GetLocalLogos(InstanceRef),
    #[serde(rename = "START-DATA-TIMER")]
    StartDataTimer(InstanceConfig),
    #[serde(rename = "STOP-DATA-TIMER")]
    StopDataTimer(InstanceRef),
    #[serde(rename = "FETCH-DATA")]
    FetchData(InstanceConfig),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::GetLocalLogos(_) => "GET-LOCAL-LOGOS",
            Command::StartDataTimer(_) => "START-DATA-TIMER",
            Command::StopDataTimer(_) => "STOP-DATA-TIMER",
            Command::FetchData(_) => "FETCH-DATA",
        }
    }

    pub fn unique_id(&self) -> &str {
        match self {
            Command::GetLocalLogos(instance) | Command::StopDataTimer(instance) => {
                &instance.unique_id
            }
            Command::StartDataTimer(config) | Command::FetchData(config) => &config.unique_id,
        }
    }
}
