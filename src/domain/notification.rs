// Outbound notifications delivered to the display layer
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;

pub const DATA_FETCH_START: &str = "DATA-FETCH-START";
pub const ALL_DATA_RECEIVED: &str = "ALL-DATA-RECEIVED";
pub const LOCAL_LOGO_LIST: &str = "LOCAL-LOGO-LIST";
pub const STANDINGS_RESULT: &str = "STANDINGS_RESULT";
pub const STANDINGS_RESULT_SNET: &str = "STANDINGS_RESULT_SNET";

/// League directory name → image file names.
pub type LogoIndex = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    FetchStart {
        unique_id: String,
    },
    StandingsResult {
        unique_id: String,
        suffix: String,
        result: Value,
    },
    SnetStandingsResult {
        unique_id: String,
        year: i32,
        suffix: String,
        result: Value,
    },
    AllDataReceived {
        unique_id: String,
    },
    LocalLogoList {
        unique_id: String,
        logos: LogoIndex,
        logos_custom: LogoIndex,
    },
}

/// Wire form: `{ "notification": NAME, "payload": {...} }`
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub notification: String,
    pub payload: Value,
}

impl Notification {
    pub fn unique_id(&self) -> &str {
        match self {
            Notification::FetchStart { unique_id }
            | Notification::StandingsResult { unique_id, .. }
            | Notification::SnetStandingsResult { unique_id, .. }
            | Notification::AllDataReceived { unique_id }
            | Notification::LocalLogoList { unique_id, .. } => unique_id,
        }
    }

    pub fn name(&self) -> String {
        match self {
            Notification::FetchStart { .. } => DATA_FETCH_START.to_string(),
            Notification::StandingsResult { suffix, .. } => {
                format!("{}-{}", STANDINGS_RESULT, suffix)
            }
            Notification::SnetStandingsResult { year, suffix, .. } => {
                format!("{}-{}_{}", STANDINGS_RESULT_SNET, year, suffix)
            }
            Notification::AllDataReceived { .. } => ALL_DATA_RECEIVED.to_string(),
            Notification::LocalLogoList { .. } => LOCAL_LOGO_LIST.to_string(),
        }
    }

    pub fn to_envelope(&self) -> Envelope {
        let payload = match self {
            Notification::FetchStart { unique_id } | Notification::AllDataReceived { unique_id } => {
                json!({ "uniqueID": unique_id })
            }
            Notification::StandingsResult {
                unique_id, result, ..
            }
            | Notification::SnetStandingsResult {
                unique_id, result, ..
            } => json!({ "result": result, "uniqueID": unique_id }),
            Notification::LocalLogoList {
                unique_id,
                logos,
                logos_custom,
            } => json!({
                "uniqueID": unique_id,
                "logos": logos,
                "logosCustom": logos_custom,
            }),
        };

        Envelope {
            notification: self.name(),
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_names() {
        let result = Notification::StandingsResult {
            unique_id: "w1".to_string(),
            suffix: "NHL_WILDCARD".to_string(),
            result: Value::Null,
        };
        assert_eq!(result.name(), "STANDINGS_RESULT-NHL_WILDCARD");

        let snet = Notification::SnetStandingsResult {
            unique_id: "w1".to_string(),
            year: 2022,
            suffix: "CFL".to_string(),
            result: json!([]),
        };
        assert_eq!(snet.name(), "STANDINGS_RESULT_SNET-2022_CFL");
        assert_eq!(snet.unique_id(), "w1");
    }

    #[test]
    fn test_envelope_payload_keys() {
        let mut logos = LogoIndex::new();
        logos.insert("NHL".to_string(), vec!["BOS.svg".to_string()]);
        let list = Notification::LocalLogoList {
            unique_id: "w2".to_string(),
            logos,
            logos_custom: LogoIndex::new(),
        };

        let envelope = serde_json::to_value(list.to_envelope()).unwrap();
        assert_eq!(envelope["notification"], "LOCAL-LOGO-LIST");
        assert_eq!(envelope["payload"]["uniqueID"], "w2");
        assert_eq!(envelope["payload"]["logos"]["NHL"][0], "BOS.svg");
        assert!(envelope["payload"]["logosCustom"].as_object().unwrap().is_empty());
    }
}
