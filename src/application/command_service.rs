// Command service - Routes inbound instance commands
use crate::application::fetch_service::StandingsFetchService;
use crate::application::logo_service::LogoService;
use crate::application::notifier::Notifier;
use crate::application::timer_service::DataTimerService;
use crate::domain::command::Command;
use crate::error::CommandError;
use serde::Serialize;
use serde_json::Value;

/// Scheduling state of one instance, as reported by `GET /instances/:id/status`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstanceStatus {
    #[serde(rename = "uniqueID")]
    pub unique_id: String,
    #[serde(rename = "timerRunning")]
    pub timer_running: bool,
    #[serde(rename = "pendingRequests")]
    pub pending_requests: i64,
    #[serde(rename = "activeTimers")]
    pub active_timers: usize,
}

#[derive(Clone)]
pub struct CommandService {
    timers: DataTimerService,
    fetcher: StandingsFetchService,
    logos: LogoService,
    notifier: Notifier,
}

impl CommandService {
    pub fn new(
        timers: DataTimerService,
        fetcher: StandingsFetchService,
        logos: LogoService,
        notifier: Notifier,
    ) -> Self {
        Self {
            timers,
            fetcher,
            logos,
            notifier,
        }
    }

    /// Parse a raw `{ notification, payload }` envelope.
    pub fn parse(raw: Value) -> Result<Command, CommandError> {
        let name = raw
            .get("notification")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        match name.as_str() {
            "GET-LOCAL-LOGOS" | "START-DATA-TIMER" | "STOP-DATA-TIMER" | "FETCH-DATA" => {
                serde_json::from_value(raw).map_err(|e| CommandError::MalformedPayload {
                    command: name,
                    message: e.to_string(),
                })
            }
            _ => {
                tracing::warn!("Unknown notification: {}", name);
                Err(CommandError::UnknownCommand(name))
            }
        }
    }

    pub fn status(&self, unique_id: &str) -> InstanceStatus {
        InstanceStatus {
            unique_id: unique_id.to_string(),
            timer_running: self.timers.is_running(unique_id),
            pending_requests: self.fetcher.pending_requests(unique_id),
            active_timers: self.timers.active_count(),
        }
    }

    pub async fn handle(&self, command: Command) -> Result<(), CommandError> {
        tracing::info!("Received: {} for {}", command.name(), command.unique_id());

        match command {
            Command::GetLocalLogos(instance) => {
                let list = self.logos.list_local_logos(&instance.unique_id).await;
                self.notifier.send(list);
                tracing::info!("Sent local logos for {}", instance.unique_id);
            }
            Command::StartDataTimer(config) => {
                self.timers.start_data_timer(config)?;
            }
            Command::StopDataTimer(instance) => {
                self.timers.stop_data_timer(&instance.unique_id);
            }
            Command::FetchData(config) => {
                tracing::info!("Manual data fetch requested for {}", config.unique_id);
                self.fetcher.fetch_all_data(&config);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fetch_tracker::PendingFetches;
    use crate::application::logo_service::LogoCatalog;
    use crate::application::standings_source::fake::FakeSource;
    use crate::application::url_generator::UrlGenerator;
    use crate::domain::notification::{LogoIndex, Notification};
    use crate::infrastructure::config::UpstreamSettings;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Arc;

    struct EmptyCatalog;

    #[async_trait]
    impl LogoCatalog for EmptyCatalog {
        async fn list_logos(&self, _root: &str) -> anyhow::Result<LogoIndex> {
            Ok(LogoIndex::new())
        }
    }

    fn commands() -> (CommandService, DataTimerService, Notifier) {
        let notifier = Notifier::new(64);
        let fetcher = StandingsFetchService::new(
            Arc::new(FakeSource::new()),
            UrlGenerator::new(&UpstreamSettings::default()),
            PendingFetches::new(),
            notifier.clone(),
            2020,
        );
        let timers = DataTimerService::new(fetcher.clone());
        let logos = LogoService::new(
            Arc::new(EmptyCatalog),
            "logos".to_string(),
            "logos_custom".to_string(),
        );
        let service = CommandService::new(timers.clone(), fetcher, logos, notifier.clone());
        (service, timers, notifier)
    }

    #[test]
    fn test_parse_rejects_unknown_and_malformed() {
        let unknown = CommandService::parse(json!({ "notification": "SHUTDOWN", "payload": {} }));
        assert!(matches!(unknown, Err(CommandError::UnknownCommand(name)) if name == "SHUTDOWN"));

        let malformed =
            CommandService::parse(json!({ "notification": "FETCH-DATA", "payload": { "sports": [] } }));
        assert!(matches!(malformed, Err(CommandError::MalformedPayload { .. })));
    }

    #[tokio::test]
    async fn test_logo_command_sends_list() {
        let (service, _, notifier) = commands();
        let mut rx = notifier.subscribe();

        let command = CommandService::parse(json!({
            "notification": "GET-LOCAL-LOGOS",
            "payload": { "uniqueID": "w1" }
        }))
        .unwrap();
        service.handle(command).await.unwrap();

        let notification = rx.recv().await.unwrap();
        assert!(matches!(notification, Notification::LocalLogoList { ref unique_id, .. } if unique_id == "w1"));
    }

    #[tokio::test]
    async fn test_timer_commands() {
        let (service, timers, _) = commands();

        let start = CommandService::parse(json!({
            "notification": "START-DATA-TIMER",
            "payload": { "uniqueID": "w1", "sports": [], "updateInterval": 60000 }
        }))
        .unwrap();
        service.handle(start).await.unwrap();
        assert!(timers.is_running("w1"));

        let stop = CommandService::parse(json!({
            "notification": "STOP-DATA-TIMER",
            "payload": { "uniqueID": "w1" }
        }))
        .unwrap();
        service.handle(stop).await.unwrap();
        assert!(!timers.is_running("w1"));
    }

    #[tokio::test]
    async fn test_fetch_command_does_not_start_timer() {
        let (service, timers, notifier) = commands();
        let mut rx = notifier.subscribe();

        let fetch = CommandService::parse(json!({
            "notification": "FETCH-DATA",
            "payload": { "uniqueID": "w2", "sports": [] }
        }))
        .unwrap();
        service.handle(fetch).await.unwrap();

        assert!(!timers.is_running("w2"));
        assert_eq!(rx.recv().await.unwrap().name(), "DATA-FETCH-START");
        assert_eq!(rx.recv().await.unwrap().name(), "ALL-DATA-RECEIVED");
    }

    #[tokio::test]
    async fn test_start_without_interval_is_rejected() {
        let (service, timers, _) = commands();
        let start = CommandService::parse(json!({
            "notification": "START-DATA-TIMER",
            "payload": { "uniqueID": "w3", "sports": [] }
        }))
        .unwrap();

        let result = service.handle(start).await;
        assert!(matches!(result, Err(CommandError::InvalidUpdateInterval { .. })));
        assert!(!timers.is_running("w3"));
    }

    #[tokio::test]
    async fn test_status_reports_timer_and_pending() {
        let (service, _, _) = commands();
        assert_eq!(
            service.status("w4"),
            InstanceStatus {
                unique_id: "w4".to_string(),
                timer_running: false,
                pending_requests: 0,
                active_timers: 0,
            }
        );

        let start = CommandService::parse(json!({
            "notification": "START-DATA-TIMER",
            "payload": { "uniqueID": "w4", "sports": [], "updateInterval": 60000 }
        }))
        .unwrap();
        service.handle(start).await.unwrap();

        let status = service.status("w4");
        assert!(status.timer_running);
        assert_eq!(status.active_timers, 1);
        assert_eq!(status.pending_requests, 0);
        assert!(!service.status("w5").timer_running);
    }
}
