// Data timer service - One recurring fetch schedule per dashboard instance
use crate::application::fetch_service::StandingsFetchService;
use crate::domain::sport::InstanceConfig;
use crate::error::CommandError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

#[derive(Clone)]
pub struct DataTimerService {
    fetcher: StandingsFetchService,
    timers: Arc<Mutex<HashMap<String, JoinHandle<()>>>>,
}

impl DataTimerService {
    pub fn new(fetcher: StandingsFetchService) -> Self {
        Self {
            fetcher,
            timers: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn timers(&self) -> MutexGuard<'_, HashMap<String, JoinHandle<()>>> {
        self.timers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace any schedule for the instance, fetch right away, then again
    /// every `updateInterval`.
    pub fn start_data_timer(&self, config: InstanceConfig) -> Result<(), CommandError> {
        let period = config
            .update_interval()
            .ok_or_else(|| CommandError::InvalidUpdateInterval {
                unique_id: config.unique_id.clone(),
            })?;
        let unique_id = config.unique_id.clone();

        self.stop_data_timer(&unique_id);
        tracing::info!("Starting data timer for {} every {:?}", unique_id, period);

        self.fetcher.fetch_all_data(&config);

        let fetcher = self.fetcher.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                tracing::info!("Timer triggered data fetch for {}", config.unique_id);
                fetcher.fetch_all_data(&config);
            }
        });

        // A concurrent start may have slipped in since the stop above
        if let Some(previous) = self.timers().insert(unique_id, handle) {
            previous.abort();
        }
        Ok(())
    }

    /// Cancels future cycles only; requests already in flight run to completion.
    pub fn stop_data_timer(&self, unique_id: &str) -> bool {
        match self.timers().remove(unique_id) {
            Some(handle) => {
                handle.abort();
                tracing::info!("Stopped data timer for {}", unique_id);
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self, unique_id: &str) -> bool {
        self.timers().contains_key(unique_id)
    }

    pub fn active_count(&self) -> usize {
        self.timers().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fetch_tracker::PendingFetches;
    use crate::application::notifier::Notifier;
    use crate::application::standings_source::fake::FakeSource;
    use crate::application::url_generator::UrlGenerator;
    use crate::domain::notification::Notification;
    use crate::infrastructure::config::UpstreamSettings;
    use std::time::Duration;
    use tokio::sync::broadcast;

    const PERIOD: Duration = Duration::from_secs(60);

    fn timers() -> (DataTimerService, Notifier) {
        let notifier = Notifier::new(64);
        let fetcher = StandingsFetchService::new(
            Arc::new(FakeSource::new()),
            UrlGenerator::new(&UpstreamSettings::default()),
            PendingFetches::new(),
            notifier.clone(),
            2020,
        );
        (DataTimerService::new(fetcher), notifier)
    }

    fn config(unique_id: &str, interval_ms: u64) -> InstanceConfig {
        let mut config = InstanceConfig::new(unique_id, Vec::new());
        config.update_interval_ms = Some(interval_ms);
        config
    }

    fn fetch_starts(rx: &mut broadcast::Receiver<Notification>, unique_id: &str) -> usize {
        let mut count = 0;
        while let Ok(notification) = rx.try_recv() {
            if matches!(&notification, Notification::FetchStart { unique_id: id } if id == unique_id) {
                count += 1;
            }
        }
        count
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetches_immediately_then_every_interval() {
        let (timers, notifier) = timers();
        let mut rx = notifier.subscribe();

        timers.start_data_timer(config("w1", 60_000)).unwrap();
        assert_eq!(fetch_starts(&mut rx, "w1"), 1);

        tokio::time::sleep(PERIOD * 3 + Duration::from_secs(30)).await;
        assert_eq!(fetch_starts(&mut rx, "w1"), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_keeps_a_single_schedule() {
        let (timers, notifier) = timers();
        let mut rx = notifier.subscribe();

        timers.start_data_timer(config("w1", 60_000)).unwrap();
        timers.start_data_timer(config("w1", 60_000)).unwrap();
        assert_eq!(timers.active_count(), 1);
        assert_eq!(fetch_starts(&mut rx, "w1"), 2);

        tokio::time::sleep(PERIOD + Duration::from_secs(1)).await;
        assert_eq!(fetch_starts(&mut rx, "w1"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_prevents_future_cycles() {
        let (timers, notifier) = timers();
        let mut rx = notifier.subscribe();

        timers.start_data_timer(config("w1", 60_000)).unwrap();
        timers.start_data_timer(config("w2", 60_000)).unwrap();
        assert!(timers.stop_data_timer("w1"));
        assert!(!timers.is_running("w1"));
        assert!(timers.is_running("w2"));

        tokio::time::sleep(PERIOD * 2 + Duration::from_secs(1)).await;
        let mut w1 = 0;
        let mut w2 = 0;
        while let Ok(notification) = rx.try_recv() {
            match notification {
                Notification::FetchStart { unique_id } if unique_id == "w1" => w1 += 1,
                Notification::FetchStart { unique_id } if unique_id == "w2" => w2 += 1,
                _ => {}
            }
        }
        assert_eq!(w1, 1);
        assert_eq!(w2, 3);
    }

    #[tokio::test]
    async fn test_stop_unknown_timer_is_noop() {
        let (timers, _) = timers();
        assert!(!timers.stop_data_timer("missing"));
        assert_eq!(timers.active_count(), 0);
    }

    #[tokio::test]
    async fn test_rejects_missing_interval() {
        let (timers, notifier) = timers();
        let mut rx = notifier.subscribe();

        let result = timers.start_data_timer(InstanceConfig::new("w1", Vec::new()));
        assert!(matches!(result, Err(CommandError::InvalidUpdateInterval { .. })));
        assert!(!timers.is_running("w1"));
        assert_eq!(fetch_starts(&mut rx, "w1"), 0);
    }
}
