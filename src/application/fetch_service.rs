// Standings fetch service - Fans out one request per URL and signals cycle completion
use crate::application::fetch_tracker::{FetchProgress, PendingFetches};
use crate::application::notifier::Notifier;
use crate::application::standings_source::StandingsSource;
use crate::application::url_generator::{Provider, UrlGenerator};
use crate::domain::notification::Notification;
use crate::domain::season::MonthDay;
use crate::domain::sport::{InstanceConfig, SportConfig};
use chrono::{Datelike, Local};
use serde_json::Value;
use std::sync::Arc;

/// One upstream request belonging to a fetch cycle.
#[derive(Debug, Clone)]
struct RequestTask {
    url: String,
    unique_id: String,
    suffix: String,
    provider: Provider,
}

#[derive(Clone)]
pub struct StandingsFetchService {
    source: Arc<dyn StandingsSource>,
    urls: UrlGenerator,
    pending: PendingFetches,
    notifier: Notifier,
    snet_year_floor: i32,
}

impl StandingsFetchService {
    pub fn new(
        source: Arc<dyn StandingsSource>,
        urls: UrlGenerator,
        pending: PendingFetches,
        notifier: Notifier,
        snet_year_floor: i32,
    ) -> Self {
        Self {
            source,
            urls,
            pending,
            notifier,
            snet_year_floor,
        }
    }

    /// Run one fetch cycle for an instance. Returns the number of requests
    /// dispatched; results arrive through the notifier.
    pub fn fetch_all_data(&self, config: &InstanceConfig) -> usize {
        let unique_id = config.unique_id.as_str();

        // 1. Tell the display layer to drop what it is showing
        self.notifier.send(Notification::FetchStart {
            unique_id: unique_id.to_string(),
        });

        // 2. Fresh barrier for this cycle
        self.pending.begin_cycle(unique_id);

        // 3. Season filter
        let today = MonthDay::reference(config.use_fake_date.as_deref());
        let active: Vec<&SportConfig> = config
            .sports
            .iter()
            .filter(|sport| sport.is_active(today))
            .collect();

        tracing::info!(
            "Date filtering for {}: {} configured sports, {} active for {:02}-{:02}",
            unique_id,
            config.sports.len(),
            active.len(),
            today.month,
            today.day
        );

        if active.is_empty() {
            tracing::info!("No sports active for {}, sending empty data", unique_id);
            self.finish_without_requests(unique_id);
            return 0;
        }

        // 4. Build every request before dispatching any, so the barrier holds
        // the full count before the first task can complete
        let mut tasks = Vec::new();
        for sport in active {
            let groups = sport.active_groups(today);
            tracing::info!(
                "Sport {}: {} configured groups, {} active groups",
                sport.league,
                sport.groups.as_ref().map_or(0, Vec::len),
                groups.len()
            );

            for sport_url in self.urls.sport_urls(&sport.league, &groups) {
                let queued = self.pending.add(unique_id);
                tracing::debug!("Queuing fetch {}: {}", queued, sport_url.url);
                tasks.push(RequestTask {
                    url: sport_url.url,
                    unique_id: unique_id.to_string(),
                    suffix: sport_url.suffix,
                    provider: sport_url.provider,
                });
            }
        }

        if tasks.is_empty() {
            tracing::warn!("Active sports for {} produced no URLs", unique_id);
            self.finish_without_requests(unique_id);
            return 0;
        }

        // 5. Fan out
        let dispatched = tasks.len();
        tracing::info!("Queued {} total URLs for {}", dispatched, unique_id);
        for task in tasks {
            self.dispatch(task);
        }

        dispatched
    }

    /// Requests of the current cycle still outstanding for an instance.
    pub fn pending_requests(&self, unique_id: &str) -> i64 {
        self.pending.pending(unique_id).unwrap_or(0)
    }

    fn dispatch(&self, task: RequestTask) {
        let service = self.clone();
        tokio::spawn(async move {
            let notification = match task.provider {
                Provider::Espn => service.fetch_direct(&task).await,
                Provider::Snet => Some(service.fetch_latest_season(&task).await),
            };

            if let Some(notification) = notification {
                service.notifier.send(notification);
            }
            service.mark_complete(&task.unique_id);
        });
    }

    async fn fetch_direct(&self, task: &RequestTask) -> Option<Notification> {
        tracing::info!("Fetching: {} for uniqueID: {}", task.url, task.unique_id);

        match self.source.fetch_json(&task.url).await {
            Ok(result) => {
                let children = result
                    .get("children")
                    .and_then(Value::as_array)
                    .map_or(0, Vec::len);
                tracing::debug!(
                    "Parsed JSON for {}: {} top-level children",
                    task.unique_id,
                    children
                );
                Some(Notification::StandingsResult {
                    unique_id: task.unique_id.clone(),
                    suffix: task.suffix.clone(),
                    result,
                })
            }
            Err(e) => {
                tracing::error!("Could not load data from {}: {}", task.url, e);
                None
            }
        }
    }

    async fn fetch_latest_season(&self, task: &RequestTask) -> Notification {
        tracing::info!("Fetching SNET data: {} for uniqueID: {}", task.url, task.unique_id);

        let (year, teams) = probe_season_year(
            self.source.as_ref(),
            &task.url,
            Local::now().year(),
            self.snet_year_floor,
        )
        .await;

        Notification::SnetStandingsResult {
            unique_id: task.unique_id.clone(),
            year,
            suffix: task.suffix.clone(),
            result: teams,
        }
    }

    fn mark_complete(&self, unique_id: &str) {
        match self.pending.complete(unique_id) {
            FetchProgress::Remaining(remaining) => {
                tracing::info!("Fetch completed for {}, remaining: {}", unique_id, remaining);
            }
            FetchProgress::Drained => {
                tracing::info!(
                    "All data fetched for {} - sending completion notification",
                    unique_id
                );
                self.notifier.send(Notification::AllDataReceived {
                    unique_id: unique_id.to_string(),
                });
            }
            FetchProgress::NotTracked => {
                tracing::warn!("No pending fetches found for {}", unique_id);
            }
        }
    }

    fn finish_without_requests(&self, unique_id: &str) {
        self.pending.clear(unique_id);
        self.notifier.send(Notification::AllDataReceived {
            unique_id: unique_id.to_string(),
        });
    }
}

/// Walk back from `start_year` until the provider reports teams or the
/// year reaches `floor`. Returns the year the search stopped at and the teams
/// found there, which may be empty.
pub async fn probe_season_year(
    source: &dyn StandingsSource,
    url: &str,
    start_year: i32,
    floor: i32,
) -> (i32, Value) {
    let mut year = start_year;
    let mut teams: Vec<Value> = Vec::new();

    while teams.is_empty() && year > floor {
        match source.fetch_json(&format!("{}{}", url, year)).await {
            Ok(body) => {
                tracing::debug!("{}{} fetched", url, year);
                if let Some(found) = body.pointer("/data/teams").and_then(Value::as_array) {
                    teams = found.clone();
                }
            }
            Err(e) => tracing::error!("Could not load SNET data for {}: {}", year, e),
        }

        if teams.is_empty() {
            year -= 1;
        }
    }

    (year, Value::Array(teams))
}
