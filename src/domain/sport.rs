// Sport configuration domain model and season filtering
use super::season::{is_date_in_range, MonthDay};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One dashboard instance's fetch configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InstanceConfig {
    #[serde(rename = "uniqueID")]
    pub unique_id: String,
    #[serde(default)]
    pub sports: Vec<SportConfig>,
    /// Milliseconds between fetch cycles
    #[serde(rename = "updateInterval", default, skip_serializing_if = "Option::is_none")]
    pub update_interval_ms: Option<u64>,
    #[serde(rename = "useFakeDate", default, skip_serializing_if = "Option::is_none")]
    pub use_fake_date: Option<String>,
}

impl InstanceConfig {
    #[cfg(test)]
    pub fn new(unique_id: impl Into<String>, sports: Vec<SportConfig>) -> Self {
        Self {
            unique_id: unique_id.into(),
            sports,
            update_interval_ms: None,
            use_fake_date: None,
        }
    }

    pub fn update_interval(&self) -> Option<Duration> {
        self.update_interval_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SportConfig {
    pub league: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<Group>>,
}

/// A standings group: either a bare name or a name with its own season window.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Group {
    Name(String),
    Windowed {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<String>,
    },
}

/// A group with its effective season window.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGroup<'a> {
    pub name: &'a str,
    pub from: Option<&'a str>,
    pub to: Option<&'a str>,
}

impl ResolvedGroup<'_> {
    pub fn is_active(&self, reference: MonthDay) -> bool {
        is_date_in_range(self.from, self.to, reference)
    }
}

/// Empty bounds count as unset so they inherit the league's bound.
fn non_empty(bound: &Option<String>) -> Option<&str> {
    bound.as_deref().filter(|b| !b.is_empty())
}

impl Group {
    #[cfg(test)]
    pub fn name(&self) -> &str {
        match self {
            Group::Name(name) => name,
            Group::Windowed { name, .. } => name,
        }
    }

    /// Each missing bound falls back to the sport's bound independently.
    pub fn resolve<'a>(&'a self, sport: &'a SportConfig) -> ResolvedGroup<'a> {
        match self {
            Group::Name(name) => ResolvedGroup {
                name,
                from: sport.from.as_deref(),
                to: sport.to.as_deref(),
            },
            Group::Windowed { name, from, to } => ResolvedGroup {
                name,
                from: non_empty(from).or(sport.from.as_deref()),
                to: non_empty(to).or(sport.to.as_deref()),
            },
        }
    }
}

impl SportConfig {
    #[cfg(test)]
    pub fn new(league: impl Into<String>) -> Self {
        Self {
            league: league.into(),
            from: None,
            to: None,
            groups: None,
        }
    }

    #[cfg(test)]
    pub fn with_window(mut self, from: Option<&str>, to: Option<&str>) -> Self {
        self.from = from.map(str::to_string);
        self.to = to.map(str::to_string);
        self
    }

    #[cfg(test)]
    pub fn with_groups(mut self, groups: Vec<Group>) -> Self {
        self.groups = Some(groups);
        self
    }

    fn configured_groups(&self) -> &[Group] {
        self.groups.as_deref().unwrap_or_default()
    }

    pub fn is_league_in_season(&self, reference: MonthDay) -> bool {
        is_date_in_range(self.from.as_deref(), self.to.as_deref(), reference)
    }

    /// A sport is active when its league window contains the reference day and,
    /// if it lists groups, at least one of them is in season too.
    pub fn is_active(&self, reference: MonthDay) -> bool {
        if !self.is_league_in_season(reference) {
            return false;
        }

        let groups = self.configured_groups();
        if groups.is_empty() {
            return true;
        }

        groups.iter().any(|group| match group {
            // Bare names inherit the league window, already checked above
            Group::Name(_) => true,
            Group::Windowed { .. } => group.resolve(self).is_active(reference),
        })
    }

    /// Names of the configured groups that are in season, in configuration order.
    pub fn active_groups(&self, reference: MonthDay) -> Vec<String> {
        self.configured_groups()
            .iter()
            .map(|group| group.resolve(self))
            .filter(|resolved| resolved.is_active(reference))
            .map(|resolved| resolved.name.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn windowed(name: &str, from: &str, to: &str) -> Group {
        Group::Windowed {
            name: name.to_string(),
            from: Some(from.to_string()),
            to: Some(to.to_string()),
        }
    }

    #[test]
    fn test_bare_group_passes_through() {
        let sport = SportConfig::new("NBA")
            .with_groups(vec![Group::Name("Eastern Conference".to_string())]);
        let groups = sport.active_groups(MonthDay::new(2, 10));
        assert_eq!(groups, vec!["Eastern Conference".to_string()]);
    }

    #[test]
    fn test_windowed_group_out_of_season() {
        let sport = SportConfig::new("NHL").with_groups(vec![
            Group::Name("Atlantic Division".to_string()),
            windowed("Playoffs", "04-01", "06-30"),
        ]);
        let groups = sport.active_groups(MonthDay::parse("07-01"));
        assert_eq!(groups, vec!["Atlantic Division".to_string()]);
    }

    #[test]
    fn test_windowed_group_falls_back_to_league_bounds() {
        let sport = SportConfig::new("MLB")
            .with_window(Some("03-20"), Some("11-05"))
            .with_groups(vec![Group::Windowed {
                name: "AL Playoffs".to_string(),
                from: Some("09-28".to_string()),
                to: None,
            }]);
        let group = &sport.groups.as_ref().unwrap()[0];
        let resolved = group.resolve(&sport);
        assert_eq!(resolved.from, Some("09-28"));
        assert_eq!(resolved.to, Some("11-05"));
        assert!(resolved.is_active(MonthDay::new(10, 15)));
        assert!(!resolved.is_active(MonthDay::new(11, 6)));
    }

    #[test]
    fn test_sport_inactive_outside_league_window() {
        let sport = SportConfig::new("NFL").with_window(Some("09-01"), Some("02-15"));
        assert!(sport.is_active(MonthDay::new(1, 20)));
        assert!(!sport.is_active(MonthDay::new(6, 1)));
    }

    #[test]
    fn test_sport_inactive_when_every_group_is_out_of_season() {
        let sport = SportConfig::new("NHL").with_groups(vec![
            windowed("West Playoffs", "04-15", "06-30"),
            windowed("East Playoffs", "04-15", "06-30"),
        ]);
        assert!(!sport.is_active(MonthDay::new(12, 1)));
        assert!(sport.is_active(MonthDay::new(5, 1)));
    }

    #[test]
    fn test_empty_group_bound_inherits_league_bound() {
        let sport = SportConfig::new("NHL")
            .with_window(Some("10-01"), Some("03-31"))
            .with_groups(vec![Group::Windowed {
                name: "East Wild Card".to_string(),
                from: Some(String::new()),
                to: Some("02-01".to_string()),
            }]);

        let resolved = sport.groups.as_ref().unwrap()[0].resolve(&sport);
        assert_eq!(resolved.from, Some("10-01"));
        assert_eq!(resolved.to, Some("02-01"));
        assert_eq!(
            sport.active_groups(MonthDay::new(12, 1)),
            vec!["East Wild Card".to_string()]
        );
        assert!(sport.active_groups(MonthDay::new(2, 15)).is_empty());
    }

    #[test]
    fn test_no_groups_means_no_active_groups() {
        let sport = SportConfig::new("MLS");
        assert!(sport.is_active(MonthDay::new(5, 1)));
        assert!(sport.active_groups(MonthDay::new(5, 1)).is_empty());
    }

    #[test]
    fn test_deserialize_instance_config() {
        let json = r#"{
            "uniqueID": "standings_1",
            "updateInterval": 1800000,
            "useFakeDate": "01-15",
            "sports": [
                { "league": "NHL", "from": "10-01", "to": "06-30",
                  "groups": ["Atlantic Division", { "name": "East Wild Card", "from": "03-01" }] },
                { "league": "English Premier League" }
            ]
        }"#;
        let config: InstanceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.unique_id, "standings_1");
        assert_eq!(config.update_interval(), Some(Duration::from_secs(1800)));
        assert_eq!(config.use_fake_date.as_deref(), Some("01-15"));
        assert_eq!(config.sports.len(), 2);

        let groups = config.sports[0].groups.as_ref().unwrap();
        assert_eq!(groups[0], Group::Name("Atlantic Division".to_string()));
        assert_eq!(groups[1].name(), "East Wild Card");
        assert!(config.sports[1].groups.is_none());
    }

    #[test]
    fn test_zero_update_interval_is_absent() {
        let mut config = InstanceConfig::new("standings_1", Vec::new());
        config.update_interval_ms = Some(0);
        assert_eq!(config.update_interval(), None);
    }
}
