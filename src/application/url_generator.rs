// URL generator - Maps a league and its active groups to upstream standings URLs
use crate::domain::league_paths::{league_path, LEAGUE_PATHS, LEGACY_LEAGUE_PATHS};
use crate::infrastructure::config::{prepare_url, UpstreamSettings};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// ESPN standings and rankings
    Espn,
    /// Sportsnet stats API; needs a season year appended to the URL
    Snet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportUrl {
    pub url: String,
    pub suffix: String,
    pub provider: Provider,
}

/// When a rule's URL is requested, given the league's active groups.
#[derive(Debug, Clone, Copy)]
pub enum Gate {
    Always,
    AnyOf(&'static [&'static str]),
    /// Also the default view when no group narrows the request
    AnyOfOrUnfiltered(&'static [&'static str]),
}

impl Gate {
    fn admits(&self, groups: &[String]) -> bool {
        let intersects =
            |bucket: &[&str]| groups.iter().any(|group| bucket.contains(&group.as_str()));
        match *self {
            Gate::Always => true,
            Gate::AnyOf(bucket) => intersects(bucket),
            Gate::AnyOfOrUnfiltered(bucket) => groups.is_empty() || intersects(bucket),
        }
    }
}

#[derive(Debug)]
pub struct UrlRule {
    pub template: &'static str,
    pub gate: Gate,
}

#[derive(Debug)]
pub struct LeagueRoute {
    pub league: &'static str,
    pub provider: Provider,
    pub rules: &'static [UrlRule],
}

const MLB_L1: &[&str] = &["Major League Baseball"];
const MLB_L2: &[&str] = &["American League", "National League"];
const MLB_L3: &[&str] = &[
    "American League East",
    "American League Central",
    "American League West",
    "National League East",
    "National League Central",
    "National League West",
];
const MLB_WC: &[&str] = &["AL Wild Card", "NL Wild Card"];
const MLB_PO: &[&str] = &["AL Playoffs", "NL Playoffs"];

const NBA_L1: &[&str] = &["National Basketball Association"];
const NBA_L2: &[&str] = &["Western Conference", "Eastern Conference"];
const NBA_L3: &[&str] = &[
    "Atlantic",
    "Central",
    "Southeast",
    "Northwest",
    "Pacific",
    "Southwest",
];

const NFL_L1: &[&str] = &["National Football League"];
const NFL_L2: &[&str] = &["American Football Conference", "National Football Conference"];
const NFL_L3: &[&str] = &[
    "AFC East", "AFC North", "AFC South", "AFC West", "NFC East", "NFC North", "NFC South",
    "NFC West",
];
const NFL_PO: &[&str] = &["AFC Playoffs", "NFC Playoffs"];

const NHL_L1: &[&str] = &["National Hockey League"];
const NHL_L2: &[&str] = &["Western Conference", "Eastern Conference"];
const NHL_L3: &[&str] = &[
    "Atlantic Division",
    "Metropolitan Division",
    "Central Division",
    "Pacific Division",
];
const NHL_WC: &[&str] = &["West Wild Card", "East Wild Card"];
const NHL_PO: &[&str] = &["West Playoffs", "East Playoffs"];

const WNBA_L1: &[&str] = &["Women's National Basketball Assoc."];
const WNBA_L2: &[&str] = &["Eastern Conference", "Western Conference"];

const NBAG_L1: &[&str] = &["NBA Development League"];
const NBAG_L2: &[&str] = &["Eastern Conference", "Western Conference"];

const fn always(template: &'static str) -> UrlRule {
    UrlRule {
        template,
        gate: Gate::Always,
    }
}

const fn any_of(bucket: &'static [&'static str], template: &'static str) -> UrlRule {
    UrlRule {
        template,
        gate: Gate::AnyOf(bucket),
    }
}

const fn by_default(bucket: &'static [&'static str], template: &'static str) -> UrlRule {
    UrlRule {
        template,
        gate: Gate::AnyOfOrUnfiltered(bucket),
    }
}

/// Rules are emitted in table order.
static LEAGUE_ROUTES: &[LeagueRoute] = &[
    LeagueRoute {
        league: "MLB",
        provider: Provider::Espn,
        rules: &[
            any_of(MLB_L1, "${espn}baseball/mlb/standings?level=1&sort=gamesbehind:asc,winpercent:desc,playoffseed:asc"),
            any_of(MLB_L2, "${espn}baseball/mlb/standings?level=2&sort=gamesbehind:asc,winpercent:desc,playoffseed:asc"),
            any_of(MLB_WC, "${espn}baseball/mlb/standings?view=wild-card&type=1&level=2&sort=gamesbehind:asc,winpercent:desc,playoffseed:asc&startingseason=2024&seasontype=2"),
            any_of(MLB_PO, "${espn}baseball/mlb/standings?view=playoff&level=2&sort=playoffseed:asc"),
            by_default(MLB_L3, "${espn}baseball/mlb/standings?level=3&sort=gamesbehind:asc,winpercent:desc"),
        ],
    },
    LeagueRoute {
        league: "NBA",
        provider: Provider::Espn,
        rules: &[
            any_of(NBA_L1, "${espn}basketball/nba/standings?level=1&sort=gamesbehind:asc,winpercent:desc"),
            any_of(NBA_L2, "${espn}basketball/nba/standings?level=2&sort=gamesbehind:asc,winpercent:desc,playoffseed:asc"),
            by_default(NBA_L3, "${espn}basketball/nba/standings?level=3&sort=gamesbehind:asc,winpercent:desc"),
        ],
    },
    LeagueRoute {
        league: "NFL",
        provider: Provider::Espn,
        rules: &[
            any_of(NFL_L1, "${espn}football/nfl/standings?level=1&sort=winpercent:desc,playoffseed:asc"),
            any_of(NFL_L2, "${espn}football/nfl/standings?level=2&sort=winpercent:desc,playoffseed:asc"),
            any_of(NFL_PO, "${espn}football/nfl/standings?view=playoff&sort=playoffseed:asc"),
            by_default(NFL_L3, "${espn}football/nfl/standings?level=3&sort=winpercent:desc,playoffseed:asc"),
        ],
    },
    LeagueRoute {
        league: "NHL",
        provider: Provider::Espn,
        rules: &[
            any_of(NHL_L1, "${espn}hockey/nhl/standings?level=1&sort=points:desc,winpercent:desc,playoffseed:asc"),
            any_of(NHL_L2, "${espn}hockey/nhl/standings?level=2&sort=points:desc,winpercent:desc,playoffseed:asc"),
            any_of(NHL_WC, "${espn}hockey/nhl/standings?view=wild-card&type=3&level=2&sort=playoffseed%3Aasc%2Cpoints%3Adesc%2Cgamesplayed%3Aasc%2Crotwins%3Adesc&seasontype=2"),
            any_of(NHL_PO, "${espn}hockey/nhl/standings?view=playoff&level=2&sort=playoffseed:asc"),
            by_default(NHL_L3, "${espn}hockey/nhl/standings?level=3&sort=points:desc,winpercent:desc,playoffseed:asc"),
        ],
    },
    LeagueRoute {
        league: "MLS",
        provider: Provider::Espn,
        rules: &[always("${espn}soccer/usa.1/standings?sort=rank:asc")],
    },
    LeagueRoute {
        league: "NCAAF",
        provider: Provider::Espn,
        rules: &[always("${espn}football/college-football/standings?group=80&level=3&sort=leaguewinpercent:desc,vsconf_wins:desc,vsconf_gamesbehind:asc,vsconf_playoffseed:asc,wins:desc,losses:desc,playoffseed:asc,alpha:asc")],
    },
    LeagueRoute {
        league: "NCAAM",
        provider: Provider::Espn,
        rules: &[always("${espn}basketball/mens-college-basketball/standings?group=50&sort=playoffseed:asc,vsconf_winpercent:desc,vsconf_wins:desc,vsconf_losses:asc,vsconf_gamesbehind:asc&includestats=playoffseed,vsconf,vsconf_gamesbehind,vsconf_winpercent,total,winpercent,home,road,streak,vsaprankedteams,vsusarankedteams")],
    },
    LeagueRoute {
        league: "NCAAW",
        provider: Provider::Espn,
        rules: &[always("${espn}basketball/womens-college-basketball/standings?group=50&sort=playoffseed:asc,vsconf_winpercent:desc,vsconf_wins:desc,vsconf_losses:asc,vsconf_gamesbehind:asc&includestats=playoffseed,vsconf,vsconf_gamesbehind,vsconf_winpercent,total,winpercent,home,road,streak,vsaprankedteams,vsusarankedteams")],
    },
    LeagueRoute {
        league: "NCAAF Rankings",
        provider: Provider::Espn,
        rules: &[always("${espn_site}football/college-football/rankings")],
    },
    LeagueRoute {
        league: "NCAAM Rankings",
        provider: Provider::Espn,
        rules: &[always("${espn_site}basketball/mens-college-basketball/rankings")],
    },
    LeagueRoute {
        league: "NCAAW Rankings",
        provider: Provider::Espn,
        rules: &[always("${espn_site}basketball/womens-college-basketball/rankings")],
    },
    LeagueRoute {
        league: "WNBA",
        provider: Provider::Espn,
        rules: &[
            any_of(WNBA_L1, "${espn}basketball/wnba/standings?level=1&sort=gamesbehind:asc,winpercent:desc"),
            by_default(WNBA_L2, "${espn}basketball/wnba/standings?level=2&sort=gamesbehind:asc,winpercent:desc,playoffseed:asc"),
        ],
    },
    LeagueRoute {
        league: "NBAG",
        provider: Provider::Espn,
        rules: &[
            any_of(NBAG_L1, "${espn}basketball/nba-development/standings?level=1&sort=gamesbehind:asc,winpercent:desc"),
            by_default(NBAG_L2, "${espn}basketball/nba-development/standings?level=2&sort=gamesbehind:asc,winpercent:desc,playoffseed:asc"),
        ],
    },
    LeagueRoute {
        league: "AFL",
        provider: Provider::Espn,
        rules: &[always("${espn}australian-football/afl/standings?&sort=rank:asc")],
    },
    LeagueRoute {
        league: "PLL",
        provider: Provider::Espn,
        rules: &[always("${espn}lacrosse/pll/standings?sort=winPercentage:desc")],
    },
    LeagueRoute {
        league: "NLL",
        provider: Provider::Espn,
        rules: &[always("${espn}lacrosse/nll/standings?sort=winPercentage:desc")],
    },
    LeagueRoute {
        league: "Olympics",
        provider: Provider::Snet,
        rules: &[always("${snet}web_standings?league=oly&season_year=")],
    },
    LeagueRoute {
        league: "CFL",
        provider: Provider::Snet,
        rules: &[always("${snet}web_standings?league=cfl&season_year=")],
    },
];

const TABLE_LEAGUE_TEMPLATE: &str = "${espn}${path}/standings?sort=rank:asc";

/// League name plus `_PLAYOFFS` / `_WILDCARD` when the URL asks for that view.
pub fn notification_suffix(league: &str, url: &str) -> String {
    if url.contains("view=playoff") {
        format!("{}_PLAYOFFS", league)
    } else if url.contains("view=wild-card") {
        format!("{}_WILDCARD", league)
    } else {
        league.to_string()
    }
}

#[derive(Debug, Clone)]
pub struct UrlGenerator {
    vars: HashMap<String, String>,
}

impl UrlGenerator {
    pub fn new(upstream: &UpstreamSettings) -> Self {
        Self {
            vars: upstream.template_vars(),
        }
    }

    /// URLs for one league given its active groups. An empty group list
    /// requests the league's default view.
    pub fn sport_urls(&self, league: &str, groups: &[String]) -> Vec<SportUrl> {
        tracing::debug!("Generating URLs for sport: {}, groups: {:?}", league, groups);

        let urls: Vec<SportUrl> =
            if let Some(route) = LEAGUE_ROUTES.iter().find(|r| r.league == league) {
                route
                    .rules
                    .iter()
                    .filter(|rule| rule.gate.admits(groups))
                    .map(|rule| self.build(league, rule.template, route.provider, None))
                    .collect()
            } else if let Some(path) = league_path(league) {
                vec![self.build(league, TABLE_LEAGUE_TEMPLATE, Provider::Espn, Some(path))]
            } else {
                tracing::warn!("Unknown sport: {}. No URLs generated.", league);
                Vec::new()
            };

        tracing::info!("Generated {} URLs for {}", urls.len(), league);
        urls
    }

    fn build(
        &self,
        league: &str,
        template: &str,
        provider: Provider,
        path: Option<&str>,
    ) -> SportUrl {
        let mut url = prepare_url(template, &self.vars);
        if let Some(path) = path {
            url = url.replace("${path}", path);
        }
        tracing::debug!("Added {} URL: {}", league, url);

        SportUrl {
            suffix: notification_suffix(league, &url),
            url,
            provider,
        }
    }

    /// Every league key this generator can build URLs for.
    pub fn supported_leagues() -> Vec<&'static str> {
        LEAGUE_ROUTES
            .iter()
            .map(|route| route.league)
            .chain(
                LEAGUE_PATHS
                    .iter()
                    .chain(LEGACY_LEAGUE_PATHS.iter())
                    .map(|(name, _)| *name),
            )
            .filter({
                let mut seen = std::collections::HashSet::new();
                move |league| seen.insert(*league)
            })
            .collect()
    }
}
