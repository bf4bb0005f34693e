// Domain layer - Standings configuration and notification models
pub mod command;
pub mod league_paths;
pub mod notification;
pub mod season;
pub mod sport;
