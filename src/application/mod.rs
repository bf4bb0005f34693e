// Application layer - Fetch orchestration, scheduling and command use cases
pub mod command_service;
pub mod fetch_service;
pub mod fetch_tracker;
pub mod logo_service;
pub mod notifier;
pub mod standings_source;
pub mod timer_service;
pub mod url_generator;
