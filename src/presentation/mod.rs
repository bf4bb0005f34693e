// Presentation layer - HTTP surface for commands and notification streams
pub mod app_state;
pub mod handlers;
pub mod router;
