// Application state for HTTP handlers
use crate::application::command_service::CommandService;
use crate::application::notifier::Notifier;

#[derive(Clone)]
pub struct AppState {
    pub command_service: CommandService,
    pub notifier: Notifier,
}
