use std::sync::Arc;

use crate::config::Config;
use crate::submission::FormSubmissionHandler;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub handler: FormSubmissionHandler,
    pub config: Config,
}
