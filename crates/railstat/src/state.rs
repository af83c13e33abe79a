use std::sync::Arc;

use railstat_core::{JourneyPipeline, Session};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub pipeline: Arc<JourneyPipeline>,
}

impl AppState {
    pub fn new(pipeline: JourneyPipeline) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new())),
            pipeline: Arc::new(pipeline),
        }
    }
}
