//! Shared application state.

use std::sync::Arc;

use crate::application::services::{CovidStatsService, RecordService};
use crate::domain::StatsProvider;
use crate::domain::repositories::RecordRepository;

/// Services injected into every handler.
///
/// Built once in [`crate::server::run`] (or by tests with stub collaborators);
/// cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub stats_service: Arc<CovidStatsService>,
    pub record_service: Arc<RecordService>,
}

impl AppState {
    pub fn new(
        provider: Arc<dyn StatsProvider>,
        repository: Arc<dyn RecordRepository>,
    ) -> Self {
        Self {
            stats_service: Arc::new(CovidStatsService::new(provider)),
            record_service: Arc::new(RecordService::new(repository)),
        }
    }
}
