use launchdash_core::Dashboard;

/// Shared by every request. The dashboard's dataset is immutable, so
/// concurrent handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Dashboard,
}

impl AppState {
    pub fn new(dashboard: Dashboard) -> Self {
        Self { dashboard }
    }
}
