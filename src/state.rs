use crate::filter::TabSelection;
use crate::habits::HabitStore;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Records and tab selection live behind separate locks. Handlers needing
/// both take `tabs` first and release it before locking `habits`.
#[derive(Clone)]
pub struct AppState {
    pub habits: Arc<Mutex<HabitStore>>,
    pub tabs: Arc<Mutex<TabSelection>>,
}

impl AppState {
    pub fn new(habits: HabitStore) -> Self {
        Self {
            habits: Arc::new(Mutex::new(habits)),
            tabs: Arc::new(Mutex::new(TabSelection::default())),
        }
    }
}
