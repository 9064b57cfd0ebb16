//! Application state

use profile_store::{ProfileStore, StoreEvent, Subscription};
use tracing::debug;
use validation::Validator;

use crate::{config::AppConfig, preferences::PreferencesManager};

/// Everything a command needs, constructed once per process
pub struct AppState {
    /// Effective configuration
    pub config: AppConfig,

    /// Profile store, seeded at start-up
    pub store: ProfileStore,

    /// Validator for the configured locale
    pub validator: Validator,

    /// Persisted preferences
    pub preferences: PreferencesManager,

    /// Keeps the change log listener registered
    _change_log: Subscription,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: AppConfig) -> Self {
        let store = ProfileStore::new();
        let change_log = store.subscribe(|event: &StoreEvent| {
            debug!(
                change = ?event.change,
                profiles = event.snapshot.profiles.len(),
                activities = event.snapshot.activities.len(),
                "Store changed"
            );
        });

        Self {
            validator: Validator::new(config.locale),
            preferences: PreferencesManager::new(config.preferences_path.clone()),
            store,
            config,
            _change_log: change_log,
        }
    }
}
