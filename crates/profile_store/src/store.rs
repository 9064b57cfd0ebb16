//! The authoritative profile collection.

use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard,
};

use chrono::Utc;
use entities::{Activity, ActivityKind, Profile, ProfileId};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::{
    filter_profiles, seed_activities, seed_profiles, ActivityLog, ListenerRegistry,
    ProfileStoreError, ProfileStoreResult, Statistics, StoreChange, StoreEvent, StoreSnapshot,
    Subscription,
};

/// Capacity of the broadcast channel handed out by [`ProfileStore::channel`].
const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Default)]
struct StoreState {
    profiles: Vec<Profile>,
    activity: ActivityLog,
}

impl StoreState {
    fn seeded() -> Self {
        Self {
            profiles: seed_profiles(),
            activity: ActivityLog::from_entries(seed_activities(Utc::now())),
        }
    }

    fn position(&self, id: ProfileId) -> Option<usize> {
        self.profiles.iter().position(|p| p.id == id)
    }

    fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            profiles: self.profiles.clone(),
            activities: self.activity.all(),
        }
    }
}

/// In-memory owner of the profiles and the activity log.
///
/// Every read returns a copy. Mutations notify listeners synchronously, in
/// registration order, before they return. Concurrent mutations are
/// serialized together with their notifications, so listeners and channel
/// receivers see events in the order the mutations were applied.
#[derive(Debug)]
pub struct ProfileStore {
    state: RwLock<StoreState>,
    /// Held from the start of a mutation until its event is published.
    sequence: Mutex<()>,
    listeners: Arc<ListenerRegistry>,
    events: broadcast::Sender<StoreEvent>,
    last_id: AtomicI64,
}

impl ProfileStore {
    /// Creates a store loaded with the seed data.
    pub fn new() -> Self {
        Self::with_state(StoreState::seeded())
    }

    /// Creates a store with no profiles and no activity.
    pub fn empty() -> Self {
        Self::with_state(StoreState::default())
    }

    fn with_state(state: StoreState) -> Self {
        let last_id = state.profiles.iter().map(|p| p.id).max().unwrap_or(0);
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            state: RwLock::new(state),
            sequence: Mutex::new(()),
            listeners: Arc::new(ListenerRegistry::default()),
            events,
            last_id: AtomicI64::new(last_id),
        }
    }

    /// Returns a fresh id, derived from the current time in milliseconds and
    /// strictly greater than any id this store has handed out or stored.
    ///
    /// Fails once an id equal to `ProfileId::MAX` has been stored.
    pub fn next_id(&self) -> ProfileStoreResult<ProfileId> {
        let now = Utc::now().timestamp_millis();
        let mut next = now;
        self.last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                next = now.max(last.checked_add(1)?);
                Some(next)
            })
            .map_err(|last| {
                warn!(last_id = last, "Profile id counter exhausted");
                ProfileStoreError::ids_exhausted(last)
            })?;
        Ok(next)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Copies out all profiles in display order.
    pub fn list(&self) -> Vec<Profile> {
        self.read().profiles.clone()
    }

    /// Gets a profile by id.
    pub fn get(&self, id: ProfileId) -> Option<Profile> {
        let state = self.read();
        state.position(id).map(|i| state.profiles[i].clone())
    }

    /// Copies out the activity log, newest first.
    pub fn activities(&self) -> Vec<Activity> {
        self.read().activity.all()
    }

    /// Copies out profiles and activities together.
    pub fn snapshot(&self) -> StoreSnapshot {
        self.read().snapshot()
    }

    /// Profiles whose name, email or role contains `query`.
    pub fn search(&self, query: &str) -> Vec<Profile> {
        let state = self.read();
        filter_profiles(&state.profiles, query)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Computes statistics over the current profiles.
    pub fn statistics(&self) -> Statistics {
        Statistics::from_profiles(&self.read().profiles)
    }

    /// Serializes the profiles as pretty-printed JSON.
    pub fn export_snapshot(&self) -> ProfileStoreResult<String> {
        let state = self.read();
        Ok(serde_json::to_string_pretty(&state.profiles)?)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Appends a profile. Fails if its id is already stored.
    pub fn add(&self, profile: Profile) -> ProfileStoreResult<Profile> {
        let _sequence = self.sequence();
        let event = {
            let mut state = self.write();
            if state.position(profile.id).is_some() {
                warn!(profile_id = profile.id, "Rejected profile with duplicate id");
                return Err(ProfileStoreError::duplicate_id(profile.id));
            }

            let description = match profile.department {
                Some(department) => format!("{} se unió al equipo ({})", profile.name, department),
                None => format!("{} se unió al equipo", profile.name),
            };
            state.profiles.push(profile.clone());
            state
                .activity
                .record(Activity::new(ActivityKind::ProfileAdded, description));
            self.last_id.fetch_max(profile.id, Ordering::SeqCst);

            info!(profile_id = profile.id, total = state.profiles.len(), "Profile added");
            self.event(StoreChange::Added(profile.id), &state)
        };

        self.publish(event);
        Ok(profile)
    }

    /// Replaces the profile with the same id, keeping its position.
    pub fn update(&self, profile: Profile) -> ProfileStoreResult<Profile> {
        let _sequence = self.sequence();
        let event = {
            let mut state = self.write();
            let Some(index) = state.position(profile.id) else {
                warn!(profile_id = profile.id, "Update for unknown profile");
                return Err(ProfileStoreError::not_found(profile.id));
            };

            state.profiles[index] = profile.clone();
            state.activity.record(Activity::new(
                ActivityKind::ProfileUpdated,
                format!("{} actualizó su información", profile.name),
            ));

            info!(profile_id = profile.id, "Profile updated");
            self.event(StoreChange::Updated(profile.id), &state)
        };

        self.publish(event);
        Ok(profile)
    }

    /// Removes the profile with `id` and returns it.
    pub fn remove(&self, id: ProfileId) -> ProfileStoreResult<Profile> {
        let _sequence = self.sequence();
        let (removed, event) = {
            let mut state = self.write();
            let Some(index) = state.position(id) else {
                warn!(profile_id = id, "Delete for unknown profile");
                return Err(ProfileStoreError::not_found(id));
            };

            let removed = state.profiles.remove(index);
            state.activity.record(Activity::new(
                ActivityKind::ProfileDeleted,
                format!("{} fue eliminado del sistema", removed.name),
            ));

            info!(profile_id = id, total = state.profiles.len(), "Profile removed");
            let event = self.event(StoreChange::Removed(id), &state);
            (removed, event)
        };

        self.publish(event);
        Ok(removed)
    }

    /// Discards all profiles and activity and reloads the seed data.
    pub fn reset(&self) {
        let _sequence = self.sequence();
        let event = {
            let mut state = self.write();
            *state = StoreState::seeded();
            info!("Profile store reset to seed data");
            self.event(StoreChange::Reset, &state)
        };

        self.publish(event);
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Registers `listener` to run after every successful mutation.
    ///
    /// The listener runs on the mutating thread before the mutation
    /// returns. It may read from the store but must not mutate it: the
    /// mutation that triggered it still holds the ordering lock.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&StoreEvent) + Send + Sync + 'static,
    {
        let subscription = self.listeners.register(Arc::new(listener));
        debug!(listeners = self.listeners.len(), "Store listener registered");
        subscription
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Returns a channel receiving every future [`StoreEvent`], for
    /// consumers on other threads. Events arrive in mutation order.
    pub fn channel(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    fn event(&self, change: StoreChange, state: &StoreState) -> StoreEvent {
        StoreEvent {
            change,
            snapshot: Arc::new(state.snapshot()),
        }
    }

    fn publish(&self, event: StoreEvent) {
        self.listeners.notify(&event);
        // No receivers is fine.
        let _ = self.events.send(event);
    }

    fn sequence(&self) -> MutexGuard<'_, ()> {
        self.sequence.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}
