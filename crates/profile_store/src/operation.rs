//! Serializable store mutations.

use entities::{ProfileDraft, ProfileId};
use serde::{Deserialize, Serialize};
use tracing::debug;
use validation::Validator;

use crate::{ProfileStore, ProfileStoreError, ProfileStoreResult, StoreChange};

/// A mutation described as data, so a sequence of them can be replayed
/// from a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StoreOperation {
    /// Create a profile from a form draft. The store assigns the id.
    Add { profile: ProfileDraft },
    /// Replace the fields of an existing profile.
    Update { id: ProfileId, profile: ProfileDraft },
    /// Delete a profile.
    Remove { id: ProfileId },
    /// Reload the seed data.
    Reset,
}

impl ProfileStore {
    /// Validates the operation's draft, if any, then applies it.
    pub fn apply(
        &self,
        operation: StoreOperation,
        validator: &Validator,
    ) -> ProfileStoreResult<StoreChange> {
        debug!(?operation, "Applying store operation");
        match operation {
            StoreOperation::Add { profile } => {
                let profile = validator.accept_new(&profile, self.next_id()?)?;
                let added = self.add(profile)?;
                Ok(StoreChange::Added(added.id))
            }
            StoreOperation::Update { id, profile } => {
                let existing = self
                    .get(id)
                    .ok_or_else(|| ProfileStoreError::not_found(id))?;
                let updated = validator.accept_update(&profile, &existing)?;
                self.update(updated)?;
                Ok(StoreChange::Updated(id))
            }
            StoreOperation::Remove { id } => {
                self.remove(id)?;
                Ok(StoreChange::Removed(id))
            }
            StoreOperation::Reset => {
                self.reset();
                Ok(StoreChange::Reset)
            }
        }
    }
}
