//! Unlockable content registry and unlock state.
//!
//! Content definitions are registered at startup and immutable afterwards.
//! Unlock flags live in a separate [`UnlockState`] so the host can persist
//! them independently of the definitions.

use serde::{Deserialize, Serialize};
use slotmap::{SecondaryMap, SlotMap, new_key_type};
use std::collections::HashMap;

new_key_type! {
    /// Identifies an unlockable content item. Cheap to copy and compare;
    /// equality on `ContentId` is identity equality.
    pub struct ContentId;
}

/// Category of an unlockable content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Block,
    Unit,
    Item,
    Sector,
}

/// A content definition. Immutable after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDef {
    pub name: String,
    pub kind: ContentKind,
}

/// Errors that can occur during registry lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("content not found: {0}")]
    NotFound(String),
}

// ---------------------------------------------------------------------------
// ContentRegistry
// ---------------------------------------------------------------------------

/// Registry of unlockable content, keyed by [`ContentId`].
///
/// Names are not required to be unique. Two distinct content items may share
/// a name; [`ContentRegistry::lookup`] resolves to whichever was registered
/// first. Callers that match content by name inherit this ambiguity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentRegistry {
    contents: SlotMap<ContentId, ContentDef>,

    /// First-registered id per name. Later registrations under the same
    /// name do not displace the original entry.
    by_name: HashMap<String, ContentId>,
}

impl ContentRegistry {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a content item. Returns its ID.
    pub fn register(&mut self, name: &str, kind: ContentKind) -> ContentId {
        let id = self.contents.insert(ContentDef {
            name: name.to_string(),
            kind,
        });
        self.by_name.entry(name.to_string()).or_insert(id);
        id
    }

    /// Resolve a name to the first content registered under it.
    pub fn lookup(&self, name: &str) -> Option<ContentId> {
        self.by_name.get(name).copied()
    }

    /// Resolve a name, erroring if no content carries it.
    pub fn require(&self, name: &str) -> Result<ContentId, RegistryError> {
        self.lookup(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Get the name of a content item.
    pub fn name_of(&self, id: ContentId) -> Option<&str> {
        self.contents.get(id).map(|def| def.name.as_str())
    }

    /// Get the kind of a content item.
    pub fn kind_of(&self, id: ContentId) -> Option<ContentKind> {
        self.contents.get(id).map(|def| def.kind)
    }

    /// Get the full definition of a content item.
    pub fn get(&self, id: ContentId) -> Option<&ContentDef> {
        self.contents.get(id)
    }

    /// Number of registered content items.
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Iterate over all registered content in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (ContentId, &ContentDef)> {
        self.contents.iter()
    }
}

// ---------------------------------------------------------------------------
// UnlockState
// ---------------------------------------------------------------------------

/// Per-content unlock flags. Owned by the host; fully serializable so the
/// host can persist it across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnlockState {
    unlocked: SecondaryMap<ContentId, ()>,
}

impl UnlockState {
    /// Create a new state with everything locked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a content item is unlocked.
    pub fn is_unlocked(&self, id: ContentId) -> bool {
        self.unlocked.contains_key(id)
    }

    /// Unlock a content item. Returns `true` if the flag transitioned,
    /// `false` if it was already set. Unlocking twice is a no-op.
    pub fn unlock(&mut self, id: ContentId) -> bool {
        self.unlocked.insert(id, ()).is_none()
    }

    /// Number of unlocked content items.
    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_lookup() {
        let mut registry = ContentRegistry::new();
        let drill = registry.register("mechanical-drill", ContentKind::Block);

        assert_eq!(registry.lookup("mechanical-drill"), Some(drill));
        assert_eq!(registry.name_of(drill), Some("mechanical-drill"));
        assert_eq!(registry.kind_of(drill), Some(ContentKind::Block));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn require_missing_content_errors() {
        let registry = ContentRegistry::new();
        let result = registry.require("laser-drill");
        assert_eq!(
            result,
            Err(RegistryError::NotFound("laser-drill".to_string()))
        );
    }

    #[test]
    fn duplicate_names_resolve_to_first() {
        let mut registry = ContentRegistry::new();
        let first = registry.register("drill", ContentKind::Block);
        let second = registry.register("drill", ContentKind::Block);

        assert_ne!(first, second);
        assert_eq!(registry.lookup("drill"), Some(first));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn unlock_is_idempotent() {
        let mut registry = ContentRegistry::new();
        let drill = registry.register("mechanical-drill", ContentKind::Block);

        let mut unlocks = UnlockState::new();
        assert!(!unlocks.is_unlocked(drill));

        assert!(unlocks.unlock(drill));
        assert!(unlocks.is_unlocked(drill));

        // Second unlock reports no transition.
        assert!(!unlocks.unlock(drill));
        assert!(unlocks.is_unlocked(drill));
        assert_eq!(unlocks.unlocked_count(), 1);
    }

    #[test]
    fn unlock_state_serialization_round_trip() {
        let mut registry = ContentRegistry::new();
        let a = registry.register("a", ContentKind::Block);
        let b = registry.register("b", ContentKind::Unit);

        let mut unlocks = UnlockState::new();
        unlocks.unlock(a);

        let json = serde_json::to_string(&unlocks).unwrap();
        let restored: UnlockState = serde_json::from_str(&json).unwrap();

        assert!(restored.is_unlocked(a));
        assert!(!restored.is_unlocked(b));
    }
}
