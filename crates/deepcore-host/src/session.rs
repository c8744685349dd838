//! Session driver: the slice of the host runtime that content extensions
//! touch.
//!
//! All logic is single-threaded and cooperative. The host emits events,
//! then [`Session::pump`] delivers them and applies the reactions handlers
//! return, repeating until the system is quiescent. Unlock application is
//! idempotent: a [`Reaction::Unlock`] for an already-unlocked item changes
//! nothing and emits nothing.

use crate::content::{ContentId, ContentRegistry, UnlockState};
use crate::event::{EventBus, GameEvent, Reaction};
use crate::tree::TechNode;

/// The host runtime state a content extension operates on: content
/// definitions, unlock flags, the event bus, and the tech tree.
#[derive(Debug)]
pub struct Session {
    pub registry: ContentRegistry,
    pub unlocks: UnlockState,
    pub bus: EventBus,
    pub tech_tree: TechNode,
}

impl Session {
    /// Create a session over a registry and a tech tree root.
    pub fn new(registry: ContentRegistry, tech_tree: TechNode) -> Self {
        Self {
            registry,
            unlocks: UnlockState::new(),
            bus: EventBus::new(),
            tech_tree,
        }
    }

    /// Whether a content item is unlocked.
    pub fn is_unlocked(&self, content: ContentId) -> bool {
        self.unlocks.is_unlocked(content)
    }

    /// Unlock a content item. When the flag transitions, a
    /// [`GameEvent::ContentUnlocked`] is emitted for the next delivery
    /// pass. Returns whether the flag transitioned.
    pub fn unlock(&mut self, content: ContentId) -> bool {
        if self.unlocks.unlock(content) {
            self.bus.emit(GameEvent::ContentUnlocked { content });
            return true;
        }
        false
    }

    /// Announce that the client finished loading. The host fires this once
    /// per client session start.
    pub fn notify_client_loaded(&mut self) {
        self.bus.emit(GameEvent::ClientLoaded);
    }

    /// Deliver queued events and apply the resulting reactions, repeating
    /// until no reactions remain. Unlocks applied here emit follow-on
    /// `ContentUnlocked` events, so chains of synchronized unlocks resolve
    /// within a single pump. Returns the total number of events delivered.
    ///
    /// Termination: unlock application is idempotent, so a cycle of
    /// synchronizers stops producing events once every member is unlocked.
    pub fn pump(&mut self) -> usize {
        let mut delivered = 0;
        loop {
            delivered += self.bus.deliver();
            let reactions = self.bus.drain_reactions();
            if reactions.is_empty() {
                break;
            }
            for reaction in reactions {
                match reaction {
                    Reaction::Unlock(content) => {
                        self.unlock(content);
                    }
                }
            }
        }
        delivered
    }
}

// ===========================================================================
// Tests
// ===========================================================================
