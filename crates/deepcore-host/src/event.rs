//! Typed event bus with buffered delivery and subscription handles.
//!
//! Game code emits [`GameEvent`]s during the logic tick; the session driver
//! delivers them in batch and applies the [`Reaction`]s handlers return.
//! Handlers never mutate host state directly -- they describe what should
//! happen and the driver applies it, so delivery order stays deterministic.
//!
//! Every subscription returns a [`SubscriptionId`]. The owner of the handle
//! can remove the subscription with [`EventBus::unsubscribe`]; a handle that
//! is simply retained keeps the subscription alive for the life of the bus.

use crate::content::ContentId;

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// An event dispatched on the host's logic thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A content item transitioned from locked to unlocked.
    ContentUnlocked { content: ContentId },

    /// The client finished loading. Fired once per client session start.
    ClientLoaded,
}

/// Discriminant tag for event types, used to route subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ContentUnlocked,
    ClientLoaded,
}

/// Total number of event kinds.
const EVENT_KIND_COUNT: usize = 2;

impl GameEvent {
    /// Get the discriminant kind for this event.
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::ContentUnlocked { .. } => EventKind::ContentUnlocked,
            GameEvent::ClientLoaded => EventKind::ClientLoaded,
        }
    }
}

impl EventKind {
    /// Convert to usize index for array lookups.
    fn index(self) -> usize {
        self as usize
    }
}

// ---------------------------------------------------------------------------
// Reactions (returned by handlers)
// ---------------------------------------------------------------------------

/// A state change a handler wants applied after delivery. Collected during
/// [`EventBus::deliver`] and drained by the session driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    /// Unlock a content item. Applying this to an already-unlocked item is
    /// a no-op.
    Unlock(ContentId),
}

/// An event handler. Receives each delivered event of its subscribed kind
/// and returns zero or more reactions.
pub type Handler = Box<dyn FnMut(&GameEvent) -> Vec<Reaction>>;

/// Identifies a subscription on an [`EventBus`]. Unique for the life of
/// the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct HandlerEntry {
    id: SubscriptionId,
    handler: Handler,
}

impl std::fmt::Debug for HandlerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerEntry")
            .field("id", &self.id)
            .field("handler", &"<fn>")
            .finish()
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// The central event bus. Buffers emitted events and holds one subscriber
/// list per event kind, dispatched in subscription order.
pub struct EventBus {
    /// Events emitted since the last delivery, in emission order.
    queue: Vec<GameEvent>,

    /// Subscribers indexed by event kind.
    subscribers: [Vec<HandlerEntry>; EVENT_KIND_COUNT],

    /// Reactions collected from handlers during delivery. Drained by the
    /// session driver after each delivery pass.
    pending_reactions: Vec<Reaction>,

    /// Monotonically increasing source for subscription ids.
    next_subscription: u64,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("queue", &self.queue)
            .field("pending_reactions", &self.pending_reactions)
            .field("next_subscription", &self.next_subscription)
            .finish_non_exhaustive()
    }
}

impl EventBus {
    /// Create a new bus with no subscribers and an empty queue.
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            subscribers: [Vec::new(), Vec::new()],
            pending_reactions: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Register a handler for an event kind. Handlers for the same kind are
    /// invoked in subscription order. Returns the handle that identifies
    /// this subscription.
    pub fn subscribe(&mut self, kind: EventKind, handler: Handler) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers[kind.index()].push(HandlerEntry { id, handler });
        id
    }

    /// Remove a subscription. Returns `true` if the handle was live,
    /// `false` if it was already removed or never existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for entries in &mut self.subscribers {
            if let Some(pos) = entries.iter().position(|entry| entry.id == id) {
                entries.remove(pos);
                return true;
            }
        }
        false
    }

    /// Number of live subscriptions for an event kind.
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.subscribers[kind.index()].len()
    }

    /// Queue an event for the next delivery pass.
    pub fn emit(&mut self, event: GameEvent) {
        self.queue.push(event);
    }

    /// Number of events waiting for delivery.
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Deliver all queued events to their subscribers, in emission order.
    /// Reactions returned by handlers accumulate until
    /// [`EventBus::drain_reactions`]. Returns the number of events
    /// delivered.
    ///
    /// Events the driver emits while applying drained reactions land in
    /// the queue and are picked up by the next call.
    pub fn deliver(&mut self) -> usize {
        let events = std::mem::take(&mut self.queue);
        for event in &events {
            for entry in &mut self.subscribers[event.kind().index()] {
                let reactions = (entry.handler)(event);
                self.pending_reactions.extend(reactions);
            }
        }
        events.len()
    }

    /// Drain all reactions collected since the last drain.
    pub fn drain_reactions(&mut self) -> Vec<Reaction> {
        std::mem::take(&mut self.pending_reactions)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
