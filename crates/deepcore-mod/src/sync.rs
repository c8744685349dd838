//! Keeping dependent content unlocked in lockstep with a trigger.
//!
//! The branch is chosen once, when the synchronizer is installed, from the
//! trigger's unlock state at that moment:
//!
//! - Trigger still locked: watch for its `ContentUnlocked` event and unlock
//!   the dependents when it arrives.
//! - Trigger already unlocked: its unlock event is in the past and will
//!   never arrive again, so unlock the dependents on the next
//!   `ClientLoaded` instead.
//!
//! Both branches funnel through the host's idempotent unlock application,
//! so dependents that are already unlocked stay as they are and repeated
//! trigger events change nothing. Neither branch surfaces errors; progress
//! is visible through the host's unlock state and debug log lines.

use deepcore_host::content::{ContentId, ContentRegistry, UnlockState};
use deepcore_host::event::{EventBus, EventKind, GameEvent, Reaction, SubscriptionId};
use log::debug;

/// Arrange for `dependents` to become unlocked in lockstep with `trigger`.
///
/// The subscription stays installed until the returned handle is passed to
/// [`EventBus::unsubscribe`]; composition roots are expected to retain it.
pub fn sync_unlocks(
    bus: &mut EventBus,
    unlocks: &UnlockState,
    registry: &ContentRegistry,
    trigger: ContentId,
    dependents: Vec<ContentId>,
) -> SubscriptionId {
    let trigger_name = display_name(registry, trigger);
    let dependent_names = dependents
        .iter()
        .map(|&id| display_name(registry, id))
        .collect::<Vec<_>>()
        .join(", ");

    if !unlocks.is_unlocked(trigger) {
        debug!("when {trigger_name} unlocks, also unlocking: {dependent_names}");
        bus.subscribe(
            EventKind::ContentUnlocked,
            Box::new(move |event| match event {
                // Identity comparison, as delivered by the host.
                GameEvent::ContentUnlocked { content } if *content == trigger => {
                    dependents.iter().copied().map(Reaction::Unlock).collect()
                }
                _ => Vec::new(),
            }),
        )
    } else {
        debug!("{trigger_name} already unlocked; unlocking on next client load: {dependent_names}");
        bus.subscribe(
            EventKind::ClientLoaded,
            Box::new(move |_| dependents.iter().copied().map(Reaction::Unlock).collect()),
        )
    }
}

fn display_name(registry: &ContentRegistry, id: ContentId) -> String {
    registry.name_of(id).unwrap_or("<unregistered>").to_string()
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use deepcore_host::content::{ContentKind, ContentRegistry};
    use deepcore_host::session::Session;
    use deepcore_host::tree::TechNode;

    fn session_with(names: &[&str]) -> (Session, Vec<ContentId>) {
        let mut registry = ContentRegistry::new();
        let root = registry.register("root", ContentKind::Block);
        let ids = names
            .iter()
            .map(|name| registry.register(name, ContentKind::Block))
            .collect();
        let session = Session::new(registry, TechNode::new(root));
        (session, ids)
    }

    fn install(session: &mut Session, trigger: ContentId, deps: Vec<ContentId>) -> SubscriptionId {
        sync_unlocks(
            &mut session.bus,
            &session.unlocks,
            &session.registry,
            trigger,
            deps,
        )
    }

    #[test]
    fn trigger_unlock_unlocks_all_dependents() {
        let (mut session, ids) = session_with(&["t", "d1", "d2"]);
        let (t, d1, d2) = (ids[0], ids[1], ids[2]);

        install(&mut session, t, vec![d1, d2]);

        session.unlock(t);
        session.pump();

        assert!(session.is_unlocked(d1));
        assert!(session.is_unlocked(d2));
    }

    #[test]
    fn unrelated_unlock_leaves_dependents_locked() {
        let (mut session, ids) = session_with(&["t", "d1", "d2", "u"]);
        let (t, d1, d2, u) = (ids[0], ids[1], ids[2], ids[3]);

        install(&mut session, t, vec![d1, d2]);

        session.unlock(u);
        session.pump();

        assert!(!session.is_unlocked(d1));
        assert!(!session.is_unlocked(d2));
    }

    #[test]
    fn already_unlocked_trigger_catches_up_on_client_load() {
        let (mut session, ids) = session_with(&["t", "d1", "d2"]);
        let (t, d1, d2) = (ids[0], ids[1], ids[2]);

        // Trigger unlocked in a past session; one dependent already caught up.
        session.unlock(t);
        session.unlock(d2);
        session.pump();

        install(&mut session, t, vec![d1, d2]);

        // No ContentUnlocked subscription was made: the trigger's unlock
        // event will never fire again.
        assert_eq!(session.bus.subscriber_count(EventKind::ContentUnlocked), 0);
        assert_eq!(session.bus.subscriber_count(EventKind::ClientLoaded), 1);

        session.notify_client_loaded();
        session.pump();

        assert!(session.is_unlocked(d1));
        assert!(session.is_unlocked(d2));
    }

    #[test]
    fn repeated_trigger_events_are_harmless() {
        let (mut session, ids) = session_with(&["t", "d1"]);
        let (t, d1) = (ids[0], ids[1]);

        install(&mut session, t, vec![d1]);

        session.unlock(t);
        session.pump();
        assert!(session.is_unlocked(d1));

        // The host never re-fires an unlock, but a duplicate delivery must
        // still be a no-op.
        session
            .bus
            .emit(GameEvent::ContentUnlocked { content: t });
        session.pump();

        assert!(session.is_unlocked(d1));
        assert_eq!(session.unlocks.unlocked_count(), 2);
    }

    #[test]
    fn branch_choice_is_fixed_at_call_time() {
        let (mut session, ids) = session_with(&["t", "d1"]);
        let (t, d1) = (ids[0], ids[1]);

        install(&mut session, t, vec![d1]);

        // Installed while locked, so a later client load does nothing by
        // itself; only the trigger's unlock event synchronizes.
        session.notify_client_loaded();
        session.pump();
        assert!(!session.is_unlocked(d1));

        session.unlock(t);
        session.pump();
        assert!(session.is_unlocked(d1));
    }

    #[test]
    fn unsubscribing_the_handle_stops_synchronization() {
        let (mut session, ids) = session_with(&["t", "d1"]);
        let (t, d1) = (ids[0], ids[1]);

        let handle = install(&mut session, t, vec![d1]);
        assert!(session.bus.unsubscribe(handle));

        session.unlock(t);
        session.pump();

        assert!(!session.is_unlocked(d1));
    }
}
