//! The drill-tier content pack.
//!
//! Configuration, not core logic: one [`install`] call registers the six
//! tier blocks, grafts them under the host's two base drills in the tech
//! tree, and wires each family's small tier to unlock in lockstep with its
//! base drill.

use crate::sync::sync_unlocks;
use crate::tree_edit::find_and_add_content;
use deepcore_host::content::{ContentId, ContentKind, RegistryError};
use deepcore_host::event::SubscriptionId;
use deepcore_host::session::Session;
use log::warn;

/// Host content the pack anchors on.
pub const MECHANICAL_DRILL: &str = "mechanical-drill";
pub const PNEUMATIC_DRILL: &str = "pneumatic-drill";

/// Tier blocks added by the pack, in tree layout order.
pub const MECHANICAL_TIERS: [&str; 3] = [
    "mechanical-drill-small",
    "mechanical-drill-large",
    "mechanical-drill-extra-large",
];
pub const PNEUMATIC_TIERS: [&str; 3] = [
    "pneumatic-drill-small",
    "pneumatic-drill-large",
    "pneumatic-drill-extra-large",
];

/// Errors that can occur while installing the pack.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PackError {
    /// A base drill the pack anchors on is not in the host registry.
    #[error("anchor content missing from host registry: {0}")]
    MissingAnchor(#[from] RegistryError),
}

/// The installed pack. Holds the ids of the blocks it registered and the
/// subscription handles for its unlock synchronizers, so the composition
/// root owns their lifetime.
#[derive(Debug)]
pub struct DrillTiersPack {
    pub mechanical_tiers: [ContentId; 3],
    pub pneumatic_tiers: [ContentId; 3],
    subscriptions: Vec<SubscriptionId>,
}

impl DrillTiersPack {
    /// Handles for the pack's event subscriptions.
    pub fn subscriptions(&self) -> &[SubscriptionId] {
        &self.subscriptions
    }
}

/// Install the pack into a host session. Invoked once during content
/// loading.
///
/// Tree insertion is non-fatal: a base drill present in the registry but
/// absent from the tech tree logs a warning and the tiers are simply not
/// placed, matching how the host treats tree edits against missing nodes.
pub fn install(session: &mut Session) -> Result<DrillTiersPack, PackError> {
    let mechanical = session.registry.require(MECHANICAL_DRILL)?;
    let pneumatic = session.registry.require(PNEUMATIC_DRILL)?;

    let mechanical_tiers =
        MECHANICAL_TIERS.map(|name| session.registry.register(name, ContentKind::Block));
    let pneumatic_tiers =
        PNEUMATIC_TIERS.map(|name| session.registry.register(name, ContentKind::Block));

    for (anchor, tiers) in [(mechanical, &mechanical_tiers), (pneumatic, &pneumatic_tiers)] {
        let placed = find_and_add_content(
            &session.registry,
            &mut session.tech_tree,
            anchor,
            tiers.as_slice(),
        );
        if !placed {
            let name = session.registry.name_of(anchor).unwrap_or("<unregistered>");
            warn!("{name} has no tech tree node; drill tiers not placed");
        }
    }

    // The small tier of each family is a sidegrade: it opens up together
    // with its base drill.
    let subscriptions = vec![
        sync_unlocks(
            &mut session.bus,
            &session.unlocks,
            &session.registry,
            mechanical,
            vec![mechanical_tiers[0]],
        ),
        sync_unlocks(
            &mut session.bus,
            &session.unlocks,
            &session.registry,
            pneumatic,
            vec![pneumatic_tiers[0]],
        ),
    ];

    Ok(DrillTiersPack {
        mechanical_tiers,
        pneumatic_tiers,
        subscriptions,
    })
}

// ===========================================================================
// Tests
// ===========================================================================
