//! Deepcore -- a drill-tier content extension for the Deepcore host.
//!
//! Two small operations over host-owned data, plus the configuration that
//! wires them up for one content pack:
//!
//! - [`tree_edit`] -- locate a tech tree node by content name and graft new
//!   child nodes onto it.
//! - [`sync`] -- keep dependent content unlocked in lockstep with a trigger
//!   via the host's event bus, with a catch-up path for triggers that
//!   unlocked before the synchronizer was installed.
//! - [`pack`] -- the composition root: registers the drill tier blocks,
//!   inserts them under the base drills, and wires the unlock
//!   synchronizers.
//!
//! The module owns no runtime: the host owns the event loop, the content
//! registry, and unlock persistence. Everything here is a synchronous
//! traversal or a subscription on the host's bus.

pub mod pack;
pub mod sync;
pub mod tree_edit;

pub use pack::{DrillTiersPack, PackError, install};
pub use sync::sync_unlocks;
pub use tree_edit::{find_and_add_content, find_and_add_nodes, find_node};
