//! Deepcore Host -- the host-engine surface content extensions build on.
//!
//! Content extensions do not own a runtime of their own: the host engine
//! owns the content registry, the unlock flags, the event loop, and the
//! tech tree. This crate models exactly that surface so extensions can be
//! written and tested against it.
//!
//! # Key Types
//!
//! - [`content::ContentRegistry`] -- Unlockable content definitions, keyed
//!   by [`content::ContentId`]. Names are not unique by construction.
//! - [`content::UnlockState`] -- Per-content unlock flags with idempotent
//!   unlocking, serializable for host-side persistence.
//! - [`event::EventBus`] -- Typed event bus. Subscriptions return handles;
//!   handlers return [`event::Reaction`]s instead of mutating state.
//! - [`tree::TechNode`] -- One tech tree entry: a content identity plus an
//!   ordered child list.
//! - [`session::Session`] -- The deliver/drain/apply driver tying the
//!   pieces together on a single logic thread.

pub mod content;
pub mod event;
pub mod session;
pub mod tree;
