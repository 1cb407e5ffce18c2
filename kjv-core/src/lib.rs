//! Core behavior of the KJV school site.
//!
//! # Core Concepts
//!
//! - [`RevealItem`]: the one-way hidden → visible controller behind every
//!   scroll-triggered entrance animation on the page.
//! - [`Viewport`] / [`Rect`]: geometry used to measure how much of an element
//!   sits inside the visible screen area.
//! - [`TimerQueue`]: one-shot timers that stagger reveals.
//! - [`NavState`]: the navbar's mobile menu flag and its scrolled flag.
//! - [`PageRuntime`]: a deterministic, single-threaded model of the page that
//!   mounts sections, drives intersection checks on scroll and fires timers as
//!   time advances.

pub mod nav;
pub mod reveal;
pub mod runtime;
pub mod timers;
pub mod viewport;

pub use nav::{NavState, SCROLLED_OFFSET_PX};
pub use reveal::{RevealItem, RevealPhase, RevealTrigger, REVEAL_THRESHOLD};
pub use runtime::{
    ItemId, MountSpec, ObserverSupport, PageRuntime, RevealRecord, RuntimeError, SectionId,
    SectionSpec,
};
pub use timers::{TimerId, TimerQueue};
pub use viewport::{Rect, Viewport};

/// Milliseconds on the page clock.
pub type Millis = u64;
