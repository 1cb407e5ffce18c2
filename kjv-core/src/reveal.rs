//! The scroll-reveal controller.
//!
//! A [`RevealItem`] is `Hidden` until the element it stands for is seen in the
//! viewport (or, for [`RevealTrigger::Mount`], until it is mounted). The first
//! qualifying event schedules the reveal `delay` milliseconds later; when that
//! deadline is reached the item becomes `Visible` and stays that way.
//!
//! The item never owns a timer itself. Methods return the deadline to schedule
//! and the caller (normally [`crate::PageRuntime`]) decides when to call
//! [`RevealItem::fire`].

use serde::{Deserialize, Serialize};

use crate::Millis;

/// Minimum visible fraction of the element that counts as "seen".
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// What starts the reveal countdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealTrigger {
    /// First intersection at or above [`REVEAL_THRESHOLD`].
    #[default]
    Intersection,
    /// Mounting the element, regardless of scroll position.
    Mount,
}

/// Where an item is in its one-way lifecycle.
///
/// `Scheduled` is still hidden; it only records that the trigger has been seen
/// and the reveal is waiting on its delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    Scheduled { due_at: Millis },
    Visible { at: Millis },
}

#[derive(Debug, Clone)]
pub struct RevealItem {
    delay: Millis,
    trigger: RevealTrigger,
    phase: RevealPhase,
    attached: bool,
}

impl RevealItem {
    /// An item revealed `delay` ms after it first intersects the viewport.
    pub fn new(delay: Millis) -> Self {
        Self {
            delay,
            trigger: RevealTrigger::Intersection,
            phase: RevealPhase::Hidden,
            attached: false,
        }
    }

    /// An item revealed `delay` ms after it is mounted.
    pub fn on_mount(delay: Millis) -> Self {
        Self {
            trigger: RevealTrigger::Mount,
            ..Self::new(delay)
        }
    }

    pub fn with_trigger(delay: Millis, trigger: RevealTrigger) -> Self {
        match trigger {
            RevealTrigger::Intersection => Self::new(delay),
            RevealTrigger::Mount => Self::on_mount(delay),
        }
    }

    pub fn delay(&self) -> Millis {
        self.delay
    }

    pub fn trigger(&self) -> RevealTrigger {
        self.trigger
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.phase, RevealPhase::Visible { .. })
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Begin observing. Mount-triggered items return their reveal deadline.
    pub fn attach(&mut self, now: Millis) -> Option<Millis> {
        self.attached = true;
        match (self.trigger, self.phase) {
            (RevealTrigger::Mount, RevealPhase::Hidden) => Some(self.schedule(now)),
            _ => None,
        }
    }

    /// Feed one intersection measurement.
    ///
    /// Returns the reveal deadline the first time the ratio reaches the
    /// threshold; every later measurement is ignored.
    pub fn observe(&mut self, ratio: f64, now: Millis) -> Option<Millis> {
        if !self.attached
            || self.trigger != RevealTrigger::Intersection
            || self.phase != RevealPhase::Hidden
        {
            return None;
        }
        if ratio <= 0.0 || ratio < REVEAL_THRESHOLD {
            return None;
        }
        Some(self.schedule(now))
    }

    /// Complete a scheduled reveal once its deadline has been reached.
    pub fn fire(&mut self, now: Millis) -> bool {
        match self.phase {
            RevealPhase::Scheduled { due_at } if self.attached && now >= due_at => {
                self.phase = RevealPhase::Visible { at: now };
                true
            }
            _ => false,
        }
    }

    /// Reveal immediately without waiting for an intersection.
    ///
    /// Used when the host cannot observe intersections, so the element is
    /// never left hidden for good.
    pub fn reveal_unobserved(&mut self, now: Millis) -> bool {
        if !self.attached || self.is_visible() {
            return false;
        }
        self.phase = RevealPhase::Visible { at: now };
        true
    }

    /// Stop observing. Returns true if a scheduled reveal is abandoned.
    pub fn detach(&mut self) -> bool {
        self.attached = false;
        matches!(self.phase, RevealPhase::Scheduled { .. })
    }

    fn schedule(&mut self, now: Millis) -> Millis {
        let due_at = now.saturating_add(self.delay);
        self.phase = RevealPhase::Scheduled { due_at };
        due_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attached(delay: Millis) -> RevealItem {
        let mut item = RevealItem::new(delay);
        assert_eq!(item.attach(0), None);
        item
    }

    #[test]
    fn starts_hidden_and_detached() {
        let item = RevealItem::new(0);
        assert_eq!(item.phase(), RevealPhase::Hidden);
        assert!(!item.is_visible());
        assert!(!item.is_attached());
    }

    #[test]
    fn ignores_observations_before_attach() {
        let mut item = RevealItem::new(0);
        assert_eq!(item.observe(1.0, 0), None);
        assert_eq!(item.phase(), RevealPhase::Hidden);
    }

    #[test]
    fn below_threshold_does_not_schedule() {
        let mut item = attached(0);
        assert_eq!(item.observe(0.0, 10), None);
        assert_eq!(item.observe(0.09, 10), None);
        assert_eq!(item.phase(), RevealPhase::Hidden);
    }

    #[test]
    fn threshold_schedules_after_delay() {
        let mut item = attached(300);
        assert_eq!(item.observe(REVEAL_THRESHOLD, 1_000), Some(1_300));
        assert!(!item.fire(1_299));
        assert!(!item.is_visible());
        assert!(item.fire(1_300));
        assert_eq!(item.phase(), RevealPhase::Visible { at: 1_300 });
    }

    #[test]
    fn later_intersections_are_ignored() {
        let mut item = attached(100);
        assert_eq!(item.observe(0.5, 0), Some(100));
        assert_eq!(item.observe(1.0, 50), None);
        assert!(item.fire(100));
        assert_eq!(item.observe(1.0, 200), None);
        assert!(!item.fire(300));
        assert_eq!(item.phase(), RevealPhase::Visible { at: 100 });
    }

    #[test]
    fn mount_trigger_schedules_on_attach() {
        let mut item = RevealItem::on_mount(600);
        assert_eq!(item.attach(0), Some(600));
        assert_eq!(item.observe(1.0, 10), None);
        assert!(item.fire(600));
    }

    #[test]
    fn detach_abandons_pending_reveal() {
        let mut item = attached(500);
        item.observe(1.0, 0);
        assert!(item.detach());
        assert!(!item.fire(1_000));
        assert!(!item.is_visible());
    }

    #[test]
    fn detach_without_pending_reveal_reports_nothing() {
        let mut item = attached(500);
        assert!(!item.detach());
    }

    #[test]
    fn unobserved_reveal_is_immediate() {
        let mut item = attached(400);
        assert!(item.reveal_unobserved(7));
        assert_eq!(item.phase(), RevealPhase::Visible { at: 7 });
        assert!(!item.reveal_unobserved(8));
    }
}
