//! Deterministic model of the page in a browser.
//!
//! [`PageRuntime`] owns the viewport, the page clock, the navbar state and
//! every mounted reveal item. Intersection checks run on mount, scroll and
//! resize; reveal timers fire only when the clock is advanced. Nothing here
//! is threaded: every call runs to completion before the next one starts,
//! which is exactly the guarantee a browser's event loop gives.

use std::collections::HashMap;

use serde::Serialize;

use crate::nav::NavState;
use crate::reveal::{RevealItem, RevealTrigger};
use crate::timers::{TimerId, TimerQueue};
use crate::viewport::{Rect, Viewport};
use crate::Millis;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RuntimeError {
    #[error("section {0:?} is not mounted")]
    SectionNotMounted(SectionId),
    #[error("no mounted item with key `{0}`")]
    UnknownItem(String),
    #[error("item key `{0}` is already mounted")]
    DuplicateKey(String),
    #[error("clock cannot move backwards from {now}ms to {requested}ms")]
    ClockBackwards { now: Millis, requested: Millis },
    #[error("no mounted section with anchor `#{0}`")]
    UnknownAnchor(String),
}

/// Whether the host can report viewport intersections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ObserverSupport {
    #[default]
    Supported,
    /// Intersection-triggered items are revealed as soon as they mount.
    Unsupported,
}

/// One revealable element to mount.
#[derive(Debug, Clone, PartialEq)]
pub struct MountSpec {
    pub key: String,
    /// The element whose intersection is observed.
    pub rect: Rect,
    pub delay: Millis,
    pub trigger: RevealTrigger,
}

impl MountSpec {
    pub fn new(key: impl Into<String>, rect: Rect, delay: Millis) -> Self {
        Self {
            key: key.into(),
            rect,
            delay,
            trigger: RevealTrigger::Intersection,
        }
    }

    pub fn on_mount(key: impl Into<String>, rect: Rect, delay: Millis) -> Self {
        Self {
            trigger: RevealTrigger::Mount,
            ..Self::new(key, rect, delay)
        }
    }
}

/// A section and the reveal items it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpec {
    pub name: String,
    /// In-page anchor (without `#`), if links can target this section.
    pub anchor: Option<String>,
    pub rect: Rect,
    pub items: Vec<MountSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(usize);

/// A reveal that happened, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevealRecord {
    pub key: String,
    pub section: String,
    pub at: Millis,
}

#[derive(Debug)]
struct MountedItem {
    key: String,
    section: SectionId,
    rect: Rect,
    reveal: RevealItem,
    timer: Option<TimerId>,
}

#[derive(Debug)]
struct MountedSection {
    name: String,
    anchor: Option<String>,
    rect: Rect,
    items: Vec<ItemId>,
    mounted: bool,
}

#[derive(Debug)]
pub struct PageRuntime {
    viewport: Viewport,
    support: ObserverSupport,
    now: Millis,
    nav: NavState,
    sections: Vec<MountedSection>,
    items: Vec<MountedItem>,
    keys: HashMap<String, ItemId>,
    timers: TimerQueue<ItemId>,
    log: Vec<RevealRecord>,
}

impl PageRuntime {
    pub fn new(viewport: Viewport, support: ObserverSupport) -> Self {
        let mut nav = NavState::new();
        nav.on_scroll(viewport.scroll_y);
        Self {
            viewport,
            support,
            now: 0,
            nav,
            sections: Vec::new(),
            items: Vec::new(),
            keys: HashMap::new(),
            timers: TimerQueue::new(),
            log: Vec::new(),
        }
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    /// Every reveal so far, oldest first.
    pub fn reveal_log(&self) -> &[RevealRecord] {
        &self.log
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// When the earliest pending reveal timer is due.
    pub fn next_timer_due(&self) -> Option<Millis> {
        self.timers.next_due()
    }

    /// Height of the document formed by the mounted sections.
    pub fn document_height(&self) -> f64 {
        self.sections
            .iter()
            .filter(|s| s.mounted)
            .map(|s| s.rect.bottom())
            .fold(0.0, f64::max)
    }

    // ============================================================
    // Mounting
    // ============================================================

    pub fn mount(&mut self, spec: SectionSpec) -> Result<SectionId, RuntimeError> {
        let mut seen = std::collections::HashSet::new();
        for item in &spec.items {
            if self.keys.contains_key(&item.key) || !seen.insert(item.key.as_str()) {
                return Err(RuntimeError::DuplicateKey(item.key.clone()));
            }
        }

        let section_id = SectionId(self.sections.len());
        let mut item_ids = Vec::with_capacity(spec.items.len());

        for item in spec.items {
            let item_id = ItemId(self.items.len());
            let mut reveal = RevealItem::with_trigger(item.delay, item.trigger);
            let timer = reveal
                .attach(self.now)
                .map(|due_at| self.timers.schedule(due_at, item_id));

            self.keys.insert(item.key.clone(), item_id);
            self.items.push(MountedItem {
                key: item.key,
                section: section_id,
                rect: item.rect,
                reveal,
                timer,
            });
            item_ids.push(item_id);
        }

        tracing::debug!(
            section = %spec.name,
            items = item_ids.len(),
            "mounted section"
        );

        self.sections.push(MountedSection {
            name: spec.name,
            anchor: spec.anchor,
            rect: spec.rect,
            items: item_ids.clone(),
            mounted: true,
        });

        match self.support {
            ObserverSupport::Supported => {
                for item_id in item_ids {
                    self.observe_item(item_id);
                }
            }
            ObserverSupport::Unsupported => {
                for item_id in item_ids {
                    self.reveal_unobserved(item_id);
                }
            }
        }
        self.run_due();

        Ok(section_id)
    }

    /// Tear a section down: stop observing and cancel pending reveals.
    pub fn unmount(&mut self, id: SectionId) -> Result<(), RuntimeError> {
        let section = self
            .sections
            .get_mut(id.0)
            .filter(|s| s.mounted)
            .ok_or(RuntimeError::SectionNotMounted(id))?;
        section.mounted = false;

        let mut cancelled = 0;
        for item_id in section.items.clone() {
            let item = &mut self.items[item_id.0];
            if item.reveal.detach() {
                cancelled += 1;
            }
            if let Some(timer) = item.timer.take() {
                self.timers.cancel(timer);
            }
            self.keys.remove(&item.key);
        }

        tracing::debug!(
            section = %self.sections[id.0].name,
            cancelled,
            "unmounted section"
        );
        Ok(())
    }

    // ============================================================
    // Viewport events
    // ============================================================

    /// Scroll the document. Returns the reveals this caused immediately.
    pub fn scroll_to(&mut self, scroll_y: f64) -> Vec<RevealRecord> {
        let max_scroll = (self.document_height() - self.viewport.height).max(0.0);
        self.viewport.scroll_y = scroll_y.clamp(0.0, max_scroll);

        if self.nav.on_scroll(self.viewport.scroll_y) {
            tracing::trace!(scrolled = self.nav.is_scrolled(), "navbar background changed");
        }

        let before = self.log.len();
        self.observe_all();
        self.run_due();
        self.log[before..].to_vec()
    }

    /// Resize the viewport while the page geometry stays put.
    ///
    /// Pages whose layout depends on the width should use [`Self::reflow`].
    pub fn resize(&mut self, width: f64, height: f64) -> Vec<RevealRecord> {
        self.viewport.width = width.max(0.0);
        self.viewport.height = height.max(0.0);
        let scroll_y = self.viewport.scroll_y;
        self.scroll_to(scroll_y)
    }

    /// Resize the viewport and move sections and items to the geometry of
    /// `layout`, then observe at the new positions.
    ///
    /// Sections are matched by name and items by key. Entries that are not
    /// mounted are ignored.
    pub fn reflow(&mut self, width: f64, height: f64, layout: &[SectionSpec]) -> Vec<RevealRecord> {
        self.viewport.width = width.max(0.0);
        self.viewport.height = height.max(0.0);

        let mut moved = 0;
        for spec in layout {
            if let Some(section) = self
                .sections
                .iter_mut()
                .find(|s| s.mounted && s.name == spec.name)
            {
                section.rect = spec.rect;
            }
            for item in &spec.items {
                if let Some(&item_id) = self.keys.get(&item.key) {
                    self.items[item_id.0].rect = item.rect;
                    moved += 1;
                }
            }
        }
        tracing::debug!(width, height, moved, "page reflowed");

        let scroll_y = self.viewport.scroll_y;
        self.scroll_to(scroll_y)
    }

    // ============================================================
    // Clock
    // ============================================================

    pub fn advance_by(&mut self, elapsed: Millis) -> Vec<RevealRecord> {
        let target = self.now.saturating_add(elapsed);
        self.advance_clock(target)
    }

    pub fn advance_to(&mut self, at: Millis) -> Result<Vec<RevealRecord>, RuntimeError> {
        if at < self.now {
            return Err(RuntimeError::ClockBackwards {
                now: self.now,
                requested: at,
            });
        }
        Ok(self.advance_clock(at))
    }

    /// Fire timers one by one at their own due time, then settle at `target`.
    fn advance_clock(&mut self, target: Millis) -> Vec<RevealRecord> {
        let before = self.log.len();
        while let Some((due_at, item_id)) = self.timers.pop_due(target) {
            self.now = self.now.max(due_at);
            self.fire_item(item_id);
        }
        self.now = target;
        self.log[before..].to_vec()
    }

    // ============================================================
    // Queries
    // ============================================================

    pub fn is_visible(&self, key: &str) -> Result<bool, RuntimeError> {
        self.item(key).map(|item| item.reveal.is_visible())
    }

    pub fn reveal_item(&self, key: &str) -> Result<&RevealItem, RuntimeError> {
        self.item(key).map(|item| &item.reveal)
    }

    /// Keys of mounted items in a section, in mount order.
    pub fn section_items(&self, id: SectionId) -> Result<Vec<&str>, RuntimeError> {
        let section = self
            .sections
            .get(id.0)
            .filter(|s| s.mounted)
            .ok_or(RuntimeError::SectionNotMounted(id))?;
        Ok(section
            .items
            .iter()
            .map(|item_id| self.items[item_id.0].key.as_str())
            .collect())
    }

    pub fn section_by_anchor(&self, anchor: &str) -> Option<SectionId> {
        let anchor = anchor.trim_start_matches('#');
        self.sections
            .iter()
            .position(|s| s.mounted && s.anchor.as_deref() == Some(anchor))
            .map(SectionId)
    }

    // ============================================================
    // Navigation
    // ============================================================

    /// Flip the mobile menu. Returns the new open state.
    pub fn toggle_menu(&mut self) -> bool {
        self.nav.toggle_menu()
    }

    /// Follow an in-page link: close the menu and scroll to the anchor.
    ///
    /// The menu closes even when the anchor is unknown.
    pub fn follow_link(&mut self, href: &str) -> Result<Vec<RevealRecord>, RuntimeError> {
        self.nav.close_menu();
        let anchor = href.trim_start_matches('#');
        let section = self
            .section_by_anchor(anchor)
            .ok_or_else(|| RuntimeError::UnknownAnchor(anchor.to_string()))?;
        let top = self.sections[section.0].rect.y;
        Ok(self.scroll_to(top))
    }

    // ============================================================
    // Internals
    // ============================================================

    fn item(&self, key: &str) -> Result<&MountedItem, RuntimeError> {
        self.keys
            .get(key)
            .map(|item_id| &self.items[item_id.0])
            .ok_or_else(|| RuntimeError::UnknownItem(key.to_string()))
    }

    fn observe_all(&mut self) {
        if self.support == ObserverSupport::Unsupported {
            return;
        }
        // Mount order, so simultaneous reveals are recorded deterministically.
        let mut ids: Vec<ItemId> = self.keys.values().copied().collect();
        ids.sort();
        for item_id in ids {
            self.observe_item(item_id);
        }
    }

    fn observe_item(&mut self, item_id: ItemId) {
        let ratio = self.viewport.intersection_ratio(&self.items[item_id.0].rect);
        let now = self.now;
        let item = &mut self.items[item_id.0];
        if let Some(due_at) = item.reveal.observe(ratio, now) {
            tracing::trace!(key = %item.key, ratio, due_at, "reveal scheduled");
            item.timer = Some(self.timers.schedule(due_at, item_id));
        }
    }

    fn reveal_unobserved(&mut self, item_id: ItemId) {
        let item = &self.items[item_id.0];
        if item.reveal.trigger() != RevealTrigger::Intersection {
            return;
        }
        let now = self.now;
        if self.items[item_id.0].reveal.reveal_unobserved(now) {
            self.record(item_id);
        }
    }

    fn run_due(&mut self) {
        let now = self.now;
        while let Some((_, item_id)) = self.timers.pop_due(now) {
            self.fire_item(item_id);
        }
    }

    fn fire_item(&mut self, item_id: ItemId) {
        let now = self.now;
        let item = &mut self.items[item_id.0];
        item.timer = None;
        if item.reveal.fire(now) {
            self.record(item_id);
        }
    }

    fn record(&mut self, item_id: ItemId) {
        let item = &self.items[item_id.0];
        let record = RevealRecord {
            key: item.key.clone(),
            section: self.sections[item.section.0].name.clone(),
            at: self.now,
        };
        tracing::debug!(key = %record.key, section = %record.section, at = record.at, "revealed");
        self.log.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::RevealPhase;

    fn card(key: &str, y: f64, delay: Millis) -> MountSpec {
        MountSpec::new(key, Rect::new(0.0, y, 300.0, 200.0), delay)
    }

    fn section(name: &str, y: f64, items: Vec<MountSpec>) -> SectionSpec {
        SectionSpec {
            name: name.to_string(),
            anchor: Some(name.to_string()),
            rect: Rect::new(0.0, y, 1280.0, 1000.0),
            items,
        }
    }

    #[test]
    fn items_in_view_at_mount_reveal_after_their_delay() {
        let mut page = PageRuntime::new(Viewport::new(1280.0, 800.0), ObserverSupport::Supported);
        page.mount(section("about", 0.0, vec![card("a", 100.0, 0), card("b", 100.0, 200)]))
            .unwrap();

        assert!(page.is_visible("a").unwrap());
        assert!(!page.is_visible("b").unwrap());

        let revealed = page.advance_by(200);
        assert_eq!(revealed.len(), 1);
        assert_eq!(revealed[0].key, "b");
        assert_eq!(revealed[0].at, 200);
    }

    #[test]
    fn scrolling_brings_items_into_view() {
        let mut page = PageRuntime::new(Viewport::new(1280.0, 800.0), ObserverSupport::Supported);
        page.mount(section("about", 0.0, vec![card("low", 1500.0, 0)])).unwrap();
        page.mount(section("tail", 1000.0, vec![])).unwrap();

        assert!(!page.is_visible("low").unwrap());
        let revealed = page.scroll_to(900.0);
        assert_eq!(revealed.len(), 1);
        assert!(page.is_visible("low").unwrap());
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let mut page = PageRuntime::new(Viewport::new(1280.0, 800.0), ObserverSupport::Supported);
        let err = page
            .mount(section("about", 0.0, vec![card("x", 0.0, 0), card("x", 0.0, 0)]))
            .unwrap_err();
        assert_eq!(err, RuntimeError::DuplicateKey("x".to_string()));
    }

    #[test]
    fn remount_after_unmount_reuses_keys() {
        let mut page = PageRuntime::new(Viewport::new(1280.0, 800.0), ObserverSupport::Supported);
        let id = page.mount(section("about", 0.0, vec![card("x", 0.0, 0)])).unwrap();
        page.unmount(id).unwrap();
        assert!(page.is_visible("x").is_err());
        page.mount(section("about", 0.0, vec![card("x", 0.0, 0)])).unwrap();
        assert!(page.is_visible("x").unwrap());
    }

    #[test]
    fn unmounting_twice_is_an_error() {
        let mut page = PageRuntime::new(Viewport::new(1280.0, 800.0), ObserverSupport::Supported);
        let id = page.mount(section("about", 0.0, vec![])).unwrap();
        page.unmount(id).unwrap();
        assert_eq!(page.unmount(id), Err(RuntimeError::SectionNotMounted(id)));
    }

    #[test]
    fn clock_refuses_to_run_backwards() {
        let mut page = PageRuntime::new(Viewport::new(1280.0, 800.0), ObserverSupport::Supported);
        page.advance_by(100);
        assert_eq!(
            page.advance_to(50),
            Err(RuntimeError::ClockBackwards {
                now: 100,
                requested: 50
            })
        );
    }

    #[test]
    fn scroll_is_clamped_to_the_document() {
        let mut page = PageRuntime::new(Viewport::new(1280.0, 800.0), ObserverSupport::Supported);
        page.mount(section("about", 0.0, vec![])).unwrap();
        page.scroll_to(10_000.0);
        assert_eq!(page.viewport().scroll_y, 200.0);
        page.scroll_to(-30.0);
        assert_eq!(page.viewport().scroll_y, 0.0);
    }

    #[test]
    fn resize_alone_keeps_wide_columns_out_of_a_narrow_viewport() {
        let mut page = PageRuntime::new(Viewport::new(1280.0, 800.0), ObserverSupport::Supported);
        let right = MountSpec::new("right", Rect::new(900.0, 1200.0, 300.0, 200.0), 0);
        page.mount(section("about", 0.0, vec![right])).unwrap();
        page.mount(section("tail", 1000.0, vec![])).unwrap();

        page.resize(375.0, 667.0);
        page.scroll_to(1000.0);
        assert!(!page.is_visible("right").unwrap());
    }

    #[test]
    fn reflow_moves_items_to_the_new_layout_before_observing() {
        let mut page = PageRuntime::new(Viewport::new(1280.0, 800.0), ObserverSupport::Supported);
        let right = MountSpec::new("right", Rect::new(900.0, 1200.0, 300.0, 200.0), 0);
        page.mount(section("about", 0.0, vec![right])).unwrap();
        page.mount(section("tail", 1000.0, vec![])).unwrap();

        let narrow = vec![SectionSpec {
            name: "about".to_string(),
            anchor: Some("about".to_string()),
            rect: Rect::new(0.0, 0.0, 375.0, 1600.0),
            items: vec![card("right", 1400.0, 0)],
        }];
        assert!(page.reflow(375.0, 667.0, &narrow).is_empty());
        assert_eq!(page.viewport().width, 375.0);

        page.scroll_to(1000.0);
        assert!(page.is_visible("right").unwrap());
        assert_eq!(page.reveal_item("right").unwrap().phase(), RevealPhase::Visible { at: 0 });
    }

    #[test]
    fn next_timer_due_tracks_the_earliest_pending_reveal() {
        let mut page = PageRuntime::new(Viewport::new(1280.0, 800.0), ObserverSupport::Supported);
        assert_eq!(page.next_timer_due(), None);
        page.mount(section("about", 0.0, vec![card("a", 0.0, 300), card("b", 0.0, 100)]))
            .unwrap();
        assert_eq!(page.next_timer_due(), Some(100));
        page.advance_by(100);
        assert_eq!(page.next_timer_due(), Some(300));
    }
}
