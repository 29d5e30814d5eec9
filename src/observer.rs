//! Active-section tracking.
//!
//! Watches the named page sections and decides which one the navigation
//! should highlight: a section becomes active when at least half of it is
//! inside the viewport. The visibility watch itself is injected through
//! [`VisibilitySource`] so the selection logic runs the same against the
//! terminal viewport, a browser, or a scripted test source.

use std::collections::BTreeSet;

/// Fraction of a section that must be inside the viewport for the section
/// to become active.
pub const ACTIVE_THRESHOLD: f64 = 0.5;

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Identifier of a page section.
///
/// The set is fixed for the lifetime of the page; the navigation bar, the
/// rendered regions, and the in-page anchors all enumerate it in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    Home,
    About,
    Projects,
    Teaching,
    Contact,
}

impl SectionId {
    /// All sections in document order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Teaching,
        SectionId::Contact,
    ];

    /// The in-page anchor for this section (without the `#`).
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Teaching => "teaching",
            SectionId::Contact => "contact",
        }
    }

    /// Display label used by the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Teaching => "Teaching",
            SectionId::Contact => "Contact",
        }
    }

    /// Resolve an anchor string back to its section.
    pub fn from_anchor(anchor: &str) -> Option<SectionId> {
        SectionId::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

// ---------------------------------------------------------------------------
// Navigation state
// ---------------------------------------------------------------------------

/// The two UI flags the page renders from.
///
/// Owned by the top-level view for the page's whole lifetime and mutated
/// only through the methods below, all from a single event-reaction thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    active_section: SectionId,
    menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self {
            active_section: SectionId::Home,
            menu_open: false,
        }
    }

    /// The section the navigation currently highlights.
    pub fn active_section(&self) -> SectionId {
        self.active_section
    }

    /// Whether the compact navigation menu is open.
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Unconditionally replace the active section.
    ///
    /// No validation path: callers only hand in values of the enumerated set.
    pub fn set_active_section(&mut self, id: SectionId) {
        self.active_section = id;
    }

    /// Flip the menu open/closed.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the menu. Invoked whenever a navigation link is activated, so
    /// navigating away also dismisses the menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Visibility events
// ---------------------------------------------------------------------------

/// One threshold-crossing report for a watched section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityEvent {
    pub section: SectionId,
    /// True when the section's intersection ratio is at or above the watch
    /// threshold.
    pub is_intersecting: bool,
}

/// A watcher that, for a set of regions registered elsewhere, yields batches
/// of threshold-crossing events in report order.
///
/// [`crate::viewport::ViewportWatch`] implements this against the terminal
/// scroll window; tests supply scripted batches.
pub trait VisibilitySource {
    /// Drain the next batch of visibility changes. An empty batch means
    /// nothing crossed the threshold since the last poll.
    fn poll(&mut self) -> Vec<VisibilityEvent>;
}

// ---------------------------------------------------------------------------
// Observer
// ---------------------------------------------------------------------------

/// Tracks which watched sections may update the navigation highlight.
///
/// Attached exactly once when the page is first displayed; all watches are
/// released on [`SectionObserver::disconnect`], which also runs on drop so
/// teardown happens on every exit path.
pub struct SectionObserver {
    watched: BTreeSet<SectionId>,
}

impl SectionObserver {
    /// Register the given regions for watching.
    pub fn attach(regions: &[SectionId]) -> Self {
        Self {
            watched: regions.iter().copied().collect(),
        }
    }

    /// Number of regions still being watched.
    pub fn watched_regions(&self) -> usize {
        self.watched.len()
    }

    /// Stop watching a single region.
    ///
    /// A region disappearing before teardown is not a failure; the observer
    /// simply stops reporting for it.
    pub fn unobserve(&mut self, id: SectionId) {
        self.watched.remove(&id);
    }

    /// Release every watch. After this, [`SectionObserver::pump`] no longer
    /// polls the source, so no event can reach the navigation state.
    pub fn disconnect(&mut self) {
        self.watched.clear();
    }

    /// Drain one batch from the source and apply it to `nav`.
    ///
    /// Every intersecting event for a still-watched region overwrites the
    /// active section, so when several sections qualify in the same batch
    /// the last-reported one wins. That tie-break reproduces the page's
    /// observed behavior and is relied on by the navigation highlight.
    pub fn pump<S: VisibilitySource>(&self, nav: &mut NavState, source: &mut S) {
        if self.watched.is_empty() {
            return;
        }
        for event in source.poll() {
            if event.is_intersecting && self.watched.contains(&event.section) {
                nav.set_active_section(event.section);
            }
        }
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted event source: pops one pre-built batch per poll and counts
    /// how often it was polled.
    struct Scripted {
        batches: Vec<Vec<VisibilityEvent>>,
        polls: usize,
    }

    impl Scripted {
        fn new(batches: Vec<Vec<VisibilityEvent>>) -> Self {
            Self { batches, polls: 0 }
        }
    }

    impl VisibilitySource for Scripted {
        fn poll(&mut self) -> Vec<VisibilityEvent> {
            self.polls += 1;
            if self.batches.is_empty() {
                Vec::new()
            } else {
                self.batches.remove(0)
            }
        }
    }

    fn intersecting(section: SectionId) -> VisibilityEvent {
        VisibilityEvent {
            section,
            is_intersecting: true,
        }
    }

    fn leaving(section: SectionId) -> VisibilityEvent {
        VisibilityEvent {
            section,
            is_intersecting: false,
        }
    }

    // --- NavState ---

    #[test]
    fn initial_state_is_home_with_menu_closed() {
        let nav = NavState::new();
        assert_eq!(nav.active_section(), SectionId::Home);
        assert!(!nav.menu_open());
    }

    #[test]
    fn set_active_section_overwrites_unconditionally() {
        let mut nav = NavState::new();
        nav.set_active_section(SectionId::Projects);
        assert_eq!(nav.active_section(), SectionId::Projects);
        nav.set_active_section(SectionId::Projects);
        assert_eq!(nav.active_section(), SectionId::Projects);
        nav.set_active_section(SectionId::Home);
        assert_eq!(nav.active_section(), SectionId::Home);
    }

    #[test]
    fn toggle_menu_twice_is_identity() {
        let mut nav = NavState::new();
        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.toggle_menu();
        assert!(!nav.menu_open());

        // Same involution from the open state.
        nav.toggle_menu();
        nav.toggle_menu();
        nav.toggle_menu();
        assert!(nav.menu_open());
    }

    #[test]
    fn activating_a_link_closes_the_menu() {
        // Navigating from the open menu must dismiss it, whichever link
        // was activated.
        for target in SectionId::ALL {
            let mut nav = NavState::new();
            nav.toggle_menu();
            assert!(nav.menu_open());

            nav.set_active_section(target);
            nav.close_menu();
            assert!(!nav.menu_open(), "menu still open after {target:?}");
        }
    }

    #[test]
    fn close_menu_is_idempotent() {
        let mut nav = NavState::new();
        nav.close_menu();
        assert!(!nav.menu_open());
    }

    // --- SectionId ---

    #[test]
    fn anchors_round_trip() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(SectionId::from_anchor("résumé"), None);
        assert_eq!(SectionId::from_anchor(""), None);
    }

    #[test]
    fn anchors_are_unique() {
        let mut anchors: Vec<&str> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        anchors.sort_unstable();
        anchors.dedup();
        assert_eq!(anchors.len(), SectionId::ALL.len());
    }

    // --- SectionObserver ---

    #[test]
    fn qualifying_event_activates_the_section() {
        let observer = SectionObserver::attach(&SectionId::ALL);
        let mut nav = NavState::new();
        let mut source = Scripted::new(vec![vec![intersecting(SectionId::Projects)]]);

        observer.pump(&mut nav, &mut source);
        assert_eq!(nav.active_section(), SectionId::Projects);
    }

    #[test]
    fn qualifying_event_wins_regardless_of_prior_value() {
        let observer = SectionObserver::attach(&SectionId::ALL);
        let mut nav = NavState::new();
        nav.set_active_section(SectionId::Contact);

        let mut source = Scripted::new(vec![vec![intersecting(SectionId::Projects)]]);
        observer.pump(&mut nav, &mut source);
        assert_eq!(nav.active_section(), SectionId::Projects);
    }

    #[test]
    fn later_entry_in_a_batch_wins() {
        let observer = SectionObserver::attach(&SectionId::ALL);
        let mut nav = NavState::new();
        let mut source = Scripted::new(vec![vec![
            intersecting(SectionId::About),
            intersecting(SectionId::Contact),
        ]]);

        observer.pump(&mut nav, &mut source);
        assert_eq!(nav.active_section(), SectionId::Contact);
    }

    #[test]
    fn non_intersecting_events_are_ignored() {
        let observer = SectionObserver::attach(&SectionId::ALL);
        let mut nav = NavState::new();
        let mut source = Scripted::new(vec![vec![
            intersecting(SectionId::About),
            leaving(SectionId::Contact),
        ]]);

        observer.pump(&mut nav, &mut source);
        // The leaving Contact entry must not steal the highlight.
        assert_eq!(nav.active_section(), SectionId::About);
    }

    #[test]
    fn unobserved_region_stops_reporting() {
        let mut observer = SectionObserver::attach(&SectionId::ALL);
        observer.unobserve(SectionId::Teaching);
        assert_eq!(observer.watched_regions(), SectionId::ALL.len() - 1);

        let mut nav = NavState::new();
        let mut source = Scripted::new(vec![vec![intersecting(SectionId::Teaching)]]);
        observer.pump(&mut nav, &mut source);
        assert_eq!(nav.active_section(), SectionId::Home);
    }

    #[test]
    fn disconnect_releases_every_watch() {
        let mut observer = SectionObserver::attach(&SectionId::ALL);
        assert_eq!(observer.watched_regions(), 5);
        observer.disconnect();
        assert_eq!(observer.watched_regions(), 0);
    }

    #[test]
    fn no_event_fires_after_teardown() {
        let mut observer = SectionObserver::attach(&SectionId::ALL);
        let mut nav = NavState::new();
        observer.disconnect();

        // Synthetically dispatched qualifying batch after teardown: the
        // source must not even be polled, and the state must not move.
        let mut source = Scripted::new(vec![vec![intersecting(SectionId::Contact)]]);
        observer.pump(&mut nav, &mut source);
        assert_eq!(source.polls, 0);
        assert_eq!(nav.active_section(), SectionId::Home);
    }

    #[test]
    fn successive_batches_track_the_scroll() {
        let observer = SectionObserver::attach(&SectionId::ALL);
        let mut nav = NavState::new();
        let mut source = Scripted::new(vec![
            vec![intersecting(SectionId::Home)],
            vec![leaving(SectionId::Home), intersecting(SectionId::About)],
            vec![],
            vec![leaving(SectionId::About), intersecting(SectionId::Projects)],
        ]);

        observer.pump(&mut nav, &mut source);
        assert_eq!(nav.active_section(), SectionId::Home);
        observer.pump(&mut nav, &mut source);
        assert_eq!(nav.active_section(), SectionId::About);
        // Empty batch: nothing crossed, the highlight holds.
        observer.pump(&mut nav, &mut source);
        assert_eq!(nav.active_section(), SectionId::About);
        observer.pump(&mut nav, &mut source);
        assert_eq!(nav.active_section(), SectionId::Projects);
    }
}
