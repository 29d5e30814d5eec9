//! Terminal-backed visibility watch.
//!
//! Maps the scroll window over the rendered page onto threshold-crossing
//! events for the section observer. The ratio of a section is the fraction
//! of its rendered lines currently inside the window; events fire only when
//! a section crosses [`ACTIVE_THRESHOLD`] in either direction, in document
//! order, with one initial batch reporting every region's starting state.

use crate::observer::{SectionId, VisibilityEvent, VisibilitySource, ACTIVE_THRESHOLD};

/// The rendered line range of one section, recorded at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: SectionId,
    /// 0-based first rendered line of the section.
    pub line_start: usize,
    /// 0-based line one past the section's last rendered line.
    pub line_end: usize,
}

impl SectionSpan {
    /// Number of rendered lines the section occupies.
    pub fn len(&self) -> usize {
        self.line_end.saturating_sub(self.line_start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fraction of `span` inside the window `[scroll, scroll + height)`.
///
/// An empty span has no visible extent and reports 0.
pub fn intersection_ratio(span: &SectionSpan, scroll: usize, height: usize) -> f64 {
    if span.is_empty() || height == 0 {
        return 0.0;
    }
    let window_end = scroll.saturating_add(height);
    let overlap_start = span.line_start.max(scroll);
    let overlap_end = span.line_end.min(window_end);
    let overlap = overlap_end.saturating_sub(overlap_start);
    overlap as f64 / span.len() as f64
}

/// Watches section spans against the terminal scroll window.
///
/// Edge-triggered: [`ViewportWatch::scrolled`] records the new window, and
/// the next [`VisibilitySource::poll`] yields events only for sections whose
/// at-threshold state changed since the previous poll. The first poll after
/// construction reports all sections, mirroring how a display engine reports
/// every region once when it is first observed.
pub struct ViewportWatch {
    spans: Vec<SectionSpan>,
    scroll: usize,
    height: usize,
    /// Per-span at-threshold state as of the last poll; `None` until the
    /// initial batch has been delivered.
    reported: Option<Vec<bool>>,
}

impl ViewportWatch {
    pub fn new(spans: Vec<SectionSpan>, scroll: usize, height: usize) -> Self {
        Self {
            spans,
            scroll,
            height,
            reported: None,
        }
    }

    /// Record a new scroll offset and window height.
    pub fn scrolled(&mut self, scroll: usize, height: usize) {
        self.scroll = scroll;
        self.height = height;
    }

    fn intersecting_now(&self) -> Vec<bool> {
        self.spans
            .iter()
            .map(|span| intersection_ratio(span, self.scroll, self.height) >= ACTIVE_THRESHOLD)
            .collect()
    }
}

impl VisibilitySource for ViewportWatch {
    fn poll(&mut self) -> Vec<VisibilityEvent> {
        let now = self.intersecting_now();
        let events = match &self.reported {
            // Initial observation: report every region's current state.
            None => self
                .spans
                .iter()
                .zip(&now)
                .map(|(span, &is_intersecting)| VisibilityEvent {
                    section: span.id,
                    is_intersecting,
                })
                .collect(),
            Some(prev) => self
                .spans
                .iter()
                .zip(prev.iter().zip(&now))
                .filter(|(_, (was, is))| was != is)
                .map(|(span, (_, &is_intersecting))| VisibilityEvent {
                    section: span.id,
                    is_intersecting,
                })
                .collect(),
        };
        self.reported = Some(now);
        events
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn span(id: SectionId, line_start: usize, line_end: usize) -> SectionSpan {
        SectionSpan {
            id,
            line_start,
            line_end,
        }
    }

    /// Five back-to-back 20-line sections, as render.rs would lay them out.
    fn page_spans() -> Vec<SectionSpan> {
        SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, &id)| span(id, i * 20, (i + 1) * 20))
            .collect()
    }

    // --- intersection_ratio ---

    #[test]
    fn ratio_fully_visible() {
        let s = span(SectionId::Home, 0, 20);
        assert_eq!(intersection_ratio(&s, 0, 40), 1.0);
    }

    #[test]
    fn ratio_fully_scrolled_out() {
        let s = span(SectionId::Home, 0, 20);
        assert_eq!(intersection_ratio(&s, 20, 40), 0.0);
        assert_eq!(intersection_ratio(&s, 100, 40), 0.0);
    }

    #[test]
    fn ratio_partial_overlap() {
        // Window [10, 30) over span [0, 20): 10 of 20 lines visible.
        let s = span(SectionId::Home, 0, 20);
        assert_eq!(intersection_ratio(&s, 10, 20), 0.5);

        // Window [15, 35): 5 of 20 lines visible.
        assert_eq!(intersection_ratio(&s, 15, 20), 0.25);
    }

    #[test]
    fn ratio_section_taller_than_window() {
        // A 100-line section in a 30-line window can never exceed 0.3.
        let s = span(SectionId::Projects, 0, 100);
        assert_eq!(intersection_ratio(&s, 0, 30), 0.3);
        assert_eq!(intersection_ratio(&s, 35, 30), 0.3);
    }

    #[test]
    fn ratio_empty_span_is_zero() {
        let s = span(SectionId::About, 40, 40);
        assert_eq!(intersection_ratio(&s, 0, 100), 0.0);
    }

    #[test]
    fn ratio_zero_height_window_is_zero() {
        let s = span(SectionId::About, 0, 20);
        assert_eq!(intersection_ratio(&s, 0, 0), 0.0);
    }

    // --- ViewportWatch ---

    #[test]
    fn initial_poll_reports_every_region() {
        let mut watch = ViewportWatch::new(page_spans(), 0, 30);
        let batch = watch.poll();

        assert_eq!(batch.len(), SectionId::ALL.len());
        // Home [0,20) is fully inside [0,30); About [20,40) is half inside.
        assert_eq!(
            batch[0],
            VisibilityEvent {
                section: SectionId::Home,
                is_intersecting: true
            }
        );
        assert_eq!(
            batch[1],
            VisibilityEvent {
                section: SectionId::About,
                is_intersecting: true
            }
        );
        assert!(batch[2..].iter().all(|e| !e.is_intersecting));
    }

    #[test]
    fn steady_window_yields_empty_batches() {
        let mut watch = ViewportWatch::new(page_spans(), 0, 30);
        watch.poll();
        assert!(watch.poll().is_empty());
        assert!(watch.poll().is_empty());
    }

    #[test]
    fn crossing_events_fire_once_per_crossing() {
        let mut watch = ViewportWatch::new(page_spans(), 0, 30);
        watch.poll();

        // Scroll to [30, 60): About [20,40) half visible, Projects [40,60)
        // fully visible, Home gone.
        watch.scrolled(30, 30);
        let batch = watch.poll();
        assert_eq!(
            batch,
            vec![
                VisibilityEvent {
                    section: SectionId::Home,
                    is_intersecting: false
                },
                VisibilityEvent {
                    section: SectionId::Projects,
                    is_intersecting: true
                },
            ]
        );

        // Unchanged window: no repeat reports.
        assert!(watch.poll().is_empty());
    }

    #[test]
    fn events_arrive_in_document_order() {
        // Jump from the top straight to the bottom: the leaving and entering
        // sections are all reported in one batch, in document order, so the
        // last-write-wins rule lands on the latest section in the document.
        let mut watch = ViewportWatch::new(page_spans(), 0, 30);
        watch.poll();

        watch.scrolled(70, 30);
        let batch = watch.poll();
        let sections: Vec<SectionId> = batch.iter().map(|e| e.section).collect();
        assert_eq!(
            sections,
            vec![
                SectionId::Home,
                SectionId::About,
                SectionId::Teaching,
                SectionId::Contact
            ]
        );
        assert!(batch[2].is_intersecting && batch[3].is_intersecting);
    }

    #[test]
    fn resize_can_trigger_crossings() {
        // Window [20, 28): About shows 8 of 20 lines, below the threshold.
        let mut watch = ViewportWatch::new(page_spans(), 20, 8);
        watch.poll();

        // Growing the window from 8 to 40 lines brings About and Projects
        // over the threshold without any scrolling.
        watch.scrolled(20, 40);
        let batch = watch.poll();
        assert_eq!(
            batch,
            vec![
                VisibilityEvent {
                    section: SectionId::About,
                    is_intersecting: true
                },
                VisibilityEvent {
                    section: SectionId::Projects,
                    is_intersecting: true
                },
            ]
        );
    }

    #[test]
    fn oversized_section_never_qualifies() {
        // Degraded mode: a section more than twice the window height can
        // never reach the threshold, so it never reports intersecting.
        let spans = vec![span(SectionId::Home, 0, 100)];
        let mut watch = ViewportWatch::new(spans, 0, 30);
        let batch = watch.poll();
        assert_eq!(batch.len(), 1);
        assert!(!batch[0].is_intersecting);

        for scroll in (0..70).step_by(10) {
            watch.scrolled(scroll, 30);
            assert!(watch.poll().is_empty());
        }
    }
}
