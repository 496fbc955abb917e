use std::str::FromStr;

use super::MotionError;

/// Position and size of a tracked element relative to the top of the
/// viewport, as reported by `getBoundingClientRect()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBounds {
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub height: f64,
}

impl Viewport {
    /// Whether `bounds` overlaps the viewport once `margin` pixels are
    /// trimmed off its top and bottom. Used for "reveal once in view".
    /// A viewport too short to lose both margins is used whole.
    pub fn intersects(&self, bounds: &ElementBounds, margin: f64) -> bool {
        let margin = if self.height > 2.0 * margin { margin } else { 0.0 };
        let visible_top = margin;
        let visible_bottom = self.height - margin;
        bounds.top < visible_bottom && bounds.top + bounds.height > visible_top
    }
}

/// "Element fraction `element` lines up with viewport fraction `viewport`".
/// `start 0.9` means the element's top sits 90% of the way down the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub element: f64,
    pub viewport: f64,
}

impl Edge {
    pub const fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport }
    }

    pub fn parse(s: &str) -> Result<Self, MotionError> {
        let mut parts = s.split_whitespace();
        let (Some(element), Some(viewport), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(MotionError::InvalidEdge(s.to_string()));
        };
        let invalid = || MotionError::InvalidEdge(s.to_string());
        let element = parse_fraction(element).ok_or_else(invalid)?;
        let viewport = parse_fraction(viewport).ok_or_else(invalid)?;
        Ok(Self { element, viewport })
    }

    /// Element top (viewport coordinates) at which this edge is satisfied.
    fn trigger_top(&self, height: f64, viewport: &Viewport) -> f64 {
        self.viewport * viewport.height - self.element * height
    }
}

impl FromStr for Edge {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Edge::parse(s)
    }
}

fn parse_fraction(token: &str) -> Option<f64> {
    match token {
        "start" => Some(0.0),
        "center" => Some(0.5),
        "end" => Some(1.0),
        other => other
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && (0.0..=1.0).contains(v)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOffsets {
    pub start: Edge,
    pub end: Edge,
}

impl ScrollOffsets {
    pub fn parse(start: &str, end: &str) -> Result<Self, MotionError> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }
}

impl Default for ScrollOffsets {
    /// Reveal window: starts when the top enters the bottom 10% of the
    /// screen, completes when it reaches 30% from the top.
    fn default() -> Self {
        Self {
            start: Edge::new(0.0, 0.9),
            end: Edge::new(0.0, 0.3),
        }
    }
}

/// Turns element geometry into a 0..=1 progress value for one pair of
/// trigger edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollTracker {
    offsets: ScrollOffsets,
}

impl ScrollTracker {
    pub fn new(offsets: ScrollOffsets) -> Self {
        Self { offsets }
    }

    /// Progress for the current layout. Missing or degenerate geometry
    /// (unmounted, zero height, zero viewport, empty span) reads as 0.
    pub fn progress(&self, bounds: Option<ElementBounds>, viewport: &Viewport) -> f64 {
        let Some(bounds) = bounds else {
            return 0.0;
        };
        if !(bounds.height > 0.0) || !(viewport.height > 0.0) {
            return 0.0;
        }
        let start_top = self.offsets.start.trigger_top(bounds.height, viewport);
        let end_top = self.offsets.end.trigger_top(bounds.height, viewport);
        let span = start_top - end_top;
        if !(span > f64::EPSILON) {
            return 0.0;
        }
        ((start_top - bounds.top) / span).clamp(0.0, 1.0)
    }
}

/// Whole-document scroll state, read from `documentElement` and `window`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

/// Fraction of the scrollable distance already scrolled. Pages that fit in
/// the viewport report 0.
pub fn page_progress(metrics: &PageMetrics) -> f64 {
    let scrollable = metrics.scroll_height - metrics.viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (metrics.scroll_top / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport { height: 1000.0 };

    /// Element sitting at `doc_top` in the document, with the page
    /// scrolled by `scroll`.
    fn at(doc_top: f64, scroll: f64) -> Option<ElementBounds> {
        Some(ElementBounds {
            top: doc_top - scroll,
            height: 200.0,
        })
    }

    #[test]
    fn zero_before_start_and_one_after_end() {
        let tracker = ScrollTracker::default();
        // start edge: top at 900, end edge: top at 300
        assert_eq!(tracker.progress(at(2000.0, 0.0), &VIEWPORT), 0.0);
        assert_eq!(tracker.progress(at(2000.0, 1100.0), &VIEWPORT), 0.0);
        assert_eq!(tracker.progress(at(2000.0, 1700.0), &VIEWPORT), 1.0);
        assert_eq!(tracker.progress(at(2000.0, 5000.0), &VIEWPORT), 1.0);
    }

    #[test]
    fn halfway_between_edges() {
        let tracker = ScrollTracker::default();
        let p = tracker.progress(at(2000.0, 1400.0), &VIEWPORT);
        assert!((p - 0.5).abs() < 1e-9);
    }

    #[test]
    fn monotonic_in_scroll_offset() {
        let tracker = ScrollTracker::default();
        let mut last = 0.0;
        for step in 0..=400 {
            let p = tracker.progress(at(2000.0, step as f64 * 5.0), &VIEWPORT);
            assert!(p >= last, "progress went backwards at step {step}");
            assert!((0.0..=1.0).contains(&p));
            last = p;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn degenerate_geometry_reads_zero() {
        let tracker = ScrollTracker::default();
        assert_eq!(tracker.progress(None, &VIEWPORT), 0.0);
        let flat = Some(ElementBounds { top: 100.0, height: 0.0 });
        assert_eq!(tracker.progress(flat, &VIEWPORT), 0.0);
        assert_eq!(tracker.progress(at(0.0, 0.0), &Viewport { height: 0.0 }), 0.0);

        let same = ScrollOffsets::parse("start 0.5", "start 0.5").unwrap();
        assert_eq!(ScrollTracker::new(same).progress(at(0.0, 0.0), &VIEWPORT), 0.0);
    }

    #[test]
    fn element_relative_edges_use_height() {
        // "end 1" -> "start 0": from bottom entering to top leaving
        let offsets = ScrollOffsets::parse("start 1", "end 0").unwrap();
        let tracker = ScrollTracker::new(offsets);
        let entering = Some(ElementBounds { top: 1000.0, height: 200.0 });
        let leaving = Some(ElementBounds { top: -200.0, height: 200.0 });
        assert_eq!(tracker.progress(entering, &VIEWPORT), 0.0);
        assert_eq!(tracker.progress(leaving, &VIEWPORT), 1.0);
    }

    #[test]
    fn parses_edges() {
        assert_eq!(Edge::parse("start 0.9"), Ok(Edge::new(0.0, 0.9)));
        assert_eq!("center end".parse::<Edge>(), Ok(Edge::new(0.5, 1.0)));
        assert_eq!(Edge::parse("0.25 0.75"), Ok(Edge::new(0.25, 0.75)));
        assert!(Edge::parse("middle 2").is_err());
        assert!(Edge::parse("start").is_err());
        assert!(Edge::parse("start 0.1 0.2").is_err());
    }

    #[test]
    fn page_progress_divides_scrollable_distance() {
        let metrics = PageMetrics {
            scroll_top: 500.0,
            scroll_height: 3000.0,
            viewport_height: 1000.0,
        };
        assert!((page_progress(&metrics) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn page_progress_short_page_is_zero() {
        let metrics = PageMetrics {
            scroll_top: 0.0,
            scroll_height: 800.0,
            viewport_height: 1000.0,
        };
        assert_eq!(page_progress(&metrics), 0.0);
        let exact = PageMetrics { scroll_height: 1000.0, ..metrics };
        assert_eq!(page_progress(&exact), 0.0);
    }

    #[test]
    fn in_view_respects_margin() {
        let near_bottom = ElementBounds { top: 950.0, height: 300.0 };
        assert!(VIEWPORT.intersects(&near_bottom, 0.0));
        assert!(!VIEWPORT.intersects(&near_bottom, 100.0));
        let above = ElementBounds { top: -400.0, height: 300.0 };
        assert!(!VIEWPORT.intersects(&above, 0.0));
    }

    #[test]
    fn footer_line_at_the_bottom_is_in_view_without_margin() {
        let viewport = Viewport { height: 800.0 };
        let copyright = ElementBounds { top: 712.0, height: 24.0 };
        assert!(viewport.intersects(&copyright, 0.0));
        assert!(!viewport.intersects(&copyright, 100.0));
    }

    #[test]
    fn short_viewport_ignores_margin() {
        let viewport = Viewport { height: 180.0 };
        let visible = ElementBounds { top: 10.0, height: 100.0 };
        assert!(viewport.intersects(&visible, 100.0));
        let below = ElementBounds { top: 200.0, height: 100.0 };
        assert!(!viewport.intersects(&below, 100.0));
    }
}
