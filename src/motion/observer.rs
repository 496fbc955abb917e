use super::range::RangeMapper;
use super::scroll::{ElementBounds, ScrollOffsets, ScrollTracker, Viewport};
use super::MotionError;

const CHANGE_EPSILON: f64 = 1e-4;

/// Visual state of a scroll-revealed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    pub opacity: f64,
    pub translate_y: f64,
}

impl RevealFrame {
    pub fn style(&self) -> String {
        format!(
            "opacity: {:.4}; transform: translateY({:.2}px);",
            self.opacity, self.translate_y
        )
    }
}

/// Subscriber side of the scroll feed: every scroll/resize sample is pushed
/// through `observe`, which only reports a frame when it actually changed so
/// the view can skip redundant re-renders.
#[derive(Debug, Clone)]
pub struct ProgressObserver {
    tracker: ScrollTracker,
    opacity: RangeMapper,
    translate_y: RangeMapper,
    last: Option<RevealFrame>,
    delay_ms: f64,
    release_at: Option<f64>,
}

impl ProgressObserver {
    pub fn new(
        offsets: ScrollOffsets,
        opacity: RangeMapper,
        translate_y: RangeMapper,
    ) -> Self {
        Self {
            tracker: ScrollTracker::new(offsets),
            opacity,
            translate_y,
            last: None,
            delay_ms: 0.0,
            release_at: None,
        }
    }

    /// Holds the element hidden for `delay_ms` after it first starts to
    /// reveal. The hold happens once; later scrolling maps straight through.
    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    /// Fade 0 -> 1 while sliding up 40px -> 0px.
    pub fn reveal(offsets: ScrollOffsets) -> Result<Self, MotionError> {
        Ok(Self::new(
            offsets,
            RangeMapper::linear((0.0, 1.0), (0.0, 1.0))?,
            RangeMapper::linear((0.0, 1.0), (40.0, 0.0))?,
        ))
    }

    pub fn frame_at(&self, progress: f64) -> RevealFrame {
        RevealFrame {
            opacity: self.opacity.map(progress),
            translate_y: self.translate_y.map(progress),
        }
    }

    pub fn observe(
        &mut self,
        bounds: Option<ElementBounds>,
        viewport: &Viewport,
        now_ms: f64,
    ) -> Option<RevealFrame> {
        let mut progress = self.tracker.progress(bounds, viewport);
        if progress > 0.0 && self.delay_ms > 0.0 {
            let release_at = *self.release_at.get_or_insert(now_ms + self.delay_ms);
            if now_ms < release_at {
                progress = 0.0;
            }
        }
        let frame = self.frame_at(progress);
        let changed = match self.last {
            None => true,
            Some(prev) => {
                (prev.opacity - frame.opacity).abs() > CHANGE_EPSILON
                    || (prev.translate_y - frame.translate_y).abs() > CHANGE_EPSILON
            }
        };
        if changed {
            self.last = Some(frame);
            Some(frame)
        } else {
            None
        }
    }

    /// Milliseconds left on the initial hold, if it is still running.
    pub fn held_for(&self, now_ms: f64) -> Option<f64> {
        self.release_at
            .filter(|release_at| now_ms < *release_at)
            .map(|release_at| release_at - now_ms)
    }

    #[cfg(test)]
    pub fn current(&self) -> RevealFrame {
        self.last.unwrap_or_else(|| self.frame_at(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport { height: 1000.0 };

    fn bounds(top: f64) -> Option<ElementBounds> {
        Some(ElementBounds { top, height: 120.0 })
    }

    #[test]
    fn first_sample_always_publishes() {
        let mut obs = ProgressObserver::reveal(ScrollOffsets::default()).unwrap();
        let frame = obs.observe(bounds(2000.0), &VIEWPORT, 0.0).unwrap();
        assert_eq!(frame, RevealFrame { opacity: 0.0, translate_y: 40.0 });
    }

    #[test]
    fn unchanged_samples_are_dropped() {
        let mut obs = ProgressObserver::reveal(ScrollOffsets::default()).unwrap();
        assert!(obs.observe(bounds(2000.0), &VIEWPORT, 0.0).is_some());
        // still below the start edge
        assert!(obs.observe(bounds(1500.0), &VIEWPORT, 0.0).is_none());
        let mid = obs.observe(bounds(600.0), &VIEWPORT, 0.0).unwrap();
        assert!((mid.opacity - 0.5).abs() < 1e-9);
        assert!((mid.translate_y - 20.0).abs() < 1e-9);
        assert_eq!(obs.current(), mid);
    }

    #[test]
    fn unmounted_element_stays_hidden() {
        let mut obs = ProgressObserver::reveal(ScrollOffsets::default()).unwrap();
        let frame = obs.observe(None, &VIEWPORT, 0.0).unwrap();
        assert_eq!(frame.opacity, 0.0);
    }

    #[test]
    fn delay_holds_the_first_reveal_once() {
        let mut obs = ProgressObserver::reveal(ScrollOffsets::default())
            .unwrap()
            .with_delay(300.0);
        assert!(obs.observe(bounds(2000.0), &VIEWPORT, 0.0).is_some());
        assert_eq!(obs.held_for(0.0), None);

        // enters the reveal window at t=1000 but stays hidden
        assert!(obs.observe(bounds(600.0), &VIEWPORT, 1000.0).is_none());
        assert_eq!(obs.current().opacity, 0.0);
        assert_eq!(obs.held_for(1100.0), Some(200.0));

        let released = obs.observe(bounds(600.0), &VIEWPORT, 1300.0).unwrap();
        assert!((released.opacity - 0.5).abs() < 1e-9);
        assert_eq!(obs.held_for(1300.0), None);

        // scrolling back out and in again is not delayed a second time
        obs.observe(bounds(2000.0), &VIEWPORT, 2000.0);
        let again = obs.observe(bounds(600.0), &VIEWPORT, 2001.0).unwrap();
        assert!((again.opacity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn zero_delay_never_holds() {
        let mut obs = ProgressObserver::reveal(ScrollOffsets::default()).unwrap();
        let mid = obs.observe(bounds(600.0), &VIEWPORT, 5.0).unwrap();
        assert!((mid.opacity - 0.5).abs() < 1e-9);
        assert_eq!(obs.held_for(5.0), None);
    }

    #[test]
    fn style_string() {
        let frame = RevealFrame { opacity: 0.5, translate_y: 20.0 };
        assert_eq!(frame.style(), "opacity: 0.5000; transform: translateY(20.00px);");
    }
}
