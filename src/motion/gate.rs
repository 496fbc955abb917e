/// One-way loading flag owned by the top-level view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadingGate {
    loaded: bool,
}

impl LoadingGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        !self.loaded
    }

    /// Marks the page as loaded. Returns `true` only for the call that
    /// actually flipped the gate.
    pub fn complete(&mut self) -> bool {
        if self.loaded {
            return false;
        }
        self.loaded = true;
        true
    }
}

/// Counter shown on the loading screen: eases out toward 100%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadingProgress {
    duration_ms: f64,
}

impl LoadingProgress {
    pub fn new(duration_ms: f64) -> Self {
        Self { duration_ms }
    }

    pub fn percent(&self, elapsed_ms: f64) -> u32 {
        if self.duration_ms <= 0.0 {
            return 100;
        }
        let t = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        let eased = 1.0 - (1.0 - t).powi(3);
        (eased * 100.0).round() as u32
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_flips_exactly_once() {
        let mut gate = LoadingGate::new();
        assert!(gate.is_loading());
        assert!(gate.complete());
        assert!(!gate.is_loading());
        assert!(!gate.complete());
        assert!(!gate.is_loading());
    }

    #[test]
    fn progress_counts_up_to_hundred() {
        let progress = LoadingProgress::new(2000.0);
        assert_eq!(progress.percent(0.0), 0);
        assert_eq!(progress.percent(1000.0), 88);
        assert_eq!(progress.percent(2000.0), 100);
        assert_eq!(progress.percent(9000.0), 100);
        assert!(!progress.is_done(1999.0));
        assert!(progress.is_done(2000.0));

        let mut last = 0;
        for ms in (0..=2000).step_by(50) {
            let pct = progress.percent(ms as f64);
            assert!(pct >= last);
            last = pct;
        }
    }

    #[test]
    fn zero_duration_is_complete() {
        assert_eq!(LoadingProgress::new(0.0).percent(0.0), 100);
    }
}
