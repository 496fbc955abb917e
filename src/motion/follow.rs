/// Approach rate per millisecond for the cursor glow.
const FOLLOW_RATE: f64 = 0.012;
const SNAP_DISTANCE: f64 = 0.5;

/// Point that trails a moving target with exponential easing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Follower {
    pub x: f64,
    pub y: f64,
    target: (f64, f64),
}

impl Follower {
    #[cfg(test)]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, target: (x, y) }
    }

    pub fn set_target(&mut self, x: f64, y: f64) {
        self.target = (x, y);
    }

    pub fn is_settled(&self) -> bool {
        self.x == self.target.0 && self.y == self.target.1
    }

    /// Move toward the target for `dt_ms`. Returns whether the point moved.
    pub fn step(&mut self, dt_ms: f64) -> bool {
        if self.is_settled() {
            return false;
        }
        let blend = 1.0 - (-FOLLOW_RATE * dt_ms.max(0.0)).exp();
        self.x += (self.target.0 - self.x) * blend;
        self.y += (self.target.1 - self.y) * blend;
        let (dx, dy) = (self.target.0 - self.x, self.target.1 - self.y);
        if dx.hypot(dy) < SNAP_DISTANCE {
            self.x = self.target.0;
            self.y = self.target.1;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_and_snaps() {
        let mut f = Follower::new(0.0, 0.0);
        f.set_target(300.0, 200.0);
        let mut frames = 0;
        while f.step(16.0) {
            frames += 1;
            assert!(frames < 1000, "never settled");
        }
        assert_eq!((f.x, f.y), (300.0, 200.0));
        assert!(f.is_settled());
    }

    #[test]
    fn moves_part_way_each_frame() {
        let mut f = Follower::new(0.0, 0.0);
        f.set_target(100.0, 0.0);
        f.step(16.0);
        assert!(f.x > 0.0 && f.x < 100.0);
        assert_eq!(f.y, 0.0);
    }

    #[test]
    fn settled_point_does_not_move() {
        let mut f = Follower::new(5.0, 5.0);
        assert!(!f.step(16.0));
    }
}
