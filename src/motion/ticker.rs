/// Wraps `v` into `[min, max)` so a looping strip never shows a seam.
pub fn wrap(min: f64, max: f64, v: f64) -> f64 {
    let range = max - min;
    if range <= 0.0 {
        return min;
    }
    let wrapped = (v - min).rem_euclid(range) + min;
    // rem_euclid can round up to exactly `range` for tiny negatives
    if wrapped >= max {
        min
    } else {
        wrapped
    }
}

/// Scroll-velocity to ticker-speed gain: 1000 px/s of scrolling adds 5x the
/// base speed.
const VELOCITY_GAIN: f64 = 5.0 / 1000.0;
/// No scroll sample for this long means the page is at rest.
const IDLE_AFTER_MS: f64 = 50.0;
/// Time constant of the velocity smoothing.
const SMOOTHING_MS: f64 = 80.0;

/// Measures how fast the page is scrolling and smooths it, so the ticker
/// eases into and out of scroll boosts instead of jumping.
#[derive(Debug, Clone, Default)]
pub struct ScrollVelocity {
    last_sample: Option<(f64, f64)>,
    raw: f64,
    smoothed: f64,
}

impl ScrollVelocity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a scroll position (px) observed at `now_ms`.
    pub fn sample(&mut self, scroll_y: f64, now_ms: f64) {
        if let Some((prev_y, prev_ms)) = self.last_sample {
            let dt = now_ms - prev_ms;
            if dt > 0.0 {
                self.raw = (scroll_y - prev_y) / dt * 1000.0;
            }
        }
        self.last_sample = Some((scroll_y, now_ms));
    }

    /// Advance the smoothing by one frame.
    pub fn tick(&mut self, now_ms: f64, dt_ms: f64) {
        let idle = match self.last_sample {
            Some((_, at)) => now_ms - at > IDLE_AFTER_MS,
            None => true,
        };
        if idle {
            self.raw = 0.0;
        }
        let blend = 1.0 - (-dt_ms.max(0.0) / SMOOTHING_MS).exp();
        self.smoothed += (self.raw - self.smoothed) * blend;
    }

    /// Smoothed velocity in px/s, positive when scrolling down.
    #[cfg(test)]
    pub fn smoothed(&self) -> f64 {
        self.smoothed
    }

    /// Unclamped multiplier handed to [`Ticker::advance`].
    pub fn factor(&self) -> f64 {
        self.smoothed * VELOCITY_GAIN
    }
}

/// Time-driven horizontal strip. `position` lives in `[0, loop_width)` and
/// is rendered as `translateX(position - loop_width)` over repeated copies.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    base_velocity: f64,
    loop_width: f64,
    position: f64,
    direction: f64,
}

impl Ticker {
    /// `base_velocity` is in `loop_width` units per second; its sign is the
    /// resting direction.
    pub fn new(base_velocity: f64, loop_width: f64) -> Self {
        Self {
            base_velocity,
            loop_width,
            position: 0.0,
            direction: 1.0,
        }
    }

    #[cfg(test)]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[cfg(test)]
    pub fn direction(&self) -> f64 {
        self.direction
    }

    /// Move the strip by one frame. Scrolling down (`factor > 0`) pushes
    /// the resting direction faster, scrolling up flips it.
    pub fn advance(&mut self, dt_ms: f64, velocity_factor: f64) {
        if velocity_factor < 0.0 {
            self.direction = -1.0;
        } else if velocity_factor > 0.0 {
            self.direction = 1.0;
        }
        let mut step = self.direction * self.base_velocity * (dt_ms / 1000.0);
        step += self.direction * step * velocity_factor;
        self.position = wrap(0.0, self.loop_width, self.position + step);
    }

    /// Horizontal translation in percent of the strip width.
    pub fn translate_x(&self) -> f64 {
        self.position - self.loop_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_is_seamless() {
        assert_eq!(wrap(0.0, 25.0, 30.0), 5.0);
        assert_eq!(wrap(0.0, 25.0, -5.0), 20.0);
        assert_eq!(wrap(-45.0, -20.0, -50.0), -25.0);
        assert_eq!(wrap(0.0, 25.0, 25.0), 0.0);
        assert_eq!(wrap(0.0, 0.0, 3.0), 0.0);
        assert!(wrap(0.0, 25.0, -1e-18) < 25.0);
    }

    #[test]
    fn position_is_velocity_times_time_mod_width() {
        let (v, w) = (7.0, 25.0);
        let mut ticker = Ticker::new(v, w);
        let mut t_ms = 0.0;
        for _ in 0..600 {
            ticker.advance(16.0, 0.0);
            t_ms += 16.0;
            let expected = (v * t_ms / 1000.0).rem_euclid(w);
            let diff = (ticker.position() - expected).abs();
            // near the wrap boundary either side is the same picture
            assert!(
                diff < 1e-6 || (w - diff) < 1e-6,
                "t={t_ms} got {} want {expected}",
                ticker.position()
            );
        }
    }

    #[test]
    fn negative_base_moves_left() {
        let mut ticker = Ticker::new(-1.0, 25.0);
        ticker.advance(1000.0, 0.0);
        assert!((ticker.position() - 24.0).abs() < 1e-9);
        assert!((ticker.translate_x() + 1.0).abs() < 1e-9);
    }

    #[test]
    fn scroll_down_speeds_up_scroll_up_reverses() {
        let mut resting = Ticker::new(2.0, 25.0);
        resting.advance(1000.0, 0.0);

        let mut boosted = Ticker::new(2.0, 25.0);
        boosted.advance(1000.0, 1.0);
        assert!(boosted.position() > resting.position());

        let mut reversed = Ticker::new(2.0, 25.0);
        reversed.advance(1000.0, -0.5);
        assert_eq!(reversed.direction(), -1.0);
        // flipped, lands 3 units left of zero
        assert!(reversed.position() > 20.0);
    }

    #[test]
    fn direction_sticks_after_scroll_stops() {
        let mut ticker = Ticker::new(1.0, 25.0);
        ticker.advance(16.0, -0.2);
        ticker.advance(16.0, 0.0);
        assert_eq!(ticker.direction(), -1.0);
    }

    #[test]
    fn velocity_decays_when_idle() {
        let mut vel = ScrollVelocity::new();
        vel.sample(0.0, 0.0);
        vel.sample(100.0, 16.0);
        vel.tick(16.0, 16.0);
        assert!(vel.smoothed() > 0.0);
        assert!(vel.factor() > 0.0);

        let mut now = 16.0;
        for _ in 0..200 {
            now += 16.0;
            vel.tick(now, 16.0);
        }
        assert!(vel.smoothed().abs() < 1e-3);
    }

    #[test]
    fn velocity_sign_follows_scroll_direction() {
        let mut vel = ScrollVelocity::new();
        vel.sample(500.0, 0.0);
        vel.sample(400.0, 10.0);
        vel.tick(10.0, 16.0);
        assert!(vel.factor() < 0.0);
    }
}
