/// How an element animates in the first time it is shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntranceKind {
    Fade,
    /// Slide up from `from_y` px below its resting place.
    Slide { from_y: f64 },
    /// Grow from `from` scale.
    Scale { from: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub kind: EntranceKind,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Entrance {
    pub const fn fade() -> Self {
        Self {
            kind: EntranceKind::Fade,
            duration_s: 0.8,
            delay_s: 0.0,
        }
    }

    pub const fn slide_up(from_y: f64) -> Self {
        Self {
            kind: EntranceKind::Slide { from_y },
            duration_s: 0.8,
            delay_s: 0.0,
        }
    }

    pub const fn scale(from: f64) -> Self {
        Self {
            kind: EntranceKind::Scale { from },
            duration_s: 0.8,
            delay_s: 0.0,
        }
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration_s = seconds;
        self
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay_s = seconds;
        self
    }

    fn transition(&self) -> String {
        format!(
            "transition: opacity {d}s ease-out {w}s, transform {d}s ease-out {w}s;",
            d = self.duration_s,
            w = self.delay_s
        )
    }

    /// Inline style before the element has entered.
    pub fn hidden_style(&self) -> String {
        let transform = match self.kind {
            EntranceKind::Fade => "none".to_string(),
            EntranceKind::Slide { from_y } => format!("translateY({from_y}px)"),
            EntranceKind::Scale { from } => format!("scale({from})"),
        };
        format!("opacity: 0; transform: {transform}; {}", self.transition())
    }

    /// Inline style once the element has entered.
    pub fn shown_style(&self) -> String {
        let transform = match self.kind {
            EntranceKind::Fade => "none",
            EntranceKind::Slide { .. } => "translateY(0px)",
            EntranceKind::Scale { .. } => "scale(1)",
        };
        format!("opacity: 1; transform: {transform}; {}", self.transition())
    }

    pub fn style(&self, shown: bool) -> String {
        if shown {
            self.shown_style()
        } else {
            self.hidden_style()
        }
    }
}

impl Default for Entrance {
    fn default() -> Self {
        Self::slide_up(50.0)
    }
}

/// Stagger delay for the `index`-th item of a grid.
pub fn stagger(index: usize, step_s: f64) -> f64 {
    index as f64 * step_s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_styles() {
        let e = Entrance::slide_up(50.0).duration(0.6).delay(0.2);
        assert_eq!(
            e.hidden_style(),
            "opacity: 0; transform: translateY(50px); transition: opacity 0.6s ease-out 0.2s, transform 0.6s ease-out 0.2s;"
        );
        assert!(e.shown_style().starts_with("opacity: 1; transform: translateY(0px);"));
    }

    #[test]
    fn scale_and_fade_styles() {
        assert!(Entrance::scale(0.9).style(false).contains("scale(0.9)"));
        assert!(Entrance::scale(0.9).style(true).contains("scale(1)"));
        assert!(Entrance::fade().style(false).starts_with("opacity: 0; transform: none;"));
    }

    #[test]
    fn stagger_steps() {
        assert_eq!(stagger(0, 0.1), 0.0);
        assert!((stagger(2, 0.1) - 0.2).abs() < 1e-12);
    }
}
