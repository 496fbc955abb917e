use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // verbose while developing with `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// How long the loading screen counts before revealing the page.
pub const LOADING_DURATION_MS: u32 = 2200;
/// Fade-out of the loading screen after it reaches 100%.
pub const LOADING_FADE_MS: u32 = 500;
/// The "thank you" state of the contact form lasts this long.
pub const FORM_RESET_MS: u32 = 3000;
/// Frame interval for time-driven effects (ticker, cursor glow).
pub const FRAME_MS: u32 = 16;

pub const REVEAL_START: &str = "start 0.9";
pub const REVEAL_END: &str = "start 0.3";
/// The first section heading waits until it is this far inside the screen.
/// Every other entrance fires as soon as it touches the viewport.
pub const HEADLINE_MARGIN_PX: f64 = 100.0;
/// Delay step between cards of the same grid.
pub const STAGGER_STEP_S: f64 = 0.1;

/// Copies of the ticker text laid end to end. The loop width is one copy.
pub const TICKER_COPIES: usize = 4;

/// `<html data-variant="...">` selects the page content.
pub const VARIANT_ATTRIBUTE: &str = "data-variant";
