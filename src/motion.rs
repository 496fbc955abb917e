//! Framework-free animation math: scroll tracking, value mapping, tickers
//! and the small state machines the page components drive.
//!
//! Nothing in here touches `web_sys`, so all of it runs under `cargo test`.

pub mod entrance;
pub mod follow;
pub mod gate;
pub mod observer;
pub mod range;
pub mod scroll;
pub mod ticker;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MotionError {
    #[error("a range mapper needs at least two breakpoints, got {0}")]
    TooFewBreakpoints(usize),
    #[error("{inputs} breakpoints do not match {outputs} outputs")]
    LengthMismatch { inputs: usize, outputs: usize },
    #[error("breakpoints must be finite and strictly increasing")]
    UnorderedBreakpoints,
    #[error("invalid scroll edge `{0}`")]
    InvalidEdge(String),
}
