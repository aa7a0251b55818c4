//! TouchTrace — touch and pointer gesture visualizer for Rust.
//!
//! Tracks per-contact origins across a gesture, derives displacement, duration,
//! pinch and rotation metrics, and reports them as human-readable log lines plus
//! a single visual feedback marker.

pub mod config;
pub mod event;
pub mod logger;
pub mod marker;
pub mod session;
pub mod sink;
pub mod source;

pub use config::*;
pub use event::*;
pub use logger::*;
pub use marker::*;
pub use session::*;
pub use sink::*;
pub use source::*;
