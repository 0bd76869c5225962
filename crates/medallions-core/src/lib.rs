//! Procedural medallion layout and pattern composition.
//!
//! This crate tiles a canvas with concentric-circle medallions, samples a
//! random recipe for each one and composes them every frame against an
//! audio spectrum. It never touches a window or an audio device: drawing
//! goes through [`Painter`] and audio arrives through [`SignalSource`].

pub mod color;
pub mod compositor;
pub mod config;
pub mod driver;
pub mod geom;
pub mod layout;
pub mod medallion;
pub mod ornament;
pub mod paint;
pub mod signal;

pub use color::Rgb;
pub use compositor::{compose_frame, Frame, Layer};
pub use config::PatternConfig;
pub use driver::{Driver, FrameStats, PlaybackState};
pub use geom::{Point, Viewport};
pub use layout::build_layout;
pub use medallion::{Medallion, StyleVariant};
pub use paint::{DrawCmd, Painter, Recorder, StyleScope};
pub use signal::{SignalSource, Silence, Spectrum};
