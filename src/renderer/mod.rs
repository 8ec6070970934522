//! Canvas 2D presentation
//!
//! Draws a `FrameView`; never touches the session.

pub mod canvas;

pub use canvas::CanvasRenderer;
