//! Error types for the intro.
//!
//! Construction is the only fallible boundary: if the drawing surface
//! cannot be acquired, no partial engine is left running. Everything
//! after construction is either infallible or absorbed locally.

use std::fmt;

/// Errors that can occur while bringing the intro up.
#[derive(Debug)]
pub enum IntroError {
    /// The drawing surface could not be resolved or created.
    SurfaceNotFound(String),
    /// Failed to create the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create the window.
    Window(winit::error::OsError),
}

impl fmt::Display for IntroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntroError::SurfaceNotFound(msg) => {
                write!(f, "Drawing surface not found: {}", msg)
            }
            IntroError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            IntroError::Window(e) => write!(f, "Failed to create window: {}", e),
        }
    }
}

impl std::error::Error for IntroError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntroError::SurfaceNotFound(_) => None,
            IntroError::EventLoop(e) => Some(e),
            IntroError::Window(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for IntroError {
    fn from(e: winit::error::EventLoopError) -> Self {
        IntroError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for IntroError {
    fn from(e: winit::error::OsError) -> Self {
        IntroError::Window(e)
    }
}

impl From<pixels::Error> for IntroError {
    fn from(e: pixels::Error) -> Self {
        IntroError::SurfaceNotFound(e.to_string())
    }
}
