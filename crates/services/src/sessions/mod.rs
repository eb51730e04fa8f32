mod draw;
mod progress;
mod service;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::SessionProgress;
pub use service::QuizSession;
