//! The wizard itself: step logic, progress mapping, and the session
//! orchestrator that owns the accumulator and its persistence.

pub mod progress;
pub mod session;
pub mod steps;

pub use progress::*;
pub use session::*;
