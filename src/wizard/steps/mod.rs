//! Per-step validation and mutation logic. Each module owns the rules for one
//! screen and operates on the shared accumulator; navigation itself lives in
//! the session orchestrator.

pub mod categories;
pub mod confirmation;
pub mod income;
pub mod priority;
pub mod profile;
pub mod recommendation;
pub mod review;
