//! Pure domain models for the wizard (priority, income, profile, budget,
//! accumulator state). No I/O, no storage. Only data types and core enums.

pub mod budget;
pub mod income;
pub mod priority;
pub mod profile;
pub mod state;
pub mod step;

pub use budget::*;
pub use income::*;
pub use priority::*;
pub use profile::*;
pub use state::*;
pub use step::*;
