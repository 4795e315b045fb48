//! Process bootstrap helpers.
//!
//! - **diagnostics**: `tracing-subscriber` init for the program's own
//!   operational output. Separate from the [`SharedLogger`](crate::logger::SharedLogger)
//!   sink, which only ever receives caller records.

pub mod diagnostics;
