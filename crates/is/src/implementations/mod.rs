//! In-memory test context implementations.
//!
//! These fakes stand in for a real host when testing assertions themselves,
//! or custom helpers built on top of them.

pub mod recorder;

pub use recorder::Recorder;
