//! Shared utilities.
//!
//! Currently just the frame clock that feeds time steps to the rig.

pub mod frame_timing;

pub use frame_timing::FrameClock;
