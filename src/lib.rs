// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Focal-point constrained camera rig for viewing a rectangular game
//! board.
//!
//! The camera pans, orbits, and zooms around the ground point it is looking
//! at, and every motion keeps that point on the board, the view angles
//! within their limits, and the eye a safe distance above the surface.
//!
//! # Key entry points
//!
//! - [`camera::CameraRig`] - per-frame driver that fuses keyboard, mouse,
//!   touch, and joystick input into a [`camera::Pose`]
//! - [`camera::CameraKinematics`] - the constrained pan/orbit/zoom core
//! - [`input::InputSampler`] - folds raw [`input::InputEvent`]s into one
//!   [`input::InputSample`] per frame
//! - [`board::BoardBounds`] - the board rectangle and camera limits
//! - [`options::Options`] - TOML-backed speeds, modes, limits, and key
//!   bindings
//!
//! # Architecture
//!
//! Events flow through the sampler into an immutable per-frame sample. The
//! rig applies each input channel in a fixed order, and each operation
//! computes a whole new pose before replacing the old one. A render thread
//! can follow the camera through a lock-free triple buffer
//! ([`camera::PoseReader`]).

pub mod board;
pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod replay;
pub mod util;

pub use camera::{CameraRig, Pose};
pub use error::BoardcamError;
pub use input::{InputEvent, InputSample, InputSampler};
pub use options::Options;
