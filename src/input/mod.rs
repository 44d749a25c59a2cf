//! Input handling: platform-agnostic events, key actions, and the sampler
//! that folds each frame's events into one [`InputSample`].

/// Platform-agnostic input events.
pub mod event;
/// Bindable camera key actions.
pub mod keyboard;
/// Per-frame input snapshot types.
pub mod sample;
/// Event-to-sample folding.
pub mod sampler;

pub use event::{InputEvent, MouseButton, TouchPhase};
pub use keyboard::KeyAction;
pub use sample::{InputSample, JoystickSample, TouchSample};
pub use sampler::InputSampler;
