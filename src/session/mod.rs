//! View state
//!
//! The session data model, its transitions, and the pure flags-to-controls
//! mapping the renderer uses.

pub mod state;
pub mod view;

pub use state::{validate_input, Alert, Phase, RocketState, Session, SessionError};
pub use view::{controls, Control, ControlSet};
