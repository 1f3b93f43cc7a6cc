//! # State Modules
//!
//! - `calendar_state` - visible week and today's date
//! - `modal_state` - booking dialog state machine and transition outcomes

pub mod calendar_state;
pub mod modal_state;

pub use calendar_state::*;
pub use modal_state::*;
